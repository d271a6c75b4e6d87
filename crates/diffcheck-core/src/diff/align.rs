//! Minimum-cost global alignment of two sequences.
//!
//! A Needleman-Wunsch style dynamic program over the full `(n+1) x (m+1)`
//! cost table. Unlike an LCS it considers substituting unequal elements, so a
//! single changed line pairs up with its counterpart instead of splitting the
//! surrounding matches.

use crate::errors::{DiffCheckError, ExError, Result};

/// Cost of an edit operation. Costs must be non-negative.
pub type Cost = i64;

/// Cost of pairing two equal elements.
pub const MATCH_COST: Cost = 0;
/// Cost of pairing two unequal elements; exactly one deletion plus one insertion.
pub const SUBSTITUTION_COST: Cost = 2;
/// Cost of leaving one element unmatched.
pub const INDEL_COST: Cost = 1;

/// Pairwise costs for an alignment. `exp` indexes the expected sequence and
/// `act` the actual one.
pub trait CostModel {
    fn substitution(&self, exp: usize, act: usize) -> Cost;
    fn insertion(&self, act: usize) -> Cost;
    fn deletion(&self, exp: usize) -> Cost;
}

/// A [`CostModel`] built from three closures.
pub struct FnCostModel<S, I, D> {
    substitution: S,
    insertion: I,
    deletion: D,
}

impl<S, I, D> FnCostModel<S, I, D>
where
    S: Fn(usize, usize) -> Cost,
    I: Fn(usize) -> Cost,
    D: Fn(usize) -> Cost,
{
    pub fn new(substitution: S, insertion: I, deletion: D) -> Self {
        Self {
            substitution,
            insertion,
            deletion,
        }
    }
}

impl<S, I, D> CostModel for FnCostModel<S, I, D>
where
    S: Fn(usize, usize) -> Cost,
    I: Fn(usize) -> Cost,
    D: Fn(usize) -> Cost,
{
    fn substitution(&self, exp: usize, act: usize) -> Cost {
        (self.substitution)(exp, act)
    }

    fn insertion(&self, act: usize) -> Cost {
        (self.insertion)(act)
    }

    fn deletion(&self, exp: usize) -> Cost {
        (self.deletion)(exp)
    }
}

/// The cost model used for line and element diffs: free matches,
/// substitution at twice the unit indel cost.
pub struct LineCost<'a, T> {
    expected: &'a [T],
    actual: &'a [T],
}

impl<'a, T: PartialEq> LineCost<'a, T> {
    pub fn new(expected: &'a [T], actual: &'a [T]) -> Self {
        Self { expected, actual }
    }
}

impl<T: PartialEq> CostModel for LineCost<'_, T> {
    fn substitution(&self, exp: usize, act: usize) -> Cost {
        if self.expected[exp] == self.actual[act] {
            MATCH_COST
        } else {
            SUBSTITUTION_COST
        }
    }

    fn insertion(&self, _act: usize) -> Cost {
        INDEL_COST
    }

    fn deletion(&self, _exp: usize) -> Cost {
        INDEL_COST
    }
}

/// Result of [`align`]: the total cost plus, for every position on each
/// side, the position it is matched to (`None` when deleted/inserted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub cost: Cost,
    pub expected: Vec<Option<usize>>,
    pub actual: Vec<Option<usize>>,
}

impl Alignment {
    /// Matched `(exp, act)` pairs in increasing order of both indices.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.expected
            .iter()
            .enumerate()
            .filter_map(|(i, m)| m.map(|j| (i, j)))
    }

    pub fn is_matched_expected(&self, exp: usize) -> bool {
        self.expected.get(exp).is_some_and(Option::is_some)
    }

    pub fn is_matched_actual(&self, act: usize) -> bool {
        self.actual.get(act).is_some_and(Option::is_some)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Diagonal,
    Delete,
    Insert,
}

fn checked(cost: Cost, callback: &'static str, at: impl FnOnce() -> String) -> Result<Cost> {
    if cost < 0 {
        return Err(ExError::from(DiffCheckError::NegativeCost {
            callback,
            at: at(),
            cost,
        }));
    }
    Ok(cost)
}

/// Align a sequence of length `n` against one of length `m`.
///
/// Ties are broken substitution first, then deletion, then insertion, which
/// keeps matched pairs as diagonal as possible. O(n·m) time and space.
///
/// # Errors
///
/// - `InvalidCostModel`: a callback returned a negative cost
pub fn align<C: CostModel + ?Sized>(n: usize, m: usize, costs: &C) -> Result<Alignment> {
    let deletions = (0..n)
        .map(|i| checked(costs.deletion(i), "deletion", || format!("exp[{}]", i)))
        .collect::<Result<Vec<_>>>()?;
    let insertions = (0..m)
        .map(|j| checked(costs.insertion(j), "insertion", || format!("act[{}]", j)))
        .collect::<Result<Vec<_>>>()?;

    let width = m + 1;
    let mut table: Vec<Cost> = vec![0; (n + 1) * width];
    let mut steps: Vec<Step> = vec![Step::Diagonal; (n + 1) * width];

    for i in 1..=n {
        table[i * width] = table[(i - 1) * width].saturating_add(deletions[i - 1]);
        steps[i * width] = Step::Delete;
    }
    for j in 1..=m {
        table[j] = table[j - 1].saturating_add(insertions[j - 1]);
        steps[j] = Step::Insert;
    }

    for i in 1..=n {
        for j in 1..=m {
            let sub = checked(costs.substitution(i - 1, j - 1), "substitution", || {
                format!("exp[{}], act[{}]", i - 1, j - 1)
            })?;
            let diagonal = table[(i - 1) * width + j - 1].saturating_add(sub);
            let delete = table[(i - 1) * width + j].saturating_add(deletions[i - 1]);
            let insert = table[i * width + j - 1].saturating_add(insertions[j - 1]);

            let (cost, step) = if diagonal <= delete && diagonal <= insert {
                (diagonal, Step::Diagonal)
            } else if delete <= insert {
                (delete, Step::Delete)
            } else {
                (insert, Step::Insert)
            };
            table[i * width + j] = cost;
            steps[i * width + j] = step;
        }
    }

    let mut expected = vec![None; n];
    let mut actual = vec![None; m];
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        match steps[i * width + j] {
            Step::Diagonal => {
                expected[i - 1] = Some(j - 1);
                actual[j - 1] = Some(i - 1);
                i -= 1;
                j -= 1;
            }
            Step::Delete => i -= 1,
            Step::Insert => j -= 1,
        }
    }

    Ok(Alignment {
        cost: table[n * width + m],
        expected,
        actual,
    })
}
