#![allow(clippy::unwrap_used, clippy::expect_used)]

use diffcheck_core::diff::{align, classify, diff_mappings, diff_sequences, LineCost};
use diffcheck_core::{Value, ValueMap};
use proptest::prelude::*;

/// Small alphabet so that random sequences share elements.
fn sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..12)
}

fn lcs_len(a: &[u8], b: &[u8]) -> usize {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }
    table[a.len()][b.len()]
}

proptest! {
    /// Matched pairs never cross and the two match vectors agree.
    #[test]
    fn alignment_is_monotonic(exp in sequence(), act in sequence()) {
        let a = align(exp.len(), act.len(), &LineCost::new(&exp, &act)).unwrap();
        let pairs: Vec<_> = a.pairs().collect();
        for w in pairs.windows(2) {
            prop_assert!(w[0].0 < w[1].0 && w[0].1 < w[1].1, "crossing pairs {:?}", w);
        }
        for (i, j) in &pairs {
            prop_assert_eq!(a.actual[*j], Some(*i));
        }
        let matched_act = a.actual.iter().filter(|m| m.is_some()).count();
        prop_assert_eq!(matched_act, pairs.len());
    }

    /// With substitution at two indels the optimum keeps every common element.
    #[test]
    fn alignment_cost_is_minimal(exp in sequence(), act in sequence()) {
        let a = align(exp.len(), act.len(), &LineCost::new(&exp, &act)).unwrap();
        let expected_cost = exp.len() + act.len() - 2 * lcs_len(&exp, &act);
        prop_assert_eq!(a.cost, expected_cost as i64);
    }

    /// Swapping sides keeps the cost and swaps the removed and added counts.
    #[test]
    fn swapping_sides_swaps_labels(exp in sequence(), act in sequence()) {
        let forward = align(exp.len(), act.len(), &LineCost::new(&exp, &act)).unwrap();
        let backward = align(act.len(), exp.len(), &LineCost::new(&act, &exp)).unwrap();
        prop_assert_eq!(forward.cost, backward.cost);

        let ab = diff_sequences(&exp, &act).unwrap();
        let ba = diff_sequences(&act, &exp).unwrap();
        prop_assert_eq!(ab.removed(), ba.added());
        prop_assert_eq!(ab.added(), ba.removed());
    }

    /// A sequence diffed against itself yields no lines.
    #[test]
    fn sequence_identity(exp in sequence()) {
        let report = diff_sequences(&exp, &exp.clone()).unwrap();
        prop_assert!(report.lines.is_empty());
        prop_assert_eq!(report.summary.to_string(), format!("both {} lines", exp.len()));
    }

    /// Every difference line maps back to an element on its own side.
    #[test]
    fn sequence_diff_accounts_for_every_unequal_element(exp in sequence(), act in sequence()) {
        let report = diff_sequences(&exp, &act).unwrap();
        let a = align(exp.len(), act.len(), &LineCost::new(&exp, &act)).unwrap();
        let equal_matches = a.pairs().filter(|(i, j)| exp[*i] == act[*j]).count();
        prop_assert_eq!(report.removed(), exp.len() - equal_matches);
        prop_assert_eq!(report.added(), act.len() - equal_matches);
    }

    /// A mapping diffed against itself yields no lines.
    #[test]
    fn mapping_identity(map in prop::collection::btree_map(0u16..50, 0u8..5, 0..10)) {
        let report = diff_mappings(&map, &map.clone());
        prop_assert!(report.lines.is_empty());
    }

    /// Each key lands in at most one class and changed keys exist on both sides.
    #[test]
    fn mapping_classes_are_disjoint(
        exp in prop::collection::btree_map(0u16..20, 0u8..3, 0..10),
        act in prop::collection::btree_map(0u16..20, 0u8..3, 0..10),
    ) {
        let c = classify(&exp, &act);
        for &k in &c.missing {
            prop_assert!(!act.contains_key(k));
        }
        for &k in &c.extra {
            prop_assert!(!exp.contains_key(k));
        }
        for &k in &c.changed {
            prop_assert_ne!(exp.get(k), act.get(k));
            prop_assert!(exp.contains_key(k) && act.contains_key(k));
        }
        let classified = c.missing.len() + c.changed.len() + c.extra.len();
        let differing_exp = exp.iter().filter(|&(k, v)| act.get(k) != Some(v)).count();
        let only_act = act.keys().filter(|&k| !exp.contains_key(k)).count();
        prop_assert_eq!(classified, differing_exp + only_act);
    }

    /// Int and string keys render alike but are never matched with each other.
    #[test]
    fn colliding_keys_never_match(keys in prop::collection::btree_set(0i64..20, 0..8)) {
        let exp: ValueMap = keys.iter().map(|k| (Value::from(*k), Value::from(0))).collect();
        let act: ValueMap = keys
            .iter()
            .map(|k| (Value::from(k.to_string()), Value::from(0)))
            .collect();
        let c = classify(&exp, &act);
        prop_assert!(c.changed.is_empty());
        prop_assert_eq!(c.missing.len(), keys.len());
        prop_assert_eq!(c.extra.len(), keys.len());
    }
}
