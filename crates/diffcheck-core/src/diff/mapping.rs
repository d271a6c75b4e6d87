//! Mapping diff: key classification and rendering.
//!
//! Keys are sorted by their rendering and merge-joined. Renderings can
//! collide for keys that are not equal, so within a run of equal renderings
//! the classifier falls back to true key equality before deciding whether an
//! entry is missing, changed or extra.

use crate::diff::report::{DiffLine, DiffReport, LineLabel, Summary, Unit};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt::{self, Display};
use std::hash::{BuildHasher, Hash};

/// Rendering of [`SetMember`].
pub const SET_MARKER: &str = "{}";

/// Value stored for every member of a set viewed as a [`Mapping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetMember;

impl Display for SetMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SET_MARKER)
    }
}

static SET_MEMBER: SetMember = SetMember;

/// A read-only key/value view the classifier can work over.
///
/// Keys and values must be comparable and displayable: equality decides
/// matches, the rendering drives sorting and the report text.
pub trait Mapping {
    type Key: PartialEq + Display;
    type Value: PartialEq + Display;

    /// All entries, in the mapping's own iteration order
    fn entries(&self) -> Vec<(&Self::Key, &Self::Value)>;

    /// Look up the value stored under a key equal to `key`
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the values carry no information and the report shows keys only.
    fn is_set(&self) -> bool {
        false
    }
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Eq + Hash + Display,
    V: PartialEq + Display,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Ord + Display,
    V: PartialEq + Display,
{
    type Key = K;
    type Value = V;

    fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K, S> Mapping for HashSet<K, S>
where
    K: Eq + Hash + Display,
    S: BuildHasher,
{
    type Key = K;
    type Value = SetMember;

    fn entries(&self) -> Vec<(&K, &SetMember)> {
        self.iter().map(|k| (k, &SET_MEMBER)).collect()
    }

    fn lookup(&self, key: &K) -> Option<&SetMember> {
        self.contains(key).then_some(&SET_MEMBER)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn is_set(&self) -> bool {
        true
    }
}

impl<K> Mapping for BTreeSet<K>
where
    K: Ord + Display,
{
    type Key = K;
    type Value = SetMember;

    fn entries(&self) -> Vec<(&K, &SetMember)> {
        self.iter().map(|k| (k, &SET_MEMBER)).collect()
    }

    fn lookup(&self, key: &K) -> Option<&SetMember> {
        self.contains(key).then_some(&SET_MEMBER)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn is_set(&self) -> bool {
        true
    }
}

/// Keys sorted into the three difference kinds. A key appears in at most one
/// list; keys present on both sides with equal values appear in none.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyClassification<'a, K> {
    /// Present only in expected
    pub missing: Vec<&'a K>,
    /// Present in both with unequal values
    pub changed: Vec<&'a K>,
    /// Present only in actual
    pub extra: Vec<&'a K>,
}

impl<K> KeyClassification<'_, K> {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.changed.is_empty() && self.extra.is_empty()
    }
}

struct SortedEntry<'a, K, V> {
    repr: String,
    key: &'a K,
    value: &'a V,
}

/// Entries sorted by key rendering. The sort is stable, so keys that render
/// identically keep their extraction order.
fn sorted_entries<M: Mapping>(map: &M) -> Vec<SortedEntry<'_, M::Key, M::Value>> {
    let mut entries: Vec<_> = map
        .entries()
        .into_iter()
        .map(|(key, value)| SortedEntry {
            repr: key.to_string(),
            key,
            value,
        })
        .collect();
    entries.sort_by(|a, b| a.repr.cmp(&b.repr));
    entries
}

/// Classify the keys of `expected` and `actual`.
///
/// Each list is ordered by key rendering.
pub fn classify<'a, M: Mapping>(expected: &'a M, actual: &'a M) -> KeyClassification<'a, M::Key> {
    let exp = sorted_entries(expected);
    let act = sorted_entries(actual);

    let mut missing = Vec::new();
    let mut changed = Vec::new();
    let mut extra = Vec::new();

    let (mut i, mut j) = (0, 0);
    while i < exp.len() && j < act.len() {
        match exp[i].repr.cmp(&act[j].repr) {
            Ordering::Less => {
                missing.push(exp[i].key);
                i += 1;
            }
            Ordering::Greater => {
                extra.push(act[j].key);
                j += 1;
            }
            Ordering::Equal => {
                // Equal renderings do not imply equal keys: settle the run by true equality.
                let repr = act[j].repr.as_str();
                while i < exp.len() && exp[i].repr == repr {
                    match actual.lookup(exp[i].key) {
                        None => missing.push(exp[i].key),
                        Some(value) if value != exp[i].value => changed.push(exp[i].key),
                        Some(_) => {}
                    }
                    i += 1;
                }
                while j < act.len() && act[j].repr == repr {
                    if expected.lookup(act[j].key).is_none() {
                        extra.push(act[j].key);
                    }
                    j += 1;
                }
            }
        }
    }
    missing.extend(exp[i..].iter().map(|e| e.key));
    extra.extend(act[j..].iter().map(|e| e.key));

    KeyClassification {
        missing,
        changed,
        extra,
    }
}

fn value_text<M: Mapping>(map: &M, key: &M::Key) -> Option<String> {
    if map.is_set() {
        return None;
    }
    map.lookup(key).map(ToString::to_string)
}

/// Render a classification: missing keys, then changed pairs, then extra keys.
pub fn render_classification<M: Mapping>(
    classification: &KeyClassification<'_, M::Key>,
    expected: &M,
    actual: &M,
) -> DiffReport {
    let mut report = DiffReport::new(Summary {
        expected_len: expected.len(),
        actual_len: actual.len(),
        unit: Unit::Entries,
    });
    let label = |key: &M::Key| LineLabel::Key(key.to_string());

    for &key in &classification.missing {
        report.push(DiffLine::removed(label(key), value_text(expected, key)));
    }
    for &key in &classification.changed {
        report.push(DiffLine::removed(label(key), value_text(expected, key)));
        report.push(DiffLine::added(label(key), value_text(actual, key)));
    }
    for &key in &classification.extra {
        report.push(DiffLine::added(label(key), value_text(actual, key)));
    }

    report
}

/// Classify and render in one step.
pub fn diff_mappings<M: Mapping>(expected: &M, actual: &M) -> DiffReport {
    let classification = classify(expected, actual);
    render_classification(&classification, expected, actual)
}
