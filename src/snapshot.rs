use std::iter::FusedIterator;
use std::sync::Arc;

use serde::Serialize;

use crate::symbols::Symbol;

/// One observable moment of the sort.
///
/// `sequence` is frozen: the generator swaps into a fresh buffer, so a
/// snapshot never changes after it has been yielded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot<T = Symbol> {
    /// Full sequence state at this moment
    pub sequence: Arc<[T]>,
    /// Boundary of the sorted prefix being extended
    pub i: usize,
    /// Current comparison/shift position
    pub j: usize,
}

impl<T> Snapshot<T> {
    pub fn new(sequence: impl Into<Arc<[T]>>, i: usize, j: usize) -> Self {
        Self {
            sequence: sequence.into(),
            i,
            j,
        }
    }
}

/// Ordered snapshots recorded for one input.
///
/// Cloning is cheap; every clone shares the same snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Log<T = Symbol> {
    snapshots: Arc<[Snapshot<T>]>,
}

impl<T> Log<T> {
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Snapshot<T>> {
        self.snapshots.get(position)
    }

    pub fn last(&self) -> Option<&Snapshot<T>> {
        self.snapshots.last()
    }

    /// Index of the final snapshot, 0 for an empty log.
    pub fn last_index(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    pub fn as_slice(&self) -> &[Snapshot<T>] {
        &self.snapshots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot<T>> {
        self.snapshots.iter()
    }
}

impl<T> FromIterator<Snapshot<T>> for Log<T> {
    fn from_iter<I: IntoIterator<Item = Snapshot<T>>>(iter: I) -> Self {
        Self {
            snapshots: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Log<T> {
    type Item = &'a Snapshot<T>;
    type IntoIter = std::slice::Iter<'a, Snapshot<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

/// Pull-based insertion sort that yields a [`Snapshot`] before every shift
/// and once at the end of every outer pass.
#[derive(Debug, Clone)]
pub struct InsertionSortSteps<T> {
    sequence: Arc<[T]>,
    i: usize,
    j: usize,
    swap_pending: bool,
}

impl<T: Ord + Clone> InsertionSortSteps<T> {
    pub fn new(input: &[T]) -> Self {
        Self {
            sequence: Arc::from(input),
            i: 1,
            j: 1,
            swap_pending: false,
        }
    }

    fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            sequence: Arc::clone(&self.sequence),
            i: self.i,
            j: self.j,
        }
    }

    fn swap_down(&mut self) {
        // The previous snapshot still holds the old buffer.
        let mut next = self.sequence.to_vec();
        next.swap(self.j, self.j - 1);
        self.sequence = next.into();
        self.j -= 1;
    }
}

impl<T: Ord + Clone> Iterator for InsertionSortSteps<T> {
    type Item = Snapshot<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.swap_pending {
            self.swap_down();
            self.swap_pending = false;
        }
        if self.i >= self.sequence.len() {
            return None;
        }
        let snapshot = self.snapshot();
        if self.j > 0 && self.sequence[self.j] < self.sequence[self.j - 1] {
            self.swap_pending = true;
        } else {
            self.i += 1;
            self.j = self.i;
        }
        Some(snapshot)
    }
}

impl<T: Ord + Clone> FusedIterator for InsertionSortSteps<T> {}

/// Lazily steps through the insertion sort of `input`.
pub fn steps<T: Ord + Clone>(input: &[T]) -> InsertionSortSteps<T> {
    InsertionSortSteps::new(input)
}

/// Records the complete snapshot log for `input`.
///
/// Pure and deterministic: the same input always yields an equal log.
/// Inputs shorter than two elements produce an empty log.
pub fn generate<T: Ord + Clone>(input: &[T]) -> Log<T> {
    let log: Log<T> = steps(input).collect();
    log::debug!("generated {} snapshots for {} symbols", log.len(), input.len());
    log
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn seq(snapshot: &Snapshot<char>) -> String {
        snapshot.sequence.iter().collect()
    }

    fn inversions(input: &[char]) -> usize {
        let mut count = 0;
        for a in 0..input.len() {
            for b in a + 1..input.len() {
                if input[b] < input[a] {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn two_element_example() {
        let log = generate(&chars("BA"));
        assert_eq!(
            log.as_slice(),
            &[
                Snapshot::new(vec!['B', 'A'], 1, 1),
                Snapshot::new(vec!['A', 'B'], 1, 0),
            ]
        );
    }

    #[test]
    fn sorted_pair_emits_single_post_pass_snapshot() {
        let log = generate(&chars("AB"));
        assert_eq!(log.as_slice(), &[Snapshot::new(vec!['A', 'B'], 1, 1)]);
    }

    #[test]
    fn equal_elements_never_shift() {
        let log = generate(&chars("AAA"));
        let positions: Vec<(usize, usize)> = log.iter().map(|s| (s.i, s.j)).collect();
        assert_eq!(positions, vec![(1, 1), (2, 2)]);
        assert!(log.iter().all(|s| seq(s) == "AAA"));
    }

    #[test]
    fn stable_for_equal_keys() {
        #[derive(Debug, Clone)]
        struct Tagged {
            key: u8,
            tag: char,
        }
        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.key == other.key
            }
        }
        impl Eq for Tagged {}
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.key.cmp(&other.key)
            }
        }

        let input = vec![
            Tagged { key: 1, tag: 'a' },
            Tagged { key: 0, tag: 'x' },
            Tagged { key: 1, tag: 'b' },
            Tagged { key: 0, tag: 'y' },
        ];
        let log = generate(&input);
        let tags: Vec<char> = log
            .last()
            .map(|s| s.sequence.iter().map(|t| t.tag).collect())
            .unwrap_or_default();
        assert_eq!(tags, vec!['x', 'y', 'a', 'b']);
    }

    #[rstest]
    #[case("CBA", &[("CBA", 1, 1), ("BCA", 1, 0), ("BCA", 2, 2), ("BAC", 2, 1), ("ABC", 2, 0)])]
    #[case("ACB", &[("ACB", 1, 1), ("ACB", 2, 2), ("ABC", 2, 1)])]
    fn records_every_shift(#[case] input: &str, #[case] expected: &[(&str, usize, usize)]) {
        let log = generate(&chars(input));
        let actual: Vec<(String, usize, usize)> =
            log.iter().map(|s| (seq(s), s.i, s.j)).collect();
        let expected: Vec<(String, usize, usize)> = expected
            .iter()
            .map(|(s, i, j)| (s.to_string(), *i, *j))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn untouched_sequences_share_a_buffer() {
        let log = generate(&chars("ACB"));
        assert!(Arc::ptr_eq(&log.as_slice()[0].sequence, &log.as_slice()[1].sequence));
        assert!(!Arc::ptr_eq(&log.as_slice()[1].sequence, &log.as_slice()[2].sequence));
    }

    #[test]
    fn iterator_is_fused() {
        let mut it = steps(&chars("BA"));
        assert!(it.next().is_some());
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn log_serializes_as_list() {
        let log = generate(&chars("BA"));
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"sequence": ["B", "A"], "i": 1, "j": 1},
                {"sequence": ["A", "B"], "i": 1, "j": 0},
            ])
        );
    }

    proptest! {
        #[test]
        fn short_inputs_yield_empty_log(input in prop::collection::vec(any::<char>(), 0..2)) {
            prop_assert!(generate(&input).is_empty());
        }

        #[test]
        fn last_snapshot_is_sorted(input in prop::collection::vec(prop::char::range('A', 'Z'), 2..24)) {
            let log = generate(&input);
            let last = log.last().map(|s| s.sequence.to_vec()).unwrap_or_default();
            let mut sorted = input.clone();
            sorted.sort();
            prop_assert_eq!(last, sorted);
        }

        #[test]
        fn generation_is_idempotent(input in prop::collection::vec(prop::char::range('a', 'f'), 0..24)) {
            prop_assert_eq!(generate(&input), generate(&input));
        }

        #[test]
        fn history_is_never_rewritten(input in prop::collection::vec(prop::char::range('a', 'f'), 0..24)) {
            let mut emitted = Vec::new();
            let mut reference = Vec::new();
            for snapshot in steps(&input) {
                reference.push(snapshot.sequence.to_vec());
                emitted.push(snapshot);
            }
            for (snapshot, copy) in emitted.iter().zip(&reference) {
                prop_assert_eq!(&snapshot.sequence[..], &copy[..]);
            }
        }

        #[test]
        fn one_snapshot_per_pass_plus_one_per_inversion(
            input in prop::collection::vec(prop::char::range('a', 'f'), 1..24),
        ) {
            let log = generate(&input);
            prop_assert_eq!(log.len(), input.len() - 1 + inversions(&input));
        }

        #[test]
        fn markers_stay_in_bounds(input in prop::collection::vec(prop::char::range('a', 'f'), 2..24)) {
            for snapshot in &generate(&input) {
                prop_assert!(snapshot.i < input.len());
                prop_assert!(snapshot.j <= snapshot.i);
            }
        }
    }
}
