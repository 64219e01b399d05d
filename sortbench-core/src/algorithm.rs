//! Sorting Strategies
//!
//! The five algorithms under measurement, dispatched through a single enum.
//! Every variant sorts a mutable slice in place into non-decreasing order and
//! keeps no state between invocations; quicksort's pivot selection draws from
//! an explicit `Rng` so runs can be made reproducible in tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the five sorting strategies under measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Adjacent-pair passes with early exit on a swap-free pass.
    Bubble,
    /// Shift-based insertion; near O(n) on sorted input.
    Insertion,
    /// Minimum selection over the unsorted suffix; O(n²) in every case.
    Selection,
    /// Top-down recursive merge with temporary buffers; stable.
    Merge,
    /// Randomized-pivot Lomuto quicksort with bounded stack depth.
    Quick,
}

impl Algorithm {
    /// All strategies in the fixed measurement order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Stable identifier used as a grouping key in reports and CSV output.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// Sort `data` in place into non-decreasing order.
    ///
    /// `rng` is only consulted by [`Algorithm::Quick`] for pivot selection;
    /// the other variants are fully deterministic. Slices of length 0 or 1
    /// are valid and left untouched.
    pub fn sort<R: Rng>(self, data: &mut [i32], rng: &mut R) {
        match self {
            Algorithm::Bubble => bubble_sort(data),
            Algorithm::Insertion => insertion_sort(data),
            Algorithm::Selection => selection_sort(data),
            Algorithm::Merge => merge_sort(data),
            Algorithm::Quick => quick_sort(data, rng),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn bubble_sort(data: &mut [i32]) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - i {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        // A swap-free pass means the slice is already sorted
        if !swapped {
            break;
        }
    }
}

fn insertion_sort(data: &mut [i32]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

fn selection_sort(data: &mut [i32]) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if data[j] < data[min] {
                min = j;
            }
        }
        data.swap(i, min);
    }
}

fn merge_sort(data: &mut [i32]) {
    if data.len() < 2 {
        return;
    }
    let mid = data.len() / 2;
    merge_sort(&mut data[..mid]);
    merge_sort(&mut data[mid..]);
    merge(data, mid);
}

/// Linear merge of the two sorted halves split at `mid`.
fn merge(data: &mut [i32], mid: usize) {
    let left = data[..mid].to_vec();
    let right = data[mid..].to_vec();

    let mut i = 0;
    let mut j = 0;
    for slot in data.iter_mut() {
        // `<=` keeps equal keys in left-half order (stability)
        if i < left.len() && (j >= right.len() || left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

fn quick_sort<R: Rng>(mut data: &mut [i32], rng: &mut R) {
    // Recurse into the smaller partition and loop on the larger one so the
    // stack stays O(log n) even on adversarial inputs.
    while data.len() > 1 {
        let p = partition(data, rng);
        let (left, rest) = data.split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() <= right.len() {
            quick_sort(left, rng);
            data = right;
        } else {
            quick_sort(right, rng);
            data = left;
        }
    }
}

/// Lomuto partition around a uniformly chosen pivot; returns the pivot's
/// final index.
fn partition<R: Rng>(data: &mut [i32], rng: &mut R) -> usize {
    let last = data.len() - 1;
    let pivot_index = rng.gen_range(0..data.len());
    data.swap(pivot_index, last);

    let pivot = data[last];
    let mut store = 0;
    for i in 0..last {
        if data[i] < pivot {
            data.swap(i, store);
            store += 1;
        }
    }
    data.swap(store, last);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_sorted(data: &[i32]) -> bool {
        data.windows(2).all(|w| w[0] <= w[1])
    }

    /// Sort `input` with every strategy and check sortedness + permutation
    /// invariance against the standard library's sort.
    fn check_all_strategies(input: &[i32]) {
        let mut expected = input.to_vec();
        expected.sort();

        for algorithm in Algorithm::ALL {
            let mut rng = StdRng::seed_from_u64(7);
            let mut data = input.to_vec();
            algorithm.sort(&mut data, &mut rng);
            assert!(is_sorted(&data), "{} left data unsorted", algorithm);
            assert_eq!(data, expected, "{} changed the multiset", algorithm);
        }
    }

    #[test]
    fn test_empty_and_single_are_noops() {
        check_all_strategies(&[]);
        check_all_strategies(&[42]);
    }

    #[test]
    fn test_random_input() {
        let mut rng = StdRng::seed_from_u64(99);
        let input: Vec<i32> = (0..500).map(|_| rng.gen_range(0..10_000)).collect();
        check_all_strategies(&input);
    }

    #[test]
    fn test_already_sorted_input() {
        let input: Vec<i32> = (0..300).collect();
        check_all_strategies(&input);
    }

    #[test]
    fn test_reverse_sorted_input() {
        let input: Vec<i32> = (0..300).rev().collect();
        check_all_strategies(&input);
    }

    #[test]
    fn test_duplicate_heavy_input() {
        let input: Vec<i32> = (0..400).map(|i| i % 7).collect();
        check_all_strategies(&input);
    }

    #[test]
    fn test_two_elements() {
        check_all_strategies(&[2, 1]);
        check_all_strategies(&[1, 2]);
        check_all_strategies(&[3, 3]);
    }

    #[test]
    fn test_names_are_stable_and_distinct() {
        let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec!["bubble", "insertion", "selection", "merge", "quick"]
        );
    }

    #[test]
    fn test_quick_sort_deep_adversarial_input() {
        // Large already-sorted input; bounded-stack recursion must not overflow
        let input: Vec<i32> = (0..50_000).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let mut data = input.clone();
        Algorithm::Quick.sort(&mut data, &mut rng);
        assert_eq!(data, input);
    }
}
