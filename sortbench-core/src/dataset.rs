//! Dataset Generation
//!
//! One `Dataset` per scheduled size: a random base array plus its ascending
//! and descending views. The three views share the same multiset of values,
//! so every case sorts exactly the same data in a different initial order.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) for generated values.
const VALUE_RANGE: i32 = 10_000;

/// Which dataset view a trial sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseKind {
    /// The random base array.
    Average,
    /// The ascending view; fastest input for most comparison sorts.
    Best,
    /// The descending view; slowest input for most comparison sorts.
    Worst,
}

impl CaseKind {
    /// All cases in the fixed measurement order.
    pub const ALL: [CaseKind; 3] = [CaseKind::Average, CaseKind::Best, CaseKind::Worst];

    /// Stable identifier used in reports and CSV output.
    pub fn label(self) -> &'static str {
        match self {
            CaseKind::Average => "average",
            CaseKind::Best => "best",
            CaseKind::Worst => "worst",
        }
    }
}

impl std::fmt::Display for CaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A fixed-length dataset with its three immutable views.
#[derive(Debug, Clone)]
pub struct Dataset {
    base: Vec<i32>,
    sorted: Vec<i32>,
    reversed: Vec<i32>,
}

impl Dataset {
    /// Generate a dataset of `size` values uniformly drawn from `[0, 10000)`.
    ///
    /// The ascending view is a stable sort of the base; the descending view is
    /// the ascending view reversed.
    pub fn generate<R: Rng>(size: usize, rng: &mut R) -> Self {
        let base: Vec<i32> = (0..size).map(|_| rng.gen_range(0..VALUE_RANGE)).collect();

        let mut sorted = base.clone();
        sorted.sort();

        let mut reversed = sorted.clone();
        reversed.reverse();

        Self {
            base,
            sorted,
            reversed,
        }
    }

    /// Length shared by all three views.
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Read-only view for a case. Trials must copy before sorting.
    pub fn view(&self, case: CaseKind) -> &[i32] {
        match case {
            CaseKind::Average => &self.base,
            CaseKind::Best => &self.sorted,
            CaseKind::Worst => &self.reversed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted_copy(data: &[i32]) -> Vec<i32> {
        let mut copy = data.to_vec();
        copy.sort();
        copy
    }

    #[test]
    fn test_views_share_length_and_multiset() {
        let mut rng = StdRng::seed_from_u64(11);
        let dataset = Dataset::generate(257, &mut rng);

        assert_eq!(dataset.len(), 257);
        for case in CaseKind::ALL {
            assert_eq!(dataset.view(case).len(), 257);
            assert_eq!(
                sorted_copy(dataset.view(case)),
                sorted_copy(dataset.view(CaseKind::Average)),
                "{} view is not a permutation of the base",
                case
            );
        }
    }

    #[test]
    fn test_best_view_is_non_decreasing() {
        let mut rng = StdRng::seed_from_u64(12);
        let dataset = Dataset::generate(100, &mut rng);
        assert!(dataset
            .view(CaseKind::Best)
            .windows(2)
            .all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_worst_view_is_exact_reverse_of_best() {
        let mut rng = StdRng::seed_from_u64(13);
        let dataset = Dataset::generate(100, &mut rng);

        let mut flipped = dataset.view(CaseKind::Worst).to_vec();
        flipped.reverse();
        assert_eq!(flipped, dataset.view(CaseKind::Best));
        assert!(dataset
            .view(CaseKind::Worst)
            .windows(2)
            .all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(14);
        let dataset = Dataset::generate(1000, &mut rng);
        assert!(dataset
            .view(CaseKind::Average)
            .iter()
            .all(|&v| (0..VALUE_RANGE).contains(&v)));
    }

    #[test]
    fn test_empty_dataset() {
        let mut rng = StdRng::seed_from_u64(15);
        let dataset = Dataset::generate(0, &mut rng);
        assert!(dataset.is_empty());
        for case in CaseKind::ALL {
            assert!(dataset.view(case).is_empty());
        }
    }

    #[test]
    fn test_case_labels() {
        assert_eq!(CaseKind::Average.label(), "average");
        assert_eq!(CaseKind::Best.label(), "best");
        assert_eq!(CaseKind::Worst.label(), "worst");
    }
}
