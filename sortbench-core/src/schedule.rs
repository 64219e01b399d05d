//! Size Scheduling
//!
//! Derives the ordered sequence of array sizes tested in a run from a single
//! maximum size. The schedule is a near-linear ramp: the maximum is split into
//! segments and each size is one segment boundary, ending at the maximum
//! itself.

/// The ordered, immutable sequence of array sizes for one benchmark run.
///
/// Guaranteed non-empty, strictly positive, and monotonically increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSchedule {
    sizes: Vec<usize>,
}

impl SizeSchedule {
    /// Build the schedule for a maximum size.
    ///
    /// Non-positive input is clamped to 1 rather than rejected; validation of
    /// user input is the caller's concern. Segment count:
    /// - clamped input → 1 segment
    /// - below 1000 → `max(1, n / 100)` segments
    /// - 1000 and above → 10 segments
    pub fn for_max(max_size: i64) -> Self {
        let (n, segments) = if max_size <= 0 {
            (1, 1)
        } else if max_size < 1000 {
            (max_size, (max_size / 100).max(1))
        } else {
            (max_size, 10)
        };

        let increment = n / segments;
        let sizes = if increment == 0 {
            // Unreachable with the clamps above, but a zero increment must
            // never produce zero-valued sizes
            vec![n as usize]
        } else {
            (1..=segments).map(|i| (i * increment) as usize).collect()
        };

        Self { sizes }
    }

    /// The scheduled sizes in ascending order.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of scheduled sizes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Always `false`; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// The smallest scheduled size.
    pub fn first(&self) -> usize {
        // Construction guarantees at least one entry
        self.sizes[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_segments_at_500() {
        let schedule = SizeSchedule::for_max(500);
        assert_eq!(schedule.sizes(), &[100, 200, 300, 400, 500]);
    }

    #[test]
    fn test_ten_segments_at_10000() {
        let schedule = SizeSchedule::for_max(10_000);
        let expected: Vec<usize> = (1..=10).map(|i| i * 1000).collect();
        assert_eq!(schedule.sizes(), expected.as_slice());
    }

    #[test]
    fn test_non_positive_clamps_to_one() {
        assert_eq!(SizeSchedule::for_max(0).sizes(), &[1]);
        assert_eq!(SizeSchedule::for_max(-5).sizes(), &[1]);
    }

    #[test]
    fn test_small_max_degenerates_to_single_size() {
        assert_eq!(SizeSchedule::for_max(50).sizes(), &[50]);
        assert_eq!(SizeSchedule::for_max(1).sizes(), &[1]);
    }

    #[test]
    fn test_sizes_positive_and_strictly_increasing() {
        for max in [1, 7, 99, 100, 250, 999, 1000, 1001, 12_345] {
            let schedule = SizeSchedule::for_max(max);
            assert!(!schedule.is_empty());
            assert!(schedule.sizes().iter().all(|&s| s > 0), "max {}", max);
            assert!(
                schedule.sizes().windows(2).all(|w| w[0] < w[1]),
                "max {}",
                max
            );
            assert!(*schedule.sizes().last().unwrap() as i64 <= max.max(1));
        }
    }

    #[test]
    fn test_last_size_reaches_max_on_exact_multiples() {
        assert_eq!(*SizeSchedule::for_max(2000).sizes().last().unwrap(), 2000);
        assert_eq!(*SizeSchedule::for_max(500).sizes().last().unwrap(), 500);
    }
}
