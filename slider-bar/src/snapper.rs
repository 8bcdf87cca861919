//! Nearest-value snapping over a discrete, ascending set of allowed values.
//!
//! ## Usage
//!
//! ```
//! use slider_bar::snapper::RangeSnapper;
//!
//! let snapper = RangeSnapper::default();
//! assert_eq!(snapper.snap(53.0), 55);
//! assert_eq!(snapper.snap(2.5), 0);
//! ```

use smallvec::SmallVec;

use crate::error::SliderError;

/// Step between consecutive values of the default range.
pub const DEFAULT_STEP: i32 = 5;
/// Upper bound of the default range.
pub const DEFAULT_MAX: i32 = 100;

/// A `(min, max)` pair of snapped values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnappedRange {
    /// Value of the min thumb.
    pub min: i32,
    /// Value of the max thumb.
    pub max: i32,
}

impl SnappedRange {
    /// Creates a new pair.
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Returns `true` when both thumbs snapped onto the same value.
    pub fn is_collapsed(&self) -> bool {
        self.min == self.max
    }
}

/// Maps arbitrary values onto the closest member of an allowed set.
///
/// The set is validated once on construction: it must be non-empty and
/// strictly ascending. When a value lies exactly halfway between two members
/// the lower member wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSnapper {
    values: SmallVec<[i32; 24]>,
}

impl RangeSnapper {
    /// Creates a snapper over `values`.
    pub fn new(values: impl IntoIterator<Item = i32>) -> Result<Self, SliderError> {
        let values: SmallVec<[i32; 24]> = values.into_iter().collect();
        if values.is_empty() {
            return Err(SliderError::EmptyRange);
        }
        if let Some(index) = values.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(SliderError::UnorderedRange {
                index: index + 1,
                previous: values[index],
                value: values[index + 1],
            });
        }
        Ok(Self { values })
    }

    /// The allowed values, ascending.
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// The smallest allowed value.
    pub fn first(&self) -> i32 {
        self.values[0]
    }

    /// The largest allowed value.
    pub fn last(&self) -> i32 {
        self.values[self.values.len() - 1]
    }

    /// Snaps `value` to the closest allowed value.
    ///
    /// Values outside the set snap to its ends and `NaN` snaps to the first
    /// member.
    pub fn snap(&self, value: f32) -> i32 {
        let value = f64::from(value);
        let upper_index = self
            .values
            .partition_point(|&allowed| f64::from(allowed) < value);

        if upper_index == 0 {
            return self.first();
        }
        if upper_index == self.values.len() {
            return self.last();
        }

        let lower = self.values[upper_index - 1];
        let upper = self.values[upper_index];
        if f64::from(upper) - value < value - f64::from(lower) {
            upper
        } else {
            lower
        }
    }

    /// Snaps both ends of a percentage range independently.
    pub fn snap_pair(&self, min_percent: f32, max_percent: f32) -> SnappedRange {
        SnappedRange::new(self.snap(min_percent), self.snap(max_percent))
    }
}

impl Default for RangeSnapper {
    /// `0, 5, 10, …, 100`.
    fn default() -> Self {
        Self {
            values: (0..=DEFAULT_MAX).step_by(DEFAULT_STEP as usize).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference implementation: left-to-right scan keeping the first
    /// minimal distance.
    fn scan(values: &[i32], value: f32) -> i32 {
        let mut best = values[0];
        for &candidate in values {
            if (f64::from(candidate) - f64::from(value)).abs()
                < (f64::from(best) - f64::from(value)).abs()
            {
                best = candidate;
            }
        }
        best
    }

    #[test]
    fn default_range_steps_by_five() {
        let snapper = RangeSnapper::default();
        assert_eq!(snapper.values().len(), 21);
        assert_eq!(snapper.first(), 0);
        assert_eq!(snapper.last(), 100);
        assert!(snapper.values().iter().all(|v| v % 5 == 0));
    }

    #[test]
    fn snaps_to_nearest_default_value() {
        let snapper = RangeSnapper::default();
        assert_eq!(snapper.snap(2.0), 0);
        assert_eq!(snapper.snap(3.0), 5);
        assert_eq!(snapper.snap(-10.0), 0);
        assert_eq!(snapper.snap(53.0), 55);
        assert_eq!(snapper.snap(250.0), 100);
    }

    #[test]
    fn ties_prefer_the_lower_value() {
        let snapper = RangeSnapper::default();
        assert_eq!(snapper.snap(2.5), 0);
        assert_eq!(snapper.snap(52.5), 50);

        let uneven = RangeSnapper::new([1, 3, 10]).expect("valid range");
        assert_eq!(uneven.snap(2.0), 1);
        assert_eq!(uneven.snap(6.5), 3);
    }

    #[test]
    fn matches_linear_scan_and_is_idempotent() {
        let ranges: [&[i32]; 3] = [&[0, 5, 10, 20, 50, 100], &[-30, -1, 0, 7], &[42]];
        for values in ranges {
            let snapper = RangeSnapper::new(values.iter().copied()).expect("valid range");
            let mut value = -60.0_f32;
            while value <= 120.0 {
                let snapped = snapper.snap(value);
                assert!(values.contains(&snapped));
                assert_eq!(snapped, scan(values, value), "value {value}");
                assert_eq!(snapper.snap(snapped as f32), snapped);
                value += 0.25;
            }
        }
    }

    #[test]
    fn non_finite_inputs_stay_in_range() {
        let snapper = RangeSnapper::default();
        assert_eq!(snapper.snap(f32::NAN), 0);
        assert_eq!(snapper.snap(f32::INFINITY), 100);
        assert_eq!(snapper.snap(f32::NEG_INFINITY), 0);
    }

    #[test]
    fn snap_pair_snaps_independently() {
        let snapper = RangeSnapper::default();
        assert_eq!(snapper.snap_pair(0.0, 53.0), SnappedRange::new(0, 55));
        assert!(snapper.snap_pair(99.0, 100.0).is_collapsed());
    }

    #[test]
    fn rejects_invalid_ranges() {
        assert!(matches!(
            RangeSnapper::new(Vec::new()),
            Err(SliderError::EmptyRange)
        ));
        assert!(matches!(
            RangeSnapper::new([0, 10, 10]),
            Err(SliderError::UnorderedRange {
                index: 2,
                previous: 10,
                value: 10
            })
        ));
        assert!(matches!(
            RangeSnapper::new([5, 0]),
            Err(SliderError::UnorderedRange { index: 1, .. })
        ));
    }
}
