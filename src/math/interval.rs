use std::fmt;

use crate::starsight_errors::StarsightError;

/// Common behaviour of the bounded intervals used to validate and reduce angles.
pub trait Interval: fmt::Display {
    fn low(&self) -> f64;

    fn high(&self) -> f64;

    fn size(&self) -> f64 {
        self.high() - self.low()
    }

    fn contains(&self, v: f64) -> bool;
}

/// Floored modulo: the result has the sign of `y`, so `floor_mod(-1.0, 4.0) == 3.0`.
pub fn floor_mod(x: f64, y: f64) -> f64 {
    let r = x % y;
    if r != 0.0 && (r < 0.0) != (y < 0.0) {
        r + y
    } else {
        r
    }
}

/// Fail with [`StarsightError::InvalidArgument`] when `condition` does not hold.
pub(crate) fn check_argument(condition: bool, message: &str) -> Result<(), StarsightError> {
    if condition {
        Ok(())
    } else {
        Err(StarsightError::InvalidArgument(message.to_string()))
    }
}

/// Return `value` unchanged if it belongs to `interval`.
///
/// Arguments
/// ---------
/// * `interval`: the interval of valid values
/// * `what`: name of the checked quantity, reported in the error
/// * `value`: the value to check
///
/// Return
/// ------
/// * `value`, or [`StarsightError::OutOfRange`] if it lies outside of `interval` (NaN never belongs)
pub fn check_in_range<I: Interval>(
    interval: &I,
    what: &'static str,
    value: f64,
) -> Result<f64, StarsightError> {
    if interval.contains(value) {
        Ok(value)
    } else {
        Err(StarsightError::OutOfRange {
            what,
            value,
            interval: interval.to_string(),
        })
    }
}

/// The closed interval `[low, high]`.
#[derive(Debug, Clone, Copy)]
pub struct ClosedInterval {
    low: f64,
    high: f64,
}

impl ClosedInterval {
    pub(crate) const fn of_unchecked(low: f64, high: f64) -> Self {
        ClosedInterval { low, high }
    }

    /// Build `[low, high]`, failing unless `low < high`.
    pub fn new(low: f64, high: f64) -> Result<Self, StarsightError> {
        check_argument(low < high, "closed interval requires low < high")?;
        Ok(ClosedInterval { low, high })
    }

    /// Build `[-size/2, size/2]`, failing unless `size > 0`.
    pub fn symmetric(size: f64) -> Result<Self, StarsightError> {
        check_argument(size > 0.0, "symmetric interval requires a positive size")?;
        ClosedInterval::new(-size / 2.0, size / 2.0)
    }

    /// Clamp `v` to the bounds of the interval.
    pub fn clip(&self, v: f64) -> f64 {
        v.clamp(self.low, self.high)
    }
}

impl Interval for ClosedInterval {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn contains(&self, v: f64) -> bool {
        self.low <= v && v <= self.high
    }
}

impl fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.low, self.high)
    }
}

/// The right-open interval `[low, high[`.
#[derive(Debug, Clone, Copy)]
pub struct RightOpenInterval {
    low: f64,
    high: f64,
}

impl RightOpenInterval {
    pub(crate) const fn of_unchecked(low: f64, high: f64) -> Self {
        RightOpenInterval { low, high }
    }

    /// Build `[low, high[`, failing unless `low < high`.
    pub fn new(low: f64, high: f64) -> Result<Self, StarsightError> {
        check_argument(low < high, "right-open interval requires low < high")?;
        Ok(RightOpenInterval { low, high })
    }

    /// Build `[-size/2, size/2[`, failing unless `size > 0`.
    pub fn symmetric(size: f64) -> Result<Self, StarsightError> {
        check_argument(size > 0.0, "symmetric interval requires a positive size")?;
        RightOpenInterval::new(-size / 2.0, size / 2.0)
    }

    /// Reduce `v` into the interval: `low + floor_mod(v - low, high - low)`.
    ///
    /// Rounding can push the floored modulo of a tiny negative offset up to exactly `high`;
    /// that value is folded back onto `low` so the result always belongs to the interval.
    pub fn reduce(&self, v: f64) -> f64 {
        let reduced = self.low + floor_mod(v - self.low, self.size());
        if reduced >= self.high {
            self.low
        } else {
            reduced
        }
    }
}

impl Interval for RightOpenInterval {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn contains(&self, v: f64) -> bool {
        self.low <= v && v < self.high
    }
}

impl fmt::Display for RightOpenInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}[", self.low, self.high)
    }
}
