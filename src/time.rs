//! # Time system
//!
//! Conversion of an observation instant to the quantities the astronomical formulary is written
//! in: fractional days and Julian centuries elapsed since a reference epoch, and the sidereal
//! time at Greenwich or at an observer's longitude.
//!
//! Instants are [`hifitime::Epoch`] values. Elapsed time is measured on the UTC time line
//! (leap seconds excluded) and truncated to whole milliseconds, so the same pair of instants
//! always yields the same elapsed time whatever their time scale.
use hifitime::Epoch;

use crate::{
    constants::{
        Radian, DAYS_PER_JULIAN_CENTURY, MILLIS_PER_DAY, MILLIS_PER_HOUR, MJD, SIDEREAL_RATE,
        T2000, T2010,
    },
    coordinates::GeographicCoordinates,
    math::{angle, polynomial::Polynomial},
};

/// Reference epochs of the formulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefEpoch {
    /// 2000-01-01 12:00 UTC
    J2000,
    /// 2009-12-31 00:00 UTC, the "epoch 2010.0" of the orbital elements
    J2010,
}

impl RefEpoch {
    pub fn mjd(&self) -> MJD {
        match *self {
            RefEpoch::J2000 => T2000,
            RefEpoch::J2010 => T2010,
        }
    }

    pub fn epoch(&self) -> Epoch {
        match *self {
            RefEpoch::J2000 => Epoch::from_gregorian_utc_hms(2000, 1, 1, 12, 0, 0),
            RefEpoch::J2010 => Epoch::from_gregorian_utc_at_midnight(2009, 12, 31),
        }
    }

    /// Fractional days from this epoch to `instant`, negative if `instant` is earlier.
    pub fn days_until(&self, instant: &Epoch) -> f64 {
        days_since(&self.epoch(), instant)
    }

    /// Fractional Julian centuries from this epoch to `instant`, negative if `instant` is earlier.
    pub fn julian_centuries_until(&self, instant: &Epoch) -> f64 {
        julian_centuries_since(&self.epoch(), instant)
    }
}

/// Whole milliseconds elapsed on the UTC time line between `from` and `to`.
///
/// The result is truncated towards zero and is negative when `to` precedes `from`.
pub fn elapsed_millis(from: &Epoch, to: &Epoch) -> f64 {
    let elapsed = to.to_utc_duration() - from.to_utc_duration();
    (elapsed.total_nanoseconds() / 1_000_000) as f64
}

/// Fractional days between `epoch` and `instant`.
///
/// Arguments
/// ---------
/// * `epoch`: the reference instant
/// * `instant`: the instant to measure
///
/// Return
/// ------
/// * elapsed milliseconds divided by the number of milliseconds in a day;
///   negative when `instant` is earlier than `epoch`
pub fn days_since(epoch: &Epoch, instant: &Epoch) -> f64 {
    elapsed_millis(epoch, instant) / MILLIS_PER_DAY
}

/// Fractional Julian centuries (36525 days) between `epoch` and `instant`.
pub fn julian_centuries_since(epoch: &Epoch, instant: &Epoch) -> f64 {
    elapsed_millis(epoch, instant) / (DAYS_PER_JULIAN_CENTURY * MILLIS_PER_DAY)
}

/// Sidereal time at 0h UT, in hours, as a polynomial of the Julian centuries since J2000.
const S0_POLYNOMIAL: Polynomial =
    Polynomial::from_static(&[0.000025862, 2400.051336, 6.697374558]);

/// Compute the Greenwich sidereal time in radians.
///
/// # Arguments
/// * `instant` - the observation instant
///
/// # Returns
/// * the sidereal time at Greenwich, normalized to the interval [0, 2π).
///
/// # Details
/// The sidereal time is computed in two steps:
/// 1. Truncate `instant` to its UTC midnight and evaluate the 0h sidereal time `S0`
///    (hours) from the Julian centuries elapsed since J2000.
/// 2. Add the hours elapsed since midnight, scaled by the sidereal/solar rate ratio.
pub fn sidereal_time_greenwich(instant: &Epoch) -> Radian {
    let (year, month, day, _, _, _, _) = instant.to_gregorian_utc();
    let midnight = Epoch::from_gregorian_utc_at_midnight(year, month, day);

    // Step 1: sidereal time at 0h UT
    let t = julian_centuries_since(&RefEpoch::J2000.epoch(), &midnight);
    let s0 = S0_POLYNOMIAL.at(t);

    // Step 2: contribution of the fraction of the day
    let hours = elapsed_millis(&midnight, instant) / MILLIS_PER_HOUR;
    let s1 = SIDEREAL_RATE * hours;

    angle::normalize_positive(angle::of_hr(s0 + s1))
}

/// Compute the local sidereal time in radians, normalized to [0, 2π).
///
/// This is the Greenwich sidereal time shifted by the (east positive) longitude of `location`.
pub fn sidereal_time_local(instant: &Epoch, location: &GeographicCoordinates) -> Radian {
    angle::normalize_positive(sidereal_time_greenwich(instant) + location.lon())
}
