//! Angle conversions. Every function works on bare `f64` radians; the
//! longitude-like quantities of the crate are kept in `[0, τ)` through
//! [`normalize_positive`].
use crate::{
    constants::{Degree, Hour, Radian, DPI, RADEG, RADH, RADSEC},
    math::interval::{check_in_range, RightOpenInterval},
    starsight_errors::StarsightError,
};

/// One full turn, 2π
pub const TAU: f64 = DPI;

const FULL_TURN: RightOpenInterval = RightOpenInterval::of_unchecked(0.0, TAU);

const SEXAGESIMAL: RightOpenInterval = RightOpenInterval::of_unchecked(0.0, 60.0);

/// Reduce an angle to `[0, τ)` with a floored modulo, so `-τ/4` becomes `3τ/4`.
pub fn normalize_positive(rad: Radian) -> Radian {
    FULL_TURN.reduce(rad)
}

pub fn of_arc_sec(sec: f64) -> Radian {
    sec * RADSEC
}

/// Convert a degrees/minutes/seconds angle to radians.
///
/// Arguments
/// ---------
/// * `deg`: whole degrees
/// * `min`: arcminutes, in `[0, 60)`
/// * `sec`: arcseconds, in `[0, 60)`
///
/// Return
/// ------
/// * the angle in radians, or [`StarsightError::OutOfRange`] if minutes or seconds are outside `[0, 60)`
pub fn of_dms(deg: u32, min: u32, sec: f64) -> Result<Radian, StarsightError> {
    let min = check_in_range(&SEXAGESIMAL, "arcminutes", min as f64)?;
    let sec = check_in_range(&SEXAGESIMAL, "arcseconds", sec)?;
    Ok(of_deg(deg as f64 + min / 60.0 + sec / 3600.0))
}

pub fn of_deg(deg: Degree) -> Radian {
    deg * RADEG
}

pub fn to_deg(rad: Radian) -> Degree {
    rad / RADEG
}

pub fn of_hr(hr: Hour) -> Radian {
    hr * RADH
}

pub fn to_hr(rad: Radian) -> Hour {
    rad / RADH
}
