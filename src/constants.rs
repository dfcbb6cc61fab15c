//! # Constants and type definitions for Starsight
//!
//! This module centralizes the **astronomical constants**, **conversion factors** and
//! **type aliases** shared by the coordinate, time and orbital-model modules.
//!
//! ## Overview
//!
//! - Full-turn and unit conversion factors (degrees, hours, arcseconds ↔ radians)
//! - Reference epochs expressed as Modified Julian Dates (UTC)
//! - Calendar constants (days per Julian century, tropical year, sidereal rate)
//! - Type aliases documenting the unit carried by a bare `f64`

// -------------------------------------------------------------------------------------------------
// Angles and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, one full turn in radians
pub const DPI: f64 = std::f64::consts::TAU;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

// -------------------------------------------------------------------------------------------------
// Time
// -------------------------------------------------------------------------------------------------

/// MJD of J2000.0 (2000-01-01 12:00:00 UTC)
pub const T2000: f64 = 51544.5;

/// MJD of the "epoch 2010.0" used by the low-precision formulary (2009-12-31 00:00:00 UTC)
pub const T2010: f64 = 55196.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Number of milliseconds in a day
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Number of milliseconds in an hour
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Length of the tropical year in days
pub const TROPICAL_YEAR: f64 = 365.242191;

/// Ratio of the sidereal to the solar rotation rate
pub const SIDEREAL_RATE: f64 = 1.002737909;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Angle or duration in hours
pub type Hour = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
