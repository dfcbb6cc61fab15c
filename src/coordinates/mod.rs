//! # Spherical and planar coordinates
//!
//! Four immutable two-angle frames share the same longitude/latitude representation and only
//! differ by their valid ranges and the names of their accessors:
//!
//! | Type | Longitude-like | Latitude-like |
//! |------|----------------|---------------|
//! | [`GeographicCoordinates`] | longitude in `[-180°, 180°)` | latitude in `[-90°, 90°]` |
//! | [`EquatorialCoordinates`] | right ascension in `[0°, 360°)` | declination in `[-90°, 90°]` |
//! | [`EclipticCoordinates`] | ecliptic longitude in `[0°, 360°)` | ecliptic latitude in `[-90°, 90°]` |
//! | [`HorizontalCoordinates`] | azimuth in `[0°, 360°)` | altitude in `[-90°, 90°]` |
//!
//! Construction fails with [`StarsightError::OutOfRange`](crate::starsight_errors::StarsightError::OutOfRange)
//! when a component lies outside its range. None of these types implement `PartialEq`: comparing
//! floating-point angles must be done explicitly, on the numeric fields, with a tolerance.
//!
//! [`CartesianCoordinates`] is the planar `(x, y)` pair produced by the
//! [`StereographicProjection`](crate::projection::StereographicProjection).
//!
//! The conversions between frames live in [`conversions`](crate::coordinates::conversions).
use std::f64::consts::FRAC_PI_2;

use crate::{
    constants::{Degree, Radian, DPI},
    math::{
        angle,
        interval::{check_in_range, ClosedInterval, RightOpenInterval},
    },
    starsight_errors::StarsightError,
};

pub mod cartesian;
pub mod conversions;
pub mod ecliptic;
pub mod equatorial;
pub mod geographic;
pub mod horizontal;

pub use cartesian::CartesianCoordinates;
pub use ecliptic::EclipticCoordinates;
pub use equatorial::EquatorialCoordinates;
pub use geographic::GeographicCoordinates;
pub use horizontal::HorizontalCoordinates;

pub(crate) const LAT_INTERVAL: ClosedInterval = ClosedInterval::of_unchecked(-FRAC_PI_2, FRAC_PI_2);

pub(crate) const LAT_DEG_INTERVAL: ClosedInterval = ClosedInterval::of_unchecked(-90.0, 90.0);

pub(crate) const FULL_TURN_INTERVAL: RightOpenInterval = RightOpenInterval::of_unchecked(0.0, DPI);

pub(crate) const FULL_TURN_DEG_INTERVAL: RightOpenInterval =
    RightOpenInterval::of_unchecked(0.0, 360.0);

/// Longitude/latitude pair in radians, shared by the four concrete frames.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SphericalCoordinates {
    lon: Radian,
    lat: Radian,
}

impl SphericalCoordinates {
    pub(crate) const fn new(lon: Radian, lat: Radian) -> Self {
        SphericalCoordinates { lon, lat }
    }

    /// Validate a `(lon, lat)` pair in radians, the longitude against `lon_interval`.
    pub(crate) fn checked(
        lon_interval: &RightOpenInterval,
        lon_name: &'static str,
        lon: Radian,
        lat_name: &'static str,
        lat: Radian,
    ) -> Result<Self, StarsightError> {
        let lon = check_in_range(lon_interval, lon_name, lon)?;
        let lat = check_in_range(&LAT_INTERVAL, lat_name, lat)?;
        Ok(SphericalCoordinates::new(lon, lat))
    }

    /// Validate a `(lon, lat)` pair in degrees, then convert it to radians.
    pub(crate) fn checked_deg(
        lon_interval: &RightOpenInterval,
        lon_name: &'static str,
        lon_deg: Degree,
        lat_name: &'static str,
        lat_deg: Degree,
    ) -> Result<Self, StarsightError> {
        let lon_deg = check_in_range(lon_interval, lon_name, lon_deg)?;
        let lat_deg = check_in_range(&LAT_DEG_INTERVAL, lat_name, lat_deg)?;
        Ok(SphericalCoordinates::new(
            angle::of_deg(lon_deg),
            angle::of_deg(lat_deg),
        ))
    }

    pub(crate) fn lon(&self) -> Radian {
        self.lon
    }

    pub(crate) fn lat(&self) -> Radian {
        self.lat
    }

    pub(crate) fn lon_deg(&self) -> Degree {
        angle::to_deg(self.lon)
    }

    pub(crate) fn lat_deg(&self) -> Degree {
        angle::to_deg(self.lat)
    }
}
