use std::fmt;

use crate::{
    constants::{Degree, Radian},
    coordinates::{SphericalCoordinates, LAT_DEG_INTERVAL},
    math::interval::{Interval, RightOpenInterval},
    starsight_errors::StarsightError,
};

const LON_DEG_INTERVAL: RightOpenInterval = RightOpenInterval::of_unchecked(-180.0, 180.0);

/// A location on Earth: longitude east of Greenwich and geodetic latitude.
#[derive(Debug, Clone, Copy)]
pub struct GeographicCoordinates {
    coords: SphericalCoordinates,
}

impl GeographicCoordinates {
    /// Build a location from degrees.
    ///
    /// Arguments
    /// ---------
    /// * `lon_deg`: longitude in `[-180°, 180°)`, positive east
    /// * `lat_deg`: latitude in `[-90°, 90°]`
    pub fn of_deg(lon_deg: Degree, lat_deg: Degree) -> Result<Self, StarsightError> {
        Ok(GeographicCoordinates {
            coords: SphericalCoordinates::checked_deg(
                &LON_DEG_INTERVAL,
                "longitude",
                lon_deg,
                "latitude",
                lat_deg,
            )?,
        })
    }

    pub fn is_valid_lon_deg(lon_deg: Degree) -> bool {
        LON_DEG_INTERVAL.contains(lon_deg)
    }

    pub fn is_valid_lat_deg(lat_deg: Degree) -> bool {
        LAT_DEG_INTERVAL.contains(lat_deg)
    }

    pub fn lon(&self) -> Radian {
        self.coords.lon()
    }

    pub fn lon_deg(&self) -> Degree {
        self.coords.lon_deg()
    }

    pub fn lat(&self) -> Radian {
        self.coords.lat()
    }

    pub fn lat_deg(&self) -> Degree {
        self.coords.lat_deg()
    }
}

impl fmt::Display for GeographicCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lon={:.4}°, lat={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}
