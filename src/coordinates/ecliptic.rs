use std::fmt;

use crate::{
    constants::{Degree, Radian},
    coordinates::{SphericalCoordinates, FULL_TURN_DEG_INTERVAL, FULL_TURN_INTERVAL},
    math::interval::Interval,
    starsight_errors::StarsightError,
};

/// Position on the celestial sphere in the ecliptic frame.
#[derive(Debug, Clone, Copy)]
pub struct EclipticCoordinates {
    coords: SphericalCoordinates,
}

impl EclipticCoordinates {
    /// Build ecliptic coordinates from radians.
    ///
    /// Arguments
    /// ---------
    /// * `lon`: ecliptic longitude λ in `[0, 2π)`
    /// * `lat`: ecliptic latitude β in `[-π/2, π/2]`
    pub fn new(lon: Radian, lat: Radian) -> Result<Self, StarsightError> {
        Ok(EclipticCoordinates {
            coords: SphericalCoordinates::checked(
                &FULL_TURN_INTERVAL,
                "ecliptic longitude",
                lon,
                "ecliptic latitude",
                lat,
            )?,
        })
    }

    pub fn of_deg(lon_deg: Degree, lat_deg: Degree) -> Result<Self, StarsightError> {
        Ok(EclipticCoordinates {
            coords: SphericalCoordinates::checked_deg(
                &FULL_TURN_DEG_INTERVAL,
                "ecliptic longitude",
                lon_deg,
                "ecliptic latitude",
                lat_deg,
            )?,
        })
    }

    pub(crate) fn new_unchecked(lon: Radian, lat: Radian) -> Self {
        debug_assert!(FULL_TURN_INTERVAL.contains(lon), "lon = {lon}");
        EclipticCoordinates {
            coords: SphericalCoordinates::new(lon, lat),
        }
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

impl fmt::Display for EclipticCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(λ={:.4}°, β={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}

#[cfg(test)]
mod ecliptic_test {
    use super::*;

    #[test]
    fn test_ranges() {
        assert!(EclipticCoordinates::of_deg(0.0, 90.0).is_ok());
        assert!(EclipticCoordinates::of_deg(360.0, 0.0).is_err());
        assert!(EclipticCoordinates::of_deg(10.0, 91.0).is_err());
        assert!(EclipticCoordinates::new(6.3, 0.0).is_err());
    }

    #[test]
    fn test_display() {
        let coords = EclipticCoordinates::of_deg(22.5, -10.25).unwrap();
        assert_eq!(coords.to_string(), "(λ=22.5000°, β=-10.2500°)");
    }
}
