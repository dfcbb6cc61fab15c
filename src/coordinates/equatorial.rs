use std::fmt;

use crate::{
    constants::{Degree, Hour, Radian},
    coordinates::{SphericalCoordinates, FULL_TURN_DEG_INTERVAL, FULL_TURN_INTERVAL},
    math::{angle, interval::Interval},
    starsight_errors::StarsightError,
};

/// Position on the celestial sphere in the equatorial frame.
#[derive(Debug, Clone, Copy)]
pub struct EquatorialCoordinates {
    coords: SphericalCoordinates,
}

impl EquatorialCoordinates {
    /// Build equatorial coordinates from radians.
    ///
    /// Arguments
    /// ---------
    /// * `ra`: right ascension in `[0, 2π)`
    /// * `dec`: declination in `[-π/2, π/2]`
    pub fn new(ra: Radian, dec: Radian) -> Result<Self, StarsightError> {
        Ok(EquatorialCoordinates {
            coords: SphericalCoordinates::checked(
                &FULL_TURN_INTERVAL,
                "right ascension",
                ra,
                "declination",
                dec,
            )?,
        })
    }

    pub fn of_deg(ra_deg: Degree, dec_deg: Degree) -> Result<Self, StarsightError> {
        Ok(EquatorialCoordinates {
            coords: SphericalCoordinates::checked_deg(
                &FULL_TURN_DEG_INTERVAL,
                "right ascension",
                ra_deg,
                "declination",
                dec_deg,
            )?,
        })
    }

    /// Components already known to be in range (normalized angle, `asin` output).
    pub(crate) fn new_unchecked(ra: Radian, dec: Radian) -> Self {
        debug_assert!(FULL_TURN_INTERVAL.contains(ra), "ra = {ra}");
        EquatorialCoordinates {
            coords: SphericalCoordinates::new(ra, dec),
        }
    }

    pub fn ra(&self) -> Radian {
        self.coords.lon()
    }

    pub fn ra_deg(&self) -> Degree {
        self.coords.lon_deg()
    }

    pub fn ra_hr(&self) -> Hour {
        angle::to_hr(self.coords.lon())
    }

    pub fn dec(&self) -> Radian {
        self.coords.lat()
    }

    pub fn dec_deg(&self) -> Degree {
        self.coords.lat_deg()
    }
}

impl fmt::Display for EquatorialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ra={:.4}h, dec={:.4}°)", self.ra_hr(), self.dec_deg())
    }
}

#[cfg(test)]
mod equatorial_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accessors() {
        let coords = EquatorialCoordinates::of_deg(90.0, -45.0).unwrap();
        assert_relative_eq!(coords.ra_hr(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(coords.ra(), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(coords.dec_deg(), -45.0, epsilon = 1e-12);
        assert_eq!(coords.to_string(), "(ra=6.0000h, dec=-45.0000°)");
    }

    #[test]
    fn test_ranges() {
        assert!(EquatorialCoordinates::new(0.0, std::f64::consts::FRAC_PI_2).is_ok());
        assert!(EquatorialCoordinates::new(angle::TAU, 0.0).is_err());
        assert!(EquatorialCoordinates::new(-0.1, 0.0).is_err());
        assert!(EquatorialCoordinates::new(1.0, 1.6).is_err());
        assert!(EquatorialCoordinates::of_deg(360.0, 0.0).is_err());
        assert!(EquatorialCoordinates::of_deg(359.9, -90.0).is_ok());
    }
}
