use std::fmt;

use crate::{
    bodies::check_body,
    constants::Radian,
    coordinates::{EclipticCoordinates, EquatorialCoordinates},
    starsight_errors::StarsightError,
};

const SUN_NAME: &str = "Sun";

const SUN_MAGNITUDE: f64 = -26.7;

/// The Sun at one instant.
///
/// Besides the common attributes of a body, the Sun keeps its ecliptic position and its mean
/// anomaly, both perturbing the lunar orbit.
#[derive(Debug, Clone)]
pub struct Sun {
    ecliptic_pos: EclipticCoordinates,
    equatorial_pos: EquatorialCoordinates,
    angular_size: Radian,
    mean_anomaly: Radian,
}

impl Sun {
    pub fn new(
        ecliptic_pos: EclipticCoordinates,
        equatorial_pos: EquatorialCoordinates,
        angular_size: Radian,
        mean_anomaly: Radian,
    ) -> Result<Self, StarsightError> {
        check_body(SUN_NAME, angular_size)?;
        Ok(Sun {
            ecliptic_pos,
            equatorial_pos,
            angular_size,
            mean_anomaly,
        })
    }

    pub fn name(&self) -> &str {
        SUN_NAME
    }

    pub fn ecliptic_pos(&self) -> &EclipticCoordinates {
        &self.ecliptic_pos
    }

    pub fn equatorial_pos(&self) -> &EquatorialCoordinates {
        &self.equatorial_pos
    }

    pub fn angular_size(&self) -> Radian {
        self.angular_size
    }

    pub fn magnitude(&self) -> f64 {
        SUN_MAGNITUDE
    }

    pub fn mean_anomaly(&self) -> Radian {
        self.mean_anomaly
    }
}

impl fmt::Display for Sun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SUN_NAME)
    }
}

#[cfg(test)]
mod sun_test {
    use super::*;

    #[test]
    fn test_new() {
        let ecl = EclipticCoordinates::of_deg(239.0, 0.0).unwrap();
        let equ = EquatorialCoordinates::of_deg(237.0, -20.0).unwrap();
        let sun = Sun::new(ecl, equ, 0.0094, 5.54).unwrap();
        assert_eq!(sun.name(), "Sun");
        assert_eq!(sun.magnitude(), -26.7);
        assert_eq!(sun.mean_anomaly(), 5.54);
        assert_eq!(sun.ecliptic_pos().lon_deg(), ecl.lon_deg());
        assert_eq!(sun.to_string(), "Sun");

        assert!(Sun::new(ecl, equ, -0.1, 0.0).is_err());
    }
}
