use std::fmt;

use crate::{
    bodies::check_body,
    constants::Radian,
    coordinates::EquatorialCoordinates,
    math::interval::{check_argument, check_in_range, ClosedInterval},
    starsight_errors::StarsightError,
};

/// Valid range of the B−V color index.
const COLOR_INDEX_INTERVAL: ClosedInterval = ClosedInterval::of_unchecked(-0.5, 5.5);

/// Effective temperature, in kelvin, of a star with the B−V color index `color_index`.
///
/// Ballesteros' formula: `T = 4600 · (1 / (0.92·c + 1.7) + 1 / (0.92·c + 0.62))`,
/// truncated to whole kelvins.
fn color_temperature(color_index: f64) -> u32 {
    let x = 0.92 * color_index;
    (4600.0 * (1.0 / (x + 1.7) + 1.0 / (x + 0.62))) as u32
}

/// A catalogue star. Stars are point sources: their angular size is always 0.
#[derive(Debug, Clone)]
pub struct Star {
    hipparcos_id: u32,
    name: String,
    equatorial_pos: EquatorialCoordinates,
    magnitude: f64,
    color_temperature: u32,
}

impl Star {
    /// Build a star.
    ///
    /// Arguments
    /// ---------
    /// * `hipparcos_id`: identifier in the Hipparcos catalogue, strictly positive
    /// * `name`: display name, non-empty
    /// * `equatorial_pos`: position on the celestial sphere
    /// * `magnitude`: apparent magnitude
    /// * `color_index`: B−V color index, in `[-0.5, 5.5]`
    ///
    /// Return
    /// ------
    /// * the star, or [`StarsightError::InvalidArgument`] / [`StarsightError::OutOfRange`]
    pub fn new(
        hipparcos_id: u32,
        name: &str,
        equatorial_pos: EquatorialCoordinates,
        magnitude: f64,
        color_index: f64,
    ) -> Result<Self, StarsightError> {
        check_argument(hipparcos_id > 0, "the Hipparcos id must be positive")?;
        check_body(name, 0.0)?;
        let color_index = check_in_range(&COLOR_INDEX_INTERVAL, "color index", color_index)?;
        Ok(Star {
            hipparcos_id,
            name: name.to_string(),
            equatorial_pos,
            magnitude,
            color_temperature: color_temperature(color_index),
        })
    }

    pub fn hipparcos_id(&self) -> u32 {
        self.hipparcos_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn equatorial_pos(&self) -> &EquatorialCoordinates {
        &self.equatorial_pos
    }

    pub fn angular_size(&self) -> Radian {
        0.0
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Effective temperature in kelvin.
    pub fn color_temperature(&self) -> u32 {
        self.color_temperature
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod star_test {
    use super::*;

    fn pos() -> EquatorialCoordinates {
        EquatorialCoordinates::of_deg(279.23, 38.78).unwrap()
    }

    #[test]
    fn test_new() {
        let vega = Star::new(91262, "Vega", pos(), 0.03, 0.0).unwrap();
        assert_eq!(vega.hipparcos_id(), 91262);
        assert_eq!(vega.name(), "Vega");
        assert_eq!(vega.angular_size(), 0.0);
        assert_eq!(vega.magnitude(), 0.03);
        assert_eq!(vega.to_string(), "Vega");
    }

    #[test]
    fn test_color_temperature() {
        assert_eq!(Star::new(1, "S", pos(), 0.0, 0.0).unwrap().color_temperature(), 10125);
        assert_eq!(Star::new(1, "S", pos(), 0.0, -0.5).unwrap().color_temperature(), 32459);
        assert_eq!(Star::new(1, "S", pos(), 0.0, 1.85).unwrap().color_temperature(), 3333);
        assert_eq!(Star::new(1, "S", pos(), 0.0, 5.5).unwrap().color_temperature(), 1490);
    }

    #[test]
    fn test_invalid_star() {
        assert!(matches!(
            Star::new(0, "Vega", pos(), 0.0, 0.0),
            Err(StarsightError::InvalidArgument(_))
        ));
        assert!(matches!(
            Star::new(1, "", pos(), 0.0, 0.0),
            Err(StarsightError::InvalidArgument(_))
        ));
        assert!(matches!(
            Star::new(1, "Vega", pos(), 0.0, 5.51),
            Err(StarsightError::OutOfRange {
                what: "color index",
                ..
            })
        ));
        assert!(Star::new(1, "Vega", pos(), 0.0, -0.51).is_err());
    }
}
