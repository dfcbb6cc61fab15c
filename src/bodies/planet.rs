use std::fmt;

use crate::{
    bodies::check_body, constants::Radian, coordinates::EquatorialCoordinates,
    starsight_errors::StarsightError,
};

/// A planet as seen from the Earth at one instant.
#[derive(Debug, Clone)]
pub struct Planet {
    name: String,
    equatorial_pos: EquatorialCoordinates,
    angular_size: Radian,
    magnitude: f64,
}

impl Planet {
    pub fn new(
        name: &str,
        equatorial_pos: EquatorialCoordinates,
        angular_size: Radian,
        magnitude: f64,
    ) -> Result<Self, StarsightError> {
        check_body(name, angular_size)?;
        Ok(Planet {
            name: name.to_string(),
            equatorial_pos,
            angular_size,
            magnitude,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn equatorial_pos(&self) -> &EquatorialCoordinates {
        &self.equatorial_pos
    }

    pub fn angular_size(&self) -> Radian {
        self.angular_size
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
