use std::fmt;

use crate::{
    bodies::check_body,
    constants::Radian,
    coordinates::EquatorialCoordinates,
    math::interval::{check_in_range, ClosedInterval},
    starsight_errors::StarsightError,
};

const MOON_NAME: &str = "Moon";

const PHASE_INTERVAL: ClosedInterval = ClosedInterval::of_unchecked(0.0, 1.0);

/// The Moon at one instant.
#[derive(Debug, Clone)]
pub struct Moon {
    equatorial_pos: EquatorialCoordinates,
    angular_size: Radian,
    magnitude: f64,
    phase: f64,
}

impl Moon {
    /// Build the Moon.
    ///
    /// Arguments
    /// ---------
    /// * `equatorial_pos`: position on the celestial sphere
    /// * `angular_size`: apparent diameter, non-negative
    /// * `magnitude`: apparent magnitude
    /// * `phase`: illuminated fraction of the disk, in `[0, 1]`
    pub fn new(
        equatorial_pos: EquatorialCoordinates,
        angular_size: Radian,
        magnitude: f64,
        phase: f64,
    ) -> Result<Self, StarsightError> {
        check_body(MOON_NAME, angular_size)?;
        let phase = check_in_range(&PHASE_INTERVAL, "lunar phase", phase)?;
        Ok(Moon {
            equatorial_pos,
            angular_size,
            magnitude,
            phase,
        })
    }

    pub fn name(&self) -> &str {
        MOON_NAME
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

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Name followed by the illuminated percentage, e.g. `Moon (22.5%)`.
    pub fn info(&self) -> String {
        format!("{} ({:.1}%)", MOON_NAME, self.phase * 100.0)
    }
}

impl fmt::Display for Moon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}
