//! # Celestial objects
//!
//! The bodies of an [`ObservedSky`](crate::observed_sky::ObservedSky) snapshot. Each kind is an
//! immutable value validated at construction:
//!
//! - [`Star`]: a catalogue entry with a Hipparcos id and a color temperature,
//! - [`Sun`]: keeps its ecliptic position and mean anomaly, needed by the lunar model,
//! - [`Moon`]: adds the illuminated fraction of its disk,
//! - [`Planet`]: one of the seven planets visible from the Earth.
//!
//! [`CelestialObject`] is the closed sum of these kinds, used wherever any body may appear
//! (e.g. the result of a nearest-object query).
use std::fmt;

use crate::{
    constants::Radian,
    coordinates::EquatorialCoordinates,
    math::interval::check_argument,
    starsight_errors::StarsightError,
};

pub mod asterism;
pub mod moon;
pub mod planet;
pub mod star;
pub mod sun;

pub use asterism::Asterism;
pub use moon::Moon;
pub use planet::Planet;
pub use star::Star;
pub use sun::Sun;

/// Validation shared by every body: a non-empty name and a non-negative angular size.
pub(crate) fn check_body(name: &str, angular_size: Radian) -> Result<(), StarsightError> {
    check_argument(!name.is_empty(), "a celestial object needs a name")?;
    check_argument(
        angular_size >= 0.0,
        "the angular size of a celestial object cannot be negative",
    )
}

/// Any body of the observed sky.
#[derive(Debug, Clone)]
pub enum CelestialObject {
    Star(Star),
    Sun(Sun),
    Moon(Moon),
    Planet(Planet),
}

impl CelestialObject {
    pub fn name(&self) -> &str {
        match self {
            CelestialObject::Star(star) => star.name(),
            CelestialObject::Sun(sun) => sun.name(),
            CelestialObject::Moon(moon) => moon.name(),
            CelestialObject::Planet(planet) => planet.name(),
        }
    }

    pub fn equatorial_pos(&self) -> &EquatorialCoordinates {
        match self {
            CelestialObject::Star(star) => star.equatorial_pos(),
            CelestialObject::Sun(sun) => sun.equatorial_pos(),
            CelestialObject::Moon(moon) => moon.equatorial_pos(),
            CelestialObject::Planet(planet) => planet.equatorial_pos(),
        }
    }

    pub fn angular_size(&self) -> Radian {
        match self {
            CelestialObject::Star(star) => star.angular_size(),
            CelestialObject::Sun(sun) => sun.angular_size(),
            CelestialObject::Moon(moon) => moon.angular_size(),
            CelestialObject::Planet(planet) => planet.angular_size(),
        }
    }

    pub fn magnitude(&self) -> f64 {
        match self {
            CelestialObject::Star(star) => star.magnitude(),
            CelestialObject::Sun(sun) => sun.magnitude(),
            CelestialObject::Moon(moon) => moon.magnitude(),
            CelestialObject::Planet(planet) => planet.magnitude(),
        }
    }

    /// Short description of the body, the name except for the Moon which adds its phase.
    pub fn info(&self) -> String {
        match self {
            CelestialObject::Moon(moon) => moon.info(),
            other => other.name().to_string(),
        }
    }
}

impl fmt::Display for CelestialObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

impl From<Star> for CelestialObject {
    fn from(star: Star) -> Self {
        CelestialObject::Star(star)
    }
}

impl From<Sun> for CelestialObject {
    fn from(sun: Sun) -> Self {
        CelestialObject::Sun(sun)
    }
}

impl From<Moon> for CelestialObject {
    fn from(moon: Moon) -> Self {
        CelestialObject::Moon(moon)
    }
}

impl From<Planet> for CelestialObject {
    fn from(planet: Planet) -> Self {
        CelestialObject::Planet(planet)
    }
}
