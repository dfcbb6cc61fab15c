use std::fmt;

use crate::{
    constants::{Degree, Radian},
    coordinates::{SphericalCoordinates, FULL_TURN_DEG_INTERVAL, FULL_TURN_INTERVAL},
    math::interval::Interval,
    starsight_errors::StarsightError,
};

/// Position of a direction in the local sky of an observer.
///
/// The azimuth is measured from the north towards the east, the altitude above the horizon.
#[derive(Debug, Clone, Copy)]
pub struct HorizontalCoordinates {
    coords: SphericalCoordinates,
}

impl HorizontalCoordinates {
    /// Build horizontal coordinates from radians.
    ///
    /// Arguments
    /// ---------
    /// * `az`: azimuth in `[0, 2π)`
    /// * `alt`: altitude in `[-π/2, π/2]`
    pub fn new(az: Radian, alt: Radian) -> Result<Self, StarsightError> {
        Ok(HorizontalCoordinates {
            coords: SphericalCoordinates::checked(
                &FULL_TURN_INTERVAL,
                "azimuth",
                az,
                "altitude",
                alt,
            )?,
        })
    }

    pub fn of_deg(az_deg: Degree, alt_deg: Degree) -> Result<Self, StarsightError> {
        Ok(HorizontalCoordinates {
            coords: SphericalCoordinates::checked_deg(
                &FULL_TURN_DEG_INTERVAL,
                "azimuth",
                az_deg,
                "altitude",
                alt_deg,
            )?,
        })
    }

    pub(crate) fn new_unchecked(az: Radian, alt: Radian) -> Self {
        debug_assert!(FULL_TURN_INTERVAL.contains(az), "az = {az}");
        HorizontalCoordinates {
            coords: SphericalCoordinates::new(az, alt),
        }
    }

    pub fn az(&self) -> Radian {
        self.coords.lon()
    }

    pub fn az_deg(&self) -> Degree {
        self.coords.lon_deg()
    }

    pub fn alt(&self) -> Radian {
        self.coords.lat()
    }

    pub fn alt_deg(&self) -> Degree {
        self.coords.lat_deg()
    }

    /// Name of the azimuth octant (N, NE, E, SE, S, SW, W, NW) built from the cardinal labels.
    ///
    /// Each octant spans 45° and is centred on its direction, so north covers `[337.5°, 22.5°)`.
    ///
    /// Arguments
    /// ---------
    /// * `n`, `e`, `s`, `w`: labels of the four cardinal points
    ///
    /// Return
    /// ------
    /// * the cardinal label, or the concatenation north/south first for intercardinal octants
    pub fn az_octant_name(&self, n: &str, e: &str, s: &str, w: &str) -> String {
        let octant = ((self.az_deg() + 22.5) / 45.0).floor() as usize % 8;
        match octant {
            0 => n.to_string(),
            1 => format!("{n}{e}"),
            2 => e.to_string(),
            3 => format!("{s}{e}"),
            4 => s.to_string(),
            5 => format!("{s}{w}"),
            6 => w.to_string(),
            _ => format!("{n}{w}"),
        }
    }

    /// Great-circle distance to `that`, in radians.
    pub fn angular_distance_to(&self, that: &HorizontalCoordinates) -> Radian {
        let cos_distance = self.alt().sin() * that.alt().sin()
            + self.alt().cos() * that.alt().cos() * (self.az() - that.az()).cos();
        cos_distance.clamp(-1.0, 1.0).acos()
    }
}

impl fmt::Display for HorizontalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(az={:.4}°, alt={:.4}°)", self.az_deg(), self.alt_deg())
    }
}
