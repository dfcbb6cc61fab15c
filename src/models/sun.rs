use crate::{
    bodies::Sun,
    constants::{Radian, RADEG, TROPICAL_YEAR},
    coordinates::{
        conversions::{EclipticToEquatorialConversion, Transform},
        EclipticCoordinates,
    },
    math::angle::{self, TAU},
    models::CelestialObjectModel,
    starsight_errors::StarsightError,
};

/// Ecliptic longitude of the Sun at J2010, εg.
const LON_AT_EPOCH: Radian = 279.557208 * RADEG;

/// Ecliptic longitude of the perigee, ωg.
const LON_AT_PERIGEE: Radian = 283.112438 * RADEG;

const ECCENTRICITY: f64 = 0.016705;

/// Angular size at a distance of 1 AU, θ0.
const ANGULAR_SIZE_AT_1_AU: Radian = 0.533128 * RADEG;

/// Apparent motion of the Sun, on an orbit of the Earth approximated by Kepler's equation to
/// the first order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SunModel;

impl CelestialObjectModel for SunModel {
    type Object = Sun;

    fn at(
        &self,
        days_since_j2010: f64,
        ecliptic_to_equatorial: &EclipticToEquatorialConversion,
    ) -> Result<Sun, StarsightError> {
        let mean_anomaly = angle::normalize_positive(
            TAU / TROPICAL_YEAR * days_since_j2010 + LON_AT_EPOCH - LON_AT_PERIGEE,
        );
        let true_anomaly =
            angle::normalize_positive(mean_anomaly + 2.0 * ECCENTRICITY * mean_anomaly.sin());

        let lon = angle::normalize_positive(true_anomaly + LON_AT_PERIGEE);
        let ecliptic_pos = EclipticCoordinates::new_unchecked(lon, 0.0);
        let equatorial_pos = ecliptic_to_equatorial.apply(&ecliptic_pos);

        let angular_size = ANGULAR_SIZE_AT_1_AU * (1.0 + ECCENTRICITY * true_anomaly.cos())
            / (1.0 - ECCENTRICITY * ECCENTRICITY);

        Sun::new(ecliptic_pos, equatorial_pos, angular_size, mean_anomaly)
    }
}
