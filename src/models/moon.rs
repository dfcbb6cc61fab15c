use crate::{
    bodies::Moon,
    constants::{Radian, RADEG},
    coordinates::{
        conversions::{EclipticToEquatorialConversion, Transform},
        EclipticCoordinates,
    },
    math::angle,
    models::{sun::SunModel, CelestialObjectModel},
    starsight_errors::StarsightError,
};

/// Mean longitude at J2010, l0.
const MEAN_LON_AT_EPOCH: Radian = 91.929336 * RADEG;

/// Mean longitude of the perigee at J2010, P0.
const PERIGEE_LON_AT_EPOCH: Radian = 130.143076 * RADEG;

/// Longitude of the ascending node at J2010, N0.
const NODE_LON_AT_EPOCH: Radian = 291.682547 * RADEG;

const INCLINATION: Radian = 5.145396 * RADEG;

const ECCENTRICITY: f64 = 0.0549;

/// Angular size at the semi-major axis distance, θ0.
const ANGULAR_SIZE_AT_SEMI_MAJOR_AXIS: Radian = 0.5181 * RADEG;

const MAGNITUDE: f64 = 0.0;

// daily motions
const MEAN_LON_RATE: Radian = 13.1763966 * RADEG;
const PERIGEE_RATE: Radian = 0.1114041 * RADEG;
const NODE_RATE: Radian = 0.0529539 * RADEG;

// amplitudes of the perturbations
const EVECTION: Radian = 1.2739 * RADEG;
const ANNUAL_EQUATION: Radian = 0.1858 * RADEG;
const THIRD_CORRECTION: Radian = 0.37 * RADEG;
const CENTER_EQUATION: Radian = 6.2886 * RADEG;
const FOURTH_CORRECTION: Radian = 0.214 * RADEG;
const VARIATION: Radian = 0.6583 * RADEG;
const NODE_CORRECTION: Radian = 0.16 * RADEG;

/// Motion of the Moon, perturbed by the Sun.
///
/// The model evaluates the [`SunModel`] at the same instant: the solar longitude and mean
/// anomaly enter the evection, the annual equation, the variation and the phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoonModel;

impl CelestialObjectModel for MoonModel {
    type Object = Moon;

    /// # Details
    /// 1. Mean orbital longitude `l` and mean anomaly `Mm` advanced from their values at J2010.
    /// 2. Corrections by the evection `Ev`, the annual equation `Ae`, the equation of the
    ///    center `Ec` and the variation `V`, giving the true orbital longitude `l''`.
    /// 3. Projection of `l''` onto the ecliptic from the corrected ascending node `N'`.
    /// 4. Phase `(1 − cos(l'' − λsun)) / 2` and angular size from the Earth-Moon distance.
    fn at(
        &self,
        days_since_j2010: f64,
        ecliptic_to_equatorial: &EclipticToEquatorialConversion,
    ) -> Result<Moon, StarsightError> {
        let d = days_since_j2010;
        let sun = SunModel.at(d, ecliptic_to_equatorial)?;
        let sun_lon = sun.ecliptic_pos().lon();
        let sin_sun_anomaly = sun.mean_anomaly().sin();

        // Step 1: mean orbital longitude and mean anomaly
        let mean_lon = angle::normalize_positive(MEAN_LON_RATE * d + MEAN_LON_AT_EPOCH);
        let mean_anomaly =
            angle::normalize_positive(mean_lon - PERIGEE_RATE * d - PERIGEE_LON_AT_EPOCH);

        // Step 2: true orbital longitude
        let evection = EVECTION * (2.0 * (mean_lon - sun_lon) - mean_anomaly).sin();
        let annual_equation = ANNUAL_EQUATION * sin_sun_anomaly;
        let third_correction = THIRD_CORRECTION * sin_sun_anomaly;
        let corrected_anomaly = mean_anomaly + evection - annual_equation - third_correction;
        let center_equation = CENTER_EQUATION * corrected_anomaly.sin();
        let fourth_correction = FOURTH_CORRECTION * (2.0 * corrected_anomaly).sin();
        let corrected_lon =
            mean_lon + evection + center_equation - annual_equation + fourth_correction;
        let variation = VARIATION * (2.0 * (corrected_lon - sun_lon)).sin();
        let true_lon = corrected_lon + variation;

        // Step 3: ecliptic position
        let node_lon = NODE_LON_AT_EPOCH - NODE_RATE * d - NODE_CORRECTION * sin_sun_anomaly;
        let (sin_arg, cos_arg) = (true_lon - node_lon).sin_cos();
        let lon = angle::normalize_positive(
            (sin_arg * INCLINATION.cos()).atan2(cos_arg) + node_lon,
        );
        let lat = (sin_arg * INCLINATION.sin()).asin();
        let equatorial_pos =
            ecliptic_to_equatorial.apply(&EclipticCoordinates::new_unchecked(lon, lat));

        // Step 4: appearance
        let phase = (1.0 - (true_lon - sun_lon).cos()) / 2.0;
        let distance = (1.0 - ECCENTRICITY * ECCENTRICITY)
            / (1.0 + ECCENTRICITY * (corrected_anomaly + center_equation).cos());
        let angular_size = ANGULAR_SIZE_AT_SEMI_MAJOR_AXIS / distance;

        Moon::new(equatorial_pos, angular_size, MAGNITUDE, phase)
    }
}
