use std::f64::consts::PI;

use crate::{
    bodies::Planet,
    constants::{ArcSec, Degree, Radian, TROPICAL_YEAR},
    coordinates::{
        conversions::{EclipticToEquatorialConversion, Transform},
        EclipticCoordinates,
    },
    math::angle::{self, TAU},
    models::CelestialObjectModel,
    starsight_errors::StarsightError,
};

/// Orbital elements of a planet at the epoch 2010.0.
///
/// Units:
/// * `period`: tropical years
/// * `lon_at_epoch`, `lon_at_perihelion`, `inclination`, `node_lon`: degrees
/// * `semi_major_axis`: AU
/// * `angular_size_at_1_au`: arcseconds
#[derive(Debug, Clone, Copy)]
pub struct PlanetModel {
    name: &'static str,
    period: f64,
    lon_at_epoch: Degree,
    lon_at_perihelion: Degree,
    eccentricity: f64,
    semi_major_axis: f64,
    inclination: Degree,
    node_lon: Degree,
    angular_size_at_1_au: ArcSec,
    magnitude_at_1_au: f64,
}

/// Heliocentric position of a planet.
#[derive(Debug, Clone, Copy)]
struct Heliocentric {
    /// longitude in the orbital plane, l
    lon: Radian,
    /// distance to the Sun, r
    radius: f64,
    /// latitude, ψ
    lat: Radian,
    /// longitude projected on the ecliptic, l'
    ecliptic_lon: Radian,
    /// distance projected on the ecliptic, r'
    ecliptic_radius: f64,
}

impl PlanetModel {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        name: &'static str,
        period: f64,
        lon_at_epoch: Degree,
        lon_at_perihelion: Degree,
        eccentricity: f64,
        semi_major_axis: f64,
        inclination: Degree,
        node_lon: Degree,
        angular_size_at_1_au: ArcSec,
        magnitude_at_1_au: f64,
    ) -> Self {
        PlanetModel {
            name,
            period,
            lon_at_epoch,
            lon_at_perihelion,
            eccentricity,
            semi_major_axis,
            inclination,
            node_lon,
            angular_size_at_1_au,
            magnitude_at_1_au,
        }
    }

    pub const MERCURY: PlanetModel = PlanetModel::new(
        "Mercury", 0.24085, 75.5671, 77.612, 0.205627, 0.387098, 7.0051, 48.449, 6.74, -0.42,
    );
    pub const VENUS: PlanetModel = PlanetModel::new(
        "Venus", 0.615207, 272.30044, 131.54, 0.006812, 0.723329, 3.3947, 76.769, 16.92, -4.40,
    );
    /// The observer's frame: its heliocentric position is subtracted from the other planets'.
    pub const EARTH: PlanetModel = PlanetModel::new(
        "Earth", 0.999996, 99.556772, 103.2055, 0.016671, 0.999985, 0.0, 0.0, 0.0, 0.0,
    );
    pub const MARS: PlanetModel = PlanetModel::new(
        "Mars", 1.880765, 109.09646, 336.217, 0.093348, 1.523689, 1.8497, 49.632, 9.36, -1.52,
    );
    pub const JUPITER: PlanetModel = PlanetModel::new(
        "Jupiter", 11.857911, 337.917132, 14.6633, 0.048907, 5.20278, 1.3035, 100.595, 196.74,
        -9.40,
    );
    pub const SATURN: PlanetModel = PlanetModel::new(
        "Saturn", 29.310579, 172.398316, 89.567, 0.053853, 9.51134, 2.4873, 113.752, 165.60,
        -8.88,
    );
    pub const URANUS: PlanetModel = PlanetModel::new(
        "Uranus", 84.039492, 356.135400, 172.884833, 0.046321, 19.21814, 0.773059, 73.926961,
        65.80, -7.19,
    );
    pub const NEPTUNE: PlanetModel = PlanetModel::new(
        "Neptune", 165.84539, 326.895127, 23.07, 0.010483, 30.1985, 1.7673, 131.879, 62.20,
        -6.87,
    );

    /// The planets observable from the Earth, ordered by distance to the Sun.
    pub const EXTRATERRESTRIAL: [PlanetModel; 7] = [
        PlanetModel::MERCURY,
        PlanetModel::VENUS,
        PlanetModel::MARS,
        PlanetModel::JUPITER,
        PlanetModel::SATURN,
        PlanetModel::URANUS,
        PlanetModel::NEPTUNE,
    ];

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn is_inner(&self) -> bool {
        self.semi_major_axis < PlanetModel::EARTH.semi_major_axis
    }

    fn heliocentric(&self, days_since_j2010: f64) -> Heliocentric {
        let lon_at_perihelion = angle::of_deg(self.lon_at_perihelion);
        let node_lon = angle::of_deg(self.node_lon);
        let inclination = angle::of_deg(self.inclination);

        let mean_anomaly = TAU / TROPICAL_YEAR * days_since_j2010 / self.period
            + angle::of_deg(self.lon_at_epoch)
            - lon_at_perihelion;
        let true_anomaly = mean_anomaly + 2.0 * self.eccentricity * mean_anomaly.sin();
        let radius = self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
            / (1.0 + self.eccentricity * true_anomaly.cos());
        let lon = true_anomaly + lon_at_perihelion;

        let (sin_arg, cos_arg) = (lon - node_lon).sin_cos();
        let lat = (sin_arg * inclination.sin()).asin();
        Heliocentric {
            lon,
            radius,
            lat,
            ecliptic_lon: (sin_arg * inclination.cos()).atan2(cos_arg) + node_lon,
            ecliptic_radius: radius * lat.cos(),
        }
    }
}

impl CelestialObjectModel for PlanetModel {
    type Object = Planet;

    /// # Details
    /// 1. Heliocentric positions of the planet and of the Earth.
    /// 2. Geocentric ecliptic longitude, with distinct formulas for the inner and the outer
    ///    planets, then latitude.
    /// 3. Distance to the Earth, giving the angular size, and magnitude corrected by the phase
    ///    `F = (1 + cos(λ − l)) / 2`.
    ///
    /// Return
    /// ------
    /// * the planet, or [`StarsightError::InvalidArgument`] when called on [`PlanetModel::EARTH`]
    fn at(
        &self,
        days_since_j2010: f64,
        ecliptic_to_equatorial: &EclipticToEquatorialConversion,
    ) -> Result<Planet, StarsightError> {
        if self.name == PlanetModel::EARTH.name {
            return Err(StarsightError::InvalidArgument(
                "the Earth is the observer's frame, not an observable planet".into(),
            ));
        }

        // Step 1: heliocentric positions
        let planet = self.heliocentric(days_since_j2010);
        let earth = PlanetModel::EARTH.heliocentric(days_since_j2010);
        let (l, r) = (earth.lon, earth.radius);

        // Step 2: geocentric ecliptic coordinates
        let lon_diff = planet.ecliptic_lon - l;
        let lon = if self.is_inner() {
            PI + l
                + (planet.ecliptic_radius * (-lon_diff).sin())
                    .atan2(r - planet.ecliptic_radius * lon_diff.cos())
        } else {
            planet.ecliptic_lon
                + (r * lon_diff.sin()).atan2(planet.ecliptic_radius - r * lon_diff.cos())
        };
        let lon = angle::normalize_positive(lon);
        let lat = (planet.ecliptic_radius * planet.lat.tan() * (lon - planet.ecliptic_lon).sin()
            / (r * lon_diff.sin()))
        .atan();
        let equatorial_pos =
            ecliptic_to_equatorial.apply(&EclipticCoordinates::new_unchecked(lon, lat));

        // Step 3: appearance
        let distance = (r * r + planet.radius * planet.radius
            - 2.0 * r * planet.radius * (planet.lon - l).cos() * planet.lat.cos())
        .sqrt();
        let angular_size = angle::of_arc_sec(self.angular_size_at_1_au) / distance;
        let phase = (1.0 + (lon - planet.lon).cos()) / 2.0;
        let magnitude =
            self.magnitude_at_1_au + 5.0 * (planet.radius * distance / phase.sqrt()).log10();

        Planet::new(self.name, equatorial_pos, angular_size, magnitude)
    }
}
