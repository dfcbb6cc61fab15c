//! # Observed sky
//!
//! [`ObservedSky`] is the snapshot of the sky of one observer at one instant, as projected by one
//! [`StereographicProjection`]: the Sun, the Moon, the seven planets and the catalogue stars, each
//! paired with its position on the projection plane.
//!
//! A snapshot is computed once, in [`ObservedSky::new`], and never changes afterwards. A new one
//! must be built when the instant, the location or the projection changes.
//!
//! ## Positions
//! The positions of the planets and of the stars are stored as flat arrays of interleaved
//! coordinates `[x0, y0, x1, y1, …]`, indexed like [`ObservedSky::planets`] and
//! [`ObservedSky::stars`]. Asterisms are drawn through [`ObservedSky::asterism_indices`], whose
//! values index the star array.
//!
//! Bodies located near the antipode of the projection center get non-finite coordinates.
//! They are kept in the arrays and never returned by [`ObservedSky::object_closest_to`].
use std::sync::Arc;

use hifitime::Epoch;
use itertools::Itertools;
use tracing::debug;

use crate::{
    bodies::{Asterism, CelestialObject, Moon, Planet, Star, Sun},
    catalogue::StarCatalogue,
    coordinates::{
        conversions::{
            EclipticToEquatorialConversion, EquatorialToHorizontalConversion, Transform,
        },
        CartesianCoordinates, EquatorialCoordinates, GeographicCoordinates,
    },
    models::{CelestialObjectModel, MoonModel, PlanetModel, SunModel},
    projection::StereographicProjection,
    starsight_errors::StarsightError,
    time::RefEpoch,
};

/// A body of the snapshot, borrowed during a nearest-object query.
enum Candidate<'a> {
    Sun,
    Moon,
    Planet(&'a Planet),
    Star(&'a Star),
}

/// Read the `index`-th `(x, y)` pair of a flat position array.
fn position_at(positions: &[f64], index: usize) -> Option<CartesianCoordinates> {
    let x = *positions.get(2 * index)?;
    let y = *positions.get(2 * index + 1)?;
    Some(CartesianCoordinates::new(x, y))
}

fn pairs(positions: &[f64]) -> impl Iterator<Item = CartesianCoordinates> + '_ {
    positions
        .iter()
        .tuples()
        .map(|(x, y)| CartesianCoordinates::new(*x, *y))
}

/// The projected sky of one observer at one instant.
#[derive(Debug, Clone)]
pub struct ObservedSky {
    instant: Epoch,
    sun: Sun,
    sun_position: CartesianCoordinates,
    moon: Moon,
    moon_position: CartesianCoordinates,
    planets: Vec<Planet>,
    planet_positions: Vec<f64>,
    catalogue: Arc<StarCatalogue>,
    star_positions: Vec<f64>,
}

impl ObservedSky {
    /// Compute the sky seen from `location` at `instant`.
    ///
    /// Arguments
    /// ---------
    /// * `instant`: the observation instant
    /// * `location`: the observer's location on the Earth
    /// * `projection`: the projection of the local sky on the plane
    /// * `catalogue`: the stars and asterisms to observe, shared with the caller
    ///
    /// Return
    /// ------
    /// * the snapshot, or the validation error of a computed body
    ///
    /// # Details
    /// One ecliptic to equatorial and one equatorial to horizontal conversion are built for the
    /// instant and shared by every body: all of them see the same obliquity and sidereal time.
    pub fn new(
        instant: &Epoch,
        location: &GeographicCoordinates,
        projection: &StereographicProjection,
        catalogue: Arc<StarCatalogue>,
    ) -> Result<Self, StarsightError> {
        let days = RefEpoch::J2010.days_until(instant);
        let ecliptic_to_equatorial = EclipticToEquatorialConversion::new(instant);
        let equatorial_to_horizontal = EquatorialToHorizontalConversion::new(instant, location);
        let project = |equ: &EquatorialCoordinates| {
            projection.apply(&equatorial_to_horizontal.apply(equ))
        };

        let sun = SunModel.at(days, &ecliptic_to_equatorial)?;
        let sun_position = project(sun.equatorial_pos());

        let moon = MoonModel.at(days, &ecliptic_to_equatorial)?;
        let moon_position = project(moon.equatorial_pos());

        let planets = PlanetModel::EXTRATERRESTRIAL
            .iter()
            .map(|model| model.at(days, &ecliptic_to_equatorial))
            .collect::<Result<Vec<Planet>, StarsightError>>()?;
        let planet_positions = planets
            .iter()
            .flat_map(|planet| {
                let xy = project(planet.equatorial_pos());
                [xy.x(), xy.y()]
            })
            .collect::<Vec<f64>>();

        let star_positions = catalogue
            .stars()
            .iter()
            .flat_map(|star| {
                let xy = project(star.equatorial_pos());
                [xy.x(), xy.y()]
            })
            .collect::<Vec<f64>>();

        debug!(
            %instant,
            %location,
            planets = planets.len(),
            stars = catalogue.stars().len(),
            "observed sky computed"
        );

        Ok(ObservedSky {
            instant: *instant,
            sun,
            sun_position,
            moon,
            moon_position,
            planets,
            planet_positions,
            catalogue,
            star_positions,
        })
    }

    pub fn instant(&self) -> &Epoch {
        &self.instant
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn sun_position(&self) -> &CartesianCoordinates {
        &self.sun_position
    }

    pub fn moon(&self) -> &Moon {
        &self.moon
    }

    pub fn moon_position(&self) -> &CartesianCoordinates {
        &self.moon_position
    }

    /// The seven planets, in the order of [`PlanetModel::EXTRATERRESTRIAL`].
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Interleaved `(x, y)` positions of the planets, twice as long as [`ObservedSky::planets`].
    pub fn planet_positions(&self) -> &[f64] {
        &self.planet_positions
    }

    pub fn planet_position(&self, index: usize) -> Option<CartesianCoordinates> {
        position_at(&self.planet_positions, index)
    }

    pub fn stars(&self) -> &[Star] {
        self.catalogue.stars()
    }

    /// Interleaved `(x, y)` positions of the stars, twice as long as [`ObservedSky::stars`].
    pub fn star_positions(&self) -> &[f64] {
        &self.star_positions
    }

    pub fn star_position(&self, index: usize) -> Option<CartesianCoordinates> {
        position_at(&self.star_positions, index)
    }

    pub fn asterisms(&self) -> &[Asterism] {
        self.catalogue.asterisms()
    }

    /// See [`StarCatalogue::asterism_indices`].
    pub fn asterism_indices(&self, asterism: &Asterism) -> Result<&[usize], StarsightError> {
        self.catalogue.asterism_indices(asterism)
    }

    pub fn catalogue(&self) -> &Arc<StarCatalogue> {
        &self.catalogue
    }

    /// The body whose projected position is the nearest to `point`.
    ///
    /// Arguments
    /// ---------
    /// * `point`: a point of the projection plane
    /// * `max_distance`: the largest accepted distance between `point` and the body
    ///
    /// Return
    /// ------
    /// * the nearest of the Sun, the Moon, the planets and the stars if it lies within
    ///   `max_distance` of `point`, `None` otherwise or when `max_distance` is NaN. On equal
    ///   distances the first body in that order wins.
    pub fn object_closest_to(
        &self,
        point: &CartesianCoordinates,
        max_distance: f64,
    ) -> Option<CelestialObject> {
        let bodies = [
            (self.sun_position, Candidate::Sun),
            (self.moon_position, Candidate::Moon),
        ]
        .into_iter()
        .chain(pairs(&self.planet_positions).zip(self.planets.iter().map(Candidate::Planet)))
        .chain(pairs(&self.star_positions).zip(self.stars().iter().map(Candidate::Star)));

        let (distance, closest) = bodies
            .map(|(position, body)| (position.distance_to(point), body))
            .filter(|(distance, _)| !distance.is_nan())
            .min_by(|(d1, _), (d2, _)| d1.total_cmp(d2))?;

        if max_distance.is_nan() || distance > max_distance {
            return None;
        }
        Some(match closest {
            Candidate::Sun => CelestialObject::Sun(self.sun.clone()),
            Candidate::Moon => CelestialObject::Moon(self.moon.clone()),
            Candidate::Planet(planet) => CelestialObject::Planet(planet.clone()),
            Candidate::Star(star) => CelestialObject::Star(star.clone()),
        })
    }
}

#[cfg(test)]
mod observed_sky_test {
    use super::*;
    use crate::coordinates::HorizontalCoordinates;

    fn star(hip: u32, ra_deg: f64, dec_deg: f64) -> Star {
        Star::new(
            hip,
            &format!("HIP {hip}"),
            EquatorialCoordinates::of_deg(ra_deg, dec_deg).unwrap(),
            2.0,
            0.3,
        )
        .unwrap()
    }

    fn instant() -> Epoch {
        Epoch::from_gregorian_utc_hms(2020, 2, 17, 20, 15, 0)
    }

    fn location() -> GeographicCoordinates {
        GeographicCoordinates::of_deg(6.57, 46.52).unwrap()
    }

    fn projection() -> StereographicProjection {
        StereographicProjection::new(HorizontalCoordinates::of_deg(180.0, 45.0).unwrap())
    }

    fn sky(stars: Vec<Star>, asterisms: Vec<Asterism>) -> ObservedSky {
        let catalogue = StarCatalogue::new(stars, asterisms).unwrap();
        ObservedSky::new(&instant(), &location(), &projection(), Arc::new(catalogue)).unwrap()
    }

    #[test]
    fn test_snapshot() {
        let sirius = star(32349, 101.287155, -16.716116);
        let stars = vec![star(1, 10.0, 20.0), sirius.clone(), star(3, 300.0, 60.0)];
        let triangle = Asterism::new(stars.clone()).unwrap();
        let sky = sky(stars, vec![triangle.clone()]);

        assert_eq!(sky.instant(), &instant());
        assert_eq!(sky.planets().len(), 7);
        assert_eq!(sky.planet_positions().len(), 14);
        assert_eq!(sky.stars().len(), 3);
        assert_eq!(sky.star_positions().len(), 6);
        assert_eq!(sky.asterisms().len(), 1);
        assert_eq!(sky.asterism_indices(&triangle).unwrap(), &[0, 1, 2]);
        assert!(sky.star_position(3).is_none());
        assert_eq!(sky.planets()[0].name(), "Mercury");
        assert_eq!(sky.sun().name(), "Sun");

        let expected = projection().apply(
            &EquatorialToHorizontalConversion::new(&instant(), &location())
                .apply(sirius.equatorial_pos()),
        );
        let position = sky.star_position(1).unwrap();
        assert_eq!(position.x(), expected.x());
        assert_eq!(position.y(), expected.y());
        assert_eq!(sky.star_positions()[2], expected.x());
        assert_eq!(sky.star_positions()[3], expected.y());

        let mars = sky.planet_position(2).unwrap();
        assert_eq!(mars.x(), sky.planet_positions()[4]);
        assert_eq!(mars.y(), sky.planet_positions()[5]);
    }

    #[test]
    fn test_object_closest_to() {
        let sky = sky(vec![star(1, 10.0, 20.0), star(2, 101.287155, -16.716116)], vec![]);

        let sirius = sky.star_position(1).unwrap();
        let closest = sky.object_closest_to(&sirius, 0.0).unwrap();
        assert_eq!(closest.name(), "HIP 2");
        assert!(matches!(closest, CelestialObject::Star(_)));

        let closest = sky.object_closest_to(sky.sun_position(), 0.1).unwrap();
        assert!(matches!(closest, CelestialObject::Sun(_)));

        let closest = sky.object_closest_to(sky.moon_position(), 0.1).unwrap();
        assert!(closest.info().starts_with("Moon ("));

        let jupiter = sky.planet_position(3).unwrap();
        assert_eq!(sky.object_closest_to(&jupiter, 1e-9).unwrap().name(), "Jupiter");
    }

    #[test]
    fn test_nothing_close_enough() {
        let sky = sky(vec![star(1, 10.0, 20.0)], vec![]);
        let far = CartesianCoordinates::new(1e6, -1e6);
        assert!(sky.object_closest_to(&far, 0.1).is_none());
        assert!(sky.object_closest_to(&far, f64::INFINITY).is_some());
        assert!(sky.object_closest_to(&far, f64::NAN).is_none());
    }

    #[test]
    fn test_ties_go_to_the_first_body() {
        let sky = sky(vec![star(7, 50.0, 10.0), star(8, 50.0, 10.0)], vec![]);
        let position = sky.star_position(1).unwrap();
        let closest = sky.object_closest_to(&position, 0.0).unwrap();
        assert_eq!(closest.name(), "HIP 7");
    }
}
