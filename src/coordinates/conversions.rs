//! # Conversions between celestial frames
//!
//! The conversions are small functors built once for an observation instant (and location),
//! then applied to any number of coordinates:
//!
//! ```text
//! Ecliptic --(obliquity ε at the instant)--> Equatorial --(local sidereal time, latitude)--> Horizontal
//!          <------------------------------------
//! ```
//!
//! Every body observed at the same instant must go through the **same**
//! [`EclipticToEquatorialConversion`] so that they share one obliquity value.
//!
//! The functors carry no identity and do not implement `PartialEq`.
use hifitime::Epoch;

use crate::{
    constants::{Radian, RADEG},
    coordinates::{
        EclipticCoordinates, EquatorialCoordinates, GeographicCoordinates, HorizontalCoordinates,
    },
    math::{angle, polynomial::Polynomial},
    time::{sidereal_time_local, RefEpoch},
};

/// A pure mapping from one coordinate kind to another.
pub trait Transform<Input> {
    type Output;

    fn apply(&self, input: &Input) -> Self::Output;
}

/// Constant term of the obliquity, 23°26'21.45"
const EPSILON_0: Radian = (23.0 + 26.0 / 60.0 + 21.45 / 3600.0) * RADEG;

/// Secular variation of the obliquity in arcseconds, polynomial of the Julian centuries since J2000
const OBLIQUITY_POLYNOMIAL: Polynomial =
    Polynomial::from_static(&[0.00181, -0.0006, -46.815, 0.0]);

/// Compute the mean obliquity of the ecliptic at a given instant.
///
/// The obliquity ε is the angle between the Earth's equator and the ecliptic plane:
///
/// ```text
/// ε(T) = 23°26'21.45" + (0.00181·T³ − 0.0006·T² − 46.815·T)"
/// ```
///
/// where `T` is the number of Julian centuries since J2000, the polynomial being evaluated
/// with Horner's method.
///
/// Arguments
/// ---------
/// * `instant`: the observation instant
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in radians.
pub fn obliquity(instant: &Epoch) -> Radian {
    let t = RefEpoch::J2000.julian_centuries_until(instant);
    angle::of_arc_sec(OBLIQUITY_POLYNOMIAL.at(t)) + EPSILON_0
}

/// Ecliptic → equatorial conversion at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct EclipticToEquatorialConversion {
    obliquity: Radian,
    cos_obliquity: f64,
    sin_obliquity: f64,
}

impl EclipticToEquatorialConversion {
    pub fn new(instant: &Epoch) -> Self {
        let obliquity = obliquity(instant);
        EclipticToEquatorialConversion {
            obliquity,
            cos_obliquity: obliquity.cos(),
            sin_obliquity: obliquity.sin(),
        }
    }

    pub fn obliquity(&self) -> Radian {
        self.obliquity
    }
}

impl Transform<EclipticCoordinates> for EclipticToEquatorialConversion {
    type Output = EquatorialCoordinates;

    /// ```text
    /// α = atan2(sin λ·cos ε − tan β·sin ε, cos λ)
    /// δ = asin(sin β·cos ε + cos β·sin ε·sin λ)
    /// ```
    fn apply(&self, ecl: &EclipticCoordinates) -> EquatorialCoordinates {
        let (sin_lon, cos_lon) = ecl.lon().sin_cos();
        let (sin_lat, cos_lat) = ecl.lat().sin_cos();

        let ra = (sin_lon * self.cos_obliquity - ecl.lat().tan() * self.sin_obliquity)
            .atan2(cos_lon);
        let sin_dec = sin_lat * self.cos_obliquity + cos_lat * self.sin_obliquity * sin_lon;

        EquatorialCoordinates::new_unchecked(
            angle::normalize_positive(ra),
            sin_dec.clamp(-1.0, 1.0).asin(),
        )
    }
}

/// Equatorial → ecliptic conversion at a fixed instant, the inverse of
/// [`EclipticToEquatorialConversion`].
#[derive(Debug, Clone, Copy)]
pub struct EquatorialToEclipticConversion {
    cos_obliquity: f64,
    sin_obliquity: f64,
}

impl EquatorialToEclipticConversion {
    pub fn new(instant: &Epoch) -> Self {
        let obliquity = obliquity(instant);
        EquatorialToEclipticConversion {
            cos_obliquity: obliquity.cos(),
            sin_obliquity: obliquity.sin(),
        }
    }
}

impl Transform<EquatorialCoordinates> for EquatorialToEclipticConversion {
    type Output = EclipticCoordinates;

    /// ```text
    /// λ = atan2(sin α·cos ε + tan δ·sin ε, cos α)
    /// β = asin(sin δ·cos ε − cos δ·sin ε·sin α)
    /// ```
    fn apply(&self, equ: &EquatorialCoordinates) -> EclipticCoordinates {
        let (sin_ra, cos_ra) = equ.ra().sin_cos();
        let (sin_dec, cos_dec) = equ.dec().sin_cos();

        let lon = (sin_ra * self.cos_obliquity + equ.dec().tan() * self.sin_obliquity)
            .atan2(cos_ra);
        let sin_lat = sin_dec * self.cos_obliquity - cos_dec * self.sin_obliquity * sin_ra;

        EclipticCoordinates::new_unchecked(
            angle::normalize_positive(lon),
            sin_lat.clamp(-1.0, 1.0).asin(),
        )
    }
}

/// Equatorial → horizontal conversion for an observer at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct EquatorialToHorizontalConversion {
    local_sidereal_time: Radian,
    cos_lat: f64,
    sin_lat: f64,
}

impl EquatorialToHorizontalConversion {
    pub fn new(instant: &Epoch, location: &GeographicCoordinates) -> Self {
        let (sin_lat, cos_lat) = location.lat().sin_cos();
        EquatorialToHorizontalConversion {
            local_sidereal_time: sidereal_time_local(instant, location),
            cos_lat,
            sin_lat,
        }
    }

    pub fn local_sidereal_time(&self) -> Radian {
        self.local_sidereal_time
    }
}

impl Transform<EquatorialCoordinates> for EquatorialToHorizontalConversion {
    type Output = HorizontalCoordinates;

    /// ```text
    /// H = sidereal time − α
    /// sin(h) = sin δ·sin φ + cos δ·cos φ·cos H
    /// A = atan2(−cos δ·cos φ·sin H, sin δ − sin φ·sin(h))
    /// ```
    fn apply(&self, equ: &EquatorialCoordinates) -> HorizontalCoordinates {
        let hour_angle = self.local_sidereal_time - equ.ra();
        let (sin_ha, cos_ha) = hour_angle.sin_cos();
        let (sin_dec, cos_dec) = equ.dec().sin_cos();

        let sin_alt = (sin_dec * self.sin_lat + cos_dec * self.cos_lat * cos_ha).clamp(-1.0, 1.0);
        let az = (-cos_dec * self.cos_lat * sin_ha).atan2(sin_dec - self.sin_lat * sin_alt);

        HorizontalCoordinates::new_unchecked(angle::normalize_positive(az), sin_alt.asin())
    }
}
