//! # Orbital models
//!
//! Closed-form, low-precision models giving the position and the appearance of the Sun, the
//! Moon and the planets as a function of the days elapsed since [`RefEpoch::J2010`](crate::time::RefEpoch::J2010).
//!
//! All the bodies observed at one instant must be converted to equatorial coordinates with the
//! same [`EclipticToEquatorialConversion`], built once for that instant by the caller and passed
//! to every [`CelestialObjectModel::at`] call.
//!
//! The formulary is the one of the amateur-astronomy handbooks (orbital elements of the epoch
//! 2010.0, first order approximation of Kepler's equation). Its accuracy is in the order of the
//! arc-minute.
use crate::{
    coordinates::conversions::EclipticToEquatorialConversion, starsight_errors::StarsightError,
};

pub mod moon;
pub mod planet;
pub mod sun;

pub use moon::MoonModel;
pub use planet::PlanetModel;
pub use sun::SunModel;

/// A model of a celestial object, evaluated at an instant given as days since J2010.
pub trait CelestialObjectModel {
    type Object;

    /// Compute the object at `days_since_j2010`.
    ///
    /// Arguments
    /// ---------
    /// * `days_since_j2010`: fractional days elapsed since the epoch 2010.0, negative before
    /// * `ecliptic_to_equatorial`: the conversion of the observation instant
    ///
    /// Return
    /// ------
    /// * the object, or the validation error of its constructor
    fn at(
        &self,
        days_since_j2010: f64,
        ecliptic_to_equatorial: &EclipticToEquatorialConversion,
    ) -> Result<Self::Object, StarsightError>;
}
