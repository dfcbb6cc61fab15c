//! # Star catalogue
//!
//! A [`StarCatalogue`] owns the canonical list of stars and the asterisms drawn between them.
//! For each asterism it stores the *indices* of its stars in the star list: a renderer resolves
//! the projected positions of an asterism by plain index lookups into the position array of an
//! [`ObservedSky`](crate::observed_sky::ObservedSky).
//!
//! Catalogues are frozen once built. They are accumulated in a [`CatalogueBuilder`], either star by
//! star or from data files through a [`CatalogueLoader`]:
//!
//! ```rust,no_run
//! use std::fs::File;
//! use starsight::catalogue::{
//!     loaders::{AsterismLoader, HygDatabaseLoader},
//!     CatalogueBuilder,
//! };
//!
//! # fn main() -> Result<(), starsight::starsight_errors::StarsightError> {
//! let mut builder = CatalogueBuilder::new();
//! builder
//!     .load_from(File::open("hygdata_v3.csv")?, &HygDatabaseLoader)?
//!     .load_from(File::open("asterisms.txt")?, &AsterismLoader)?;
//! let catalogue = builder.build()?;
//! println!("{} stars", catalogue.stars().len());
//! # Ok(())
//! # }
//! ```
use std::{collections::HashMap, io::Read, sync::Arc};

use tracing::debug;

use crate::{
    bodies::{Asterism, Star},
    starsight_errors::StarsightError,
};

pub mod loaders;

/// Source of stars and asterisms in a given data format.
pub trait CatalogueLoader {
    /// Read every record of `reader` and add it to `builder`.
    fn load<R: Read>(&self, reader: R, builder: &mut CatalogueBuilder)
        -> Result<(), StarsightError>;
}

/// Index of the first star carrying each Hipparcos id.
fn index_by_hipparcos_id(stars: &[Star]) -> HashMap<u32, usize> {
    let mut index = HashMap::with_capacity(stars.len());
    for (i, star) in stars.iter().enumerate() {
        index.entry(star.hipparcos_id()).or_insert(i);
    }
    index
}

/// Immutable set of stars and asterisms.
///
/// Cloning a catalogue is cheap: the star and asterism lists are shared.
#[derive(Debug, Clone)]
pub struct StarCatalogue {
    stars: Arc<[Star]>,
    asterisms: Arc<[Asterism]>,
    asterism_indices: Arc<[Vec<usize>]>,
}

impl StarCatalogue {
    /// Build a catalogue.
    ///
    /// Arguments
    /// ---------
    /// * `stars`: the stars, in the order of the catalogue
    /// * `asterisms`: asterisms made of stars of `stars`
    ///
    /// Return
    /// ------
    /// * the catalogue, or [`StarsightError::StarNotInCatalogue`] with the Hipparcos id of the
    ///   first asterism star missing from `stars`
    pub fn new(stars: Vec<Star>, asterisms: Vec<Asterism>) -> Result<Self, StarsightError> {
        let index = index_by_hipparcos_id(&stars);
        let asterism_indices = asterisms
            .iter()
            .map(|asterism| {
                asterism
                    .hipparcos_ids()
                    .map(|id| {
                        index
                            .get(&id)
                            .copied()
                            .ok_or(StarsightError::StarNotInCatalogue(id))
                    })
                    .collect::<Result<Vec<usize>, StarsightError>>()
            })
            .collect::<Result<Vec<_>, StarsightError>>()?;

        debug!(
            stars = stars.len(),
            asterisms = asterisms.len(),
            "star catalogue built"
        );
        Ok(StarCatalogue {
            stars: stars.into(),
            asterisms: asterisms.into(),
            asterism_indices: asterism_indices.into(),
        })
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Indices, in [`StarCatalogue::stars`], of the stars of `asterism`, in the asterism order.
    ///
    /// Return
    /// ------
    /// * the indices, or [`StarsightError::AsterismNotInCatalogue`] if no asterism of this
    ///   catalogue is made of the same stars
    pub fn asterism_indices(&self, asterism: &Asterism) -> Result<&[usize], StarsightError> {
        self.asterisms
            .iter()
            .position(|candidate| candidate.same_stars_as(asterism))
            .map(|i| self.asterism_indices[i].as_slice())
            .ok_or(StarsightError::AsterismNotInCatalogue)
    }
}

/// Mutable accumulator of stars and asterisms, frozen into a [`StarCatalogue`] by
/// [`CatalogueBuilder::build`].
#[derive(Debug, Default)]
pub struct CatalogueBuilder {
    stars: Vec<Star>,
    asterisms: Vec<Asterism>,
}

impl CatalogueBuilder {
    pub fn new() -> Self {
        CatalogueBuilder::default()
    }

    pub fn add_star(&mut self, star: Star) -> &mut Self {
        self.stars.push(star);
        self
    }

    pub fn add_asterism(&mut self, asterism: Asterism) -> &mut Self {
        self.asterisms.push(asterism);
        self
    }

    /// Stars added so far.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Asterisms added so far.
    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Add the content of `reader`, decoded by `loader`.
    pub fn load_from<R: Read, L: CatalogueLoader>(
        &mut self,
        reader: R,
        loader: &L,
    ) -> Result<&mut Self, StarsightError> {
        loader.load(reader, self)?;
        Ok(self)
    }

    /// Freeze the builder, see [`StarCatalogue::new`].
    pub fn build(self) -> Result<StarCatalogue, StarsightError> {
        StarCatalogue::new(self.stars, self.asterisms)
    }
}

#[cfg(test)]
mod catalogue_test {
    use super::*;
    use crate::coordinates::EquatorialCoordinates;

    fn star(hip: u32) -> Star {
        Star::new(
            hip,
            &format!("HIP {hip}"),
            EquatorialCoordinates::of_deg(hip as f64, 0.0).unwrap(),
            1.0,
            0.5,
        )
        .unwrap()
    }

    #[test]
    fn test_build() {
        let mut builder = CatalogueBuilder::new();
        for hip in 1..=5 {
            builder.add_star(star(hip));
        }
        let big_dipper = Asterism::new(vec![star(4), star(2), star(5)]).unwrap();
        let pair = Asterism::new(vec![star(1), star(3)]).unwrap();
        builder
            .add_asterism(big_dipper.clone())
            .add_asterism(pair.clone());
        assert_eq!(builder.stars().len(), 5);
        assert_eq!(builder.asterisms().len(), 2);

        let catalogue = builder.build().unwrap();
        assert_eq!(catalogue.stars().len(), 5);
        assert_eq!(catalogue.asterisms().len(), 2);
        assert_eq!(catalogue.asterism_indices(&big_dipper).unwrap(), &[3, 1, 4]);
        assert_eq!(catalogue.asterism_indices(&pair).unwrap(), &[0, 2]);
    }

    #[test]
    fn test_asterism_identity() {
        let catalogue = StarCatalogue::new(
            vec![star(1), star(2)],
            vec![Asterism::new(vec![star(1), star(2)]).unwrap()],
        )
        .unwrap();

        // an equal asterism built separately resolves
        let same = Asterism::new(vec![star(1), star(2)]).unwrap();
        assert_eq!(catalogue.asterism_indices(&same).unwrap(), &[0, 1]);

        let reversed = Asterism::new(vec![star(2), star(1)]).unwrap();
        assert_eq!(
            catalogue.asterism_indices(&reversed),
            Err(StarsightError::AsterismNotInCatalogue)
        );
    }

    #[test]
    fn test_missing_star() {
        let result = StarCatalogue::new(
            vec![star(1), star(2)],
            vec![Asterism::new(vec![star(1), star(7)]).unwrap()],
        );
        assert_eq!(result.err(), Some(StarsightError::StarNotInCatalogue(7)));
    }

    #[test]
    fn test_duplicated_hipparcos_id() {
        let catalogue = StarCatalogue::new(
            vec![star(1), star(2), star(1)],
            vec![Asterism::new(vec![star(2), star(1)]).unwrap()],
        )
        .unwrap();
        assert_eq!(catalogue.stars().len(), 3);
        assert_eq!(catalogue.asterism_indices(&catalogue.asterisms()[0]).unwrap(), &[1, 0]);
    }

    #[test]
    fn test_empty_catalogue() {
        let catalogue = CatalogueBuilder::new().build().unwrap();
        assert!(catalogue.stars().is_empty());
        assert!(catalogue.asterisms().is_empty());
    }
}
