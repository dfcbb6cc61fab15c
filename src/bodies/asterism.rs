use std::sync::Arc;

use crate::{bodies::Star, math::interval::check_argument, starsight_errors::StarsightError};

/// A non-empty, ordered group of stars.
///
/// The stars are shared: cloning an asterism does not copy them.
#[derive(Debug, Clone)]
pub struct Asterism {
    stars: Arc<[Star]>,
}

impl Asterism {
    pub fn new(stars: Vec<Star>) -> Result<Self, StarsightError> {
        check_argument(!stars.is_empty(), "an asterism needs at least one star")?;
        Ok(Asterism {
            stars: stars.into(),
        })
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Hipparcos ids of the stars, in order. Two asterisms with the same sequence of ids are
    /// the same asterism.
    pub fn hipparcos_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.stars.iter().map(Star::hipparcos_id)
    }

    /// Whether `other` is made of the same stars, in the same order.
    pub fn same_stars_as(&self, other: &Asterism) -> bool {
        self.hipparcos_ids().eq(other.hipparcos_ids())
    }
}
