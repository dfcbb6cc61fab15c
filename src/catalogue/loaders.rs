//! Loaders of the star and asterism data files.
//!
//! * [`HygDatabaseLoader`] reads the stars of the [HYG database](https://github.com/astronexus/HYG-Database)
//!   (CSV with a header row).
//! * [`AsterismLoader`] reads asterisms, one per line, as comma-separated Hipparcos ids of stars
//!   already loaded in the builder.
use std::{
    collections::HashMap,
    io::{BufRead, BufReader, Read},
};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    bodies::{Asterism, Star},
    catalogue::{CatalogueBuilder, CatalogueLoader},
    coordinates::EquatorialCoordinates,
    math::angle,
    starsight_errors::StarsightError,
};

/// The columns of a HYG record used by the loader. The other columns are ignored.
#[derive(Debug, Deserialize)]
struct HygRecord {
    hip: Option<u32>,
    proper: Option<String>,
    bayer: Option<String>,
    con: Option<String>,
    rarad: f64,
    decrad: f64,
    mag: Option<f64>,
    ci: Option<f64>,
}

impl HygRecord {
    /// Proper name, or `"<bayer> <constellation>"` when the star has none.
    fn name(&self) -> String {
        match self.proper.as_deref() {
            Some(proper) if !proper.is_empty() => proper.to_string(),
            _ => format!(
                "{} {}",
                self.bayer.as_deref().filter(|b| !b.is_empty()).unwrap_or("?"),
                self.con.as_deref().unwrap_or_default()
            ),
        }
    }

    fn into_star(self, hipparcos_id: u32) -> Result<Star, StarsightError> {
        let equatorial_pos = EquatorialCoordinates::new(
            angle::normalize_positive(self.rarad),
            self.decrad,
        )?;
        Star::new(
            hipparcos_id,
            &self.name(),
            equatorial_pos,
            self.mag.unwrap_or(0.0),
            self.ci.unwrap_or(0.0),
        )
    }
}

/// Loader of the HYG star database.
///
/// Records without a Hipparcos id (the Sun, stars absent from Hipparcos) are skipped. Missing
/// magnitudes and color indices default to 0. Stars are added to the builder only once every
/// record has been read, so a failed load leaves it untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct HygDatabaseLoader;

impl CatalogueLoader for HygDatabaseLoader {
    fn load<R: Read>(
        &self,
        reader: R,
        builder: &mut CatalogueBuilder,
    ) -> Result<(), StarsightError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let mut skipped = 0;
        let mut stars = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line() as usize);
            let hyg: HygRecord = record.deserialize(Some(&headers))?;

            match hyg.hip {
                Some(hip) if hip > 0 => {
                    let star = hyg
                        .into_star(hip)
                        .map_err(|e| StarsightError::ParseCatalogueError {
                            line,
                            reason: e.to_string(),
                        })?;
                    stars.push(star);
                }
                _ => {
                    warn!(line, "HYG record without Hipparcos id skipped");
                    skipped += 1;
                }
            }
        }

        debug!(loaded = stars.len(), skipped, "HYG database loaded");
        for star in stars {
            builder.add_star(star);
        }
        Ok(())
    }
}

/// Loader of asterisms written as comma-separated Hipparcos ids, one asterism per line.
///
/// Blank lines are ignored. Every id must be the one of a star already in the builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsterismLoader;

impl CatalogueLoader for AsterismLoader {
    fn load<R: Read>(
        &self,
        reader: R,
        builder: &mut CatalogueBuilder,
    ) -> Result<(), StarsightError> {
        let mut stars: HashMap<u32, &Star> = HashMap::with_capacity(builder.stars().len());
        for star in builder.stars() {
            stars.entry(star.hipparcos_id()).or_insert(star);
        }

        let mut asterisms = Vec::new();
        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let members = line
                .split(',')
                .map(|field| {
                    let id = field.trim().parse::<u32>().map_err(|e| {
                        StarsightError::ParseCatalogueError {
                            line: i + 1,
                            reason: format!("invalid Hipparcos id {field:?}: {e}"),
                        }
                    })?;
                    stars
                        .get(&id)
                        .map(|star| (*star).clone())
                        .ok_or(StarsightError::StarNotInCatalogue(id))
                })
                .collect::<Result<Vec<Star>, StarsightError>>()?;
            asterisms.push(Asterism::new(members)?);
        }

        debug!(asterisms = asterisms.len(), "asterisms loaded");
        for asterism in asterisms {
            builder.add_asterism(asterism);
        }
        Ok(())
    }
}
