use std::sync::Arc;

use approx::assert_relative_eq;
use starsight::{
    catalogue::{
        loaders::{AsterismLoader, HygDatabaseLoader},
        CatalogueBuilder, StarCatalogue,
    },
    coordinates::CartesianCoordinates,
};

pub const HYG_EXCERPT: &str = "tests/data/hyg_excerpt.csv";

pub const ASTERISMS: &str = "tests/data/asterisms.txt";

pub fn assert_position_close(
    actual: &CartesianCoordinates,
    expected: &CartesianCoordinates,
    epsilon: f64,
) {
    assert_relative_eq!(actual.x(), expected.x(), epsilon = epsilon);
    assert_relative_eq!(actual.y(), expected.y(), epsilon = epsilon);
}

pub fn load_test_catalogue() -> Arc<StarCatalogue> {
    let mut builder = CatalogueBuilder::new();
    builder
        .load_from(
            std::fs::File::open(HYG_EXCERPT).expect("missing HYG excerpt"),
            &HygDatabaseLoader,
        )
        .unwrap()
        .load_from(
            std::fs::File::open(ASTERISMS).expect("missing asterism list"),
            &AsterismLoader,
        )
        .unwrap();
    Arc::new(builder.build().unwrap())
}
