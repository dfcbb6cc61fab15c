mod common;

use std::fs::File;

use common::{load_test_catalogue, ASTERISMS, HYG_EXCERPT};
use starsight::{
    catalogue::{
        loaders::{AsterismLoader, HygDatabaseLoader},
        CatalogueBuilder,
    },
    starsight_errors::StarsightError,
};

#[test]
fn test_load_hyg_and_asterisms() {
    let catalogue = load_test_catalogue();

    // the Sun has no Hipparcos id
    assert_eq!(catalogue.stars().len(), 18);
    assert!(catalogue.stars().iter().all(|s| s.name() != "Sol"));
    assert_eq!(catalogue.stars()[0].name(), "Polaris");
    assert_eq!(catalogue.stars()[17].name(), "? Gru");
    assert_eq!(catalogue.stars()[8].hipparcos_id(), 32349);

    assert_eq!(catalogue.asterisms().len(), 4);
    let big_dipper = &catalogue.asterisms()[0];
    assert_eq!(
        catalogue.asterism_indices(big_dipper).unwrap(),
        &[15, 14, 13, 12, 10, 9, 11, 12]
    );
}

#[test]
fn test_asterism_indices_resolve_their_stars() {
    let catalogue = load_test_catalogue();
    let stars = catalogue.stars();

    for asterism in catalogue.asterisms() {
        let indices = catalogue.asterism_indices(asterism).unwrap();
        assert_eq!(indices.len(), asterism.stars().len());
        for (index, star) in indices.iter().zip(asterism.stars()) {
            assert!(*index < stars.len());
            assert_eq!(stars[*index].hipparcos_id(), star.hipparcos_id());
        }
    }
}

#[test]
fn test_asterism_with_unknown_star() {
    let mut builder = CatalogueBuilder::new();
    builder
        .load_from(File::open(HYG_EXCERPT).unwrap(), &HygDatabaseLoader)
        .unwrap();
    let result = builder.load_from("91262,11767\n91262,424242\n".as_bytes(), &AsterismLoader);
    assert!(matches!(
        result,
        Err(StarsightError::StarNotInCatalogue(424242))
    ));
}

#[test]
fn test_asterisms_need_their_stars_first() {
    let mut builder = CatalogueBuilder::new();
    let result = builder.load_from(File::open(ASTERISMS).unwrap(), &AsterismLoader);
    assert!(matches!(
        result,
        Err(StarsightError::StarNotInCatalogue(67301))
    ));
}

#[test]
fn test_missing_file() {
    let result = File::open("tests/data/does_not_exist.csv").map_err(StarsightError::from);
    assert!(matches!(result, Err(StarsightError::IoError(_))));
}
