use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarsightError {
    #[error("{what} = {value} is outside of {interval}")]
    OutOfRange {
        what: &'static str,
        value: f64,
        interval: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Star with Hipparcos id {0} is not part of the catalogue")]
    StarNotInCatalogue(u32),

    #[error("Asterism is not registered in the catalogue")]
    AsterismNotInCatalogue,

    #[error("Invalid observation instant: {0}")]
    InvalidEpoch(String),

    #[error("Unable to read catalogue data: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error while reading the star database: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Error while parsing catalogue line {line}: {reason}")]
    ParseCatalogueError { line: usize, reason: String },
}

impl PartialEq for StarsightError {
    fn eq(&self, other: &Self) -> bool {
        use StarsightError::*;
        match (self, other) {
            (
                OutOfRange {
                    what: w1,
                    value: v1,
                    interval: i1,
                },
                OutOfRange {
                    what: w2,
                    value: v2,
                    interval: i2,
                },
            ) => w1 == w2 && v1.to_bits() == v2.to_bits() && i1 == i2,
            (InvalidArgument(a), InvalidArgument(b)) => a == b,
            (StarNotInCatalogue(a), StarNotInCatalogue(b)) => a == b,
            (InvalidEpoch(a), InvalidEpoch(b)) => a == b,
            (
                ParseCatalogueError {
                    line: l1,
                    reason: r1,
                },
                ParseCatalogueError {
                    line: l2,
                    reason: r2,
                },
            ) => l1 == l2 && r1 == r2,

            // foreign errors are not comparable: same variant is enough
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            (AsterismNotInCatalogue, AsterismNotInCatalogue) => true,

            _ => false,
        }
    }
}
