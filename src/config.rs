//! # Observation configuration
//!
//! [`ObservationConfig`] gathers the parameters of an observation in plain units (degrees, an
//! instant written as text) so that it can be read from any serde format. The accessors turn
//! it into validated domain values.
//!
//! ```rust
//! use starsight::config::ObservationConfig;
//!
//! let config = ObservationConfig::new("2020-02-17T20:15:00 UTC");
//! assert_eq!(config.location_lat_deg, 46.52);
//! assert!(config.instant().is_ok());
//! ```
use std::{str::FromStr, sync::Arc};

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::{
    catalogue::StarCatalogue,
    constants::Degree,
    coordinates::{GeographicCoordinates, HorizontalCoordinates},
    math::{angle, interval::check_argument},
    observed_sky::ObservedSky,
    projection::StereographicProjection,
    starsight_errors::StarsightError,
};

fn default_location_lon_deg() -> Degree {
    6.57
}

fn default_location_lat_deg() -> Degree {
    46.52
}

fn default_center_az_deg() -> Degree {
    180.0
}

fn default_center_alt_deg() -> Degree {
    15.0
}

fn default_field_of_view_deg() -> Degree {
    100.0
}

/// Parameters of one observation.
///
/// Every field but `when` has a default value:
///
/// | Field | Default |
/// |-------|---------|
/// | `location_lon_deg` | 6.57 |
/// | `location_lat_deg` | 46.52 |
/// | `center_az_deg` | 180 |
/// | `center_alt_deg` | 15 |
/// | `field_of_view_deg` | 100 |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationConfig {
    #[serde(default = "default_location_lon_deg")]
    pub location_lon_deg: Degree,
    #[serde(default = "default_location_lat_deg")]
    pub location_lat_deg: Degree,
    #[serde(default = "default_center_az_deg")]
    pub center_az_deg: Degree,
    #[serde(default = "default_center_alt_deg")]
    pub center_alt_deg: Degree,
    #[serde(default = "default_field_of_view_deg")]
    pub field_of_view_deg: Degree,
    /// Observation instant, in any format accepted by [`hifitime::Epoch::from_str`].
    pub when: String,
}

impl ObservationConfig {
    /// Default configuration observing at `when`.
    pub fn new(when: &str) -> Self {
        ObservationConfig {
            location_lon_deg: default_location_lon_deg(),
            location_lat_deg: default_location_lat_deg(),
            center_az_deg: default_center_az_deg(),
            center_alt_deg: default_center_alt_deg(),
            field_of_view_deg: default_field_of_view_deg(),
            when: when.to_string(),
        }
    }

    pub fn location(&self) -> Result<GeographicCoordinates, StarsightError> {
        GeographicCoordinates::of_deg(self.location_lon_deg, self.location_lat_deg)
    }

    pub fn projection(&self) -> Result<StereographicProjection, StarsightError> {
        let center = HorizontalCoordinates::of_deg(self.center_az_deg, self.center_alt_deg)?;
        Ok(StereographicProjection::new(center))
    }

    /// Parse `when`, failing with [`StarsightError::InvalidEpoch`].
    pub fn instant(&self) -> Result<Epoch, StarsightError> {
        Epoch::from_str(self.when.trim())
            .map_err(|e| StarsightError::InvalidEpoch(format!("{:?}: {e}", self.when)))
    }

    /// Width, on the projection plane, of the field of view.
    pub fn projected_field_width(&self) -> Result<f64, StarsightError> {
        check_argument(
            self.field_of_view_deg > 0.0 && self.field_of_view_deg <= 360.0,
            "the field of view must be in ]0°, 360°]",
        )?;
        Ok(self
            .projection()?
            .apply_to_angle(angle::of_deg(self.field_of_view_deg)))
    }

    /// Compute the sky of `catalogue` described by this configuration.
    pub fn observe(&self, catalogue: Arc<StarCatalogue>) -> Result<ObservedSky, StarsightError> {
        ObservedSky::new(
            &self.instant()?,
            &self.location()?,
            &self.projection()?,
            catalogue,
        )
    }
}

#[cfg(test)]
mod config_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = ObservationConfig::new("2020-02-17T20:15:00 UTC");
        let location = config.location().unwrap();
        assert_relative_eq!(location.lon_deg(), 6.57, epsilon = 1e-12);
        assert_relative_eq!(location.lat_deg(), 46.52, epsilon = 1e-12);

        let projection = config.projection().unwrap();
        assert_relative_eq!(projection.center().az_deg(), 180.0, epsilon = 1e-12);
        assert_relative_eq!(projection.center().alt_deg(), 15.0, epsilon = 1e-12);

        assert_eq!(
            config.instant().unwrap(),
            Epoch::from_gregorian_utc_hms(2020, 2, 17, 20, 15, 0)
        );
        assert_relative_eq!(
            config.projected_field_width().unwrap(),
            2.0 * angle::of_deg(25.0).tan(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_deserialize() {
        let config: ObservationConfig = serde_json::from_str(
            r#"{ "when": "2003-11-22T00:00:00 UTC", "location_lat_deg": -33.9, "field_of_view_deg": 60 }"#,
        )
        .unwrap();
        assert_eq!(config.location_lon_deg, 6.57);
        assert_eq!(config.location_lat_deg, -33.9);
        assert_eq!(config.center_az_deg, 180.0);
        assert_eq!(config.center_alt_deg, 15.0);
        assert_eq!(config.field_of_view_deg, 60.0);
        assert_eq!(
            config.instant().unwrap(),
            Epoch::from_gregorian_utc_at_midnight(2003, 11, 22)
        );

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["when"], "2003-11-22T00:00:00 UTC");

        // the instant has no default
        assert!(serde_json::from_str::<ObservationConfig>("{}").is_err());
    }

    #[test]
    fn test_invalid_values() {
        let mut config = ObservationConfig::new("yesterday");
        assert!(matches!(
            config.instant(),
            Err(StarsightError::InvalidEpoch(_))
        ));

        config.location_lat_deg = 91.0;
        assert!(config.location().is_err());

        config.center_az_deg = 360.0;
        assert!(config.projection().is_err());

        config.center_az_deg = 0.0;
        config.field_of_view_deg = 0.0;
        assert!(config.projected_field_width().is_err());
    }

    #[test]
    fn test_observe() {
        let config = ObservationConfig::new("2020-02-17T20:15:00 UTC");
        let catalogue = Arc::new(StarCatalogue::new(vec![], vec![]).unwrap());
        let sky = config.observe(catalogue).unwrap();
        assert_eq!(sky.planets().len(), 7);
        assert!(sky.stars().is_empty());
    }
}
