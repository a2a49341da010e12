//! # Brew Settings
//!
//! Brew-house parameters a recipe is evaluated against. Every field has a
//! default, so partial JSON such as `{ "efficiency": 0.7 }` is accepted.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::settings::BrewSettings;
//!
//! let settings = BrewSettings::from_json(r#"{ "target_volume_l": 10.0 }"#).unwrap();
//! assert_eq!(settings.target_volume_l, 10.0);
//! assert_eq!(settings.efficiency, 0.75);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{AbvMethod, DEFAULT_ATTENUATION, DEFAULT_EFFICIENCY, DEFAULT_LIQUOR_TO_GRIST_RATIO};
use crate::errors::{BrewError, BrewResult};

/// Parameters for evaluating a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrewSettings {
    /// Mash efficiency (fraction, applied to mashable grists)
    pub efficiency: f64,

    /// Attenuation for grists with no fixed fermentability (fraction)
    pub default_attenuation: f64,

    /// Mash liquor per kg of mashable grist, litres
    pub liquor_to_grist_ratio: f64,

    /// Volume into the fermenter, litres
    pub target_volume_l: f64,

    /// Volume in the copper, litres. Falls back to the target volume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boil_volume_l: Option<f64>,

    /// ABV estimator for summaries
    pub abv_method: AbvMethod,

    /// Enforce the UK table's ABV bounds when using the tiered method
    pub sanity_check: bool,
}

impl Default for BrewSettings {
    fn default() -> Self {
        BrewSettings {
            efficiency: DEFAULT_EFFICIENCY,
            default_attenuation: DEFAULT_ATTENUATION,
            liquor_to_grist_ratio: DEFAULT_LIQUOR_TO_GRIST_RATIO,
            target_volume_l: 23.0,
            boil_volume_l: None,
            abv_method: AbvMethod::default(),
            sanity_check: false,
        }
    }
}

impl BrewSettings {
    /// Parse settings from JSON, filling unspecified fields with defaults
    pub fn from_json(json: &str) -> BrewResult<Self> {
        serde_json::from_str(json).map_err(|e| BrewError::serialization(format!("settings: {}", e)))
    }

    /// Volume used for boil gravity
    pub fn effective_boil_volume_l(&self) -> f64 {
        self.boil_volume_l.unwrap_or(self.target_volume_l)
    }

    /// Builder: set the target volume
    pub fn with_target_volume(mut self, volume_l: f64) -> Self {
        self.target_volume_l = volume_l;
        self
    }

    /// Builder: set the mash efficiency
    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }

    /// Builder: choose the ABV estimator
    pub fn with_abv_method(mut self, method: AbvMethod) -> Self {
        self.abv_method = method;
        self
    }
}
