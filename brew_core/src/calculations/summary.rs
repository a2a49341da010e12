//! # Recipe Summary
//!
//! Evaluates a whole [`Recipe`] against [`BrewSettings`] by composing the
//! individual formula modules:
//!
//! ```text
//! grists ──► OG, FG (degrees) ──► SG ──► ABV
//!        ──► boil gravity ──────► SG ──► IBU per hop
//!        ──► EBC ──► SRM ──► RGB
//!        ──► mash liquor
//! ```
//!
//! ## Example
//!
//! ```rust
//! use brew_core::calculations::summary::calculate;
//! use brew_core::ingredients::{Fermentability, Grist, HopAddition, Recipe};
//! use brew_core::settings::BrewSettings;
//!
//! let recipe = Recipe::new()
//!     .with_grist(Grist::new(5.0, true, 300.0, 3.0, Fermentability::UseAttenuation, 4000.0))
//!     .with_hop(HopAddition::new(0.076, 30.0, 60.0));
//!
//! let summary = calculate(&recipe, &BrewSettings::default()).unwrap();
//! assert!(summary.original_gravity_degrees > summary.final_gravity_degrees);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{abv, bitterness, color, gravity, mash_liquor, mass};
use crate::errors::BrewResult;
use crate::ingredients::Recipe;
use crate::settings::BrewSettings;
use crate::units::{GravityDegrees, SpecificGravity};

/// Contribution of one grist to the recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GristBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub mass_g: f64,
    /// Share of the bill by mass (0.25 = 25%)
    pub mass_fraction: f64,
    /// Gravity this grist alone gives the target volume, degrees
    pub gravity_degrees: f64,
    /// Colour this grist alone gives the target volume, EBC
    pub color_ebc: f64,
}

/// Contribution of one hop addition to the recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HopBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub utilization: f64,
    pub ibu: f64,
}

/// Results of evaluating a recipe.
///
/// ## JSON Example
///
/// ```json
/// {
///   "original_gravity_degrees": 5.69,
///   "final_gravity_degrees": -0.35,
///   "original_gravity_sg": 1.00569,
///   "final_gravity_sg": 0.99965,
///   "boil_gravity_sg": 1.00569,
///   "abv_method": "linear",
///   "abv_percent": 0.80,
///   "total_ibu": 279.3,
///   "color_ebc": 9.5,
///   "color_srm": 4.82,
///   "color_rgb": { "red": 244.6, "green": 182.7, "blue": 41.4 },
///   "mash_liquor_l": 0.25,
///   "total_mass_g": 200.0,
///   "grists": [],
///   "hops": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub original_gravity_degrees: f64,
    pub final_gravity_degrees: f64,
    pub original_gravity_sg: f64,
    pub final_gravity_sg: f64,
    pub boil_gravity_sg: f64,
    pub abv_method: abv::AbvMethod,
    pub abv_percent: f64,
    pub total_ibu: f64,
    pub color_ebc: f64,
    pub color_srm: f64,
    pub color_rgb: color::Rgb,
    pub mash_liquor_l: f64,
    pub total_mass_g: f64,
    pub grists: Vec<GristBreakdown>,
    pub hops: Vec<HopBreakdown>,
}

/// Evaluate a recipe.
///
/// # Errors
///
/// Any error from the constituent formulas propagates unchanged: a zero
/// target or boil volume, a bill whose grists all weigh nothing, an original
/// gravity of exactly 1.775 under the Ritchie estimator, or a failed tiered
/// sanity check.
pub fn calculate(recipe: &Recipe, settings: &BrewSettings) -> BrewResult<RecipeSummary> {
    let volume_l = settings.target_volume_l;
    let efficiency = settings.efficiency;
    let grists = &recipe.grists;

    trace!(
        grists = grists.len(),
        hops = recipe.hops.len(),
        volume_l,
        efficiency,
        "evaluating recipe"
    );

    let og_degrees = gravity::original_gravity_degrees(grists, volume_l, efficiency)?;
    let fg_degrees = gravity::final_gravity_degrees(grists, volume_l, efficiency, settings.default_attenuation)?;
    let og = SpecificGravity::from(GravityDegrees(og_degrees)).value();
    let fg = SpecificGravity::from(GravityDegrees(fg_degrees)).value();

    let boil_degrees = gravity::boil_gravity_degrees(grists, settings.effective_boil_volume_l(), efficiency)?;
    let boil_gravity = SpecificGravity::from(GravityDegrees(boil_degrees)).value();

    let abv_percent = settings.abv_method.estimate(og, fg, settings.sanity_check)?;

    let hops = recipe
        .hops
        .iter()
        .map(|hop| {
            Ok(HopBreakdown {
                name: hop.name().map(str::to_string),
                utilization: bitterness::hop_utilization(hop, boil_gravity),
                ibu: bitterness::hop_ibu(hop, volume_l, boil_gravity)?,
            })
        })
        .collect::<BrewResult<Vec<_>>>()?;
    let total_ibu: f64 = hops.iter().map(|h| h.ibu).sum();

    let breakdown = grists
        .iter()
        .map(|grist| {
            Ok(GristBreakdown {
                name: grist.name().map(str::to_string),
                mass_g: grist.mass_g,
                mass_fraction: mass::mass_fraction(grist, grists)?,
                gravity_degrees: gravity::individual_gravity_degrees(grist, volume_l, efficiency)?,
                color_ebc: color::ingredient_color_in_solution(grist, volume_l, efficiency)?,
            })
        })
        .collect::<BrewResult<Vec<_>>>()?;

    let color_ebc = color::recipe_color_ebc(grists, volume_l, efficiency)?;
    let color_srm = color::ebc_to_srm(color_ebc);

    let summary = RecipeSummary {
        original_gravity_degrees: og_degrees,
        final_gravity_degrees: fg_degrees,
        original_gravity_sg: og,
        final_gravity_sg: fg,
        boil_gravity_sg: boil_gravity,
        abv_method: settings.abv_method,
        abv_percent,
        total_ibu,
        color_ebc,
        color_srm,
        color_rgb: color::srm_to_rgb(color_srm),
        mash_liquor_l: mash_liquor::mash_liquor_litres(grists, settings.liquor_to_grist_ratio),
        total_mass_g: mass::total_mass(grists),
        grists: breakdown,
        hops,
    };

    trace!(og = summary.original_gravity_sg, fg = summary.final_gravity_sg, abv = summary.abv_percent, "recipe evaluated");

    Ok(summary)
}
