//! # Brewing Calculations
//!
//! Pure, stateless formula functions grouped by concern. Every function
//! takes its inputs by reference or value and returns a scalar (or a
//! [`BrewResult`](crate::errors::BrewResult) when it divides by a caller
//! supplied quantity). Nothing here holds state, so everything is safe to
//! call from any thread.
//!
//! ## Conventions
//!
//! - Recipe gravities are in degrees (45.0 = 1.045)
//! - ABV estimators and hop utilization take full specific gravity
//! - Masses in grams, volumes in litres, times in minutes
//!
//! ## Available Calculations
//!
//! - [`mass`] - Total mass and mass fraction of a grist bill
//! - [`gravity`] - Original, individual, boil and final gravity
//! - [`color`] - Wort colour in EBC, SRM and display RGB
//! - [`bitterness`] - Tinseth utilization and IBU
//! - [`abv`] - Linear, Ritchie and UK tiered ABV
//! - [`mash_liquor`] - Strike water from the liquor-to-grist ratio
//! - [`summary`] - Whole-recipe evaluation from [`BrewSettings`](crate::settings::BrewSettings)

pub mod abv;
pub mod bitterness;
pub mod color;
pub mod gravity;
pub mod mash_liquor;
pub mod mass;
pub mod summary;

pub use abv::{
    abv_linear, abv_linear_degrees, abv_ritchie, abv_tiered_uk, find_uk_abv_factor, AbvFactor, AbvMethod,
    UK_ABV_FACTORS,
};
pub use bitterness::{hop_ibu, hop_utilization, recipe_ibu};
pub use color::{ebc_to_srm, ingredient_color_in_solution, recipe_color_ebc, srm_to_rgb, Rgb};
pub use gravity::{
    boil_gravity_degrees, final_gravity_degrees, individual_gravity_degrees, ingredient_gravity_points,
    original_gravity_degrees, DEFAULT_ATTENUATION, DEFAULT_EFFICIENCY,
};
pub use mash_liquor::{mash_liquor_litres, DEFAULT_LIQUOR_TO_GRIST_RATIO};
pub use mass::{mass_fraction, total_mashable_mass, total_mass};
pub use summary::{calculate, GristBreakdown, HopBreakdown, RecipeSummary};

/// Round half away from zero to `decimals` places.
///
/// ```rust
/// use brew_core::calculations::round_to;
///
/// assert_eq!(round_to(34.99999999, 1), 35.0);
/// assert_eq!(round_to(-45.025, 1), -45.0);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powi(decimals as i32);
    (value * scale).round() / scale
}
