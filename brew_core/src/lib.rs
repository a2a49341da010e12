//! # brew_core - Brewing Chemistry Calculation Engine
//!
//! `brew_core` implements the recipe maths of a home/craft brewery: original
//! and final gravity, alcohol by volume, hop bitterness (IBU), wort colour
//! (EBC) and mash liquor volume. Results agree with Wheeler's Wort Works and
//! Graham Wheeler's Beer Engine.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over caller-built records
//! - **JSON-First**: Recipes, settings and summaries implement Serialize/Deserialize
//! - **Rich Errors**: Zero denominators and table inconsistencies are structured errors
//! - **One unit convention**: recipe gravity in degrees (45.0 = 1.045)
//!
//! ## Quick Start
//!
//! ```rust
//! use brew_core::calculations::{abv_linear_degrees, final_gravity_degrees, original_gravity_degrees};
//! use brew_core::ingredients::{Fermentability, Grist};
//!
//! let grists = vec![
//!     Grist::new(60.0, true, 265.0, 3.0, Fermentability::UseAttenuation, 1100.0),
//!     Grist::new(50.0, false, 370.0, 30.0, Fermentability::Fixed(1.0), 40.0),
//! ];
//!
//! let og = original_gravity_degrees(&grists, 10.0, 0.75).unwrap();
//! let fg = final_gravity_degrees(&grists, 10.0, 0.75, 0.62).unwrap();
//! let abv = abv_linear_degrees(og, fg).unwrap();
//! assert!(abv > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`ingredients`] - Grist, hop and recipe records
//! - [`calculations`] - The formula set and the whole-recipe summary
//! - [`settings`] - Brew-house parameters with defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod ingredients;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{AbvMethod, RecipeSummary};
pub use errors::{BrewError, BrewResult};
pub use ingredients::{Fermentability, Grist, GristType, HopAddition, Recipe};
pub use settings::BrewSettings;
