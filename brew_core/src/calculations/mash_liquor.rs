//! # Mash Liquor
//!
//! Strike water sized from the liquor-to-grist ratio (litres per kg of
//! mashable grist). 2.5 is a common thick mash; 3.2 is also widely used.
//!
//! Reference: BYO, "Managing Mash Thickness"

use crate::calculations::mass::total_mashable_mass;
use crate::ingredients::Grist;
use crate::units::{Grams, Kilograms};

/// Liquor-to-grist ratio used when the caller has no preference, L/kg
pub const DEFAULT_LIQUOR_TO_GRIST_RATIO: f64 = 2.5;

/// Mash liquor volume in litres. Zero when nothing in the bill is mashable.
pub fn mash_liquor_litres(grists: &[Grist], liquor_to_grist_ratio: f64) -> f64 {
    let grist_kg = Kilograms::from(Grams(total_mashable_mass(grists)));
    grist_kg.value() * liquor_to_grist_ratio
}
