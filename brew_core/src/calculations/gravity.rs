//! # Gravity Engine
//!
//! Original, individual, boil and final gravity of a grist bill, all in
//! brewer's degrees (45.0 = SG 1.045).
//!
//! ## Notation
//!
//! - `E` = grist extract potential (degrees per kg per litre)
//! - `m` = grist mass in kg
//! - `η` = mash efficiency, applied to mashable grists only
//! - `V` = volume in litres
//! - `a` = attenuation (grist fermentability, or the recipe default)
//!
//! ```text
//! OG = Σ(E·m·η) / V
//! FG = (Σ(1-a)·m·E·η - 0.225·Σa·m·E·η) / V
//! ```
//!
//! The 0.225 term offsets the lower density contribution of fermented extract
//! (alcohol) against unfermented sugar. Its value must not be changed.

use crate::errors::{checked_div, BrewResult};
use crate::ingredients::Grist;

/// Conversion efficiency of mashed grists when the caller has no figure
pub const DEFAULT_EFFICIENCY: f64 = 0.75;

/// Attenuation applied to grists with no fixed fermentability (medium mash at 66°C)
pub const DEFAULT_ATTENUATION: f64 = 0.62;

/// Specific gravity weight of fermented extract relative to unfermented
pub const FERMENTED_EXTRACT_FACTOR: f64 = 0.225;

/// Gravity points a grist contributes before dividing by volume.
///
/// Graham Wheeler calls this the grist's "brewer's degrees".
pub fn ingredient_gravity_points(grist: &Grist, efficiency: f64) -> f64 {
    grist.extract * grist.mass_kg() * grist.efficiency_factor(efficiency)
}

/// Original gravity of a grist bill, in degrees.
///
/// # Arguments
/// * `grists` - The grist bill
/// * `volume_l` - Target volume in litres
/// * `efficiency` - Mash efficiency as a fraction (see [`DEFAULT_EFFICIENCY`])
///
/// # Errors
/// `DivisionByZero` when `volume_l` is zero.
pub fn original_gravity_degrees(grists: &[Grist], volume_l: f64, efficiency: f64) -> BrewResult<f64> {
    checked_div(total_gravity_points(grists, efficiency), volume_l, "volume_l")
}

fn total_gravity_points(grists: &[Grist], efficiency: f64) -> f64 {
    grists
        .iter()
        .map(|g| ingredient_gravity_points(g, efficiency))
        .sum()
}

/// Gravity contribution of a single grist, in degrees (2.7, not 1002.7).
pub fn individual_gravity_degrees(grist: &Grist, volume_l: f64, efficiency: f64) -> BrewResult<f64> {
    checked_div(ingredient_gravity_points(grist, efficiency), volume_l, "volume_l")
}

/// Gravity in the copper: original gravity measured against the boil volume.
pub fn boil_gravity_degrees(grists: &[Grist], boil_volume_l: f64, efficiency: f64) -> BrewResult<f64> {
    checked_div(total_gravity_points(grists, efficiency), boil_volume_l, "boil_volume_l")
}

/// Final gravity after fermentation, in degrees.
///
/// Each grist ferments at its own fixed fermentability when known, otherwise
/// at `default_attenuation`. The result is not clamped: sugar-heavy bills can
/// legitimately finish below zero degrees (SG < 1.000).
///
/// # Errors
/// `DivisionByZero` when `volume_l` is zero.
pub fn final_gravity_degrees(
    grists: &[Grist],
    volume_l: f64,
    efficiency: f64,
    default_attenuation: f64,
) -> BrewResult<f64> {
    let (fermented, unfermented) = grists.iter().fold((0.0, 0.0), |(fermented, unfermented), g| {
        let attenuation = g.fermentability.resolve(default_attenuation);
        let converted = g.mass_kg() * g.extract * g.efficiency_factor(efficiency);
        (
            fermented + attenuation * converted,
            unfermented + (1.0 - attenuation) * converted,
        )
    });
    checked_div(
        unfermented - fermented * FERMENTED_EXTRACT_FACTOR,
        volume_l,
        "volume_l",
    )
}
