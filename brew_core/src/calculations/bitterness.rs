//! # Bitterness Engine
//!
//! Hop utilization (Tinseth) and IBU per hop addition.
//!
//! ```text
//! U      = f(G) · f(T)
//! f(G)   = 1.65 · 0.000125^(Gb - 1)
//! f(T)   = (1 - e^(-0.04·t)) / 4.15
//! IBU    = m · α · U · 1000 / (V · C)
//! C      = 1 + (Gb - 1.050) / 2     Gb > 1.050
//!          1                        otherwise
//! ```
//!
//! `Gb` is the boil gravity as a full specific gravity (1.045), `t` the boil
//! time in minutes, `m` the hop mass in grams and `α` the alpha acid fraction.

use crate::errors::{checked_div, BrewResult};
use crate::ingredients::HopAddition;

/// Gravity above which the IBU gravity correction applies
pub const GRAVITY_CORRECTION_THRESHOLD: f64 = 1.050;

/// Tinseth utilization for a hop at a given boil gravity (0.24 = 24%).
pub fn hop_utilization(hop: &HopAddition, boil_gravity: f64) -> f64 {
    let f_gravity = 1.65 * 0.000125_f64.powf(boil_gravity - 1.0);
    let f_time = (1.0 - (-0.04 * hop.boil_time_min).exp()) / 4.15;
    f_gravity * f_time
}

/// High-gravity correction divisor
pub fn gravity_correction(boil_gravity: f64) -> f64 {
    if boil_gravity > GRAVITY_CORRECTION_THRESHOLD {
        1.0 + (boil_gravity - 1.05) / 2.0
    } else {
        1.0
    }
}

/// IBUs contributed by a single hop addition.
///
/// # Arguments
/// * `hop` - The hop addition
/// * `volume_l` - Target volume of the beer in litres
/// * `boil_gravity` - Gravity in the boil as full SG (e.g. 1.050)
///
/// # Errors
/// `DivisionByZero` when `volume_l` is zero.
pub fn hop_ibu(hop: &HopAddition, volume_l: f64, boil_gravity: f64) -> BrewResult<f64> {
    let bitterness = hop.mass_g * hop.alpha * hop_utilization(hop, boil_gravity) * 1000.0;
    checked_div(bitterness, volume_l * gravity_correction(boil_gravity), "volume_l")
}

/// Total IBUs of a hop schedule
pub fn recipe_ibu(hops: &[HopAddition], volume_l: f64, boil_gravity: f64) -> BrewResult<f64> {
    hops.iter().map(|h| hop_ibu(h, volume_l, boil_gravity)).sum()
}
