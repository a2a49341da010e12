//! # Mass Utilities
//!
//! Aggregate grist masses and per-grist share of the bill. Masses are in
//! grams throughout.

use crate::errors::{checked_div, BrewResult};
use crate::ingredients::Grist;

/// Total mass of a grist bill in grams. Empty bill is 0.
pub fn total_mass(grists: &[Grist]) -> f64 {
    grists.iter().map(|g| g.mass_g).sum()
}

/// Total mass of the mashable grists only, in grams
pub fn total_mashable_mass(grists: &[Grist]) -> f64 {
    grists.iter().filter(|g| g.mashable).map(|g| g.mass_g).sum()
}

/// Fractional share of `grist` in the bill (0.25 = 25%).
///
/// # Errors
/// `DivisionByZero` when the bill's total mass is zero (empty recipe).
pub fn mass_fraction(grist: &Grist, grists: &[Grist]) -> BrewResult<f64> {
    checked_div(grist.mass_g, total_mass(grists), "total_mass_g")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BrewError;
    use crate::ingredients::Fermentability;

    fn blank(mashable: bool, mass_g: f64) -> Grist {
        Grist::new(0.0, mashable, 0.0, 0.0, Fermentability::UseAttenuation, mass_g)
    }

    #[test]
    fn test_total_mass() {
        let grists = vec![blank(false, 100.0), blank(false, 300.0)];
        assert_eq!(total_mass(&grists), 400.0);
        assert_eq!(total_mass(&[]), 0.0);
    }

    #[test]
    fn test_total_mashable_mass() {
        let grists = vec![blank(true, 100.0), blank(false, 300.0), blank(true, 50.0)];
        assert_eq!(total_mashable_mass(&grists), 150.0);
    }

    #[test]
    fn test_mass_fraction() {
        let grists = vec![blank(false, 100.0), blank(false, 300.0)];
        assert_eq!(mass_fraction(&grists[0], &grists).unwrap(), 0.25);
        assert_eq!(mass_fraction(&grists[1], &grists).unwrap(), 0.75);
    }

    #[test]
    fn test_mass_fraction_of_weightless_bill() {
        let grists = vec![blank(true, 0.0)];
        assert_eq!(
            mass_fraction(&grists[0], &grists),
            Err(BrewError::division_by_zero("total_mass_g"))
        );
    }
}
