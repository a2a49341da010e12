//! # Colour Engine
//!
//! Wort colour in EBC using Graham Wheeler's Beer Engine formula, plus an
//! SRM conversion and an approximate display colour.
//!
//! ```text
//! EBC_grist = colour · m · η · 10 / V
//! ```
//!
//! The factor 10 is the fixed 10 mm cell path length of the EBC 430 nm
//! method. It is part of the method, not a tuning constant.

use serde::{Deserialize, Serialize};

use crate::errors::{checked_div, BrewResult};
use crate::ingredients::Grist;
use crate::units::{Ebc, Srm};

/// Cell path length of the EBC colorimetric method, mm
pub const EBC_PATH_LENGTH_MM: f64 = 10.0;

/// Colour a single grist imparts to the wort, EBC.
///
/// # Errors
/// `DivisionByZero` when `volume_l` is zero.
pub fn ingredient_color_in_solution(grist: &Grist, volume_l: f64, efficiency: f64) -> BrewResult<f64> {
    let colour_units = grist.color_ebc * grist.mass_kg() * grist.efficiency_factor(efficiency) * EBC_PATH_LENGTH_MM;
    checked_div(colour_units, volume_l, "volume_l")
}

/// Total wort colour of a grist bill, EBC
pub fn recipe_color_ebc(grists: &[Grist], volume_l: f64, efficiency: f64) -> BrewResult<f64> {
    grists
        .iter()
        .map(|g| ingredient_color_in_solution(g, volume_l, efficiency))
        .sum()
}

/// Convert EBC to SRM
pub fn ebc_to_srm(ebc: f64) -> f64 {
    Srm::from(Ebc(ebc)).value()
}

/// Approximate screen colour of a beer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    /// `#rrggbb` form, channels rounded to the nearest integer
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            self.red.round() as u8,
            self.green.round() as u8,
            self.blue.round() as u8
        )
    }
}

fn clamp_channel(value: f64) -> f64 {
    value.clamp(0.0, 255.0)
}

/// SRM to RGB after Philip Lee's fit, as used by Brewtarget.
///
/// ```text
/// R = min(0.5 + 272.098 - 5.80255·SRM, 253)
/// G = 0                                           SRM > 35
///     0.5 + 241.975 - 13.314·SRM + 0.1881895·SRM²  otherwise
/// B = 0.5 + 179.3 - 28.7·SRM
/// ```
///
/// Every channel is clamped to 0-255.
pub fn srm_to_rgb(srm: f64) -> Rgb {
    let red = (0.5 + (272.098 - 5.80255 * srm)).min(253.0);
    let green = if srm > 35.0 {
        0.0
    } else {
        0.5 + (2.41975e2 - 1.3314e1 * srm + 1.881895e-1 * srm * srm)
    };
    let blue = 0.5 + (179.3 - 28.7 * srm);

    Rgb {
        red: clamp_channel(red),
        green: clamp_channel(green),
        blue: clamp_channel(blue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::round_to;
    use crate::errors::BrewError;
    use crate::ingredients::Fermentability;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn mixed_bill() -> Vec<Grist> {
        vec![
            Grist::new(60.0, true, 265.0, 3.0, Fermentability::UseAttenuation, 100.0),
            Grist::new(50.0, false, 370.0, 30.0, Fermentability::Fixed(1.0), 100.0),
        ]
    }

    #[test]
    fn test_recipe_ebc_mixed_mashability() {
        let ebc = recipe_color_ebc(&mixed_bill(), 10.0, 0.75).unwrap();
        assert_eq!(round_to(ebc, 1), 9.5);
    }

    #[test]
    fn test_ingredient_colour_efficiency_applies_to_mashables_only() {
        let bill = mixed_bill();
        // 60 * 0.1 * 0.75 * 10 / 10 = 4.5
        assert!(approx_eq(ingredient_color_in_solution(&bill[0], 10.0, 0.75).unwrap(), 4.5));
        // 50 * 0.1 * 1.0 * 10 / 10 = 5.0
        assert!(approx_eq(ingredient_color_in_solution(&bill[1], 10.0, 0.75).unwrap(), 5.0));
        assert!(approx_eq(ingredient_color_in_solution(&bill[1], 10.0, 0.5).unwrap(), 5.0));
    }

    #[test]
    fn test_recipe_ebc_zero_volume() {
        assert_eq!(
            recipe_color_ebc(&mixed_bill(), 0.0, 0.75),
            Err(BrewError::division_by_zero("volume_l"))
        );
    }

    #[test]
    fn test_recipe_ebc_empty_bill() {
        assert_eq!(recipe_color_ebc(&[], 10.0, 0.75).unwrap(), 0.0);
    }

    #[test]
    fn test_ebc_to_srm() {
        assert!(approx_eq(ebc_to_srm(19.7), 10.0));
    }

    #[test]
    fn test_srm_to_rgb_pale() {
        let rgb = srm_to_rgb(0.0);
        assert_eq!(rgb.red, 253.0);
        assert!(approx_eq(rgb.green, 242.475));
        assert!(approx_eq(rgb.blue, 179.8));
    }

    #[test]
    fn test_srm_to_rgb_dark_clamps() {
        let rgb = srm_to_rgb(40.0);
        // 0.5 + 272.098 - 232.102
        assert!(approx_eq(rgb.red, 40.496));
        assert_eq!(rgb.green, 0.0);
        assert_eq!(rgb.blue, 0.0);
    }

    #[test]
    fn test_rgb_hex() {
        let rgb = Rgb { red: 253.0, green: 242.475, blue: 179.8 };
        assert_eq!(rgb.to_hex(), "#fdf2b4");
    }
}
