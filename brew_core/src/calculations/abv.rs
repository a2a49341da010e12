//! # Alcohol Engine
//!
//! Three interchangeable ABV estimators. All take original and final gravity
//! as full specific gravity (1.045); [`abv_linear_degrees`] accepts degrees.
//!
//! | Estimator          | Notes                                                 |
//! |--------------------|-------------------------------------------------------|
//! | [`abv_linear`]     | Wheeler's Wort Works linear approximation              |
//! | [`abv_ritchie`]    | Ritchie Products rational fit, better at high gravity  |
//! | [`abv_tiered_uk`]  | HMRC Excise Notice 226 factor table, Ritchie fallback  |
//!
//! ## References
//!
//! - Ritchie Products Ltd, Zymurgy Summer 1995 vol. 18 no. 2
//! - HM Revenue & Customs, Excise Notice 226: Beer Duty, calculation of strength

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::round_to;
use crate::errors::{checked_div, BrewError, BrewResult};
use crate::units::{GravityDegrees, SpecificGravity};

/// Which estimator a recipe summary should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AbvMethod {
    #[default]
    Linear,
    Ritchie,
    TieredUk,
}

impl AbvMethod {
    pub const ALL: [AbvMethod; 3] = [AbvMethod::Linear, AbvMethod::Ritchie, AbvMethod::TieredUk];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            AbvMethod::Linear => "Linear",
            AbvMethod::Ritchie => "Ritchie",
            AbvMethod::TieredUk => "UK tiered (Excise Notice 226)",
        }
    }

    /// Estimate ABV with this method
    pub fn estimate(&self, og: f64, fg: f64, sanity_check: bool) -> BrewResult<f64> {
        match self {
            AbvMethod::Linear => abv_linear(og, fg),
            AbvMethod::Ritchie => abv_ritchie(og, fg),
            AbvMethod::TieredUk => abv_tiered_uk(og, fg, sanity_check),
        }
    }
}

impl std::fmt::Display for AbvMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Linear ABV approximation, percent.
///
/// ```text
/// ABV = 1.05 · (OG - FG) / FG / 0.79 · 100
/// ```
///
/// # Errors
/// `DivisionByZero` when `fg` is zero.
pub fn abv_linear(og: f64, fg: f64) -> BrewResult<f64> {
    let by_weight = checked_div(1.05 * (og - fg), fg, "final_gravity")?;
    Ok(by_weight / 0.79 * 100.0)
}

/// [`abv_linear`] taking gravities in degrees (45 for 1.045)
pub fn abv_linear_degrees(og_degrees: f64, fg_degrees: f64) -> BrewResult<f64> {
    let og = SpecificGravity::from(GravityDegrees(og_degrees));
    let fg = SpecificGravity::from(GravityDegrees(fg_degrees));
    abv_linear(og.value(), fg.value())
}

/// Ritchie's rational ABV approximation, percent.
///
/// ```text
/// ABV = 76.08 · (OG - FG) / (1.775 - OG) · FG / 0.794
/// ```
///
/// # Errors
/// `DivisionByZero` when `og` is exactly 1.775.
pub fn abv_ritchie(og: f64, fg: f64) -> BrewResult<f64> {
    let scaled = checked_div(76.08 * (og - fg), 1.775 - og, "1.775 - original_gravity")?;
    Ok(scaled * (fg / 0.794))
}

/// One bracket of the Excise Notice 226 table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AbvFactor {
    /// Lower bound of excess gravity, degrees (inclusive)
    pub excess_gravity_diff_min: f64,
    /// Upper bound of excess gravity, degrees (inclusive)
    pub excess_gravity_diff_max: f64,
    /// Lowest ABV the bracket should produce
    pub abv_min: f64,
    /// Highest ABV the bracket should produce
    pub abv_max: f64,
    pub factor: f64,
}

const fn bracket(excess_gravity_diff_min: f64, excess_gravity_diff_max: f64, abv_min: f64, abv_max: f64, factor: f64) -> AbvFactor {
    AbvFactor {
        excess_gravity_diff_min,
        excess_gravity_diff_max,
        abv_min,
        abv_max,
        factor,
    }
}

/// Excise Notice 226 excess-gravity brackets, ascending
pub const UK_ABV_FACTORS: [AbvFactor; 11] = [
    bracket(0.0, 6.9, 0.0, 0.8, 0.125),
    bracket(7.0, 10.4, 0.8, 1.3, 0.126),
    bracket(10.5, 17.2, 1.3, 2.1, 0.127),
    bracket(17.3, 26.1, 2.2, 3.3, 0.128),
    bracket(26.2, 36.0, 3.3, 4.6, 0.129),
    bracket(36.1, 46.5, 4.6, 6.0, 0.130),
    bracket(46.6, 57.1, 6.0, 7.5, 0.131),
    bracket(57.2, 67.9, 7.5, 9.0, 0.132),
    bracket(68.0, 78.8, 9.0, 10.5, 0.133),
    bracket(78.9, 89.7, 10.5, 12.0, 0.134),
    bracket(89.8, 100.7, 12.0, 13.6, 0.135),
];

/// Bracket containing an excess gravity difference (degrees, one decimal).
///
/// `None` when the difference is outside 0 - 100.7.
pub fn find_uk_abv_factor(excess_gravity_diff: f64) -> Option<&'static AbvFactor> {
    UK_ABV_FACTORS.iter().find(|f| {
        f.excess_gravity_diff_min <= excess_gravity_diff && excess_gravity_diff <= f.excess_gravity_diff_max
    })
}

/// UK Excise Notice 226 tiered ABV, percent.
///
/// The excess gravity `(OG - FG) · 1000`, rounded to one decimal place, is
/// multiplied by the factor of its bracket. Differences outside the table
/// fall back to [`abv_ritchie`].
///
/// # Errors
/// - `SanityCheckFailed` when `sanity_check` is set and the result lies
///   outside the matched bracket's ABV bounds
/// - `DivisionByZero` from the Ritchie fallback
pub fn abv_tiered_uk(og: f64, fg: f64, sanity_check: bool) -> BrewResult<f64> {
    let excess_gravity_diff = round_to((og - fg) * 1000.0, 1);

    let Some(factor) = find_uk_abv_factor(excess_gravity_diff) else {
        debug!(excess_gravity_diff, "excess gravity outside duty table, using Ritchie");
        return abv_ritchie(og, fg);
    };

    let abv = excess_gravity_diff * factor.factor;

    if sanity_check && !(factor.abv_min <= abv && abv <= factor.abv_max) {
        debug!(abv, abv_min = factor.abv_min, abv_max = factor.abv_max, "tiered ABV sanity check failed");
        return Err(BrewError::sanity_check_failed(abv, factor.abv_min, factor.abv_max));
    }

    Ok(abv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_abv_linear() {
        // 1.05 * 0.035 / 1.010 / 0.79 * 100
        let abv = abv_linear(1.045, 1.010).unwrap();
        assert_eq!(round_to(abv, 2), 4.61);
    }

    #[test]
    fn test_abv_linear_zero_final_gravity() {
        assert_eq!(abv_linear(1.045, 0.0), Err(BrewError::division_by_zero("final_gravity")));
    }

    #[test]
    fn test_abv_degrees_matches_full_form() {
        let degrees = abv_linear_degrees(45.0, 10.0).unwrap();
        let full = abv_linear(1.045, 1.010).unwrap();
        assert!(approx_eq(degrees, full));
    }

    #[test]
    fn test_abv_degrees_lots_of_sugar() {
        // OG 245.3425, FG -45.025 from the sugar-heavy reference bill
        let abv = abv_linear_degrees(245.3425, -45.025).unwrap();
        assert_eq!(round_to(abv, 1), 40.4);
    }

    #[test]
    fn test_abv_ritchie() {
        // 76.08 * 0.035 / 0.730 * (1.010 / 0.794)
        let abv = abv_ritchie(1.045, 1.010).unwrap();
        assert_eq!(round_to(abv, 2), 4.64);
    }

    #[test]
    fn test_abv_ritchie_singular_gravity() {
        assert!(matches!(abv_ritchie(1.775, 1.010), Err(BrewError::DivisionByZero { .. })));
    }

    #[test]
    fn test_factor_table_is_ordered() {
        for pair in UK_ABV_FACTORS.windows(2) {
            assert!(pair[0].excess_gravity_diff_max < pair[1].excess_gravity_diff_min);
            assert!(pair[0].factor < pair[1].factor);
        }
        assert_eq!(UK_ABV_FACTORS[0].excess_gravity_diff_min, 0.0);
        assert_eq!(UK_ABV_FACTORS[10].excess_gravity_diff_max, 100.7);
    }

    #[test]
    fn test_find_factor_bracket_edges() {
        assert_eq!(find_uk_abv_factor(0.0).unwrap().factor, 0.125);
        assert_eq!(find_uk_abv_factor(6.9).unwrap().factor, 0.125);
        assert_eq!(find_uk_abv_factor(7.0).unwrap().factor, 0.126);
        assert_eq!(find_uk_abv_factor(36.0).unwrap().factor, 0.129);
        assert_eq!(find_uk_abv_factor(100.7).unwrap().factor, 0.135);
        assert!(find_uk_abv_factor(100.8).is_none());
        assert!(find_uk_abv_factor(-0.1).is_none());
    }

    #[test]
    fn test_tiered_uk_in_table() {
        // 35.0 degrees falls in 26.2 - 36.0 at factor 0.129
        let abv = abv_tiered_uk(1.045, 1.010, true).unwrap();
        assert!(approx_eq(abv, 35.0 * 0.129), "ABV = {}", abv);
    }

    #[test]
    fn test_tiered_uk_falls_back_to_ritchie_above_table() {
        let tiered = abv_tiered_uk(1.200, 1.000, true).unwrap();
        assert_eq!(tiered, abv_ritchie(1.200, 1.000).unwrap());
    }

    #[test]
    fn test_tiered_uk_falls_back_to_ritchie_below_table() {
        // FG above OG: negative excess gravity
        let tiered = abv_tiered_uk(1.010, 1.020, false).unwrap();
        assert_eq!(tiered, abv_ritchie(1.010, 1.020).unwrap());
    }

    #[test]
    fn test_tiered_uk_sanity_check() {
        // 6.9 * 0.125 = 0.8625, above the first bracket's 0.8 ceiling
        let unchecked = abv_tiered_uk(1.0069, 1.000, false).unwrap();
        assert!(approx_eq(unchecked, 0.8625));

        match abv_tiered_uk(1.0069, 1.000, true) {
            Err(BrewError::SanityCheckFailed { abv_min, abv_max, .. }) => {
                assert_eq!(abv_min, 0.0);
                assert_eq!(abv_max, 0.8);
            }
            other => panic!("expected sanity failure, got {:?}", other),
        }
    }

    #[test]
    fn test_method_dispatch() {
        for method in AbvMethod::ALL {
            let via_method = method.estimate(1.045, 1.010, false).unwrap();
            let direct = match method {
                AbvMethod::Linear => abv_linear(1.045, 1.010).unwrap(),
                AbvMethod::Ritchie => abv_ritchie(1.045, 1.010).unwrap(),
                AbvMethod::TieredUk => abv_tiered_uk(1.045, 1.010, false).unwrap(),
            };
            assert_eq!(via_method, direct);
        }
    }

    #[test]
    fn test_method_serialization() {
        assert_eq!(serde_json::to_string(&AbvMethod::TieredUk).unwrap(), "\"tiered_uk\"");
        let method: AbvMethod = serde_json::from_str("\"ritchie\"").unwrap();
        assert_eq!(method, AbvMethod::Ritchie);
    }
}
