//! # Unit Types
//!
//! Lightweight newtype wrappers (just f64) for the handful of brewing units
//! the formulas move between. They serialize as plain numbers.
//!
//! ## Gravity Conventions
//!
//! - [`GravityDegrees`] is the brewer's "degrees" (points) form: `(SG - 1) * 1000`,
//!   so 45.0 is a specific gravity of 1.045. Recipe-level gravity uses this.
//! - [`SpecificGravity`] is the full form (1.045). The ABV estimators and the
//!   hop utilization curve take this form.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::units::{GravityDegrees, SpecificGravity, Grams, Kilograms};
//!
//! let og: SpecificGravity = GravityDegrees(45.0).into();
//! assert!((og.0 - 1.045).abs() < 1e-12);
//!
//! let malt: Kilograms = Grams(4500.0).into();
//! assert_eq!(malt.0, 4.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Grams> for Kilograms {
    fn from(g: Grams) -> Self {
        Kilograms(g.0 / 1000.0)
    }
}

impl From<Kilograms> for Grams {
    fn from(kg: Kilograms) -> Self {
        Grams(kg.0 * 1000.0)
    }
}

// ============================================================================
// Gravity Units
// ============================================================================

/// Gravity in brewer's degrees (points), e.g. 45.0 for 1.045
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GravityDegrees(pub f64);

/// Full specific gravity, e.g. 1.045
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecificGravity(pub f64);

impl From<GravityDegrees> for SpecificGravity {
    fn from(deg: GravityDegrees) -> Self {
        SpecificGravity((1000.0 + deg.0) / 1000.0)
    }
}

impl From<SpecificGravity> for GravityDegrees {
    fn from(sg: SpecificGravity) -> Self {
        GravityDegrees((sg.0 - 1.0) * 1000.0)
    }
}

// ============================================================================
// Colour Units
// ============================================================================

/// Colour on the European Brewing Convention scale
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ebc(pub f64);

/// Colour on the Standard Reference Method scale
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Srm(pub f64);

/// EBC units per SRM unit
pub const EBC_PER_SRM: f64 = 1.97;

impl From<Ebc> for Srm {
    fn from(ebc: Ebc) -> Self {
        Srm(ebc.0 / EBC_PER_SRM)
    }
}

impl From<Srm> for Ebc {
    fn from(srm: Srm) -> Self {
        Ebc(srm.0 * EBC_PER_SRM)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Grams);
impl_arithmetic!(Kilograms);
impl_arithmetic!(GravityDegrees);
impl_arithmetic!(SpecificGravity);
impl_arithmetic!(Ebc);
impl_arithmetic!(Srm);
