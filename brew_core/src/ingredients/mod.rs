//! # Recipe Ingredients
//!
//! Data records the calculations operate on:
//!
//! - [`Grist`] - a fermentable (malt, adjunct, extract, sugar)
//! - [`HopAddition`] - a hop added to the boil
//! - [`Recipe`] - the grist bill plus hop schedule
//!
//! Records are plain values built by the caller right before a calculation.
//! Optional metadata (names, categories) rides along for display and is
//! never read by the formulas; a grist's category is folded into its
//! `mashable` flag when the grist is built with [`Grist::of_type`].

pub mod grist;
pub mod hop;
pub mod recipe;

pub use grist::{Fermentability, Grist, GristMetadata, GristType, NON_MASHABLES};
pub use hop::{HopAddition, HopMetadata};
pub use recipe::Recipe;
