//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O, no numeric logic. Just the vocabulary shared by the inference core,
//! the configuration loader and the shell.

pub mod config;
pub mod constants;
pub mod fertility;

pub use fertility::{FeatherDensity, FertilityLevel, FertilityQuery, InferenceInputs};
