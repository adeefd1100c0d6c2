//! Core library for the pitch-class set toolkit.
//!
//! A [`PitchClassSet`] is an ordered, duplicate-free collection of integers
//! modulo a base (12 unless stated otherwise). The crate is split by concern:
//! construction and set algebra live in `pcset`, the elementary operations
//! (`T`, `I`, `M`, complement) in `transform`, normal/prime forms and set
//! classes in `canonical`, and the interval, invariance, Huron and Balzano
//! measures in `analysis`. Everything is computed on demand from the current
//! pitches; only the `_in_place` methods modify a set.

pub mod analysis;
pub mod canonical;
pub mod combinatorics;
pub mod config;
pub mod correlation;
pub mod error;
pub mod pcset;
pub mod transform;

pub use analysis::{HuronConsonance, HURON_WEIGHTS};
pub use canonical::most_left_compact;
pub use combinatorics::{binomial, choose};
pub use config::AnalysisConfig;
pub use correlation::pearson;
pub use error::{PcSetError, Result};
pub use pcset::{PitchClassSet, DEFAULT_BASE, MAX_STRING_BASE};
pub use transform::DEFAULT_MULTIPLIER;
