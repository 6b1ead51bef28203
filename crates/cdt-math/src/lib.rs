//! Causal discovery toolkit math utilities.

pub mod math;

pub use math::fdr::*;
