//! Decision utilities (multiple testing control over independence tests).

pub mod fdr_selection;

pub use fdr_selection::{select_fdr, FdrSelectionResult, IndependenceTest, SelectionError};
