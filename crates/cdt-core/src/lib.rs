//! Causal discovery toolkit core.
//!
//! Combines the FDR cutoff with independence facts: a batch of independence
//! tests is corrected for multiple testing, and the surviving independence
//! judgments are stored in a [`FactSet`] that search algorithms query by
//! unordered node pair.

pub mod decision;
pub mod logging;
pub mod oracle;

pub use decision::{select_fdr, FdrSelectionResult, IndependenceTest, SelectionError};
pub use logging::{init_logging, LogFormat};
pub use oracle::FactSet;
