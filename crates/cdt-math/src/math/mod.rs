//! Core math modules.

pub mod fdr;
