//! Causal discovery toolkit common types and errors.
//!
//! This crate provides foundational types shared across the toolkit:
//! - Named graph endpoints ([`Node`])
//! - Symmetric independence facts over node pairs ([`Fact`])
//! - Field delimiter kinds for tabular inputs
//! - Common error types

pub mod delimiter;
pub mod error;
pub mod fact;
pub mod node;

pub use delimiter::Delimiter;
pub use error::{Error, Result};
pub use fact::Fact;
pub use node::Node;
