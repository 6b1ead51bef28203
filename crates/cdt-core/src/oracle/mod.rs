//! Independence oracle storage.

pub mod facts;

pub use facts::FactSet;
