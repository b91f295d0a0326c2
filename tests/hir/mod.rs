//! HIR layer tests
//!
//! - Symbol extraction from full documents
//! - Structural diagnostics
//! - Scope resolution
//! - Symbol store snapshots

pub mod tests_diagnostics;
pub mod tests_scope;
pub mod tests_store;
pub mod tests_symbol_extraction;
