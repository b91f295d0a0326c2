//! IDE layer tests
//!
//! - AnalysisHost document lifecycle
//! - Completion
//! - Document outline and workspace symbols
//! - Folding ranges

pub mod tests_analysis_host;
pub mod tests_completion;
pub mod tests_folding;
