//! Project layer tests
//!
//! - Loading script directories into an AnalysisHost
