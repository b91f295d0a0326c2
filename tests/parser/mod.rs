//! Parser layer tests
//!
//! - Logical statements (masking, continuation, splitting)
//! - Position mapping
