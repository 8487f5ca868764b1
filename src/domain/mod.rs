//! Domain layer containing ranking logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, e-mail, errors)
//! - `topsis` - Pure TOPSIS stages and the engine that composes them

pub mod foundation;
pub mod topsis;
