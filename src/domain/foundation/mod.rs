//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary shared by the engine and the delivery layers.

mod email_address;
mod errors;
mod ids;
mod timestamp;

pub use email_address::EmailAddress;
pub use errors::ValidationError;
pub use ids::AnalysisId;
pub use timestamp::Timestamp;
