//! Adapters - Implementations of ports for external systems.
//!
//! - `table` - CSV upload parsing and CSV result export
//! - `email` - Resend API mailer and an in-memory mailer
//! - `http` - Axum routes, DTOs and middleware stack

pub mod email;
pub mod http;
pub mod table;
