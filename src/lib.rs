//! TOPSIS Service - Multi-criteria ranking of alternatives
//!
//! Scores alternatives against weighted benefit and cost criteria using
//! TOPSIS (Technique for Order of Preference by Similarity to Ideal
//! Solution), and serves the engine over HTTP with CSV upload, CSV export
//! and e-mail delivery of results.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
