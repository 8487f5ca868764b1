//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    Delivery, EvaluateMatrixHandler, EvaluateMatrixQuery, EvaluateMatrixResult,
    ExportResultCommand, ExportResultError, ExportResultHandler, RunAnalysisCommand,
    RunAnalysisError, RunAnalysisHandler, RunAnalysisResult,
};
