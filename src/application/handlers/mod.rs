//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod topsis;

pub use topsis::{
    Delivery, EvaluateMatrixHandler, EvaluateMatrixQuery, EvaluateMatrixResult,
    ExportResultCommand, ExportResultError, ExportResultHandler, RunAnalysisCommand,
    RunAnalysisError, RunAnalysisHandler, RunAnalysisResult,
};
