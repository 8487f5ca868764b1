//! TOPSIS handlers - Upload analysis, JSON evaluation and CSV export.

mod evaluate_matrix;
mod export_result;
mod run_analysis;

pub use evaluate_matrix::{EvaluateMatrixHandler, EvaluateMatrixQuery, EvaluateMatrixResult};
pub use export_result::{ExportResultCommand, ExportResultError, ExportResultHandler};
pub use run_analysis::{
    Delivery, RunAnalysisCommand, RunAnalysisError, RunAnalysisHandler, RunAnalysisResult,
};
