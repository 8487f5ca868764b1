//! TOPSIS HTTP adapter - Upload, evaluation and export endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalysisResponse, ErrorResponse, EvaluateRequest, HealthResponse, ListInput, MessageResponse,
    ResultOption,
};
pub use handlers::{TopsisApiError, TopsisAppState};
pub use routes::{topsis_router, topsis_routes};
