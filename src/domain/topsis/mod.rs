//! TOPSIS Module - Multi-criteria ranking of alternatives.
//!
//! Pure, stateless stages that turn a decision matrix, a weight vector and
//! an impact vector into scored, ranked rows.
//!
//! # Components
//!
//! - `InputValidator` - Fail-fast checks on raw tables, weights and impacts
//! - `Normalizer` - Euclidean column normalization
//! - `Weighter` - Column-wise weighting
//! - `IdealSolutionConstructor` - Per-criterion best / worst values
//! - `Scorer` - Separation measures and relative closeness
//! - `Ranker` - Dense ranking with a small tie tolerance
//! - `TopsisEngine` - The stages composed in order
//!
//! # Design Philosophy
//!
//! Nothing here performs I/O or logs. Parsing uploads, exporting results and
//! delivering them are adapter concerns behind the ports module.

mod decision_matrix;
mod engine;
mod errors;
mod grid;
mod ideal_solution;
mod impact;
mod normalizer;
mod ranker;
mod raw_table;
mod result;
mod scorer;
mod validator;
mod weighter;
mod weights;

pub use decision_matrix::DecisionMatrix;
pub use engine::TopsisEngine;
pub use errors::TopsisError;
pub use ideal_solution::{IdealSolutionConstructor, IdealSolutions};
pub use impact::{Impact, ImpactVector};
pub use normalizer::{NormalizedMatrix, Normalizer};
pub use ranker::{Ranker, TIE_TOLERANCE};
pub use raw_table::{RawDecisionTable, RawDecisionTableBuilder};
pub use result::{ResultRow, TopsisResult, RANK_COLUMN, SCORE_COLUMN};
pub use scorer::{Scorer, Separation};
pub use validator::{split_list, InputValidator, ValidatedInput};
pub use weighter::{WeightedMatrix, Weighter};
pub use weights::WeightVector;
