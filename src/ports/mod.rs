//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionTableParser` - Uploaded file bytes to a raw decision table
//! - `ResultExporter` - Ranked result to a downloadable document
//! - `ResultMailer` - E-mail delivery of an exported document

mod decision_table_parser;
mod result_exporter;
mod result_mailer;

pub use decision_table_parser::{DecisionTableParser, TableFormat, TableParseError};
pub use result_exporter::{ExportError, ExportedResult, ResultExporter};
pub use result_mailer::{MailError, ResultMailer, RESULT_SUBJECT};
