//! Result Mailer Port - E-mail delivery of an exported result.
//!
//! Adapters (like `ResendMailer`) send the document as an attachment.
//! Delivery failures never affect the computed result; they are reported
//! to the caller as `MailError`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::EmailAddress;

use super::ExportedResult;

/// Subject line used for result e-mails.
pub const RESULT_SUBJECT: &str = "TOPSIS Analysis Result";

/// Port for delivering a result document by e-mail.
///
/// # Contract
///
/// Implementations must:
/// - Attach the document under its own filename and content type
/// - Fail with `NotConfigured` rather than silently dropping mail
/// - Distinguish transport failures from provider rejections
#[async_trait]
pub trait ResultMailer: Send + Sync {
    /// Send the document to a single recipient.
    async fn send_result(
        &self,
        recipient: &EmailAddress,
        document: &ExportedResult,
    ) -> Result<(), MailError>;

    /// Returns true if the mailer has what it needs to send.
    fn is_configured(&self) -> bool;
}

/// Errors that can occur during e-mail delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailError {
    /// No credentials or sender configured.
    #[error("Email service not configured")]
    NotConfigured,

    /// Connection to the mail API failed.
    #[error("Email network error: {0}")]
    Network(String),

    /// Mail API did not answer in time.
    #[error("Email request timed out")]
    Timeout,

    /// Mail API refused the message.
    #[error("Email rejected by provider ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl MailError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            MailError::NotConfigured => "EMAIL_NOT_CONFIGURED",
            MailError::Network(_) => "EMAIL_NETWORK_ERROR",
            MailError::Timeout => "EMAIL_TIMEOUT",
            MailError::Rejected { .. } => "EMAIL_REJECTED",
        }
    }

    pub fn network(reason: impl Into<String>) -> Self {
        Self::Network(reason.into())
    }
}
