//! In-memory mailer for tests and local runs without e-mail credentials.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::foundation::EmailAddress;
use crate::ports::{ExportedResult, MailError, ResultMailer};

/// A message captured by `InMemoryMailer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub recipient: EmailAddress,
    pub document: ExportedResult,
}

/// Records messages instead of sending them. Can be set to fail.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMailer {
    sent: Arc<Mutex<Vec<SentMail>>>,
    failure: Option<MailError>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails with `error`.
    pub fn failing(error: MailError) -> Self {
        Self {
            sent: Arc::default(),
            failure: Some(error),
        }
    }

    /// Messages sent so far, oldest first.
    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ResultMailer for InMemoryMailer {
    async fn send_result(
        &self,
        recipient: &EmailAddress,
        document: &ExportedResult,
    ) -> Result<(), MailError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| MailError::network("mailbox lock poisoned"))?;
        sent.push(SentMail {
            recipient: recipient.clone(),
            document: document.clone(),
        });
        Ok(())
    }

    fn is_configured(&self) -> bool {
        !matches!(self.failure, Some(MailError::NotConfigured))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> ExportedResult {
        ExportedResult::new(b"x".to_vec(), "text/csv", "r.csv")
    }

    #[tokio::test]
    async fn records_sent_mail() {
        let mailer = InMemoryMailer::new();
        let to = EmailAddress::new("a@example.com").unwrap();
        mailer.send_result(&to, &document()).await.unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, to);
        assert_eq!(sent[0].document.filename, "r.csv");
    }

    #[tokio::test]
    async fn failing_mailer_returns_error_and_records_nothing() {
        let mailer = InMemoryMailer::failing(MailError::Timeout);
        let to = EmailAddress::new("a@example.com").unwrap();
        assert_eq!(
            mailer.send_result(&to, &document()).await.unwrap_err(),
            MailError::Timeout
        );
        assert!(mailer.sent().is_empty());
        assert!(mailer.is_configured());
    }

    #[test]
    fn not_configured_failure_reports_unconfigured() {
        assert!(!InMemoryMailer::failing(MailError::NotConfigured).is_configured());
    }
}
