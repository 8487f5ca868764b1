//! Resend Mailer - Implementation of ResultMailer for the Resend e-mail API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ResendConfig::new(api_key)
//!     .with_from("noreply@example.com", "TOPSIS Web Service")
//!     .with_base_url("https://api.resend.com");
//!
//! let mailer = ResendMailer::new(config)?;
//! ```
//!
//! Attachments are sent inline as base64 in the JSON request body.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::config::EmailConfig;
use crate::domain::foundation::EmailAddress;
use crate::ports::{ExportedResult, MailError, ResultMailer, RESULT_SUBJECT};

/// Plain-text body sent with every result.
pub const RESULT_BODY: &str = "Dear User,\n\nPlease find attached your TOPSIS analysis result file.\n\nBest regards,\nTOPSIS Web Service";

/// Configuration for the Resend mailer.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API key. `None` leaves the mailer unconfigured.
    api_key: Option<Secret<String>>,
    pub from_email: String,
    pub from_name: String,
    /// Base URL for the API (default: https://api.resend.com).
    pub base_url: String,
    pub timeout: Duration,
}

impl ResendConfig {
    /// Creates a configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(Secret::new(api_key.into())),
            ..Self::unconfigured()
        }
    }

    /// Configuration without credentials; every send fails with `NotConfigured`.
    pub fn unconfigured() -> Self {
        Self {
            api_key: None,
            from_email: "noreply@topsis.local".to_string(),
            from_name: "TOPSIS Web Service".to_string(),
            base_url: "https://api.resend.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Builds the mailer configuration from application config.
    pub fn from_email_config(config: &EmailConfig) -> Self {
        let base = match config.resend_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Self::new(key),
            _ => Self::unconfigured(),
        };
        base.with_from(config.from_email.clone(), config.from_name.clone())
            .with_base_url(config.api_base_url.clone())
            .with_timeout(Duration::from_secs(config.timeout_secs))
    }

    pub fn with_from(mut self, email: impl Into<String>, name: impl Into<String>) -> Self {
        self.from_email = email.into();
        self.from_name = name.into();
        self
    }

    /// Sets the base URL. A trailing slash is ignored.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Formatted "From" header value.
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret().as_str())
    }
}

/// Resend API mailer.
pub struct ResendMailer {
    config: ResendConfig,
    client: Client,
}

impl ResendMailer {
    /// Creates a mailer with its own HTTP client.
    pub fn new(config: ResendConfig) -> Result<Self, MailError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MailError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url)
    }

    fn to_resend_request(&self, recipient: &EmailAddress, document: &ExportedResult) -> ResendRequest {
        ResendRequest {
            from: self.config.from_header(),
            to: vec![recipient.as_str().to_string()],
            subject: RESULT_SUBJECT.to_string(),
            text: RESULT_BODY.to_string(),
            attachments: vec![ResendAttachment {
                filename: document.filename.clone(),
                content: STANDARD.encode(&document.content),
                content_type: document.content_type.clone(),
            }],
        }
    }

    async fn handle_response_status(response: Response) -> Result<(), MailError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let error_body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ResendErrorBody>(&error_body)
            .map(|body| body.message)
            .unwrap_or(error_body);

        Err(MailError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ResultMailer for ResendMailer {
    async fn send_result(
        &self,
        recipient: &EmailAddress,
        document: &ExportedResult,
    ) -> Result<(), MailError> {
        let api_key = self.config.api_key().ok_or(MailError::NotConfigured)?;
        let request = self.to_resend_request(recipient, document);

        tracing::debug!(
            recipient = %recipient,
            filename = %document.filename,
            bytes = document.len(),
            "Sending result e-mail"
        );

        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MailError::Timeout
                } else if e.is_connect() {
                    MailError::network(format!("Connection failed: {}", e))
                } else {
                    MailError::network(e.to_string())
                }
            })?;

        Self::handle_response_status(response).await?;
        tracing::info!(recipient = %recipient, "Result e-mail accepted");
        Ok(())
    }

    fn is_configured(&self) -> bool {
        self.config.api_key().is_some()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Resend API types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize, Deserialize)]
struct ResendRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    text: String,
    attachments: Vec<ResendAttachment>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ResendAttachment {
    filename: String,
    /// Base64-encoded file content.
    content: String,
    content_type: String,
}

#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    message: String,
}
