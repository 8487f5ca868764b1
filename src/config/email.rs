//! Email configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::EmailAddress;

/// Email configuration (Resend)
///
/// Without an API key the service still runs; e-mail delivery then fails
/// with "Email service not configured".
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key
    pub resend_api_key: Option<String>,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Base URL of the e-mail API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Timeout for a single send in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl EmailConfig {
    /// True when an API key is present
    pub fn is_configured(&self) -> bool {
        self.resend_api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_configured()
            && !self
                .resend_api_key
                .as_deref()
                .is_some_and(|key| key.trim().starts_with("re_"))
        {
            return Err(ValidationError::InvalidResendKey);
        }
        if EmailAddress::new(&self.from_email).is_err() {
            return Err(ValidationError::InvalidFromEmail);
        }
        if !(self.api_base_url.starts_with("https://") || self.api_base_url.starts_with("http://")) {
            return Err(ValidationError::InvalidApiBaseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            from_email: default_from_email(),
            from_name: default_from_name(),
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_from_email() -> String {
    "noreply@topsis.local".to_string()
}

fn default_from_name() -> String {
    "TOPSIS Web Service".to_string()
}

fn default_api_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
