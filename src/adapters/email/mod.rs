//! E-mail adapters - Delivery of exported results.

mod in_memory_mailer;
mod resend_mailer;

pub use in_memory_mailer::{InMemoryMailer, SentMail};
pub use resend_mailer::{ResendConfig, ResendMailer, RESULT_BODY};
