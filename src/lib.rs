//! Mail service
//!
//! A small mailer that validates SMTP connection parameters and forwards
//! messages to a transport.

pub mod config;
pub mod error;
pub mod logging;
pub mod mailer;

pub use config::{AuthConfig, Config, LoggingConfig, MailerConfig};
pub use error::{MailServiceError, Result};
pub use mailer::{
    Addresses, Envelope, MailTransport, Mailer, Message, SmtpSendError, SmtpTransport,
    TransportOptions,
};
