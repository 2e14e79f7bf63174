//! Mailer module.
//!
//! This module provides outbound mail:
//! - Connection parameter validation
//! - A transport trait and its lettre-backed SMTP implementation
//! - Message to envelope mapping

mod service;
mod smtp;
mod transport;
mod types;

pub use service::Mailer;
pub use smtp::{SmtpSendError, SmtpTransport};
pub use transport::MailTransport;
pub use types::{Addresses, Envelope, Message, TransportOptions};
