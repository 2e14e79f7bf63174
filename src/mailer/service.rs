//! Mailer service.
//!
//! Validates connection parameters once, owns the resulting transport, and
//! forwards each message to it.

use std::error::Error;
use std::future::Future;

use tracing::{debug, trace};

use crate::config::MailerConfig;
use crate::{MailServiceError, Result};

use super::smtp::SmtpTransport;
use super::transport::MailTransport;
use super::types::{Envelope, Message, TransportOptions};

/// Sends mail through a single transport created at construction.
pub struct Mailer<T = SmtpTransport> {
    transport: T,
}

impl Mailer<SmtpTransport> {
    /// Create a mailer backed by an SMTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`MailServiceError::MissingParameter`] if the host or port is
    /// missing, or [`MailServiceError::TransportSetup`] if the transport
    /// cannot be created.
    pub fn new(config: &MailerConfig) -> Result<Self> {
        Self::with_transport(config, SmtpTransport::create)
    }
}

impl<T: MailTransport> Mailer<T> {
    /// Create a mailer whose transport is built by `create`.
    ///
    /// `create` is only called once the host and port have been validated.
    pub fn with_transport<F, E>(config: &MailerConfig, create: F) -> Result<Self>
    where
        F: FnOnce(&TransportOptions) -> std::result::Result<T, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        // Validate before touching the transport
        let (host, port) = config.require_endpoint()?;
        let options = TransportOptions {
            host: host.to_string(),
            port,
            secure: config.is_secure,
            user: config.auth.user.clone(),
            pass: config.auth.pass.clone(),
        };

        let transport = create(&options).map_err(|e| MailServiceError::TransportSetup(e.into()))?;
        debug!(
            host = %options.host,
            port = options.port,
            secure = options.secure,
            "mail transport created"
        );

        Ok(Self { transport })
    }

    /// The transport this mailer sends through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a message.
    ///
    /// The transport is invoked immediately with the message's fields. The
    /// returned future is the transport's own and resolves to its result.
    pub fn send(
        &self,
        message: Message,
    ) -> impl Future<Output = std::result::Result<T::Ok, T::Error>> + Send + '_ {
        // Fields map one-to-one, nothing is checked here
        let envelope = Envelope::from(message);
        trace!(
            to = envelope.to.len(),
            cc = envelope.cc.len(),
            bcc = envelope.bcc.len(),
            "dispatching mail"
        );
        self.transport.send_mail(envelope)
    }
}
