//! Transport trait for the mailer.
//!
//! A transport performs the actual delivery. The mailer only hands it an
//! [`Envelope`] and returns whatever the transport produces.

use std::future::Future;

use super::types::Envelope;

/// A configured connection capable of sending mail.
pub trait MailTransport: Send + Sync {
    /// Delivery confirmation returned on success.
    type Ok: Send;
    /// Failure reported by the transport.
    type Error: Send;

    /// Start sending one envelope.
    ///
    /// The returned future resolves once the transport has delivered the
    /// message or failed to.
    fn send_mail(
        &self,
        envelope: Envelope,
    ) -> impl Future<Output = Result<Self::Ok, Self::Error>> + Send;
}
