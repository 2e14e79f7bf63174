//! SMTP transport backed by lettre.

use std::future::Future;

use lettre::address::AddressError;
use lettre::message::{Mailbox, Mailboxes, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::transport::smtp::response::Response;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use thiserror::Error;

use super::transport::MailTransport;
use super::types::{Addresses, Envelope, TransportOptions};

/// Failure while sending through [`SmtpTransport`].
///
/// Each variant carries lettre's own error unchanged.
#[derive(Error, Debug)]
pub enum SmtpSendError {
    /// An address could not be parsed.
    #[error("invalid address: {0}")]
    Address(#[from] AddressError),

    /// The message could not be built (for example, no sender or no recipient).
    #[error("invalid message: {0}")]
    Message(#[from] lettre::error::Error),

    /// The SMTP exchange failed.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Asynchronous SMTP transport.
///
/// Each send opens its own connection.
pub struct SmtpTransport {
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpTransport {
    /// Create a transport from connection parameters.
    ///
    /// A secure transport uses implicit TLS. Otherwise the connection starts in
    /// plaintext and upgrades with STARTTLS when the server offers it.
    /// Credentials are only set when both user and password are present.
    pub fn create(options: &TransportOptions) -> Result<Self, lettre::transport::smtp::Error> {
        // Implicit TLS from the first byte
        let builder = if options.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&options.host)?
        } else {
            let tls = TlsParameters::new(options.host.clone())?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(options.host.as_str())
                .tls(Tls::Opportunistic(tls))
        };

        let mut builder = builder.port(options.port);

        // Only authenticate with a complete pair
        if let (Some(user), Some(pass)) = (&options.user, &options.pass) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            inner: builder.build(),
        })
    }
}

impl MailTransport for SmtpTransport {
    type Ok = Response;
    type Error = SmtpSendError;

    fn send_mail(
        &self,
        envelope: Envelope,
    ) -> impl Future<Output = Result<Self::Ok, Self::Error>> + Send {
        // Build errors surface through the returned future
        let message = build_message(envelope);
        async move { Ok(self.inner.send(message?).await?) }
    }
}

fn mailboxes(addresses: &Addresses) -> Result<Vec<Mailbox>, AddressError> {
    let mut parsed = Vec::new();
    for entry in addresses {
        parsed.extend(entry.parse::<Mailboxes>()?);
    }
    Ok(parsed)
}

/// Build a lettre message from an envelope.
///
/// The body is text-only, HTML-only, or multipart/alternative depending on
/// which bodies are non-empty.
fn build_message(envelope: Envelope) -> Result<lettre::Message, SmtpSendError> {
    let mut builder = lettre::Message::builder().subject(envelope.subject);

    for mailbox in mailboxes(&envelope.from)? {
        builder = builder.from(mailbox);
    }
    for mailbox in mailboxes(&envelope.to)? {
        builder = builder.to(mailbox);
    }
    for mailbox in mailboxes(&envelope.cc)? {
        builder = builder.cc(mailbox);
    }
    for mailbox in mailboxes(&envelope.bcc)? {
        builder = builder.bcc(mailbox);
    }

    // Pick the body layout
    let message = match (envelope.text.is_empty(), envelope.html.is_empty()) {
        (_, true) => builder.singlepart(SinglePart::plain(envelope.text))?,
        (true, false) => builder.singlepart(SinglePart::html(envelope.html))?,
        (false, false) => builder.multipart(MultiPart::alternative_plain_html(
            envelope.text,
            envelope.html,
        ))?,
    };

    Ok(message)
}
