//! Mailer types.

use serde::Deserialize;

/// One or more address strings.
///
/// Each entry may itself hold a comma-separated list; entries are passed to
/// the transport as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "AddressesRepr")]
pub struct Addresses(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum AddressesRepr {
    One(String),
    Many(Vec<String>),
}

impl From<AddressesRepr> for Addresses {
    fn from(repr: AddressesRepr) -> Self {
        match repr {
            AddressesRepr::One(address) => Self(vec![address]),
            AddressesRepr::Many(addresses) => Self(addresses),
        }
    }
}

impl Addresses {
    /// Create an empty address list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no address is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl From<&str> for Addresses {
    fn from(address: &str) -> Self {
        Self(vec![address.to_string()])
    }
}

impl From<String> for Addresses {
    fn from(address: String) -> Self {
        Self(vec![address])
    }
}

impl From<Vec<String>> for Addresses {
    fn from(addresses: Vec<String>) -> Self {
        Self(addresses)
    }
}

impl From<Vec<&str>> for Addresses {
    fn from(addresses: Vec<&str>) -> Self {
        Self(addresses.into_iter().map(str::to_string).collect())
    }
}

impl<'a> IntoIterator for &'a Addresses {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A message to send.
///
/// Every field is optional and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    /// Sender address.
    pub from: Addresses,
    /// Primary recipients.
    pub to: Addresses,
    /// Carbon copy recipients.
    pub cc: Addresses,
    /// Blind carbon copy recipients.
    pub bcc: Addresses,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub body_text: String,
    /// HTML body.
    pub body_html: String,
}

impl Message {
    /// Create an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender.
    pub fn from(mut self, from: impl Into<Addresses>) -> Self {
        self.from = from.into();
        self
    }

    /// Set the primary recipients.
    pub fn to(mut self, to: impl Into<Addresses>) -> Self {
        self.to = to.into();
        self
    }

    /// Set the carbon copy recipients.
    pub fn cc(mut self, cc: impl Into<Addresses>) -> Self {
        self.cc = cc.into();
        self
    }

    /// Set the blind carbon copy recipients.
    pub fn bcc(mut self, bcc: impl Into<Addresses>) -> Self {
        self.bcc = bcc.into();
        self
    }

    /// Set the subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Set the plain text body.
    pub fn body_text(mut self, body: impl Into<String>) -> Self {
        self.body_text = body.into();
        self
    }

    /// Set the HTML body.
    pub fn body_html(mut self, body: impl Into<String>) -> Self {
        self.body_html = body.into();
        self
    }
}

/// The fields handed to a transport for one outbound message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    pub from: Addresses,
    pub to: Addresses,
    pub cc: Addresses,
    pub bcc: Addresses,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl From<Message> for Envelope {
    fn from(message: Message) -> Self {
        Self {
            from: message.from,
            to: message.to,
            cc: message.cc,
            bcc: message.bcc,
            subject: message.subject,
            text: message.body_text,
            html: message.body_html,
        }
    }
}

/// Connection parameters handed to a transport at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportOptions {
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub user: Option<String>,
    pub pass: Option<String>,
}
