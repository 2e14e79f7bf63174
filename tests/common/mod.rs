//! Test helpers for mailer integration tests.
//!
//! Provides a recording transport and helpers to build mailers around it.

#![allow(dead_code)]

use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::sync::Barrier;

use mail_service::{Envelope, MailTransport, Mailer, MailerConfig, TransportOptions};

/// Delivery confirmation returned by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub message_id: String,
}

/// Failure returned by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockError(pub String);

/// What the transport answers to every send.
#[derive(Debug, Clone)]
pub enum Behavior {
    Accept(MockResponse),
    Reject(MockError),
}

/// Transport that records every envelope it is given.
pub struct MockTransport {
    pub options: TransportOptions,
    behavior: Behavior,
    sent: Mutex<Vec<Envelope>>,
    barrier: Option<Arc<Barrier>>,
}

impl MockTransport {
    /// Envelopes received so far, in call order.
    pub fn sent(&self) -> Vec<Envelope> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of send calls so far.
    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl MailTransport for MockTransport {
    type Ok = MockResponse;
    type Error = MockError;

    fn send_mail(
        &self,
        envelope: Envelope,
    ) -> impl Future<Output = Result<MockResponse, MockError>> + Send {
        self.sent.lock().unwrap().push(envelope);
        let outcome = match &self.behavior {
            Behavior::Accept(response) => Ok(response.clone()),
            Behavior::Reject(error) => Err(error.clone()),
        };
        let barrier = self.barrier.clone();

        async move {
            if let Some(barrier) = barrier {
                barrier.wait().await;
            }
            outcome
        }
    }
}

/// A fixed success response.
pub fn accepted() -> MockResponse {
    MockResponse {
        message_id: "<1@mock>".to_string(),
    }
}

/// Build a mailer around a mock transport.
pub fn mock_mailer(config: &MailerConfig, behavior: Behavior) -> Mailer<MockTransport> {
    build(config, behavior, None).unwrap()
}

/// Build a mailer whose sends each wait on `barrier` before completing.
pub fn gated_mailer(config: &MailerConfig, barrier: Arc<Barrier>) -> Mailer<MockTransport> {
    build(config, Behavior::Accept(accepted()), Some(barrier)).unwrap()
}

/// Try to build a mailer around a mock transport.
pub fn build(
    config: &MailerConfig,
    behavior: Behavior,
    barrier: Option<Arc<Barrier>>,
) -> mail_service::Result<Mailer<MockTransport>> {
    Mailer::with_transport(config, |options: &TransportOptions| {
        Ok::<_, std::convert::Infallible>(MockTransport {
            options: options.clone(),
            behavior,
            sent: Mutex::new(Vec::new()),
            barrier,
        })
    })
}

/// A valid configuration pointing at a local server.
pub fn local_config() -> MailerConfig {
    MailerConfig::new("localhost", 2525)
}
