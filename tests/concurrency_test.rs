//! Concurrency tests for the mailer.
//!
//! These tests verify that concurrent sends on one mailer are independent.

mod common;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Barrier;
use tokio::time::timeout;

use common::{accepted, gated_mailer, local_config};
use mail_service::Message;

/// Test that two concurrent sends both reach the transport.
///
/// Each send completes only after both have been started, so serialized
/// sends would never finish.
#[tokio::test]
async fn test_concurrent_sends_do_not_block_each_other() {
    let barrier = Arc::new(Barrier::new(2));
    let mailer = gated_mailer(&local_config(), barrier);

    // Start both sends before awaiting either
    let first = mailer.send(Message::new().subject("first"));
    let second = mailer.send(Message::new().subject("second"));

    let (first, second) = timeout(Duration::from_secs(5), async { tokio::join!(first, second) })
        .await
        .expect("concurrent sends should not block each other");

    assert_eq!(first, Ok(accepted()));
    assert_eq!(second, Ok(accepted()));

    // Transport saw them in call order
    let subjects: Vec<String> = mailer
        .transport()
        .sent()
        .into_iter()
        .map(|envelope| envelope.subject)
        .collect();
    assert_eq!(subjects, vec!["first".to_string(), "second".to_string()]);
}

/// Test many sends from spawned tasks sharing one mailer.
#[tokio::test]
async fn test_shared_mailer_across_tasks() {
    const NUM_SENDS: usize = 8;

    let barrier = Arc::new(Barrier::new(NUM_SENDS));
    let mailer = Arc::new(gated_mailer(&local_config(), barrier));

    // Send from spawned tasks
    let mut handles = Vec::new();
    for i in 0..NUM_SENDS {
        let mailer = Arc::clone(&mailer);
        handles.push(tokio::spawn(async move {
            mailer
                .send(Message::new().subject(format!("mail {i}")))
                .await
        }));
    }

    for handle in handles {
        let result = timeout(Duration::from_secs(5), handle)
            .await
            .expect("send should complete")
            .unwrap();
        assert_eq!(result, Ok(accepted()));
    }

    assert_eq!(mailer.transport().calls(), NUM_SENDS);
}
