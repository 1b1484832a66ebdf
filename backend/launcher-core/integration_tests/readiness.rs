use launcher_core::error::launch::LaunchError;
use launcher_core::readiness::{Readiness, ensure_ready, probe_once, wait_for_ready};

use models::ReadinessCheck;

use std::net::TcpListener as StdTcpListener;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::time::sleep;

fn unused_port() -> u16 {
    let listener = StdTcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn fast_check(port: u16, max_wait: Duration) -> ReadinessCheck {
    ReadinessCheck::for_port(port)
        .with_host("127.0.0.1")
        .with_max_wait(max_wait)
        .with_poll_interval(Duration::from_millis(50))
}

/// **VALUE**: Verifies that an already listening port is reported ready on the first attempt.
///
/// **WHY THIS MATTERS**: When the server starts quickly the build should not sit through
/// extra poll intervals.
#[tokio::test]
async fn given_listener_already_open_when_waiting_then_ready_on_first_attempt() {
    // GIVEN: A bound listener
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    // WHEN: Waiting
    let readiness = wait_for_ready(&fast_check(port, Duration::from_secs(2))).await;

    // THEN: Ready after one attempt
    assert!(readiness.is_ready());
    assert_eq!(readiness.attempts(), 1);
}

/// **VALUE**: Verifies that a listener opened during the wait is picked up.
///
/// **WHY THIS MATTERS**: This is the normal case: the server process needs a moment to bind.
///
/// **BUG THIS CATCHES**: Would catch a loop that only checks once, or stops polling after
/// the first refused connection.
#[tokio::test]
async fn given_listener_opened_later_when_waiting_then_ready_after_retries() {
    // GIVEN: A port that starts listening after 200ms
    let port = unused_port();
    let server = tokio::spawn(async move {
        sleep(Duration::from_millis(200)).await;
        let listener = TcpListener::bind(("127.0.0.1", port)).await.unwrap();
        // Keep accepting until the test is done with the port.
        loop {
            if listener.accept().await.is_err() {
                break;
            }
        }
    });

    // WHEN: Waiting with a generous budget
    let readiness = wait_for_ready(&fast_check(port, Duration::from_secs(5))).await;

    // THEN: Ready, after more than one attempt
    assert!(readiness.is_ready(), "Got {readiness:?}");
    assert!(readiness.attempts() > 1);

    server.abort();
}

/// **VALUE**: Verifies that the wait gives up without raising when nothing ever listens.
///
/// **WHY THIS MATTERS**: The task treats readiness as best effort. A timeout must come back
/// as a value so the caller decides whether it is fatal.
///
/// **BUG THIS CATCHES**: Would catch an infinite loop when the backoff deadline is not set.
#[tokio::test]
async fn given_no_listener_when_waiting_then_times_out_without_error() {
    // GIVEN: A closed port and a short budget
    let port = unused_port();

    // WHEN: Waiting
    let readiness = wait_for_ready(&fast_check(port, Duration::from_millis(300))).await;

    // THEN: TimedOut after several attempts
    match readiness {
        Readiness::TimedOut { attempts, elapsed } => {
            assert!(attempts >= 2, "Should poll more than once, got {attempts}");
            assert!(elapsed < Duration::from_secs(5));
        }
        Readiness::Ready { .. } => panic!("Nothing listens on {port}"),
    }
}

/// **VALUE**: Verifies that a zero poll interval still detects a listener that appears later.
///
/// **WHY THIS MATTERS**: `ReadinessCheck` is public and accepts any interval. With a zero
/// interval every connect attempt would get a zero timeout and the wait could only time out.
///
/// **BUG THIS CATCHES**: Would catch the interval being used unchecked for the connect timeout
/// and the retry delay.
#[tokio::test]
async fn given_zero_poll_interval_when_listener_opens_then_ready_with_bounded_attempts() {
    // GIVEN: A port that starts listening after 200ms and a zero interval
    let port = unused_port();
    let server = tokio::spawn(async move {
        sleep(Duration::from_millis(200)).await;
        let listener = TcpListener::bind(("127.0.0.1", port)).await.unwrap();
        loop {
            if listener.accept().await.is_err() {
                break;
            }
        }
    });
    let check = fast_check(port, Duration::from_secs(5)).with_poll_interval(Duration::ZERO);

    // WHEN: Waiting
    let readiness = wait_for_ready(&check).await;

    // THEN: Ready, without spinning through thousands of attempts
    assert!(readiness.is_ready(), "Got {readiness:?}");
    assert!(
        readiness.attempts() < 200,
        "Interval floor not applied: {} attempts",
        readiness.attempts()
    );

    server.abort();
}

#[tokio::test]
async fn given_closed_port_when_probed_once_then_false() {
    let port = unused_port();

    assert!(!probe_once(&format!("127.0.0.1:{port}"), Duration::from_millis(200)).await);
}

/// **VALUE**: Verifies the strict switch: timeouts fail only when strict mode is on.
///
/// **WHY THIS MATTERS**: Default builds keep the lenient behaviour; strict pipelines need a
/// hard failure before tests run against a missing database.
#[test]
fn given_timed_out_readiness_when_ensured_then_fails_only_in_strict_mode() {
    // GIVEN: A timed out result
    let check = ReadinessCheck::for_port(9010);
    let timed_out = Readiness::TimedOut {
        attempts: 11,
        elapsed: Duration::from_secs(10),
    };
    let ready = Readiness::Ready {
        attempts: 1,
        elapsed: Duration::ZERO,
    };

    // WHEN / THEN
    assert!(ensure_ready(&timed_out, &check, false).is_ok());
    assert!(ensure_ready(&ready, &check, true).is_ok());
    match ensure_ready(&timed_out, &check, true) {
        Err(LaunchError::NotReady { message, .. }) => {
            assert!(message.contains("localhost:9010"), "{message}");
        }
        other => panic!("Expected NotReady, got {other:?}"),
    }
}
