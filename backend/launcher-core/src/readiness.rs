//! TCP readiness probe for a freshly started server.

use crate::error::launch::LaunchError;

use common::ErrorLocation;
use models::ReadinessCheck;

use std::panic::Location;
use std::time::{Duration, Instant};

use backoff::{ExponentialBackoff, backoff::Backoff};
use log::{debug, info, trace, warn};
use serde::Serialize;
use tokio::net::TcpStream;
use tokio::time::sleep as TokioSleep;
use tokio::time::timeout as TokioTimeout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Readiness {
    /// A connection to the port succeeded.
    Ready { attempts: u32, elapsed: Duration },
    /// `max_wait` ran out without a successful connection.
    TimedOut { attempts: u32, elapsed: Duration },
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready { .. })
    }

    pub fn attempts(&self) -> u32 {
        match self {
            Readiness::Ready { attempts, .. } | Readiness::TimedOut { attempts, .. } => *attempts,
        }
    }
}

/// Try one connection to `address`, closing it straight away.
pub async fn probe_once(address: &str, connect_timeout: Duration) -> bool {
    match TokioTimeout(connect_timeout, TcpStream::connect(address)).await {
        Ok(Ok(stream)) => {
            drop(stream);
            true
        }
        Ok(Err(e)) => {
            trace!("Connection to {address} failed: {e}");
            false
        }
        Err(_) => {
            trace!("Connection to {address} timed out after {connect_timeout:?}");
            false
        }
    }
}

/// Floor for the poll interval; a zero interval would also mean zero-length connect attempts.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

fn effective_poll_interval(check: &ReadinessCheck) -> Duration {
    if check.poll_interval < MIN_POLL_INTERVAL {
        warn!(
            "Poll interval {:?} is too short, using {MIN_POLL_INTERVAL:?}",
            check.poll_interval
        );
        return MIN_POLL_INTERVAL;
    }
    check.poll_interval
}

fn constant_backoff(poll_interval: Duration, max_wait: Duration) -> ExponentialBackoff {
    let mut backoff = ExponentialBackoff {
        current_interval: poll_interval,
        initial_interval: poll_interval,
        max_interval: poll_interval,
        randomization_factor: 0.0,
        multiplier: 1.0,
        max_elapsed_time: Some(max_wait),
        ..Default::default()
    };
    backoff.reset();
    backoff
}

/// Poll `check.host:check.port` until it accepts a connection or `check.max_wait` elapses.
///
/// The first attempt is immediate, later ones are `check.poll_interval` apart
/// (at least [`MIN_POLL_INTERVAL`]).
/// Running out of time is not an error: the caller gets [`Readiness::TimedOut`].
pub async fn wait_for_ready(check: &ReadinessCheck) -> Readiness {
    let address = check.address();
    let started = Instant::now();
    let poll_interval = effective_poll_interval(check);
    let mut backoff = constant_backoff(poll_interval, check.max_wait);
    let mut attempts = 0;

    debug!(
        "Waiting up to {:?} for {address}, checking every {:?}",
        check.max_wait, poll_interval
    );

    loop {
        attempts += 1;

        if probe_once(&address, poll_interval).await {
            let elapsed = started.elapsed();
            info!("Server is accepting connections at {address} after {elapsed:?}");
            return Readiness::Ready { attempts, elapsed };
        }

        match backoff.next_backoff() {
            Some(duration) => {
                trace!("Server not ready, retrying after {duration:?}");
                TokioSleep(duration).await;
            }
            None => {
                let elapsed = started.elapsed();
                warn!(
                    "Server at {address} did not accept connections within {:?} ({attempts} attempts)",
                    check.max_wait
                );
                return Readiness::TimedOut { attempts, elapsed };
            }
        }
    }
}

/// In strict mode a timed out wait becomes [`LaunchError::NotReady`].
#[track_caller]
pub fn ensure_ready(readiness: &Readiness, check: &ReadinessCheck, strict: bool) -> Result<(), LaunchError> {
    match readiness {
        Readiness::TimedOut { attempts, .. } if strict => Err(LaunchError::NotReady {
            message: format!(
                "Server at {} did not accept connections within {:?} ({attempts} attempts)",
                check.address(),
                check.max_wait
            ),
            location: ErrorLocation::from(Location::caller()),
        }),
        _ => Ok(()),
    }
}
