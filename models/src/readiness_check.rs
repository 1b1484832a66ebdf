use serde::{Deserialize, Serialize};

use std::time::Duration;

pub const DEFAULT_READINESS_HOST: &str = "localhost";
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(10);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Where and how long to probe for a listening server socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessCheck {
    pub host: String,
    pub port: u16,
    pub max_wait: Duration,
    pub poll_interval: Duration,
}

impl ReadinessCheck {
    /// Probe `localhost:<port>` every second for up to ten seconds.
    pub fn for_port(port: u16) -> Self {
        Self {
            host: String::from(DEFAULT_READINESS_HOST),
            port,
            max_wait: DEFAULT_MAX_WAIT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// `host:port` string accepted by socket connect calls.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
