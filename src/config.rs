use crate::icmp::v4::ProbeIdentifier;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Run-scoped settings shared read-only by every probe.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// How long a probe waits for its echo reply after sending the request.
    pub timeout: Duration,
    /// Pause between two receive attempts that found nothing.
    pub poll_interval: Duration,
    pub identifier: ProbeIdentifier,
}

impl Config {
    pub fn new(timeout: Duration) -> Self {
        Config { timeout, poll_interval: DEFAULT_POLL_INTERVAL, identifier: ProbeIdentifier::from_process_id() }
    }

    #[must_use]
    pub fn with_poll_interval(self, poll_interval: Duration) -> Self {
        Config { poll_interval, ..self }
    }

    #[must_use]
    pub fn with_identifier(self, identifier: ProbeIdentifier) -> Self {
        Config { identifier, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_TIMEOUT)
    }
}
