use crate::icmp::v4::{RawSocketFactory, SocketFactory};
use crate::{probe, Config, PingResult, ProbeOutcome, Resolve, SystemResolver};
use futures::future::try_join_all;
use std::time::Duration;

/// Pings any number of hosts at once, one probe and one raw socket per host.
pub struct Coordinator<R = SystemResolver, F = RawSocketFactory> {
    config: Config,
    resolver: R,
    sockets: F,
}

impl Coordinator {
    /// System name resolution and raw ICMP sockets.
    pub fn new(config: Config) -> Self {
        Coordinator::with_parts(config, SystemResolver, RawSocketFactory)
    }
}

impl<R, F> Coordinator<R, F>
where
    R: Resolve,
    F: SocketFactory,
{
    pub fn with_parts(config: Config, resolver: R, sockets: F) -> Self {
        Coordinator { config, resolver, sockets }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn run(&self, target: &str) -> PingResult<ProbeOutcome> {
        probe::run(target, &self.config, &self.resolver, &self.sockets).await
    }

    /// Probes all targets concurrently; the outcomes come back in the order of `targets`.
    ///
    /// Duplicate targets are probed independently. The first fatal error (no privilege to open
    /// raw sockets) cancels the probes still in flight and is returned instead of any outcome.
    pub async fn run_all<T: AsRef<str>>(&self, targets: &[T]) -> PingResult<Vec<ProbeOutcome>> {
        tracing::debug!(
            "probing {} targets, identifier {}, timeout {:?}",
            targets.len(),
            self.config.identifier,
            self.config.timeout
        );
        let probes = targets.iter().map(|target| self.run(target.as_ref()));
        let outcomes = try_join_all(probes).await?;
        let n_reachable = outcomes.iter().filter(|outcome| outcome.is_reachable()).count();
        tracing::debug!("{n_reachable} of {} targets reachable", outcomes.len());
        Ok(outcomes)
    }
}

/// Shortcut for `Coordinator::new(Config::new(timeout)).run_all(targets)`.
pub async fn run_all<T: AsRef<str>>(targets: &[T], timeout: Duration) -> PingResult<Vec<ProbeOutcome>> {
    Coordinator::new(Config::new(timeout)).run_all(targets).await
}
