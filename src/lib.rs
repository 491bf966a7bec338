//! Finds out which hosts of a list answer ICMP echo requests, pinging all of them at once.
//!
//! Every target gets its own probe with its own raw socket. A probe resolves the host name, sends a
//! single echo request and polls for the matching echo reply until its timeout runs out. The whole
//! list therefore takes about as long as the slowest probe.
//!
//! ```rust,no_run
//! # async fn example() -> fing::PingResult<()> {
//! let outcomes = fing::run_all(&["localhost", "example.com"], std::time::Duration::from_secs(1)).await?;
//! for host in fing::reachable_targets(&outcomes) {
//!     println!("{host} is up");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Raw sockets need root or `CAP_NET_RAW`; without it the run fails with
//! [`PingError::InsufficientPrivilege`].
#![warn(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub use config::{Config, DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT};
pub use coordinator::{run_all, Coordinator};
pub use ping_error::{PingError, PingResult};
pub use probe_outcome::{reachable_targets, ProbeOutcome};
pub use resolver::{Resolve, SystemResolver};

mod config;
mod coordinator;
pub mod icmp;
mod ping_error;
mod probe;
mod probe_outcome;
mod resolver;
