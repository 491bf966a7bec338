use std::net::{IpAddr, Ipv4Addr};

/// Name resolution seam. Every failure is `None`, the caller never sees why.
#[async_trait::async_trait]
pub trait Resolve: Send + Sync {
    async fn resolve(&self, host: &str) -> Option<Ipv4Addr>;
}

/// Resolves through the operating system (`getaddrinfo`), first IPv4 address wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResolver;

#[async_trait::async_trait]
impl Resolve for SystemResolver {
    async fn resolve(&self, host: &str) -> Option<Ipv4Addr> {
        let addrs = match tokio::net::lookup_host((host, 0)).await {
            Ok(addrs) => addrs,
            Err(e) => {
                tracing::debug!("could not resolve {host:?}: {e}");
                return None;
            }
        };
        let ipv4 = addrs.map(|addr| addr.ip()).find_map(|ip| match ip {
            IpAddr::V4(ipv4) => Some(ipv4),
            IpAddr::V6(_) => None,
        });
        if ipv4.is_none() {
            tracing::debug!("{host:?} has no IPv4 address");
        }
        ipv4
    }
}
