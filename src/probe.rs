use crate::icmp::v4::{codec, ProbeIdentifier, SocketFactory, TSocket};
use crate::{Config, PingError, PingResult, ProbeOutcome, Resolve};
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::time::Instant;

const RECV_BUFFER_SIZE: usize = 1024;

/// Probes one target: resolve, send one echo request, poll for the matching reply.
///
/// Per-target trouble ends up in the outcome. Only failing to open the socket is an error, since
/// that hits every other probe of the run just the same.
pub(crate) async fn run<R, F>(target: &str, config: &Config, resolver: &R, sockets: &F) -> PingResult<ProbeOutcome>
where
    R: Resolve + ?Sized,
    F: SocketFactory + ?Sized,
{
    let Some(ip) = resolver.resolve(target).await else {
        tracing::debug!("{target}: unresolvable");
        return Ok(ProbeOutcome::Unresolvable(target.to_owned()));
    };

    let socket = sockets.open().map_err(PingError::from_open_error)?;

    let request = codec::encode(config.identifier);
    let addr: socket2::SockAddr = SocketAddr::new(IpAddr::V4(ip), 0).into();
    if let Err(e) = socket.send_to(&request, &addr) {
        tracing::warn!("{target}: could not send echo request to {ip}: {e}");
        return Ok(ProbeOutcome::Unreachable(target.to_owned()));
    }
    tracing::trace!("{target}: echo request sent to {ip}");
    let start = Instant::now();

    let mut buf = [0u8; RECV_BUFFER_SIZE];
    loop {
        match socket.recv_from(&mut buf) {
            Ok((n_bytes, source)) => {
                if is_echo_reply_for(&buf[..n_bytes], source, ip, config.identifier) {
                    tracing::debug!("{target}: reachable after {:?}", start.elapsed());
                    return Ok(ProbeOutcome::Reachable(target.to_owned()));
                }
                if start.elapsed() > config.timeout {
                    break;
                }
                // More datagrams may be queued; look again without sleeping.
                tokio::task::yield_now().await;
                continue;
            }
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted) => {}
            Err(e) => {
                tracing::warn!("{target}: receive failed: {e}");
                return Ok(ProbeOutcome::Unreachable(target.to_owned()));
            }
        }
        if start.elapsed() > config.timeout {
            break;
        }
        tokio::time::sleep(config.poll_interval).await;
    }

    tracing::debug!("{target}: no reply within {:?}", config.timeout);
    Ok(ProbeOutcome::Unreachable(target.to_owned()))
}

fn is_echo_reply_for(datagram: &[u8], source: Ipv4Addr, destination: Ipv4Addr, identifier: ProbeIdentifier) -> bool {
    match codec::decode(datagram) {
        Ok(header) => {
            tracing::trace!("received {header:?} from {source}");
            header.is_echo_reply() && header.identifier == identifier && source == destination
        }
        Err(e) => {
            tracing::trace!("ignoring datagram from {source}: {e}");
            false
        }
    }
}
