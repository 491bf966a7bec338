use std::io;
use std::net::Ipv4Addr;

pub(crate) mod raw_socket;

/// One ICMPv4 socket. `recv_from` must not block: no pending datagram is `WouldBlock`.
pub trait TSocket: Send + Sync {
    fn send_to(&self, buf: &[u8], addr: &socket2::SockAddr) -> io::Result<usize>;
    fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, Ipv4Addr)>;
}

/// Opens the socket a single probe owns for its whole lifetime.
pub trait SocketFactory: Send + Sync {
    type Socket: TSocket;

    fn open(&self) -> io::Result<Self::Socket>;
}
