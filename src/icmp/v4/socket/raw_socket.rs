use super::{SocketFactory, TSocket};
use socket2::{Domain, Protocol, Type};
use std::io;
use std::net::Ipv4Addr;

/// Non-blocking raw ICMPv4 socket. Closed on drop.
pub struct RawSocket {
    socket: socket2::Socket,
}

impl RawSocket {
    pub fn new() -> Result<Self, io::Error> {
        tracing::trace!("creating RawSocket");
        let socket = socket2::Socket::new(Domain::IPV4, Type::RAW, Some(Protocol::ICMPV4))?;
        socket.set_nonblocking(true)?;
        Ok(RawSocket { socket })
    }
}

impl TSocket for RawSocket {
    fn send_to(&self, buf: &[u8], addr: &socket2::SockAddr) -> io::Result<usize> {
        self.socket.send_to(buf, addr)
    }

    fn recv_from(&self, buf: &mut [u8]) -> io::Result<(usize, Ipv4Addr)> {
        // Socket2 gives a safety guaranty which allows us to do an unsafe cast from `&mut [u8]`
        // to `&mut [std::mem::MaybeUninit<u8>]`: it never writes uninitialised bytes into the buffer.
        // https://docs.rs/socket2/0.4.7/socket2/struct.Socket.html#method.recv
        //
        // On a RAW socket we get the whole IP packet, header included.
        let (n_bytes, socket_addr) = self.socket.recv_from(unsafe {
            &mut *(std::ptr::addr_of_mut!(*buf) as *mut [std::mem::MaybeUninit<u8>])
        })?;
        let source = socket_addr
            .as_socket_ipv4()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "received datagram from non-IPv4 address"))?;
        Ok((n_bytes, *source.ip()))
    }
}

/// Opens one `RawSocket` per probe.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawSocketFactory;

impl SocketFactory for RawSocketFactory {
    type Socket = RawSocket;

    fn open(&self) -> io::Result<RawSocket> {
        RawSocket::new()
    }
}
