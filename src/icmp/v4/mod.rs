pub mod codec;
pub use codec::IcmpHeader;

mod identifier;
pub use identifier::ProbeIdentifier;

mod socket;
pub use socket::raw_socket::{RawSocket, RawSocketFactory};
pub use socket::{SocketFactory, TSocket};

#[cfg(test)]
pub(crate) use socket::tests;
