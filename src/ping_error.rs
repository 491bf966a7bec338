use std::io;

pub type PingResult<T> = std::result::Result<T, PingError>;

#[derive(Debug, thiserror::Error)]
pub enum PingError {
    /// Raw ICMP sockets could not be opened. No probe in the run can succeed.
    #[error("cannot open raw ICMP socket: must run with elevated network capability (root or CAP_NET_RAW)")]
    InsufficientPrivilege(#[source] io::Error),

    #[error("could not open ICMP socket: {0}")]
    Socket(#[source] io::Error),

    #[error("malformed ICMP packet ({0} bytes)")]
    MalformedPacket(usize),
}

impl PingError {
    pub(crate) fn from_open_error(error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::PermissionDenied {
            PingError::InsufficientPrivilege(error)
        } else {
            PingError::Socket(error)
        }
    }

    pub fn is_insufficient_privilege(&self) -> bool {
        matches!(self, PingError::InsufficientPrivilege(_))
    }
}
