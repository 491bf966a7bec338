use super::ProbeIdentifier;
use crate::{PingError, PingResult};
use pnet_packet::icmp::echo_reply::EchoReplyPacket;
use pnet_packet::icmp::IcmpTypes;
use pnet_packet::ipv4::Ipv4Packet;
use std::time::{SystemTime, UNIX_EPOCH};

pub const ICMP_HEADER_SIZE: usize = 8;
pub const PAYLOAD_SIZE: usize = 8;
pub const ECHO_REQUEST_SIZE: usize = ICMP_HEADER_SIZE + PAYLOAD_SIZE;

/// Raw sockets hand us the whole IP datagram; options are not parsed.
pub const IPV4_HEADER_SIZE: usize = 20;

const ECHO_SEQUENCE_NUMBER: u16 = 1;

/// The five fields of an ICMP echo header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IcmpHeader {
    pub icmp_type: u8,
    pub code: u8,
    pub checksum: u16,
    pub identifier: ProbeIdentifier,
    pub sequence: u16,
}

impl IcmpHeader {
    pub fn is_echo_reply(&self) -> bool {
        self.icmp_type == IcmpTypes::EchoReply.0
    }
}

/// Internet checksum over 16-bit little-endian words.
///
/// An odd trailing byte is added as a word with a zero high byte. The sum is folded until no carry
/// remains and then complemented. The result is in the same little-endian word order as the input,
/// so its little-endian bytes are the bytes that go on the wire.
pub fn checksum(data: &[u8]) -> u16 {
    let mut sum: u64 = 0;
    let mut words = data.chunks_exact(2);
    for word in &mut words {
        sum += u64::from(u16::from_le_bytes([word[0], word[1]]));
    }
    if let [last] = words.remainder() {
        sum += u64::from(*last);
    }
    while sum >> 16 != 0 {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    #[allow(clippy::cast_possible_truncation)]
    let folded = sum as u16;
    !folded
}

/// Builds an echo request carrying `identifier` and a timestamp payload.
pub fn encode(identifier: ProbeIdentifier) -> Vec<u8> {
    encode_with_payload(identifier, timestamp_payload())
}

pub(crate) fn encode_with_payload(identifier: ProbeIdentifier, payload: [u8; PAYLOAD_SIZE]) -> Vec<u8> {
    let mut packet = [0u8; ECHO_REQUEST_SIZE];
    packet[0] = IcmpTypes::EchoRequest.0;
    packet[1] = 0;
    // packet[2..4] stays zero while summing.
    packet[4..6].copy_from_slice(&u16::from(identifier).to_be_bytes());
    packet[6..8].copy_from_slice(&ECHO_SEQUENCE_NUMBER.to_be_bytes());
    packet[ICMP_HEADER_SIZE..].copy_from_slice(&payload);

    let sum = checksum(&packet);
    let network_order = u16::from_be_bytes(sum.to_le_bytes());
    packet[2..4].copy_from_slice(&network_order.to_be_bytes());
    packet.to_vec()
}

/// Reads the ICMP header that follows a 20 byte IPv4 header.
pub fn decode(datagram: &[u8]) -> PingResult<IcmpHeader> {
    if datagram.len() < IPV4_HEADER_SIZE + ICMP_HEADER_SIZE {
        return Err(PingError::MalformedPacket(datagram.len()));
    }
    let ipv4_packet = Ipv4Packet::new(datagram).ok_or(PingError::MalformedPacket(datagram.len()))?;
    if usize::from(ipv4_packet.get_header_length()) * 4 != IPV4_HEADER_SIZE {
        return Err(PingError::MalformedPacket(datagram.len()));
    }

    let icmp_bytes = &datagram[IPV4_HEADER_SIZE..IPV4_HEADER_SIZE + ICMP_HEADER_SIZE];
    let echo = EchoReplyPacket::new(icmp_bytes).ok_or(PingError::MalformedPacket(datagram.len()))?;
    Ok(IcmpHeader {
        icmp_type: echo.get_icmp_type().0,
        code: echo.get_icmp_code().0,
        checksum: echo.get_checksum(),
        identifier: echo.get_identifier().into(),
        sequence: echo.get_sequence_number(),
    })
}

fn timestamp_payload() -> [u8; PAYLOAD_SIZE] {
    let micros = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|since_epoch| u64::try_from(since_epoch.as_micros()).unwrap_or(u64::MAX))
        .unwrap_or_default();
    micros.to_be_bytes()
}
