type IdentifierInnerType = u16;

/// ICMP echo identifier shared by every request of one run.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct ProbeIdentifier(IdentifierInnerType);

impl ProbeIdentifier {
    /// Derives the identifier from the id of the current process, masked to 16 bits.
    pub fn from_process_id() -> Self {
        Self::from_pid(std::process::id())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_pid(pid: u32) -> Self {
        ProbeIdentifier((pid & 0xFFFF) as IdentifierInnerType)
    }
}

impl From<ProbeIdentifier> for IdentifierInnerType {
    fn from(value: ProbeIdentifier) -> Self {
        value.0
    }
}

impl From<IdentifierInnerType> for ProbeIdentifier {
    fn from(value: IdentifierInnerType) -> Self {
        ProbeIdentifier(value)
    }
}

impl std::fmt::Display for ProbeIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}
