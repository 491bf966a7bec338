/// What one probe found out about its target. Carries the host name as the caller gave it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProbeOutcome {
    Reachable(String),
    Unreachable(String),
    Unresolvable(String),
}

impl ProbeOutcome {
    pub fn target(&self) -> &str {
        match self {
            ProbeOutcome::Reachable(target)
            | ProbeOutcome::Unreachable(target)
            | ProbeOutcome::Unresolvable(target) => target,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeOutcome::Reachable(_))
    }
}

/// Host names of the reachable outcomes, in the order given.
pub fn reachable_targets(outcomes: &[ProbeOutcome]) -> Vec<&str> {
    outcomes.iter().filter(|outcome| outcome.is_reachable()).map(ProbeOutcome::target).collect()
}
