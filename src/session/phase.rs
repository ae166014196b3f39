//! This module defines the top-level phases of a terminal session.

/// The phase a session is in.
///
/// Phases only ever move forward: `Boot` → `Login` → `Terminal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Phase {
    /// The scripted boot sequence is being printed.
    #[default]
    Boot,
    /// The login banner is being appended.
    Login,
    /// The interactive prompt is live.
    Terminal,
}

impl Phase {
    /// Returns the phase that follows this one, or `None` for `Terminal`.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Boot => Some(Phase::Login),
            Phase::Login => Some(Phase::Terminal),
            Phase::Terminal => None,
        }
    }

    /// Whether the prompt accepts input in this phase.
    pub fn accepts_input(self) -> bool {
        matches!(self, Phase::Terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_only_advance() {
        assert_eq!(Phase::default(), Phase::Boot);
        assert_eq!(Phase::Boot.next(), Some(Phase::Login));
        assert_eq!(Phase::Login.next(), Some(Phase::Terminal));
        assert_eq!(Phase::Terminal.next(), None);
        assert!(Phase::Boot < Phase::Login && Phase::Login < Phase::Terminal);
    }

    #[test]
    fn only_terminal_accepts_input() {
        assert!(!Phase::Boot.accepts_input());
        assert!(!Phase::Login.accepts_input());
        assert!(Phase::Terminal.accepts_input());
    }
}
