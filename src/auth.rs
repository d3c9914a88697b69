use std::fmt;

use crate::registration::Operative;

/// The only team identifier that is let in.
pub const VALID_TEAM_ID: &str = "TEAM_ALPHA";

/// Result of a credential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The team was let in.
    Granted,
    /// The team was turned away.
    Denied,
}

impl AuthOutcome {
    /// Returns whether access was granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, AuthOutcome::Granted)
    }

    /// Returns the banner shown for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            AuthOutcome::Granted => "ACCESS GRANTED",
            AuthOutcome::Denied => "ACCESS DENIED",
        }
    }
}

impl fmt::Display for AuthOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Checks a registration attempt.
///
/// Access is granted when the trimmed team identifier matches
/// [`VALID_TEAM_ID`] ignoring case and at least one operative has a
/// nickname.
pub fn authenticate(team_id: &str, operatives: &[Operative]) -> AuthOutcome {
    if !team_id.trim().eq_ignore_ascii_case(VALID_TEAM_ID) {
        return AuthOutcome::Denied;
    }
    if !operatives.iter().any(Operative::has_nickname) {
        return AuthOutcome::Denied;
    }
    AuthOutcome::Granted
}
