//! Submission flow of the registration form.
//!
//! The [`Portal`] holds no timers of its own. The host calls
//! [`Portal::advance`] with the current time (typically from the same
//! animation frame that drives the rain) and reacts to the returned
//! [`PortalEvent`]s.

use crate::{
    auth::{authenticate, AuthOutcome},
    registration::TeamRegistration,
};

/// Delay between submitting and checking the credentials, in milliseconds.
pub const PROCESSING_DELAY_MS: f64 = 600.0;

/// How long a granted result stays up before the form accepts input again.
pub const GRANTED_DISPLAY_MS: f64 = 5000.0;

/// How long a denied result stays up before it is cleared.
pub const DENIED_DISPLAY_MS: f64 = 2500.0;

/// Length of the full-screen glitch after access is granted.
pub const GLITCH_MS: f64 = 600.0;

/// Something the host has to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalEvent {
    /// Access was granted. The registration should be stored.
    Granted(TeamRegistration),
    /// Access was denied.
    Denied,
    /// The result display ended and the form accepts input again.
    Ready,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    Processing {
        since: f64,
        registration: TeamRegistration,
    },
    Displaying {
        until: f64,
    },
}

/// State of the registration form between submission and the next input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portal {
    /// Current phase.
    phase: Phase,
    /// Result currently on screen.
    outcome: Option<AuthOutcome>,
    /// Whether the rain should run intensified. Never turned off again.
    intensify: bool,
    /// End of the glitch effect.
    glitch_until: Option<f64>,
}

impl Portal {
    /// Constructs a new [`Portal`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Submits a registration at time `now`.
    ///
    /// Returns `false` and ignores the registration while a previous
    /// submission is still being processed or displayed.
    pub fn submit(&mut self, now: f64, registration: TeamRegistration) -> bool {
        if self.is_processing() {
            return false;
        }
        self.phase = Phase::Processing {
            since: now,
            registration,
        };
        true
    }

    /// Moves the flow forward to time `now`.
    ///
    /// At most one event is returned per call; call it in a loop to catch up
    /// after a long pause.
    pub fn advance(&mut self, now: f64) -> Option<PortalEvent> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Processing { since, registration } => {
                if now - since < PROCESSING_DELAY_MS {
                    return None;
                }
                let registration = registration.clone();
                let outcome = authenticate(&registration.team_id, &registration.operatives);
                self.outcome = Some(outcome);

                let display = if outcome.is_granted() {
                    self.intensify = true;
                    self.glitch_until = Some(now + GLITCH_MS);
                    GRANTED_DISPLAY_MS
                } else {
                    DENIED_DISPLAY_MS
                };
                self.phase = Phase::Displaying {
                    until: now + display,
                };

                Some(match outcome {
                    AuthOutcome::Granted => PortalEvent::Granted(registration),
                    AuthOutcome::Denied => PortalEvent::Denied,
                })
            }
            Phase::Displaying { until } => {
                if now < *until {
                    return None;
                }
                // A granted banner stays up; a denied one is cleared.
                if self.outcome == Some(AuthOutcome::Denied) {
                    self.outcome = None;
                }
                self.phase = Phase::Idle;
                Some(PortalEvent::Ready)
            }
        }
    }

    /// Returns whether a submission is in flight or its result is showing.
    pub fn is_processing(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Returns the result on screen, if any.
    pub fn outcome(&self) -> Option<AuthOutcome> {
        self.outcome
    }

    /// Returns whether the rain should run intensified.
    pub fn intensify(&self) -> bool {
        self.intensify
    }

    /// Returns whether the glitch effect is showing at time `now`.
    pub fn is_glitching(&self, now: f64) -> bool {
        self.glitch_until.is_some_and(|until| now < until)
    }

    /// Label of the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.is_processing() {
            "◈ PROCESSING..."
        } else {
            "◈ INITIATE_AUTH"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::OperativeField;

    fn registration(team_id: &str) -> TeamRegistration {
        let mut registration = TeamRegistration::new(team_id);
        registration.update_operative(0, OperativeField::Nickname, "neo");
        registration
    }

    #[test]
    fn test_granted_flow() {
        let mut portal = Portal::new();
        assert!(portal.submit(1000.0, registration("team_alpha")));
        assert_eq!(portal.submit_label(), "◈ PROCESSING...");
        assert_eq!(portal.advance(1599.0), None);
        assert!(!portal.intensify());

        assert_eq!(
            portal.advance(1600.0),
            Some(PortalEvent::Granted(registration("team_alpha")))
        );
        assert_eq!(portal.outcome(), Some(AuthOutcome::Granted));
        assert!(portal.intensify());
        assert!(portal.is_glitching(1600.0));
        assert!(portal.is_glitching(2199.0));
        assert!(!portal.is_glitching(2200.0));

        assert_eq!(portal.advance(6599.0), None);
        assert_eq!(portal.advance(6600.0), Some(PortalEvent::Ready));
        assert!(!portal.is_processing());
        assert_eq!(portal.outcome(), Some(AuthOutcome::Granted));
        assert!(portal.intensify());
    }

    #[test]
    fn test_denied_flow() {
        let mut portal = Portal::new();
        portal.submit(0.0, registration("TEAM_BETA"));

        assert_eq!(portal.advance(600.0), Some(PortalEvent::Denied));
        assert_eq!(portal.outcome(), Some(AuthOutcome::Denied));
        assert!(!portal.intensify());
        assert!(!portal.is_glitching(600.0));

        assert_eq!(portal.advance(3099.0), None);
        assert_eq!(portal.advance(3100.0), Some(PortalEvent::Ready));
        assert_eq!(portal.outcome(), None);
        assert_eq!(portal.submit_label(), "◈ INITIATE_AUTH");
    }

    #[test]
    fn test_submit_ignored_while_busy() {
        let mut portal = Portal::new();
        assert!(portal.submit(0.0, registration("TEAM_BETA")));
        assert!(!portal.submit(100.0, registration("TEAM_ALPHA")));

        portal.advance(600.0);
        assert!(!portal.submit(700.0, registration("TEAM_ALPHA")));

        portal.advance(3100.0);
        assert!(portal.submit(3200.0, registration("TEAM_ALPHA")));
    }

    #[test]
    fn test_catch_up_after_pause() {
        let mut portal = Portal::new();
        portal.submit(0.0, registration("TEAM_BETA"));

        let events: Vec<_> = std::iter::from_fn(|| portal.advance(10_000.0)).collect();
        assert_eq!(events, vec![PortalEvent::Denied]);
        let events: Vec<_> = std::iter::from_fn(|| portal.advance(20_000.0)).collect();
        assert_eq!(events, vec![PortalEvent::Ready]);
    }
}
