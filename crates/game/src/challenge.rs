//! Weekly challenge: one decision per challenge, before the deadline

use athlete_core::{Challenge, ChallengeStatus, Timestamp};

use crate::error::{GameError, Result};

/// A loaded challenge and the decision submitted for it, if any
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeState {
    challenge: Challenge,
    decision: Option<String>,
}

impl ChallengeState {
    pub fn new(challenge: Challenge) -> Self {
        Self {
            challenge,
            decision: None,
        }
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn decision(&self) -> Option<&str> {
        self.decision.as_deref()
    }

    pub fn is_submitted(&self) -> bool {
        self.decision.is_some()
    }

    /// Swap in a freshly loaded challenge
    ///
    /// A decision survives a reload of the same challenge.
    pub fn refresh(&mut self, challenge: Challenge) {
        if challenge.id != self.challenge.id {
            self.decision = None;
        }
        self.challenge = challenge;
    }

    /// Check that `action` can be submitted at `now`
    pub fn check_submission(&self, action: &str, now: Timestamp) -> Result<()> {
        let id = &self.challenge.id;
        if self.is_submitted() {
            return Err(GameError::ChallengeAlreadySubmitted(id.clone()));
        }
        if self.challenge.is_expired(now) {
            return Err(GameError::ChallengeExpired(id.clone()));
        }
        if self.challenge.status != ChallengeStatus::Active {
            return Err(GameError::ChallengeInactive(id.clone()));
        }
        if action.trim().is_empty() {
            return Err(GameError::ActionRequired);
        }
        if !self.challenge.has_action(action) {
            return Err(GameError::UnknownAction(action.to_string()));
        }
        Ok(())
    }

    /// Record an acknowledged decision
    pub fn submit(&mut self, action: &str, now: Timestamp) -> Result<()> {
        self.check_submission(action, now)?;
        self.decision = Some(action.to_string());
        Ok(())
    }
}
