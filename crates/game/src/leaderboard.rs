//! Leaderboard gate and ranking view

use athlete_core::LeaderboardEntry;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{GameError, Result};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// `local@domain.tld` with no whitespace
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check an email entered at the leaderboard gate; returns it trimmed
pub fn check_email(email: &str) -> Result<&str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(GameError::EmailRequired);
    }
    if !validate_email(email) {
        return Err(GameError::InvalidEmail(email.to_string()));
    }
    Ok(email)
}

/// Keeps the leaderboard hidden until an email has been registered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaderboardGate {
    email: Option<String>,
}

impl LeaderboardGate {
    pub fn is_unlocked(&self) -> bool {
        self.email.is_some()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn unlock(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    pub fn ensure_unlocked(&self) -> Result<()> {
        if self.is_unlocked() {
            Ok(())
        } else {
            Err(GameError::LeaderboardLocked)
        }
    }
}

/// One ranking row with its badges
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub entry: LeaderboardEntry,
    pub level: i64,
    /// Top 3
    pub podium: bool,
    /// Ranked above the row before it while inside the top 10
    pub new_in_top10: bool,
}

/// Annotate a ranking in display order
pub fn standings(entries: &[LeaderboardEntry]) -> Vec<Standing> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let prev_rank = i.checked_sub(1).map(|p| entries[p].rank);
            Standing {
                level: entry.level(),
                podium: entry.is_podium(),
                new_in_top10: entry.rank <= 10 && prev_rank.is_some_and(|prev| entry.rank < prev),
                entry: entry.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: u32, name: &str, score: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            name: name.to_string(),
            score,
            delta: None,
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("player@example.com"));
        assert!(validate_email("a.b+c@sub.domain.io"));

        assert!(!validate_email(""));
        assert!(!validate_email("player"));
        assert!(!validate_email("player@example"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("player@@example.com"));
        assert!(!validate_email("play er@example.com"));
        assert!(!validate_email("player@example.com "));
    }

    #[test]
    fn test_check_email() {
        assert!(matches!(check_email("   "), Err(GameError::EmailRequired)));
        assert!(matches!(
            check_email("nope"),
            Err(GameError::InvalidEmail(e)) if e == "nope"
        ));
        assert_eq!(check_email(" player@example.com ").unwrap(), "player@example.com");
    }

    #[test]
    fn test_gate() {
        let mut gate = LeaderboardGate::default();
        assert!(matches!(gate.ensure_unlocked(), Err(GameError::LeaderboardLocked)));

        gate.unlock("player@example.com");
        assert!(gate.ensure_unlocked().is_ok());
        assert_eq!(gate.email(), Some("player@example.com"));
    }

    #[test]
    fn test_standings_badges() {
        let rows = standings(&[
            entry(1, "Mia", 94),
            entry(2, "Leo", 88),
            entry(4, "Ana", 71),
            entry(3, "Tom", 75),
            entry(12, "Kai", 40),
        ]);

        assert!(rows[0].podium);
        assert!(!rows[0].new_in_top10);
        assert_eq!(rows[0].level, 14);
        assert!(!rows[2].podium);
        assert!(rows[3].new_in_top10);
        assert!(!rows[4].new_in_top10);
        assert_eq!(rows[4].level, 9);
    }
}
