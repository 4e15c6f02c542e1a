//! Toast-style notifications with a fixed time to live

use athlete_core::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

impl Notification {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }
}

/// Holds the live notifications, newest last
#[derive(Debug, Clone)]
pub struct Notifier {
    ttl: chrono::Duration,
    items: Vec<Notification>,
}

impl Notifier {
    pub fn new(ttl: chrono::Duration) -> Self {
        Self {
            ttl,
            items: Vec::new(),
        }
    }

    /// Raise a notification; returns its id for dismissal
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>, now: Timestamp) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: now,
            expires_at: now + self.ttl,
        };
        let id = notification.id;
        self.items.push(notification);
        id
    }

    pub fn success(&mut self, message: impl Into<String>, now: Timestamp) -> Uuid {
        self.push(NotificationKind::Success, message, now)
    }

    pub fn error(&mut self, message: impl Into<String>, now: Timestamp) -> Uuid {
        self.push(NotificationKind::Error, message, now)
    }

    pub fn info(&mut self, message: impl Into<String>, now: Timestamp) -> Uuid {
        self.push(NotificationKind::Info, message, now)
    }

    /// Remove a notification before it expires
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop expired notifications; returns how many were dropped
    pub fn expire(&mut self, now: Timestamp) -> usize {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now));
        before - self.items.len()
    }

    /// Notifications still visible at `now`
    pub fn active(&self, now: Timestamp) -> Vec<&Notification> {
        self.items.iter().filter(|n| !n.is_expired(now)).collect()
    }

    /// The notification currently on top
    pub fn latest(&self, now: Timestamp) -> Option<&Notification> {
        self.items.iter().rev().find(|n| !n.is_expired(now))
    }
}
