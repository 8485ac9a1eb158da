//! Transient notifications
//!
//! Time is passed in as a [`Duration`] since an arbitrary monotonic origin
//! (page load in the browser), so a simulated clock can drive expiry.

use std::time::Duration;

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3_000);

/// Notification identifier, unique for the lifetime of a [`Notifications`] list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

/// A message on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identifier used to dismiss it.
    pub id: NotificationId,

    /// Message text.
    pub message: String,

    /// Instant at which it is removed.
    pub expires_at: Duration,
}

/// Active notifications in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifications {
    active: Vec<Notification>,
    next_id: u64,
    ttl: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Notifications::new(NOTIFICATION_TTL)
    }
}

impl Notifications {
    /// Create an empty list whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Notifications {
            active: Vec::new(),
            next_id: 0,
            ttl,
        }
    }

    /// Show a message. Duplicates are kept, each with its own deadline.
    pub fn notify(&mut self, message: impl Into<String>, now: Duration) -> NotificationId {
        let id = NotificationId(self.next_id);

        self.next_id = self.next_id.saturating_add(1);

        self.active.push(Notification {
            id,
            message: message.into(),
            expires_at: now.saturating_add(self.ttl),
        });

        id
    }

    /// Remove one notification. Returns whether it was still present.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();

        self.active.retain(|notification| notification.id != id);

        self.active.len() != before
    }

    /// Remove every notification whose deadline is at or before `now`.
    ///
    /// Returns the number removed.
    pub fn expire(&mut self, now: Duration) -> usize {
        let before = self.active.len();

        self.active
            .retain(|notification| notification.expires_at > now);

        before - self.active.len()
    }

    /// Notifications currently shown.
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    /// Most recent message, if any.
    pub fn latest(&self) -> Option<&str> {
        self.active
            .last()
            .map(|notification| notification.message.as_str())
    }

    /// Lifetime of each notification.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Check whether nothing is shown.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
