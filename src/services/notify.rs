use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::models::{Notification, NotificationKind};

/// Notifications stay up this long unless dismissed or replaced.
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

/// How user feedback reaches the visitor. The pipeline only depends on
/// this trait; hosts bridge it to whatever surface they render.
pub trait Notifier: Send + Sync {
    fn show(&self, kind: NotificationKind, message: &str);
}

/// Holds the single visible notification. A new `show` replaces the
/// current one immediately (last call wins) and schedules its removal
/// after [`AUTO_DISMISS`]; the timer only removes the notification it
/// was started for, so it never clears a newer one.
pub struct NotificationCenter {
    current: Arc<Mutex<Option<Notification>>>,
    next_id: AtomicU64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            next_id: AtomicU64::new(1),
        }
    }

    /// The currently visible notification, if any.
    pub fn current(&self) -> Option<Notification> {
        self.current.lock().unwrap().clone()
    }

    /// Manual close.
    pub fn dismiss(&self) {
        *self.current.lock().unwrap() = None;
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationCenter {
    fn show(&self, kind: NotificationKind, message: &str) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let notification = Notification {
            id,
            kind,
            message: message.to_string(),
        };
        *self.current.lock().unwrap() = Some(notification);

        let slot = Arc::clone(&self.current);
        tokio::spawn(async move {
            tokio::time::sleep(AUTO_DISMISS).await;
            let mut current = slot.lock().unwrap();
            if current.as_ref().map(|n| n.id) == Some(id) {
                *current = None;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_last_notification_wins() {
        let center = NotificationCenter::new();
        center.show(NotificationKind::Error, "first");
        center.show(NotificationKind::Success, "second");

        let current = center.current().unwrap();
        assert_eq!(current.kind, NotificationKind::Success);
        assert_eq!(current.message, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_after_delay() {
        let center = NotificationCenter::new();
        center.show(NotificationKind::Success, "done");
        assert!(center.current().is_some());

        tokio::time::sleep(AUTO_DISMISS + Duration::from_secs(1)).await;
        assert!(center.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_timer_keeps_newer_notification() {
        let center = NotificationCenter::new();
        center.show(NotificationKind::Error, "old");
        tokio::time::sleep(Duration::from_secs(3)).await;
        center.show(NotificationKind::Success, "new");

        // The first timer fires at t=5s and must not clear "new".
        tokio::time::sleep(Duration::from_secs(3)).await;
        let current = center.current().unwrap();
        assert_eq!(current.message, "new");

        // The second timer fires at t=8s.
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(center.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_dismiss() {
        let center = NotificationCenter::new();
        center.show(NotificationKind::Error, "oops");
        center.dismiss();
        assert!(center.current().is_none());
    }
}
