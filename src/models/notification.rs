use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// One transient feedback toast. `id` distinguishes it from earlier
/// notifications so a stale auto-dismiss timer can't remove a newer one.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}
