//! The expiration toast.

use crate::config::{EXPIRATION_ICON, EXPIRATION_MESSAGE, NOTIFICATION_DURATION_MS};

/// One on-screen notice.
///
/// `id` increases with every notice so a replacement toast re-mounts and
/// restarts its entry animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: &'static str,
    pub icon: &'static str,
    pub duration_ms: u32,
}

impl Notice {
    pub fn expiration(id: u64) -> Self {
        Self {
            id,
            message: EXPIRATION_MESSAGE,
            icon: EXPIRATION_ICON,
            duration_ms: NOTIFICATION_DURATION_MS,
        }
    }
}
