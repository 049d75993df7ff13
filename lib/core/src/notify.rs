// User-visible failure notifications
use crate::Error;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::warn;

/// Receives failures that end a navigation or expansion attempt.
pub trait Notifier: Send + Sync {
    fn notify(&self, error: &Error);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub url: Option<String>,
}

impl From<&Error> for Notification {
    fn from(error: &Error) -> Self {
        Self {
            message: error.to_string(),
            url: error.url().map(str::to_string),
        }
    }
}

/// Queue of notifications waiting to be shown.
#[derive(Debug, Default)]
pub struct Notifications {
    pending: Mutex<Vec<Notification>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything queued so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.pending.lock())
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.pending.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

impl Notifier for Notifications {
    fn notify(&self, error: &Error) {
        warn!("{}", error);
        self.pending.lock().push(Notification::from(error));
    }
}
