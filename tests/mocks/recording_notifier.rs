use async_trait::async_trait;
use contact_book::error::{NotifyError, NotifyResult};
use contact_book::form::{Notification, Notifier};
use std::io;
use std::sync::{Arc, Mutex};

/// Notifier that acknowledges immediately and remembers what it was shown.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    shown: Arc<Mutex<Vec<Notification>>>,
    broken: bool,
}

#[allow(dead_code)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose output is gone: nothing is shown or acknowledged.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.shown.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.shown.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: &Notification) -> NotifyResult<()> {
        if self.broken {
            let closed = io::Error::new(io::ErrorKind::BrokenPipe, "output closed");
            return Err(NotifyError::Display(closed));
        }
        self.shown.lock().unwrap().push(notification.clone());
        Ok(())
    }
}
