//! Toast-style outcome notifications.
//!
//! Operations emit exactly one [`Notice`] per settled invocation onto an mpsc
//! channel. Whoever holds the receiver consumes each notice once, so a settled
//! flag can never be re-announced. The actual toast presentation is external;
//! [`spawn_notice_log`] is the default sink and just logs.

use tokio::sync::mpsc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A single transient user-visible message about an operation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Sending half handed to operation actors.
#[derive(Clone)]
pub struct NoticeSender {
    sender: mpsc::Sender<Notice>,
}

impl NoticeSender {
    pub async fn success(&self, message: &str) {
        // A closed sink only means nobody is presenting toasts anymore.
        let _ = self.sender.send(Notice::success(message)).await;
    }

    pub async fn error(&self, message: &str) {
        let _ = self.sender.send(Notice::error(message)).await;
    }
}

pub fn notice_channel(buffer_size: usize) -> (NoticeSender, mpsc::Receiver<Notice>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (NoticeSender { sender }, receiver)
}

/// Default notice sink: logs each notice and exits when all senders are gone.
pub fn spawn_notice_log(mut receiver: mpsc::Receiver<Notice>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(notice) = receiver.recv().await {
            match notice.level {
                NoticeLevel::Success => info!(toast = %notice.message, "notice"),
                NoticeLevel::Error => warn!(toast = %notice.message, "notice"),
            }
        }
    })
}
