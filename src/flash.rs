use std::{collections::VecDeque, sync::Arc};
use tokio::sync::Mutex;

/// Messages older than the newest few are dropped when nobody renders them.
pub const MAX_PENDING: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    pub fn css_class(self) -> &'static str {
        match self {
            FlashKind::Success => "ok",
            FlashKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

/// One-shot status messages carried across a redirect.
#[derive(Debug, Clone, Default)]
pub struct Flashes {
    pending: Arc<Mutex<VecDeque<Flash>>>,
}

impl Flashes {
    pub async fn success(&self, message: impl Into<String>) {
        self.push(FlashKind::Success, message.into()).await;
    }

    pub async fn error(&self, message: impl Into<String>) {
        self.push(FlashKind::Error, message.into()).await;
    }

    /// Returns queued messages and clears the queue.
    pub async fn take(&self) -> Vec<Flash> {
        self.pending.lock().await.drain(..).collect()
    }

    async fn push(&self, kind: FlashKind, message: String) {
        let mut pending = self.pending.lock().await;
        if pending.len() == MAX_PENDING {
            pending.pop_front();
        }
        pending.push_back(Flash { kind, message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn messages_are_shown_once() {
        let flashes = Flashes::default();
        flashes.success("saved").await;
        flashes.error("oops").await;

        let shown = flashes.take().await;
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].kind, FlashKind::Success);
        assert_eq!(shown[1].message, "oops");
        assert!(flashes.take().await.is_empty());
    }

    #[tokio::test]
    async fn unread_messages_are_capped_to_the_newest() {
        let flashes = Flashes::default();
        for n in 0..500 {
            flashes.error(format!("rejected {n}")).await;
        }

        let shown = flashes.take().await;
        assert_eq!(shown.len(), MAX_PENDING);
        assert_eq!(shown[0].message, "rejected 495");
        assert_eq!(shown[MAX_PENDING - 1].message, "rejected 499");
    }
}
