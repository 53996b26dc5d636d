use std::future::Future;
use tokio::sync::watch;

use crate::domain::model::RequestId;

/// How an in-flight request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    /// A newer request started before this one finished; its result was dropped.
    Superseded { id: RequestId, latest: RequestId },
}

impl<T> Outcome<T> {
    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::Superseded { .. } => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Outcome::Superseded { .. })
    }
}

/// Issues monotonically increasing request ids. Only the latest request may
/// deliver a result; starting a new one cancels whatever is still running.
#[derive(Debug)]
pub struct SummarySession {
    latest: watch::Sender<u64>,
}

impl SummarySession {
    pub fn new() -> Self {
        let (latest, _) = watch::channel(0);
        Self { latest }
    }

    pub fn begin(&self) -> RequestId {
        let mut issued = 0;
        self.latest.send_modify(|latest| {
            *latest += 1;
            issued = *latest;
        });
        RequestId(issued)
    }

    pub fn latest(&self) -> RequestId {
        RequestId(*self.latest.borrow())
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.latest() == id
    }

    /// Accepts `value` only if `id` is still the latest request.
    pub fn finish<T>(&self, id: RequestId, value: T) -> Outcome<T> {
        if self.is_current(id) {
            Outcome::Completed(value)
        } else {
            let latest = self.latest();
            tracing::debug!("Discarding stale result for {} (latest is {})", id, latest);
            Outcome::Superseded { id, latest }
        }
    }

    async fn superseded(&self, id: RequestId) {
        let mut rx = self.latest.subscribe();
        // The sender lives as long as `self`, so this only returns once a newer id exists.
        let _ = rx.wait_for(|latest| *latest != id.0).await;
    }

    /// Drives `task` for request `id`, dropping it as soon as a newer request begins.
    pub async fn run<F, T>(&self, id: RequestId, task: F) -> Outcome<T>
    where
        F: Future<Output = T>,
    {
        tokio::select! {
            value = task => self.finish(id, value),
            _ = self.superseded(id) => {
                let latest = self.latest();
                tracing::info!("Request {} superseded by {}", id, latest);
                Outcome::Superseded { id, latest }
            }
        }
    }
}

impl Default for SummarySession {
    fn default() -> Self {
        Self::new()
    }
}
