use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::session::machine::{reduce, Event, Session, TransitionError};

/// Holds the one quiz session. Every change goes through `dispatch`, which
/// applies `reduce` under the write lock, so transitions never interleave.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Session {
        self.inner.read().await.clone()
    }

    /// Applies `event` and returns the new session. On error the stored
    /// session is left untouched.
    pub async fn dispatch(&self, event: Event) -> Result<Session, TransitionError> {
        let mut current = self.inner.write().await;
        let event_name = event.name();

        let mut next = reduce(&current, event)?;
        next.updated_at = Utc::now();

        info!(
            "Session {}: {:?} -> {:?} (generation {})",
            event_name, current.step, next.step, next.generation
        );

        *current = next.clone();
        Ok(next)
    }
}
