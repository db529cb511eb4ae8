//! Session lifecycle broadcast.
//!
//! Interested parties (cache layers, UI shells) register explicitly via
//! [`SessionEvents::subscribe`] instead of listening on a global event bus.

use tokio::sync::broadcast;
use tracing::debug;

/// Payload-less session notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session ended: explicit logout or an unrecoverable refresh
    /// failure. Listeners should drop cached state and return to login.
    LoggedOut,
}

const CHANNEL_CAPACITY: usize = 16;

/// Fire-and-forget broadcast bus for [`SessionEvent`]s.
#[derive(Debug, Clone)]
pub struct SessionEvents {
    tx: broadcast::Sender<SessionEvent>,
}

impl SessionEvents {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Register a listener. Each receiver sees every event emitted after
    /// this call.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    /// Emit the logout signal. Having zero subscribers is not an error.
    pub(crate) fn emit_logout(&self) {
        debug!("broadcasting session logout");
        let _ = self.tx.send(SessionEvent::LoggedOut);
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}
