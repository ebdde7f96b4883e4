// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Isolated sessions for multi-user front-ends.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use wenan_core::SessionId;

use crate::session::SessionContext;

/// Shared handle on one session. Holding the lock serializes generations.
pub type SessionHandle = Arc<Mutex<SessionContext>>;

/// Concurrent map of live sessions.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, SessionHandle>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a session under its own id, replacing any previous one.
    pub fn open(&self, context: SessionContext) -> SessionHandle {
        let id = context.id().clone();
        let handle = Arc::new(Mutex::new(context));
        self.sessions.insert(id.clone(), Arc::clone(&handle));
        tracing::debug!(session_id = %id, open = self.sessions.len(), "session opened");
        handle
    }

    pub fn get(&self, id: &SessionId) -> Option<SessionHandle> {
        self.sessions.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Drops the session and all its state. Returns whether it existed.
    pub fn close(&self, id: &SessionId) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            tracing::debug!(session_id = %id, "session closed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
