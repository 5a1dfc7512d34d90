// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker identities and their liveness
//!
//! A [`Worker`] is alive for exactly as long as the value exists. Dropping
//! it, whether by returning, panicking or having its task aborted, is the
//! termination signal every monitor on it observes. The coordinator does
//! not distinguish between exit reasons.

use jobq_core::WorkerId;
use tokio::sync::watch;

/// A live worker. Keep it for as long as the worker is doing work.
#[derive(Debug)]
pub struct Worker {
    id: WorkerId,
    alive: watch::Sender<()>,
}

impl Worker {
    pub fn new() -> Self {
        let (alive, _) = watch::channel(());
        Self {
            id: WorkerId::new(),
            alive,
        }
    }

    pub fn id(&self) -> WorkerId {
        self.id
    }

    /// A reference to this worker that can observe its termination
    pub fn identity(&self) -> WorkerRef {
        WorkerRef {
            id: self.id,
            liveness: self.alive.subscribe(),
        }
    }

    /// Terminate the worker. Equivalent to dropping it.
    pub fn terminate(self) {
        tracing::debug!(worker = %self.id, "worker terminated");
    }
}

impl Default for Worker {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer side of a [`Worker`]
#[derive(Debug, Clone)]
pub struct WorkerRef {
    id: WorkerId,
    liveness: watch::Receiver<()>,
}

impl WorkerRef {
    pub fn id(&self) -> WorkerId {
        self.id
    }

    pub fn is_alive(&self) -> bool {
        self.liveness.has_changed().is_ok()
    }

    /// Resolves once the worker has terminated. Resolves immediately if it
    /// already has.
    pub async fn terminated(mut self) {
        // Nothing is ever sent, so this only ends when the sender is gone.
        while self.liveness.changed().await.is_ok() {}
    }
}
