// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Liveness monitors
//!
//! One spawned task per monitor. It waits for its worker to terminate and
//! posts a `WorkerDown` into the coordinator mailbox. Releasing a monitor
//! aborts its task; a notification that was already posted is left for the
//! state machine to discard.

use std::collections::HashMap;

use jobq_core::MonitorRef;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::actor::Message;
use crate::worker::WorkerRef;

#[derive(Debug, Default)]
pub(crate) struct MonitorTable {
    tasks: HashMap<MonitorRef, JoinHandle<()>>,
}

impl MonitorTable {
    /// Start watching `worker` under `monitor`.
    ///
    /// The task only holds a weak sender so outstanding monitors do not keep
    /// the coordinator alive.
    pub(crate) fn watch(
        &mut self,
        monitor: MonitorRef,
        worker: WorkerRef,
        mailbox: mpsc::WeakSender<Message>,
    ) {
        let worker_id = worker.id();
        let task = tokio::spawn(async move {
            worker.terminated().await;
            debug!(monitor = %monitor, worker = %worker_id, "monitored worker terminated");
            if let Some(sender) = mailbox.upgrade() {
                let _ = sender.send(Message::WorkerDown { monitor }).await;
            }
        });
        self.tasks.insert(monitor, task);
    }

    /// Stop a monitor. Returns false if it was not active.
    pub(crate) fn release(&mut self, monitor: MonitorRef) -> bool {
        match self.tasks.remove(&monitor) {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }

    pub(crate) fn release_all(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for MonitorTable {
    fn drop(&mut self) {
        self.release_all();
    }
}
