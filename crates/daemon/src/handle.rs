// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client-facing handle to a running coordinator

use jobq_core::{Coordinator, Dispatch, Job, JobId, Payload, StartOptions, Statistics};
use tokio::sync::{mpsc, oneshot, watch};

use crate::actor::{CoordinatorActor, Message};
use crate::error::CoordinatorError;
use crate::worker::Worker;

pub const DEFAULT_MAILBOX_CAPACITY: usize = 64;

/// Cheap to clone. The coordinator stops once every handle is dropped or
/// [`CoordinatorHandle::shutdown`] is called.
#[derive(Clone)]
pub struct CoordinatorHandle {
    sender: mpsc::Sender<Message>,
    stopped: watch::Receiver<bool>,
}

impl CoordinatorHandle {
    /// Start a coordinator on the current tokio runtime
    pub fn start(options: StartOptions) -> Result<Self, CoordinatorError> {
        Self::start_with_capacity(options, DEFAULT_MAILBOX_CAPACITY)
    }

    pub fn start_with_capacity(
        options: StartOptions,
        mailbox_capacity: usize,
    ) -> Result<Self, CoordinatorError> {
        let state = Coordinator::start(options)?;
        let (sender, receiver) = mpsc::channel(mailbox_capacity.max(1));
        let (stopped_tx, stopped) = watch::channel(false);

        let actor = CoordinatorActor::new(state, sender.downgrade());
        tokio::spawn(actor.run(receiver, stopped_tx));

        Ok(Self { sender, stopped })
    }

    pub async fn submit(
        &self,
        payload: impl Into<Payload>,
        duration: u64,
    ) -> Result<JobId, CoordinatorError> {
        let payload = payload.into();
        let id = self
            .call(|reply| Message::Submit {
                payload,
                duration,
                reply,
            })
            .await??;
        Ok(id)
    }

    /// Ask for the next job on behalf of `worker`.
    ///
    /// The coordinator watches `worker` until the job is reported done; if
    /// the worker terminates first, the job goes back to the queue head.
    pub async fn request_work(&self, worker: &Worker) -> Result<Dispatch, CoordinatorError> {
        let identity = worker.identity();
        self.call(|reply| Message::RequestWork {
            worker: identity,
            reply,
        })
        .await
    }

    /// Mark a job done. Does not wait for the coordinator to apply it, but
    /// is ordered with every other call made through this coordinator.
    pub async fn report_done(&self, id: JobId) -> Result<(), CoordinatorError> {
        self.sender.send(Message::ReportDone { id }).await?;
        Ok(())
    }

    pub async fn queue_snapshot(&self) -> Result<Vec<Job>, CoordinatorError> {
        self.call(|reply| Message::QueueSnapshot { reply }).await
    }

    pub async fn progress_snapshot(&self) -> Result<Vec<Job>, CoordinatorError> {
        self.call(|reply| Message::ProgressSnapshot { reply }).await
    }

    pub async fn done_snapshot(&self) -> Result<Vec<Job>, CoordinatorError> {
        self.call(|reply| Message::DoneSnapshot { reply }).await
    }

    /// All three snapshots, taken without any operation in between
    pub async fn statistics(&self) -> Result<Statistics, CoordinatorError> {
        self.call(|reply| Message::Statistics { reply }).await
    }

    /// Ask the coordinator to stop once already-queued messages are handled
    pub async fn shutdown(&self) -> Result<(), CoordinatorError> {
        self.sender.send(Message::Shutdown).await?;
        Ok(())
    }

    pub async fn wait_for_stop(&self) {
        let mut stopped = self.stopped.clone();
        // An error means the actor task is gone, which is also a stop.
        let _ = stopped.wait_for(|stopped| *stopped).await;
    }

    pub fn is_stopped(&self) -> bool {
        *self.stopped.borrow()
    }

    async fn call<T>(
        &self,
        message: impl FnOnce(oneshot::Sender<T>) -> Message,
    ) -> Result<T, CoordinatorError> {
        let (reply, response) = oneshot::channel();
        self.sender.send(message(reply)).await?;
        Ok(response.await?)
    }
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
