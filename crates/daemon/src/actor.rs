// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The coordinator's serialized execution context.
//!
//! A single task owns the [`Coordinator`] state and drains one mailbox.
//! Client calls and worker termination notices all arrive as messages, so
//! each is applied to completion before the next one is looked at.

use jobq_core::{
    Coordinator, CoreError, Dispatch, Effect, Job, JobId, MonitorRef, Payload, Statistics,
};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, error, info};

use crate::monitor::MonitorTable;
use crate::worker::WorkerRef;

pub(crate) enum Message {
    Submit {
        payload: Payload,
        duration: u64,
        reply: oneshot::Sender<Result<JobId, CoreError>>,
    },
    RequestWork {
        worker: WorkerRef,
        reply: oneshot::Sender<Dispatch>,
    },
    ReportDone {
        id: JobId,
    },
    QueueSnapshot {
        reply: oneshot::Sender<Vec<Job>>,
    },
    ProgressSnapshot {
        reply: oneshot::Sender<Vec<Job>>,
    },
    DoneSnapshot {
        reply: oneshot::Sender<Vec<Job>>,
    },
    Statistics {
        reply: oneshot::Sender<Statistics>,
    },
    WorkerDown {
        monitor: MonitorRef,
    },
    Shutdown,
}

enum ActorAction {
    Continue,
    /// Stop accepting messages, then drain what is already queued
    Drain,
}

pub(crate) struct CoordinatorActor {
    state: Coordinator,
    monitors: MonitorTable,
    mailbox: mpsc::WeakSender<Message>,
}

impl CoordinatorActor {
    pub(crate) fn new(state: Coordinator, mailbox: mpsc::WeakSender<Message>) -> Self {
        Self {
            state,
            monitors: MonitorTable::default(),
            mailbox,
        }
    }

    /// Process messages until every handle is gone or shutdown is requested
    pub(crate) async fn run(
        mut self,
        mut receiver: mpsc::Receiver<Message>,
        stopped: watch::Sender<bool>,
    ) {
        info!(next_id = self.state.next_id(), "coordinator running");
        while let Some(message) = receiver.recv().await {
            match self.receive(message) {
                ActorAction::Continue => {}
                ActorAction::Drain => receiver.close(),
            }
        }

        let outstanding = self.monitors.len();
        self.monitors.release_all();
        info!(
            queued = self.state.queue().len(),
            in_progress = self.state.ledger().len(),
            done = self.state.done().len(),
            released_monitors = outstanding,
            "coordinator stopped"
        );
        let _ = stopped.send(true);
    }

    fn receive(&mut self, message: Message) -> ActorAction {
        match message {
            Message::Submit {
                payload,
                duration,
                reply,
            } => {
                let _ = reply.send(self.state.submit(payload, duration));
            }
            Message::RequestWork { worker, reply } => self.handle_request_work(worker, reply),
            Message::ReportDone { id } => {
                let effects = self.state.report_done(id);
                self.apply(effects, None);
            }
            Message::QueueSnapshot { reply } => {
                let _ = reply.send(self.state.queue_snapshot());
            }
            Message::ProgressSnapshot { reply } => {
                let _ = reply.send(self.state.progress_snapshot());
            }
            Message::DoneSnapshot { reply } => {
                let _ = reply.send(self.state.done_snapshot());
            }
            Message::Statistics { reply } => {
                let _ = reply.send(self.state.statistics());
            }
            Message::WorkerDown { monitor } => {
                let effects = self.state.worker_down(monitor);
                self.apply(effects, None);
            }
            Message::Shutdown => {
                info!("shutdown requested");
                return ActorAction::Drain;
            }
        }
        ActorAction::Continue
    }

    fn handle_request_work(&mut self, worker: WorkerRef, reply: oneshot::Sender<Dispatch>) {
        let (dispatch, effects) = self.state.request_work(worker.id());
        let monitor = effects.iter().find_map(|effect| match effect {
            Effect::Monitor { monitor, .. } => Some(*monitor),
            Effect::Demonitor { .. } => None,
        });
        self.apply(effects, Some(&worker));

        if let Err(undelivered) = reply.send(dispatch) {
            // The requester went away before it could see the job. Treat it
            // like a worker that died holding it.
            if let (Some(monitor), Some(job)) = (monitor, undelivered.into_job()) {
                debug!(job_id = %job.id, worker = %worker.id(), "dispatch undelivered");
                let effects = self.state.worker_down(monitor);
                self.apply(effects, None);
            }
        }
    }

    fn apply(&mut self, effects: Vec<Effect>, requester: Option<&WorkerRef>) {
        for effect in effects {
            match effect {
                Effect::Monitor {
                    monitor,
                    worker,
                    job,
                } => match requester.filter(|r| r.id() == worker) {
                    Some(identity) => {
                        self.monitors.watch(monitor, identity.clone(), self.mailbox.clone());
                    }
                    None => {
                        error!(
                            monitor = %monitor,
                            worker = %worker,
                            job_id = %job,
                            "monitor requested for a worker that did not ask for work"
                        );
                    }
                },
                Effect::Demonitor { monitor } => {
                    if !self.monitors.release(monitor) {
                        debug!(monitor = %monitor, "monitor already released");
                    }
                }
            }
        }
    }
}
