// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordinator state machine
//!
//! Owns the job queue, the assignment ledger, the done archive and the id
//! generator, and moves jobs between them. Every method is one atomic
//! transition; the caller is responsible for serializing calls and for
//! carrying out the returned [`Effect`]s.
//!
//! Each issued job id lives in exactly one of queued, assigned or done.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::archive::DoneArchive;
use crate::effect::Effect;
use crate::error::{CoreError, StartError};
use crate::id::{IdGen, JobId, MonitorRef, WorkerId};
use crate::job::{Dispatch, Job, Payload};
use crate::ledger::{Assignment, Ledger};
use crate::queue::JobQueue;
use crate::stats::Statistics;

/// Options for starting a coordinator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartOptions {
    /// First id handed to a submission. Defaults to one past the highest
    /// seed id, or 1 without a seed.
    pub initial_id: Option<JobId>,
    /// Jobs already waiting, head first
    pub seed: Vec<Job>,
}

impl StartOptions {
    pub fn with_initial_id(self, initial_id: JobId) -> Self {
        Self {
            initial_id: Some(initial_id),
            ..self
        }
    }

    pub fn with_seed(self, seed: Vec<Job>) -> Self {
        Self { seed, ..self }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Coordinator {
    ids: IdGen,
    queue: JobQueue,
    ledger: Ledger,
    done: DoneArchive,
    next_monitor: u64,
}

impl Coordinator {
    /// Empty coordinator issuing ids from 1
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(options: StartOptions) -> Result<Self, StartError> {
        let mut seen = HashSet::new();
        for job in &options.seed {
            if !seen.insert(job.id) {
                return Err(StartError::DuplicateSeedId(job.id));
            }
        }

        let initial = match options.initial_id {
            Some(initial) => initial,
            None => match options.seed.iter().map(|job| job.id).max() {
                Some(highest) => highest
                    .get()
                    .checked_add(1)
                    .and_then(JobId::new)
                    .ok_or(CoreError::IdsExhausted)?,
                None => JobId::FIRST,
            },
        };

        if let Some(job) = options.seed.iter().find(|job| job.id >= initial) {
            return Err(StartError::SeedIdNotBelowInitial {
                id: job.id,
                initial,
            });
        }

        info!(
            initial_id = %initial,
            seeded = options.seed.len(),
            "coordinator started"
        );

        Ok(Self {
            ids: IdGen::starting_at(initial),
            queue: JobQueue::from_jobs(options.seed),
            ..Self::default()
        })
    }

    /// The id the next submission will receive
    pub fn next_id(&self) -> u64 {
        self.ids.peek()
    }

    /// Append a new job to the queue tail
    pub fn submit(&mut self, payload: Payload, duration: u64) -> Result<JobId, CoreError> {
        let id = self.ids.next()?;
        self.queue.push_back(Job {
            id,
            payload,
            duration,
        });
        debug!(job_id = %id, duration, queued = self.queue.len(), "job submitted");
        Ok(id)
    }

    /// Hand the queue head to `worker`.
    ///
    /// Every dispatch gets its own monitor, even when the worker already
    /// holds other jobs.
    pub fn request_work(&mut self, worker: WorkerId) -> (Dispatch, Vec<Effect>) {
        let Some(job) = self.queue.pop_front() else {
            debug!(worker = %worker, "no work available");
            return (Dispatch::NoWork, vec![]);
        };

        let monitor = self.allocate_monitor();
        self.ledger.insert(Assignment {
            job: job.clone(),
            worker,
            monitor,
        });
        debug!(job_id = %job.id, worker = %worker, monitor = %monitor, "job dispatched");

        let effects = vec![Effect::Monitor {
            monitor,
            worker,
            job: job.id,
        }];
        (Dispatch::Job(job), effects)
    }

    /// Move an in-flight job to the done archive.
    ///
    /// Ids that are not in flight (unknown, still queued, already done) are
    /// ignored. The reporter is not checked against the assigned worker.
    pub fn report_done(&mut self, id: JobId) -> Vec<Effect> {
        let Some(assignment) = self.ledger.remove_job(id) else {
            debug!(job_id = %id, "completion for job not in flight, ignoring");
            return vec![];
        };

        debug!(job_id = %id, worker = %assignment.worker, "job done");
        self.done.record(assignment.job);
        vec![Effect::Demonitor {
            monitor: assignment.monitor,
        }]
    }

    /// A monitored worker terminated.
    ///
    /// The orphaned job goes back to the queue head, ahead of everything not
    /// yet dispatched. Monitors whose assignment already ended are ignored.
    pub fn worker_down(&mut self, monitor: MonitorRef) -> Vec<Effect> {
        let Some(assignment) = self.ledger.remove_monitor(monitor) else {
            debug!(monitor = %monitor, "stale monitor fired, ignoring");
            return vec![];
        };

        info!(
            job_id = %assignment.job.id,
            worker = %assignment.worker,
            "worker terminated holding job, requeueing at head"
        );
        self.queue.push_front(assignment.job);
        vec![Effect::Demonitor { monitor }]
    }

    pub fn queue_snapshot(&self) -> Vec<Job> {
        self.queue.snapshot()
    }

    pub fn progress_snapshot(&self) -> Vec<Job> {
        self.ledger.snapshot()
    }

    pub fn done_snapshot(&self) -> Vec<Job> {
        self.done.snapshot()
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            queued: self.queue_snapshot(),
            in_progress: self.progress_snapshot(),
            done: self.done_snapshot(),
        }
    }

    pub fn queue(&self) -> &JobQueue {
        &self.queue
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn done(&self) -> &DoneArchive {
        &self.done
    }

    fn allocate_monitor(&mut self) -> MonitorRef {
        let monitor = MonitorRef::new(self.next_monitor);
        self.next_monitor = self.next_monitor.wrapping_add(1);
        monitor
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
