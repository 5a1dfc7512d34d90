// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated worker pool
//!
//! Drives a coordinator with a fixed number of in-process workers until the
//! system is quiescent. Workers sleep for each job's advisory duration in
//! milliseconds before reporting it done, and can be told to crash while
//! holding a job to exercise recovery.

use std::time::Duration;

use jobq_core::{Dispatch, WorkersConfig};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::error::CoordinatorError;
use crate::handle::CoordinatorHandle;
use crate::worker::Worker;

#[derive(Debug, Clone)]
pub struct PoolOptions {
    pub count: usize,
    pub poll_interval: Duration,
    /// Crash while holding the job received after this many completions
    pub crash_after: Option<u32>,
    pub restart: bool,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self::from(&WorkersConfig::default())
    }
}

impl From<&WorkersConfig> for PoolOptions {
    fn from(config: &WorkersConfig) -> Self {
        Self {
            count: config.count,
            poll_interval: config.poll_interval(),
            crash_after: config.crash_after,
            restart: config.restart,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolReport {
    /// Jobs reported done by pool workers
    pub completed: usize,
    pub crashes: usize,
}

enum WorkerExit {
    /// Found nothing left to do
    Idle { completed: usize },
    /// Terminated while holding a job
    Crashed { completed: usize },
}

pub struct WorkerPool {
    coordinator: CoordinatorHandle,
    options: PoolOptions,
}

impl WorkerPool {
    pub fn new(coordinator: CoordinatorHandle, options: PoolOptions) -> Self {
        Self {
            coordinator,
            options,
        }
    }

    /// Run workers until every one of them has gone idle
    pub async fn run(self) -> Result<PoolReport, CoordinatorError> {
        let mut workers = JoinSet::new();
        for _ in 0..self.options.count {
            workers.spawn(run_worker(self.coordinator.clone(), self.options.clone()));
        }
        info!(workers = self.options.count, "worker pool started");

        let mut report = PoolReport::default();
        while let Some(joined) = workers.join_next().await {
            let exit = match joined {
                Ok(exit) => exit?,
                Err(e) => {
                    warn!("worker task failed: {}", e);
                    WorkerExit::Crashed { completed: 0 }
                }
            };
            match exit {
                WorkerExit::Idle { completed } => report.completed += completed,
                WorkerExit::Crashed { completed } => {
                    report.completed += completed;
                    report.crashes += 1;
                    if self.options.restart {
                        workers.spawn(run_worker(self.coordinator.clone(), self.options.clone()));
                    }
                }
            }
        }

        info!(
            completed = report.completed,
            crashes = report.crashes,
            "worker pool finished"
        );
        Ok(report)
    }
}

async fn run_worker(
    coordinator: CoordinatorHandle,
    options: PoolOptions,
) -> Result<WorkerExit, CoordinatorError> {
    let worker = Worker::new();
    let mut completed = 0usize;
    debug!(worker = %worker.id(), "worker started");

    loop {
        match coordinator.request_work(&worker).await? {
            Dispatch::Job(job) => {
                if options
                    .crash_after
                    .is_some_and(|limit| completed >= limit as usize)
                {
                    warn!(
                        worker = %worker.id(),
                        job_id = %job.id,
                        "worker crashing with job in hand"
                    );
                    worker.terminate();
                    return Ok(WorkerExit::Crashed { completed });
                }
                tokio::time::sleep(Duration::from_millis(job.duration)).await;
                coordinator.report_done(job.id).await?;
                completed += 1;
            }
            Dispatch::NoWork => {
                // In-flight jobs may still come back if their worker dies.
                if coordinator.statistics().await?.is_quiescent() {
                    debug!(worker = %worker.id(), completed, "worker idle");
                    return Ok(WorkerExit::Idle { completed });
                }
                tokio::time::sleep(options.poll_interval).await;
            }
        }
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
