// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assignment ledger: in-flight jobs and the monitors watching their workers

use std::collections::{HashMap, VecDeque};

use crate::id::{JobId, MonitorRef, WorkerId};
use crate::job::Job;

/// A dispatched job, the worker holding it, and the monitor on that worker
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub job: Job,
    pub worker: WorkerId,
    pub monitor: MonitorRef,
}

/// In-flight assignments, most recently dispatched first.
///
/// Indexed by monitor as well as by job so a termination event can be
/// resolved to exactly one assignment. A worker holding several jobs has
/// one monitor per job.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    assignments: VecDeque<Assignment>,
    by_monitor: HashMap<MonitorRef, JobId>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, assignment: Assignment) {
        self.by_monitor.insert(assignment.monitor, assignment.job.id);
        self.assignments.push_front(assignment);
    }

    /// Remove the assignment for a job, if it is in flight
    pub fn remove_job(&mut self, id: JobId) -> Option<Assignment> {
        let pos = self.assignments.iter().position(|a| a.job.id == id)?;
        let assignment = self.assignments.remove(pos)?;
        self.by_monitor.remove(&assignment.monitor);
        Some(assignment)
    }

    /// Remove the assignment a monitor belongs to, if it still exists
    pub fn remove_monitor(&mut self, monitor: MonitorRef) -> Option<Assignment> {
        let id = *self.by_monitor.get(&monitor)?;
        self.remove_job(id)
    }

    pub fn get(&self, id: JobId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.job.id == id)
    }

    pub fn contains(&self, id: JobId) -> bool {
        self.get(id).is_some()
    }

    /// Jobs currently held by a worker, most recent first
    pub fn held_by(&self, worker: WorkerId) -> Vec<JobId> {
        self.assignments
            .iter()
            .filter(|a| a.worker == worker)
            .map(|a| a.job.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter()
    }

    /// In-flight jobs, most recently dispatched first
    pub fn snapshot(&self) -> Vec<Job> {
        self.assignments.iter().map(|a| a.job.clone()).collect()
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
