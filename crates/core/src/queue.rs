// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! FIFO job queue
//!
//! New submissions join at the tail. Jobs reclaimed from dead workers are
//! pushed back at the head so they are offered before anything else.

use std::collections::VecDeque;

use crate::id::JobId;
use crate::job::Job;

#[derive(Debug, Clone, Default)]
pub struct JobQueue {
    items: VecDeque<Job>,
}

impl JobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from jobs given head first
    pub fn from_jobs(jobs: impl IntoIterator<Item = Job>) -> Self {
        Self {
            items: jobs.into_iter().collect(),
        }
    }

    /// Append a newly submitted job
    pub fn push_back(&mut self, job: Job) {
        self.items.push_back(job);
    }

    /// Put a reclaimed job in front of everything else
    pub fn push_front(&mut self, job: Job) {
        self.items.push_front(job);
    }

    pub fn pop_front(&mut self) -> Option<Job> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&Job> {
        self.items.front()
    }

    pub fn contains(&self, id: JobId) -> bool {
        self.items.iter().any(|job| job.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.items.iter()
    }

    /// Contents head to tail
    pub fn snapshot(&self) -> Vec<Job> {
        self.items.iter().cloned().collect()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
