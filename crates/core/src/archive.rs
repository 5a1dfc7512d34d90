// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! History of completed jobs

use std::collections::VecDeque;

use crate::id::JobId;
use crate::job::Job;

/// Completed jobs, most recent completion first
#[derive(Debug, Clone, Default)]
pub struct DoneArchive {
    jobs: VecDeque<Job>,
}

impl DoneArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, job: Job) {
        self.jobs.push_front(job);
    }

    pub fn contains(&self, id: JobId) -> bool {
        self.jobs.iter().any(|job| job.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    pub fn snapshot(&self) -> Vec<Job> {
        self.jobs.iter().cloned().collect()
    }
}
