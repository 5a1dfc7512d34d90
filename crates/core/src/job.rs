// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Jobs and dispatch results

use serde::{Deserialize, Serialize};

use crate::id::JobId;

/// Opaque work descriptor carried by a job
pub type Payload = serde_json::Value;

/// A unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub payload: Payload,
    /// Advisory only. Never consulted for ordering.
    #[serde(default)]
    pub duration: u64,
}

impl Job {
    pub fn new(id: JobId, payload: impl Into<Payload>, duration: u64) -> Self {
        Self {
            id,
            payload: payload.into(),
            duration,
        }
    }
}

/// Reply to a request for work
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Job(Job),
    NoWork,
}

impl Dispatch {
    pub fn into_job(self) -> Option<Job> {
        match self {
            Dispatch::Job(job) => Some(job),
            Dispatch::NoWork => None,
        }
    }

    pub fn is_no_work(&self) -> bool {
        matches!(self, Dispatch::NoWork)
    }
}
