// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier types and the job id generator

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifier of a submitted job. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct JobId(u64);

impl JobId {
    /// The first id handed out by a coordinator started without options
    pub const FIRST: JobId = JobId(1);

    /// Returns `None` for zero, which is never a valid job id
    pub fn new(value: u64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for JobId {
    type Error = CoreError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(CoreError::ZeroId)
    }
}

impl From<JobId> for u64 {
    fn from(id: JobId) -> Self {
        id.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Names one liveness subscription. A fresh ref is allocated per dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonitorRef(u64);

impl MonitorRef {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MonitorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mon-{}", self.0)
    }
}

/// Identity of a worker process or task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(uuid::Uuid);

impl WorkerId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for WorkerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sequential job id generator.
///
/// Owned exclusively by a coordinator, so no synchronization is needed.
#[derive(Debug, Clone)]
pub struct IdGen {
    next: u64,
}

impl IdGen {
    pub fn starting_at(first: JobId) -> Self {
        Self { next: first.get() }
    }

    /// The id the next call to [`IdGen::next`] will return
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn next(&mut self) -> Result<JobId, CoreError> {
        let id = JobId(self.next);
        self.next = self.next.checked_add(1).ok_or(CoreError::IdsExhausted)?;
        Ok(id)
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::starting_at(JobId::FIRST)
    }
}
