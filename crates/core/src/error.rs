// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the coordinator core

use crate::id::JobId;
use thiserror::Error;

/// Fatal conditions inside the state machine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("job id space exhausted")]
    IdsExhausted,
    #[error("job id 0 is not valid")]
    ZeroId,
}

/// Rejected start options
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StartError {
    #[error("seed job {0} appears more than once")]
    DuplicateSeedId(JobId),
    #[error("seed job {id} is not below the initial id {initial}")]
    SeedIdNotBelowInitial { id: JobId, initial: JobId },
    #[error(transparent)]
    Core(#[from] CoreError),
}
