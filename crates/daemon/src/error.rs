// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors surfaced by the coordinator handle

use jobq_core::{CoreError, StartError};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("coordinator is not running")]
    Stopped,
    #[error("failed to start coordinator: {0}")]
    Start(#[from] StartError),
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl<T> From<mpsc::error::SendError<T>> for CoordinatorError {
    fn from(_: mpsc::error::SendError<T>) -> Self {
        Self::Stopped
    }
}

impl From<oneshot::error::RecvError> for CoordinatorError {
    fn from(_: oneshot::error::RecvError) -> Self {
        Self::Stopped
    }
}
