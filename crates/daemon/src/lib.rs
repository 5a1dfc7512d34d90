// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jobq coordinator runtime
//!
//! Runs a [`jobq_core::Coordinator`] inside one tokio task, watches the
//! liveness of workers holding jobs, and exposes the coordinator through a
//! cloneable [`CoordinatorHandle`].

mod actor;
mod error;
mod handle;
mod monitor;
mod pool;
mod worker;

pub use error::CoordinatorError;
pub use handle::{CoordinatorHandle, DEFAULT_MAILBOX_CAPACITY};
pub use pool::{PoolOptions, PoolReport, WorkerPool};
pub use worker::{Worker, WorkerRef};

pub use jobq_core::{Dispatch, Job, JobId, Payload, StartOptions, Statistics};
