// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jobq-core: the job coordinator state machine
//!
//! This crate provides:
//! - The job queue, assignment ledger and done archive
//! - A pure, synchronous coordinator that moves jobs between them and
//!   requests monitor effects from whoever drives it
//! - Configuration file types

pub mod archive;
pub mod config;
pub mod coordinator;
pub mod effect;
pub mod error;
pub mod id;
pub mod job;
pub mod ledger;
pub mod queue;
pub mod stats;

pub use archive::DoneArchive;
pub use config::{
    ConfigError, CoordinatorConfig, JobSpec, JobqConfig, LoggingConfig, WorkersConfig,
};
pub use coordinator::{Coordinator, StartOptions};
pub use effect::Effect;
pub use error::{CoreError, StartError};
pub use id::{IdGen, JobId, MonitorRef, WorkerId};
pub use job::{Dispatch, Job, Payload};
pub use ledger::{Assignment, Ledger};
pub use queue::JobQueue;
pub use stats::Statistics;
