// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file
//!
//! Every section is optional. A missing file section falls back to its
//! defaults; unknown keys are rejected so typos surface early.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::coordinator::StartOptions;
use crate::id::JobId;
use crate::job::{Job, Payload};

const DEFAULT_MAILBOX_CAPACITY: usize = 64;
const DEFAULT_WORKER_COUNT: usize = 3;
const DEFAULT_POLL_INTERVAL_MS: u64 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobqConfig {
    pub coordinator: CoordinatorConfig,
    pub workers: WorkersConfig,
    pub logging: LoggingConfig,
    /// Jobs submitted once the coordinator is up
    pub jobs: Vec<JobSpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoordinatorConfig {
    pub initial_id: Option<JobId>,
    pub mailbox_capacity: usize,
    /// Jobs already waiting when the coordinator starts, head first
    pub seed: Vec<Job>,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            initial_id: None,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            seed: Vec::new(),
        }
    }
}

impl CoordinatorConfig {
    pub fn start_options(&self) -> StartOptions {
        StartOptions {
            initial_id: self.initial_id,
            seed: self.seed.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkersConfig {
    pub count: usize,
    pub poll_interval_ms: u64,
    /// Terminate a worker while it holds its next job after this many
    /// completions
    pub crash_after: Option<u32>,
    /// Replace crashed workers with fresh ones
    pub restart: bool,
}

impl Default for WorkersConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_WORKER_COUNT,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            crash_after: None,
            restart: true,
        }
    }
}

impl WorkersConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
    /// Log to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// A job to submit: everything but the id, which the coordinator assigns
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobSpec {
    pub payload: Payload,
    #[serde(default)]
    pub duration: u64,
}

impl JobqConfig {
    /// Read and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: JobqConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.coordinator.mailbox_capacity == 0 {
            return Err(ConfigError::Invalid(
                "coordinator.mailbox_capacity must be greater than 0".to_string(),
            ));
        }
        if self.workers.count == 0 {
            return Err(ConfigError::Invalid(
                "workers.count must be greater than 0".to_string(),
            ));
        }
        if self.workers.restart && self.workers.crash_after == Some(0) {
            return Err(ConfigError::Invalid(
                "workers.crash_after = 0 with restart would never finish".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
