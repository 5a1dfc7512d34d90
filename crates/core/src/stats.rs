// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point-in-time view of the coordinator

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::job::Job;

/// All three snapshots taken in one step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Head to tail
    pub queued: Vec<Job>,
    /// Most recently dispatched first
    pub in_progress: Vec<Job>,
    /// Most recently completed first
    pub done: Vec<Job>,
}

impl Statistics {
    /// Nothing queued and nothing in flight
    pub fn is_quiescent(&self) -> bool {
        self.queued.is_empty() && self.in_progress.is_empty()
    }

    pub fn total(&self) -> usize {
        self.queued.len() + self.in_progress.len() + self.done.len()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Queued:      {}", format_ids(&self.queued))?;
        writeln!(f, "In progress: {}", format_ids(&self.in_progress))?;
        write!(f, "Done:        {}", format_ids(&self.done))
    }
}

fn format_ids(jobs: &[Job]) -> String {
    if jobs.is_empty() {
        return "-".to_string();
    }
    jobs.iter()
        .map(|job| job.id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::JobId;

    fn job(id: u64) -> Job {
        Job::new(JobId::new(id).unwrap(), "x", 0)
    }

    #[test]
    fn statistics_display_lists_ids() {
        let stats = Statistics {
            queued: vec![job(4), job(5)],
            in_progress: vec![],
            done: vec![job(2)],
        };
        let text = stats.to_string();
        assert!(text.contains("Queued:      4, 5"));
        assert!(text.contains("In progress: -"));
        assert!(text.contains("Done:        2"));
    }

    #[test]
    fn statistics_quiescent_ignores_done() {
        let stats = Statistics {
            done: vec![job(1)],
            ..Default::default()
        };
        assert!(stats.is_quiescent());
        assert_eq!(stats.total(), 1);
    }
}
