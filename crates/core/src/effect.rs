// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects the coordinator state machine asks its runtime to perform

use crate::id::{JobId, MonitorRef, WorkerId};

/// Side effects requested by a state transition.
///
/// The state machine never touches workers itself. Whoever drives it must
/// establish and release the monitors it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Watch `worker` and report `monitor` when it terminates
    Monitor {
        monitor: MonitorRef,
        worker: WorkerId,
        job: JobId,
    },
    /// Stop watching; the assignment behind `monitor` is gone
    Demonitor { monitor: MonitorRef },
}
