use super::*;
use serde_json::json;

fn assign(id: u64, worker: WorkerId, monitor: u64) -> Assignment {
    Assignment {
        job: Job::new(JobId::new(id).unwrap(), json!(null), 0),
        worker,
        monitor: MonitorRef::new(monitor),
    }
}

fn job_id(id: u64) -> JobId {
    JobId::new(id).unwrap()
}

#[test]
fn ledger_lists_most_recent_first() {
    let worker = WorkerId::new();
    let mut ledger = Ledger::new();
    ledger.insert(assign(1, worker, 1));
    ledger.insert(assign(2, worker, 2));
    ledger.insert(assign(3, worker, 3));

    let ids: Vec<u64> = ledger.snapshot().iter().map(|j| j.id.get()).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn ledger_remove_job_drops_monitor_index() {
    let worker = WorkerId::new();
    let mut ledger = Ledger::new();
    ledger.insert(assign(1, worker, 10));

    let removed = ledger.remove_job(job_id(1)).unwrap();
    assert_eq!(removed.monitor, MonitorRef::new(10));
    assert!(ledger.is_empty());
    assert!(ledger.remove_monitor(MonitorRef::new(10)).is_none());
}

#[test]
fn ledger_remove_monitor_finds_its_assignment() {
    let worker = WorkerId::new();
    let mut ledger = Ledger::new();
    ledger.insert(assign(1, worker, 10));
    ledger.insert(assign(2, worker, 11));

    let removed = ledger.remove_monitor(MonitorRef::new(10)).unwrap();
    assert_eq!(removed.job.id, job_id(1));
    assert_eq!(ledger.len(), 1);
    assert!(ledger.contains(job_id(2)));
}

#[test]
fn ledger_unknown_keys_are_ignored() {
    let mut ledger = Ledger::new();
    ledger.insert(assign(1, WorkerId::new(), 1));

    assert!(ledger.remove_job(job_id(99)).is_none());
    assert!(ledger.remove_monitor(MonitorRef::new(99)).is_none());
    assert_eq!(ledger.len(), 1);
}

#[test]
fn ledger_tracks_holdings_per_worker() {
    let alice = WorkerId::new();
    let bob = WorkerId::new();
    let mut ledger = Ledger::new();
    ledger.insert(assign(1, alice, 1));
    ledger.insert(assign(2, bob, 2));
    ledger.insert(assign(3, alice, 3));

    assert_eq!(ledger.held_by(alice), vec![job_id(3), job_id(1)]);
    assert_eq!(ledger.held_by(bob), vec![job_id(2)]);
    assert_eq!(ledger.get(job_id(2)).unwrap().worker, bob);
}
