use range_curve::engine::{RebalanceSession, SaveError, SaveSink, allocation_total};
use range_curve::model::{AllocationEntry, OrderRates, RebalanceMetrics, VaultSnapshot};

// ── Mock sink ───────────────────────────────────────────────────────

/// Records saved snapshots; optionally refuses them.
#[derive(Default)]
struct RecordingSink {
    saved: Vec<VaultSnapshot>,
    fail: bool,
}

impl SaveSink for RecordingSink {
    fn save(&mut self, snapshot: &VaultSnapshot) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("backend unavailable");
        }
        self.saved.push(snapshot.clone());
        Ok(())
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

fn snapshot() -> VaultSnapshot {
    VaultSnapshot {
        metrics: RebalanceMetrics {
            total_vault_value: 1_000_000.0,
            unallocated_value: 100_000.0,
            allocated_value: 0.0,
            average_apy: 0.0,
        },
        entries: vec![
            AllocationEntry::new("lend", 50.0, 600_000.0, OrderRates::Lend { lend_apr: 12.0 }),
            AllocationEntry::new(
                "borrow",
                30.0,
                600_000.0,
                OrderRates::Borrow { borrow_apr: 8.0 },
            ),
            AllocationEntry::new(
                "two_way",
                10.0,
                600_000.0,
                OrderRates::TwoWay {
                    lend_apr: 6.0,
                    borrow_apr: 10.0,
                },
            ),
        ],
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[test]
fn test_new_session_derives_amounts_and_metrics() {
    let session = RebalanceSession::new(snapshot());
    let amounts: Vec<f64> = session.entries().iter().map(|e| e.allocated_amount).collect();
    assert_eq!(amounts, vec![500_000.0, 300_000.0, 100_000.0]);
    assert_eq!(session.metrics().allocated_value, 900_000.0);
    // 12 * 0.5 + 8 * 0.3 + 8 * 0.1
    assert!((session.metrics().average_apy - 9.2).abs() < 1e-9);
    assert!(session.can_save());
}

#[test]
fn test_edit_redistributes_and_stays_saveable() {
    let mut session = RebalanceSession::new(snapshot());
    session.set_allocation("lend", 80.0);
    let pcts: Vec<f64> = session
        .entries()
        .iter()
        .map(|e| e.allocation_percentage)
        .collect();
    assert_eq!(pcts, vec![80.0, 15.0, 5.0]);
    assert!(session.can_save());
}

#[test]
fn test_deposit_and_withdraw_reprice_entries() {
    let mut session = RebalanceSession::new(snapshot());
    session.set_deposit(200_000.0);
    session.set_withdraw(100_000.0);
    assert_eq!(session.metrics().total_vault_value, 1_100_000.0);
    assert_eq!(session.metrics().unallocated_value, 200_000.0);
    assert_eq!(session.entries()[0].allocated_amount, 550_000.0);

    session.set_deposit(-5.0);
    assert_eq!(session.deposit(), 0.0);
    assert_eq!(session.metrics().total_vault_value, 900_000.0);
}

#[test]
fn test_save_commits_and_resets_baseline() {
    let mut session = RebalanceSession::new(snapshot());
    session.set_allocation("borrow", 40.0);
    session.set_deposit(50_000.0);

    let mut sink = RecordingSink::default();
    let saved = session.save(&mut sink).unwrap();
    assert_eq!(sink.saved.len(), 1);
    assert_eq!(sink.saved[0], saved);
    assert_eq!(saved.metrics.total_vault_value, 1_050_000.0);

    // pending deltas are folded into the new baseline
    assert_eq!(session.deposit(), 0.0);
    assert_eq!(session.metrics().total_vault_value, 1_050_000.0);
    session.discard();
    assert_eq!(session.entries()[1].allocation_percentage, 40.0);
}

#[test]
fn test_save_is_gated_on_over_allocation() {
    // a hand-edited snapshot that was already over 100%
    let mut over = snapshot();
    over.entries[0].allocation_percentage = 90.0;
    let mut session = RebalanceSession::new(over);
    assert!(allocation_total(session.entries()) > 100.0);
    assert!(!session.can_save());

    let mut sink = RecordingSink::default();
    match session.save(&mut sink) {
        Err(SaveError::Gated(errors)) => assert_eq!(errors.len(), 1),
        other => panic!("expected gated save, got {other:?}"),
    }
    assert!(sink.saved.is_empty());

    // any edit through the normalizer brings it back under the ceiling
    session.set_allocation("two_way", 10.0);
    assert!(session.can_save());
}

#[test]
fn test_sink_failure_keeps_pending_state() {
    let mut session = RebalanceSession::new(snapshot());
    session.set_allocation("lend", 20.0);
    let mut sink = RecordingSink {
        fail: true,
        ..Default::default()
    };
    let err = session.save(&mut sink).unwrap_err();
    assert!(matches!(err, SaveError::Sink(_)));
    assert!(err.to_string().contains("backend unavailable"));
    assert_eq!(session.entries()[0].allocation_percentage, 20.0);
}

#[test]
fn test_discard_returns_to_baseline() {
    let mut session = RebalanceSession::new(snapshot());
    session.set_allocation("lend", 5.0);
    session.set_withdraw(300_000.0);
    session.discard();
    assert_eq!(session.entries()[0].allocation_percentage, 50.0);
    assert_eq!(session.withdraw(), 0.0);
    assert_eq!(session.metrics().total_vault_value, 1_000_000.0);
}
