// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end record lifecycle scenarios.

use crate::aggregate::participation_count;
use crate::records::{RecordSet, TransitionOutcome, TransitionResult};
use crate::tests::helpers::{approved_at, call_sign, manual_count, participation, submitted_at};
use crate::{Command, apply};
use asx_events_domain::{AirportCode, CallSignId, EventDate, ManualCountId, ParticipationId};

/// Submit for VA001, approve, and watch the count and milestone.
#[test]
fn test_submit_then_approve_crosses_first_milestone() {
    // VA001 sits at 9 effective participations: 4 approved reports
    // plus 5 manual credit.
    let mut records: RecordSet = RecordSet {
        call_signs: vec![call_sign("cs-1", "VA001")],
        event_participations: (0..4)
            .map(|i| participation(&format!("p-{i}"), "cs-1", true))
            .collect(),
        manual_participation_counts: vec![manual_count("mc-1", "cs-1", 5)],
    };
    assert_eq!(participation_count(&records, &CallSignId::new("cs-1")), 9);

    // Pilot submits a report: created pending, count unchanged.
    let submitted: TransitionResult = apply(
        &records,
        Command::SubmitParticipation {
            id: ParticipationId::new("p-new"),
            call_sign_id: CallSignId::new("cs-1"),
            date: EventDate::parse("2025-04-10").unwrap(),
            departure_airport: AirportCode::new("KJFK").unwrap(),
            arrival_airport: AirportCode::new("KLAX").unwrap(),
            submitted_at: submitted_at(),
        },
    )
    .unwrap();
    records = submitted.new_records;

    let report = records
        .find_participation(&ParticipationId::new("p-new"))
        .unwrap();
    assert!(!report.is_approved);
    assert!(report.approved_at.is_none());
    assert_eq!(participation_count(&records, &CallSignId::new("cs-1")), 9);

    // Staff approves: count goes 9 -> 10 and the first milestone fires.
    let approved: TransitionResult = apply(
        &records,
        Command::ApproveParticipation {
            id: ParticipationId::new("p-new"),
            approved_at: approved_at(),
        },
    )
    .unwrap();
    records = approved.new_records;

    match approved.outcome {
        TransitionOutcome::ParticipationApproved(outcome) => {
            assert_eq!(outcome.previous_count, 9);
            assert_eq!(outcome.new_count, 10);
            assert_eq!(outcome.milestone, Some(10));
            assert_eq!(outcome.call_sign.code.value(), "VA001");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(participation_count(&records, &CallSignId::new("cs-1")), 10);
}

/// The count invariant holds for every call sign after a mixed series
/// of transitions.
#[test]
fn test_effective_count_invariant_after_mixed_transitions() {
    let mut records: RecordSet = RecordSet {
        call_signs: vec![call_sign("cs-1", "VA001"), call_sign("cs-2", "VA002")],
        event_participations: vec![
            participation("p-1", "cs-1", false),
            participation("p-2", "cs-2", false),
        ],
        manual_participation_counts: Vec::new(),
    };

    for id in ["p-1", "p-2"] {
        let result: TransitionResult = apply(
            &records,
            Command::ApproveParticipation {
                id: ParticipationId::new(id),
                approved_at: approved_at(),
            },
        )
        .unwrap();
        records = result.new_records;
    }

    let result: TransitionResult = apply(
        &records,
        Command::SetManualCount {
            id: ManualCountId::new("mc-1"),
            call_sign_id: CallSignId::new("cs-2"),
            count: 3,
            updated_at: approved_at(),
        },
    )
    .unwrap();
    records = result.new_records;

    for cs in &records.call_signs {
        let approved: u32 = records
            .event_participations
            .iter()
            .filter(|p| p.call_sign_id == cs.id && p.is_approved)
            .count()
            .try_into()
            .unwrap();
        let manual: u32 = records.find_manual_count(&cs.id).map_or(0, |mc| mc.count);
        assert_eq!(participation_count(&records, &cs.id), approved + manual);
    }
}

/// Deleting a call sign leaves no orphaned records behind.
#[test]
fn test_delete_call_sign_leaves_no_orphans() {
    let records: RecordSet = RecordSet {
        call_signs: vec![call_sign("cs-1", "VA001"), call_sign("cs-2", "VA002")],
        event_participations: vec![
            participation("p-1", "cs-1", true),
            participation("p-2", "cs-1", false),
            participation("p-3", "cs-2", true),
        ],
        manual_participation_counts: vec![
            manual_count("mc-1", "cs-1", 4),
            manual_count("mc-2", "cs-2", 1),
        ],
    };

    let result: TransitionResult = apply(
        &records,
        Command::DeleteCallSign {
            id: CallSignId::new("cs-1"),
        },
    )
    .unwrap();
    let records: RecordSet = result.new_records;

    let live_ids: Vec<&CallSignId> = records.call_signs.iter().map(|cs| &cs.id).collect();
    assert!(
        records
            .event_participations
            .iter()
            .all(|p| live_ids.contains(&&p.call_sign_id))
    );
    assert!(
        records
            .manual_participation_counts
            .iter()
            .all(|mc| live_ids.contains(&&mc.call_sign_id))
    );
    // The unrelated call sign keeps its records.
    assert_eq!(records.event_participations.len(), 1);
    assert_eq!(records.manual_participation_counts.len(), 1);
}
