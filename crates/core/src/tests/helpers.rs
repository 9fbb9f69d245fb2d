// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::records::RecordSet;
use asx_events_domain::{
    AirportCode, CallSign, CallSignCode, CallSignId, EventDate, EventParticipation, ManualCountId,
    ManualParticipationCount, ParticipationId,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn submitted_at() -> OffsetDateTime {
    datetime!(2025-04-10 18:00:00 UTC)
}

pub fn approved_at() -> OffsetDateTime {
    datetime!(2025-04-11 09:00:00 UTC)
}

pub fn call_sign(id: &str, code: &str) -> CallSign {
    CallSign::new(CallSignId::new(id), CallSignCode::new(code).unwrap())
}

pub fn participation(id: &str, call_sign_id: &str, approved: bool) -> EventParticipation {
    let mut p: EventParticipation = EventParticipation::new_pending(
        ParticipationId::new(id),
        CallSignId::new(call_sign_id),
        EventDate::parse("2025-04-10").unwrap(),
        AirportCode::new("KJFK").unwrap(),
        AirportCode::new("KLAX").unwrap(),
        submitted_at(),
    );
    if approved {
        p.approve(approved_at());
    }
    p
}

pub fn manual_count(id: &str, call_sign_id: &str, count: u32) -> ManualParticipationCount {
    ManualParticipationCount::new(
        ManualCountId::new(id),
        CallSignId::new(call_sign_id),
        count,
        approved_at(),
    )
}

/// Three call signs (one inactive), a mix of pending and approved
/// reports, and one manual count record.
pub fn sample_records() -> RecordSet {
    RecordSet {
        call_signs: vec![
            call_sign("cs-1", "VA001"),
            call_sign("cs-2", "VA002"),
            {
                let mut cs = call_sign("cs-3", "VA003");
                cs.is_active = false;
                cs
            },
        ],
        event_participations: vec![
            participation("p-1", "cs-1", true),
            participation("p-2", "cs-1", false),
            participation("p-3", "cs-2", true),
            participation("p-4", "cs-2", true),
            participation("p-5", "cs-3", true),
        ],
        manual_participation_counts: vec![manual_count("mc-1", "cs-1", 2)],
    }
}
