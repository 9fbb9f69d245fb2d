// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for API handler tests.

use time::macros::datetime;

use asx_events::RecordSet;
use asx_events_domain::{
    AirportCode, CallSign, CallSignCode, CallSignId, EventDate, EventParticipation,
    ManualCountId, ManualParticipationCount, ParticipationId,
};

pub fn call_sign(id: &str, code: &str) -> CallSign {
    CallSign::new(
        CallSignId::new(id),
        CallSignCode::new(code).unwrap_or_else(|e| panic!("invalid test code {code}: {e}")),
    )
}

pub fn approved_participation(id: &str, call_sign_id: &str) -> EventParticipation {
    let mut participation = EventParticipation::new_pending(
        ParticipationId::new(id),
        CallSignId::new(call_sign_id),
        EventDate::parse("2026-02-14").unwrap_or_else(|e| panic!("invalid test date: {e}")),
        airport("KLAX"),
        airport("KSFO"),
        datetime!(2026-02-14 18:00:00 UTC),
    );
    participation.approve(datetime!(2026-02-15 09:00:00 UTC));
    participation
}

/// Two call signs (one with a manual count of 2), no participations.
pub fn fleet_records() -> RecordSet {
    RecordSet {
        call_signs: vec![call_sign("cs-1", "DAL123"), call_sign("cs-2", "UAL900")],
        event_participations: Vec::new(),
        manual_participation_counts: vec![ManualParticipationCount::new(
            ManualCountId::new("mc-1"),
            CallSignId::new("cs-2"),
            2,
            datetime!(2026-01-01 00:00:00 UTC),
        )],
    }
}

fn airport(code: &str) -> AirportCode {
    AirportCode::new(code).unwrap_or_else(|e| panic!("invalid test airport {code}: {e}"))
}
