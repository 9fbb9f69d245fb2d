// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for persistence tests.

use time::OffsetDateTime;
use time::macros::datetime;

use asx_events_domain::{
    AirportCode, CallSign, CallSignCode, CallSignId, EventDate, EventParticipation, ManualCountId,
    ManualParticipationCount, ParticipationId,
};

pub fn submitted_at() -> OffsetDateTime {
    datetime!(2026-02-14 18:00:00 UTC)
}

pub fn call_sign(id: &str, code: &str) -> CallSign {
    CallSign::new(
        CallSignId::new(id),
        CallSignCode::new(code).unwrap_or_else(|e| panic!("invalid test code {code}: {e}")),
    )
}

pub fn pending_participation(id: &str, call_sign_id: &str, date: &str) -> EventParticipation {
    EventParticipation::new_pending(
        ParticipationId::new(id),
        CallSignId::new(call_sign_id),
        EventDate::parse(date).unwrap_or_else(|e| panic!("invalid test date {date}: {e}")),
        airport("KLAX"),
        airport("KSFO"),
        submitted_at(),
    )
}

pub fn manual_count(id: &str, call_sign_id: &str, count: u32) -> ManualParticipationCount {
    ManualParticipationCount::new(
        ManualCountId::new(id),
        CallSignId::new(call_sign_id),
        count,
        submitted_at(),
    )
}

fn airport(code: &str) -> AirportCode {
    AirportCode::new(code).unwrap_or_else(|e| panic!("invalid test airport {code}: {e}"))
}
