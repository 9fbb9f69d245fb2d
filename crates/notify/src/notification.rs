// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::{Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Embed accent color for participation notifications (Discord blue).
const PARTICIPATION_COLOR: u32 = 3_447_003;

/// Embed accent color for milestone notifications (gold).
const MILESTONE_COLOR: u32 = 16_766_720;

const EMBED_FOOTER: &str = "ASX Event Tracker";

/// An outbound, fire-and-forget notification.
///
/// Two kinds exist: a pilot submitted a participation report, or a
/// call sign crossed a milestone. Delivery failures never propagate to
/// the workflow that produced the notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A pilot submitted a new participation report.
    ParticipationSubmitted {
        /// The call sign code.
        call_sign_code: String,
        /// The event date (`YYYY-MM-DD`).
        date: String,
        /// The departure airport code.
        departure_airport: String,
        /// The arrival airport code.
        arrival_airport: String,
    },
    /// A call sign crossed a participation milestone.
    MilestoneReached {
        /// The call sign code.
        call_sign_code: String,
        /// The crossed threshold.
        milestone: u32,
    },
}

impl Notification {
    /// Returns the wire kind of this notification.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ParticipationSubmitted { .. } => "participation",
            Self::MilestoneReached { .. } => "milestone",
        }
    }

    /// Builds the Discord webhook embed payload for this notification.
    ///
    /// # Arguments
    ///
    /// * `sent_at` - The embed timestamp
    #[must_use]
    pub fn payload(&self, sent_at: OffsetDateTime) -> Value {
        let timestamp: String = sent_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"));

        match self {
            Self::ParticipationSubmitted {
                call_sign_code,
                date,
                departure_airport,
                arrival_airport,
            } => json!({
                "embeds": [{
                    "title": "\u{1f6e9}\u{fe0f} New Event Participation",
                    "color": PARTICIPATION_COLOR,
                    "fields": [
                        { "name": "Callsign", "value": call_sign_code, "inline": true },
                        { "name": "Date", "value": date, "inline": true },
                        {
                            "name": "Route",
                            "value": format!(
                                "{departure_airport} \u{2708}\u{fe0f} {arrival_airport}"
                            ),
                            "inline": false
                        },
                    ],
                    "timestamp": timestamp,
                    "footer": { "text": EMBED_FOOTER },
                }]
            }),
            Self::MilestoneReached {
                call_sign_code,
                milestone,
            } => json!({
                "embeds": [{
                    "title": "\u{1f3c6} Milestone Reached!",
                    "color": MILESTONE_COLOR,
                    "fields": [
                        { "name": "Pilot", "value": call_sign_code, "inline": true },
                        {
                            "name": "Milestone",
                            "value": format!("{milestone} participations"),
                            "inline": true
                        },
                    ],
                    "description": format!(
                        "Pilot **{call_sign_code}** has reached **{milestone}** \
                         event participations! \u{1f389}"
                    ),
                    "timestamp": timestamp,
                    "footer": { "text": EMBED_FOOTER },
                }]
            }),
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParticipationSubmitted {
                call_sign_code,
                date,
                departure_airport,
                arrival_airport,
            } => write!(
                f,
                "participation {call_sign_code} {date} {departure_airport}->{arrival_airport}"
            ),
            Self::MilestoneReached {
                call_sign_code,
                milestone,
            } => write!(f, "milestone {call_sign_code} {milestone}"),
        }
    }
}
