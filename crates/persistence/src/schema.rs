// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    call_signs (call_sign_id) {
        call_sign_id -> Text,
        code -> Text,
        is_active -> Integer,
    }
}

diesel::table! {
    event_participations (participation_id) {
        participation_id -> Text,
        call_sign_id -> Text,
        event_date -> Text,
        departure_airport -> Text,
        arrival_airport -> Text,
        is_approved -> Integer,
        submitted_at -> Text,
        approved_at -> Nullable<Text>,
    }
}

diesel::table! {
    manual_participation_counts (manual_count_id) {
        manual_count_id -> Text,
        call_sign_id -> Text,
        count -> Integer,
        updated_at -> Text,
    }
}

diesel::joinable!(event_participations -> call_signs (call_sign_id));
diesel::joinable!(manual_participation_counts -> call_signs (call_sign_id));

diesel::allow_tables_to_appear_in_same_query!(
    call_signs,
    event_participations,
    manual_participation_counts,
);
