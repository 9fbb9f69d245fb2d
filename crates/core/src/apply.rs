// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregate::participation_count;
use crate::command::Command;
use crate::error::CoreError;
use crate::records::{ApprovalOutcome, RecordSet, TransitionOutcome, TransitionResult};
use asx_events_domain::{
    CallSign, EventParticipation, ManualParticipationCount, detect_milestone,
    validate_call_sign_code_unique,
};

/// Applies a command to the current records, producing new records and
/// an outcome describing what changed.
///
/// The input record set is never mutated; callers swap in
/// `new_records` only once the matching store writes have succeeded.
///
/// # Arguments
///
/// * `records` - The current record set (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new records and outcome
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The command violates a domain rule
/// - A targeted record does not exist
#[allow(clippy::too_many_lines)]
pub fn apply(records: &RecordSet, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::CreateCallSign { id, code } => {
            validate_call_sign_code_unique(&code, &records.call_signs, None)?;

            let call_sign: CallSign = CallSign::new(id, code);

            let mut new_records: RecordSet = records.clone();
            new_records.call_signs.push(call_sign.clone());

            Ok(TransitionResult {
                new_records,
                outcome: TransitionOutcome::CallSignCreated { call_sign },
            })
        }
        Command::UpdateCallSign {
            id,
            code,
            is_active,
        } => {
            if records.find_call_sign(&id).is_none() {
                return Err(CoreError::CallSignNotFound(id.value().to_owned()));
            }
            validate_call_sign_code_unique(&code, &records.call_signs, Some(&id))?;

            let mut new_records: RecordSet = records.clone();
            let Some(call_sign) = new_records.call_signs.iter_mut().find(|cs| cs.id == id) else {
                return Err(CoreError::CallSignNotFound(id.value().to_owned()));
            };
            call_sign.code = code;
            call_sign.is_active = is_active;
            let updated: CallSign = call_sign.clone();

            Ok(TransitionResult {
                new_records,
                outcome: TransitionOutcome::CallSignUpdated { call_sign: updated },
            })
        }
        Command::DeleteCallSign { id } => {
            if records.find_call_sign(&id).is_none() {
                return Err(CoreError::CallSignNotFound(id.value().to_owned()));
            }

            // Cascade order: participations, manual count, then the
            // call sign itself. The store layer sequences its row
            // deletes the same way.
            let mut new_records: RecordSet = records.clone();
            let before_participations: usize = new_records.event_participations.len();
            new_records
                .event_participations
                .retain(|p| p.call_sign_id != id);
            let removed_participations: usize =
                before_participations - new_records.event_participations.len();

            let before_counts: usize = new_records.manual_participation_counts.len();
            new_records
                .manual_participation_counts
                .retain(|mc| mc.call_sign_id != id);
            let removed_manual_count: bool =
                new_records.manual_participation_counts.len() < before_counts;

            new_records.call_signs.retain(|cs| cs.id != id);

            Ok(TransitionResult {
                new_records,
                outcome: TransitionOutcome::CallSignDeleted {
                    id,
                    removed_participations,
                    removed_manual_count,
                },
            })
        }
        Command::SubmitParticipation {
            id,
            call_sign_id,
            date,
            departure_airport,
            arrival_airport,
            submitted_at,
        } => {
            let Some(call_sign) = records.find_call_sign(&call_sign_id) else {
                return Err(CoreError::CallSignNotFound(
                    call_sign_id.value().to_owned(),
                ));
            };
            let call_sign: CallSign = call_sign.clone();

            let participation: EventParticipation = EventParticipation::new_pending(
                id,
                call_sign_id,
                date,
                departure_airport,
                arrival_airport,
                submitted_at,
            );

            let mut new_records: RecordSet = records.clone();
            new_records.event_participations.push(participation.clone());

            Ok(TransitionResult {
                new_records,
                outcome: TransitionOutcome::ParticipationSubmitted {
                    participation,
                    call_sign,
                },
            })
        }
        Command::ApproveParticipation { id, approved_at } => {
            let Some(existing) = records.find_participation(&id) else {
                return Err(CoreError::ParticipationNotFound(id.value().to_owned()));
            };
            let call_sign_id = existing.call_sign_id.clone();
            let Some(call_sign) = records.find_call_sign(&call_sign_id) else {
                return Err(CoreError::CallSignNotFound(
                    call_sign_id.value().to_owned(),
                ));
            };
            let call_sign: CallSign = call_sign.clone();

            let previous_count: u32 = participation_count(records, &call_sign_id);

            let mut new_records: RecordSet = records.clone();
            let Some(participation) = new_records
                .event_participations
                .iter_mut()
                .find(|p| p.id == id)
            else {
                return Err(CoreError::ParticipationNotFound(id.value().to_owned()));
            };
            participation.approve(approved_at);
            let participation: EventParticipation = participation.clone();

            let new_count: u32 = participation_count(&new_records, &call_sign_id);
            let milestone: Option<u32> = detect_milestone(previous_count, new_count);

            Ok(TransitionResult {
                new_records,
                outcome: TransitionOutcome::ParticipationApproved(ApprovalOutcome {
                    participation,
                    call_sign,
                    previous_count,
                    new_count,
                    milestone,
                }),
            })
        }
        Command::RejectParticipation { id } => {
            if records.find_participation(&id).is_none() {
                return Err(CoreError::ParticipationNotFound(id.value().to_owned()));
            }

            let mut new_records: RecordSet = records.clone();
            new_records.event_participations.retain(|p| p.id != id);

            Ok(TransitionResult {
                new_records,
                outcome: TransitionOutcome::ParticipationRejected { id },
            })
        }
        Command::EditParticipation {
            id,
            call_sign_id,
            date,
            departure_airport,
            arrival_airport,
            is_approved,
            edited_at,
        } => {
            if records.find_participation(&id).is_none() {
                return Err(CoreError::ParticipationNotFound(id.value().to_owned()));
            }
            if records.find_call_sign(&call_sign_id).is_none() {
                return Err(CoreError::CallSignNotFound(
                    call_sign_id.value().to_owned(),
                ));
            }

            let mut new_records: RecordSet = records.clone();
            let Some(participation) = new_records
                .event_participations
                .iter_mut()
                .find(|p| p.id == id)
            else {
                return Err(CoreError::ParticipationNotFound(id.value().to_owned()));
            };
            participation.call_sign_id = call_sign_id;
            participation.date = date;
            participation.departure_airport = departure_airport;
            participation.arrival_airport = arrival_airport;
            participation.set_approval(is_approved, edited_at);
            let participation: EventParticipation = participation.clone();

            Ok(TransitionResult {
                new_records,
                outcome: TransitionOutcome::ParticipationEdited { participation },
            })
        }
        Command::SetManualCount {
            id,
            call_sign_id,
            count,
            updated_at,
        } => {
            if records.find_call_sign(&call_sign_id).is_none() {
                return Err(CoreError::CallSignNotFound(
                    call_sign_id.value().to_owned(),
                ));
            }

            let mut new_records: RecordSet = records.clone();
            let existing = new_records
                .manual_participation_counts
                .iter_mut()
                .find(|mc| mc.call_sign_id == call_sign_id);

            let (manual_count, created) = match existing {
                Some(record) => {
                    record.count = count;
                    record.updated_at = updated_at;
                    (record.clone(), false)
                }
                None => {
                    let record: ManualParticipationCount =
                        ManualParticipationCount::new(id, call_sign_id, count, updated_at);
                    new_records
                        .manual_participation_counts
                        .push(record.clone());
                    (record, true)
                }
            };

            Ok(TransitionResult {
                new_records,
                outcome: TransitionOutcome::ManualCountSet {
                    manual_count,
                    created,
                },
            })
        }
    }
}
