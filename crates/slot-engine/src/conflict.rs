//! Booking-time conflict detection against occupying appointments.
//!
//! The outer layers run this before persisting a new appointment. Adjacent
//! intervals (one ends exactly when the other starts) are NOT conflicts.

use crate::domain::{Appointment, ProfessionalId, Slot};
use crate::error::Result;
use crate::store::ScheduleStore;

/// A detected overlap between a requested slot and an existing appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub existing: Appointment,
    pub overlap_minutes: i64,
}

/// Find all occupying appointments overlapping the requested interval.
///
/// Two intervals overlap iff `a.start < req.end && req.start < a.end`; the
/// store query already applies that test, so every returned appointment is a
/// conflict. The overlap duration is `min(ends) - max(starts)`.
///
/// # Errors
/// Propagates any [`ScheduleStore`] read failure unchanged.
pub fn find_conflicts<S: ScheduleStore>(
    store: &S,
    professional_id: ProfessionalId,
    requested: &Slot,
) -> Result<Vec<Conflict>> {
    let existing = store.occupying_appointments(professional_id, requested.start, requested.end)?;

    let conflicts = existing
        .into_iter()
        .map(|appt| {
            let overlap_start = appt.start.max(requested.start);
            let overlap_end = appt.end.min(requested.end);
            let overlap_minutes = (overlap_end - overlap_start).num_minutes();
            Conflict {
                existing: appt,
                overlap_minutes,
            }
        })
        .collect();

    Ok(conflicts)
}
