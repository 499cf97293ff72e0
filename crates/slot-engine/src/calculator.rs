//! The slot calculator: per-date free-window computation over a date range.
//!
//! A single deterministic pass of interval arithmetic per professional per
//! day. Holds no state between invocations and mutates nothing; all data
//! flows in through the injected [`ScheduleStore`].

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::calendar;
use crate::domain::{EstablishmentId, ProfessionalId, Slot};
use crate::error::Result;
use crate::intervals::{merge_free, subtract_booked};
use crate::store::ScheduleStore;

/// Computed free slots keyed by calendar date, ascending.
pub type SlotsByDate = BTreeMap<NaiveDate, Vec<Slot>>;

/// Compute merged free slots for every date in `[start_date, end_date]`.
///
/// Each date maps to an ordered, non-overlapping, maximally merged slot
/// list; a holiday or a weekday without availability maps to an empty list.
/// An inverted range yields an empty map (the validating caller rejects it
/// before invoking the core).
///
/// # Errors
/// Propagates any [`ScheduleStore`] read failure unchanged; no partial
/// results are returned.
pub fn compute_free_slots<S: ScheduleStore>(
    store: &S,
    establishment_id: EstablishmentId,
    professional_id: ProfessionalId,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<SlotsByDate> {
    let mut result = SlotsByDate::new();
    for date in calendar::dates(start_date, end_date) {
        let slots = free_slots_for_date(store, establishment_id, professional_id, date)?;
        result.insert(date, slots);
    }
    Ok(result)
}

/// Earliest free slot across `[start_date, end_date]` that can host a
/// service of `duration_minutes`, trimmed to exactly that duration.
///
/// A non-positive duration fits nowhere: trimming to it would break the
/// `start < end` invariant on [`Slot`], so the answer is `None`.
///
/// # Errors
/// Propagates any [`ScheduleStore`] read failure unchanged.
pub fn first_fit<S: ScheduleStore>(
    store: &S,
    establishment_id: EstablishmentId,
    professional_id: ProfessionalId,
    start_date: NaiveDate,
    end_date: NaiveDate,
    duration_minutes: i64,
) -> Result<Option<Slot>> {
    if duration_minutes <= 0 {
        return Ok(None);
    }
    let by_date = compute_free_slots(store, establishment_id, professional_id, start_date, end_date)?;
    for slots in by_date.values() {
        for slot in slots {
            if slot.duration_minutes() >= duration_minutes {
                return Ok(Some(Slot {
                    start: slot.start,
                    end: slot.start + Duration::minutes(duration_minutes),
                }));
            }
        }
    }
    Ok(None)
}

fn free_slots_for_date<S: ScheduleStore>(
    store: &S,
    establishment_id: EstablishmentId,
    professional_id: ProfessionalId,
    date: NaiveDate,
) -> Result<Vec<Slot>> {
    // Holidays take absolute precedence, independent of availability.
    if store.is_holiday(establishment_id, date)? {
        debug!(%date, "establishment holiday, zero availability");
        return Ok(Vec::new());
    }

    let weekday = calendar::day_of_week(date);
    let windows = store.availability(professional_id, weekday)?;
    if windows.is_empty() {
        return Ok(Vec::new());
    }

    // Sweep each window independently and concatenate the raw intervals; a
    // gap between two windows is never bridged at this stage. The day-level
    // merge below operates on the flattened set.
    let mut raw = Vec::new();
    for window in &windows {
        let ws = calendar::at(date, window.start_time);
        let we = calendar::at(date, window.end_time);
        let booked = store.occupying_appointments(professional_id, ws, we)?;
        raw.extend(subtract_booked(ws, we, &booked));
    }

    let slots = merge_free(raw);
    debug!(%date, slots = slots.len(), "computed free slots");
    Ok(slots)
}
