//! Interval arithmetic primitives for free-slot computation.
//!
//! Two passes: subtracting booked time from a single availability window
//! (left-to-right cursor sweep) and merging the flattened per-day interval
//! set (sort, then fold overlapping or exactly touching neighbors).

use chrono::{DateTime, Utc};

use crate::domain::{Appointment, Slot};

/// Free intervals inside the window `[ws, we)` after removing booked time.
///
/// `booked` must be ordered by start ascending (the store contract) and
/// restricted to occupying statuses. The sweep keeps a `last_end` cursor,
/// emits the gap before each booked interval, then the trailing gap up to
/// the window end. Degenerate intervals are dropped here, never emitted.
pub fn subtract_booked(
    ws: DateTime<Utc>,
    we: DateTime<Utc>,
    booked: &[Appointment],
) -> Vec<Slot> {
    let mut free = Vec::new();
    let mut last_end = ws;

    for appt in booked {
        if appt.start > last_end {
            free.push(Slot {
                start: last_end,
                end: appt.start.min(we),
            });
        }
        last_end = last_end.max(appt.end);
    }

    if we > last_end {
        free.push(Slot { start: last_end, end: we });
    }

    free.retain(|s| s.start < s.end);
    free
}

/// Merge a day's flattened free intervals.
///
/// Operates on the whole-day multiset, not per window: free time from two
/// separate availability windows that ends up numerically contiguous joins
/// into one slot here. Degenerate intervals are filtered before sorting.
pub fn merge_free(mut slots: Vec<Slot>) -> Vec<Slot> {
    slots.retain(|s| s.start < s.end);
    slots.sort_by_key(|s| (s.start, s.end));

    let mut merged: Vec<Slot> = Vec::new();
    for slot in slots {
        if let Some(last) = merged.last_mut() {
            if slot.start <= last.end {
                // Overlapping or exactly touching — extend the current slot.
                last.end = last.end.max(slot.end);
                continue;
            }
        }
        merged.push(slot);
    }

    merged
}
