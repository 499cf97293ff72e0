//! Tests for the interval sweep and merge primitives.

use chrono::{DateTime, TimeZone, Utc};
use slot_engine::domain::{Appointment, AppointmentStatus, Slot};
use slot_engine::intervals::{merge_free, subtract_booked};

fn ts(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, hour, min, 0).unwrap()
}

fn appt(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> Appointment {
    Appointment {
        professional_id: 1,
        start: ts(start_h, start_m),
        end: ts(end_h, end_m),
        status: AppointmentStatus::Confirmed,
    }
}

fn slot(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> Slot {
    Slot {
        start: ts(start_h, start_m),
        end: ts(end_h, end_m),
    }
}

// ── subtract_booked ─────────────────────────────────────────────────────────

#[test]
fn empty_booked_yields_whole_window() {
    let free = subtract_booked(ts(9, 0), ts(17, 0), &[]);
    assert_eq!(free, vec![slot(9, 0, 17, 0)]);
}

#[test]
fn one_booked_splits_window_in_two() {
    let free = subtract_booked(ts(9, 0), ts(17, 0), &[appt(10, 0, 11, 0)]);
    assert_eq!(free, vec![slot(9, 0, 10, 0), slot(11, 0, 17, 0)]);
}

#[test]
fn booked_at_window_start_leaves_only_trailing_gap() {
    let free = subtract_booked(ts(9, 0), ts(17, 0), &[appt(9, 0, 12, 0)]);
    assert_eq!(free, vec![slot(12, 0, 17, 0)]);
}

#[test]
fn booked_covering_whole_window_leaves_nothing() {
    let free = subtract_booked(ts(9, 0), ts(17, 0), &[appt(9, 0, 17, 0)]);
    assert!(free.is_empty());
}

#[test]
fn booked_spanning_window_start_is_clamped() {
    // Appointment started before the window opened.
    let free = subtract_booked(ts(9, 0), ts(17, 0), &[appt(8, 0, 10, 30)]);
    assert_eq!(free, vec![slot(10, 30, 17, 0)]);
}

#[test]
fn booked_spanning_window_end_is_clamped() {
    let free = subtract_booked(ts(9, 0), ts(17, 0), &[appt(16, 0, 18, 0)]);
    assert_eq!(free, vec![slot(9, 0, 16, 0)]);
}

#[test]
fn overlapping_booked_intervals_advance_cursor_to_max_end() {
    // Second appointment ends before the first one does; the cursor must not
    // move backwards.
    let free = subtract_booked(
        ts(9, 0),
        ts(17, 0),
        &[appt(10, 0, 13, 0), appt(11, 0, 12, 0)],
    );
    assert_eq!(free, vec![slot(9, 0, 10, 0), slot(13, 0, 17, 0)]);
}

#[test]
fn back_to_back_booked_intervals_leave_no_gap_between() {
    let free = subtract_booked(
        ts(9, 0),
        ts(17, 0),
        &[appt(10, 0, 11, 0), appt(11, 0, 12, 0)],
    );
    assert_eq!(free, vec![slot(9, 0, 10, 0), slot(12, 0, 17, 0)]);
}

// ── merge_free ──────────────────────────────────────────────────────────────

#[test]
fn merge_keeps_disjoint_slots_separate() {
    let merged = merge_free(vec![slot(9, 0, 10, 0), slot(11, 0, 12, 0)]);
    assert_eq!(merged, vec![slot(9, 0, 10, 0), slot(11, 0, 12, 0)]);
}

#[test]
fn merge_joins_exactly_touching_slots() {
    let merged = merge_free(vec![slot(9, 0, 12, 0), slot(12, 0, 17, 0)]);
    assert_eq!(merged, vec![slot(9, 0, 17, 0)]);
}

#[test]
fn merge_joins_overlapping_slots() {
    let merged = merge_free(vec![slot(9, 0, 11, 0), slot(10, 0, 12, 0)]);
    assert_eq!(merged, vec![slot(9, 0, 12, 0)]);
}

#[test]
fn merge_sorts_unordered_input() {
    let merged = merge_free(vec![slot(13, 0, 14, 0), slot(9, 0, 10, 0)]);
    assert_eq!(merged, vec![slot(9, 0, 10, 0), slot(13, 0, 14, 0)]);
}

#[test]
fn merge_drops_degenerate_intervals() {
    let degenerate = slot(10, 0, 10, 0);
    let inverted = Slot {
        start: ts(12, 0),
        end: ts(11, 0),
    };
    let merged = merge_free(vec![slot(9, 0, 10, 0), degenerate, inverted]);
    assert_eq!(merged, vec![slot(9, 0, 10, 0)]);
}

#[test]
fn merge_contained_slot_is_absorbed() {
    let merged = merge_free(vec![slot(9, 0, 17, 0), slot(10, 0, 11, 0)]);
    assert_eq!(merged, vec![slot(9, 0, 17, 0)]);
}

#[test]
fn merge_empty_input_is_empty() {
    assert!(merge_free(vec![]).is_empty());
}
