//! Domain types consumed and produced by the slot calculator.
//!
//! Everything except [`Slot`] is owned and mutated by external collaborators
//! (persistence, CRUD, payment handling); the calculator only reads these
//! records. `Slot` is the ephemeral output and is never persisted.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Integer primary key of an establishment record in the backing store.
pub type EstablishmentId = i64;
/// Integer primary key of a professional record in the backing store.
pub type ProfessionalId = i64;

/// A recurring weekly open window during which a professional may be booked.
///
/// `day_of_week` uses the domain convention 0 = Sunday .. 6 = Saturday, NOT
/// chrono's Monday-first numbering (see [`crate::calendar::day_of_week`]).
/// Invariant: `start_time < end_time`. Multiple non-overlapping windows may
/// exist per professional per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub professional_id: ProfessionalId,
    pub day_of_week: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// A date on which an establishment is closed, overriding all availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub establishment_id: EstablishmentId,
    pub date: NaiveDate,
    /// Annually recurring (e.g. Christmas): matches the same month and day
    /// in any year.
    #[serde(default)]
    pub is_recurring: bool,
}

impl Holiday {
    /// Whether this holiday closes the establishment on `date`.
    pub fn matches(&self, date: NaiveDate) -> bool {
        if self.is_recurring {
            self.date.month() == date.month() && self.date.day() == date.day()
        } else {
            self.date == date
        }
    }
}

/// Appointment lifecycle states.
///
/// Only the occupying states reserve the professional's time; the terminal
/// states never block a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    PendingPayment,
    Scheduled,
    Confirmed,
    Completed,
    Canceled,
    NoShow,
}

impl AppointmentStatus {
    /// Whether an appointment in this state reserves the professional's time.
    pub fn is_occupying(self) -> bool {
        matches!(
            self,
            AppointmentStatus::PendingPayment
                | AppointmentStatus::Scheduled
                | AppointmentStatus::Confirmed
        )
    }
}

/// A booked appointment with UTC-normalized bounds, treated as the half-open
/// interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub professional_id: ProfessionalId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: AppointmentStatus,
}

/// A computed, contiguous, bookable free interval with `start < end`.
///
/// Serializes start and end as ISO-8601 timestamps with UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Slot {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
