//! Read-only collaborator access: the [`ScheduleStore`] port and an
//! in-memory snapshot implementation.
//!
//! The calculator never talks to a datastore directly; it reads through this
//! trait so the core stays pure and testable without live persistence.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Appointment, AvailabilityWindow, EstablishmentId, Holiday, ProfessionalId,
};
use crate::error::Result;

/// Read-only access to the externally-owned scheduling records.
///
/// A failing read is a system error and propagates unchanged: the calculator
/// performs no retries and returns no partial results. Reads are assumed
/// idempotent and consistent for the duration of one computation.
pub trait ScheduleStore {
    /// Whether the establishment is closed on `date`.
    fn is_holiday(&self, establishment_id: EstablishmentId, date: NaiveDate) -> Result<bool>;

    /// Recurring weekly windows for `(professional, day_of_week)`, ordered by
    /// start time ascending. `day_of_week` uses the Sunday=0 convention.
    fn availability(
        &self,
        professional_id: ProfessionalId,
        day_of_week: u8,
    ) -> Result<Vec<AvailabilityWindow>>;

    /// Appointments in an occupying status whose half-open `[start, end)`
    /// interval overlaps `[from, to)` (`a.start < to && a.end > from`),
    /// ordered by start ascending.
    fn occupying_appointments(
        &self,
        professional_id: ProfessionalId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Appointment>>;
}

/// A full schedule snapshot, deserializable from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleData {
    #[serde(default)]
    pub availability: Vec<AvailabilityWindow>,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

/// [`ScheduleStore`] over an in-memory [`ScheduleData`] snapshot.
///
/// Backs the CLI and the test suite. Performs the ordering and occupying-
/// status filtering the trait contract requires.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchedule {
    data: ScheduleData,
}

impl InMemorySchedule {
    pub fn new(data: ScheduleData) -> Self {
        Self { data }
    }
}

impl ScheduleStore for InMemorySchedule {
    fn is_holiday(&self, establishment_id: EstablishmentId, date: NaiveDate) -> Result<bool> {
        Ok(self
            .data
            .holidays
            .iter()
            .any(|h| h.establishment_id == establishment_id && h.matches(date)))
    }

    fn availability(
        &self,
        professional_id: ProfessionalId,
        day_of_week: u8,
    ) -> Result<Vec<AvailabilityWindow>> {
        let mut windows: Vec<AvailabilityWindow> = self
            .data
            .availability
            .iter()
            .filter(|w| w.professional_id == professional_id && w.day_of_week == day_of_week)
            .cloned()
            .collect();
        windows.sort_by_key(|w| w.start_time);
        Ok(windows)
    }

    fn occupying_appointments(
        &self,
        professional_id: ProfessionalId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Appointment>> {
        let mut booked: Vec<Appointment> = self
            .data
            .appointments
            .iter()
            .filter(|a| {
                a.professional_id == professional_id
                    && a.status.is_occupying()
                    && a.start < to
                    && a.end > from
            })
            .cloned()
            .collect();
        booked.sort_by_key(|a| (a.start, a.end));
        Ok(booked)
    }
}
