//! # slot-engine
//!
//! Deterministic free-slot computation for service-establishment booking
//! backends (salons, clinics).
//!
//! Given a professional's recurring weekly availability, establishment
//! holidays, and existing appointments, the calculator produces an ordered,
//! non-overlapping, maximally merged list of bookable free intervals for
//! each calendar date in an inclusive range. The computation is a
//! pure read-then-compute pass: it owns no state, performs no mutation, and
//! reads collaborator data through the injected [`store::ScheduleStore`]
//! port, so it runs safely in parallel for distinct professionals or ranges.
//!
//! ## Modules
//!
//! - [`calculator`] — per-date free-slot computation over a date range
//! - [`calendar`] — Sunday=0 weekday remap and UTC date/time combination
//! - [`conflict`] — booking-time overlap checks against occupying appointments
//! - [`domain`] — availability, holiday, appointment, and slot types
//! - [`intervals`] — window sweep and day-level merge primitives
//! - [`store`] — the read-only collaborator port and an in-memory snapshot
//! - [`error`] — error types

pub mod calculator;
pub mod calendar;
pub mod conflict;
pub mod domain;
pub mod error;
pub mod intervals;
pub mod store;

pub use calculator::{compute_free_slots, first_fit, SlotsByDate};
pub use conflict::{find_conflicts, Conflict};
pub use domain::{
    Appointment, AppointmentStatus, AvailabilityWindow, EstablishmentId, Holiday,
    ProfessionalId, Slot,
};
pub use error::SlotError;
pub use store::{InMemorySchedule, ScheduleData, ScheduleStore};
