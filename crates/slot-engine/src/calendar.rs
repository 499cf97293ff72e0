//! Calendar conventions: weekday numbering, date iteration, UTC combination.
//!
//! The domain numbers weekdays 0 = Sunday .. 6 = Saturday while chrono's
//! `Weekday` is Monday-first. The remap lives here in one explicit function
//! because the mismatch is a classic off-by-one source.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};

/// Map a calendar date to the domain's Sunday=0 weekday index.
pub fn day_of_week(date: NaiveDate) -> u8 {
    use chrono::Datelike;
    match date.weekday() {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}

/// Inclusive ascending iteration over `[start, end]`.
///
/// Empty when `end < start`; the validating caller is expected to have
/// rejected inverted ranges already.
pub fn dates(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |d| d.succ_opt()).take_while(move |d| *d <= end)
}

/// Combine a civil calendar date with a time-of-day into a UTC-normalized
/// timestamp. All interval arithmetic in the calculator happens on these.
pub fn at(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(time))
}
