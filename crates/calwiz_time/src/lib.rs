//! Civil-calendar arithmetic for the CalWiz engine.
//!
//! Provides `CalendarDate`, the canonical date representation used by the
//! numerology and astrology layers, plus the proleptic-Gregorian day counts
//! everything else is derived from. All functions are pure and total over
//! in-range dates; range validation happens at the parsing boundary, not
//! here.

pub mod date;
pub mod names;

pub use date::{
    CalendarDate, civil_from_days, day_of_year, days_from_civil, days_in_month, is_leap_year,
    minute_of_day, month_after, month_before, weekday,
};
pub use names::{MONTH_NAMES, WEEKDAY_NAMES};
