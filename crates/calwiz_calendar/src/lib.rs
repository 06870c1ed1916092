//! Calendar month enumeration with numerology and astrology attached to
//! every day.
//!
//! This crate composes the lower layers: for a (year, month) it emits the
//! weekday-aligned grid a calendar view renders from, each day carrying its
//! `DayNumerology` and `AstrologyDay`.

pub mod month;

pub use month::{AstrologyDay, CalendarSlot, DayCell, MonthGrid, astrology_day, month_grid};
