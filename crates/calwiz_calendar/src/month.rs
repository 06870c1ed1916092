//! Month-grid builder.
//!
//! The grid starts with `first_weekday` blank slots (0 = Sunday) so day 1
//! lands in its weekday column, followed by one cell per day of the month.
//! "Today" is an injected reference date, not ambient clock state, so the
//! enumeration stays a pure function.

use calwiz_astrology::{
    ChineseSign, Planet, ZodiacSign, chinese_sign_for_year, planetary_influence,
    zodiac_for_day_of_year,
};
use calwiz_numerology::{DayNumerology, day_numerology};
use calwiz_time::{CalendarDate, day_of_year, days_in_month, weekday};

/// Astrology summary of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AstrologyDay {
    pub zodiac: ZodiacSign,
    pub chinese: ChineseSign,
    pub influence: Planet,
}

/// One dated cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayCell {
    /// Day of month, 1-based.
    pub date: u32,
    pub numerology: DayNumerology,
    pub astrology: AstrologyDay,
    pub is_today: bool,
}

/// A grid slot: a leading blank for weekday alignment, or a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalendarSlot {
    Blank,
    Day(DayCell),
}

/// A fully enumerated month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    /// 0-based month index (0 = January).
    pub month0: u32,
    /// Weekday of the 1st, 0 = Sunday.
    pub first_weekday: u32,
    pub days_in_month: u32,
    pub slots: Vec<CalendarSlot>,
}

impl MonthGrid {
    /// Iterate the dated cells, skipping leading blanks.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.slots.iter().filter_map(|slot| match slot {
            CalendarSlot::Day(cell) => Some(cell),
            CalendarSlot::Blank => None,
        })
    }
}

/// Astrology summary for (year, 0-based month, day).
pub fn astrology_day(year: i32, month0: u32, day: u32) -> AstrologyDay {
    let doy = day_of_year(year, month0 + 1, day);
    AstrologyDay {
        zodiac: zodiac_for_day_of_year(doy),
        chinese: chinese_sign_for_year(year),
        influence: planetary_influence(doy, day),
    }
}

/// Enumerate a month.
///
/// `today` is the reference date for the `is_today` flag; pass the real
/// current date for live views or `None` for tests and past months.
pub fn month_grid(
    year: i32,
    month0: u32,
    life_path: Option<u32>,
    today: Option<CalendarDate>,
) -> MonthGrid {
    let first_weekday = weekday(CalendarDate::new(year, month0 + 1, 1));
    let days = days_in_month(year, month0 + 1);

    let mut slots = Vec::with_capacity((first_weekday + days) as usize);
    for _ in 0..first_weekday {
        slots.push(CalendarSlot::Blank);
    }

    for date in 1..=days {
        let is_today = today
            .map(|t| t.day == date && t.month == month0 + 1 && t.year == year)
            .unwrap_or(false);

        slots.push(CalendarSlot::Day(DayCell {
            date,
            numerology: day_numerology(date, month0, year.unsigned_abs(), life_path),
            astrology: astrology_day(year, month0, date),
            is_today,
        }));
    }

    MonthGrid { year, month0, first_weekday, days_in_month: days, slots }
}
