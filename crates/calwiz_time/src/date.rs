//! Calendar date type and Gregorian day-count primitives.
//!
//! Day-of-year follows the "day 1 = Jan 1" convention the approximation
//! formulas in `calwiz_astrology` were tuned against. Weekday numbering is
//! 0 = Sunday, matching the calendar grid layout.

/// Days elapsed in a non-leap year before each month (index 0 = January).
const CUMULATIVE_DAYS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A civil calendar date. `month` is 1-based (1 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// One-based ordinal day within the year (Jan 1 = 1).
    pub fn day_of_year(&self) -> u32 {
        day_of_year(self.year, self.month, self.day)
    }

    /// Weekday with 0 = Sunday .. 6 = Saturday.
    pub fn weekday(&self) -> u32 {
        weekday(*self)
    }

    /// ISO-style `YYYY-MM-DD` string, used for the insight payload.
    pub fn to_iso_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_iso_string())
    }
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (1-based). February honors leap years.
///
/// Months outside 1..=12 return 0 rather than panicking; callers validate
/// ranges before arithmetic.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// One-based day-of-year (Jan 1 = 1).
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let leap_fix = if month > 2 && is_leap_year(year) { 1 } else { 0 };
    CUMULATIVE_DAYS[(month as usize - 1).min(11)] + leap_fix + day
}

/// Days from the Unix epoch (1970-01-01) to the given civil date.
///
/// Proleptic Gregorian; negative before the epoch. Era-based day counting,
/// valid over the full i32 year range.
pub fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let m = i64::from(month);
    let d = i64::from(day);
    let doy = (153 * (m + if m > 2 { -3 } else { 9 }) + 2) / 5 + d - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Civil date for a day count from the Unix epoch. Inverse of
/// [`days_from_civil`].
pub fn civil_from_days(days: i64) -> CalendarDate {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    CalendarDate {
        year: (y + i64::from(month <= 2)) as i32,
        month,
        day,
    }
}

/// Weekday of a date, 0 = Sunday .. 6 = Saturday.
pub fn weekday(date: CalendarDate) -> u32 {
    // 1970-01-01 was a Thursday (4).
    (days_from_civil(date.year, date.month, date.day) + 4).rem_euclid(7) as u32
}

/// Minute of day, [0, 1439].
pub const fn minute_of_day(hour: u32, minute: u32) -> u32 {
    hour * 60 + minute
}

/// The month before (year, 1-based month), with year carry.
pub const fn month_before(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// The month after (year, 1-based month), with year carry.
pub const fn month_after(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rules() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn day_of_year_jan_first() {
        assert_eq!(day_of_year(2024, 1, 1), 1);
    }

    #[test]
    fn day_of_year_leap_boundary() {
        assert_eq!(day_of_year(2024, 2, 29), 60);
        assert_eq!(day_of_year(2024, 3, 1), 61);
        assert_eq!(day_of_year(2023, 3, 1), 60);
    }

    #[test]
    fn day_of_year_dec_31() {
        assert_eq!(day_of_year(2024, 12, 31), 366);
        assert_eq!(day_of_year(2023, 12, 31), 365);
    }

    #[test]
    fn epoch_day_counts() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1970, 1, 2), 1);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2000, 3, 1), 11017);
    }

    #[test]
    fn civil_from_days_round_trips() {
        for (year, month, day) in [
            (1970, 1, 1),
            (1969, 12, 31),
            (2000, 2, 29),
            (2024, 11, 1),
            (1900, 3, 1),
        ] {
            let days = days_from_civil(year, month, day);
            assert_eq!(civil_from_days(days), CalendarDate::new(year, month, day));
        }
    }

    #[test]
    fn weekday_known_dates() {
        // 1970-01-01 Thursday, 2024-01-01 Monday, 2024-11-01 Friday
        assert_eq!(weekday(CalendarDate::new(1970, 1, 1)), 4);
        assert_eq!(weekday(CalendarDate::new(2024, 1, 1)), 1);
        assert_eq!(weekday(CalendarDate::new(2024, 11, 1)), 5);
        assert_eq!(weekday(CalendarDate::new(2000, 1, 1)), 6);
    }

    #[test]
    fn month_navigation_carries_year() {
        assert_eq!(month_before(2024, 1), (2023, 12));
        assert_eq!(month_before(2024, 6), (2024, 5));
        assert_eq!(month_after(2024, 12), (2025, 1));
        assert_eq!(month_after(2024, 6), (2024, 7));
    }

    #[test]
    fn iso_string_padding() {
        let d = CalendarDate::new(2024, 3, 5);
        assert_eq!(d.to_iso_string(), "2024-03-05");
        assert_eq!(d.to_string(), "2024-03-05");
    }

    #[test]
    fn minute_of_day_bounds() {
        assert_eq!(minute_of_day(0, 0), 0);
        assert_eq!(minute_of_day(23, 59), 1439);
        assert_eq!(minute_of_day(12, 30), 750);
    }
}
