//! Birthdate parsing and the life-path number.
//!
//! Input is free text expected to contain exactly 8 digits (DDMMYYYY);
//! separators and other non-digits are stripped before validation. Only
//! field ranges are checked — no leap-year or month-length cross-check, so
//! 31/02 parses. That looseness is deliberate and matched by the calendar
//! layer never producing such dates itself.

use crate::reduce::{digit_sum, is_master, reduce_master};

/// A validated birthdate. Ranges only: day 1..=31, month 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

/// Birthdate validation errors. Messages are user-facing and stable;
/// callers display them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LifePathError {
    /// Input was empty or all non-digits.
    Empty,
    /// Stripped input did not contain exactly 8 digits.
    BadLength,
    /// Month outside 1..=12.
    MonthRange,
    /// Day outside 1..=31.
    DayRange,
}

impl std::fmt::Display for LifePathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Please enter your birthdate"),
            Self::BadLength => {
                write!(f, "Please enter a valid date in format DD/MM/YYYY")
            }
            Self::MonthRange => write!(f, "Month must be between 1 and 12"),
            Self::DayRange => write!(f, "Day must be between 1 and 31"),
        }
    }
}

impl std::error::Error for LifePathError {}

/// Parse a birthdate from free text (DD/MM/YYYY or any 8-digit layout).
pub fn parse_birthdate(text: &str) -> Result<BirthDate, LifePathError> {
    if text.trim().is_empty() {
        return Err(LifePathError::Empty);
    }

    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 8 {
        return Err(LifePathError::BadLength);
    }

    // 8 ASCII digits; the substring parses cannot fail.
    let day: u32 = digits[0..2].parse().unwrap_or(0);
    let month: u32 = digits[2..4].parse().unwrap_or(0);
    let year: u32 = digits[4..8].parse().unwrap_or(0);

    if !(1..=12).contains(&month) {
        return Err(LifePathError::MonthRange);
    }
    if !(1..=31).contains(&day) {
        return Err(LifePathError::DayRange);
    }

    Ok(BirthDate { day, month, year })
}

/// Life-path number of a birthdate.
///
/// Day, month, and year are digit-summed individually — intermediate sums
/// are *not* master-checked — then the combined total alone is reduced with
/// master-number awareness.
pub fn life_path(birth: BirthDate) -> u32 {
    let total = digit_sum(birth.day) + digit_sum(birth.month) + digit_sum(birth.year);
    if is_master(total) { total } else { reduce_master(total) }
}

/// Parse and compute in one step. Returns the validated birthdate alongside
/// the number so callers can persist the pair.
pub fn life_path_from_text(text: &str) -> Result<(BirthDate, u32), LifePathError> {
    let birth = parse_birthdate(text)?;
    Ok((birth, life_path(birth)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_slashes() {
        let b = parse_birthdate("15/06/1990").unwrap();
        assert_eq!(b, BirthDate { day: 15, month: 6, year: 1990 });
    }

    #[test]
    fn parse_bare_digits() {
        let b = parse_birthdate("29111992").unwrap();
        assert_eq!(b, BirthDate { day: 29, month: 11, year: 1992 });
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(parse_birthdate("").unwrap_err(), LifePathError::Empty);
        assert_eq!(parse_birthdate("   ").unwrap_err(), LifePathError::Empty);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(parse_birthdate("1/1/1990").unwrap_err(), LifePathError::BadLength);
        assert_eq!(parse_birthdate("150619901").unwrap_err(), LifePathError::BadLength);
    }

    #[test]
    fn rejects_month_range() {
        assert_eq!(parse_birthdate("15/13/1990").unwrap_err(), LifePathError::MonthRange);
        assert_eq!(parse_birthdate("15/00/1990").unwrap_err(), LifePathError::MonthRange);
    }

    #[test]
    fn rejects_day_range() {
        assert_eq!(parse_birthdate("32/06/1990").unwrap_err(), LifePathError::DayRange);
        assert_eq!(parse_birthdate("00/06/1990").unwrap_err(), LifePathError::DayRange);
    }

    #[test]
    fn no_month_length_cross_check() {
        // 31 February passes range validation on purpose.
        assert!(parse_birthdate("31/02/1990").is_ok());
    }

    #[test]
    fn life_path_15_06_1990_is_4() {
        // 1+5=6, 0+6=6, 1+9+9+0=19; total 6+6+19=31 → 4
        let (_, n) = life_path_from_text("15/06/1990").unwrap();
        assert_eq!(n, 4);
    }

    #[test]
    fn life_path_29_11_1992() {
        // day 29 → 11 (plain digit sum, no intermediate master check),
        // month 11 → 2, year 1992 → 21; total 34 → 7
        let (_, n) = life_path_from_text("29/11/1992").unwrap();
        assert_eq!(n, 7);
    }

    #[test]
    fn life_path_master_total() {
        // 01/01/1800 → 1 + 1 + 9 = 11, stays 11.
        let (_, n) = life_path_from_text("01/01/1800").unwrap();
        assert_eq!(n, 11);
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            LifePathError::BadLength.to_string(),
            "Please enter a valid date in format DD/MM/YYYY"
        );
        assert_eq!(LifePathError::MonthRange.to_string(), "Month must be between 1 and 12");
        assert_eq!(LifePathError::DayRange.to_string(), "Day must be between 1 and 31");
    }
}
