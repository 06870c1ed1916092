//! Moon phase approximation: percent through a flat 29.53-day cycle
//! measured from the Unix epoch, bucketed into eight named bands.

use calwiz_time::{CalendarDate, days_from_civil};

/// Synodic month length used by the approximation, in days.
pub const SYNODIC_DAYS: f64 = 29.53;

/// The eight named phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::New => "\u{1f311}",
            Self::WaxingCrescent => "\u{1f312}",
            Self::FirstQuarter => "\u{1f313}",
            Self::WaxingGibbous => "\u{1f314}",
            Self::Full => "\u{1f315}",
            Self::WaningGibbous => "\u{1f316}",
            Self::LastQuarter => "\u{1f317}",
            Self::WaningCrescent => "\u{1f318}",
        }
    }
}

/// Phase percent [0, 100) at a date and minute-of-day.
pub fn moon_phase_percent(date: CalendarDate, minute_of_day: u32) -> f64 {
    let epoch_days = days_from_civil(date.year, date.month, date.day) as f64
        + f64::from(minute_of_day) / 1440.0;
    (epoch_days.rem_euclid(SYNODIC_DAYS)) / SYNODIC_DAYS * 100.0
}

/// Band a phase percent into its named phase.
///
/// The top band wraps back to New, so both ends of the cycle read as a new
/// moon.
pub fn moon_phase_name(percent: f64) -> MoonPhase {
    if percent < 6.25 {
        MoonPhase::New
    } else if percent < 18.75 {
        MoonPhase::WaxingCrescent
    } else if percent < 31.25 {
        MoonPhase::FirstQuarter
    } else if percent < 43.75 {
        MoonPhase::WaxingGibbous
    } else if percent < 56.25 {
        MoonPhase::Full
    } else if percent < 68.75 {
        MoonPhase::WaningGibbous
    } else if percent < 81.25 {
        MoonPhase::LastQuarter
    } else if percent < 93.75 {
        MoonPhase::WaningCrescent
    } else {
        MoonPhase::New
    }
}
