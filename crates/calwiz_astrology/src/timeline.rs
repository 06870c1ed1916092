//! Daily astrological timeline: simulated per-planet sign placements,
//! an aggregate alignment score, and a 15-minute sweep over a day.
//!
//! A second, coarser position model than `alignment`: each body advances at
//! `(index + 1) * 0.986` degrees per day plus a shared quarter-degree per
//! minute, then snaps to whole degrees before sign/house bucketing. The two
//! models intentionally disagree; they drive different views.

use calwiz_time::CalendarDate;

use crate::moon::moon_phase_percent;
use crate::planets::{ALL_PLANETS, Planet, planetary_hour};
use crate::zodiac::{ALL_ZODIAC_SIGNS, ZodiacSign};

/// A body's simulated sign placement at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedPosition {
    pub planet: Planet,
    /// Whole degrees within the sign, [0, 29].
    pub degree_in_sign: u32,
    pub sign: ZodiacSign,
    /// House number, 1..=12.
    pub house: u32,
    pub retrograde: bool,
}

/// Qualitative grade of an alignment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentGrade {
    Challenging,
    Fair,
    Good,
    Excellent,
}

impl AlignmentGrade {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Challenging => "Challenging",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

/// One sample of the daily timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSample {
    pub hour: u32,
    pub minute: u32,
    /// Phase percent [0, 100).
    pub moon_phase: f64,
    /// Simulated solar longitude, [0, 360).
    pub sun_position_deg: f64,
    pub planetary_hour: Planet,
    /// Alignment score, 0..=100.
    pub alignment: u32,
    pub positions: [SimulatedPosition; 7],
}

impl TimelineSample {
    /// `HH:MM` label for the sample.
    pub fn time_label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Simulated placements of all 7 bodies at (day-of-year, minute-of-day).
pub fn simulated_positions(day_of_year: u32, minute_of_day: u32) -> [SimulatedPosition; 7] {
    let mut out = [SimulatedPosition {
        planet: Planet::Sun,
        degree_in_sign: 0,
        sign: ZodiacSign::Aries,
        house: 1,
        retrograde: false,
    }; 7];

    for (i, planet) in ALL_PLANETS.into_iter().enumerate() {
        let base = (f64::from(day_of_year) * (i as f64 + 1.0) * 0.986
            + f64::from(minute_of_day) * 0.25)
            .rem_euclid(360.0);
        let degree = base.floor() as u32;
        let sign_index = (degree / 30).min(11);
        let house = ((degree + 180) / 30) % 12 + 1;
        // Only the planets beyond the luminaries go retrograde, on a cycle
        // that lengthens with distance.
        let retrograde = i > 1 && day_of_year % (60 + i as u32 * 20) < 20;

        out[i] = SimulatedPosition {
            planet,
            degree_in_sign: degree % 30,
            sign: ALL_ZODIAC_SIGNS[sign_index as usize],
            house,
            retrograde,
        };
    }
    out
}

/// Aggregate alignment score 0..=100 for a set of placements.
///
/// Base 50. Each sign shared by more than one body adds 5 per occupant;
/// each pair of bodies whose signs sit 4 or 8 apart (a whole-sign trine)
/// adds 8; each retrograde body subtracts 3.
pub fn alignment_score(positions: &[SimulatedPosition]) -> u32 {
    let mut score: i32 = 50;

    let mut sign_counts = [0u32; 12];
    for p in positions {
        sign_counts[p.sign.index() as usize] += 1;
    }
    for count in sign_counts {
        if count > 1 {
            score += (count * 5) as i32;
        }
    }

    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let diff =
                i32::from(positions[i].sign.index()).abs_diff(positions[j].sign.index().into());
            if diff == 4 || diff == 8 {
                score += 8;
            }
        }
    }

    for p in positions {
        if p.retrograde {
            score -= 3;
        }
    }

    score.clamp(0, 100) as u32
}

/// Grade bands: >= 75 Excellent, >= 50 Good, >= 25 Fair, else Challenging.
pub const fn alignment_grade(score: u32) -> AlignmentGrade {
    if score >= 75 {
        AlignmentGrade::Excellent
    } else if score >= 50 {
        AlignmentGrade::Good
    } else if score >= 25 {
        AlignmentGrade::Fair
    } else {
        AlignmentGrade::Challenging
    }
}

/// One sample at (date, hour, minute).
pub fn sample_at(date: CalendarDate, hour: u32, minute: u32) -> TimelineSample {
    let day_of_year = date.day_of_year();
    let minute_of_day = hour * 60 + minute;
    let positions = simulated_positions(day_of_year, minute_of_day);

    TimelineSample {
        hour,
        minute,
        moon_phase: moon_phase_percent(date, minute_of_day),
        sun_position_deg: (f64::from(day_of_year) * 0.986).rem_euclid(360.0),
        planetary_hour: planetary_hour(hour),
        alignment: alignment_score(&positions),
        positions,
    }
}

/// Sweep a whole day at 15-minute intervals: 96 samples.
pub fn sample_day(date: CalendarDate) -> Vec<TimelineSample> {
    let mut samples = Vec::with_capacity(96);
    for hour in 0..24 {
        for minute in (0..60).step_by(15) {
            samples.push(sample_at(date, hour, minute));
        }
    }
    samples
}
