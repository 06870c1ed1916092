//! Locally generated insight text.
//!
//! Used whenever the webhook is unreachable or unconfigured, so callers
//! always get a readable narrative for a date.

use calwiz_astrology::{chinese_sign_for_year, planetary_influence, zodiac_for_date};
use calwiz_numerology::{DayNumerology, number_meaning};
use calwiz_time::CalendarDate;

use crate::payload::InsightMode;

/// Build a narrative for a date without any network access.
///
/// The numerology mode leans on the number meaning tables; the astrology
/// mode describes the sign and ruling planet for the day.
pub fn fallback_insight(
    mode: InsightMode,
    date: CalendarDate,
    numbers: DayNumerology,
) -> String {
    match mode {
        InsightMode::Numerology => {
            let meaning = number_meaning(numbers.primary);
            let mut text = format!(
                "{} carries the energy of {} — {}. {} Focus today on {}.",
                date.to_iso_string(),
                numbers.primary,
                meaning.title,
                meaning.description,
                meaning.focus.join(", "),
            );
            if let Some(secondary) = numbers.secondary {
                text.push_str(&format!(
                    " The unreduced total {} adds a secondary undertone.",
                    secondary
                ));
            }
            if let Some(personal) = numbers.personal {
                let personal_meaning = number_meaning(personal);
                text.push_str(&format!(
                    " Your personal number for this day is {}, echoing {}.",
                    personal, personal_meaning.title
                ));
            }
            text
        }
        InsightMode::Astrology => {
            let zodiac = zodiac_for_date(date);
            let chinese = chinese_sign_for_year(date.year);
            let planet = planetary_influence(date.day_of_year(), date.day);
            format!(
                "On {} the Sun travels through {}, in a {} year, under the \
                 influence of {}. Let {}'s steadiness and {}'s character color \
                 your choices today.",
                date.to_iso_string(),
                zodiac.name(),
                chinese.name(),
                planet.name(),
                zodiac.name(),
                chinese.name(),
            )
        }
    }
}
