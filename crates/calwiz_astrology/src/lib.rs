//! Astrology approximation engine: zodiac bands, Chinese zodiac cycle,
//! planetary hours, simulated planetary positions with aspect detection,
//! moon phase, and the daily astrological timeline.
//!
//! Every formula here is a deliberate fictional approximation, not real
//! ephemeris math. The zodiac
//! band offset (day 80), the 12-year cycle epoch (1900), and the per-planet
//! angular rates are behavioral constants; changing them changes the
//! product, so they must stay exactly as written.

pub mod alignment;
pub mod chinese;
pub mod moon;
pub mod planets;
pub mod ticker;
pub mod timeline;
pub mod zodiac;

pub use alignment::{Aspect, AspectType, PlanetPosition, detect_aspects, planet_positions};
pub use chinese::{ALL_CHINESE_SIGNS, ChineseSign, chinese_sign_for_year};
pub use moon::{MoonPhase, moon_phase_name, moon_phase_percent};
pub use planets::{ALL_PLANETS, Planet, planetary_hour, planetary_influence};
pub use ticker::AlignmentTicker;
pub use timeline::{
    AlignmentGrade, SimulatedPosition, TimelineSample, alignment_grade, alignment_score,
    sample_at, sample_day, simulated_positions,
};
pub use zodiac::{ALL_ZODIAC_SIGNS, ZodiacSign, zodiac_for_date, zodiac_for_day_of_year};
