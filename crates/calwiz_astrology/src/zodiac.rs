//! Western zodiac signs and the 30-day band approximation.
//!
//! The sign is derived from day-of-year alone: 30-day bands offset so that
//! band 0 begins near the March equinox (day 80). This tracks the real
//! zodiac to within a few days, which is all this engine promises.

use calwiz_time::CalendarDate;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Unicode symbol of the sign.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Aries => "\u{2648}",
            Self::Taurus => "\u{2649}",
            Self::Gemini => "\u{264a}",
            Self::Cancer => "\u{264b}",
            Self::Leo => "\u{264c}",
            Self::Virgo => "\u{264d}",
            Self::Libra => "\u{264e}",
            Self::Scorpio => "\u{264f}",
            Self::Sagittarius => "\u{2650}",
            Self::Capricorn => "\u{2651}",
            Self::Aquarius => "\u{2652}",
            Self::Pisces => "\u{2653}",
        }
    }

    /// Display color gradient token consumed by frontends as-is.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Aries => "from-red-500 to-orange-500",
            Self::Taurus => "from-green-500 to-emerald-500",
            Self::Gemini => "from-yellow-500 to-amber-500",
            Self::Cancer => "from-blue-500 to-cyan-500",
            Self::Leo => "from-orange-500 to-yellow-500",
            Self::Virgo => "from-emerald-500 to-green-500",
            Self::Libra => "from-pink-500 to-rose-500",
            Self::Scorpio => "from-purple-500 to-indigo-500",
            Self::Sagittarius => "from-indigo-500 to-purple-500",
            Self::Capricorn => "from-slate-500 to-gray-500",
            Self::Aquarius => "from-cyan-500 to-blue-500",
            Self::Pisces => "from-violet-500 to-purple-500",
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Approximate sign for a one-based day-of-year.
///
/// `index = floor((doy - 80) / 30) mod 12`, negative remainders wrapped by
/// +12. Floor division keeps the early-January band on Capricorn.
pub fn zodiac_for_day_of_year(day_of_year: u32) -> ZodiacSign {
    let offset = i64::from(day_of_year) - 80;
    let mut idx = offset.div_euclid(30) % 12;
    if idx < 0 {
        idx += 12;
    }
    ALL_ZODIAC_SIGNS[idx as usize]
}

/// Approximate sign for a calendar date.
pub fn zodiac_for_date(date: CalendarDate) -> ZodiacSign {
    zodiac_for_day_of_year(date.day_of_year())
}
