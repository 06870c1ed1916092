//! Chinese zodiac: a plain 12-year cycle anchored at 1900 (Rat).
//!
//! The real cycle turns at Lunar New Year; this approximation turns at
//! January 1 by construction.

/// The 12 Chinese zodiac signs starting from Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChineseSign {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 signs in cycle order (0 = Rat, 11 = Pig).
pub const ALL_CHINESE_SIGNS: [ChineseSign; 12] = [
    ChineseSign::Rat,
    ChineseSign::Ox,
    ChineseSign::Tiger,
    ChineseSign::Rabbit,
    ChineseSign::Dragon,
    ChineseSign::Snake,
    ChineseSign::Horse,
    ChineseSign::Goat,
    ChineseSign::Monkey,
    ChineseSign::Rooster,
    ChineseSign::Dog,
    ChineseSign::Pig,
];

impl ChineseSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// 0-based cycle index (Rat = 0 .. Pig = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Rat => 0,
            Self::Ox => 1,
            Self::Tiger => 2,
            Self::Rabbit => 3,
            Self::Dragon => 4,
            Self::Snake => 5,
            Self::Horse => 6,
            Self::Goat => 7,
            Self::Monkey => 8,
            Self::Rooster => 9,
            Self::Dog => 10,
            Self::Pig => 11,
        }
    }
}

impl std::fmt::Display for ChineseSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign of a calendar year: `(year - 1900) mod 12`, negatives wrapped.
pub fn chinese_sign_for_year(year: i32) -> ChineseSign {
    let mut idx = (i64::from(year) - 1900) % 12;
    if idx < 0 {
        idx += 12;
    }
    ALL_CHINESE_SIGNS[idx as usize]
}
