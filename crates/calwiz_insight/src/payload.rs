//! Webhook request payload.
//!
//! The wire shape is fixed by the existing webhook consumers:
//! `{"type": "numerology"|"astrology", "date": "YYYY-MM-DD", "data": {...},
//! "userQuestion": null}` — camelCase keys, mode-specific `data` object.

use calwiz_numerology::DayNumerology;
use calwiz_time::CalendarDate;
use serde::Serialize;

/// Which interpretive layer the request is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightMode {
    Numerology,
    Astrology,
}

impl InsightMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Numerology => "numerology",
            Self::Astrology => "astrology",
        }
    }
}

/// Mode-specific payload data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged, rename_all = "camelCase")]
pub enum InsightData {
    #[serde(rename_all = "camelCase")]
    Numerology {
        primary_number: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        secondary_number: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        personal_number: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        life_path_number: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    Astrology {
        zodiac_sign: String,
        chinese_sign: String,
        planetary_influence: String,
    },
}

/// A complete webhook request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    #[serde(rename = "type")]
    pub mode: InsightMode,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub data: InsightData,
    pub user_question: Option<String>,
}

impl InsightRequest {
    /// Numerology request for a date.
    pub fn numerology(
        date: CalendarDate,
        numbers: DayNumerology,
        life_path: Option<u32>,
    ) -> Self {
        Self {
            mode: InsightMode::Numerology,
            date: date.to_iso_string(),
            data: InsightData::Numerology {
                primary_number: numbers.primary,
                secondary_number: numbers.secondary,
                personal_number: numbers.personal,
                life_path_number: life_path,
            },
            user_question: None,
        }
    }

    /// Astrology request for a date.
    pub fn astrology(date: CalendarDate, zodiac: &str, chinese: &str, influence: &str) -> Self {
        Self {
            mode: InsightMode::Astrology,
            date: date.to_iso_string(),
            data: InsightData::Astrology {
                zodiac_sign: zodiac.to_string(),
                chinese_sign: chinese.to_string(),
                planetary_influence: influence.to_string(),
            },
            user_question: None,
        }
    }
}
