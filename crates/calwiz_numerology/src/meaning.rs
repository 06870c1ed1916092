//! Interpretive meaning tables for day numbers.
//!
//! Exhaustive over the reducer codomain {1..9, 11, 22, 33}; any other value
//! falls back to the entry for 1, preserving the reference lookup behavior.

/// Interpretive profile of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberMeaning {
    pub number: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub energy: &'static str,
    pub focus: [&'static str; 4],
    /// Display color hint (CSS utility token, kept verbatim).
    pub color: &'static str,
}

/// Per-life-area guidance for a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeAreaAdvice {
    pub love: &'static str,
    pub career: &'static str,
    pub health: &'static str,
    pub finance: &'static str,
}

/// Coarse energy band of a primary number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyLevel {
    Dynamic,
    Balanced,
    Introspective,
}

impl EnergyLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dynamic => "Dynamic",
            Self::Balanced => "Balanced",
            Self::Introspective => "Introspective",
        }
    }
}

/// Energy band: >= 7 introspective, >= 4 balanced, else dynamic.
pub const fn energy_level(primary: u32) -> EnergyLevel {
    if primary >= 7 {
        EnergyLevel::Introspective
    } else if primary >= 4 {
        EnergyLevel::Balanced
    } else {
        EnergyLevel::Dynamic
    }
}

const MEANINGS: [NumberMeaning; 12] = [
    NumberMeaning {
        number: 1,
        title: "New Beginnings",
        description: "A day of leadership, independence, and fresh starts. Take initiative and trust your instincts.",
        energy: "Pioneering and assertive",
        focus: ["Start new projects", "Take leadership", "Be independent", "Assert yourself"],
        color: "text-red-500",
    },
    NumberMeaning {
        number: 2,
        title: "Harmony & Balance",
        description: "Focus on partnerships, diplomacy, and cooperation. Great for building relationships.",
        energy: "Cooperative and diplomatic",
        focus: ["Build partnerships", "Practice diplomacy", "Seek balance", "Listen to others"],
        color: "text-orange-500",
    },
    NumberMeaning {
        number: 3,
        title: "Creative Expression",
        description: "A day for creativity, communication, and joy. Express yourself freely and embrace optimism.",
        energy: "Creative and expressive",
        focus: ["Express creativity", "Communicate openly", "Socialize", "Spread joy"],
        color: "text-yellow-500",
    },
    NumberMeaning {
        number: 4,
        title: "Structure & Stability",
        description: "Focus on building foundations, organization, and practical matters. Hard work pays off.",
        energy: "Practical and disciplined",
        focus: ["Organize tasks", "Build foundations", "Work hard", "Be practical"],
        color: "text-green-500",
    },
    NumberMeaning {
        number: 5,
        title: "Change & Freedom",
        description: "Embrace change, adventure, and versatility. Perfect for trying new experiences.",
        energy: "Dynamic and adventurous",
        focus: ["Embrace change", "Seek adventure", "Be flexible", "Try new things"],
        color: "text-blue-500",
    },
    NumberMeaning {
        number: 6,
        title: "Love & Responsibility",
        description: "A day for nurturing, family, and service to others. Focus on home and relationships.",
        energy: "Nurturing and responsible",
        focus: ["Care for others", "Focus on family", "Create harmony", "Be compassionate"],
        color: "text-indigo-500",
    },
    NumberMeaning {
        number: 7,
        title: "Spiritual Insight",
        description: "Time for introspection, analysis, and spiritual growth. Seek deeper understanding.",
        energy: "Analytical and spiritual",
        focus: ["Meditate", "Analyze situations", "Seek wisdom", "Trust intuition"],
        color: "text-purple-500",
    },
    NumberMeaning {
        number: 8,
        title: "Power & Success",
        description: "Focus on achievement, abundance, and material success. Great for business matters.",
        energy: "Ambitious and powerful",
        focus: ["Pursue goals", "Make decisions", "Build wealth", "Show authority"],
        color: "text-pink-500",
    },
    NumberMeaning {
        number: 9,
        title: "Completion & Wisdom",
        description: "A day of endings, compassion, and universal love. Let go and embrace transformation.",
        energy: "Compassionate and wise",
        focus: ["Complete projects", "Show compassion", "Let go", "Help others"],
        color: "text-rose-500",
    },
    NumberMeaning {
        number: 11,
        title: "Master Intuition",
        description: "Heightened spiritual awareness and inspiration. Trust your inner guidance and inspire others.",
        energy: "Inspirational and intuitive",
        focus: ["Trust intuition", "Inspire others", "Seek enlightenment", "Channel creativity"],
        color: "text-cyan-500",
    },
    NumberMeaning {
        number: 22,
        title: "Master Builder",
        description: "Powerful manifestation energy. Turn dreams into reality through practical action.",
        energy: "Visionary and practical",
        focus: ["Build big dreams", "Manifest goals", "Lead projects", "Think globally"],
        color: "text-emerald-500",
    },
    NumberMeaning {
        number: 33,
        title: "Master Teacher",
        description: "Universal love and healing energy. Share wisdom and uplift humanity.",
        energy: "Compassionate and healing",
        focus: ["Teach others", "Heal wounds", "Spread love", "Serve humanity"],
        color: "text-amber-500",
    },
];

const ADVICE: [(u32, LifeAreaAdvice); 12] = [
    (1, LifeAreaAdvice {
        love: "Take the lead in relationships. Express your desires clearly.",
        career: "Perfect day to pitch ideas or start new projects.",
        health: "High energy - great for starting new fitness routines.",
        finance: "Good time for independent financial decisions.",
    }),
    (2, LifeAreaAdvice {
        love: "Focus on listening and understanding your partner.",
        career: "Collaborate and build partnerships for success.",
        health: "Practice gentle activities like yoga or meditation.",
        finance: "Consider joint ventures or shared investments.",
    }),
    (3, LifeAreaAdvice {
        love: "Express your feelings creatively and joyfully.",
        career: "Use your communication skills to shine.",
        health: "Social activities boost your wellbeing.",
        finance: "Creative projects may bring financial rewards.",
    }),
    (4, LifeAreaAdvice {
        love: "Build stability and trust in relationships.",
        career: "Focus on detailed work and long-term planning.",
        health: "Establish healthy routines and habits.",
        finance: "Budget and plan for financial security.",
    }),
    (5, LifeAreaAdvice {
        love: "Keep things exciting and spontaneous.",
        career: "Embrace change and new opportunities.",
        health: "Try varied activities to stay engaged.",
        finance: "Be cautious with impulsive spending.",
    }),
    (6, LifeAreaAdvice {
        love: "Nurture your relationships with care and attention.",
        career: "Help others and take on responsibilities.",
        health: "Focus on self-care and family health.",
        finance: "Invest in home and family needs.",
    }),
    (7, LifeAreaAdvice {
        love: "Seek deeper emotional connections.",
        career: "Research and analysis lead to insights.",
        health: "Mental health and rest are priorities.",
        finance: "Analyze investments carefully before acting.",
    }),
    (8, LifeAreaAdvice {
        love: "Balance power dynamics in relationships.",
        career: "Assert authority and pursue ambitious goals.",
        health: "Manage stress from high achievement drive.",
        finance: "Excellent day for major financial decisions.",
    }),
    (9, LifeAreaAdvice {
        love: "Practice forgiveness and unconditional love.",
        career: "Complete projects and help others succeed.",
        health: "Release stress through compassionate activities.",
        finance: "Consider charitable giving or endings.",
    }),
    (11, LifeAreaAdvice {
        love: "Connect on a spiritual and intuitive level.",
        career: "Inspire others with your vision and ideas.",
        health: "Balance high sensitivity with grounding practices.",
        finance: "Trust intuition but verify with facts.",
    }),
    (22, LifeAreaAdvice {
        love: "Build lasting foundations in relationships.",
        career: "Think big and execute with precision.",
        health: "Channel intense energy into productive activities.",
        finance: "Major opportunities for wealth building.",
    }),
    (33, LifeAreaAdvice {
        love: "Offer unconditional love and healing.",
        career: "Teach, heal, and serve in your work.",
        health: "Focus on holistic healing practices.",
        finance: "Abundance comes through service to others.",
    }),
];

/// Meaning for a number; unknown numbers fall back to the entry for 1.
pub fn number_meaning(num: u32) -> &'static NumberMeaning {
    MEANINGS.iter().find(|m| m.number == num).unwrap_or(&MEANINGS[0])
}

/// Life-area advice for a number; unknown numbers fall back to 1.
pub fn life_area_advice(num: u32) -> &'static LifeAreaAdvice {
    ADVICE
        .iter()
        .find(|(n, _)| *n == num)
        .map(|(_, a)| a)
        .unwrap_or(&ADVICE[0].1)
}
