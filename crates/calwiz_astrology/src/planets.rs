//! The seven classical bodies and their fixed display/motion constants.
//!
//! Each planet carries a fixed angular-rate pair (degrees per day-of-year,
//! degrees per minute-of-day), a display ring radius, a marker size, and a
//! color. The rates loosely echo real mean motions (Moon fastest, Saturn
//! slowest) but are simulation constants, not ephemeris values.

/// The 7 classical planets in the traditional Chaldean hour order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All 7 planets in order (0 = Sun .. 6 = Saturn).
pub const ALL_PLANETS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
];

impl Planet {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    /// 0-based index (Sun = 0 .. Saturn = 6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
        }
    }

    /// Display color (hex), fixed per body.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Sun => "#FDB813",
            Self::Moon => "#C0C0C0",
            Self::Mercury => "#8C7853",
            Self::Venus => "#FFC649",
            Self::Mars => "#E27B58",
            Self::Jupiter => "#C88B3A",
            Self::Saturn => "#FAD5A5",
        }
    }

    /// Display marker size.
    pub const fn size(self) -> u32 {
        match self {
            Self::Sun => 20,
            Self::Moon => 12,
            Self::Mercury => 8,
            Self::Venus => 12,
            Self::Mars => 10,
            Self::Jupiter => 18,
            Self::Saturn => 16,
        }
    }

    /// Orbit ring radius in the alignment view (Sun sits at the center).
    pub const fn ring_distance(self) -> u32 {
        match self {
            Self::Sun => 0,
            Self::Moon => 40,
            Self::Mercury => 60,
            Self::Venus => 80,
            Self::Mars => 100,
            Self::Jupiter => 120,
            Self::Saturn => 140,
        }
    }

    /// Angular rate pair: (degrees per day-of-year, degrees per minute-of-day).
    pub const fn rates(self) -> (f64, f64) {
        match self {
            Self::Sun => (0.986, 0.041),
            Self::Moon => (13.176, 0.549),
            Self::Mercury => (4.092, 0.171),
            Self::Venus => (1.602, 0.067),
            Self::Mars => (0.524, 0.022),
            Self::Jupiter => (0.083, 0.003),
            Self::Saturn => (0.033, 0.001),
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Planetary hour lord for an hour-of-day: `planet[hour mod 7]`.
pub fn planetary_hour(hour: u32) -> Planet {
    ALL_PLANETS[(hour % 7) as usize]
}

/// Planetary influence of a calendar day: `planet[(doy + day) mod 7]`.
pub fn planetary_influence(day_of_year: u32, day_of_month: u32) -> Planet {
    ALL_PLANETS[((day_of_year + day_of_month) % 7) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_planets_sequential() {
        assert_eq!(ALL_PLANETS.len(), 7);
        for (i, p) in ALL_PLANETS.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
        }
    }

    #[test]
    fn rates_descend_from_moon() {
        // Moon is the fastest body; Saturn the slowest.
        let (moon_day, _) = Planet::Moon.rates();
        let (saturn_day, _) = Planet::Saturn.rates();
        assert!(moon_day > saturn_day);
        assert!((moon_day - 13.176).abs() < 1e-12);
        assert!((saturn_day - 0.033).abs() < 1e-12);
    }

    #[test]
    fn display_constants() {
        assert_eq!(Planet::Sun.color(), "#FDB813");
        assert_eq!(Planet::Sun.ring_distance(), 0);
        assert_eq!(Planet::Saturn.ring_distance(), 140);
        assert_eq!(Planet::Jupiter.size(), 18);
    }

    #[test]
    fn hour_cycle_wraps() {
        assert_eq!(planetary_hour(0), Planet::Sun);
        assert_eq!(planetary_hour(6), Planet::Saturn);
        assert_eq!(planetary_hour(7), Planet::Sun);
        assert_eq!(planetary_hour(23), Planet::Mercury);
    }

    #[test]
    fn influence_formula() {
        // (doy + day) mod 7
        assert_eq!(planetary_influence(1, 1), ALL_PLANETS[2]);
        assert_eq!(planetary_influence(100, 5), ALL_PLANETS[0]);
        assert_eq!(planetary_influence(365, 31), ALL_PLANETS[(365 + 31) % 7]);
    }
}
