//! Simulated planetary positions and pairwise aspect detection.
//!
//! Positions are toy orbital angles, linear in day-of-year and minute-of-day
//! per body. Aspects classify the normalized angular difference of each of
//! the C(7,2) = 21 body pairs against four target separations with a fixed
//! 8-degree orb. The orbs do not overlap, so a pair matches at most one
//! aspect type.

use crate::planets::{ALL_PLANETS, Planet};

/// Orb (tolerance) around each aspect target, in degrees.
pub const ASPECT_ORB_DEG: f64 = 8.0;

/// A simulated body position for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Orbital angle in [0, 360).
    pub angle_deg: f64,
    /// Display ring radius (0 for the Sun at center).
    pub distance: u32,
}

/// Named angular relationship between two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectType {
    Conjunction,
    Trine,
    Square,
    Opposition,
}

impl AspectType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Trine => "Trine",
            Self::Square => "Square",
            Self::Opposition => "Opposition",
        }
    }

    /// Target separation in degrees.
    pub const fn target_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Opposition => 180.0,
        }
    }

    /// Fixed display color per type.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Conjunction => "#22c55e",
            Self::Trine => "#3b82f6",
            Self::Square => "#ef4444",
            Self::Opposition => "#f59e0b",
        }
    }
}

impl std::fmt::Display for AspectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A matched aspect between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aspect {
    pub from: Planet,
    pub to: Planet,
    pub aspect: AspectType,
    /// Normalized separation that matched, in [0, 180].
    pub separation_deg: f64,
}

/// Simulated angle of one body: `(doy * c1 + minute * c2) mod 360`.
pub fn planet_angle(planet: Planet, day_of_year: u32, minute_of_day: u32) -> f64 {
    let (day_rate, minute_rate) = planet.rates();
    (f64::from(day_of_year) * day_rate + f64::from(minute_of_day) * minute_rate).rem_euclid(360.0)
}

/// Positions of all 7 bodies at (day-of-year, minute-of-day).
pub fn planet_positions(day_of_year: u32, minute_of_day: u32) -> [PlanetPosition; 7] {
    ALL_PLANETS.map(|planet| PlanetPosition {
        planet,
        angle_deg: planet_angle(planet, day_of_year, minute_of_day),
        distance: planet.ring_distance(),
    })
}

/// Normalize an absolute angular difference to [0, 180].
fn normalized_separation(a_deg: f64, b_deg: f64) -> f64 {
    let diff = (a_deg - b_deg).abs() % 360.0;
    diff.min(360.0 - diff)
}

/// Classify a normalized separation, if it falls inside any orb.
fn classify(separation_deg: f64) -> Option<AspectType> {
    // The four windows are disjoint, so check order cannot matter.
    if separation_deg <= ASPECT_ORB_DEG {
        Some(AspectType::Conjunction)
    } else if (separation_deg - 120.0).abs() <= ASPECT_ORB_DEG {
        Some(AspectType::Trine)
    } else if (separation_deg - 90.0).abs() <= ASPECT_ORB_DEG {
        Some(AspectType::Square)
    } else if (separation_deg - 180.0).abs() <= ASPECT_ORB_DEG {
        Some(AspectType::Opposition)
    } else {
        None
    }
}

/// Detect aspects over all 21 body pairs, in position order.
pub fn detect_aspects(positions: &[PlanetPosition]) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let sep = normalized_separation(positions[i].angle_deg, positions[j].angle_deg);
            if let Some(aspect) = classify(sep) {
                aspects.push(Aspect {
                    from: positions[i].planet,
                    to: positions[j].planet,
                    aspect,
                    separation_deg: sep,
                });
            }
        }
    }
    aspects
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(planet: Planet, angle_deg: f64) -> PlanetPosition {
        PlanetPosition { planet, angle_deg, distance: planet.ring_distance() }
    }

    #[test]
    fn separation_normalizes_to_half_circle() {
        assert!((normalized_separation(10.0, 350.0) - 20.0).abs() < 1e-10);
        assert!((normalized_separation(0.0, 180.0) - 180.0).abs() < 1e-10);
        assert!((normalized_separation(359.0, 1.0) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn conjunction_within_orb() {
        let aspects = detect_aspects(&[pos(Planet::Sun, 0.0), pos(Planet::Moon, 3.0)]);
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].aspect, AspectType::Conjunction);
        assert_eq!(aspects[0].from, Planet::Sun);
        assert_eq!(aspects[0].to, Planet::Moon);
    }

    #[test]
    fn square_at_85_degrees() {
        // 10 and 95 differ by 85, within 8 of 90
        let aspects = detect_aspects(&[pos(Planet::Mars, 10.0), pos(Planet::Venus, 95.0)]);
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].aspect, AspectType::Square);
    }

    #[test]
    fn trine_and_opposition() {
        let aspects = detect_aspects(&[pos(Planet::Sun, 0.0), pos(Planet::Jupiter, 118.0)]);
        assert_eq!(aspects[0].aspect, AspectType::Trine);
        let aspects = detect_aspects(&[pos(Planet::Sun, 5.0), pos(Planet::Saturn, 183.0)]);
        assert_eq!(aspects[0].aspect, AspectType::Opposition);
    }

    #[test]
    fn no_aspect_between_windows() {
        for sep in [9.0, 30.0, 50.0, 81.9, 98.1, 111.9, 128.1, 171.9] {
            assert_eq!(classify(sep), None, "sep {sep} should be unaspected");
        }
    }

    #[test]
    fn orb_boundaries_inclusive() {
        assert_eq!(classify(8.0), Some(AspectType::Conjunction));
        assert_eq!(classify(82.0), Some(AspectType::Square));
        assert_eq!(classify(98.0), Some(AspectType::Square));
        assert_eq!(classify(112.0), Some(AspectType::Trine));
        assert_eq!(classify(128.0), Some(AspectType::Trine));
        assert_eq!(classify(172.0), Some(AspectType::Opposition));
        assert_eq!(classify(180.0), Some(AspectType::Opposition));
    }

    #[test]
    fn at_most_one_aspect_per_pair() {
        // Sweep the whole half circle; classify is a partial function, never
        // ambiguous.
        let mut sep = 0.0;
        while sep <= 180.0 {
            let _ = classify(sep);
            sep += 0.25;
        }
    }

    #[test]
    fn angles_in_range_for_all_planets() {
        for doy in [1, 80, 200, 366] {
            for minute in [0, 720, 1439] {
                for p in planet_positions(doy, minute) {
                    assert!((0.0..360.0).contains(&p.angle_deg), "{:?}", p);
                }
            }
        }
    }

    #[test]
    fn full_pair_count_bound() {
        // With 7 bodies there are exactly 21 candidate pairs.
        let positions = planet_positions(100, 600);
        assert!(detect_aspects(&positions).len() <= 21);
    }

    #[test]
    fn deterministic_for_same_instant() {
        let a = planet_positions(150, 451);
        let b = planet_positions(150, 451);
        assert_eq!(a, b);
        assert_eq!(detect_aspects(&a), detect_aspects(&b));
    }

    #[test]
    fn aspect_colors_fixed() {
        assert_eq!(AspectType::Conjunction.color(), "#22c55e");
        assert_eq!(AspectType::Trine.color(), "#3b82f6");
        assert_eq!(AspectType::Square.color(), "#ef4444");
        assert_eq!(AspectType::Opposition.color(), "#f59e0b");
    }
}
