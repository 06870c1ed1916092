//! Numerology primitives: digit-sum reduction, master numbers, life-path
//! and per-day number calculation, and number-meaning tables.
//!
//! This crate provides:
//! - Digit-sum and master-number-aware reduction (the fixed points are
//!   exactly {1..9, 11, 22, 33})
//! - Birthdate parsing/validation and the life-path number
//! - Per-day primary/secondary/personal numbers
//! - Exhaustive meaning/color tables for every reachable number
//!
//! Everything here is a pure function; persistence of a computed life path
//! lives in `calwiz_store`.

pub mod day_number;
pub mod life_path;
pub mod meaning;
pub mod reduce;

pub use day_number::{DayNumerology, day_numerology};
pub use life_path::{BirthDate, LifePathError, life_path, life_path_from_text, parse_birthdate};
pub use meaning::{
    EnergyLevel, LifeAreaAdvice, NumberMeaning, energy_level, life_area_advice, number_meaning,
};
pub use reduce::{MASTER_NUMBERS, digit_sum, is_master, reduce_master};
