//! Per-day numerology: primary, secondary, and personal numbers.

use crate::reduce::{digit_sum, is_master, reduce_master};

/// Numerology outputs for one calendar day.
///
/// `secondary` is the pre-reduction total, present only when it differs
/// from `primary`. `personal` blends the day energy with a life path and is
/// present only when one was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayNumerology {
    pub primary: u32,
    pub secondary: Option<u32>,
    pub personal: Option<u32>,
}

/// Compute the day numbers for (day, 0-based month, year).
///
/// `total = digitsum(day) + digitsum(month0 + 1) + digitsum(year)`; the
/// total is master-aware reduced to the primary. The personal number starts
/// from the *unreduced* total when a secondary exists, matching the
/// reference behavior.
pub fn day_numerology(day: u32, month0: u32, year: u32, life_path: Option<u32>) -> DayNumerology {
    let total = digit_sum(day) + digit_sum(month0 + 1) + digit_sum(year);

    let primary = if is_master(total) { total } else { reduce_master(total) };
    let secondary = (total != primary).then_some(total);

    let personal = life_path.map(|lp| {
        let personal_total = secondary.unwrap_or(primary) + lp;
        if is_master(personal_total) {
            personal_total
        } else {
            reduce_master(personal_total)
        }
    });

    DayNumerology { primary, secondary, personal }
}
