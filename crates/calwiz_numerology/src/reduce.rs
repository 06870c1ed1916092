//! Digit-sum reduction with master-number fixed points.
//!
//! The reduction loop replaces a total with the sum of its decimal digits
//! until it is a single digit or a master number. Digit-summing strictly
//! decreases any value above 9, so the loop always terminates; the master
//! check runs before each summing step, making 11, 22, and 33 fixed points.

/// The master numbers, exempt from further reduction.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Whether `n` is one of the master numbers.
pub const fn is_master(n: u32) -> bool {
    n == 11 || n == 22 || n == 33
}

/// Sum of the decimal digits of `n`.
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    loop {
        sum += n % 10;
        n /= 10;
        if n == 0 {
            return sum;
        }
    }
}

/// Reduce `total` by repeated digit-summing until it is a single digit or
/// a master number. Inputs already at a fixed point are returned unchanged.
pub const fn reduce_master(mut total: u32) -> u32 {
    while total > 9 {
        if is_master(total) {
            return total;
        }
        total = digit_sum(total);
    }
    total
}
