//! Operand sampling shared by every level.
//!
//! Draw order from the source is fixed: `a`, `b` (redrawn while equal to
//! `a`), `n`, `m`. Scripted sources and seeded replays depend on it.

use std::ops::RangeInclusive;

use crate::quiz_engine::{models::Operands, source::IntSource};

pub const NUMERATOR_RANGE: RangeInclusive<u32> = 1..=5;
pub const DENOMINATOR_RANGE: RangeInclusive<u32> = 2..=6;
pub const EXPONENT_RANGE: RangeInclusive<u32> = 2..=4;
pub const SECOND_EXPONENT_RANGE: RangeInclusive<u32> = 2..=3;

/// Strip one factor of 2, then one factor of 3, when both sides share it.
///
/// Not a full reduction: `(4, 8)` only becomes `(2, 4)`.
pub fn reduce_once(a: u32, b: u32) -> (u32, u32) {
    let (mut a, mut b) = (a, b);
    if a % 2 == 0 && b % 2 == 0 {
        a /= 2;
        b /= 2;
    }
    if a % 3 == 0 && b % 3 == 0 {
        a /= 3;
        b /= 3;
    }
    (a, b)
}

/// Draw a fresh set of operands.
pub fn draw<S: IntSource + ?Sized>(source: &mut S) -> Operands {
    let raw_numerator = source.next_in_range(NUMERATOR_RANGE);
    let mut raw_denominator = source.next_in_range(DENOMINATOR_RANGE);
    while raw_denominator == raw_numerator {
        raw_denominator = source.next_in_range(DENOMINATOR_RANGE);
    }
    let (numerator, denominator) = reduce_once(raw_numerator, raw_denominator);

    let exponent = source.next_in_range(EXPONENT_RANGE);
    let second_exponent = source.next_in_range(SECOND_EXPONENT_RANGE);

    Operands {
        raw_numerator,
        raw_denominator,
        numerator,
        denominator,
        exponent,
        second_exponent,
    }
}

/// Operands known to give four distinct candidates on every level.
pub fn fallback() -> Operands {
    Operands {
        raw_numerator: 2,
        raw_denominator: 3,
        numerator: 2,
        denominator: 3,
        exponent: 2,
        second_exponent: 3,
    }
}
