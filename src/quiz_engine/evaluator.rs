//! Exact values for terms and problems.
//!
//! Every value here is a signed product of prime powers, so `(4/9)^5` and
//! `(2/3)^10` compare equal and a distractor like `(5/2)^64` never overflows.

use std::collections::BTreeMap;

use crate::quiz_engine::models::{AnswerOption, PowerTerm, Problem, Sign};

/// Canonical rational value: sign plus prime → exponent (negative exponents
/// sit in the denominator). Value 1 has no factors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Value {
    negative: bool,
    factors: BTreeMap<u32, i64>,
}

impl Value {
    pub fn one() -> Self {
        Value { negative: false, factors: BTreeMap::new() }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn mul(&self, other: &Value) -> Value {
        let mut factors = self.factors.clone();
        for (&p, &e) in &other.factors {
            *factors.entry(p).or_insert(0) += e;
        }
        factors.retain(|_, e| *e != 0);
        Value { negative: self.negative != other.negative, factors }
    }

    pub fn pow(&self, k: i64) -> Value {
        if k == 0 {
            return Value::one();
        }
        let factors = self
            .factors
            .iter()
            .map(|(&p, &e)| (p, e * k))
            .collect();
        Value { negative: self.negative && k % 2 != 0, factors }
    }

    /// Reduced `(numerator, denominator)` magnitudes, or `None` if either
    /// side overflows `u128`.
    pub fn fraction(&self) -> Option<(u128, u128)> {
        let mut num: u128 = 1;
        let mut den: u128 = 1;
        for (&p, &e) in &self.factors {
            let exp = u32::try_from(e.unsigned_abs()).ok()?;
            let part = u128::from(p).checked_pow(exp)?;
            if e > 0 {
                num = num.checked_mul(part)?;
            } else {
                den = den.checked_mul(part)?;
            }
        }
        Some((num, den))
    }
}

fn add_prime_factors(mut n: u32, weight: i64, into: &mut BTreeMap<u32, i64>) {
    let mut p = 2u32;
    while p * p <= n {
        while n % p == 0 {
            *into.entry(p).or_insert(0) += weight;
            n /= p;
        }
        p += 1;
    }
    if n > 1 {
        *into.entry(n).or_insert(0) += weight;
    }
}

/// Value of a single term. Magnitudes must be positive.
pub fn term_value(term: &PowerTerm) -> Value {
    debug_assert!(term.numerator > 0 && term.denominator > 0, "zero in {term}");
    let k = i64::from(term.exponent.unwrap_or(1));
    let mut factors = BTreeMap::new();
    add_prime_factors(term.numerator, k, &mut factors);
    add_prime_factors(term.denominator, -k, &mut factors);
    factors.retain(|_, e| *e != 0);
    Value { negative: term.sign == Sign::Negative, factors }
}

/// True value of a problem, computed from the problem alone.
pub fn problem_value(problem: &Problem) -> Value {
    match problem {
        Problem::Power { base }          => term_value(base),
        Problem::Product { left, right } => term_value(left).mul(&term_value(right)),
        Problem::PowerOfPower { inner, outer } => term_value(inner).pow(i64::from(*outer)),
    }
}

/// No two options share a value.
pub fn all_distinct(options: &[AnswerOption]) -> bool {
    let values: Vec<Value> = options.iter().map(|o| term_value(&o.value)).collect();
    values
        .iter()
        .enumerate()
        .all(|(i, v)| values[i + 1..].iter().all(|w| w != v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::Misconception;

    #[test]
    fn equal_values_in_different_shapes_compare_equal() {
        assert_eq!(
            term_value(&PowerTerm::power(4, 9, 5)),
            term_value(&PowerTerm::power(2, 3, 10)),
        );
        assert_eq!(
            term_value(&PowerTerm::fraction(4, 6)),
            term_value(&PowerTerm::fraction(2, 3)),
        );
        assert_eq!(
            term_value(&PowerTerm::power(2, 3, -2)),
            term_value(&PowerTerm::fraction(9, 4)),
        );
    }

    #[test]
    fn zero_exponent_is_one() {
        assert_eq!(term_value(&PowerTerm::power(5, 2, 0)), Value::one());
    }

    #[test]
    fn sign_separates_values() {
        let pos = PowerTerm::fraction(9, 4);
        assert_ne!(term_value(&pos), term_value(&pos.negated()));
        assert!(term_value(&pos.negated()).is_negative());
    }

    #[test]
    fn large_exponents_do_not_overflow() {
        let big = term_value(&PowerTerm::power(5, 2, 64));
        assert_ne!(big, term_value(&PowerTerm::power(5, 2, 63)));
        assert_eq!(big.fraction(), None);
        assert_eq!(term_value(&PowerTerm::power(2, 3, 2)).fraction(), Some((4, 9)));
    }

    #[test]
    fn problem_values_follow_the_rules() {
        let base = PowerTerm::power(2, 3, 2);
        let product = Problem::Product { left: base, right: PowerTerm::power(2, 3, 3) };
        assert_eq!(problem_value(&product), term_value(&PowerTerm::power(2, 3, 5)));

        let tower = Problem::PowerOfPower { inner: base, outer: 3 };
        assert_eq!(problem_value(&tower), term_value(&PowerTerm::power(2, 3, 6)));
    }

    #[test]
    fn all_distinct_catches_hidden_duplicates() {
        let opt = |value| AnswerOption { value, misconception: Misconception::Correct };
        let clash = [
            opt(PowerTerm::fraction(1, 2)),
            opt(PowerTerm::fraction(2, 4)),
            opt(PowerTerm::fraction(1, 4)),
        ];
        assert!(!all_distinct(&clash));
        let fine = [
            opt(PowerTerm::fraction(4, 9)),
            opt(PowerTerm::fraction(4, 3)),
            opt(PowerTerm::fraction(9, 4)),
        ];
        assert!(all_distinct(&fine));
    }
}
