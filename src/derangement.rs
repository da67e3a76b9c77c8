use log::trace;
use num::bigint::Sign;
use num::traits::One;

use crate::factorial::FactorialMethod;
use crate::util::{exact_div, BigInt, BigRatio, BigUint};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DerangementMethod {
    /// `n! * sum_{j=0..n} (-1)^j / j!`, summed as an exact rational.
    #[default]
    Series,
    /// `!n = n * !(n - 1) + (-1)^n`.
    Recurrence,
}

impl DerangementMethod {
    #[must_use]
    pub fn eval(self, n: u64, factorial: FactorialMethod) -> BigUint {
        match self {
            DerangementMethod::Series => by_series(n, factorial),
            DerangementMethod::Recurrence => by_recurrence(n),
        }
    }
}

/// Partial sum `sum_{j=0..n} (-1)^j / j!`.
///
/// The sum is held unreduced over the common denominator `j!`: adding the
/// term `(-1)^j / j!` to `a / (j - 1)!` gives `(a j + (-1)^j) / j!`.
#[must_use]
pub fn alternating_series(n: u64) -> BigRatio {
    let mut numer = BigInt::one();
    let mut denom = BigInt::one();
    for j in 1..=n {
        numer *= j;
        denom *= j;
        if j % 2 == 0 {
            numer += 1u32;
        } else {
            numer -= 1u32;
        }
    }
    BigRatio::new_raw(numer, denom)
}

fn by_series(n: u64, factorial: FactorialMethod) -> BigUint {
    let sum = alternating_series(n);
    trace!(
        "derangement series for n={n}: numerator {} bits, denominator {} bits",
        sum.numer().bits(),
        sum.denom().bits()
    );
    let scaled = sum.numer() * BigInt::from(factorial.eval(n));
    let (sign, value) = exact_div(scaled, sum.denom()).into_parts();
    debug_assert_ne!(sign, Sign::Minus);
    value
}

fn by_recurrence(n: u64) -> BigUint {
    let mut value = BigUint::one();
    for j in 1..=n {
        value *= j;
        if j % 2 == 0 {
            value += 1u32;
        } else {
            // j * !(j - 1) is at least 1 for odd j.
            value -= 1u32;
        }
    }
    value
}
