use std::fmt::Display;

use itertools::Itertools;
use num::integer::Integer;
use num::traits::{One, Zero};
use thiserror::Error;

pub type BigRatio = num::BigRational;
pub type BigInt = num::BigInt;
pub type BigUint = num::BigUint;

pub type Result<T> = ::core::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input `{name}`: {reason}")]
    InvalidInput { name: &'static str, reason: Reason },
    #[error("overflow in native arithmetic")]
    Overflow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Reason {
    #[error("value is missing")]
    Missing,
    #[error("value is negative")]
    Negative,
    #[error("value is not a whole number")]
    NotInteger,
    #[error("value exceeds the input limit {limit}")]
    TooLarge { limit: u64 },
}

impl Error {
    pub fn invalid_input(name: &'static str, reason: Reason) -> Self {
        Error::InvalidInput { name, reason }
    }
}

/// Product of `lo..=hi`, multiplied as a balanced tree so both operands of
/// every multiplication have similar size. Empty ranges give 1.
#[must_use]
pub fn range_product(lo: u64, hi: u64) -> BigUint {
    (lo..=hi)
        .map(BigUint::from)
        .tree_reduce(|a, b| a * b)
        .unwrap_or_else(BigUint::one)
}

/// `dividend / divisor` where the caller knows the division is exact.
#[must_use]
pub fn exact_div<T>(dividend: T, divisor: &T) -> T
where
    T: Integer + Display,
{
    if divisor.is_one() {
        return dividend;
    }
    let (quotient, remainder) = dividend.div_rem(divisor);
    debug_assert!(
        remainder.is_zero(),
        "inexact division leaves remainder {remainder}"
    );
    quotient
}
