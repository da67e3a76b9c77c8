use num::traits::One;

use crate::util::{range_product, BigUint};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FactorialMethod {
    /// Balanced divide-and-conquer product of `1..=n`.
    #[default]
    ProductTree,
    /// Running product, one small factor at a time.
    Iterative,
}

impl FactorialMethod {
    #[must_use]
    pub fn eval(self, n: u64) -> BigUint {
        match self {
            FactorialMethod::ProductTree => range_product(2, n),
            FactorialMethod::Iterative => (2..=n).fold(BigUint::one(), |acc, x| acc * x),
        }
    }
}
