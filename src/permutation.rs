use num::traits::{Pow, Zero};

use crate::factorial::FactorialMethod;
use crate::util::{exact_div, BigUint};

/// Ordered arrangements of `k` out of `n`.
///
/// With repetition this is `n^k` (so `0^0 = 1`); without it is
/// `n! / (n - k)!`, which is zero once `k > n`.
#[must_use]
pub fn permutation(n: u64, k: u64, repetition: bool, method: FactorialMethod) -> BigUint {
    if repetition {
        return Pow::pow(BigUint::from(n), k);
    }
    if k > n {
        return BigUint::zero();
    }
    exact_div(method.eval(n), &method.eval(n - k))
}
