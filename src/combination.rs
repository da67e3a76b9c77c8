use num::traits::{One, Zero};

use crate::factorial::FactorialMethod;
use crate::util::{exact_div, BigUint, Reason};

/// Unordered selections of `k` out of `n`.
///
/// With repetition this is the stars and bars count
/// `(n + k - 1)! / (k! (n - 1)!)`; for `n = 0` only the empty selection
/// exists. Without repetition it is `n! / (k! (n - k)!)`, zero once `k > n`.
///
/// Fails only when `n + k - 1` does not fit in a `u64`.
pub fn combination(
    n: u64,
    k: u64,
    repetition: bool,
    method: FactorialMethod,
) -> Result<BigUint, Reason> {
    if repetition {
        if n == 0 {
            return Ok(if k == 0 {
                BigUint::one()
            } else {
                BigUint::zero()
            });
        }
        let top = (n - 1).checked_add(k).ok_or(Reason::TooLarge {
            limit: u64::MAX - (n - 1),
        })?;
        return Ok(binomial(top, k, n - 1, method));
    }
    if k > n {
        return Ok(BigUint::zero());
    }
    Ok(binomial(n, k, n - k, method))
}

/// `top! / (a! b!)` with `a + b = top`.
fn binomial(top: u64, a: u64, b: u64, method: FactorialMethod) -> BigUint {
    debug_assert_eq!(a + b, top);
    exact_div(method.eval(top), &(method.eval(a) * method.eval(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comb(n: u64, k: u64, repetition: bool) -> BigUint {
        combination(n, k, repetition, FactorialMethod::default()).unwrap()
    }

    #[test]
    fn without_repetition() {
        assert_eq!(comb(5, 3, false), BigUint::from(10u32));
        assert_eq!(comb(5, 0, false), BigUint::one());
        assert_eq!(comb(5, 5, false), BigUint::one());
        assert_eq!(comb(0, 0, false), BigUint::one());
        assert_eq!(comb(52, 5, false), BigUint::from(2_598_960u32));
    }

    #[test]
    fn more_picks_than_items() {
        assert_eq!(comb(5, 7, false), BigUint::zero());
        assert_eq!(comb(0, 1, false), BigUint::zero());
    }

    #[test]
    fn with_repetition() {
        assert_eq!(comb(5, 3, true), BigUint::from(35u32));
        assert_eq!(comb(1, 9, true), BigUint::one());
        assert_eq!(comb(3, 0, true), BigUint::one());
        assert_eq!(comb(5, 7, true), BigUint::from(330u32));
    }

    #[test]
    fn empty_set_with_repetition() {
        assert_eq!(comb(0, 0, true), BigUint::one());
        assert_eq!(comb(0, 3, true), BigUint::zero());
    }

    #[test]
    fn central_binomial() {
        let expected: BigUint = "100891344545564193334812497256".parse().unwrap();
        assert_eq!(comb(100, 50, false), expected);
    }

    #[test]
    fn top_overflow() {
        assert_eq!(
            combination(u64::MAX, 2, true, FactorialMethod::default()),
            Err(Reason::TooLarge { limit: 1 })
        );
    }
}
