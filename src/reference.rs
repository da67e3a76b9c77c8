//! Native `u64` versions of the counting functions.
//!
//! These follow the same edge-case rules as the exact versions but fail
//! with [`Error::Overflow`] as soon as an intermediate value leaves `u64`.

use crate::util::{Error, Result};

/// `0!` through `20!`; `21!` does not fit in `u64`.
const FACTORIALS: [u64; 21] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5_040,
    40_320,
    362_880,
    3_628_800,
    39_916_800,
    479_001_600,
    6_227_020_800,
    87_178_291_200,
    1_307_674_368_000,
    20_922_789_888_000,
    355_687_428_096_000,
    6_402_373_705_728_000,
    121_645_100_408_832_000,
    2_432_902_008_176_640_000,
];

pub fn fact(n: u64) -> Result<u64> {
    usize::try_from(n)
        .ok()
        .and_then(|i| FACTORIALS.get(i))
        .copied()
        .ok_or(Error::Overflow)
}

pub fn perm(n: u64, k: u64, repetition: bool) -> Result<u64> {
    if repetition {
        if n <= 1 {
            return Ok(if k == 0 { 1 } else { n });
        }
        let exp = u32::try_from(k).map_err(|_| Error::Overflow)?;
        return n.checked_pow(exp).ok_or(Error::Overflow);
    }
    if k > n {
        return Ok(0);
    }
    (0..k).try_fold(1u64, |acc, i| acc.checked_mul(n - i).ok_or(Error::Overflow))
}

pub fn comb(n: u64, k: u64, repetition: bool) -> Result<u64> {
    if repetition {
        if n == 0 {
            return Ok(u64::from(k == 0));
        }
        let top = (n - 1).checked_add(k).ok_or(Error::Overflow)?;
        return comb(top, k, false);
    }
    if k > n {
        return Ok(0);
    }
    let k = k.min(n - k);
    // acc * (n - i) is divisible by i + 1 at every step.
    (0..k).try_fold(1u64, |acc, i| {
        let next = u128::from(acc) * u128::from(n - i) / u128::from(i + 1);
        u64::try_from(next).map_err(|_| Error::Overflow)
    })
}

pub fn derange(n: u64) -> Result<u64> {
    (1..=n).try_fold(1u64, |acc, j| {
        let scaled = acc.checked_mul(j).ok_or(Error::Overflow)?;
        if j % 2 == 0 {
            scaled.checked_add(1).ok_or(Error::Overflow)
        } else {
            Ok(scaled - 1)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_table() {
        assert_eq!(fact(0), Ok(1));
        assert_eq!(fact(5), Ok(120));
        assert_eq!(fact(20), Ok(2_432_902_008_176_640_000));
        assert_eq!(fact(21), Err(Error::Overflow));
        assert_eq!(fact(u64::MAX), Err(Error::Overflow));
        for n in 1..=20 {
            assert_eq!(fact(n), Ok(n * fact(n - 1).unwrap()));
        }
    }

    #[test]
    fn permutations() {
        assert_eq!(perm(5, 3, false), Ok(60));
        assert_eq!(perm(5, 7, false), Ok(0));
        assert_eq!(perm(5, 3, true), Ok(125));
        assert_eq!(perm(0, 0, true), Ok(1));
        assert_eq!(perm(1, u64::MAX, true), Ok(1));
        assert_eq!(perm(0, u64::MAX, true), Ok(0));
        assert_eq!(perm(2, 64, true), Err(Error::Overflow));
        assert_eq!(perm(2, 63, true), Ok(1 << 63));
        assert_eq!(perm(30, 30, false), Err(Error::Overflow));
    }

    #[test]
    fn combinations() {
        assert_eq!(comb(5, 3, false), Ok(10));
        assert_eq!(comb(5, 3, true), Ok(35));
        assert_eq!(comb(0, 0, true), Ok(1));
        assert_eq!(comb(0, 3, true), Ok(0));
        assert_eq!(comb(5, 7, false), Ok(0));
        assert_eq!(comb(60, 30, false), Ok(118_264_581_564_861_424));
        assert_eq!(comb(u64::MAX, 1, false), Ok(u64::MAX));
        assert_eq!(comb(u64::MAX, 2, true), Err(Error::Overflow));
    }

    #[test]
    fn derangements() {
        let expected = [1, 0, 1, 2, 9, 44, 265];
        for (n, d) in expected.into_iter().enumerate() {
            assert_eq!(derange(n as u64), Ok(d));
        }
        assert!(derange(20).is_ok());
        assert_eq!(derange(21), Err(Error::Overflow));
    }
}
