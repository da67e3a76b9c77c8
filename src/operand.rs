use std::str::FromStr;

use num::traits::Signed;
use num::{FromPrimitive, ToPrimitive};

use crate::util::{BigInt, BigUint, Reason};

/// A value that can be validated into a natural number.
///
/// Implemented for the native integer types, `BigUint`, `BigInt`, floats
/// holding a whole number, decimal strings, and `Option` of any of these
/// (`None` reads as a missing operand).
pub trait Operand {
    fn into_natural(self) -> Result<BigUint, Reason>;
}

macro_rules! impl_operand_unsigned {
    ($typ:ty) => {
        impl $crate::operand::Operand for $typ {
            fn into_natural(self) -> Result<BigUint, Reason> {
                Ok(BigUint::from(self))
            }
        }
    };
}

macro_rules! impl_operand_signed {
    ($typ:ty) => {
        impl $crate::operand::Operand for $typ {
            fn into_natural(self) -> Result<BigUint, Reason> {
                if self < 0 {
                    return Err(Reason::Negative);
                }
                Ok(BigUint::from(self.unsigned_abs()))
            }
        }
    };
}

macro_rules! impl_operand_float {
    ($typ:ty) => {
        impl $crate::operand::Operand for $typ {
            fn into_natural(self) -> Result<BigUint, Reason> {
                if !self.is_finite() || self.fract() != 0.0 {
                    return Err(Reason::NotInteger);
                }
                if self < 0.0 {
                    return Err(Reason::Negative);
                }
                BigUint::from_f64(f64::from(self)).ok_or(Reason::NotInteger)
            }
        }
    };
}

impl_operand_unsigned!(u8);
impl_operand_unsigned!(u16);
impl_operand_unsigned!(u32);
impl_operand_unsigned!(u64);
impl_operand_unsigned!(u128);
impl_operand_unsigned!(usize);
impl_operand_signed!(i8);
impl_operand_signed!(i16);
impl_operand_signed!(i32);
impl_operand_signed!(i64);
impl_operand_signed!(i128);
impl_operand_signed!(isize);
impl_operand_float!(f32);
impl_operand_float!(f64);

impl Operand for BigUint {
    fn into_natural(self) -> Result<BigUint, Reason> {
        Ok(self)
    }
}

impl Operand for &BigUint {
    fn into_natural(self) -> Result<BigUint, Reason> {
        Ok(self.clone())
    }
}

impl Operand for BigInt {
    fn into_natural(self) -> Result<BigUint, Reason> {
        if self.is_negative() {
            return Err(Reason::Negative);
        }
        Ok(self.into_parts().1)
    }
}

impl Operand for &BigInt {
    fn into_natural(self) -> Result<BigUint, Reason> {
        self.clone().into_natural()
    }
}

impl Operand for &str {
    fn into_natural(self) -> Result<BigUint, Reason> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return Err(Reason::Missing);
        }
        BigInt::from_str(trimmed)
            .map_err(|_| Reason::NotInteger)?
            .into_natural()
    }
}

impl Operand for String {
    fn into_natural(self) -> Result<BigUint, Reason> {
        self.as_str().into_natural()
    }
}

impl<T> Operand for Option<T>
where
    T: Operand,
{
    fn into_natural(self) -> Result<BigUint, Reason> {
        self.ok_or(Reason::Missing)?.into_natural()
    }
}

/// Validates `value` and narrows it to `u64`, rejecting anything above `limit`.
pub(crate) fn natural<T>(value: T, limit: u64) -> Result<u64, Reason>
where
    T: Operand,
{
    value
        .into_natural()?
        .to_u64()
        .filter(|x| *x <= limit)
        .ok_or(Reason::TooLarge { limit })
}
