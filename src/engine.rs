use bon::Builder;
use log::debug;

use crate::combination::combination;
use crate::derangement::DerangementMethod;
use crate::factorial::FactorialMethod;
use crate::operand::{natural, Operand};
use crate::permutation::permutation;
use crate::util::{BigUint, Error, Result};
use crate::DEFAULT_MAX_INPUT;

/// Exact combinatorial counts with a configurable input ceiling and
/// algorithm choice.
///
/// Every operand is validated against `max_input` before any arithmetic
/// happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Builder)]
pub struct Engine {
    #[builder(default = DEFAULT_MAX_INPUT)]
    max_input: u64,
    #[builder(default)]
    factorial: FactorialMethod,
    #[builder(default)]
    derangement: DerangementMethod,
}

impl Default for Engine {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Engine {
    #[must_use]
    pub fn max_input(&self) -> u64 {
        self.max_input
    }

    #[must_use]
    pub fn factorial_method(&self) -> FactorialMethod {
        self.factorial
    }

    #[must_use]
    pub fn derangement_method(&self) -> DerangementMethod {
        self.derangement
    }

    pub fn factorial<N>(&self, n: N) -> Result<BigUint>
    where
        N: Operand,
    {
        let n = self.operand("n", n)?;
        debug!("factorial n={n} method={:?}", self.factorial);
        Ok(self.factorial.eval(n))
    }

    pub fn permutation<N, K>(&self, n: N, k: K, repetition: bool) -> Result<BigUint>
    where
        N: Operand,
        K: Operand,
    {
        let n = self.operand("n", n)?;
        let k = self.operand("k", k)?;
        debug!("permutation n={n} k={k} repetition={repetition}");
        Ok(permutation(n, k, repetition, self.factorial))
    }

    pub fn combination<N, K>(&self, n: N, k: K, repetition: bool) -> Result<BigUint>
    where
        N: Operand,
        K: Operand,
    {
        let n = self.operand("n", n)?;
        let k = self.operand("k", k)?;
        debug!("combination n={n} k={k} repetition={repetition}");
        combination(n, k, repetition, self.factorial).map_err(|e| Error::invalid_input("k", e))
    }

    pub fn derangement<N>(&self, n: N) -> Result<BigUint>
    where
        N: Operand,
    {
        let n = self.operand("n", n)?;
        debug!("derangement n={n} method={:?}", self.derangement);
        Ok(self.derangement.eval(n, self.factorial))
    }

    fn operand<T>(&self, name: &'static str, value: T) -> Result<u64>
    where
        T: Operand,
    {
        natural(value, self.max_input).map_err(|e| Error::invalid_input(name, e))
    }
}
