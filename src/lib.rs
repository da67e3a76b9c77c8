//! Exact factorials, permutations, combinations and derangements.
//!
//! The crate root exposes the arbitrary-precision versions; [`reference`]
//! holds the native `u64` versions.

mod combination;
mod derangement;
mod engine;
mod factorial;
mod operand;
mod permutation;
pub mod reference;
mod util;

pub use derangement::{alternating_series, DerangementMethod};
pub use engine::Engine;
pub use factorial::FactorialMethod;
pub use operand::Operand;
pub use util::{BigInt, BigRatio, BigUint, Error, Reason, Result};

/// Largest operand accepted by [`Engine::default`].
pub const DEFAULT_MAX_INPUT: u64 = 100_000;

/// `n!`.
pub fn bfact<N>(n: N) -> Result<BigUint>
where
    N: Operand,
{
    Engine::default().factorial(n)
}

/// Ordered arrangements of `k` items out of `n`.
pub fn bperm<N, K>(n: N, k: K, with_repetition: bool) -> Result<BigUint>
where
    N: Operand,
    K: Operand,
{
    Engine::default().permutation(n, k, with_repetition)
}

/// Unordered selections of `k` items out of `n`.
pub fn bcomb<N, K>(n: N, k: K, with_repetition: bool) -> Result<BigUint>
where
    N: Operand,
    K: Operand,
{
    Engine::default().combination(n, k, with_repetition)
}

/// `!n`, permutations of `n` items that leave no item in place.
pub fn bderange<N>(n: N) -> Result<BigUint>
where
    N: Operand,
{
    Engine::default().derangement(n)
}
