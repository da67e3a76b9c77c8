use bigcomb::BigUint;

/// Primes up to `n` by trial division.
pub fn primes(n: u64) -> Vec<u64> {
    let mut found: Vec<u64> = Vec::new();
    for candidate in 2..=n {
        if found
            .iter()
            .take_while(|p| *p * *p <= candidate)
            .all(|p| candidate % p != 0)
        {
            found.push(candidate);
        }
    }
    found
}

/// `n!` from its prime factorisation, using Legendre's formula for the
/// exponent of each prime.
pub fn factorial_by_legendre(n: u64) -> BigUint {
    primes(n)
        .into_iter()
        .map(|p| {
            let mut exponent = 0u32;
            let mut power = p;
            while power <= n {
                exponent += u32::try_from(n / power).unwrap();
                power = match power.checked_mul(p) {
                    Some(x) => x,
                    None => break,
                };
            }
            BigUint::from(p).pow(exponent)
        })
        .product()
}
