use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::Rng;
use thiserror::Error;

use crate::algo;

/// Bit length of the primes backing a generated key pair.
pub const PRIME_BITS: u64 = 1024;

/// Rounds of the probabilistic primality test. A composite slips through
/// with probability at most `2^-CONFIDENCE_ROUNDS`.
pub const CONFIDENCE_ROUNDS: u32 = 100;

/// Candidates drawn before the search gives up. The expected count at 1024
/// bits is a few hundred, so hitting this cap means the RNG is broken.
const MAX_ATTEMPTS: u32 = 100_000;

#[derive(Debug, Error)]
pub enum PrimeError {
    #[error("no prime found after {0} candidates")]
    SearchExhausted(u32),
}

/// Draws a random odd integer of exactly `bits` bits.
pub fn candidate(mut rng: impl Rng, bits: u64) -> BigUint {
    assert!(bits >= 2, "a prime needs at least 2 bits");
    let mut c = rng.gen_biguint(bits);
    c.set_bit(bits - 1, true);
    c.set_bit(0, true);
    c
}

/// Miller-Rabin probable-primality test with `rounds` random witnesses.
pub fn is_probably_prime(n: &BigUint, rounds: u32) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }
    if n == &two || n == &BigUint::from(3u32) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_one = n - 1u32;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let mut rng = rand::thread_rng();
    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = algo::mod_pow(&a, &d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = &x * &x % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Generates a probable prime of exactly `bits` bits by drawing candidates
/// until one passes the test.
pub fn new_prime(bits: u64) -> Result<BigUint, PrimeError> {
    let mut rng = rand::thread_rng();
    for _ in 0..MAX_ATTEMPTS {
        let c = candidate(&mut rng, bits);
        if is_probably_prime(&c, CONFIDENCE_ROUNDS) {
            return Ok(c);
        }
    }
    Err(PrimeError::SearchExhausted(MAX_ATTEMPTS))
}

/// Two independently generated primes for a fresh key pair. The pair is not
/// checked for equality; at this size a collision is negligible.
pub fn random_pair() -> Result<(BigUint, BigUint), PrimeError> {
    let p = new_prime(PRIME_BITS)?;
    let q = new_prime(PRIME_BITS)?;
    Ok((p, q))
}
