use num_bigint::BigUint;
use thiserror::Error;

use crate::{algo, prime, prime::PrimeError};

/// Default public exponent for derived keys.
pub const DEFAULT_EXPONENT: u64 = 65537;

#[derive(Debug, Error)]
pub enum KeyGenError {
    #[error("public exponent is not coprime with the totient")]
    NotCoprime,

    #[error(transparent)]
    Prime(#[from] PrimeError),
}

/// The full key material: modulus `n`, public exponent `e` and private
/// exponent `d`. Immutable once derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretKey {
    n: BigUint,
    e: BigUint,
    d: BigUint,
}

/// The public half of a key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    n: BigUint,
    e: BigUint,
}

/// The private half of a key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    n: BigUint,
    d: BigUint,
}

impl SecretKey {
    /// Projects the public half. Built fresh on every call.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            n: self.n.clone(),
            e: self.e.clone(),
        }
    }

    /// Projects the private half. Built fresh on every call.
    pub fn private_key(&self) -> PrivateKey {
        PrivateKey {
            n: self.n.clone(),
            d: self.d.clone(),
        }
    }

    /// Get a reference to the key's modulus.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Get a reference to the key's public exponent.
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Get a reference to the key's private exponent.
    pub fn d(&self) -> &BigUint {
        &self.d
    }
}

impl PublicKey {
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn e(&self) -> &BigUint {
        &self.e
    }
}

impl PrivateKey {
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn d(&self) -> &BigUint {
        &self.d
    }
}

/// Derives a key pair from two primes with an explicit public exponent.
///
/// Fails when `e` has no inverse modulo `(p-1)(q-1)`. With the default
/// exponent against randomly generated large primes that practically never
/// happens, but a garbage key must not leak out when it does.
#[allow(clippy::many_single_char_names)]
pub fn derive_with_exponent(
    p: &BigUint,
    q: &BigUint,
    e: BigUint,
) -> Result<SecretKey, KeyGenError> {
    let n = p * q;
    let totient = (p - 1u32) * (q - 1u32);
    let d = algo::inv_mod(&e, &totient).ok_or(KeyGenError::NotCoprime)?;
    Ok(SecretKey { n, e, d })
}

/// Derives a key pair from two primes with the default exponent.
pub fn derive(p: &BigUint, q: &BigUint) -> Result<SecretKey, KeyGenError> {
    derive_with_exponent(p, q, BigUint::from(DEFAULT_EXPONENT))
}

/// Generates a fresh key pair from two random 1024-bit probable primes.
pub fn generate() -> Result<SecretKey, KeyGenError> {
    let (p, q) = prime::random_pair()?;
    derive(&p, &q)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn textbook_key_derivation() {
        // p = 61, q = 53, e = 17 is the classic worked example
        let key = derive_with_exponent(&big(61), &big(53), big(17)).unwrap();
        assert_eq!(key.n(), &big(3233));
        assert_eq!(key.e(), &big(17));
        assert_eq!(key.d(), &big(2753));
    }

    #[test]
    fn derive_is_deterministic() {
        let a = derive(&big(61), &big(53)).unwrap();
        let b = derive(&big(61), &big(53)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn exponent_and_inverse_cancel() {
        let key = derive_with_exponent(&big(61), &big(53), big(17)).unwrap();
        for x in [0u64, 1, 2, 42, 65, 1000, 3232] {
            let x = big(x);
            let up = algo::mod_pow(&x, key.e(), key.n());
            let down = algo::mod_pow(&up, key.d(), key.n());
            assert_eq!(down, x);
        }
    }

    #[test]
    fn rejects_non_coprime_exponent() {
        // phi(7 * 13) = 72 shares a factor with e = 6
        let err = derive_with_exponent(&big(7), &big(13), big(6)).unwrap_err();
        assert!(matches!(err, KeyGenError::NotCoprime));
    }

    #[test]
    fn projections_carry_the_same_numbers() {
        let key = derive(&big(61), &big(53)).unwrap();
        let public = key.public_key();
        let private = key.private_key();
        assert_eq!(public.n(), key.n());
        assert_eq!(public.e(), key.e());
        assert_eq!(private.n(), key.n());
        assert_eq!(private.d(), key.d());
    }
}
