use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// Modular exponentiation `base^exponent mod modulus` by square-and-multiply.
///
/// Scans the exponent from the least significant bit: every set bit
/// multiplies the accumulator by the running square of the base, and every
/// product is reduced immediately so intermediates never grow past
/// `modulus^2`. An exponent of zero yields 1.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    let mut result = BigUint::one();
    let mut base = base % modulus;
    for i in 0..exponent.bits() {
        if exponent.bit(i) {
            result = &result * &base % modulus;
        }
        base = &base * &base % modulus;
    }
    result
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `a*x + b*y = g = gcd(a, b)`. The Bézout
/// coefficients can be negative, hence the signed return type.
#[allow(clippy::many_single_char_names)]
pub fn ext_gcd(a: &BigUint, b: &BigUint) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (BigInt::from(a.clone()), BigInt::from(b.clone()));
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        let next_s = &old_s - &q * &s;
        let next_t = &old_t - &q * &t;
        old_r = std::mem::replace(&mut r, next_r);
        old_s = std::mem::replace(&mut s, next_s);
        old_t = std::mem::replace(&mut t, next_t);
    }
    (old_r, old_s, old_t)
}

/// Modular inverse of `a` with respect to `n`.
///
/// Returns `None` when `gcd(a, n) != 1` and no inverse exists. The Bézout
/// coefficient lies in `(-n, n)`, so a single addition normalizes it into
/// `[0, n)`.
pub fn inv_mod(a: &BigUint, n: &BigUint) -> Option<BigUint> {
    let (g, x, _) = ext_gcd(a, n);
    if !g.is_one() {
        return None;
    }
    let x = if x.sign() == Sign::Minus {
        x + BigInt::from(n.clone())
    } else {
        x
    };
    Some(x.to_biguint().expect("normalized to non-negative"))
}

#[cfg(test)]
mod tests {
    use num_integer::Integer;

    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn mod_pow_small_cases() {
        assert_eq!(mod_pow(&big(4), &big(13), &big(497)), big(445));
        assert_eq!(mod_pow(&big(3), &big(5), &big(7)), big(5));
        assert_eq!(mod_pow(&big(65), &big(17), &big(3233)), big(2790));
    }

    #[test]
    fn mod_pow_zero_exponent_is_one() {
        assert_eq!(mod_pow(&big(12345), &big(0), &big(17)), big(1));
    }

    #[test]
    fn mod_pow_matches_reference() {
        let cases = [
            (big(2), big(1000), big(10_007)),
            (big(65_537), big(65_537), big(1_000_003)),
            (big(u64::MAX), big(12_345), big(999_999_937)),
        ];
        for (b, e, m) in cases {
            assert_eq!(mod_pow(&b, &e, &m), b.modpow(&e, &m));
        }
    }

    #[test]
    fn ext_gcd_bezout_identity() {
        let pairs = [(240u64, 46u64), (65_537, 3120), (17, 3120), (1071, 462)];
        for (a, b) in pairs {
            let (g, x, y) = ext_gcd(&big(a), &big(b));
            let a = BigInt::from(a);
            let b = BigInt::from(b);
            assert_eq!(&a * &x + &b * &y, g);
            assert_eq!(g, a.gcd(&b));
        }
    }

    #[test]
    fn inv_mod_known_inverse() {
        let inv = inv_mod(&big(3), &big(7)).unwrap();
        assert_eq!(inv, big(5));

        let inv = inv_mod(&big(17), &big(3120)).unwrap();
        assert_eq!(inv, big(2753));
        assert_eq!(big(17) * inv % big(3120), big(1));
    }

    #[test]
    fn inv_mod_rejects_non_coprime() {
        assert!(inv_mod(&big(4), &big(8)).is_none());
        assert!(inv_mod(&big(6), &big(72)).is_none());
    }
}
