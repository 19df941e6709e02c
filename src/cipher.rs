//! Raw RSA over arbitrary-precision integers, plus the naive text codec
//! layered on top of it. There is no padding and no chunking: a message is
//! a single integer and must fit below the modulus.
//!
//! # Usage
//! ```
//! use num_bigint::BigUint;
//! use textbook_rsa::{cipher, key};
//!
//! let key = key::derive_with_exponent(
//!     &BigUint::from(61u32),
//!     &BigUint::from(53u32),
//!     BigUint::from(17u32),
//! )
//! .unwrap();
//!
//! let m = BigUint::from(65u32);
//! let c = cipher::encrypt(&m, &key.public_key()).unwrap();
//! assert_eq!(c, BigUint::from(2790u32));
//!
//! let back = cipher::decrypt(&c, &key.private_key());
//! assert_eq!(back, m);
//! ```

use num_bigint::BigUint;
use thiserror::Error;

use crate::{
    algo,
    key::{PrivateKey, PublicKey},
};

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("ciphertext is not a valid decimal integer")]
    InvalidCiphertext,

    #[error("plaintext does not fit below the modulus")]
    PlaintextTooLarge,
}

/// Encrypts an integer message with the public key.
pub fn encrypt(plaintext: &BigUint, key: &PublicKey) -> Result<BigUint, CipherError> {
    if plaintext >= key.n() {
        return Err(CipherError::PlaintextTooLarge);
    }
    Ok(algo::mod_pow(plaintext, key.e(), key.n()))
}

/// Decrypts an integer ciphertext with the private key.
pub fn decrypt(ciphertext: &BigUint, key: &PrivateKey) -> BigUint {
    algo::mod_pow(ciphertext, key.d(), key.n())
}

/// Encrypts a string and renders the ciphertext as a decimal string.
///
/// The text's UTF-8 bytes are read as one big-endian integer, so the
/// message length is capped by the modulus size.
pub fn encrypt_text(text: &str, key: &PublicKey) -> Result<String, CipherError> {
    let m = BigUint::from_bytes_be(text.as_bytes());
    let c = encrypt(&m, key)?;
    Ok(c.to_string())
}

/// Decrypts a decimal ciphertext string back into text.
///
/// The decode is lenient: bytes that do not form valid UTF-8 are replaced
/// rather than rejected.
pub fn decrypt_text(ciphertext: &str, key: &PrivateKey) -> Result<String, CipherError> {
    let c: BigUint = ciphertext
        .parse()
        .map_err(|_| CipherError::InvalidCiphertext)?;
    let m = decrypt(&c, key);
    Ok(String::from_utf8_lossy(&decode_be_bytes(&m)).into_owned())
}

/// Rebuilds the byte buffer a decrypted integer stands for.
///
/// The buffer holds `bits/8 + 1` bytes. When the leading byte of the value
/// has its high bit set, that is one byte more than the value needs and the
/// buffer keeps an extra zero in front; the lenient decode above carries it
/// through.
fn decode_be_bytes(m: &BigUint) -> Vec<u8> {
    let total = (m.bits() / 8 + 1) as usize;
    let be = m.to_bytes_be();
    let mut buf = vec![0u8; total];
    buf[total - be.len()..].copy_from_slice(&be);
    buf
}
