/// Module dedicated to the shared number-theoretic routines: modular
/// exponentiation and the extended Euclidean algorithm
pub mod algo;

/// Module dedicated to the encryption and decryption of messages
pub mod cipher;

/// Module dedicated to the derivation of key pairs
pub mod key;

/// Module dedicated to the prime number generation and verification
pub mod prime;
