//! Generates a key pair, runs the literal "Hello world" through both cipher
//! directions and prints what travelled over the wire.

use std::error::Error;

use base64::{engine::general_purpose::STANDARD, Engine};
use num_bigint::BigUint;
use textbook_rsa::{cipher, key};

fn main() -> Result<(), Box<dyn Error>> {
    let secret = key::generate()?;

    let text = "Hello world";
    let ciphertext = cipher::encrypt_text(text, &secret.public_key())?;

    let as_number: BigUint = ciphertext.parse()?;
    println!("ciphertext bit length: {}", as_number.bits());
    println!("ciphertext (base64):   {}", STANDARD.encode(ciphertext.as_bytes()));

    let recovered = cipher::decrypt_text(&ciphertext, &secret.private_key())?;
    println!("recovered plaintext:   {}", recovered);

    Ok(())
}
