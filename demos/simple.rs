//! Ascon-AEAD128 Basic Example
//!
//! Minimal usage: `seal` to encrypt-and-authenticate, `open` to verify
//! and decrypt.

#![allow(clippy::pedantic, clippy::nursery)]

use ascon_aead128::{open, seal, Key, Nonce};

fn main() {
    let key = Key::new([0x00; 16]);
    let nonce = Nonce::new([0x01; 16]);
    let associated_data = b"message header";
    let plaintext = b"Hello, World!";

    let sealed = seal(&key, &nonce, associated_data, plaintext);
    println!("Plaintext: {:?}", String::from_utf8_lossy(plaintext));
    println!("Sealed:    {}", hex::encode(&sealed));

    let recovered = open(&key, &nonce, associated_data, &sealed).expect("tag must verify");
    println!("Recovered: {:?}", String::from_utf8_lossy(&recovered));
}

