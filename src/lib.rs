#![cfg_attr(not(feature = "std"), no_std)]

//! # ascon-aead128
//!
//! Ascon-AEAD128 (NIST SP 800-232): the 320-bit permutation, padding,
//! phase operators and streaming controller, exposed as a one-shot
//! `seal`/`open` pair and an explicit [`AeadCore`] state machine for
//! callers who want phase-by-phase control.
//!
//! # Usage
//! ```rust
//! use ascon_aead128::{seal, open, Key, Nonce};
//!
//! let key = Key::new([0u8; 16]);
//! let nonce = Nonce::new([0u8; 16]);
//!
//! let sealed = seal(&key, &nonce, b"associated data", b"plaintext");
//! let recovered = open(&key, &nonce, b"associated data", &sealed)?;
//! assert_eq!(recovered, b"plaintext");
//! # Ok::<(), ascon_aead128::AeadError>(())
//! ```
//!
//! # Streaming
//! ```rust
//! use ascon_aead128::{AeadCore, Key, Nonce};
//!
//! let key = Key::new([0u8; 16]);
//! let nonce = Nonce::new([0u8; 16]);
//!
//! let mut core = AeadCore::new(&key, &nonce);
//! core.absorb_ad(b"header")?;
//! core.finish_ad()?;
//! let mut ciphertext = [0u8; 5];
//! core.encrypt_chunk(b"hello", &mut ciphertext)?;
//! let tag = core.finish_encrypt()?;
//! # Ok::<(), ascon_aead128::MisuseError>(())
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

mod config;
mod oneshot;
mod padding;
mod permutation;
mod phases;
mod streaming;
mod types;

pub use config::{BusWidth, Unroll};
pub use oneshot::{open, seal};
pub use permutation::AsconState;
pub use streaming::AeadCore;
pub use types::{AeadError, AuthError, Key, MisuseError, Nonce, Tag, KEY_LEN, NONCE_LEN, TAG_LEN};
