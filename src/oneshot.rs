//! One-shot API layer (component C7): `seal` and `open` over the
//! [`AeadCore`] streaming controller, for callers who already have the
//! whole message in memory and don't need the phase-by-phase interface.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::streaming::AeadCore;
use crate::types::{AeadError, Key, Nonce, Tag, TAG_LEN};

/// Encrypt `plaintext` under `key` and `nonce`, authenticating `associated_data`
/// along with it. Returns the ciphertext (same length as `plaintext`)
/// followed by the 128-bit tag, already concatenated as `C ∥ T`.
///
/// `nonce` must never repeat for the same `key`; this function has no way
/// to check that and will happily produce ciphertext for a reused nonce.
///
/// # Example
/// ```rust
/// use ascon_aead128::{seal, open, Key, Nonce};
///
/// let key = Key::new([0u8; 16]);
/// let nonce = Nonce::new([0u8; 16]);
/// let sealed = seal(&key, &nonce, b"header", b"secret message");
/// let recovered = open(&key, &nonce, b"header", &sealed)?;
/// assert_eq!(recovered, b"secret message");
/// # Ok::<(), ascon_aead128::AeadError>(())
/// ```
#[must_use]
#[allow(clippy::expect_used)] // every expect here is an invariant the controller itself enforces
pub fn seal(key: &Key, nonce: &Nonce, associated_data: &[u8], plaintext: &[u8]) -> Vec<u8> {
    let mut core = AeadCore::new(key, nonce);
    core.absorb_ad(associated_data)
        .expect("fresh AeadCore accepts absorb_ad");
    core.finish_ad().expect("fresh AeadCore accepts finish_ad");

    let mut out = zeroed_vec(plaintext.len() + TAG_LEN);
    let (ciphertext_out, tag_out) = out.split_at_mut(plaintext.len());
    core.encrypt_chunk(plaintext, ciphertext_out)
        .expect("controller just finished AD absorption");
    let tag = core
        .finish_encrypt()
        .expect("controller just finished the message phase");
    tag_out.copy_from_slice(tag.as_bytes());
    out
}

/// Decrypt and verify `sealed` (ciphertext concatenated with its 16-byte
/// tag) under `key`, `nonce`, and `associated_data`.
///
/// Returns the recovered plaintext only if the tag verifies; on failure, no
/// plaintext is released, matching the invariant that authentication
/// failure must never expose recovered bytes.
///
/// # Errors
/// Returns [`AeadError::Misuse`] if `sealed` is shorter than a bare tag, or
/// [`AeadError::Auth`] if the tag does not match.
#[allow(clippy::expect_used)] // every expect here is an invariant the controller itself enforces
pub fn open(
    key: &Key,
    nonce: &Nonce,
    associated_data: &[u8],
    sealed: &[u8],
) -> Result<Vec<u8>, AeadError> {
    if sealed.len() < TAG_LEN {
        return Err(crate::types::MisuseError::InvalidLength {
            what: "sealed",
            expected: TAG_LEN,
            actual: sealed.len(),
        }
        .into());
    }
    let (ciphertext, tag_bytes) = sealed.split_at(sealed.len() - TAG_LEN);
    let tag = Tag::try_from(tag_bytes).expect("split guarantees exactly TAG_LEN bytes");

    let mut core = AeadCore::new(key, nonce);
    core.absorb_ad(associated_data)
        .expect("fresh AeadCore accepts absorb_ad");
    core.finish_ad().expect("fresh AeadCore accepts finish_ad");

    let mut plaintext = zeroed_vec(ciphertext.len());
    core.decrypt_chunk(ciphertext, &mut plaintext)
        .expect("controller just finished AD absorption");
    core.finish_decrypt(&tag)
        .expect("controller just finished the message phase")?;
    Ok(plaintext)
}

fn zeroed_vec(len: usize) -> Vec<u8> {
    let mut v = Vec::new();
    v.resize(len, 0u8);
    v
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn key_and_nonce() -> (Key, Nonce) {
        (Key::new([0x5A; 16]), Nonce::new([0xA5; 16]))
    }

    #[test]
    fn round_trip() {
        let (key, nonce) = key_and_nonce();
        let sealed = seal(&key, &nonce, b"associated", b"plaintext message");
        let recovered = open(&key, &nonce, b"associated", &sealed).expect("must verify");
        assert_eq!(recovered, b"plaintext message");
    }

    #[test]
    fn empty_ad_and_plaintext_round_trips() {
        let (key, nonce) = key_and_nonce();
        let sealed = seal(&key, &nonce, b"", b"");
        assert_eq!(sealed.len(), TAG_LEN);
        let recovered = open(&key, &nonce, b"", &sealed).expect("must verify");
        assert!(recovered.is_empty());
    }

    #[test]
    fn tampered_ciphertext_is_rejected() {
        let (key, nonce) = key_and_nonce();
        let mut sealed = seal(&key, &nonce, b"ad", b"message");
        sealed[0] ^= 0x01;
        assert!(open(&key, &nonce, b"ad", &sealed).is_err());
    }

    #[test]
    fn tampered_associated_data_is_rejected() {
        let (key, nonce) = key_and_nonce();
        let sealed = seal(&key, &nonce, b"ad", b"message");
        assert!(open(&key, &nonce, b"ad-changed", &sealed).is_err());
    }

    #[test]
    fn wrong_nonce_is_rejected() {
        let (key, _) = key_and_nonce();
        let nonce_a = Nonce::new([1u8; 16]);
        let nonce_b = Nonce::new([2u8; 16]);
        let sealed = seal(&key, &nonce_a, b"", b"message");
        assert!(open(&key, &nonce_b, b"", &sealed).is_err());
    }

    #[test]
    fn truncated_input_is_a_misuse_error() {
        let (key, nonce) = key_and_nonce();
        let err = open(&key, &nonce, b"", &[0u8; 4]).unwrap_err();
        assert!(matches!(err, AeadError::Misuse(_)));
    }
}
