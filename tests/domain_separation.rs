//! Domain Separation Tests
//!
//! Validates that the `DOMAIN_SEP` bit flip after associated-data
//! absorption actually changes the tag, for both the one-shot and
//! streaming entry points, and that it fires even with no AD at all.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use ascon_aead128::{open, seal, AeadCore, Key, Nonce};

fn key_nonce() -> (Key, Nonce) {
    (Key::new([0x77; 16]), Nonce::new([0x88; 16]))
}

#[test]
fn test_empty_vs_nonempty_ad_diverge() {
    let (key, nonce) = key_nonce();
    let plaintext = b"payload";

    let empty_ad = seal(&key, &nonce, b"", plaintext);
    let one_byte_ad = seal(&key, &nonce, b"\x00", plaintext);

    assert_ne!(empty_ad, one_byte_ad, "empty vs one-byte AD must diverge");
}

#[test]
fn test_ad_content_changes_tag_not_just_length() {
    let (key, nonce) = key_nonce();
    let plaintext = b"payload";

    let ad_a = seal(&key, &nonce, b"aaaaaaaa", plaintext);
    let ad_b = seal(&key, &nonce, b"bbbbbbbb", plaintext);

    assert_ne!(ad_a, ad_b, "same-length AD with different content must diverge");
}

#[test]
fn test_domain_separation_with_no_plaintext() {
    let (key, nonce) = key_nonce();

    let empty_ad = seal(&key, &nonce, b"", b"");
    let nonempty_ad = seal(&key, &nonce, b"context", b"");

    assert_ne!(
        empty_ad, nonempty_ad,
        "domain separation must still fire when the message is empty"
    );
}

#[test]
fn test_ad_boundary_sizes_all_diverge() {
    let (key, nonce) = key_nonce();
    let plaintext = b"fixed plaintext";

    // Exercise the 16-byte rate boundary: 15, 16 (exact multiple), and 17
    // bytes of AD must each absorb differently.
    let sizes = [0usize, 1, 15, 16, 17, 32];
    let sealed: Vec<Vec<u8>> = sizes
        .iter()
        .map(|&len| {
            let ad: Vec<u8> = (0..len).map(|i| i as u8).collect();
            seal(&key, &nonce, &ad, plaintext)
        })
        .collect();

    for i in 0..sealed.len() {
        for j in (i + 1)..sealed.len() {
            assert_ne!(
                sealed[i], sealed[j],
                "AD sizes {} and {} collided",
                sizes[i], sizes[j]
            );
        }
    }
}

#[test]
fn test_streaming_domain_separation_matches_oneshot() {
    let (key, nonce) = key_nonce();
    let ad = b"associated";
    let plaintext = b"message body";

    let oneshot_sealed = seal(&key, &nonce, ad, plaintext);

    let mut core = AeadCore::new(&key, &nonce);
    core.absorb_ad(&ad[..4]).unwrap();
    core.absorb_ad(&ad[4..]).unwrap();
    core.finish_ad().unwrap();
    let mut ciphertext = vec![0u8; plaintext.len()];
    core.encrypt_chunk(plaintext, &mut ciphertext).unwrap();
    let tag = core.finish_encrypt().unwrap();

    assert_eq!(&oneshot_sealed[..plaintext.len()], ciphertext.as_slice());
    assert_eq!(&oneshot_sealed[plaintext.len()..], tag.as_bytes());

    let recovered = open(&key, &nonce, ad, &oneshot_sealed).expect("must verify");
    assert_eq!(recovered, plaintext);
}
