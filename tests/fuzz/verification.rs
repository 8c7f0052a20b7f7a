#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use ascon_aead128::{open, seal, Key, Nonce};
use bolero::check;

#[test]
fn fuzz_round_trip_and_tamper_rejection() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(ad, plaintext)| {
            let key = Key::new([0x17; 16]);
            let nonce = Nonce::new([0x71; 16]);

            // =====================================================================
            // POSITIVE TEST
            // =====================================================================
            let sealed = seal(&key, &nonce, ad, plaintext);
            let recovered = open(&key, &nonce, ad, &sealed);
            assert_eq!(
                recovered.as_deref(),
                Ok(plaintext.as_slice()),
                "seal/open round trip failed"
            );

            // =====================================================================
            // NEGATIVE TESTS (CORRUPTION)
            // =====================================================================

            // 1. Ciphertext-or-tag corruption: flip the first byte.
            if !sealed.is_empty() {
                let mut corrupted = sealed.clone();
                corrupted[0] ^= 0x01;
                assert!(
                    open(&key, &nonce, ad, &corrupted).is_err(),
                    "open() succeeded on corrupted sealed output"
                );
            }

            // 2. Associated-data corruption.
            if !ad.is_empty() {
                let mut corrupted_ad = ad.clone();
                corrupted_ad[0] ^= 0xFF;
                assert!(
                    open(&key, &nonce, &corrupted_ad, &sealed).is_err(),
                    "open() succeeded on corrupted associated data"
                );
            }
        });
}
