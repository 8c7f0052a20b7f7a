#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use ascon_aead128::{seal, AeadCore, Key, Nonce};
use bolero::check;

#[test]
fn fuzz_streaming_matches_oneshot() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(ad, plaintext)| {
            let key = Key::new([0x42; 16]);
            let nonce = Nonce::new([0x24; 16]);

            // =====================================================================
            // BASELINE (ONE-SHOT)
            // =====================================================================
            let expected = seal(&key, &nonce, ad, plaintext);

            // =====================================================================
            // STREAMING, SINGLE ABSORB_AD CALL
            // =====================================================================
            let mut core = AeadCore::new(&key, &nonce);
            if core.absorb_ad(ad).is_ok() && core.finish_ad().is_ok() {
                let mut ciphertext = vec![0u8; plaintext.len()];
                if core.encrypt_chunk(plaintext, &mut ciphertext).is_ok() {
                    if let Ok(tag) = core.finish_encrypt() {
                        let mut actual = ciphertext;
                        actual.extend_from_slice(tag.as_bytes());
                        assert_eq!(actual, expected, "single-call streaming mismatch");
                    }
                }
            }

            // =====================================================================
            // STREAMING, AD FED BYTE BY BYTE
            // =====================================================================
            if !ad.is_empty() && ad.len() < 256 {
                let mut core = AeadCore::new(&key, &nonce);
                for b in ad {
                    core.absorb_ad(&[*b]).unwrap();
                }
                core.finish_ad().unwrap();
                let mut ciphertext = vec![0u8; plaintext.len()];
                core.encrypt_chunk(plaintext, &mut ciphertext).unwrap();
                let tag = core.finish_encrypt().unwrap();
                let mut actual = ciphertext;
                actual.extend_from_slice(tag.as_bytes());
                assert_eq!(actual, expected, "byte-by-byte AD streaming mismatch");
            }
        });
}
