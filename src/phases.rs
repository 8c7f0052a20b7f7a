//! Phase operators (component C3): initialize, absorb associated data,
//! encrypt/decrypt one rate block at a time, and finalize.
//!
//! Every operator here takes the state and returns it mutated; none of them
//! loop over more than one phase. The streaming controller in
//! [`crate::streaming`] is what drives them across a whole message.

use crate::config::{Unroll, IV, RATE_BYTES, ROUNDS_A, ROUNDS_B};
use crate::padding::PaddedBlock;
use crate::permutation::AsconState;
use crate::types::{Key, Nonce, Tag, KEY_LEN, NONCE_LEN, TAG_LEN};

const HALF: usize = 8;

fn le64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; HALF];
    buf.copy_from_slice(&bytes[..HALF]);
    u64::from_le_bytes(buf)
}

fn le64_bytes(value: u64) -> [u8; HALF] {
    value.to_le_bytes()
}

/// The two 64-bit key lanes, derived once at `initialize` and needed again,
/// unmodified, at `finalize`.
#[derive(Clone, Copy)]
pub(crate) struct KeyLanes {
    pub(crate) kh: u64,
    pub(crate) kl: u64,
}

/// **Initialize(K, N)**: load IV, key, and nonce into the five lanes, run
/// the 12-round permutation, then re-XOR the key into S3/S4.
pub(crate) fn initialize(key: &Key, nonce: &Nonce) -> (AsconState, KeyLanes) {
    debug_assert_eq!(KEY_LEN, 16);
    debug_assert_eq!(NONCE_LEN, 16);

    let kh = le64(&key.as_bytes()[0..HALF]);
    let kl = le64(&key.as_bytes()[HALF..2 * HALF]);
    let nh = le64(&nonce.as_bytes()[0..HALF]);
    let nl = le64(&nonce.as_bytes()[HALF..2 * HALF]);

    let mut state = AsconState([IV, kh, kl, nh, nl]);
    state.permute(ROUNDS_A);
    state.0[3] ^= kh;
    state.0[4] ^= kl;

    (state, KeyLanes { kh, kl })
}

/// Walk `total_len` bytes as a sequence of full 16-byte blocks followed by
/// exactly one trailing block of `total_len % 16` bytes — which is zero
/// length when `total_len` is an exact multiple of 16, *including zero
/// itself*. Every phase operator that streams bytes through the rate
/// (AbsorbAD, EncryptP, DecryptC) shares this split: a message or
/// associated-data string of exact block length still ends with a
/// dedicated, all-padding final step.
///
/// `body(is_final, offset, len)` is called once per block in order.
fn walk_blocks(total_len: usize, mut body: impl FnMut(bool, usize, usize)) {
    let full_blocks = total_len / RATE_BYTES;
    let tail_len = total_len % RATE_BYTES;
    let mut offset = 0;
    for _ in 0..full_blocks {
        body(false, offset, RATE_BYTES);
        offset += RATE_BYTES;
    }
    body(true, offset, tail_len);
}

/// **AbsorbAD(A)**: absorb `ad` in 16-byte blocks with 10* padding on the
/// final (possibly empty) block, permuting after every block including the
/// final one, then flip the domain-separation bit. Runs even when `ad` is
/// empty: the padded empty block and the domain-sep XOR both still happen.
pub(crate) fn absorb_ad(state: &mut AsconState, ad: &[u8], unroll: Unroll) {
    walk_blocks(ad.len(), |is_final, offset, len| {
        if is_final {
            let padded = PaddedBlock::pad(&ad[offset..offset + len]);
            state.0[0] ^= le64(&padded.bytes()[0..HALF]);
            state.0[1] ^= le64(&padded.bytes()[HALF..2 * HALF]);
        } else {
            let block = &ad[offset..offset + RATE_BYTES];
            state.0[0] ^= le64(&block[0..HALF]);
            state.0[1] ^= le64(&block[HALF..2 * HALF]);
        }
        state.permute_with_unroll(ROUNDS_B, unroll);
    });

    state.0[4] ^= 1u64 << 63;
}

/// **EncryptP(P)**: produce ciphertext of the same length as `plaintext`
/// into `ciphertext`. The final block (full or partial, possibly empty) is
/// never followed by a permutation; that is left to `finalize`.
///
/// # Panics
/// Panics if `ciphertext.len() != plaintext.len()`.
pub(crate) fn encrypt(
    state: &mut AsconState,
    plaintext: &[u8],
    ciphertext: &mut [u8],
    unroll: Unroll,
) {
    assert_eq!(plaintext.len(), ciphertext.len());
    walk_blocks(plaintext.len(), |is_final, offset, len| {
        if !is_final {
            let block = &plaintext[offset..offset + RATE_BYTES];
            state.0[0] ^= le64(&block[0..HALF]);
            state.0[1] ^= le64(&block[HALF..2 * HALF]);
            ciphertext[offset..offset + HALF].copy_from_slice(&le64_bytes(state.0[0]));
            ciphertext[offset + HALF..offset + RATE_BYTES]
                .copy_from_slice(&le64_bytes(state.0[1]));
            state.permute_with_unroll(ROUNDS_B, unroll);
        } else {
            let tail = &plaintext[offset..offset + len];
            let padded = PaddedBlock::pad(tail);
            state.0[0] ^= le64(&padded.bytes()[0..HALF]);
            state.0[1] ^= le64(&padded.bytes()[HALF..2 * HALF]);
            let mut out = [0u8; RATE_BYTES];
            out[0..HALF].copy_from_slice(&le64_bytes(state.0[0]));
            out[HALF..RATE_BYTES].copy_from_slice(&le64_bytes(state.0[1]));
            ciphertext[offset..offset + len].copy_from_slice(&out[..len]);
        }
    });
}

/// **DecryptC(C)**: the symmetric inverse of [`encrypt`]. Recovered
/// plaintext is written into `plaintext`, which must be the same length as
/// `ciphertext`. Does not itself check the tag; callers must not release
/// `plaintext` to a caller until `finalize`'s tag compares equal.
///
/// # Panics
/// Panics if `plaintext.len() != ciphertext.len()`.
pub(crate) fn decrypt(
    state: &mut AsconState,
    ciphertext: &[u8],
    plaintext: &mut [u8],
    unroll: Unroll,
) {
    assert_eq!(plaintext.len(), ciphertext.len());
    walk_blocks(ciphertext.len(), |is_final, offset, len| {
        if !is_final {
            let block = &ciphertext[offset..offset + RATE_BYTES];
            let c0 = le64(&block[0..HALF]);
            let c1 = le64(&block[HALF..2 * HALF]);
            plaintext[offset..offset + HALF].copy_from_slice(&le64_bytes(state.0[0] ^ c0));
            plaintext[offset + HALF..offset + RATE_BYTES]
                .copy_from_slice(&le64_bytes(state.0[1] ^ c1));
            state.0[0] = c0;
            state.0[1] = c1;
            state.permute_with_unroll(ROUNDS_B, unroll);
        } else {
            let tail = &ciphertext[offset..offset + len];

            // pad2, realized with the 16-byte scratch buffer: start from the
            // still-unpadded rate, XOR in the ciphertext tail to recover
            // plaintext, then overwrite the rate with the ciphertext bytes
            // and re-apply the 0x01 trailer — the same state a full `pad`
            // absorption of the recovered plaintext would have produced.
            let mut rate = [0u8; RATE_BYTES];
            rate[0..HALF].copy_from_slice(&le64_bytes(state.0[0]));
            rate[HALF..RATE_BYTES].copy_from_slice(&le64_bytes(state.0[1]));

            let mut recovered = rate;
            for (i, &c) in tail.iter().enumerate() {
                recovered[i] ^= c;
            }
            plaintext[offset..offset + len].copy_from_slice(&recovered[..len]);

            rate[..len].copy_from_slice(tail);
            rate[len] ^= 0x01;
            state.0[0] = le64(&rate[0..HALF]);
            state.0[1] = le64(&rate[HALF..2 * HALF]);
        }
    });
}

/// **Finalize(K)**: XOR the key into the capacity, run the 12-round
/// permutation, then derive the tag from S3/S4 XORed with the key again.
pub(crate) fn finalize(state: &mut AsconState, key: KeyLanes) -> Tag {
    state.0[2] ^= key.kh;
    state.0[3] ^= key.kl;
    state.permute(ROUNDS_A);

    let mut tag = [0u8; TAG_LEN];
    tag[0..HALF].copy_from_slice(&le64_bytes(state.0[3] ^ key.kh));
    tag[HALF..TAG_LEN].copy_from_slice(&le64_bytes(state.0[4] ^ key.kl));
    Tag::new(tag)
}
