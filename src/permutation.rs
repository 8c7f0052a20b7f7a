//! Ascon-p: the 320-bit permutation (component C1).
//!
//! The state is five 64-bit lanes. Each round adds a round constant to
//! lane 2, applies the bit-sliced 5-bit S-box across all 64 vertical
//! slices at once (the `chi` step), then diffuses each lane linearly.
//! Every step is a straight-line XOR/AND/NOT/rotate sequence — there are
//! no data-dependent branches, so the permutation runs in constant time
//! by construction.

use crate::config::{Unroll, ROUNDS_A, ROUND_CONSTANTS};

/// The 320-bit Ascon state: five 64-bit lanes S0..S4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AsconState(pub [u64; 5]);

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for AsconState {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl AsconState {
    /// All-zero state, used as the fixed starting point for permutation
    /// known-answer tests.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0; 5])
    }

    /// Apply one round of Ascon-p with round constant `c`.
    fn round(&mut self, c: u64) {
        let [s0, s1, s2, s3, s4] = self.0;

        // Constant addition, folded into the pre-affine step below.
        let s2 = s2 ^ c;

        // Pre-affine.
        let a0 = s0 ^ s4;
        let a1 = s1;
        let a2 = s2 ^ s1;
        let a3 = s3;
        let a4 = s4 ^ s3;

        // chi: b_i = a_i ^ (!a_{i+1} & a_{i+2}), indices mod 5.
        let b0 = a0 ^ (!a1 & a2);
        let b1 = a1 ^ (!a2 & a3);
        let b2 = a2 ^ (!a3 & a4);
        let b3 = a3 ^ (!a4 & a0);
        let b4 = a4 ^ (!a0 & a1);

        // Post-affine.
        let s0 = b0 ^ b4;
        let s1 = b1 ^ b0;
        let s2 = !b2;
        let s3 = b3 ^ b2;
        let s4 = b4;

        // Linear diffusion.
        let s0 = s0 ^ s0.rotate_right(19) ^ s0.rotate_right(28);
        let s1 = s1 ^ s1.rotate_right(61) ^ s1.rotate_right(39);
        let s2 = s2 ^ s2.rotate_right(1) ^ s2.rotate_right(6);
        let s3 = s3 ^ s3.rotate_right(10) ^ s3.rotate_right(17);
        let s4 = s4 ^ s4.rotate_right(7) ^ s4.rotate_right(41);

        self.0 = [s0, s1, s2, s3, s4];
    }

    /// Apply `rounds` rounds of Ascon-p, taking round constants from
    /// `ROUND_CONSTANTS[16 - rounds ..]` in order. `rounds` must be one
    /// of 6, 8, or 12 (the only counts Ascon-AEAD128 uses).
    pub fn permute(&mut self, rounds: u32) {
        self.permute_with_unroll(rounds, Unroll::One);
    }

    /// Apply `rounds` rounds, grouping `unroll.step()` consecutive rounds
    /// per loop iteration. This exists solely to let the test suite
    /// prove the unroll axis is transparent: for any `rounds`, the
    /// resulting state must be identical regardless of `unroll`.
    ///
    /// # Panics
    /// Debug builds panic if `rounds` exceeds 12; callers in this crate
    /// only ever pass 8 or 12.
    pub fn permute_with_unroll(&mut self, rounds: u32, unroll: Unroll) {
        debug_assert!(rounds <= ROUNDS_A, "round count out of range");
        let start = (ROUND_CONSTANTS.len() as u32) - rounds;
        let step = unroll.step();
        let mut r = 0;
        while r < rounds {
            let group_end = (r + step).min(rounds);
            while r < group_end {
                self.round(ROUND_CONSTANTS[(start + r) as usize]);
                r += 1;
            }
        }
    }
}
