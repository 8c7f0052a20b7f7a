//! Algorithm constants and the unroll/bus-width design axis.
//!
//! Everything in this module is a compile-time constant or a zero-sized
//! marker type. None of it changes the bytes the permutation or the AEAD
//! controller produce; it only documents (and, for `Unroll`, lets tests
//! exercise) the speed/area axis a hardware implementation would expose
//! as UROL and CCW.

/// Initial value loaded into lane S0 at the start of `initialize`.
pub const IV: u64 = 0x0000_1000_808C_0001;

/// Round count used by the initialization and finalization permutations.
pub const ROUNDS_A: u32 = 12;

/// Round count used by the permutation between data blocks.
pub const ROUNDS_B: u32 = 8;

/// Number of 64-bit lanes in the Ascon state.
pub const LANES: usize = 5;

/// Width in bytes of the rate portion of the state (S0 ∥ S1).
pub const RATE_BYTES: usize = 16;

/// The 16-entry round-constant table. Round `r` of an `n`-round run reads
/// entry `16 - n + r`.
pub const ROUND_CONSTANTS: [u64; 16] = [
    0x3C, 0x2D, 0x1E, 0x0F, 0xF0, 0xE1, 0xD2, 0xC3, 0xB4, 0xA5, 0x96, 0x87, 0x78, 0x69, 0x5A, 0x4B,
];

/// Rounds-per-step unroll factor: a pure software/hardware scheduling
/// choice. `permute_rounds` accepts this as a const generic step size and
/// must produce identical output regardless of which is chosen.
///
/// This mirrors the synthesis-time UROL parameter of a hardware Ascon
/// core; in software there is no separate code path per value, only a
/// different loop stride, so the type exists mainly so tests can name
/// "the unroll axis" the same way the base specification does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unroll {
    /// One round evaluated per step.
    One = 1,
    /// Two rounds evaluated per step.
    Two = 2,
    /// Four rounds evaluated per step.
    Four = 4,
}

impl Unroll {
    /// Number of rounds folded into a single combinational step.
    #[must_use]
    pub const fn step(self) -> u32 {
        self as u32
    }
}

/// Streaming interface bus width, in bits: a 128-bit rate block takes
/// `128 / CCW` transfers at this width. Like `Unroll`, this affects only
/// how a hardware caller would shuttle bytes across the wire; the byte
/// slice API this crate exposes is chunked internally regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusWidth {
    /// 32-bit wide transfers.
    Bits32 = 32,
    /// 64-bit wide transfers.
    Bits64 = 64,
}

impl BusWidth {
    /// Number of transfers needed to move one 64-bit lane at this width.
    #[must_use]
    pub const fn transfers_per_lane(self) -> u32 {
        64 / self as u32
    }

    /// Number of transfers needed to move one 128-bit rate block at this width.
    #[must_use]
    pub const fn transfers_per_block(self) -> u32 {
        128 / self as u32
    }
}
