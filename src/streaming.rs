//! The AEAD controller (component C4): drives the phase operators in order
//! and exposes a streaming interface that mirrors the word-at-a-time
//! handshake a hardware core would expose, without committing callers to
//! any particular chunk size.

use crate::config::Unroll;
use crate::phases::{self, KeyLanes};
use crate::permutation::AsconState;
use crate::types::{AuthError, Key, MisuseError, Nonce, Tag, TAG_LEN};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Where the controller is in the fixed phase order. `LOAD_KEY`, `LOAD_NONCE`,
/// and `INIT_PERMUTE` collapse into construction itself: [`AeadCore::new`]
/// takes both and runs `Initialize` before returning, so the first
/// observable state is already `AbsorbingAd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControllerState {
    /// `initialize` ran; accepting `absorb_ad` calls (zero or more), then
    /// one `finish_ad` call, which performs the always-at-least-one-block
    /// absorption and the domain-separation flip.
    AbsorbingAd,
    /// Domain separation has fired; accepting message bytes.
    ProcessingMessage,
    /// The final message block has been processed; only `finish` remains.
    Finalizing,
    /// `finish` has run; the core must not be reused.
    Idle,
}

/// A streaming Ascon-AEAD128 operation: load a key and nonce, feed
/// associated data and message bytes in order, then finish to get a tag
/// (encrypt) or verify one (decrypt).
///
/// The controller enforces the phase order (`INIT_PERMUTE` →
/// `ABSORB_AD` → `DOMAIN_SEP` → `PROCESS_MSG` → `FINAL_PERMUTE` →
/// `EMIT_OR_VERIFY_TAG`) at run time: calling a method out of turn returns
/// [`MisuseError::OutOfOrderCall`] rather than silently producing the wrong
/// bytes.
pub struct AeadCore {
    state: AsconState,
    lanes: KeyLanes,
    controller: ControllerState,
    unroll: Unroll,
    ad_buffer: Vec<u8>,
}

impl AeadCore {
    /// Run `Initialize(K, N)` and move the controller to `AbsorbingAd`.
    #[must_use]
    pub fn new(key: &Key, nonce: &Nonce) -> Self {
        Self::with_unroll(key, nonce, Unroll::One)
    }

    /// As [`Self::new`], but with an explicit rounds-per-step unroll
    /// factor. Output is identical for every choice of `unroll`; this only
    /// exists so callers (and the test suite) can exercise that axis.
    #[must_use]
    pub fn with_unroll(key: &Key, nonce: &Nonce, unroll: Unroll) -> Self {
        let (state, lanes) = phases::initialize(key, nonce);
        Self {
            state,
            lanes,
            controller: ControllerState::AbsorbingAd,
            unroll,
            ad_buffer: Vec::new(),
        }
    }

    fn require(&self, expected: ControllerState, label: &'static str) -> Result<(), MisuseError> {
        if self.controller == expected {
            Ok(())
        } else {
            Err(MisuseError::OutOfOrderCall {
                expected: label,
                actual: self.controller.label(),
            })
        }
    }

    /// Feed one more chunk of associated data. May be called any number of
    /// times (including zero) before [`Self::finish_ad`].
    ///
    /// # Errors
    /// Returns [`MisuseError::OutOfOrderCall`] if AD absorption has already
    /// been closed out by `finish_ad`.
    pub fn absorb_ad(&mut self, chunk: &[u8]) -> Result<(), MisuseError> {
        self.require(ControllerState::AbsorbingAd, "AbsorbingAd")?;
        self.ad_buffer.extend_from_slice(chunk);
        Ok(())
    }

    /// Close out associated-data absorption: absorb whatever was buffered
    /// (even nothing) with its 10* padding, then flip the domain-separation
    /// bit. Runs even if no AD was ever supplied.
    ///
    /// # Errors
    /// Returns [`MisuseError::OutOfOrderCall`] if called more than once, or
    /// before any AD has had the chance to be absorbed.
    pub fn finish_ad(&mut self) -> Result<(), MisuseError> {
        self.require(ControllerState::AbsorbingAd, "AbsorbingAd")?;
        phases::absorb_ad(&mut self.state, &self.ad_buffer, self.unroll);
        self.ad_buffer.clear();
        self.controller = ControllerState::ProcessingMessage;
        Ok(())
    }

    /// Encrypt the whole plaintext into `ciphertext` (same length) and move
    /// the controller to `Finalizing`. The byte-slice API this crate
    /// exposes takes the full message up front, unlike a hardware core's
    /// word-at-a-time handshake, so there is exactly one message step
    /// rather than a sequence of partial ones; `PROCESS_MSG` still always
    /// runs, even for an empty plaintext, per the always-one-final-block
    /// rule.
    ///
    /// # Errors
    /// Returns [`MisuseError::OutOfOrderCall`] if AD absorption has not yet
    /// been closed with `finish_ad`, or the message has already been
    /// finished.
    pub fn encrypt_chunk(&mut self, plaintext: &[u8], ciphertext: &mut [u8]) -> Result<(), MisuseError> {
        self.require(ControllerState::ProcessingMessage, "ProcessingMessage")?;
        phases::encrypt(&mut self.state, plaintext, ciphertext, self.unroll);
        self.controller = ControllerState::Finalizing;
        Ok(())
    }

    /// Decrypt the whole ciphertext into `plaintext` (same length); see
    /// [`Self::encrypt_chunk`] for why this takes the full message in one
    /// call. Recovered plaintext must not be released to the caller's own
    /// consumer until [`Self::finish_decrypt`] confirms `auth=1`.
    ///
    /// # Errors
    /// Returns [`MisuseError::OutOfOrderCall`] under the same conditions as
    /// `encrypt_chunk`.
    pub fn decrypt_chunk(&mut self, ciphertext: &[u8], plaintext: &mut [u8]) -> Result<(), MisuseError> {
        self.require(ControllerState::ProcessingMessage, "ProcessingMessage")?;
        phases::decrypt(&mut self.state, ciphertext, plaintext, self.unroll);
        self.controller = ControllerState::Finalizing;
        Ok(())
    }

    /// Run `Finalize` and emit the tag (encrypt side).
    ///
    /// # Errors
    /// Returns [`MisuseError::OutOfOrderCall`] if the message phase has not
    /// run yet (even an empty message must call `encrypt_chunk`/
    /// `decrypt_chunk` once, per the always-one-final-block rule).
    pub fn finish_encrypt(mut self) -> Result<Tag, MisuseError> {
        self.require(ControllerState::Finalizing, "Finalizing")?;
        let tag = phases::finalize(&mut self.state, self.lanes);
        self.controller = ControllerState::Idle;
        Ok(tag)
    }

    /// Run `Finalize` and verify the supplied tag in constant time
    /// (decrypt side). `Ok(())` means `auth=1`; `Err` means the caller must
    /// discard whatever plaintext `decrypt_chunk` produced.
    ///
    /// # Errors
    /// Returns [`MisuseError::OutOfOrderCall`] per [`Self::finish_encrypt`],
    /// or [`AuthError`] (wrapped by the caller) if the tag does not match.
    #[must_use = "ignoring the result of tag verification is a security bug"]
    pub fn finish_decrypt(mut self, expected: &Tag) -> Result<Result<(), AuthError>, MisuseError> {
        self.require(ControllerState::Finalizing, "Finalizing")?;
        let computed = phases::finalize(&mut self.state, self.lanes);
        self.controller = ControllerState::Idle;
        Ok(constant_time_tag_eq(&computed, expected))
    }
}

impl ControllerState {
    const fn label(self) -> &'static str {
        match self {
            Self::AbsorbingAd => "AbsorbingAd",
            Self::ProcessingMessage => "ProcessingMessage",
            Self::Finalizing => "Finalizing",
            Self::Idle => "Idle",
        }
    }
}

/// Constant-time equality over the 128-bit tag, per the design's explicit
/// "OR of XOR across all byte pairs" comparison.
fn constant_time_tag_eq(computed: &Tag, expected: &Tag) -> Result<(), AuthError> {
    use subtle::ConstantTimeEq;
    let mut acc = 0u8;
    for i in 0..TAG_LEN {
        acc |= computed.as_bytes()[i] ^ expected.as_bytes()[i];
    }
    if acc.ct_eq(&0).into() {
        Ok(())
    } else {
        Err(AuthError)
    }
}
