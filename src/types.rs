//! Shared types: key/nonce/tag newtypes and the error taxonomy (component C6).

use core::fmt;
#[cfg(feature = "std")]
use std::error;

/// Width in bytes of the key, nonce, and tag.
pub const KEY_LEN: usize = 16;
/// Width in bytes of the nonce.
pub const NONCE_LEN: usize = 16;
/// Width in bytes of the authentication tag.
pub const TAG_LEN: usize = 16;

/// A 128-bit key, loaded from a big-endian byte string at the wire boundary.
///
/// Not `Copy`: with the `zeroize` feature enabled this type wipes its bytes
/// on drop, and `Copy` and `Drop` cannot coexist on the same type.
#[derive(Clone, PartialEq, Eq)]
pub struct Key([u8; KEY_LEN]);

/// A 128-bit nonce. Must be unique per (key, associated data, plaintext)
/// encryption call; this type does not and cannot enforce that.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Nonce([u8; NONCE_LEN]);

/// A 128-bit authentication tag.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Tag([u8; TAG_LEN]);

macro_rules! fixed_width_bytes {
    ($name:ident, $len:expr) => {
        impl $name {
            /// Wrap a fixed-size byte array.
            #[must_use]
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// The underlying bytes, in the big-endian wire order the
            /// caller supplied them in.
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = MisuseError;

            fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
                let array: [u8; $len] =
                    value
                        .try_into()
                        .map_err(|_| MisuseError::InvalidLength {
                            what: stringify!($name),
                            expected: $len,
                            actual: value.len(),
                        })?;
                Ok(Self(array))
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&"<redacted>").finish()
            }
        }
    };
}

fixed_width_bytes!(Key, KEY_LEN);
fixed_width_bytes!(Nonce, NONCE_LEN);

impl Tag {
    /// Wrap a fixed-size byte array.
    #[must_use]
    pub const fn new(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }

    /// The underlying tag bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Tag {
    type Error = MisuseError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; TAG_LEN] = value.try_into().map_err(|_| MisuseError::InvalidLength {
            what: "Tag",
            expected: TAG_LEN,
            actual: value.len(),
        })?;
        Ok(Self(array))
    }
}

impl From<[u8; TAG_LEN]> for Tag {
    fn from(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }
}

// Tags are verification inputs/outputs, not secrets on their own, so a plain
// Debug impl (unlike Key/Nonce) is fine.
impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tag").field(&self.0).finish()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for Key {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Key {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.zeroize();
    }
}

// `Nonce` is `Copy` (unlike `Key`), so it cannot also carry a `Drop` impl —
// callers who want it wiped call `zeroize()` explicitly at the point they're
// done with it, the same tradeoff the teacher's `Digest` output type makes
// for non-owning byte arrays.
#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for Nonce {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

// =============================================================================
// ERROR TAXONOMY
// =============================================================================

/// Authentication failure on `open`: the computed tag did not match the
/// supplied tag. Carries no data — leaking *how* verification failed would
/// undermine the reason it exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthError;

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("authentication failed: tag mismatch")
    }
}

#[cfg(feature = "std")]
impl error::Error for AuthError {}

/// Misuse of the API: wrong-length key/nonce/tag, or the streaming
/// controller driven out of its required call order. These are programming
/// errors, not runtime conditions, and are never produced by adversarial
/// ciphertext alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MisuseError {
    /// A key, nonce, or tag argument had the wrong byte length.
    InvalidLength {
        /// Name of the field that was the wrong length.
        what: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
    /// A streaming `AeadCore` method was called while the controller was in
    /// a state that does not accept it.
    OutOfOrderCall {
        /// The state the call required.
        expected: &'static str,
        /// The state the controller was actually in.
        actual: &'static str,
    },
}

impl fmt::Display for MisuseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength {
                what,
                expected,
                actual,
            } => write!(
                f,
                "invalid {what} length: expected {expected} bytes, got {actual}"
            ),
            Self::OutOfOrderCall { expected, actual } => {
                write!(f, "controller out of order: expected state {expected}, was in {actual}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for MisuseError {}

/// The error returned by the one-shot `open` call: either the tag did not
/// verify, or the call itself was malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AeadError {
    /// Tag verification failed; no plaintext is released.
    Auth(AuthError),
    /// The call was malformed (wrong key/nonce length).
    Misuse(MisuseError),
}

impl From<AuthError> for AeadError {
    fn from(e: AuthError) -> Self {
        Self::Auth(e)
    }
}

impl From<MisuseError> for AeadError {
    fn from(e: MisuseError) -> Self {
        Self::Misuse(e)
    }
}

impl fmt::Display for AeadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth(e) => fmt::Display::fmt(e, f),
            Self::Misuse(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for AeadError {}
