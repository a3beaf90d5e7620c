//! Layout of the opaque artifact returned by encryption:
//!
//! ```text
//! nonce (12 bytes) || ciphertext (len(plaintext) bytes) || tag (16 bytes)
//! ```
//!
//! Associated data is authenticated but not stored; the caller passes it again
//! on decryption.

use crate::error::{Error, Result};
use crate::modes::{MAX_PLAINTEXT_LEN, TAG_LEN};
use crate::nonce::{NONCE_LEN, Nonce};

/// Bytes a bundle adds on top of the plaintext.
pub const BUNDLE_OVERHEAD: usize = NONCE_LEN + TAG_LEN;

/// Borrowed view of a ciphertext bundle. Parsing checks only the layout; the
/// tag is checked by [`Cipher::decrypt`](crate::Cipher::decrypt).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bundle<'a> {
    nonce: Nonce,
    ciphertext: &'a [u8],
    tag: [u8; TAG_LEN],
}

impl<'a> Bundle<'a> {
    /// Splits `bytes` into nonce, ciphertext and tag.
    ///
    /// Fails with [MalformedCiphertext](crate::Error::MalformedCiphertext) if
    /// there are fewer than 28 bytes, or if the ciphertext section is longer
    /// than any GCM plaintext can be.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() < BUNDLE_OVERHEAD {
            return Err(Error::MalformedCiphertext {
                len: bytes.len(),
                context: "shorter than nonce and tag",
            });
        }

        let (nonce, rest) = bytes.split_at(NONCE_LEN);
        let (ciphertext, tag) = rest.split_at(rest.len() - TAG_LEN);

        if ciphertext.len() as u64 > MAX_PLAINTEXT_LEN {
            return Err(Error::MalformedCiphertext {
                len: bytes.len(),
                context: "ciphertext exceeds GCM maximum",
            });
        }

        Ok(Self {
            nonce: Nonce::try_from_slice(nonce)?,
            ciphertext,
            tag: tag.try_into().map_err(|_| Error::MalformedCiphertext {
                len: bytes.len(),
                context: "tag not 16 bytes",
            })?,
        })
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }

    pub fn tag(&self) -> &[u8; TAG_LEN] {
        &self.tag
    }
}

/// Writes `nonce || ciphertext || tag` into one buffer.
pub(crate) fn assemble(nonce: &Nonce, ciphertext: &[u8], tag: &[u8; TAG_LEN]) -> Vec<u8> {
    let mut out = Vec::with_capacity(BUNDLE_OVERHEAD + ciphertext.len());
    out.extend_from_slice(nonce.as_bytes());
    out.extend_from_slice(ciphertext);
    out.extend_from_slice(tag);
    out
}
