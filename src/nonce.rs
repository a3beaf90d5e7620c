use rand::TryCryptoRng;
use rand::rngs::OsRng;

use crate::error::{Error, Result};
use crate::util::fill_random;

/// GCM nonce length in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// A 96-bit GCM nonce. A nonce must never be used twice with the same key.
///
/// Random 96-bit nonces make a repeat negligible up to roughly 2^32 messages per
/// key; rotate keys well before that.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Nonce([u8; NONCE_LEN]);

impl Nonce {
    /// Draws a fresh nonce from the OS random source.
    pub fn random() -> Result<Self> {
        Self::random_with(&mut OsRng)
    }

    /// Draws a fresh nonce from a caller-supplied cryptographic random source.
    pub fn random_with<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; NONCE_LEN];
        fill_random(rng, &mut bytes)?;
        Ok(Self(bytes))
    }

    pub const fn from_bytes(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }

    /// Fails with [InvalidNonceLength](crate::Error::InvalidNonceLength) unless
    /// the slice is exactly 12 bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; NONCE_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidNonceLength { len: bytes.len() })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }
}

impl From<[u8; NONCE_LEN]> for Nonce {
    fn from(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }
}
