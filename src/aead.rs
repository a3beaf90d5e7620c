//! The two-function surface: `encrypt` and `decrypt` over raw key bytes.
//! Each call builds a short-lived [Cipher] and drops (and wipes) it on return.

use rand::TryCryptoRng;

use crate::cipher::Cipher;
use crate::error::Result;
use crate::key::Key;

/// Encrypts `plaintext` with AES-GCM under a fresh random nonce, authenticating
/// `aad` alongside it (pass `&[]` for none).
///
/// `key` must be 16, 24, or 32 bytes. Returns `nonce || ciphertext || tag`.
pub fn encrypt(key: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    Cipher::new(&Key::try_from_slice(key)?).encrypt(plaintext, aad)
}

/// As [encrypt], drawing the nonce from `rng` instead of the OS.
pub fn encrypt_with_rng<R: TryCryptoRng + ?Sized>(
    key: &[u8],
    plaintext: &[u8],
    aad: &[u8],
    rng: &mut R,
) -> Result<Vec<u8>> {
    Cipher::new(&Key::try_from_slice(key)?).encrypt_with_rng(plaintext, aad, rng)
}

/// Verifies and decrypts a bundle produced by [encrypt]. `aad` must equal the
/// value given at encryption.
///
/// Fails with [AuthenticationFailed](crate::Error::AuthenticationFailed) on any
/// modification, wrong key, or wrong `aad`; no plaintext is returned in that case.
pub fn decrypt(key: &[u8], bundle: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    Cipher::new(&Key::try_from_slice(key)?).decrypt(bundle, aad)
}
