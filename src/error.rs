use thiserror::Error;

/// Result type for every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type. No variant carries key, nonce, tag or plaintext bytes; only
/// lengths and static context.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Key was not 16, 24, or 32 bytes long.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// Caller-supplied nonce was not 12 bytes long.
    #[error("invalid nonce length: {len} bytes (expected 12)")]
    InvalidNonceLength { len: usize },

    /// Plaintext would exhaust the 32-bit GCM block counter.
    #[error("plaintext too large: {len} bytes (GCM maximum is 2^36 - 32 bytes)")]
    PlaintextTooLarge { len: usize },

    /// Input cannot be a bundle produced by this crate. Nothing was decrypted.
    #[error("malformed ciphertext: {len} bytes ({context})")]
    MalformedCiphertext { len: usize, context: &'static str },

    /// Computed tag did not match the bundle's tag. The ciphertext, nonce, tag
    /// and/or associated data were modified, or the key is wrong.
    #[error("authentication failed (invalid tag)")]
    AuthenticationFailed,

    /// The random source could not produce bytes for a nonce or key.
    #[error("entropy source unavailable: {0}")]
    EntropySourceUnavailable(String),
}
