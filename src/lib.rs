//! AES-GCM authenticated encryption with a surface that is hard to misuse.
//!
//! ```
//! # fn main() -> aes_easy::Result<()> {
//! let key = aes_easy::Key::random(aes_easy::KeySize::Bits256)?;
//!
//! let bundle = aes_easy::encrypt(key.as_bytes(), b"Hello, World!", b"")?;
//! let plaintext = aes_easy::decrypt(key.as_bytes(), &bundle, b"")?;
//! assert_eq!(plaintext, b"Hello, World!");
//!
//! // any change to the bundle is detected
//! let mut tampered = bundle.clone();
//! tampered[20] ^= 1;
//! assert!(matches!(
//!     aes_easy::decrypt(key.as_bytes(), &tampered, b""),
//!     Err(aes_easy::Error::AuthenticationFailed)
//! ));
//! # Ok(())
//! # }
//! ```
//!
//! Bundles are laid out as `nonce (12) || ciphertext || tag (16)`. Nonces come
//! from the OS random source unless a random source or nonce is supplied.

mod aead;
mod block;
mod bundle;
mod cipher;
mod error;
mod key;
mod modes;
mod nonce;
mod util;

pub use aead::{decrypt, encrypt, encrypt_with_rng};
pub use bundle::{BUNDLE_OVERHEAD, Bundle};
pub use cipher::Cipher;
pub use error::{Error, Result};
pub use key::{Key, KeySize};
pub use modes::util::PARALLEL_THRESHOLD;
pub use modes::{MAX_PLAINTEXT_LEN, TAG_LEN};
pub use nonce::{NONCE_LEN, Nonce};
