//! Defines [`Key`], a validated AES key of 128, 192, or 256 bits, and [`KeySize`].
//! Keys can be randomly generated or built from an existing byte slice. Key bytes
//! are wiped when the [`Key`] is dropped and never appear in `Debug` output.

use std::fmt;

use rand::TryCryptoRng;
use rand::rngs::OsRng;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};
use crate::util::fill_random;

/// Supported AES key sizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    /// Key length in bytes.
    pub const fn len(self) -> usize {
        match self {
            KeySize::Bits128 => 16,
            KeySize::Bits192 => 24,
            KeySize::Bits256 => 32,
        }
    }

    /// Key length in bits.
    pub const fn bits(self) -> usize {
        self.len() * 8
    }

    /// Maps a byte length to a key size.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(KeySize::Bits128),
            24 => Ok(KeySize::Bits192),
            32 => Ok(KeySize::Bits256),
            _ => Err(Error::InvalidKeyLength { len }),
        }
    }
}

#[derive(Clone)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

impl Zeroize for KeyBytes {
    fn zeroize(&mut self) {
        match self {
            KeyBytes::K128(k) => k.zeroize(),
            KeyBytes::K192(k) => k.zeroize(),
            KeyBytes::K256(k) => k.zeroize(),
        }
    }
}

/// A valid AES key. Built from a 16, 24, or 32 byte slice, or generated at random.
///
/// Equality is checked in constant time.
///
/// ## Examples
/// ```
/// # fn main() -> aes_easy::Result<()> {
/// use aes_easy::{Key, KeySize};
///
/// let random = Key::random(KeySize::Bits256)?;
/// assert_eq!(random.size(), KeySize::Bits256);
///
/// let bytes = [0x42u8; 24];
/// let key = Key::try_from_slice(&bytes)?;
/// assert_eq!(key.as_bytes(), &bytes);
///
/// // 20 bytes is not an AES key length
/// assert!(Key::try_from_slice(&bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Generates a random key from the OS random source.
    pub fn random(size: KeySize) -> Result<Self> {
        Self::random_with(size, &mut OsRng)
    }

    /// Generates a random key from a caller-supplied cryptographic random source.
    pub fn random_with<R: TryCryptoRng + ?Sized>(size: KeySize, rng: &mut R) -> Result<Self> {
        let mut buf = Zeroizing::new([0u8; 32]);
        let buf = &mut buf[..size.len()];
        fill_random(rng, buf)?;
        Self::try_from_slice(buf)
    }

    /// Builds a key from a slice. Fails with
    /// [InvalidKeyLength](crate::Error::InvalidKeyLength) unless the slice is
    /// 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        // length was matched, so the array conversions cannot fail
        let bytes = match KeySize::from_len(bytes.len())? {
            KeySize::Bits128 => KeyBytes::K128(bytes.try_into().unwrap()),
            KeySize::Bits192 => KeyBytes::K192(bytes.try_into().unwrap()),
            KeySize::Bits256 => KeyBytes::K256(bytes.try_into().unwrap()),
        };
        Ok(Self { bytes })
    }

    pub fn size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Bits128,
            KeyBytes::K192(_) => KeySize::Bits192,
            KeyBytes::K256(_) => KeySize::Bits256,
        }
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_slice(bytes)
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes().ct_eq(other.as_bytes()).into()
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}
