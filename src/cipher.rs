use rand::TryCryptoRng;
use rand::rngs::OsRng;
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::block::{RCON, SBOX, xor_words};
use crate::bundle::{self, Bundle};
use crate::error::{Error, Result};
use crate::key::{Key, KeySize};
use crate::modes::{MAX_PLAINTEXT_LEN, apply_keystream, compute_tag};
use crate::nonce::Nonce;

/// First counter value used for data; counter 1 (J0) masks the tag.
const DATA_CTR_START: u32 = 2;

/// AES-GCM with an expanded key. Built once from a [Key] and reused for any
/// number of messages; immutable, so it can be shared between threads.
/// Round keys are wiped on drop.
///
/// ```
/// # fn main() -> aes_easy::Result<()> {
/// use aes_easy::{Cipher, Key, KeySize};
///
/// let cipher = Cipher::new(&Key::random(KeySize::Bits256)?);
/// let bundle = cipher.encrypt(b"attack at dawn", b"msg-id:7")?;
/// assert_eq!(cipher.decrypt(&bundle, b"msg-id:7")?, b"attack at dawn");
/// assert!(cipher.decrypt(&bundle, b"msg-id:8").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Cipher {
    round_keys: Zeroizing<Vec<[u8; 16]>>,
    size: KeySize,
}

impl Cipher {
    pub fn new(key: &Key) -> Self {
        Self {
            round_keys: Zeroizing::new(Self::expand_key(key)),
            size: key.size(),
        }
    }

    pub fn key_size(&self) -> KeySize {
        self.size
    }

    #[cfg(test)]
    pub(crate) fn round_keys(&self) -> &[[u8; 16]] {
        &self.round_keys
    }

    /// Encrypts `plaintext` under a fresh random nonce and authenticates it
    /// together with `aad` (pass `&[]` for none).
    ///
    /// Returns `nonce (12) || ciphertext || tag (16)`.
    pub fn encrypt(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        self.encrypt_with_rng(plaintext, aad, &mut OsRng)
    }

    /// As [encrypt](Cipher::encrypt), drawing the nonce from `rng`.
    pub fn encrypt_with_rng<R: TryCryptoRng + ?Sized>(
        &self,
        plaintext: &[u8],
        aad: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        // no entropy is spent on input that will be rejected
        ensure_plaintext_len(plaintext.len())?;
        let nonce = Nonce::random_with(rng)?;
        self.encrypt_with_nonce(&nonce, plaintext, aad)
    }

    /// As [encrypt](Cipher::encrypt) with a caller-chosen nonce.
    ///
    /// **The caller must never reuse a nonce with the same key.** A repeat
    /// reveals the XOR of both plaintexts and lets an attacker forge tags.
    pub fn encrypt_with_nonce(
        &self,
        nonce: &Nonce,
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>> {
        ensure_plaintext_len(plaintext.len())?;

        let iv = nonce.as_bytes();
        let ciphertext = apply_keystream(plaintext, &self.round_keys, iv, DATA_CTR_START)?;
        let tag = compute_tag(&ciphertext, &self.round_keys, iv, aad);
        let out = bundle::assemble(nonce, &ciphertext, &tag);

        debug!(
            key_bits = self.size.bits(),
            plaintext_len = plaintext.len(),
            aad_len = aad.len(),
            bundle_len = out.len(),
            "aes-gcm encrypt"
        );
        Ok(out)
    }

    /// Verifies and decrypts a bundle produced by [encrypt](Cipher::encrypt).
    ///
    /// The tag is checked in constant time before any keystream is applied, so
    /// on [AuthenticationFailed](crate::Error::AuthenticationFailed) no
    /// plaintext, partial or otherwise, has been produced.
    pub fn decrypt(&self, bundle: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let parsed = Bundle::parse(bundle)?;
        let iv = parsed.nonce().as_bytes();

        let expected = compute_tag(parsed.ciphertext(), &self.round_keys, iv, aad);
        if !bool::from(expected[..].ct_eq(&parsed.tag()[..])) {
            debug!(
                key_bits = self.size.bits(),
                bundle_len = bundle.len(),
                aad_len = aad.len(),
                "aes-gcm tag mismatch"
            );
            return Err(Error::AuthenticationFailed);
        }

        let plaintext =
            apply_keystream(parsed.ciphertext(), &self.round_keys, iv, DATA_CTR_START)?;

        debug!(
            key_bits = self.size.bits(),
            plaintext_len = plaintext.len(),
            aad_len = aad.len(),
            "aes-gcm decrypt"
        );
        Ok(plaintext)
    }

    /// AES key schedule. Returns 11, 13, or 15 round keys for AES-128, AES-192,
    /// and AES-256; the first round key is the cipher key itself.
    fn expand_key(key: &Key) -> Vec<[u8; 16]> {
        let key = key.as_bytes();

        // FIPS-197 names:
        // Nk   32-bit words in the key
        // Nr   rounds (10, 12, 14)
        // Nw   words produced by the schedule, including the key
        let nk = key.len() / 4;
        let nr = nk + 6;
        let nw = (nr + 1) * 4;

        let mut w: Zeroizing<Vec<[u8; 4]>> = Zeroizing::new(vec![[0u8; 4]; nw]);
        for (word, bytes) in w.iter_mut().zip(key.chunks_exact(4)) {
            word.copy_from_slice(bytes);
        }

        let mut temp = w[nk - 1];
        for i in nk..nw {
            if i % nk == 0 {
                // SubWord(RotWord(temp)) ^ Rcon
                temp = [
                    SBOX[temp[1] as usize] ^ RCON[i / nk],
                    SBOX[temp[2] as usize],
                    SBOX[temp[3] as usize],
                    SBOX[temp[0] as usize],
                ];
            } else if nk == 8 && i % nk == 4 {
                // AES-256 only
                temp = temp.map(|b| SBOX[b as usize]);
            }

            w[i] = xor_words(&temp, &w[i - nk]);
            temp = w[i];
        }
        temp.zeroize();

        w.chunks_exact(4)
            .map(|words| {
                let mut round_key = [0u8; 16];
                for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
                    dst.copy_from_slice(word);
                }
                round_key
            })
            .collect()
    }
}

fn ensure_plaintext_len(len: usize) -> Result<()> {
    if len as u64 > MAX_PLAINTEXT_LEN {
        return Err(Error::PlaintextTooLarge { len });
    }
    Ok(())
}
