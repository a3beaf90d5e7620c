use crate::block::encrypt_block;
use crate::modes::util::{ctr_block, gf_mul, xor_chunks};

/// Authentication tag length in bytes (128 bits).
pub const TAG_LEN: usize = 16;

/// Largest plaintext GCM can protect under one nonce: the 32-bit counter runs
/// from 2 to 2^32 - 1 (counter 1 masks the tag), so 2^32 - 2 blocks.
pub const MAX_PLAINTEXT_LEN: u64 = (u32::MAX as u64 - 1) * 16;

/*
NIST SP 800-38D, section 7.1 (96-bit IV)

H  = E(K, 0^128)
J0 = IV || 0^31 || 1
S  = GHASH_H(A || 0^v || C || 0^u || [len(A)]_64 || [len(C)]_64)
T  = E(K, J0) ^ S

GHASH: X = 0; for each block B: X = (X ^ B) * H
*/
/// Computes the GCM tag over `aad` and `ciphertext`.
pub(crate) fn compute_tag(
    ciphertext: &[u8],
    round_keys: &[[u8; 16]],
    iv: &[u8; 12],
    aad: &[u8],
) -> [u8; TAG_LEN] {
    let h = encrypt_block(&[0u8; 16], round_keys);
    let j0 = encrypt_block(&ctr_block(iv, 1), round_keys);

    let mut s = [0u8; 16];
    for chunk in aad.chunks(16) {
        s = gf_mul(xor_chunks(&s, chunk), h);
    }
    for chunk in ciphertext.chunks(16) {
        s = gf_mul(xor_chunks(&s, chunk), h);
    }

    // lengths in bits
    let mut len_block = [0u8; 16];
    len_block[..8].copy_from_slice(&((aad.len() as u64) * 8).to_be_bytes());
    len_block[8..].copy_from_slice(&((ciphertext.len() as u64) * 8).to_be_bytes());
    s = gf_mul(xor_chunks(&s, &len_block), h);

    xor_chunks(&s, &j0)
}
