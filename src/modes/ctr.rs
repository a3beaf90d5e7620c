use rayon::prelude::*;
use tracing::trace;

use crate::block::encrypt_block;
use crate::error::{Error, Result};
use crate::modes::util::{PARALLEL_THRESHOLD, ctr_block, xor_chunks};

/// XORs `input` with the AES-CTR keystream for `iv`, counting up from
/// `ctr_start`. Encryption and decryption are the same operation.
pub(crate) fn apply_keystream(
    input: &[u8],
    round_keys: &[[u8; 16]],
    iv: &[u8; 12],
    ctr_start: u32,
) -> Result<Vec<u8>> {
    if input.len() > PARALLEL_THRESHOLD {
        trace!(len = input.len(), "ctr keystream on rayon pool");
        ctr_core_parallel(input, round_keys, iv, ctr_start)
    } else {
        ctr_core_serial(input, round_keys, iv, ctr_start)
    }
}

/// The 32-bit counter must not wrap: every block from `ctr_start` on needs its own value.
fn ensure_counter_space(len: usize, ctr_start: u32) -> Result<()> {
    let blocks = len.div_ceil(16) as u64;
    if blocks > 0 && u64::from(ctr_start) + (blocks - 1) > u64::from(u32::MAX) {
        return Err(Error::PlaintextTooLarge { len });
    }
    Ok(())
}

pub(crate) fn ctr_core_parallel(
    input: &[u8],
    round_keys: &[[u8; 16]],
    iv: &[u8; 12],
    ctr_start: u32,
) -> Result<Vec<u8>> {
    ensure_counter_space(input.len(), ctr_start)?;

    let mut output = vec![0u8; input.len()];
    output
        .par_chunks_mut(16)
        .zip(input.par_chunks(16))
        .enumerate()
        .for_each(|(i, (out_chunk, in_chunk))| {
            // i < 2^32 after the counter space check
            let ctr = ctr_start.wrapping_add(i as u32);
            let keystream = encrypt_block(&ctr_block(iv, ctr), round_keys);
            for ((o, k), p) in out_chunk.iter_mut().zip(&keystream).zip(in_chunk) {
                *o = k ^ p;
            }
        });

    Ok(output)
}

pub(crate) fn ctr_core_serial(
    input: &[u8],
    round_keys: &[[u8; 16]],
    iv: &[u8; 12],
    ctr_start: u32,
) -> Result<Vec<u8>> {
    ensure_counter_space(input.len(), ctr_start)?;

    let mut output = Vec::with_capacity(input.len());
    let mut ctr = ctr_start;
    for chunk in input.chunks(16) {
        let keystream = encrypt_block(&ctr_block(iv, ctr), round_keys);
        let block = xor_chunks(&keystream, chunk);
        output.extend_from_slice(&block[..chunk.len()]);
        ctr = ctr.wrapping_add(1);
    }

    Ok(output)
}
