/// Inputs longer than this run the CTR keystream on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4 * 1024;

const GHASH_R: u128 = 0xE100_0000_0000_0000_0000_0000_0000_0000; // reduction constant for GHASH

/// Counter block `IV || ctr` with a 32-bit big-endian counter.
#[inline(always)]
pub(crate) fn ctr_block(iv: &[u8; 12], ctr: u32) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[..12].copy_from_slice(iv);
    block[12..].copy_from_slice(&ctr.to_be_bytes());
    block
}

/// XORs up to 16 bytes of `chunk` into a copy of `y`. Missing bytes act as zero
/// padding, which is what GHASH needs for a short final block.
#[inline(always)]
pub(crate) fn xor_chunks(y: &[u8; 16], chunk: &[u8]) -> [u8; 16] {
    let mut out = *y;
    for (o, c) in out.iter_mut().zip(chunk) {
        *o ^= c;
    }
    out
}

/// Multiplication in GF(2^128) with GCM's bit-reflected convention.
/// Branch-free on both operands.
#[inline(always)]
pub(crate) fn gf_mul(x: [u8; 16], h: [u8; 16]) -> [u8; 16] {
    let x = u128::from_be_bytes(x);
    let mut v = u128::from_be_bytes(h);
    let mut z: u128 = 0;

    // x bits from MSB to LSB
    for i in 0..128 {
        let bit = (x >> (127 - i)) & 1;
        z ^= v & (0u128.wrapping_sub(bit));

        let lsb = v & 1;
        v >>= 1;
        v ^= GHASH_R & (0u128.wrapping_sub(lsb));
    }

    z.to_be_bytes()
}
