use super::constants::SBOX;
use super::util::{add_round_key, dbl};

/// Encrypts one 16-byte block with an expanded key schedule of 11, 13 or 15
/// round keys. State is column-major, matching FIPS-197.
#[inline(always)]
pub(crate) fn encrypt_block(input: &[u8; 16], round_keys: &[[u8; 16]]) -> [u8; 16] {
    let mut state = *input;
    let last = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[0]);

    for round_key in &round_keys[1..last] {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }

    // final round has no MixColumns
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[last]);

    state
}

#[inline(always)]
fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

/// Row `r` rotates left by `r` positions. Byte (row, col) sits at `col * 4 + row`.
#[inline(always)]
fn shift_rows(state: &mut [u8; 16]) {
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + row) & 3) * 4 + row];
        }
    }
}

/// [ d0 ]      [ 2  3  1  1 ]  [ b0 ]
/// | d1 |  =   | 1  2  3  1 |  | b1 |
/// | d2 |      | 1  1  2  3 |  | b2 |
/// [ d3 ]      [ 3  1  1  2 ]  [ b3 ]
#[inline(always)]
fn mix_columns(state: &mut [u8; 16]) {
    for column in state.chunks_exact_mut(4) {
        let (a, b, c, d) = (column[0], column[1], column[2], column[3]);
        column[0] = dbl(a ^ b) ^ b ^ c ^ d;
        column[1] = dbl(b ^ c) ^ c ^ d ^ a;
        column[2] = dbl(c ^ d) ^ d ^ a ^ b;
        column[3] = dbl(d ^ a) ^ a ^ b ^ c;
    }
}
