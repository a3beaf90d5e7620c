//! FIPS-197 forward cipher on a single 16-byte block.
//!
//! GCM only ever runs AES in the forward direction (the keystream and the hash
//! subkey are both produced by encryption), so no inverse cipher is provided.

mod constants;
mod encryption;
mod util;

pub(crate) use constants::{RCON, SBOX};
pub(crate) use encryption::encrypt_block;
pub(crate) use util::xor_words;
