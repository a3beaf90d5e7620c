mod ctr;
mod gcm;
pub(crate) mod util;

pub(crate) use ctr::apply_keystream;
pub(crate) use gcm::compute_tag;
pub use gcm::{MAX_PLAINTEXT_LEN, TAG_LEN};
