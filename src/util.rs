use rand::TryCryptoRng;
use tracing::warn;

use crate::error::{Error, Result};

/// Fills `dest` from a cryptographically secure source. May block while the
/// OS entropy pool initialises.
pub(crate) fn fill_random<R: TryCryptoRng + ?Sized>(rng: &mut R, dest: &mut [u8]) -> Result<()> {
    rng.try_fill_bytes(dest).map_err(|e| {
        warn!(error = %e, requested = dest.len(), "entropy source failed");
        Error::EntropySourceUnavailable(e.to_string())
    })
}
