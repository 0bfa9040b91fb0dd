//! Secure random index selection
//!
//! The radio option pick is the one place the pipeline consumes
//! randomness, and it has to come from a cryptographically secure source.
//! The source is injected so tests can pin the choice.

use rand::TryRng;
use rand::rngs::SysRng;

use crate::error::Ephoto360Error;

/// A cryptographically secure source of uniform random indices.
pub trait SecureRandom {
    /// Returns a uniformly distributed index in `[0, len)`.
    ///
    /// `len` must be non-zero; callers only reach this with at least one
    /// option harvested.
    fn pick_index(&self, len: usize) -> Result<usize, Ephoto360Error>;
}

/// OS-entropy backed [`SecureRandom`], the default source.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn pick_index(&self, len: usize) -> Result<usize, Ephoto360Error> {
        let mut rng = SysRng;
        let raw = rng
            .try_next_u64()
            .map_err(|err| Ephoto360Error::SecureRandom(err.to_string()))?;
        // Fixed-point widening multiply: maps the full u64 range onto
        // [0, len) without rejection or modulo bias.
        Ok(((u128::from(raw) * len as u128) >> 64) as usize)
    }
}
