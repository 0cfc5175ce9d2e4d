use rand::RngCore;
use rand_core::OsRng;

use crate::{
    domain::ports::random::RandomSource,
    error::{AppError, ErrRandom},
};

/// Operating system CSPRNG. There is no fallback: if the OS cannot hand out
/// entropy the error reaches the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandomSource;

impl OsRandomSource {
    pub fn new() -> Self {
        OsRandomSource
    }
}

impl RandomSource for OsRandomSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), AppError> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            log::warn!("os random source failed: {}", e);
            AppError::Random(ErrRandom::RandomSourceUnavailable(e.to_string()))
        })
    }
}
