use crate::error::AppError;

pub trait RandomSource {
    /// Fill `dest` entirely or fail; partial fills are never returned as success.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), AppError>;
}
