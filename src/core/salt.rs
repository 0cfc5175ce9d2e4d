use tracing::debug;

use crate::{
    domain::{credential::Salt, ports::config::SALT_LEN, ports::random::RandomSource},
    error::AppError,
};

pub fn generate_salt<R: RandomSource>(rng: &mut R) -> Result<Salt, AppError> {
    let mut bytes = [0u8; SALT_LEN];
    rng.fill_bytes(&mut bytes)?;
    let salt = Salt::from_bytes(&bytes);
    debug!(len = SALT_LEN, "salt generated");
    Ok(salt)
}
