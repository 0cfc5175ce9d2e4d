use std::io::Write;

use tracing::info;

use crate::{
    core::{digest::salted_digest, salt::generate_salt},
    domain::{
        credential::{Credential, Salt},
        ports::{config::FixtureConfig, random::RandomSource},
    },
    error::{AppError, ErrIO},
};

pub struct FixtureService<R: RandomSource> {
    rng: R,
    config: FixtureConfig,
}

impl<R: RandomSource> FixtureService<R> {
    pub fn new(rng: R, config: FixtureConfig) -> Self {
        Self { rng, config }
    }

    /// Draws a fresh salt and derives the broker credential for it.
    pub fn generate(&mut self) -> Result<Credential, AppError> {
        let salt = generate_salt(&mut self.rng)?;
        Ok(self.credential_for(&salt))
    }

    pub fn credential_for(&self, salt: &Salt) -> Credential {
        Credential {
            salt: salt.clone(),
            digest: salted_digest(salt, &self.config.password),
        }
    }

    pub fn write_credential<W: Write>(
        &self,
        credential: &Credential,
        out: &mut W,
    ) -> Result<(), AppError> {
        write!(out, "{}", credential).map_err(|e| AppError::IO(ErrIO::IoError(e)))?;
        out.flush().map_err(|e| AppError::IO(ErrIO::IoError(e)))?;
        info!(salt = credential.salt.as_str(), "fixture credential emitted");
        Ok(())
    }
}
