use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::Zeroize;

use crate::domain::credential::{PasswordDigest, Salt};

/// SHA-256 over the salt's hex text followed by the password bytes.
pub fn salted_digest(salt: &Salt, password: &str) -> PasswordDigest {
    let mut input = Vec::with_capacity(salt.as_str().len() + password.len());
    input.extend_from_slice(salt.as_str().as_bytes());
    input.extend_from_slice(password.as_bytes());

    let hash = Sha256::digest(&input);
    input.zeroize();

    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    debug!("digest derived");
    PasswordDigest::from_bytes(&bytes)
}
