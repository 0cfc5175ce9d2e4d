use std::fmt::Display;

use crate::{
    domain::ports::config::SALT_LEN,
    error::{AppError, ErrCredential},
};

/// Hex text of a 16-byte salt. The text form, not the raw bytes, is what gets
/// hashed together with the password.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Salt {
    hex: String,
}

impl Salt {
    pub fn from_bytes(bytes: &[u8; SALT_LEN]) -> Self {
        Self {
            hex: hex::encode(bytes),
        }
    }

    pub fn from_hex(raw: &str) -> Result<Self, AppError> {
        if !is_lower_hex(raw, SALT_LEN * 2) {
            return Err(AppError::Credential(ErrCredential::MalformedSalt));
        }

        Ok(Self {
            hex: raw.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

impl Display for Salt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordDigest {
    hex: String,
}

impl PasswordDigest {
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self {
            hex: hex::encode(bytes),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

impl Display for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub salt: Salt,
    pub digest: PasswordDigest,
}

// Downstream harnesses parse these two lines; keep labels and spacing exact.
impl Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Salt: {}", self.salt)?;
        writeln!(f, "Password hash: {}", self.digest)
    }
}

pub(crate) fn is_lower_hex(raw: &str, len: usize) -> bool {
    raw.len() == len && raw.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
