/// Password the broker's test user is provisioned with.
pub const DEFAULT_PASSWORD: &str = "testing";

/// Salt length in bytes, before hex encoding.
pub const SALT_LEN: usize = 16;

/// Fixture settings. Built from compile-time defaults only; the generator
/// takes no flags or environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureConfig {
    pub password: String,
}

impl FixtureConfig {
    pub fn new() -> Self {
        Self {
            password: DEFAULT_PASSWORD.to_string(),
        }
    }

    pub fn with_password(password: &str) -> Self {
        Self {
            password: password.to_string(),
        }
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self::new()
    }
}
