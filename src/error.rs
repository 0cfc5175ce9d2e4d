use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Random error: {0}")]
    Random(#[from] ErrRandom),
    #[error("Credential error: {0}")]
    Credential(#[from] ErrCredential),
    #[error("Output error: {0}")]
    IO(#[from] ErrIO),
}

#[derive(Debug, Error)]
pub enum ErrRandom {
    #[error("system random source unavailable: {0}")]
    RandomSourceUnavailable(String),
}

#[derive(Debug, Error)]
pub enum ErrCredential {
    #[error("salt must be 32 lowercase hex characters")]
    MalformedSalt,
}

#[derive(Debug, Error)]
pub enum ErrIO {
    #[error("{0}")]
    IoError(#[from] std::io::Error),
}
