pub mod config;
pub mod random;
