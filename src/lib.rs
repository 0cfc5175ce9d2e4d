pub mod application;
pub mod core;
pub mod domain;
pub mod error;
pub mod infra;
pub mod tracing;

#[cfg(test)]
mod test;
