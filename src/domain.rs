pub mod credential;
pub mod ports;
