pub mod digest;
pub mod salt;
