pub mod args;
pub mod code_map;
pub mod error;
pub mod key_service;
pub mod network;
pub mod runner;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
