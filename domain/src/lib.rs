pub mod conventions;
pub mod error;
pub mod models;
pub mod ports;
pub mod prompt;
pub mod session;
