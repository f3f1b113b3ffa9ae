//! # Rishom Shared
//! 
//! Configuration, telemetry, and constants shared by the site crates.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::AppError;
