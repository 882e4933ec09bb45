// Public API for the simli-text2video library

pub mod app;
pub mod config;
pub mod errors;
pub mod output;
pub mod player;
pub mod simli;
pub mod trace;

// Re-export commonly used types
pub use app::{run, Outcome};
pub use config::Config;
pub use errors::{Result, Text2VideoError};
pub use simli::simli::Simli;
