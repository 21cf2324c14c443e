pub mod api;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod server;
pub mod tools;

pub use error::{Error, Result};

// Declare tests module only when testing
#[cfg(test)]
pub mod tests;
