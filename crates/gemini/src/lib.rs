mod client;
mod error;
mod types;

pub use client::{DEFAULT_API_BASE, DEFAULT_MODEL, GeminiClient, GeminiClientBuilder};
pub use error::Error;
