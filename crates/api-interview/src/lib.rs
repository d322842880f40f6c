mod config;
mod env;
mod error;
mod openapi;
mod routes;
mod state;

pub use config::InterviewConfig;
pub use env::GeminiEnv;
pub use openapi::openapi;
pub use routes::router;
