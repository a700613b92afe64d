pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod news;
pub mod refresh;
pub mod scheduler;

pub use error::RestError;
