mod app;
mod config;
mod http;
mod source;
mod transport;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
pub use source::SourceError;
pub use transport::TransportError;
pub use validation::ValidationError;
