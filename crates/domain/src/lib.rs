//! WebFilter Domain Layer
pub mod config;
pub mod errors;
pub mod filter;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use filter::{ensure_url_scheme, has_url_scheme, is_valid_filter_word, Filter};
