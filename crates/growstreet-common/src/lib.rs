pub mod errors;

pub use errors::{ConfigError, GrowstreetError, StyleError};

pub type Result<T> = std::result::Result<T, GrowstreetError>;
