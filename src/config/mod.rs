//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), optional
//!     → loader.rs (parse & deserialize)
//!     → CLI overrides (ConfigOverrides)
//!     → validation.rs (semantic checks, once, on the merged result)
//!     → LoggerConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{
    load_config, load_or_default, load_with_overrides, parse_config, ConfigError, ConfigOverrides,
};
pub use schema::LoggerConfig;
pub use schema::ListenerConfig;
pub use schema::LogFileConfig;
pub use validation::{validate_config, ValidationError};
