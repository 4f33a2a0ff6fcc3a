//! Overdue speaker logger.
//!
//! A single-route HTTP service that records speakers who ran over (or under)
//! their allotted time by appending one line per report to a plain-text file.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod overdue;

pub use config::LoggerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use overdue::{LogError, OverdueEvent, OverdueLog};
