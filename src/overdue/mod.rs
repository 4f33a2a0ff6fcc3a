//! Overdue speaker logging.
//!
//! # Data Flow
//! ```text
//! request body (JSON)
//!     → types.rs (decode, require `name` + `overdueTime`)
//!     → format.rs (render "{name} exceeded time by {-overdueTime} seconds\n")
//!     → sink.rs (append to the configured file)
//! ```

pub mod format;
pub mod sink;
pub mod types;

pub use format::render_line;
pub use sink::OverdueLog;
pub use types::{Acknowledgement, LogError, LogResult, OverdueEvent};
