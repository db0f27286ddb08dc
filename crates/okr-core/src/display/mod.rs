//! Display formatting wrappers and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context such as a whole session view or the outcome
//! of an operation. All output is markdown, rendered by the CLI's terminal
//! renderer or returned verbatim to MCP clients.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Draft, KR)     │───▶│ Result Types    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: key result list wrapper
//! - [`results`]: operation result types (CreateResult, UpdateResult,
//!   DeleteResult, SaveResult)
//! - [`session`]: whole-session view including the suggestion card
//! - [`status`]: status and confirmation messages (OperationStatus)
//! - [`datetime`]: deadline formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use okr_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Opened a new objective");
//! assert_eq!(status.to_string(), "Success: Opened a new objective\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod session;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::KeyResults;
pub use datetime::{Deadline, LongDate};
pub use results::{CreateResult, DeleteResult, SaveResult, UpdateResult};
pub use session::SessionView;
pub use status::{OperationStatus, StatusKind};
