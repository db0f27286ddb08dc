//! Core library for the OKR workspace.
//!
//! This crate provides the objective editing session, its data models, the
//! canned AI suggestion generator, the navigation shell and the chat widget.
//! Everything runs in memory; a finished objective is handed to a
//! [`SaveCollaborator`] rather than stored.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual formatting such as
//!   the whole session view or operation results
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use okr_core::{display::SessionView, RecordingSaver, SessionBuilder, SUPERVISOR_KEY_RESULTS};
//!
//! let saver = RecordingSaver::new();
//! let mut session = SessionBuilder::new()
//!     .with_seed(Some(7))
//!     .with_saver(saver.clone())
//!     .build();
//!
//! session.open();
//! session.set_alignment(SUPERVISOR_KEY_RESULTS[0]);
//!
//! let id = session.add_key_result().unwrap();
//! session.update_key_result_text(id, "Ship the onboarding revamp");
//! session.add_milestone(id);
//!
//! println!("{}", SessionView(&session));
//!
//! session.save()?;
//! assert_eq!(saver.records()[0].key_results.len(), 5);
//! # okr_core::Result::<()>::Ok(())
//! ```

pub mod chat;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod saver;
pub mod session;
pub mod suggest;
pub mod workspace;

// Re-export commonly used types
pub use chat::{ChatMessage, ChatWidget, CANNED_REPLY, GREETING};
pub use display::{
    CreateResult, DeleteResult, KeyResults, OperationStatus, SaveResult, SessionView,
    UpdateResult,
};
pub use error::{OkrError, Result};
pub use models::{
    KeyResult, KeyResultId, Milestone, MilestoneId, ObjectiveDraft, ObjectiveRecord, Weight,
};
pub use saver::{LogSaver, RecordingSaver, SaveCollaborator};
pub use session::{ObjectiveSession, SessionBuilder, SessionState};
pub use suggest::{SuggestionGenerator, SUGGESTION_POOL, SUPERVISOR_KEY_RESULTS};
pub use workspace::{NavEntry, VisibleEntry, Workspace, NAVIGATION};
