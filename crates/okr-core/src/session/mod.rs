//! The objective editing session.
//!
//! [`ObjectiveSession`] is the state machine behind the "Set Objective"
//! dialog. It starts [`SessionState::Empty`], moves to
//! [`SessionState::Drafting`] when opened, and falls back to `Empty` when the
//! draft is saved or cancelled. Nothing survives a save or cancel except the
//! id counter.
//!
//! ```text
//!            open()                 save() / cancel()
//!   Empty ───────────▶ Drafting ─────────────────────▶ Empty
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: wires a selector and a save collaborator into a session
//! - [`objective_ops`]: open, alignment, objective text, deadline, save, cancel
//! - [`key_result_ops`]: key result and milestone edits
//! - [`suggestion_ops`]: the pending suggestion card and regeneration
//! - [`handlers`]: parameter-driven wrappers that report outcomes as markdown
//!
//! Every mutation is synchronous and infallible. Mutations that arrive while
//! the session is `Empty`, or that name an unknown key result, are ignored
//! and only logged at debug level.
//!
//! # Examples
//!
//! ```rust
//! use okr_core::{suggest::FixedSelector, SessionBuilder};
//!
//! let mut session = SessionBuilder::new()
//!     .with_selector(FixedSelector(0))
//!     .build();
//!
//! session.open();
//! session.set_alignment("Expand market share by 12%");
//!
//! let draft = session.draft().unwrap();
//! assert_eq!(draft.objective, "Expand market share by 12%");
//! assert_eq!(draft.key_results.len(), 4);
//!
//! let id = draft.key_results[0].id;
//! assert!(session.update_key_result_weight(id, "40"));
//! assert!(!session.update_key_result_weight(id, "140"));
//!
//! let record = session.save().unwrap().unwrap();
//! assert_eq!(record.key_results[0].weight.get(), 40);
//! assert!(session.draft().is_none());
//! ```

use log::debug;

use crate::{
    models::{IdGenerator, ObjectiveDraft},
    saver::SaveCollaborator,
    suggest::SuggestionGenerator,
};

pub mod builder;
pub mod handlers;
pub mod key_result_ops;
pub mod objective_ops;
pub mod suggestion_ops;


pub use builder::SessionBuilder;

/// Working state of an open dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drafting {
    /// The objective being edited
    pub draft: ObjectiveDraft,

    /// Suggestion shown on the card above the key result list
    pub pending_suggestion: Option<String>,

    /// Most recent draw, shown again when an alignment reopens the card
    pub last_suggestion: Option<String>,

    /// Number of key results generated by the last alignment choice
    pub suggestion_count: usize,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No dialog open
    #[default]
    Empty,
    /// Dialog open with a draft
    Drafting(Drafting),
}

/// Editing session for one objective at a time.
pub struct ObjectiveSession {
    pub(crate) state: SessionState,
    pub(crate) ids: IdGenerator,
    pub(crate) suggestions: SuggestionGenerator,
    pub(crate) saver: Box<dyn SaveCollaborator>,
}

impl ObjectiveSession {
    /// Creates an empty session.
    pub(crate) fn new(suggestions: SuggestionGenerator, saver: Box<dyn SaveCollaborator>) -> Self {
        Self {
            state: SessionState::Empty,
            ids: IdGenerator::new(),
            suggestions,
            saver,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether a draft is open.
    pub fn is_drafting(&self) -> bool {
        matches!(self.state, SessionState::Drafting(_))
    }

    /// The open draft, if any.
    pub fn draft(&self) -> Option<&ObjectiveDraft> {
        match &self.state {
            SessionState::Drafting(drafting) => Some(&drafting.draft),
            SessionState::Empty => None,
        }
    }

    /// Text of the suggestion card, if one is showing.
    pub fn pending_suggestion(&self) -> Option<&str> {
        match &self.state {
            SessionState::Drafting(drafting) => drafting.pending_suggestion.as_deref(),
            SessionState::Empty => None,
        }
    }

    /// Number of key results generated by the last alignment choice.
    pub fn suggestion_count(&self) -> usize {
        match &self.state {
            SessionState::Drafting(drafting) => drafting.suggestion_count,
            SessionState::Empty => 0,
        }
    }

    /// Borrows the open draft state, logging when the session is empty.
    pub(crate) fn drafting<'a>(state: &'a mut SessionState, op: &str) -> Option<&'a mut Drafting> {
        match state {
            SessionState::Drafting(drafting) => Some(drafting),
            SessionState::Empty => {
                debug!("{op}: ignored, no objective is being drafted");
                None
            }
        }
    }
}

impl std::fmt::Debug for ObjectiveSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectiveSession")
            .field("state", &self.state)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}
