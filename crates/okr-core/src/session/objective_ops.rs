//! Objective-level operations for the ObjectiveSession.

use jiff::civil::Date;
use log::{debug, info, warn};

use super::{Drafting, ObjectiveSession, SessionState};
use crate::{
    error::Result,
    models::{KeyResult, ObjectiveRecord},
    suggest::SUGGESTION_POOL,
};

impl ObjectiveSession {
    /// Opens an empty draft.
    ///
    /// Returns `false` when a draft is already open; the open draft is left
    /// untouched.
    pub fn open(&mut self) -> bool {
        if self.is_drafting() {
            debug!("open: draft already open");
            return false;
        }
        debug!("open: Empty -> Drafting");
        self.state = SessionState::Drafting(Drafting::default());
        true
    }

    /// Chooses the supervisor key result this objective aligns with.
    ///
    /// The choice also becomes the objective statement, and the key result
    /// list is replaced wholesale by four freshly generated AI key results.
    /// Anything the user had added before is discarded. The suggestion card
    /// opens with the last drawn suggestion, or the first pool entry when
    /// nothing has been drawn yet.
    pub fn set_alignment(&mut self, choice: impl Into<String>) -> bool {
        let Some(drafting) = Self::drafting(&mut self.state, "set_alignment") else {
            return false;
        };
        let choice = choice.into();

        let texts = self.suggestions.alignment_key_results();
        let key_results: Vec<KeyResult> = texts
            .iter()
            .map(|text| KeyResult::suggested(self.ids.key_result(), *text))
            .collect();

        debug!(
            "set_alignment: '{choice}' replaces {} key results with {}",
            drafting.draft.key_results.len(),
            key_results.len()
        );

        drafting.suggestion_count = key_results.len();
        drafting.pending_suggestion = Some(
            drafting
                .last_suggestion
                .clone()
                .unwrap_or_else(|| SUGGESTION_POOL[0].to_string()),
        );
        drafting.draft.objective = choice.clone();
        drafting.draft.alignment = choice;
        drafting.draft.key_results = key_results;
        true
    }

    /// Replaces the objective statement without touching the alignment.
    pub fn set_objective(&mut self, text: impl Into<String>) -> bool {
        let Some(drafting) = Self::drafting(&mut self.state, "set_objective") else {
            return false;
        };
        drafting.draft.objective = text.into();
        true
    }

    /// Sets or clears the objective deadline.
    pub fn set_deadline(&mut self, deadline: Option<Date>) -> bool {
        let Some(drafting) = Self::drafting(&mut self.state, "set_deadline") else {
            return false;
        };
        drafting.draft.deadline = deadline;
        true
    }

    /// Hands the draft to the save collaborator and closes the session.
    ///
    /// No field is validated first; an objective with no text, alignment or
    /// deadline is saved as is. Returns `Ok(None)` when nothing is open.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's error. The draft stays open in that case.
    pub fn save(&mut self) -> Result<Option<ObjectiveRecord>> {
        let SessionState::Drafting(drafting) = &self.state else {
            debug!("save: ignored, no objective is being drafted");
            return Ok(None);
        };

        let record = drafting.draft.to_record();
        if let Err(e) = self.saver.save(&record) {
            warn!("save: collaborator rejected objective '{}': {e}", record.objective);
            return Err(e);
        }

        info!(
            "Saved objective '{}' with {} key results",
            record.objective,
            record.key_results.len()
        );
        self.state = SessionState::Empty;
        Ok(Some(record))
    }

    /// Discards the draft without calling the save collaborator.
    ///
    /// Returns `false` when nothing was open.
    pub fn cancel(&mut self) -> bool {
        if !self.is_drafting() {
            debug!("cancel: ignored, no objective is being drafted");
            return false;
        }
        debug!("cancel: Drafting -> Empty");
        self.state = SessionState::Empty;
        true
    }
}
