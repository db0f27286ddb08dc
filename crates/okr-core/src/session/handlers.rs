//! Handler operations that take interface parameters and return markdown.
//!
//! The CLI session loop and the MCP server both drive a session through these
//! methods, so the two interfaces report every outcome with the same wording.
//! Requests the session ignores come back as an "Ignored:" status rather than
//! an error; only malformed dates and save failures are errors.

use super::ObjectiveSession;
use crate::{
    display::{CreateResult, DeleteResult, OperationStatus, SaveResult, SessionView, UpdateResult},
    error::Result,
    models::{KeyResult, KeyResultId},
    params::{
        Alignment, Id, KeyResultDeadline, KeyResultText, KeyResultWeight, ObjectiveText,
        RegenerateKeyResult, SetDeadline,
    },
};

const NOT_DRAFTING: &str = "No objective is being drafted. Open a session first.";

impl ObjectiveSession {
    /// Handle showing the dialog as it stands.
    pub fn handle_show(&self) -> String {
        SessionView(self).to_string()
    }

    /// Handle opening the objective dialog.
    pub fn handle_open(&mut self) -> String {
        OperationStatus::applied(
            self.open(),
            "Opened a new objective draft",
            "An objective draft is already open",
        )
        .to_string()
    }

    /// Handle choosing an alignment; shows the regenerated draft.
    pub fn handle_set_alignment(&mut self, params: &Alignment) -> String {
        if !self.set_alignment(params.choice.as_str()) {
            return OperationStatus::ignored(NOT_DRAFTING).to_string();
        }
        format!(
            "{}\n\n{}",
            OperationStatus::success(format!("Aligned with '{}'", params.choice)),
            SessionView(self)
        )
    }

    /// Handle replacing the objective statement.
    pub fn handle_set_objective(&mut self, params: &ObjectiveText) -> String {
        OperationStatus::applied(
            self.set_objective(params.text.as_str()),
            "Objective updated",
            NOT_DRAFTING,
        )
        .to_string()
    }

    /// Handle setting or clearing the objective deadline.
    ///
    /// # Errors
    ///
    /// * `OkrError::InvalidInput` - When the deadline is not a calendar date
    pub fn handle_set_deadline(&mut self, params: &SetDeadline) -> Result<String> {
        let deadline = params.parse()?;
        let done = match deadline {
            Some(date) => format!("Objective deadline set to {date}"),
            None => "Objective deadline cleared".to_string(),
        };
        Ok(OperationStatus::applied(self.set_deadline(deadline), done, NOT_DRAFTING).to_string())
    }

    /// Handle adding a blank key result.
    pub fn handle_add_key_result(&mut self) -> String {
        match self.add_key_result().and_then(|id| self.snapshot(id)) {
            Some(kr) => CreateResult::new(kr).to_string(),
            None => OperationStatus::ignored(NOT_DRAFTING).to_string(),
        }
    }

    /// Handle deleting a key result.
    pub fn handle_delete_key_result(&mut self, params: &Id) -> String {
        match self.delete_key_result(params.key_result()) {
            Some(kr) => DeleteResult::new(kr).to_string(),
            None => self.missing(params.id),
        }
    }

    /// Handle replacing a key result's text.
    pub fn handle_update_key_result_text(&mut self, params: &KeyResultText) -> String {
        let id = params.key_result();
        if !self.update_key_result_text(id, params.text.as_str()) {
            return self.missing(params.id);
        }
        self.updated(id, format!("Text: {}", params.text))
    }

    /// Handle a typed weight. Invalid input keeps the previous weight.
    pub fn handle_update_key_result_weight(&mut self, params: &KeyResultWeight) -> String {
        let id = params.key_result();
        if self.update_key_result_weight(id, &params.weight) {
            let weight = self.snapshot(id).map(|kr| kr.weight.to_string());
            return self.updated(id, format!("Weight: {}", weight.unwrap_or_default()));
        }
        if self.snapshot(id).is_none() {
            return self.missing(params.id);
        }
        OperationStatus::ignored(format!(
            "Weight '{}' does not start with a number from 0 to 100; key result {id} keeps its weight",
            params.weight
        ))
        .to_string()
    }

    /// Handle setting or clearing a key result deadline.
    ///
    /// # Errors
    ///
    /// * `OkrError::InvalidInput` - When the deadline is not a calendar date
    pub fn handle_update_key_result_deadline(&mut self, params: &KeyResultDeadline) -> Result<String> {
        let id = params.key_result();
        let deadline = params.parse()?;
        if !self.update_key_result_deadline(id, deadline) {
            return Ok(self.missing(params.id));
        }
        let change = match deadline {
            Some(date) => format!("Deadline: {date}"),
            None => "Deadline cleared".to_string(),
        };
        Ok(self.updated(id, change))
    }

    /// Handle adding a milestone to a key result.
    pub fn handle_add_milestone(&mut self, params: &Id) -> String {
        let id = params.key_result();
        match self.add_milestone(id) {
            Some(milestone) => self.updated(id, format!("Added milestone {milestone}")),
            None => self.missing(params.id),
        }
    }

    /// Handle rewriting a key result from a prompt. User-authored key results
    /// may be rewritten too.
    pub fn handle_regenerate_key_result(&mut self, params: &RegenerateKeyResult) -> String {
        let id = params.key_result();
        if params.prompt.trim().is_empty() {
            return OperationStatus::ignored("Describe what the key result should focus on")
                .to_string();
        }
        match self.regenerate_key_result(id, &params.prompt) {
            Some(text) => {
                let change = format!("Text: {text}");
                self.updated(id, change)
            }
            None => self.missing(params.id),
        }
    }

    /// Handle drawing a suggestion for the card.
    pub fn handle_request_suggestion(&mut self) -> String {
        if self.request_ai_suggestion().is_none() {
            return OperationStatus::ignored(NOT_DRAFTING).to_string();
        }
        SessionView(self).to_string()
    }

    /// Handle accepting the suggestion on the card.
    pub fn handle_accept_suggestion(&mut self) -> String {
        match self.accept_pending_suggestion().and_then(|id| self.snapshot(id)) {
            Some(kr) => CreateResult::new(kr).to_string(),
            None => OperationStatus::ignored("No suggestion is showing").to_string(),
        }
    }

    /// Handle hiding the suggestion card.
    pub fn handle_dismiss_suggestion(&mut self) -> String {
        OperationStatus::applied(
            self.cancel_pending_suggestion(),
            "Suggestion dismissed",
            "No suggestion is showing",
        )
        .to_string()
    }

    /// Handle confirming the objective.
    ///
    /// # Errors
    ///
    /// Returns the save collaborator's error; the draft stays open.
    pub fn handle_save(&mut self) -> Result<String> {
        Ok(match self.save()? {
            Some(record) => SaveResult(record).to_string(),
            None => OperationStatus::ignored(NOT_DRAFTING).to_string(),
        })
    }

    /// Handle discarding the draft.
    pub fn handle_cancel(&mut self) -> String {
        OperationStatus::applied(self.cancel(), "Objective draft discarded", NOT_DRAFTING)
            .to_string()
    }

    fn snapshot(&self, id: KeyResultId) -> Option<KeyResult> {
        self.draft()?.key_result(id).cloned()
    }

    fn updated(&self, id: KeyResultId, change: String) -> String {
        match self.snapshot(id) {
            Some(kr) => UpdateResult::with_changes(kr, vec![change]).to_string(),
            None => self.missing(id.0),
        }
    }

    fn missing(&self, id: u64) -> String {
        if self.is_drafting() {
            OperationStatus::ignored(format!("Key result with ID {id} not found")).to_string()
        } else {
            OperationStatus::ignored(NOT_DRAFTING).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{suggest::FixedSelector, OkrError, RecordingSaver, SessionBuilder};

    fn drafting_session() -> ObjectiveSession {
        let mut session = SessionBuilder::new()
            .with_selector(FixedSelector(1))
            .with_saver(RecordingSaver::new())
            .build();
        session.open();
        session
    }

    #[test]
    fn test_handlers_ignore_when_empty() {
        let mut session = SessionBuilder::new().build();
        let output = session.handle_add_key_result();
        assert!(output.starts_with("Ignored:"), "output was: {output}");
        assert!(session.handle_save().unwrap().starts_with("Ignored:"));
        assert!(session.handle_cancel().starts_with("Ignored:"));
        assert!(session
            .handle_delete_key_result(&Id { id: 1 })
            .contains("No objective is being drafted"));
    }

    #[test]
    fn test_handle_add_and_update() {
        let mut session = drafting_session();
        let output = session.handle_add_key_result();
        assert!(output.starts_with("Added key result with ID: 1"));

        let output = session.handle_update_key_result_text(&KeyResultText {
            id: 1,
            text: "Launch referral program".to_string(),
        });
        assert!(output.contains("Text: Launch referral program"));

        let output = session.handle_update_key_result_weight(&KeyResultWeight {
            id: 1,
            weight: "40".to_string(),
        });
        assert!(output.contains("Weight: 40%"));

        let output = session.handle_update_key_result_weight(&KeyResultWeight {
            id: 1,
            weight: "forty".to_string(),
        });
        assert!(output.starts_with("Ignored: Weight 'forty'"));
        assert_eq!(session.draft().unwrap().key_results[0].weight.get(), 40);
    }

    #[test]
    fn test_handle_unknown_key_result() {
        let mut session = drafting_session();
        let output = session.handle_add_milestone(&Id { id: 99 });
        assert!(output.contains("Key result with ID 99 not found"));
    }

    #[test]
    fn test_handle_deadline_rejects_bad_date() {
        let mut session = drafting_session();
        session.handle_add_key_result();
        let err = session
            .handle_update_key_result_deadline(&KeyResultDeadline {
                id: 1,
                deadline: Some("next week".to_string()),
            })
            .unwrap_err();
        assert!(matches!(err, OkrError::InvalidInput { .. }));

        let output = session
            .handle_set_deadline(&SetDeadline {
                deadline: Some("2026-12-31".to_string()),
            })
            .unwrap();
        assert!(output.contains("Objective deadline set to 2026-12-31"));
    }

    #[test]
    fn test_handle_suggestion_flow() {
        let mut session = drafting_session();
        let output = session.handle_request_suggestion();
        assert!(output.contains("AI Key Result Suggestion"));
        assert!(session.handle_accept_suggestion().starts_with("Added key result"));
        assert!(session.handle_dismiss_suggestion().starts_with("Ignored:"));
    }

    #[test]
    fn test_handle_regenerate_blank_prompt() {
        let mut session = drafting_session();
        session.handle_add_key_result();
        let output = session.handle_regenerate_key_result(&RegenerateKeyResult {
            id: 1,
            prompt: "  ".to_string(),
        });
        assert!(output.starts_with("Ignored:"));

        let output = session.handle_regenerate_key_result(&RegenerateKeyResult {
            id: 1,
            prompt: "growth".to_string(),
        });
        assert!(output.contains("growth"));
    }

    #[test]
    fn test_handle_save_reports_record() {
        let mut session = drafting_session();
        session.handle_set_alignment(&Alignment {
            choice: "Expand market share by 12%".to_string(),
        });
        let output = session.handle_save().unwrap();
        assert!(output.starts_with("Saved objective with 4 key results"));
        assert!(!session.is_drafting());
    }
}
