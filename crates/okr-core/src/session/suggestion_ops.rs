//! Suggestion card and regeneration operations for the ObjectiveSession.

use log::debug;

use super::ObjectiveSession;
use crate::models::{KeyResult, KeyResultId};

impl ObjectiveSession {
    /// Draws a suggestion and shows it on the card, replacing any previous one.
    pub fn request_ai_suggestion(&mut self) -> Option<&str> {
        let drafting = Self::drafting(&mut self.state, "request_ai_suggestion")?;
        let suggestion = self.suggestions.suggest();
        debug!("request_ai_suggestion: '{suggestion}'");
        drafting.last_suggestion = Some(suggestion.to_string());
        Some(drafting.pending_suggestion.insert(suggestion.to_string()).as_str())
    }

    /// Draws again for the card. Draws are independent, so the same text may
    /// come back.
    pub fn regenerate_ai_suggestion(&mut self) -> Option<&str> {
        self.request_ai_suggestion()
    }

    /// Moves the card's suggestion into the key result list.
    pub fn accept_pending_suggestion(&mut self) -> Option<KeyResultId> {
        let drafting = Self::drafting(&mut self.state, "accept_pending_suggestion")?;
        let Some(text) = drafting.pending_suggestion.take() else {
            debug!("accept_pending_suggestion: no suggestion showing");
            return None;
        };
        let id = self.ids.key_result();
        drafting.draft.key_results.push(KeyResult::suggested(id, text));
        Some(id)
    }

    /// Hides the card without adding anything.
    pub fn cancel_pending_suggestion(&mut self) -> bool {
        Self::drafting(&mut self.state, "cancel_pending_suggestion")
            .and_then(|drafting| drafting.pending_suggestion.take())
            .is_some()
    }

    /// Rewrites a key result from a refinement prompt.
    ///
    /// Any key result can be rewritten, including user-authored ones, which
    /// stay marked as such. A blank prompt is rejected and the text is left
    /// as it was. Only the text changes; weight, deadline, milestones and the
    /// AI flag stay.
    pub fn regenerate_key_result(&mut self, id: KeyResultId, prompt: &str) -> Option<&str> {
        if prompt.trim().is_empty() {
            debug!("regenerate_key_result: empty prompt for {id}");
            return None;
        }
        let drafting = Self::drafting(&mut self.state, "regenerate_key_result")?;
        let Some(kr) = drafting.draft.key_result_mut(id) else {
            debug!("regenerate_key_result: no key result {id}");
            return None;
        };
        kr.text = self.suggestions.regenerate(prompt)?;
        Some(kr.text.as_str())
    }
}
