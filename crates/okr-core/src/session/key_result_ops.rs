//! Key result and milestone operations for the ObjectiveSession.

use jiff::civil::Date;
use log::debug;

use super::ObjectiveSession;
use crate::models::{KeyResult, KeyResultId, Milestone, MilestoneId, Weight};

impl ObjectiveSession {
    /// Appends an empty, user-authored key result.
    pub fn add_key_result(&mut self) -> Option<KeyResultId> {
        let drafting = Self::drafting(&mut self.state, "add_key_result")?;
        let id = self.ids.key_result();
        drafting.draft.key_results.push(KeyResult::blank(id));
        Some(id)
    }

    /// Removes a key result, returning it if it existed.
    pub fn delete_key_result(&mut self, id: KeyResultId) -> Option<KeyResult> {
        let drafting = Self::drafting(&mut self.state, "delete_key_result")?;
        let Some(index) = drafting.draft.key_results.iter().position(|kr| kr.id == id) else {
            debug!("delete_key_result: no key result {id}");
            return None;
        };
        Some(drafting.draft.key_results.remove(index))
    }

    /// Replaces a key result's text. Empty text is allowed.
    pub fn update_key_result_text(&mut self, id: KeyResultId, text: impl Into<String>) -> bool {
        match self.key_result_mut(id, "update_key_result_text") {
            Some(kr) => {
                kr.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Applies a weight typed by the user.
    ///
    /// The input must parse as an integer in `[0, 100]`. Anything else is
    /// dropped silently and the previous weight stays. Returns whether the
    /// weight was applied.
    pub fn update_key_result_weight(&mut self, id: KeyResultId, input: impl AsRef<str>) -> bool {
        let input = input.as_ref();
        let weight = match input.parse::<Weight>() {
            Ok(weight) => weight,
            Err(reason) => {
                debug!("update_key_result_weight: kept previous weight of {id}: {reason}");
                return false;
            }
        };
        match self.key_result_mut(id, "update_key_result_weight") {
            Some(kr) => {
                kr.weight = weight;
                true
            }
            None => false,
        }
    }

    /// Sets or clears a key result's deadline.
    pub fn update_key_result_deadline(&mut self, id: KeyResultId, deadline: Option<Date>) -> bool {
        match self.key_result_mut(id, "update_key_result_deadline") {
            Some(kr) => {
                kr.deadline = deadline;
                true
            }
            None => false,
        }
    }

    /// Appends a default milestone to a key result.
    pub fn add_milestone(&mut self, key_result_id: KeyResultId) -> Option<MilestoneId> {
        let drafting = Self::drafting(&mut self.state, "add_milestone")?;
        let Some(kr) = drafting.draft.key_result_mut(key_result_id) else {
            debug!("add_milestone: no key result {key_result_id}");
            return None;
        };
        let id = self.ids.milestone();
        kr.milestones.push(Milestone::new(id));
        Some(id)
    }

    pub(crate) fn key_result_mut(&mut self, id: KeyResultId, op: &str) -> Option<&mut KeyResult> {
        let drafting = Self::drafting(&mut self.state, op)?;
        let found = drafting.draft.key_result_mut(id);
        if found.is_none() {
            debug!("{op}: no key result {id}");
        }
        found
    }
}
