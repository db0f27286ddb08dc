//! Objective draft and the record handed to the save collaborator.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{KeyResult, KeyResultId};

/// The objective being edited in an open session.
///
/// Fields the form marks as required (objective, alignment, deadline) may
/// all be empty here; nothing checks them before a save.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectiveDraft {
    /// Objective statement
    pub objective: String,

    /// Supervisor key result this objective aligns with
    pub alignment: String,

    /// Objective deadline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Date>,

    /// Key results in display order
    #[serde(default)]
    pub key_results: Vec<KeyResult>,
}

impl ObjectiveDraft {
    /// Looks up a key result by id.
    pub fn key_result(&self, id: KeyResultId) -> Option<&KeyResult> {
        self.key_results.iter().find(|kr| kr.id == id)
    }

    /// Looks up a key result by id for mutation.
    pub fn key_result_mut(&mut self, id: KeyResultId) -> Option<&mut KeyResult> {
        self.key_results.iter_mut().find(|kr| kr.id == id)
    }

    /// Sum of all key result weights.
    pub fn total_weight(&self) -> u32 {
        KeyResult::total_weight(&self.key_results)
    }

    /// Freezes the draft into the record passed to a save collaborator.
    pub fn to_record(&self) -> ObjectiveRecord {
        ObjectiveRecord {
            objective: self.objective.clone(),
            alignment: self.alignment.clone(),
            deadline: self.deadline,
            key_results: self.key_results.clone(),
        }
    }
}

/// Snapshot of a confirmed objective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectiveRecord {
    pub objective: String,
    pub alignment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Date>,
    pub key_results: Vec<KeyResult>,
}
