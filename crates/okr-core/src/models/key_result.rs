//! Key result model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{KeyResultId, Milestone, Weight};

/// A measurable outcome supporting an objective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyResult {
    /// Unique identifier for the key result
    pub id: KeyResultId,

    /// Statement of the outcome
    pub text: String,

    /// Completion percentage. Always 100; nothing updates it yet.
    pub progress: u8,

    /// Checklist items in insertion order
    #[serde(default)]
    pub milestones: Vec<Milestone>,

    /// Set when the text came from the suggestion generator
    #[serde(default)]
    pub is_ai: bool,

    /// Relative weight within the objective
    pub weight: Weight,

    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Date>,
}

impl KeyResult {
    /// Progress value every key result starts with.
    pub const INITIAL_PROGRESS: u8 = 100;

    /// Creates an empty, user-authored key result.
    pub fn blank(id: KeyResultId) -> Self {
        Self {
            id,
            text: String::new(),
            progress: Self::INITIAL_PROGRESS,
            milestones: Vec::new(),
            is_ai: false,
            weight: Weight::DEFAULT,
            deadline: None,
        }
    }

    /// Creates a key result whose text came from the suggestion generator.
    pub fn suggested(id: KeyResultId, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_ai: true,
            ..Self::blank(id)
        }
    }

    /// Sum of the weights of `key_results`. Informational only; nothing
    /// requires it to be 100.
    pub fn total_weight(key_results: &[KeyResult]) -> u32 {
        key_results.iter().map(|kr| u32::from(kr.weight.get())).sum()
    }

    /// Number of milestones ticked off.
    pub fn completed_milestones(&self) -> usize {
        self.milestones.iter().filter(|m| m.completed).count()
    }
}
