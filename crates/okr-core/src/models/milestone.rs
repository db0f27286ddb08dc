//! Milestone model definition.

use serde::{Deserialize, Serialize};

use super::MilestoneId;

/// A checklist item attached to a key result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    /// Unique identifier for the milestone
    pub id: MilestoneId,

    /// Checklist text
    pub text: String,

    /// Whether the item has been ticked off
    pub completed: bool,
}

impl Milestone {
    /// Text given to milestones created from the editor.
    pub const DEFAULT_TEXT: &'static str = "Milestone";

    /// Creates an unticked milestone with the default text.
    pub fn new(id: MilestoneId) -> Self {
        Self {
            id,
            text: Self::DEFAULT_TEXT.to_string(),
            completed: false,
        }
    }
}
