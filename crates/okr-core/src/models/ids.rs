//! Identifier newtypes and the counter that hands them out.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Identifier of a key result within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyResultId(pub u64);

/// Identifier of a milestone within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilestoneId(pub u64);

impl fmt::Display for KeyResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for KeyResultId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(KeyResultId)
            .map_err(|_| format!("Invalid key result id: {s}"))
    }
}

impl From<u64> for KeyResultId {
    fn from(id: u64) -> Self {
        KeyResultId(id)
    }
}

/// Monotonic counter shared by key results and milestones.
///
/// The counter is never rewound, so ids stay unique for as long as the
/// owning session lives, across any number of drafts.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Creates a generator whose first id is 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    fn bump(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Hands out the next key result id.
    pub fn key_result(&mut self) -> KeyResultId {
        KeyResultId(self.bump())
    }

    /// Hands out the next milestone id.
    pub fn milestone(&mut self) -> MilestoneId {
        MilestoneId(self.bump())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
