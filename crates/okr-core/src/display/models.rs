//! Display implementations for domain models.
//!
//! Everything renders as markdown so the terminal renderer and MCP clients
//! can show it directly.

use std::fmt;

use super::{collections::KeyResults, datetime::Deadline};
use crate::models::{KeyResult, Milestone, ObjectiveDraft, ObjectiveRecord};

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.completed { "✓" } else { "○" };
        writeln!(f, "- {icon} {}", self.text)
    }
}

impl fmt::Display for KeyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.text.is_empty() {
            "_(no text)_"
        } else {
            self.text.as_str()
        };
        writeln!(f, "### {}. {} ({})", self.id, text, self.weight)?;
        writeln!(f)?;

        if self.is_ai {
            writeln!(f, "- ✦ This is a Key Result from the AI")?;
        }
        writeln!(f, "- Deadline: {}", Deadline(self.deadline.as_ref()))?;
        writeln!(f, "- Progress: {}%", self.progress)?;
        writeln!(f)?;

        if !self.milestones.is_empty() {
            writeln!(
                f,
                "#### Milestones ({}/{})",
                self.completed_milestones(),
                self.milestones.len()
            )?;
            writeln!(f)?;
            for milestone in &self.milestones {
                write!(f, "{milestone}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Writes the objective header shared by drafts and saved records.
pub(crate) fn fmt_objective_header(
    f: &mut fmt::Formatter<'_>,
    objective: &str,
    alignment: &str,
    deadline: Deadline<'_>,
) -> fmt::Result {
    if objective.is_empty() {
        writeln!(f, "# Objective: _not set_")?;
    } else {
        writeln!(f, "# Objective: {objective}")?;
    }
    writeln!(f)?;

    if alignment.is_empty() {
        writeln!(f, "- Alignment: _Select supervisor's key result_")?;
    } else {
        writeln!(f, "- Alignment: {alignment}")?;
    }
    writeln!(f, "- Deadline: {deadline}")?;
    writeln!(f)
}

impl fmt::Display for ObjectiveDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_objective_header(
            f,
            &self.objective,
            &self.alignment,
            Deadline(self.deadline.as_ref()),
        )?;
        write!(f, "{}", KeyResults(&self.key_results))
    }
}

impl fmt::Display for ObjectiveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_objective_header(
            f,
            &self.objective,
            &self.alignment,
            Deadline(self.deadline.as_ref()),
        )?;
        write!(f, "{}", KeyResults(&self.key_results))
    }
}
