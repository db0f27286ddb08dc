//! Display wrapper for a whole session, suggestion card included.

use std::fmt;

use super::{collections::KeyResults, datetime::Deadline, models::fmt_objective_header};
use crate::session::{ObjectiveSession, SessionState};

/// Renders what the objective dialog would show.
///
/// The suggestion card sits between the objective fields and the key result
/// list, as in the dialog.
pub struct SessionView<'a>(pub &'a ObjectiveSession);

impl fmt::Display for SessionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SessionState::Drafting(drafting) = self.0.state() else {
            return writeln!(f, "No objective is being drafted.");
        };
        let draft = &drafting.draft;

        fmt_objective_header(
            f,
            &draft.objective,
            &draft.alignment,
            Deadline(draft.deadline.as_ref()),
        )?;

        if let Some(suggestion) = &drafting.pending_suggestion {
            write!(f, "> ✦ **AI Key Result Suggestion**")?;
            if drafting.suggestion_count > 0 {
                write!(
                    f,
                    " (I have made you {} Suggestions)",
                    drafting.suggestion_count
                )?;
            }
            writeln!(f)?;
            writeln!(f, ">")?;
            writeln!(f, "> {suggestion}")?;
            writeln!(f)?;
        }

        write!(f, "{}", KeyResults(&draft.key_results))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{suggest::FixedSelector, SessionBuilder};

    #[test]
    fn test_empty_session_view() {
        let session = SessionBuilder::new().build();
        assert_eq!(
            SessionView(&session).to_string(),
            "No objective is being drafted.\n"
        );
    }

    #[test]
    fn test_blank_draft_view() {
        let mut session = SessionBuilder::new().build();
        session.open();
        let output = SessionView(&session).to_string();

        assert!(output.contains("# Objective: _not set_"));
        assert!(output.contains("- Alignment: _Select supervisor's key result_"));
        assert!(output.contains("- Deadline: Pick a date"));
        assert!(output.contains("No key results yet."));
        assert!(!output.contains("AI Key Result Suggestion"));
    }

    #[test]
    fn test_drafting_view_with_card() {
        let mut session = SessionBuilder::new()
            .with_selector(FixedSelector(4))
            .build();
        session.open();
        session.set_alignment("Expand market share by 12%");
        session.set_deadline(Some(date(2026, 12, 31)));
        session.request_ai_suggestion();
        let first = session.draft().unwrap().key_results[0].id;
        session.add_milestone(first);

        let output = SessionView(&session).to_string();

        assert!(output.contains("# Objective: Expand market share by 12%"));
        assert!(output.contains("- Deadline: December 31st, 2026"));
        assert!(output.contains("(I have made you 4 Suggestions)"));
        assert!(output.contains("> Generate 1.5M revenue from existing customers"));
        assert!(output.contains("## Key Results (total weight 100%)"));
        assert!(output.contains("- ✦ This is a Key Result from the AI"));
        assert!(output.contains("#### Milestones (0/1)"));
        assert!(output.contains("- ○ Milestone"));

        let card = output.find("AI Key Result Suggestion").unwrap();
        let list = output.find("## Key Results").unwrap();
        assert!(card < list);
    }
}
