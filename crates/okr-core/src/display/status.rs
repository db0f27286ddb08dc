//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages.
///
/// Session operations never fail, so "ignored" is reported separately from
/// a real error: the request was fine but had nothing to act on.
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

/// Outcome reported by an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Ignored,
    Failure,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Success,
        }
    }

    /// Create a status for a request that changed nothing.
    pub fn ignored(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Ignored,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Failure,
        }
    }

    /// Success when `applied`, otherwise ignored.
    pub fn applied(applied: bool, done: impl Into<String>, skipped: impl Into<String>) -> Self {
        if applied {
            Self::success(done)
        } else {
            Self::ignored(skipped)
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            StatusKind::Success => "Success:",
            StatusKind::Ignored => "Ignored:",
            StatusKind::Failure => "Error:",
        };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Operation completed");
        assert!(format!("{success}").contains("Success:"));

        let ignored = OperationStatus::ignored("Nothing to cancel");
        assert_eq!(format!("{ignored}"), "Ignored: Nothing to cancel\n");

        let failure = OperationStatus::failure("Operation failed");
        assert!(format!("{failure}").contains("Error:"));
    }

    #[test]
    fn test_applied_picks_message() {
        assert_eq!(
            OperationStatus::applied(true, "done", "skipped").kind,
            StatusKind::Success
        );
        let skipped = OperationStatus::applied(false, "done", "skipped");
        assert_eq!(skipped.kind, StatusKind::Ignored);
        assert_eq!(skipped.message, "skipped");
    }
}
