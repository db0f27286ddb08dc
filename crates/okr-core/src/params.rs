//! Parameter structures for session operations.
//!
//! These structures are shared by every interface that drives an
//! [`ObjectiveSession`](crate::session::ObjectiveSession). They carry raw user
//! input; the session itself takes typed values, so dates and ids are parsed
//! here at the edge.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema derives are only compiled with the `schema` feature, which the
//! MCP server enables.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::Result, models::KeyResultId, OkrError};

/// Parses an optional `YYYY-MM-DD` date.
///
/// `None` and blank input both clear the date.
///
/// # Errors
///
/// * `OkrError::InvalidInput` - When the text is not a calendar date
///
/// # Examples
///
/// ```rust
/// use okr_core::params::parse_date;
///
/// let date = parse_date("deadline", Some("2026-12-31"))?;
/// assert_eq!(date.map(|d| d.to_string()), Some("2026-12-31".to_string()));
/// assert_eq!(parse_date("deadline", Some("  "))?, None);
/// assert!(parse_date("deadline", Some("31/12/2026")).is_err());
/// # okr_core::Result::<()>::Ok(())
/// ```
pub fn parse_date(field: &str, input: Option<&str>) -> Result<Option<Date>> {
    let Some(text) = input.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    text.parse::<Date>().map(Some).map_err(|e| {
        OkrError::invalid_input(field)
            .with_reason(format!("'{text}' is not a YYYY-MM-DD date: {e}"))
    })
}

/// Generic parameters for operations on a single key result.
///
/// Used for delete_key_result and add_milestone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the key result to operate on
    pub id: u64,
}

impl Id {
    pub fn key_result(&self) -> KeyResultId {
        KeyResultId(self.id)
    }
}

/// Parameters for choosing the supervisor key result to align with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Alignment {
    /// Supervisor key result text; also becomes the objective statement
    pub choice: String,
}

/// Parameters for replacing the objective statement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ObjectiveText {
    /// New objective statement
    pub text: String,
}

/// Parameters for setting or clearing the objective deadline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetDeadline {
    /// Deadline as YYYY-MM-DD; omit to clear
    #[serde(default)]
    pub deadline: Option<String>,
}

impl SetDeadline {
    /// Parses the deadline.
    ///
    /// # Errors
    ///
    /// * `OkrError::InvalidInput` - When the deadline is not a calendar date
    pub fn parse(&self) -> Result<Option<Date>> {
        parse_date("deadline", self.deadline.as_deref())
    }
}

/// Parameters for replacing a key result's text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct KeyResultText {
    /// Key result ID
    pub id: u64,
    /// New text; may be empty
    #[serde(default)]
    pub text: String,
}

impl KeyResultText {
    pub fn key_result(&self) -> KeyResultId {
        KeyResultId(self.id)
    }
}

/// Parameters for changing a key result's weight.
///
/// The weight is kept as typed text. The session decides whether it applies:
/// an integer from 0 to 100 does, anything else leaves the weight unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct KeyResultWeight {
    /// Key result ID
    pub id: u64,
    /// Weight percentage as typed, e.g. "40"
    pub weight: String,
}

impl KeyResultWeight {
    pub fn key_result(&self) -> KeyResultId {
        KeyResultId(self.id)
    }
}

/// Parameters for setting or clearing a key result's deadline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct KeyResultDeadline {
    /// Key result ID
    pub id: u64,
    /// Deadline as YYYY-MM-DD; omit to clear
    #[serde(default)]
    pub deadline: Option<String>,
}

impl KeyResultDeadline {
    pub fn key_result(&self) -> KeyResultId {
        KeyResultId(self.id)
    }

    /// Parses the deadline.
    ///
    /// # Errors
    ///
    /// * `OkrError::InvalidInput` - When the deadline is not a calendar date
    pub fn parse(&self) -> Result<Option<Date>> {
        parse_date("deadline", self.deadline.as_deref())
    }
}

/// Parameters for rewriting a key result from a refinement prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RegenerateKeyResult {
    /// Key result ID
    pub id: u64,
    /// What the new text should focus on, e.g. "customer retention"
    pub prompt: String,
}

impl RegenerateKeyResult {
    pub fn key_result(&self) -> KeyResultId {
        KeyResultId(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("deadline", Some(" 2027-03-31 ")).unwrap();
        assert_eq!(date, Some(jiff::civil::date(2027, 3, 31)));
    }

    #[test]
    fn test_parse_date_clears() {
        assert_eq!(parse_date("deadline", None).unwrap(), None);
        assert_eq!(parse_date("deadline", Some("")).unwrap(), None);
    }

    #[test]
    fn test_parse_date_invalid() {
        for input in ["tomorrow", "2026-02-30", "2026/01/01"] {
            match parse_date("due", Some(input)).unwrap_err() {
                OkrError::InvalidInput { field, reason } => {
                    assert_eq!(field, "due");
                    assert!(reason.contains(input), "reason was: {reason}");
                }
                other => panic!("Expected InvalidInput error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_key_result_deadline_parse() {
        let params = KeyResultDeadline {
            id: 3,
            deadline: Some("2026-11-01".to_string()),
        };
        assert_eq!(params.parse().unwrap(), Some(jiff::civil::date(2026, 11, 1)));

        let params: KeyResultDeadline = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(params.parse().unwrap(), None);
    }

    #[test]
    fn test_id_key_result() {
        let params: Id = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(params.key_result(), KeyResultId(7));
    }
}
