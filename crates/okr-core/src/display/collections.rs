//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::KeyResult;

/// Newtype wrapper for displaying an ordered list of key results.
///
/// The heading carries the summed weight, which is informational only;
/// weights are not required to add up to 100.
///
/// # Examples
///
/// ```rust
/// use okr_core::{
///     display::KeyResults,
///     models::{KeyResult, KeyResultId},
/// };
///
/// let key_results = vec![
///     KeyResult::suggested(KeyResultId(1), "Reduce churn by 8%"),
///     KeyResult::blank(KeyResultId(2)),
/// ];
/// let output = KeyResults(&key_results).to_string();
/// assert!(output.contains("## Key Results (total weight 50%)"));
/// assert!(output.contains("### 1. Reduce churn by 8% (25%)"));
/// ```
pub struct KeyResults<'a>(pub &'a [KeyResult]);

impl fmt::Display for KeyResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "## Key Results")?;
            writeln!(f)?;
            return writeln!(f, "No key results yet.");
        }

        writeln!(f, "## Key Results (total weight {}%)", KeyResult::total_weight(self.0))?;
        writeln!(f)?;
        for key_result in self.0 {
            write!(f, "{key_result}")?;
        }
        Ok(())
    }
}
