//! Prompt templates for MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

impl PromptTemplate {
    /// Substitutes `{name}` placeholders with the given argument values.
    ///
    /// Returns the name of the first required argument that is missing.
    pub fn apply<'a>(
        &self,
        lookup: impl Fn(&str) -> Option<&'a str>,
    ) -> Result<String, &str> {
        let mut text = self.template.clone();
        for arg in &self.arguments {
            match lookup(&arg.name) {
                Some(value) => text = text.replace(&format!("{{{}}}", arg.name), value),
                None if arg.required => return Err(arg.name.as_str()),
                None => text = text.replace(&format!("{{{}}}", arg.name), "(not given)"),
            }
        }
        Ok(text)
    }
}

/// Get predefined prompt templates for drafting objectives
pub fn get_prompt_templates() -> Vec<PromptTemplate> {
    vec![PromptTemplate {
        name: "draft_objective".to_string(),
        description: "Draft an objective and its key results using the OKR session tools"
            .to_string(),
        template: r#"You are helping an employee set a quarterly objective in the OKR workspace.

# Goal
{goal}

# Deadline
{deadline}

# Step 1: Open the Dialog
Call `open_session`. If a draft is already open, call `show_session` and decide whether to continue it or `cancel_session` first.

# Step 2: Align
Call `list_alignments` and pick the supervisor key result closest to the goal. Pass it to `set_alignment`. This replaces the key result list with four generated key results.

# Step 3: Shape the Key Results
- Reword weak key results with `update_key_result_text`, or ask for a rewrite with `regenerate_key_result` and a short focus prompt
- Remove key results that do not serve the goal with `delete_key_result`
- Use `request_suggestion` to see another idea; `accept_suggestion` adds it, `dismiss_suggestion` hides it
- Add your own with `add_key_result` followed by `update_key_result_text`

# Step 4: Weights, Deadlines and Milestones
- Give each key result a weight from 0 to 100 with `update_key_result_weight`; aim for a total of 100%
- Set deadlines as YYYY-MM-DD with `set_deadline` and `update_key_result_deadline`
- Break larger key results into steps with `add_milestone`

# Step 5: Confirm
Review with `show_session`, then call `save_session`."#
            .to_string(),
        arguments: vec![
            PromptTemplateArg {
                name: "goal".to_string(),
                description: "What the employee wants to achieve this period".to_string(),
                required: true,
            },
            PromptTemplateArg {
                name: "deadline".to_string(),
                description: "Target date for the objective, as YYYY-MM-DD".to_string(),
                required: false,
            },
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_substitutes_arguments() {
        let templates = get_prompt_templates();
        let template = &templates[0];
        let text = template
            .apply(|name| match name {
                "goal" => Some("Grow enterprise revenue"),
                "deadline" => Some("2026-12-31"),
                _ => None,
            })
            .unwrap();
        assert!(text.contains("# Goal\nGrow enterprise revenue"));
        assert!(text.contains("# Deadline\n2026-12-31"));
    }

    #[test]
    fn test_apply_requires_goal() {
        let templates = get_prompt_templates();
        let template = &templates[0];
        assert_eq!(template.apply(|_| None), Err("goal"));
    }

    #[test]
    fn test_optional_argument_placeholder() {
        let templates = get_prompt_templates();
        let template = &templates[0];
        let text = template
            .apply(|name| (name == "goal").then_some("Reduce churn"))
            .unwrap();
        assert!(text.contains("# Deadline\n(not given)"));
    }
}
