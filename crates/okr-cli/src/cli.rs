//! Command handlers and the session command loop
//!
//! Session lines are parsed with clap's derive API, so each line command gets
//! the same argument handling and error messages as the top-level CLI. Line
//! arguments are converted into core parameter structures before they reach
//! the session:
//!
//! ```text
//! Input line → SessionLine (clap) → Core Params → ObjectiveSession handlers
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use okr_core::{
    params::{
        Alignment, Id, KeyResultDeadline, KeyResultText, KeyResultWeight, ObjectiveText,
        RegenerateKeyResult, SetDeadline,
    },
    ChatWidget, ObjectiveSession, OperationStatus, SessionBuilder, Workspace,
    SUPERVISOR_KEY_RESULTS,
};

use crate::renderer::TerminalRenderer;

/// One line of a session script.
#[derive(Parser)]
#[command(no_binary_name = true, name = "session", disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Open a new objective draft
    Open,
    /// Align with a supervisor key result (text or its number from `alignments`)
    Align(AlignArgs),
    /// Replace the objective statement
    Objective(ObjectiveArgs),
    /// Set the objective deadline (YYYY-MM-DD); no date clears it
    Deadline(DeadlineArgs),
    /// Add a blank key result
    Add,
    /// Delete a key result
    #[command(alias = "rm")]
    Delete(KeyResultArgs),
    /// Replace a key result's text
    Text(TextArgs),
    /// Type a key result weight (0-100); anything else is ignored
    Weight(WeightArgs),
    /// Set a key result deadline (YYYY-MM-DD); no date clears it
    Due(DueArgs),
    /// Add a milestone to a key result
    Milestone(KeyResultArgs),
    /// Rewrite any key result, AI or user-authored, from a refinement prompt
    Regen(RegenArgs),
    /// Show an AI key result suggestion
    Suggest,
    /// Add the suggestion to the key results
    Accept,
    /// Hide the suggestion
    Dismiss,
    /// Show the draft
    Show,
    /// Confirm the objective
    Save,
    /// Discard the draft
    Cancel,
    /// Leave the session loop
    #[command(alias = "exit")]
    Quit,
}

#[derive(Args)]
pub struct AlignArgs {
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub choice: Vec<String>,
}

impl From<AlignArgs> for Alignment {
    /// A lone number picks from the supervisor key results, 1-based.
    fn from(val: AlignArgs) -> Self {
        let choice = val.choice.join(" ");
        let picked = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| SUPERVISOR_KEY_RESULTS.get(i));
        Alignment {
            choice: picked.map_or(choice, |s| s.to_string()),
        }
    }
}

#[derive(Args)]
pub struct ObjectiveArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,
}

impl From<ObjectiveArgs> for ObjectiveText {
    fn from(val: ObjectiveArgs) -> Self {
        ObjectiveText {
            text: val.text.join(" "),
        }
    }
}

#[derive(Args)]
pub struct DeadlineArgs {
    pub date: Option<String>,
}

impl From<DeadlineArgs> for SetDeadline {
    fn from(val: DeadlineArgs) -> Self {
        SetDeadline { deadline: val.date }
    }
}

#[derive(Args)]
pub struct KeyResultArgs {
    /// Key result ID
    pub id: u64,
}

impl From<KeyResultArgs> for Id {
    fn from(val: KeyResultArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Args)]
pub struct TextArgs {
    /// Key result ID
    pub id: u64,
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,
}

impl From<TextArgs> for KeyResultText {
    fn from(val: TextArgs) -> Self {
        KeyResultText {
            id: val.id,
            text: val.text.join(" "),
        }
    }
}

#[derive(Args)]
pub struct WeightArgs {
    /// Key result ID
    pub id: u64,
    /// Weight as typed; kept as text so invalid input reaches the session
    #[arg(allow_hyphen_values = true)]
    pub weight: String,
}

impl From<WeightArgs> for KeyResultWeight {
    fn from(val: WeightArgs) -> Self {
        KeyResultWeight {
            id: val.id,
            weight: val.weight,
        }
    }
}

#[derive(Args)]
pub struct DueArgs {
    /// Key result ID
    pub id: u64,
    pub date: Option<String>,
}

impl From<DueArgs> for KeyResultDeadline {
    fn from(val: DueArgs) -> Self {
        KeyResultDeadline {
            id: val.id,
            deadline: val.date,
        }
    }
}

#[derive(Args)]
pub struct RegenArgs {
    /// Key result ID
    pub id: u64,
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub prompt: Vec<String>,
}

impl From<RegenArgs> for RegenerateKeyResult {
    fn from(val: RegenArgs) -> Self {
        RegenerateKeyResult {
            id: val.id,
            prompt: val.prompt.join(" "),
        }
    }
}

/// Commands ending in free text, with the number of words before it.
const FREE_TEXT_COMMANDS: [(&str, usize); 4] =
    [("align", 1), ("objective", 1), ("text", 2), ("regen", 2)];

/// Splits a session line into arguments.
///
/// Free text after a command's leading words is passed on as one argument,
/// spacing included.
fn split_line(line: &str) -> Vec<&str> {
    let command = line.split_whitespace().next().unwrap_or_default();
    let Some(&(_, leading)) = FREE_TEXT_COMMANDS.iter().find(|(name, _)| *name == command) else {
        return line.split_whitespace().collect();
    };

    let mut words = Vec::with_capacity(leading + 1);
    let mut rest = line.trim_start();
    while words.len() < leading && !rest.is_empty() {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        words.push(&rest[..end]);
        rest = rest[end..].trim_start();
    }
    if !rest.is_empty() {
        words.push(rest);
    }
    words
}

/// Whether the loop keeps reading after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Handles top-level commands and renders their output.
pub struct Cli {
    renderer: TerminalRenderer,
    seed: Option<u64>,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer, seed: Option<u64>) -> Self {
        Self { renderer, seed }
    }

    pub fn list_alignments(&self) -> Result<()> {
        let mut output = String::from("# Supervisor Key Results\n\n");
        for (i, choice) in SUPERVISOR_KEY_RESULTS.iter().enumerate() {
            output.push_str(&format!("{}. {choice}\n", i + 1));
        }
        self.renderer.render(&output)
    }

    pub fn show_nav(&self, clicks: &[String]) -> Result<()> {
        let mut workspace = Workspace::new();
        for click in clicks {
            debug!("nav: select '{click}'");
            if click.contains('>') {
                let path: Vec<&str> = click.split('>').map(str::trim).collect();
                if !workspace.select_path(&path) {
                    self.renderer
                        .render_error(&format!("No navigation entry at '{click}'"));
                }
            } else {
                workspace.select(click);
            }
        }

        let mut output = workspace.to_string();
        if workspace.active() == "OKR" {
            let tabs: Vec<String> = okr_core::workspace::OKR_TABS
                .iter()
                .enumerate()
                .map(|(i, tab)| if i == 0 { format!("**{tab}**") } else { tab.to_string() })
                .collect();
            output.push_str(&format!("\n## OKR\n\n{}\n", tabs.join(" | ")));
        }
        self.renderer.render(&output)
    }

    /// Runs session commands from `script`, or stdin when absent.
    pub fn run_session(&self, script: Option<&Path>) -> Result<()> {
        let mut session = SessionBuilder::new().with_seed(self.seed).build();
        match script {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open script {}", path.display()))?;
                self.run_lines(&mut session, BufReader::new(file))
            }
            None => self.run_lines(&mut session, io::stdin().lock()),
        }
    }

    pub async fn chat(&self, messages: Vec<String>, delay: Duration) -> Result<()> {
        let mut chat = ChatWidget::new().with_reply_delay(delay);
        chat.open();
        for message in messages {
            chat.send(message).await;
        }
        chat.settle().await;
        chat.close();
        self.renderer.render(&chat.render().await)
    }

    fn run_lines(&self, session: &mut ObjectiveSession, input: impl BufRead) -> Result<()> {
        for (number, line) in input.lines().enumerate() {
            let line = line.context("Failed to read session input")?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parsed = match SessionLine::try_parse_from(split_line(line)) {
                Ok(parsed) => parsed,
                Err(e) => {
                    self.renderer
                        .render_error(&format!("line {}: {}", number + 1, e.render()));
                    continue;
                }
            };

            match self.execute(session, parsed.command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => {
                    let status = OperationStatus::failure(format!("line {}: {e:#}", number + 1));
                    self.renderer.render_error(&status.to_string());
                }
            }
        }

        if session.is_drafting() {
            info!("Session input ended with an unsaved objective draft");
        }
        Ok(())
    }

    fn execute(&self, session: &mut ObjectiveSession, command: SessionCommand) -> Result<Flow> {
        use SessionCommand::*;

        let output = match command {
            Open => session.handle_open(),
            Align(args) => session.handle_set_alignment(&args.into()),
            Objective(args) => session.handle_set_objective(&args.into()),
            Deadline(args) => session.handle_set_deadline(&args.into())?,
            Add => session.handle_add_key_result(),
            Delete(args) => session.handle_delete_key_result(&args.into()),
            Text(args) => session.handle_update_key_result_text(&args.into()),
            Weight(args) => session.handle_update_key_result_weight(&args.into()),
            Due(args) => session.handle_update_key_result_deadline(&args.into())?,
            Milestone(args) => session.handle_add_milestone(&args.into()),
            Regen(args) => session.handle_regenerate_key_result(&args.into()),
            Suggest => session.handle_request_suggestion(),
            Accept => session.handle_accept_suggestion(),
            Dismiss => session.handle_dismiss_suggestion(),
            Show => session.handle_show(),
            Save => session.handle_save().context("Failed to save objective")?,
            Cancel => session.handle_cancel(),
            Quit => return Ok(Flow::Quit),
        };
        self.renderer.render(&output)?;
        Ok(Flow::Continue)
    }
}
