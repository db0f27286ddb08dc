//! Navigation state of the workspace shell.
//!
//! The sidebar is a fixed two-level tree. The shell tracks which parents are
//! expanded and which label is active; the only link to the objective session
//! is the "Set Objective" trigger.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::session::ObjectiveSession;

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub children: &'static [NavEntry],
}

impl NavEntry {
    const fn leaf(label: &'static str) -> Self {
        Self {
            label,
            children: &[],
        }
    }

    const fn parent(label: &'static str, children: &'static [NavEntry]) -> Self {
        Self { label, children }
    }

    /// Whether the entry can be expanded.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The sidebar tree.
pub const NAVIGATION: &[NavEntry] = &[
    NavEntry::leaf("Dashboard"),
    NavEntry::leaf("Organization"),
    NavEntry::parent(
        "OKR",
        &[
            NavEntry::leaf("Dashboard"),
            NavEntry::leaf("OKR"),
            NavEntry::leaf("Planning and Reporting"),
        ],
    ),
    NavEntry::parent("Learning & Growth", &[NavEntry::leaf("Training Management")]),
    NavEntry::parent("Payroll", &[NavEntry::leaf("My Payroll")]),
    NavEntry::parent(
        "Time & Attendance",
        &[
            NavEntry::leaf("My Timesheet"),
            NavEntry::leaf("Employee Attendance"),
        ],
    ),
];

/// Dashboard tabs in display order; the first is selected.
pub const OKR_TABS: [&str; 4] = ["My OKR", "Team OKR", "Company OKR", "All Employee OKR"];

/// An entry as currently shown, with its nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleEntry {
    pub label: &'static str,
    pub depth: usize,
    pub expandable: bool,
    pub expanded: bool,
    pub active: bool,
}

/// Expansion and selection state of the sidebar.
///
/// State is keyed by label, so a parent and a child sharing a label (the
/// "OKR" entry inside "OKR") highlight together. Only parents expand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    expanded: Vec<String>,
    active: String,
}

impl Workspace {
    /// Starts with "OKR" expanded and active.
    pub fn new() -> Self {
        Self {
            expanded: vec!["OKR".to_string()],
            active: "OKR".to_string(),
        }
    }

    /// Flips whether `label` is expanded.
    pub fn toggle_expand(&mut self, label: &str) {
        if let Some(index) = self.expanded.iter().position(|l| l == label) {
            self.expanded.remove(index);
        } else {
            self.expanded.push(label.to_string());
        }
    }

    /// Marks `label` as the active entry.
    pub fn set_active(&mut self, label: &str) {
        self.active = label.to_string();
    }

    /// A click on the entry named `label`. Top-level entries win over
    /// nested ones, so "OKR" is the parent and not its "OKR" child.
    ///
    /// Parents toggle expansion, and every click makes the entry active.
    pub fn select(&mut self, label: &str) {
        let entry = NAVIGATION
            .iter()
            .chain(NAVIGATION.iter().flat_map(|parent| parent.children))
            .find(|entry| entry.label == label);
        match entry {
            Some(entry) => self.click(entry),
            None => {
                debug!("select: no entry '{label}'");
                self.set_active(label);
            }
        }
    }

    /// A click on the entry reached by following `path` from the top level,
    /// e.g. `["OKR", "OKR"]` for the child. Returns `false` when no entry
    /// sits at that path.
    pub fn select_path(&mut self, path: &[&str]) -> bool {
        let mut level = NAVIGATION;
        let mut target = None;
        for label in path {
            target = level.iter().find(|entry| entry.label == *label);
            let Some(entry) = target else {
                break;
            };
            level = entry.children;
        }
        match target {
            Some(entry) => {
                self.click(entry);
                true
            }
            None => {
                debug!("select_path: no entry at {path:?}");
                false
            }
        }
    }

    /// Whether `label` is expanded.
    pub fn is_expanded(&self, label: &str) -> bool {
        self.expanded.iter().any(|l| l == label)
    }

    /// Currently active label.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// The tree flattened in display order, hiding collapsed children.
    pub fn visible_entries(&self) -> Vec<VisibleEntry> {
        let mut out = Vec::new();
        self.collect_visible(NAVIGATION, 0, &mut out);
        out
    }

    /// The "Set Objective" trigger.
    pub fn open_objective_session(&self, session: &mut ObjectiveSession) -> bool {
        debug!("workspace: opening objective session from '{}'", self.active);
        session.open()
    }

    fn collect_visible(&self, entries: &[NavEntry], depth: usize, out: &mut Vec<VisibleEntry>) {
        for entry in entries {
            let expanded = self.is_expanded(entry.label);
            out.push(VisibleEntry {
                label: entry.label,
                depth,
                expandable: entry.has_children(),
                expanded,
                active: self.active == entry.label,
            });
            if entry.has_children() && expanded {
                self.collect_visible(entry.children, depth + 1, out);
            }
        }
    }

    fn click(&mut self, entry: &NavEntry) {
        if entry.has_children() {
            self.toggle_expand(entry.label);
        }
        self.set_active(entry.label);
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# SelamNew Workspace")?;
        writeln!(f)?;
        for entry in self.visible_entries() {
            let indent = "  ".repeat(entry.depth);
            let marker = match (entry.expandable, entry.expanded) {
                (true, true) => "▾ ",
                (true, false) => "▸ ",
                (false, _) => "",
            };
            if entry.active {
                writeln!(f, "{indent}- **{marker}{}**", entry.label)?;
            } else {
                writeln!(f, "{indent}- {marker}{}", entry.label)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionBuilder;

    fn labels(workspace: &Workspace) -> Vec<(&'static str, usize)> {
        workspace
            .visible_entries()
            .iter()
            .map(|e| (e.label, e.depth))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let workspace = Workspace::new();
        assert!(workspace.is_expanded("OKR"));
        assert_eq!(workspace.active(), "OKR");
        assert_eq!(
            labels(&workspace),
            vec![
                ("Dashboard", 0),
                ("Organization", 0),
                ("OKR", 0),
                ("Dashboard", 1),
                ("OKR", 1),
                ("Planning and Reporting", 1),
                ("Learning & Growth", 0),
                ("Payroll", 0),
                ("Time & Attendance", 0),
            ]
        );
    }

    #[test]
    fn test_toggle_expand() {
        let mut workspace = Workspace::new();
        workspace.toggle_expand("Payroll");
        assert!(workspace.is_expanded("Payroll"));
        assert!(labels(&workspace).contains(&("My Payroll", 1)));

        workspace.toggle_expand("Payroll");
        assert!(!workspace.is_expanded("Payroll"));
        assert!(!labels(&workspace).contains(&("My Payroll", 1)));
    }

    #[test]
    fn test_select_parent_collapses_and_activates() {
        let mut workspace = Workspace::new();
        workspace.select("OKR");
        assert!(!workspace.is_expanded("OKR"));
        assert_eq!(workspace.active(), "OKR");
        assert_eq!(workspace.visible_entries().len(), 6);
    }

    #[test]
    fn test_select_leaf_only_activates() {
        let mut workspace = Workspace::new();
        workspace.select("Organization");
        assert_eq!(workspace.active(), "Organization");
        assert!(workspace.is_expanded("OKR"));
        assert!(!workspace.is_expanded("Organization"));
    }

    #[test]
    fn test_select_child_sharing_parent_label() {
        let mut workspace = Workspace::new();
        assert!(workspace.select_path(&["OKR", "OKR"]));
        assert!(workspace.is_expanded("OKR"));
        assert_eq!(workspace.active(), "OKR");
        assert!(labels(&workspace).contains(&("OKR", 1)));

        assert!(workspace.select_path(&["OKR", "Planning and Reporting"]));
        assert!(workspace.is_expanded("OKR"));
        assert_eq!(workspace.active(), "Planning and Reporting");
    }

    #[test]
    fn test_select_nested_leaf_by_label() {
        let mut workspace = Workspace::new();
        workspace.select("My Payroll");
        assert_eq!(workspace.active(), "My Payroll");
        assert!(!workspace.is_expanded("Payroll"));
        assert!(workspace.is_expanded("OKR"));
    }

    #[test]
    fn test_select_path_unknown_entry() {
        let mut workspace = Workspace::new();
        assert!(!workspace.select_path(&["Payroll", "Bonuses"]));
        assert!(!workspace.select_path(&["Nowhere"]));
        assert_eq!(workspace, Workspace::new());
    }

    #[test]
    fn test_set_active_does_not_expand() {
        let mut workspace = Workspace::new();
        workspace.set_active("Time & Attendance");
        assert_eq!(workspace.active(), "Time & Attendance");
        assert!(!workspace.is_expanded("Time & Attendance"));
    }

    #[test]
    fn test_display_marks_active_and_expansion() {
        let mut workspace = Workspace::new();
        workspace.select("Payroll");
        let output = workspace.to_string();
        assert!(output.contains("- ▾ OKR"));
        assert!(output.contains("- **▾ Payroll**"));
        assert!(output.contains("  - My Payroll"));
        assert!(output.contains("- ▸ Learning & Growth"));
    }

    #[test]
    fn test_open_objective_session() {
        let workspace = Workspace::new();
        let mut session = SessionBuilder::new().build();
        assert!(workspace.open_objective_session(&mut session));
        assert!(session.is_drafting());
        assert!(!workspace.open_objective_session(&mut session));
    }
}
