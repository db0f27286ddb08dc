//! Builder for creating and configuring ObjectiveSession instances.

use super::ObjectiveSession;
use crate::{
    saver::{LogSaver, SaveCollaborator},
    suggest::{RandomSelector, Selector, SuggestionGenerator},
};

/// Builder for creating and configuring ObjectiveSession instances.
#[derive(Default)]
pub struct SessionBuilder {
    selector: Option<Box<dyn Selector>>,
    seed: Option<u64>,
    saver: Option<Box<dyn SaveCollaborator>>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the default random selector for reproducible suggestions.
    ///
    /// Ignored when an explicit selector is supplied.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the random selector, e.g. with a deterministic one in tests.
    pub fn with_selector(mut self, selector: impl Selector + 'static) -> Self {
        self.selector = Some(Box::new(selector));
        self
    }

    /// Sets the collaborator that receives saved objectives.
    ///
    /// If not specified, records are logged through [`LogSaver`].
    pub fn with_saver(mut self, saver: impl SaveCollaborator + 'static) -> Self {
        self.saver = Some(Box::new(saver));
        self
    }

    /// Builds the configured session in the `Empty` state.
    pub fn build(self) -> ObjectiveSession {
        let suggestions = match (self.selector, self.seed) {
            (Some(selector), _) => SuggestionGenerator::from_boxed(selector),
            (None, Some(seed)) => SuggestionGenerator::new(RandomSelector::seeded(seed)),
            (None, None) => SuggestionGenerator::default(),
        };
        let saver = self.saver.unwrap_or_else(|| Box::new(LogSaver));

        ObjectiveSession::new(suggestions, saver)
    }
}
