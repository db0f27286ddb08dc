//! Canned "AI" suggestions for key results.
//!
//! Nothing here looks at the objective being written. Every suggestion is a
//! pre-authored string drawn uniformly from a static pool, and the draw is
//! delegated to a [`Selector`] so callers can swap the randomness out.
//!
//! ```rust
//! use okr_core::suggest::{FixedSelector, SuggestionGenerator, SUGGESTION_POOL};
//!
//! let mut generator = SuggestionGenerator::new(FixedSelector(2));
//! assert_eq!(generator.suggest(), SUGGESTION_POOL[2]);
//!
//! let text = generator.regenerate("growth").unwrap();
//! assert_eq!(text, "growth strategy: Reduce customer churn by 8% this quarter");
//! assert!(generator.regenerate("   ").is_none());
//! ```

use std::collections::VecDeque;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Supervisor key results offered as alignment choices.
pub const SUPERVISOR_KEY_RESULTS: [&str; 5] = [
    "Increase customer retention rate by 15%",
    "Reduce customer churn by 8% this quarter",
    "Achieve 95% customer satisfaction score",
    "Generate 1.5M revenue from existing customers",
    "Expand market share by 12%",
];

/// Key results generated whenever an alignment is chosen.
pub const ALIGNMENT_KEY_RESULTS: [&str; 4] = [
    "Retain 2,000,000 by the end of the month",
    "Increase customer retention rate by 15%",
    "Reduce customer churn by 8% this quarter",
    "Achieve 95% customer satisfaction score",
];

/// Pool behind the standalone suggestion card.
pub const SUGGESTION_POOL: [&str; 5] = [
    "Retain 2,000,000 by the end of the month",
    "Increase customer retention rate by 15%",
    "Reduce customer churn by 8% this quarter",
    "Achieve 95% customer satisfaction score",
    "Generate 1.5M revenue from existing customers",
];

/// Picks an index into a pool of `len` candidates.
///
/// Implementations must return a value in `0..len` for any `len > 0`.
pub trait Selector: Send {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform selection backed by a seedable RNG.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Seeds from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence of picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for RandomSelector {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same index, wrapped into range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSelector(pub usize);

impl Selector for FixedSelector {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// Replays a list of indices, then falls back to the first candidate.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    picks: VecDeque<usize>,
}

impl ScriptedSelector {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl Selector for ScriptedSelector {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}

/// Renders the four refinement templates for a prompt.
///
/// The prompt is interpolated verbatim.
pub fn regeneration_candidates(prompt: &str) -> [String; 4] {
    [
        format!("Focus on {prompt}: {}", ALIGNMENT_KEY_RESULTS[0]),
        format!("{prompt} optimization: {}", ALIGNMENT_KEY_RESULTS[1]),
        format!("{prompt} strategy: {}", ALIGNMENT_KEY_RESULTS[2]),
        format!("{prompt} target: {}", ALIGNMENT_KEY_RESULTS[3]),
    ]
}

/// Draws suggestions through a [`Selector`].
pub struct SuggestionGenerator {
    selector: Box<dyn Selector>,
}

impl SuggestionGenerator {
    pub fn new(selector: impl Selector + 'static) -> Self {
        Self {
            selector: Box::new(selector),
        }
    }

    pub fn from_boxed(selector: Box<dyn Selector>) -> Self {
        Self { selector }
    }

    /// Key result texts produced for a freshly chosen alignment.
    pub fn alignment_key_results(&self) -> [&'static str; 4] {
        ALIGNMENT_KEY_RESULTS
    }

    /// One independent draw from [`SUGGESTION_POOL`].
    pub fn suggest(&mut self) -> &'static str {
        SUGGESTION_POOL[self.selector.pick(SUGGESTION_POOL.len())]
    }

    /// One draw from the refinement templates, or `None` for a blank prompt.
    pub fn regenerate(&mut self, prompt: &str) -> Option<String> {
        if prompt.trim().is_empty() {
            return None;
        }
        let candidates = regeneration_candidates(prompt);
        let index = self.selector.pick(candidates.len());
        candidates.into_iter().nth(index)
    }
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self::new(RandomSelector::new())
    }
}

impl std::fmt::Debug for SuggestionGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionGenerator").finish_non_exhaustive()
    }
}
