//! Render outcome consumers.

use crate::RenderOutcome;

/// Consumer of render outcomes, typically a chart widget.
///
/// Each delivered outcome fully replaces the previous one.
pub trait ChartSink {
    /// Shows or hides the loading indicator.
    fn loading(&mut self, _active: bool) {}

    /// Displays an outcome.
    fn show(&mut self, outcome: RenderOutcome);
}

/// Sink that keeps every delivered outcome in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    outcomes: Vec<RenderOutcome>,
    loading: bool,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recently delivered outcome.
    #[must_use]
    pub fn latest(&self) -> Option<&RenderOutcome> {
        self.outcomes.last()
    }

    /// Returns all delivered outcomes in delivery order.
    #[must_use]
    pub fn outcomes(&self) -> &[RenderOutcome] {
        &self.outcomes
    }

    /// Returns true while a render is loading.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }
}

impl ChartSink for MemorySink {
    fn loading(&mut self, active: bool) {
        self.loading = active;
    }

    fn show(&mut self, outcome: RenderOutcome) {
        self.outcomes.push(outcome);
    }
}
