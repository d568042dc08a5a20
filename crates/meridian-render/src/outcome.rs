//! Render results.

use meridian_chart::ChartConfig;
use meridian_types::{ChartMode, IndexDef};
use serde::Serialize;

/// Placeholder shown when the overlay has nothing to plot.
pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one index";

/// Placeholder shown when the chart could not be assembled.
pub const FAILURE_MESSAGE: &str = "Error loading data";

/// Legend colour of an index missing from the catalog.
pub const LEGEND_FALLBACK_COLOR: &str = "#000";

/// What the chart area shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum RenderState {
    /// A chart to draw.
    Chart(ChartConfig),
    /// Line mode with nothing selected.
    EmptySelection {
        /// Placeholder text.
        message: String,
    },
    /// Chart assembly failed.
    Failed {
        /// Placeholder text.
        message: String,
        /// Underlying error.
        detail: String,
    },
}

impl RenderState {
    /// Empty-selection placeholder.
    #[must_use]
    pub fn empty_selection() -> Self {
        Self::EmptySelection {
            message: EMPTY_SELECTION_MESSAGE.to_string(),
        }
    }

    /// Failure placeholder carrying `detail`.
    #[must_use]
    pub fn failed(detail: impl Into<String>) -> Self {
        Self::Failed {
            message: FAILURE_MESSAGE.to_string(),
            detail: detail.into(),
        }
    }

    /// Returns the chart configuration, if any.
    #[must_use]
    pub const fn chart(&self) -> Option<&ChartConfig> {
        match self {
            Self::Chart(config) => Some(config),
            _ => None,
        }
    }

    /// Returns true if this is a failure placeholder.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// One legend badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    /// Index code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Badge colour.
    pub color: String,
}

impl LegendEntry {
    /// Badge of an index missing from the catalog.
    #[must_use]
    pub fn unknown(code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: code.to_string(),
            color: LEGEND_FALLBACK_COLOR.to_string(),
        }
    }
}

impl From<&IndexDef> for LegendEntry {
    fn from(index: &IndexDef) -> Self {
        Self {
            code: index.code().to_string(),
            name: index.name().to_string(),
            color: index.color().to_string(),
        }
    }
}

/// Complete result of one render, replacing the previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutcome {
    /// Mode the outcome was rendered in.
    pub mode: ChartMode,
    /// Chart area content.
    #[serde(flatten)]
    pub state: RenderState,
    /// Legend badges in display order.
    pub legend: Vec<LegendEntry>,
}

/// Result of [`Renderer::render`](crate::Renderer::render).
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// The newest render; deliver it.
    Current(RenderOutcome),
    /// A newer render started before this one finished; discard it.
    Superseded,
}

impl Rendered {
    /// Returns the outcome of a current render.
    #[must_use]
    pub fn into_current(self) -> Option<RenderOutcome> {
        match self {
            Self::Current(outcome) => Some(outcome),
            Self::Superseded => None,
        }
    }

    /// Returns true if the render was superseded.
    #[must_use]
    pub const fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}
