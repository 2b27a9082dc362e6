use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::ArrowDirection;

/// A single, stateless visual update for a carousel host.
///
/// The core emits a `Vec<RenderCommand>` for every state change. Hosts
/// (a DOM bridge, a terminal renderer) apply them in order; each command
/// carries all the data it needs, so hosts never read carousel state back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum RenderCommand {
    /// Wrap the container's panels in a clipping viewport and a track.
    #[serde(rename_all = "camelCase")]
    MountTrack { panel_count: usize },

    /// Create a navigation arrow control.
    CreateArrow {
        direction: ArrowDirection,
        label: String,
    },

    /// Create an indicator dot that jumps to `index` when activated.
    CreateIndicator { index: usize, label: String },

    /// Width of each panel as a percentage of the viewport.
    SetPanelWidth { percent: f64 },

    /// Translate the track horizontally, in percent of the track width.
    #[serde(rename_all = "camelCase")]
    SetTrackOffset { percent: f64, duration_ms: u64 },

    /// Fade a single panel to the given opacity.
    #[serde(rename_all = "camelCase")]
    SetPanelOpacity {
        panel: usize,
        opacity: f64,
        duration_ms: u64,
    },

    /// Mark an indicator dot active or inactive.
    SetIndicator {
        index: usize,
        active: bool,
        color: ThemeToken,
    },

    /// Update an arrow's boundary state.
    SetArrow {
        direction: ArrowDirection,
        opacity: f64,
        color: ThemeToken,
    },

    /// Remove every arrow and indicator created at mount time.
    RemoveControls,

    /// Move the panels back into the container in their original order and
    /// drop the viewport and track wrappers.
    UnwrapPanels,
}

impl RenderCommand {
    /// Whether the command animates over time rather than applying instantly.
    pub fn is_animated(&self) -> bool {
        match self {
            RenderCommand::SetTrackOffset { duration_ms, .. }
            | RenderCommand::SetPanelOpacity { duration_ms, .. } => *duration_ms > 0,
            _ => false,
        }
    }
}
