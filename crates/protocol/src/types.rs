use serde::{Deserialize, Serialize};

/// Visual strategy used when the active panel changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionMode {
    /// Panels sit side by side on a track that is translated horizontally.
    #[default]
    Slide,
    /// Panels are stacked; only the active one is opaque.
    Fade,
}

/// Which of the two navigation arrows a command refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArrowDirection {
    Prev,
    Next,
}

impl ArrowDirection {
    /// Accessible label for the arrow control.
    pub fn label(self) -> &'static str {
        match self {
            ArrowDirection::Prev => "Previous slide",
            ArrowDirection::Next => "Next slide",
        }
    }
}
