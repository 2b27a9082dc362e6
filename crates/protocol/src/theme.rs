use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    PanelBackground,
    PanelBorder,
    PanelActiveBorder,
    PanelText,

    // Indicator dots
    IndicatorActive,
    IndicatorInactive,

    // Arrows
    ArrowEnabled,
    ArrowDisabled,

    Background,
    TextMuted,
}
