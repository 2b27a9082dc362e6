pub mod presets;
pub mod responsive;

use campus_protocol::TransitionMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use responsive::Breakpoint;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("panelsToShow must be at least 1")]
    ZeroPanelsToShow,
    #[error("scrollStep must be at least 1")]
    ZeroScrollStep,
    #[error("autoplayInterval must be positive")]
    ZeroAutoplayInterval,
    #[error("breakpoint at max width {max_width} shows zero panels")]
    ZeroBreakpointPanels { max_width: u32 },
}

/// Options recognized by [`crate::model::Carousel`].
///
/// Encoded as camelCase JSON. Every field is optional; missing fields take
/// the defaults below. The option names used by the legacy slider
/// (`slidesToShow`, `autoplaySpeed`, `infinite`, `dots`, `fade`, ...) are
/// accepted as aliases so existing page configs keep working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselConfig {
    #[serde(alias = "slidesToShow")]
    pub panels_to_show: usize,
    #[serde(alias = "slidesToScroll")]
    pub scroll_step: usize,
    pub autoplay: bool,
    #[serde(rename = "autoplayInterval", alias = "autoplaySpeed")]
    pub autoplay_interval_ms: u64,
    #[serde(alias = "infinite")]
    pub wrap_around: bool,
    #[serde(alias = "dots")]
    pub show_indicators: bool,
    #[serde(alias = "arrows")]
    pub show_arrows: bool,
    #[serde(deserialize_with = "transition_or_fade_flag", alias = "fade")]
    pub transition: TransitionMode,
    #[serde(rename = "transitionDuration", alias = "speed")]
    pub transition_duration_ms: u64,
    pub pause_on_hover: bool,
    #[serde(alias = "responsive")]
    pub breakpoints: Vec<Breakpoint>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            panels_to_show: 1,
            scroll_step: 1,
            autoplay: true,
            autoplay_interval_ms: 5000,
            wrap_around: true,
            show_indicators: true,
            show_arrows: true,
            transition: TransitionMode::Slide,
            transition_duration_ms: 500,
            pause_on_hover: true,
            breakpoints: Vec::new(),
        }
    }
}

impl CarouselConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: CarouselConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.panels_to_show == 0 {
            return Err(ConfigError::ZeroPanelsToShow);
        }
        if self.scroll_step == 0 {
            return Err(ConfigError::ZeroScrollStep);
        }
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigError::ZeroAutoplayInterval);
        }
        if let Some(bp) = self.breakpoints.iter().find(|bp| bp.panels_to_show == Some(0)) {
            return Err(ConfigError::ZeroBreakpointPanels {
                max_width: bp.max_width,
            });
        }
        Ok(())
    }

    /// Coerce out-of-range values into their nearest valid setting.
    ///
    /// Carousel construction never fails on a bad config; it clamps instead.
    pub(crate) fn sanitized(mut self) -> Self {
        self.panels_to_show = self.panels_to_show.max(1);
        self.scroll_step = self.scroll_step.max(1);
        self.autoplay_interval_ms = self.autoplay_interval_ms.max(1);
        self.breakpoints.retain(|bp| bp.panels_to_show != Some(0));
        self
    }
}

/// Accept either a mode name (`"slide"`, `"fade"`) or the legacy boolean
/// `fade` flag.
fn transition_or_fade_flag<'de, D>(deserializer: D) -> Result<TransitionMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Flag(bool),
        Mode(TransitionMode),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Flag(true) => TransitionMode::Fade,
        Repr::Flag(false) => TransitionMode::Slide,
        Repr::Mode(mode) => mode,
    })
}
