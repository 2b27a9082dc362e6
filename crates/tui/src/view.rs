use campus_protocol::{ArrowDirection, RenderCommand, ThemeToken};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowState {
    pub opacity: f64,
    pub color: ThemeToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorState {
    pub active: bool,
    pub color: ThemeToken,
}

/// Terminal-side mirror of the DOM a browser host would maintain.
///
/// Durations are ignored; the terminal snaps to the final state.
#[derive(Debug, Default)]
pub struct CarouselView {
    pub mounted: bool,
    pub panel_count: usize,
    panel_width: f64,
    track_offset: f64,
    opacities: Vec<f64>,
    pub indicators: Vec<IndicatorState>,
    pub prev: Option<ArrowState>,
    pub next: Option<ArrowState>,
}

impl CarouselView {
    pub fn apply(&mut self, commands: &[RenderCommand]) {
        for cmd in commands {
            self.apply_one(cmd);
        }
    }

    fn apply_one(&mut self, cmd: &RenderCommand) {
        match cmd {
            RenderCommand::MountTrack { panel_count } => {
                *self = Self {
                    mounted: true,
                    panel_count: *panel_count,
                    panel_width: 100.0,
                    ..Self::default()
                };
            }
            RenderCommand::CreateArrow { direction, .. } => {
                *self.arrow_mut(*direction) = Some(ArrowState {
                    opacity: 1.0,
                    color: ThemeToken::ArrowEnabled,
                });
            }
            RenderCommand::CreateIndicator { .. } => self.indicators.push(IndicatorState {
                active: false,
                color: ThemeToken::IndicatorInactive,
            }),
            RenderCommand::SetPanelWidth { percent } => self.panel_width = *percent,
            RenderCommand::SetTrackOffset { percent, .. } => self.track_offset = *percent,
            RenderCommand::SetPanelOpacity { panel, opacity, .. } => {
                if self.opacities.len() < self.panel_count {
                    self.opacities.resize(self.panel_count, 0.0);
                }
                if let Some(slot) = self.opacities.get_mut(*panel) {
                    *slot = *opacity;
                }
            }
            RenderCommand::SetIndicator {
                index,
                active,
                color,
            } => {
                if let Some(dot) = self.indicators.get_mut(*index) {
                    *dot = IndicatorState {
                        active: *active,
                        color: *color,
                    };
                }
            }
            RenderCommand::SetArrow {
                direction,
                opacity,
                color,
            } => {
                if let Some(arrow) = self.arrow_mut(*direction) {
                    arrow.opacity = *opacity;
                    arrow.color = *color;
                }
            }
            RenderCommand::RemoveControls => {
                self.indicators.clear();
                self.prev = None;
                self.next = None;
            }
            RenderCommand::UnwrapPanels => self.mounted = false,
        }
    }

    fn arrow_mut(&mut self, direction: ArrowDirection) -> &mut Option<ArrowState> {
        match direction {
            ArrowDirection::Prev => &mut self.prev,
            ArrowDirection::Next => &mut self.next,
        }
    }

    pub fn is_fading(&self) -> bool {
        !self.opacities.is_empty()
    }

    /// Panels that fit the viewport at once.
    pub fn slots(&self) -> usize {
        if self.is_fading() || self.panel_width <= 0.0 {
            return 1;
        }
        ((100.0 / self.panel_width).round() as usize).max(1)
    }

    /// Index of the panel in the leading slot.
    pub fn first_visible(&self) -> usize {
        if self.is_fading() {
            return self
                .opacities
                .iter()
                .position(|&opacity| opacity > 0.5)
                .unwrap_or(0);
        }
        if self.panel_width <= 0.0 {
            return 0;
        }
        (-self.track_offset / self.panel_width).round().max(0.0) as usize
    }
}
