use campus_protocol::{ArrowDirection, RenderCommand, ThemeToken};

/// Arrow opacity at a hard boundary (non-wrapping carousel).
const ARROW_DIMMED: f64 = 0.5;
const ARROW_FULL: f64 = 1.0;

/// Render indicator and arrow states for the active index.
///
/// Arrows dim at the ends only when the carousel does not wrap; a wrapping
/// carousel has no boundary.
pub fn render_controls(
    active: usize,
    panel_count: usize,
    wraps: bool,
    show_indicators: bool,
    show_arrows: bool,
) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(panel_count + 2);

    if show_indicators {
        commands.extend((0..panel_count).map(|index| {
            let is_active = index == active;
            RenderCommand::SetIndicator {
                index,
                active: is_active,
                color: if is_active {
                    ThemeToken::IndicatorActive
                } else {
                    ThemeToken::IndicatorInactive
                },
            }
        }));
    }

    if show_arrows {
        let last = panel_count.saturating_sub(1);
        commands.push(arrow(ArrowDirection::Prev, !wraps && active == 0));
        commands.push(arrow(ArrowDirection::Next, !wraps && active == last));
    }

    commands
}

fn arrow(direction: ArrowDirection, at_boundary: bool) -> RenderCommand {
    RenderCommand::SetArrow {
        direction,
        opacity: if at_boundary { ARROW_DIMMED } else { ARROW_FULL },
        color: if at_boundary {
            ThemeToken::ArrowDisabled
        } else {
            ThemeToken::ArrowEnabled
        },
    }
}
