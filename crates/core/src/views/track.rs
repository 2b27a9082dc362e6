use campus_protocol::{RenderCommand, TransitionMode};

/// Opacity of the active panel in fade mode.
const OPAQUE: f64 = 1.0;
/// Opacity of every other panel in fade mode.
const TRANSPARENT: f64 = 0.0;

/// Width of one panel, in percent of the viewport.
pub fn panel_width_percent(panels_visible: usize) -> f64 {
    100.0 / panels_visible.max(1) as f64
}

/// Track translation that brings `active` to the leading viewport slot.
///
/// Panel 0 sits at its natural position; each step moves the track left by
/// one panel width.
pub fn track_offset_percent(active: usize, panels_visible: usize) -> f64 {
    -(active as f64) * panel_width_percent(panels_visible)
}

/// Render the panel track for the given state.
///
/// Slide mode sizes the panels and translates the track. Fade mode leaves
/// the track in place and gives exactly one panel full opacity.
pub fn render_track(
    active: usize,
    panel_count: usize,
    panels_visible: usize,
    mode: TransitionMode,
    duration_ms: u64,
) -> Vec<RenderCommand> {
    match mode {
        TransitionMode::Slide => vec![
            RenderCommand::SetPanelWidth {
                percent: panel_width_percent(panels_visible),
            },
            RenderCommand::SetTrackOffset {
                percent: track_offset_percent(active, panels_visible),
                duration_ms,
            },
        ],
        TransitionMode::Fade => (0..panel_count)
            .map(|panel| RenderCommand::SetPanelOpacity {
                panel,
                opacity: if panel == active { OPAQUE } else { TRANSPARENT },
                duration_ms,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_offsets_by_panel_width() {
        let cmds = render_track(2, 5, 2, TransitionMode::Slide, 500);
        assert_eq!(
            cmds,
            vec![
                RenderCommand::SetPanelWidth { percent: 50.0 },
                RenderCommand::SetTrackOffset {
                    percent: -100.0,
                    duration_ms: 500,
                },
            ]
        );
    }

    #[test]
    fn first_panel_sits_at_origin() {
        assert_eq!(track_offset_percent(0, 3), 0.0);
    }

    #[test]
    fn fade_has_exactly_one_opaque_panel() {
        let cmds = render_track(1, 4, 1, TransitionMode::Fade, 300);
        assert_eq!(cmds.len(), 4);
        let opaque: Vec<usize> = cmds
            .iter()
            .filter_map(|cmd| match cmd {
                RenderCommand::SetPanelOpacity { panel, opacity, .. } if *opacity == 1.0 => {
                    Some(*panel)
                }
                _ => None,
            })
            .collect();
        assert_eq!(opaque, vec![1]);
    }
}
