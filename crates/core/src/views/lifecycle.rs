use campus_protocol::{ArrowDirection, RenderCommand};

/// Commands that build the carousel structure around the captured panels:
/// the track, then arrows, then one indicator per panel.
pub fn render_mount(
    panel_count: usize,
    show_arrows: bool,
    show_indicators: bool,
) -> Vec<RenderCommand> {
    let mut commands = vec![RenderCommand::MountTrack { panel_count }];

    if show_arrows {
        for direction in [ArrowDirection::Prev, ArrowDirection::Next] {
            commands.push(RenderCommand::CreateArrow {
                direction,
                label: direction.label().to_string(),
            });
        }
    }

    if show_indicators {
        commands.extend((0..panel_count).map(|index| RenderCommand::CreateIndicator {
            index,
            label: format!("Go to slide {}", index + 1),
        }));
    }

    commands
}

/// Commands that restore the container to its pre-mount structure.
pub fn render_teardown(had_controls: bool) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(2);
    if had_controls {
        commands.push(RenderCommand::RemoveControls);
    }
    commands.push(RenderCommand::UnwrapPanels);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_creates_one_indicator_per_panel() {
        let cmds = render_mount(4, false, true);
        let labels: Vec<&str> = cmds
            .iter()
            .filter_map(|cmd| match cmd {
                RenderCommand::CreateIndicator { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            labels,
            vec!["Go to slide 1", "Go to slide 2", "Go to slide 3", "Go to slide 4"]
        );
        assert_eq!(cmds[0], RenderCommand::MountTrack { panel_count: 4 });
    }

    #[test]
    fn mount_creates_both_arrows() {
        let cmds = render_mount(2, true, false);
        assert_eq!(cmds.len(), 3);
        assert!(matches!(
            cmds[1],
            RenderCommand::CreateArrow {
                direction: ArrowDirection::Prev,
                ..
            }
        ));
    }

    #[test]
    fn teardown_unwraps_last() {
        assert_eq!(
            render_teardown(true),
            vec![RenderCommand::RemoveControls, RenderCommand::UnwrapPanels]
        );
        assert_eq!(render_teardown(false), vec![RenderCommand::UnwrapPanels]);
    }
}
