use serde::{Deserialize, Serialize};

/// Panel-count override applied when the viewport is at most `max_width`
/// units wide. Without a count the breakpoint falls back to the base count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BreakpointRepr")]
pub struct Breakpoint {
    pub max_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panels_to_show: Option<usize>,
}

impl Breakpoint {
    pub fn new(max_width: u32, panels_to_show: usize) -> Self {
        Self {
            max_width,
            panels_to_show: Some(panels_to_show),
        }
    }

    /// A breakpoint that keeps the base panel count.
    pub fn inherit(max_width: u32) -> Self {
        Self {
            max_width,
            panels_to_show: None,
        }
    }
}

/// Wire forms accepted for a breakpoint: the flat form, and the nested
/// `{ "breakpoint": 768, "settings": { "slidesToShow": 1 } }` form.
#[derive(Deserialize)]
#[serde(untagged)]
enum BreakpointRepr {
    #[serde(rename_all = "camelCase")]
    Flat {
        max_width: u32,
        panels_to_show: Option<usize>,
    },
    #[serde(rename_all = "camelCase")]
    Nested {
        breakpoint: u32,
        settings: NestedSettings,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NestedSettings {
    slides_to_show: Option<usize>,
}

impl From<BreakpointRepr> for Breakpoint {
    fn from(repr: BreakpointRepr) -> Self {
        match repr {
            BreakpointRepr::Flat {
                max_width,
                panels_to_show,
            } => Breakpoint {
                max_width,
                panels_to_show,
            },
            BreakpointRepr::Nested {
                breakpoint,
                settings,
            } => Breakpoint {
                max_width: breakpoint,
                panels_to_show: settings.slides_to_show,
            },
        }
    }
}

/// Effective number of visible panels for a viewport `width`.
///
/// Among the breakpoints the width satisfies (`width <= max_width`), the one
/// with the smallest `max_width` wins. With no match, or when the winner sets
/// no count, `base` applies. Table order does not matter.
pub fn resolve_panels_visible(base: usize, breakpoints: &[Breakpoint], width: u32) -> usize {
    breakpoints
        .iter()
        .filter(|bp| width <= bp.max_width)
        .min_by_key(|bp| bp.max_width)
        .and_then(|bp| bp.panels_to_show)
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<Breakpoint> {
        vec![Breakpoint::new(1024, 2), Breakpoint::new(768, 1)]
    }

    #[test]
    fn wide_viewport_uses_base() {
        assert_eq!(resolve_panels_visible(3, &table(), 1280), 3);
    }

    #[test]
    fn picks_smallest_satisfied_threshold() {
        assert_eq!(resolve_panels_visible(3, &table(), 1024), 2);
        assert_eq!(resolve_panels_visible(3, &table(), 900), 2);
        assert_eq!(resolve_panels_visible(3, &table(), 768), 1);
        assert_eq!(resolve_panels_visible(3, &table(), 320), 1);
    }

    #[test]
    fn table_order_is_irrelevant() {
        let mut reversed = table();
        reversed.reverse();
        assert_eq!(resolve_panels_visible(3, &reversed, 500), 1);
        assert_eq!(resolve_panels_visible(3, &reversed, 1000), 2);
    }

    #[test]
    fn accepts_nested_form() {
        let bp: Breakpoint =
            serde_json::from_str(r#"{ "breakpoint": 768, "settings": { "slidesToShow": 1 } }"#)
                .unwrap();
        assert_eq!(bp, Breakpoint::new(768, 1));
    }

    #[test]
    fn nested_form_without_count_keeps_base() {
        let bp: Breakpoint =
            serde_json::from_str(r#"{ "breakpoint": 480, "settings": { "arrows": false } }"#)
                .unwrap();
        assert_eq!(bp, Breakpoint::inherit(480));

        let mut with_inherit = table();
        with_inherit.push(bp);
        assert_eq!(resolve_panels_visible(3, &with_inherit, 320), 3);
        assert_eq!(resolve_panels_visible(3, &with_inherit, 600), 1);
    }

    #[test]
    fn serializes_flat_form() {
        let json = serde_json::to_string(&Breakpoint::new(600, 2)).unwrap();
        assert_eq!(json, r#"{"maxWidth":600,"panelsToShow":2}"#);
        let json = serde_json::to_string(&Breakpoint::inherit(480)).unwrap();
        assert_eq!(json, r#"{"maxWidth":480}"#);
    }
}
