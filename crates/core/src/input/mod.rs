pub mod gesture;

use serde::{Deserialize, Serialize};

pub use gesture::{DragTracker, Swipe, SWIPE_THRESHOLD};

/// Keys a carousel reacts to. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Host input, normalized across mouse, touch and keyboard sources.
///
/// Coordinates are horizontal positions in the host's units (CSS pixels in
/// a browser).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InputEvent {
    /// Mouse button or touch went down over the track.
    PointerDown { x: f64 },
    /// Mouse button or touch was released.
    PointerUp { x: f64 },
    /// Pointer entered the container.
    PointerEnter,
    /// Pointer left the container.
    PointerLeave,
    Focus,
    Blur,
    KeyDown { key: Key },
    /// The viewport was resized to `width` units.
    Resize { width: u32 },
    /// An arrow control was activated.
    PrevArrow,
    NextArrow,
    /// An indicator dot was activated.
    Indicator { index: usize },
}
