use serde::{Deserialize, Serialize};

/// Notifications a carousel publishes to embedding pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CarouselEvent {
    /// The active index moved. Never emitted when the index stays put.
    SlideChanged { index: usize, previous: usize },
}

impl CarouselEvent {
    /// The index the carousel settled on.
    pub fn index(&self) -> usize {
        match self {
            CarouselEvent::SlideChanged { index, .. } => *index,
        }
    }
}
