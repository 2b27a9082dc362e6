/// Stable index of a panel within its carousel.
pub type PanelIndex = usize;

/// Ordered, fixed-size collection of panel handles.
///
/// Captured once when the carousel is mounted. Panels are never added or
/// removed afterwards; everything else refers to them by index.
#[derive(Debug, Clone)]
pub struct PanelSet<P> {
    panels: Vec<P>,
}

impl<P> PanelSet<P> {
    /// Capture panels in container order. Returns `None` for an empty set.
    pub fn capture(panels: impl IntoIterator<Item = P>) -> Option<Self> {
        let panels: Vec<P> = panels.into_iter().collect();
        if panels.is_empty() {
            None
        } else {
            Some(Self { panels })
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Always false; an empty set cannot be captured.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn get(&self, index: PanelIndex) -> Option<&P> {
        self.panels.get(index)
    }

    pub fn last_index(&self) -> PanelIndex {
        self.panels.len().saturating_sub(1)
    }

    pub fn contains_index(&self, index: PanelIndex) -> bool {
        index < self.panels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.panels.iter()
    }

    /// Hand the panels back in their original order.
    pub fn into_inner(self) -> Vec<P> {
        self.panels
    }
}
