/// Minimum horizontal travel, in host units, for a drag to count as a swipe.
/// Travel of exactly this distance is still a tap.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Outcome of a completed drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Content dragged toward the left: show the next panel.
    Next,
    /// Content dragged toward the right: show the previous panel.
    Prev,
}

/// Tracks one pointer or touch drag from press to release.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    start_x: Option<f64>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn press(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. A release without a matching press is ignored.
    pub fn release(&mut self, x: f64) -> Option<Swipe> {
        let start = self.start_x.take()?;
        classify(start - x)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

/// Classify net displacement `start - end`; positive means a leftward drag.
/// A non-finite displacement carries no direction and counts as a tap.
fn classify(displacement: f64) -> Option<Swipe> {
    if !displacement.is_finite() || displacement.abs() <= SWIPE_THRESHOLD {
        None
    } else if displacement > 0.0 {
        Some(Swipe::Next)
    } else {
        Some(Swipe::Prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_drag_is_a_tap() {
        let mut drag = DragTracker::new();
        drag.press(100.0);
        assert_eq!(drag.release(60.0), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut drag = DragTracker::new();
        drag.press(100.0);
        assert_eq!(drag.release(50.0), None);
    }

    #[test]
    fn left_drag_goes_next() {
        let mut drag = DragTracker::new();
        drag.press(100.0);
        assert_eq!(drag.release(40.0), Some(Swipe::Next));
    }

    #[test]
    fn right_drag_goes_prev() {
        let mut drag = DragTracker::new();
        drag.press(40.0);
        assert_eq!(drag.release(100.0), Some(Swipe::Prev));
    }

    #[test]
    fn non_finite_coordinates_are_a_tap() {
        let mut drag = DragTracker::new();
        drag.press(f64::NAN);
        assert_eq!(drag.release(100.0), None);
        drag.press(100.0);
        assert_eq!(drag.release(f64::NAN), None);
        drag.press(0.0);
        assert_eq!(drag.release(f64::NEG_INFINITY), None);
        drag.press(f64::INFINITY);
        assert_eq!(drag.release(f64::INFINITY), None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut drag = DragTracker::new();
        assert_eq!(drag.release(0.0), None);
    }
}
