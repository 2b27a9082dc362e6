use campus_protocol::{CarouselEvent, RenderCommand};
use tracing::{debug, trace};

use crate::config::CarouselConfig;
use crate::config::responsive::resolve_panels_visible;
use crate::events::{ListenerId, Listeners};
use crate::input::{DragTracker, InputEvent, Key, Swipe};
use crate::model::autoplay::{Autoplay, MAX_CATCH_UP_FIRES};
use crate::model::panels::{PanelIndex, PanelSet};
use crate::views;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Mounted,
    Destroyed,
}

/// A carousel cycling a fixed set of panels through one active position.
///
/// All state changes happen in response to explicit calls. Every call that
/// can change state takes the host's current time in milliseconds and
/// returns the render commands the host must apply (empty when nothing
/// changed). Before handling the call itself, pending timers that fell due
/// at or before `now_ms` are fired in deadline order, so a host that only
/// calls in on input still observes the same sequence as one that ticks
/// every frame.
///
/// Navigation requests arriving while a transition is in flight are
/// dropped, not queued.
#[derive(Debug)]
pub struct Carousel<P> {
    panels: PanelSet<P>,
    config: CarouselConfig,
    active_index: PanelIndex,
    panels_visible: usize,
    /// End of the current transition window; `Some` while a transition may
    /// still be in flight.
    transition_until: Option<u64>,
    autoplay: Autoplay,
    drag: DragTracker,
    focused: bool,
    hovered: bool,
    listeners: Listeners,
    lifecycle: Lifecycle,
}

impl<P> Carousel<P> {
    /// Take ownership of `panels` and build the carousel around them.
    ///
    /// Returns `None` when there are no panels; a missing or empty
    /// container leaves the page untouched. Invalid config values are
    /// clamped rather than rejected. The returned commands build the track
    /// and controls and place panel 0 without animation; autoplay, when
    /// configured, starts counting from `now_ms`.
    pub fn mount(
        panels: impl IntoIterator<Item = P>,
        config: CarouselConfig,
        viewport_width: u32,
        now_ms: u64,
    ) -> Option<(Self, Vec<RenderCommand>)> {
        let Some(panels) = PanelSet::capture(panels) else {
            debug!("carousel mount skipped: no panels");
            return None;
        };

        let config = config.sanitized();
        let panels_visible =
            resolve_panels_visible(config.panels_to_show, &config.breakpoints, viewport_width);

        let mut carousel = Self {
            autoplay: Autoplay::new(config.autoplay_interval_ms),
            panels,
            config,
            active_index: 0,
            panels_visible,
            transition_until: None,
            drag: DragTracker::new(),
            focused: false,
            hovered: false,
            listeners: Listeners::new(),
            lifecycle: Lifecycle::Mounted,
        };

        let mut commands = views::render_mount(
            carousel.panel_count(),
            carousel.config.show_arrows,
            carousel.config.show_indicators,
        );
        commands.extend(carousel.snapshot());

        if carousel.config.autoplay {
            carousel.autoplay.start(now_ms);
        }

        debug!(
            panels = carousel.panel_count(),
            panels_visible,
            autoplay = carousel.config.autoplay,
            "carousel mounted"
        );
        Some((carousel, commands))
    }

    pub fn active_index(&self) -> PanelIndex {
        self.active_index
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn panels_visible(&self) -> usize {
        self.panels_visible
    }

    pub fn panels(&self) -> &PanelSet<P> {
        &self.panels
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_destroyed(&self) -> bool {
        self.lifecycle == Lifecycle::Destroyed
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Whether a transition is still in flight at `now_ms`.
    pub fn transition_in_flight(&self, now_ms: u64) -> bool {
        self.transition_until.is_some_and(|until| now_ms < until)
    }

    /// Earliest pending timer deadline, for hosts that schedule wakeups.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.transition_until, self.autoplay.next_fire()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&CarouselEvent) + Send + 'static,
    ) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Fire every timer due at or before `now_ms`, oldest first.
    ///
    /// When a transition release and an autoplay fire share a deadline, the
    /// release goes first. At most [`MAX_CATCH_UP_FIRES`] overdue autoplay
    /// fires are replayed; older ones are skipped. Each render describes the
    /// whole visual state, so only the last one is returned.
    pub fn tick(&mut self, now_ms: u64) -> Vec<RenderCommand> {
        let mut commands = Vec::new();
        if self.is_destroyed() {
            return commands;
        }

        let skipped = self.autoplay.skip_missed(now_ms, MAX_CATCH_UP_FIRES);
        if skipped > 0 {
            debug!(skipped, "overdue autoplay fires skipped");
        }
        loop {
            let release = self.transition_until.filter(|&until| until <= now_ms);
            let fire = self.autoplay.next_fire().filter(|&at| at <= now_ms);
            match (release, fire) {
                (None, None) => break,
                (Some(released_at), Some(fire_at)) if released_at <= fire_at => {
                    self.transition_until = None;
                }
                (Some(_), None) => {
                    self.transition_until = None;
                }
                (_, Some(_)) => {
                    let Some(fired_at) = self.autoplay.fire_if_due(now_ms) else {
                        break;
                    };
                    trace!(at = fired_at, "autoplay fired");
                    let step = self.step_forward(fired_at);
                    if !step.is_empty() {
                        commands = step;
                    }
                }
            }
        }
        commands
    }

    pub fn advance(&mut self, now_ms: u64) -> Vec<RenderCommand> {
        let mut commands = self.tick(now_ms);
        commands.extend(self.step_forward(now_ms));
        commands
    }

    pub fn retreat(&mut self, now_ms: u64) -> Vec<RenderCommand> {
        let mut commands = self.tick(now_ms);
        commands.extend(self.step_backward(now_ms));
        commands
    }

    /// Jump straight to `index`. Ignored when `index` is already active, is
    /// out of range, or a transition is in flight.
    pub fn go_to(&mut self, index: PanelIndex, now_ms: u64) -> Vec<RenderCommand> {
        let mut commands = self.tick(now_ms);
        if self.is_destroyed() {
            return commands;
        }
        if !self.panels.contains_index(index) {
            trace!(index, panels = self.panel_count(), "go_to out of range ignored");
            return commands;
        }
        if self.transition_in_flight(now_ms) {
            trace!(index, "go_to dropped: transition in flight");
            return commands;
        }
        commands.extend(self.navigate(index, now_ms));
        commands
    }

    /// Re-render the current index and open a new transition window.
    pub fn render(&mut self, now_ms: u64) -> Vec<RenderCommand> {
        let mut commands = self.tick(now_ms);
        if !self.is_destroyed() {
            commands.extend(self.render_at(now_ms));
        }
        commands
    }

    /// Full visual state with no animation and no side effects.
    ///
    /// Hosts use this to resynchronize a freshly created surface.
    pub fn snapshot(&self) -> Vec<RenderCommand> {
        self.visual_state(0)
    }

    pub fn pointer_down(&mut self, x: f64) {
        if !self.is_destroyed() {
            self.drag.press(x);
        }
    }

    /// Finish a drag. Travel beyond the swipe threshold steps once in the
    /// direction of the drag; anything shorter is a tap.
    pub fn pointer_up(&mut self, x: f64, now_ms: u64) -> Vec<RenderCommand> {
        let mut commands = self.tick(now_ms);
        if self.is_destroyed() {
            return commands;
        }
        match self.drag.release(x) {
            Some(Swipe::Next) => commands.extend(self.step_forward(now_ms)),
            Some(Swipe::Prev) => commands.extend(self.step_backward(now_ms)),
            None => trace!(x, "pointer released without swipe"),
        }
        commands
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Arrow keys navigate while the carousel has focus.
    pub fn key_down(&mut self, key: Key, now_ms: u64) -> Vec<RenderCommand> {
        let mut commands = self.tick(now_ms);
        if self.is_destroyed() || !self.focused {
            return commands;
        }
        match key {
            Key::ArrowLeft => commands.extend(self.step_backward(now_ms)),
            Key::ArrowRight => commands.extend(self.step_forward(now_ms)),
            Key::Other => {}
        }
        commands
    }

    pub fn pointer_enter(&mut self, now_ms: u64) -> Vec<RenderCommand> {
        let commands = self.tick(now_ms);
        if self.is_destroyed() {
            return commands;
        }
        self.hovered = true;
        if self.config.pause_on_hover {
            self.autoplay.stop();
        }
        commands
    }

    pub fn pointer_leave(&mut self, now_ms: u64) -> Vec<RenderCommand> {
        let commands = self.tick(now_ms);
        if self.is_destroyed() {
            return commands;
        }
        self.hovered = false;
        if self.config.pause_on_hover {
            self.start_autoplay_if_enabled(now_ms);
        }
        commands
    }

    pub fn pause_autoplay(&mut self, now_ms: u64) -> Vec<RenderCommand> {
        let commands = self.tick(now_ms);
        self.autoplay.stop();
        commands
    }

    /// Restart autoplay with a full interval from `now_ms`. Has no effect if
    /// autoplay is disabled in the config or already running.
    pub fn resume_autoplay(&mut self, now_ms: u64) -> Vec<RenderCommand> {
        let commands = self.tick(now_ms);
        if !self.is_destroyed() {
            self.start_autoplay_if_enabled(now_ms);
        }
        commands
    }

    /// Recompute the visible panel count for a new viewport width and
    /// re-render if it changed. The active index is kept.
    pub fn resize(&mut self, viewport_width: u32, now_ms: u64) -> Vec<RenderCommand> {
        let mut commands = self.tick(now_ms);
        if self.is_destroyed() {
            return commands;
        }
        let panels_visible = resolve_panels_visible(
            self.config.panels_to_show,
            &self.config.breakpoints,
            viewport_width,
        );
        if panels_visible != self.panels_visible {
            debug!(
                from = self.panels_visible,
                to = panels_visible,
                viewport_width,
                "carousel reflowed"
            );
            self.panels_visible = panels_visible;
            commands.extend(self.render_at(now_ms));
        }
        commands
    }

    /// Route a normalized host input to the matching operation.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: u64) -> Vec<RenderCommand> {
        match event {
            InputEvent::PointerDown { x } => {
                let commands = self.tick(now_ms);
                self.pointer_down(x);
                commands
            }
            InputEvent::PointerUp { x } => self.pointer_up(x, now_ms),
            InputEvent::PointerEnter => self.pointer_enter(now_ms),
            InputEvent::PointerLeave => self.pointer_leave(now_ms),
            InputEvent::Focus => {
                self.focus();
                self.tick(now_ms)
            }
            InputEvent::Blur => {
                self.blur();
                self.tick(now_ms)
            }
            InputEvent::KeyDown { key } => self.key_down(key, now_ms),
            InputEvent::Resize { width } => self.resize(width, now_ms),
            InputEvent::PrevArrow => self.retreat(now_ms),
            InputEvent::NextArrow => self.advance(now_ms),
            InputEvent::Indicator { index } => self.go_to(index, now_ms),
        }
    }

    /// Stop autoplay, drop listeners and restore the container.
    ///
    /// Safe to call more than once; later calls return no commands. Every
    /// operation on a destroyed carousel is inert.
    pub fn destroy(&mut self) -> Vec<RenderCommand> {
        if self.is_destroyed() {
            return Vec::new();
        }
        self.autoplay.stop();
        self.drag.cancel();
        self.listeners.clear();
        self.transition_until = None;
        self.lifecycle = Lifecycle::Destroyed;
        debug!(panels = self.panel_count(), "carousel destroyed");
        views::render_teardown(self.config.show_arrows || self.config.show_indicators)
    }

    /// Give the panel handles back in their original order.
    pub fn into_panels(self) -> Vec<P> {
        self.panels.into_inner()
    }

    fn start_autoplay_if_enabled(&mut self, now_ms: u64) {
        if self.config.autoplay && !self.autoplay.is_running() {
            self.autoplay.start(now_ms);
        }
    }

    fn step_forward(&mut self, at: u64) -> Vec<RenderCommand> {
        if self.is_destroyed() {
            return Vec::new();
        }
        if self.transition_in_flight(at) {
            trace!("advance dropped: transition in flight");
            return Vec::new();
        }
        let count = self.panel_count();
        let step = self.config.scroll_step;
        let target = if self.config.wrap_around {
            (self.active_index + step % count) % count
        } else if self.active_index >= self.panels.last_index() {
            return Vec::new();
        } else {
            self.active_index
                .saturating_add(step)
                .min(self.panels.last_index())
        };
        self.navigate(target, at)
    }

    fn step_backward(&mut self, at: u64) -> Vec<RenderCommand> {
        if self.is_destroyed() {
            return Vec::new();
        }
        if self.transition_in_flight(at) {
            trace!("retreat dropped: transition in flight");
            return Vec::new();
        }
        let count = self.panel_count();
        let step = self.config.scroll_step % count;
        let target = if self.config.wrap_around {
            (self.active_index + count - step) % count
        } else if self.active_index == 0 {
            return Vec::new();
        } else {
            self.active_index.saturating_sub(self.config.scroll_step)
        };
        self.navigate(target, at)
    }

    fn navigate(&mut self, target: PanelIndex, at: u64) -> Vec<RenderCommand> {
        if target == self.active_index {
            return Vec::new();
        }
        let previous = self.active_index;
        self.active_index = target;
        let commands = self.render_at(at);
        debug!(from = previous, to = target, "slide changed");
        self.listeners.emit(&CarouselEvent::SlideChanged {
            index: target,
            previous,
        });
        commands
    }

    fn render_at(&mut self, at: u64) -> Vec<RenderCommand> {
        let duration = self.config.transition_duration_ms;
        self.transition_until = Some(at.saturating_add(duration));
        self.visual_state(duration)
    }

    fn visual_state(&self, duration_ms: u64) -> Vec<RenderCommand> {
        let mut commands = views::render_track(
            self.active_index,
            self.panel_count(),
            self.panels_visible,
            self.config.transition,
            duration_ms,
        );
        commands.extend(views::render_controls(
            self.active_index,
            self.panel_count(),
            self.config.wrap_around,
            self.config.show_indicators,
            self.config.show_arrows,
        ));
        commands
    }
}
