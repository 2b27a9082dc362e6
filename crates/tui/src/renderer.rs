use std::io::stdout;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use anyhow::Result;
use campus_core::input::{InputEvent, Key};
use campus_core::{Carousel, CarouselConfig};
use campus_protocol::{CarouselEvent, ThemeToken};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};
use tracing::{debug, info};

use crate::view::{ArrowState, CarouselView};

/// Content of one panel.
#[derive(Debug, Clone)]
pub struct Card {
    pub title: String,
    pub body: String,
}

fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::PanelBackground => Color::Black,
        ThemeToken::PanelBorder => Color::DarkGray,
        ThemeToken::PanelActiveBorder => Color::Cyan,
        ThemeToken::PanelText => Color::White,
        ThemeToken::IndicatorActive => Color::Cyan,
        ThemeToken::IndicatorInactive => Color::DarkGray,
        ThemeToken::ArrowEnabled => Color::White,
        ThemeToken::ArrowDisabled => Color::DarkGray,
        ThemeToken::Background => Color::Black,
        ThemeToken::TextMuted => Color::Gray,
    }
}

/// Screen regions, recomputed every frame and reused for mouse hit tests.
#[derive(Debug, Clone, Copy)]
struct Regions {
    header: Rect,
    carousel: Rect,
    prev: Rect,
    panels: Rect,
    next: Rect,
    indicators: Rect,
    status: Rect,
}

impl Regions {
    fn new(area: Rect) -> Self {
        let [header, carousel, indicators, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let [prev, panels, next] = Layout::horizontal([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .areas(carousel);
        Self {
            header,
            carousel,
            prev,
            panels,
            next,
            indicators,
            status,
        }
    }

    /// Column where the indicator strip starts; dots are two columns apart.
    fn indicator_start(&self, count: usize) -> u16 {
        let strip = u16::try_from(count * 2).unwrap_or(u16::MAX);
        self.indicators.x + self.indicators.width.saturating_sub(strip) / 2
    }

    fn indicator_at(&self, pos: Position, count: usize) -> Option<usize> {
        if !self.indicators.contains(pos) {
            return None;
        }
        let offset = pos.x.checked_sub(self.indicator_start(count))?;
        let index = usize::from(offset / 2);
        (index < count).then_some(index)
    }
}

struct App {
    carousel: Carousel<Card>,
    view: CarouselView,
    last_event: Arc<Mutex<Option<CarouselEvent>>>,
    column_width: f64,
    clock: Instant,
}

impl App {
    fn now(&self) -> u64 {
        u64::try_from(self.clock.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn units(&self, columns: u16) -> f64 {
        f64::from(columns) * self.column_width
    }

    fn input(&mut self, event: InputEvent) {
        let now = self.now();
        let commands = self.carousel.handle_input(event, now);
        self.view.apply(&commands);
    }

    fn on_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Tab => {
                let event = if self.carousel.is_focused() {
                    InputEvent::Blur
                } else {
                    InputEvent::Focus
                };
                self.input(event);
            }
            KeyCode::Left => self.input(InputEvent::KeyDown {
                key: Key::ArrowLeft,
            }),
            KeyCode::Right => self.input(InputEvent::KeyDown {
                key: Key::ArrowRight,
            }),
            KeyCode::Char(c @ '1'..='9') => {
                let index = usize::from(c as u8 - b'1');
                self.input(InputEvent::Indicator { index });
            }
            _ => {}
        }
        true
    }

    fn on_mouse(&mut self, kind: MouseEventKind, pos: Position, regions: &Regions) {
        let x = self.units(pos.x);
        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if regions.prev.contains(pos) {
                    self.input(InputEvent::PrevArrow);
                } else if regions.next.contains(pos) {
                    self.input(InputEvent::NextArrow);
                } else if let Some(index) = regions.indicator_at(pos, self.view.indicators.len())
                {
                    self.input(InputEvent::Indicator { index });
                } else if regions.panels.contains(pos) {
                    self.input(InputEvent::PointerDown { x });
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.input(InputEvent::PointerUp { x }),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let inside = regions.carousel.contains(pos);
                if inside && !self.carousel.is_hovered() {
                    self.input(InputEvent::PointerEnter);
                } else if !inside && self.carousel.is_hovered() {
                    self.input(InputEvent::PointerLeave);
                }
            }
            _ => {}
        }
    }

    fn status_line(&self) -> String {
        let slide = match *self.last_event.lock().unwrap_or_else(PoisonError::into_inner) {
            Some(CarouselEvent::SlideChanged { index, previous }) => {
                format!("slide {} (from {})", index + 1, previous + 1)
            }
            None => "no slide change yet".to_string(),
        };
        let flags = [
            (self.carousel.is_focused(), "focused"),
            (self.carousel.is_hovered(), "hovered"),
            (self.carousel.is_autoplay_running(), "autoplay"),
        ]
        .iter()
        .filter_map(|(on, name)| on.then_some(*name))
        .collect::<Vec<_>>()
        .join(", ");
        format!(
            " {slide} | {}/{} | {flags}",
            self.carousel.active_index() + 1,
            self.carousel.panel_count()
        )
    }

    fn draw(&self, frame: &mut Frame, regions: &Regions) {
        let muted = Style::default().fg(theme_to_color(ThemeToken::TextMuted));

        let header = Paragraph::new(
            " campus | Tab focus | ←→ navigate (focused) | 1-9 jump | drag to swipe | q quit ",
        )
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));
        frame.render_widget(header, regions.header);

        let background = Block::default()
            .style(Style::default().bg(theme_to_color(ThemeToken::Background)));
        frame.render_widget(background, regions.carousel);

        self.draw_panels(frame, regions.panels);
        draw_arrow(frame, regions.prev, self.view.prev, "<");
        draw_arrow(frame, regions.next, self.view.next, ">");
        self.draw_indicators(frame, regions);

        frame.render_widget(
            Paragraph::new(self.status_line()).style(muted),
            regions.status,
        );
    }

    fn draw_panels(&self, frame: &mut Frame, area: Rect) {
        if !self.view.mounted {
            return;
        }
        let slots = self.view.slots();
        let first = self.view.first_visible();
        let columns = Layout::horizontal(vec![
            Constraint::Ratio(1, u32::try_from(slots).unwrap_or(1));
            slots
        ])
        .split(area);

        for (slot, column) in columns.iter().enumerate() {
            let index = first + slot;
            let Some(card) = self.carousel.panels().get(index) else {
                continue;
            };
            let border = if index == self.carousel.active_index() {
                ThemeToken::PanelActiveBorder
            } else {
                ThemeToken::PanelBorder
            };
            let block = Block::bordered()
                .title(format!(" {} ", card.title))
                .border_style(Style::default().fg(theme_to_color(border)))
                .style(Style::default().bg(theme_to_color(ThemeToken::PanelBackground)));
            let body = Paragraph::new(card.body.as_str())
                .style(Style::default().fg(theme_to_color(ThemeToken::PanelText)))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(body, *column);
        }
    }

    fn draw_indicators(&self, frame: &mut Frame, regions: &Regions) {
        let dots = &self.view.indicators;
        if dots.is_empty() {
            return;
        }
        let spans: Vec<Span> = dots
            .iter()
            .map(|dot| {
                let glyph = if dot.active { "● " } else { "○ " };
                Span::styled(glyph, Style::default().fg(theme_to_color(dot.color)))
            })
            .collect();
        let start = regions.indicator_start(dots.len());
        let area = Rect {
            x: start,
            width: regions.indicators.width - (start - regions.indicators.x),
            ..regions.indicators
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn draw_arrow(frame: &mut Frame, area: Rect, arrow: Option<ArrowState>, glyph: &str) {
    let Some(arrow) = arrow else {
        return;
    };
    let mut style = Style::default().fg(theme_to_color(arrow.color));
    if arrow.opacity < 1.0 {
        style = style.add_modifier(Modifier::DIM);
    }
    let middle = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    frame.render_widget(Paragraph::new(format!(" {glyph} ")).style(style), middle);
}

pub fn run(cards: Vec<Card>, config: CarouselConfig, column_width: f64) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, cards, config, column_width);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    cards: Vec<Card>,
    config: CarouselConfig,
    column_width: f64,
) -> Result<()> {
    let size = terminal.size()?;
    let clock = Instant::now();
    let viewport = (f64::from(size.width) * column_width) as u32;
    let Some((mut carousel, commands)) = Carousel::mount(cards, config, viewport, 0) else {
        return Ok(());
    };

    let last_event = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&last_event);
    carousel.subscribe(move |event| {
        *sink.lock().unwrap_or_else(PoisonError::into_inner) = Some(*event);
    });

    let mut view = CarouselView::default();
    view.apply(&commands);
    let mut app = App {
        carousel,
        view,
        last_event,
        column_width,
        clock,
    };
    info!(panels = app.carousel.panel_count(), viewport, "terminal carousel started");

    loop {
        let now = app.now();
        let due = app.carousel.tick(now);
        app.view.apply(&due);

        let size = terminal.size()?;
        let regions = Regions::new(Rect::new(0, 0, size.width, size.height));
        terminal.draw(|frame| app.draw(frame, &regions))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if !app.on_key(key.code) {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                app.on_mouse(mouse.kind, Position::new(mouse.column, mouse.row), &regions);
            }
            Event::Resize(width, _) => {
                let width = app.units(width) as u32;
                app.input(InputEvent::Resize { width });
            }
            _ => {}
        }
    }

    let teardown = app.carousel.destroy();
    app.view.apply(&teardown);
    let panels = app.carousel.into_panels();
    debug!(returned = panels.len(), "carousel torn down");
    Ok(())
}
