pub mod commands;
pub mod event;
pub mod theme;
pub mod types;

pub use commands::RenderCommand;
pub use event::CarouselEvent;
pub use theme::ThemeToken;
pub use types::{ArrowDirection, TransitionMode};
