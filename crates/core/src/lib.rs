//! Platform-independent state machines behind the campus site widgets.
//!
//! Hosts feed input events and timestamps in and apply the returned
//! [`campus_protocol::RenderCommand`]s to whatever surface they own.

pub mod blog;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod events;
pub mod faq;
pub mod input;
pub mod model;
pub mod views;

pub use config::{CarouselConfig, ConfigError};
pub use model::Carousel;
