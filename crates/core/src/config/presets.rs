//! Carousel configurations mounted by the site's pages.

use campus_protocol::TransitionMode;

use super::{Breakpoint, CarouselConfig};

/// Course highlights on the landing page: three cards, shrinking on
/// narrower screens.
pub fn courses() -> CarouselConfig {
    CarouselConfig {
        panels_to_show: 3,
        autoplay_interval_ms: 4000,
        breakpoints: vec![Breakpoint::new(1024, 2), Breakpoint::new(768, 1)],
        ..CarouselConfig::default()
    }
}

/// Testimonials: one quote at a time, cross-faded, no arrows.
pub fn testimonials() -> CarouselConfig {
    CarouselConfig {
        transition: TransitionMode::Fade,
        autoplay_interval_ms: 6000,
        show_arrows: false,
        ..CarouselConfig::default()
    }
}

/// Blog teaser strip: same layout as the courses strip, user driven only.
pub fn blog() -> CarouselConfig {
    CarouselConfig {
        autoplay: false,
        ..courses()
    }
}

/// Look up a preset by page name.
pub fn by_name(name: &str) -> Option<CarouselConfig> {
    match name {
        "courses" => Some(courses()),
        "testimonials" => Some(testimonials()),
        "blog" => Some(blog()),
        _ => None,
    }
}
