pub mod autoplay;
pub mod carousel;
pub mod panels;

pub use autoplay::{Autoplay, MAX_CATCH_UP_FIRES};
pub use carousel::{Carousel, Lifecycle};
pub use panels::{PanelIndex, PanelSet};
