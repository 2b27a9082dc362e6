//! Pure view transforms: carousel state in, render commands out.

pub mod controls;
pub mod lifecycle;
pub mod track;

pub use controls::render_controls;
pub use lifecycle::{render_mount, render_teardown};
pub use track::render_track;
