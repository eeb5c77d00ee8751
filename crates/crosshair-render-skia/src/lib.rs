// File: crates/crosshair-render-skia/src/lib.rs
// Summary: Skia renderer crate; drawing surface for overlay plugins, text shaping and PNG frames.

pub mod frame;
pub mod surface;
pub mod text;

pub use frame::{render_frame_png, render_frame_to_file, FrameOptions};
pub use surface::SkiaSurface;
pub use text::TextShaper;
