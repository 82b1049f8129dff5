//! Builds the multi-size `.ico` bundles of the taskbar thumbnail toolbar from their SVG sources.
//!
//! Sources are read from `<input>/<variant>/<name>.svg` and written to
//! `<output>/<variant>/<name>.ico`, with one frame per entry of [`catalog::ICON_SIZES`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod locator;
pub mod pack;
pub mod pipeline;
pub mod render;

pub use error::Error;
pub use pipeline::{Pipeline, Report};
