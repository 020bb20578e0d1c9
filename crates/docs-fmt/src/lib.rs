//! Terminal styling for documentation search results.
//!
//! This crate provides:
//! - [`TermRenderer`] for rendering a markdown block to styled terminal text
//! - [`Colorizer`] for the light/dark palette the renderer draws from
//! - [`Theme`] and [`prefers_light`] for picking that palette

mod colorizer;
mod markdown;
mod theme;

pub use colorizer::Colorizer;
pub use markdown::{StyleConfig, TermRenderer, format_markdown};
pub use theme::{Theme, prefers_light};
