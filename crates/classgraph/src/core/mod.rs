//! Core abstractions for diagram processing
//!
//! This module defines the traits every diagram plugin implements (database,
//! parser, layout, renderer), the geometry and configuration types they share,
//! and the scene/SVG output backends.

pub mod chumsky_utils;
mod database;
mod error;
mod layout;
pub mod logging;
mod parser;
mod renderer;
pub mod scene;
pub mod svg;
mod text;
mod types;

pub use database::*;
pub use error::*;
pub use layout::*;
pub use logging::*;
pub use parser::*;
pub use renderer::*;
pub use scene::{DrawCommand, LabelStyle, NodeBox, Scene, StrokeStyle};
pub use svg::scene_to_svg;
pub use text::*;
pub use types::*;
