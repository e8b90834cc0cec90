//! Core type definitions for diagram processing
//!
//! Geometry primitives shared by layout, painting and hit testing, plus the
//! arrow orientation setting and the render configuration.

use std::fmt;

use super::text::TextMetrics;

/// A point in surface coordinates (pixels, y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by the given offsets
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A straight line segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

impl Line {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
        }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            from: self.from.offset(dx, dy),
            to: self.to.offset(dx, dy),
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x && self.from.y != self.to.y
    }

    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y && self.from.x != self.to.x
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Which arrowheads a diagram shows
///
/// Inheritance trees are drawn either with arrows pointing at base classes
/// (`Up`) or at derived classes (`Down`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ArrowDirection {
    /// Only left and up arrowheads
    Up,
    /// Only right and down arrowheads
    Down,
    /// Every arrowhead
    #[default]
    Both,
}

impl ArrowDirection {
    /// Interpret the `arrowdir` parameter; anything but exactly `up` or
    /// `down` shows both directions
    pub fn from_param(value: &str) -> Self {
        match value {
            "up" => ArrowDirection::Up,
            "down" => ArrowDirection::Down,
            _ => ArrowDirection::Both,
        }
    }

    /// Returns true if arrowheads pointing right or down are drawn
    pub fn shows_forward(&self) -> bool {
        !matches!(self, ArrowDirection::Up)
    }

    /// Returns true if arrowheads pointing left or up are drawn
    pub fn shows_backward(&self) -> bool {
        !matches!(self, ArrowDirection::Down)
    }
}

impl fmt::Display for ArrowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrowDirection::Up => write!(f, "up"),
            ArrowDirection::Down => write!(f, "down"),
            ArrowDirection::Both => write!(f, "both"),
        }
    }
}

/// Largest accepted row height in pixels
pub const MAX_ROW_HEIGHT: i32 = 1000;

/// Rendering configuration passed explicitly to layout and renderers
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Row pitch and connector cell size in pixels
    pub row_height: i32,
    pub arrow_direction: ArrowDirection,
    pub metrics: TextMetrics,
    pub background: String,
    pub stroke: String,
    pub text_color: String,
    pub interface_color: String,
    pub node_fill: String,
    pub font_family: String,
    pub font_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            row_height: 30,
            arrow_direction: ArrowDirection::Both,
            metrics: TextMetrics::default(),
            background: "#ffffff".to_string(),
            stroke: "#000000".to_string(),
            text_color: "#000000".to_string(),
            interface_color: "#0000ff".to_string(),
            node_fill: "#e0e0e0".to_string(),
            font_family: "Helvetica".to_string(),
            font_size: 12,
        }
    }
}

impl RenderConfig {
    pub fn new(arrow_direction: ArrowDirection) -> Self {
        Self {
            arrow_direction,
            ..Self::default()
        }
    }

    pub fn with_arrow_direction(mut self, arrow_direction: ArrowDirection) -> Self {
        self.arrow_direction = arrow_direction;
        self
    }

    /// Row height is clamped to `1..=MAX_ROW_HEIGHT`
    pub fn with_row_height(mut self, row_height: i32) -> Self {
        self.row_height = row_height.clamp(1, MAX_ROW_HEIGHT);
        self
    }

    pub fn with_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }
}
