//! Connector code interpreter
//!
//! A connector code is read two characters at a time. The first character of
//! a pair picks a [`ConnectorShape`], the second is a marker that carries the
//! inheritance access (`_`, `-`, `.`) or, after `|`, turns a branch into a
//! plain pass-through line. Each pair fills one square cell of `row_height`
//! pixels; the cursor then moves one cell to the right.
//!
//! ```text
//!  ChildFirst  ChildOnly   Child     ChildLast   Pass
//!     ^           ^          |          |          |
//!     |           |          |          |          |
//!     +-->        +-->       +-->       +-->       |
//!     |                      |                     |
//!
//!  BaseFirst   BaseOnly    Base      BaseLast
//!  <--+        <--+       <--+       <--+
//!     |           |          |          |
//!     v           v          |          |
//! ```

use std::fmt;

use super::database::Inheritance;
use crate::core::{ArrowDirection, Line, Point};

/// Way an arrowhead points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Right,
    Down,
    Left,
    Up,
}

impl Heading {
    /// Whether the arrow direction setting lets this heading through
    pub fn is_visible(self, direction: ArrowDirection) -> bool {
        match self {
            Heading::Right | Heading::Down => direction.shows_forward(),
            Heading::Left | Heading::Up => direction.shows_backward(),
        }
    }
}

/// An arrowhead: two short strokes meeting at the tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrowHead {
    pub heading: Heading,
    pub tip: Point,
}

impl ArrowHead {
    pub fn strokes(&self) -> [Line; 2] {
        let Point { x, y } = self.tip;
        match self.heading {
            Heading::Right => [Line::new(x - 4, y - 3, x, y), Line::new(x - 4, y + 3, x, y)],
            Heading::Down => [Line::new(x - 3, y - 4, x, y), Line::new(x + 3, y - 4, x, y)],
            Heading::Left => [Line::new(x + 4, y - 3, x, y), Line::new(x + 4, y + 3, x, y)],
            Heading::Up => [Line::new(x - 3, y + 4, x, y), Line::new(x + 3, y + 4, x, y)],
        }
    }
}

/// Named points of one connector cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// Top centre, raised into the gap above the row's node box
    Lifted,
    /// Tip of an up arrow, one pixel below `Lifted`
    LiftedTip,
    Top,
    Center,
    Bottom,
    LeftEdge,
    RightEdge,
    /// Tip of a left arrow, one pixel inside the left edge
    LeftTip,
    /// Tip of a right arrow, one pixel inside the right edge
    RightTip,
}

/// Geometry of one connector cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    origin: Point,
    size: i32,
    gap: i32,
}

impl Cell {
    fn point(&self, anchor: Anchor) -> Point {
        let s = self.size;
        let (dx, dy) = match anchor {
            Anchor::Lifted => (s / 2, -self.gap),
            Anchor::LiftedTip => (s / 2, -self.gap + 1),
            Anchor::Top => (s / 2, 0),
            Anchor::Center => (s / 2, s / 2),
            Anchor::Bottom => (s / 2, s),
            Anchor::LeftEdge => (0, s / 2),
            Anchor::RightEdge => (s, s / 2),
            Anchor::LeftTip => (1, s / 2),
            Anchor::RightTip => (s - 1, s / 2),
        };
        self.origin.offset(dx, dy)
    }

    fn line(&self, (from, to): (Anchor, Anchor)) -> Line {
        Line {
            from: self.point(from),
            to: self.point(to),
        }
    }
}

/// Segment shapes of the connector language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorShape {
    /// `||`: vertical line through the cell
    Pass,
    /// `|`: first of several derived classes
    ChildFirst,
    /// `^`: the only derived class
    ChildOnly,
    /// `R`: derived class in between
    Child,
    /// `r`: last derived class
    ChildLast,
    /// `D`: first of several base classes
    BaseFirst,
    /// `d`: the only base class
    BaseOnly,
    /// `L`: base class in between
    Base,
    /// `l`: last base class
    BaseLast,
    /// Anything else: empty cell
    Blank,
}

type Segment = (Anchor, Anchor);

const NO_SEGMENTS: &[Segment] = &[];
const NO_ARROWS: &[(Heading, Anchor)] = &[];

impl ConnectorShape {
    pub fn from_pair(shape: char, marker: char) -> Self {
        match shape {
            '|' if marker == '|' => ConnectorShape::Pass,
            '|' => ConnectorShape::ChildFirst,
            '^' => ConnectorShape::ChildOnly,
            'R' => ConnectorShape::Child,
            'r' => ConnectorShape::ChildLast,
            'D' => ConnectorShape::BaseFirst,
            'd' => ConnectorShape::BaseOnly,
            'L' => ConnectorShape::Base,
            'l' => ConnectorShape::BaseLast,
            _ => ConnectorShape::Blank,
        }
    }

    /// The shape character; `Blank` is written as a space
    pub fn code(self) -> char {
        match self {
            ConnectorShape::Pass | ConnectorShape::ChildFirst => '|',
            ConnectorShape::ChildOnly => '^',
            ConnectorShape::Child => 'R',
            ConnectorShape::ChildLast => 'r',
            ConnectorShape::BaseFirst => 'D',
            ConnectorShape::BaseOnly => 'd',
            ConnectorShape::Base => 'L',
            ConnectorShape::BaseLast => 'l',
            ConnectorShape::Blank => 'S',
        }
    }

    fn segments(self) -> &'static [Segment] {
        use Anchor::*;
        match self {
            ConnectorShape::Pass => &[(Lifted, Bottom)],
            ConnectorShape::ChildFirst => &[(Lifted, Bottom), (Center, RightEdge)],
            ConnectorShape::ChildOnly => &[(Lifted, Center), (Center, RightEdge)],
            ConnectorShape::Child => &[(Center, RightEdge), (Top, Bottom)],
            ConnectorShape::ChildLast => &[(Top, Center), (Center, RightEdge)],
            ConnectorShape::BaseFirst | ConnectorShape::Base => {
                &[(LeftEdge, Center), (Top, Bottom)]
            }
            ConnectorShape::BaseOnly | ConnectorShape::BaseLast => {
                &[(LeftEdge, Center), (Center, Bottom)]
            }
            ConnectorShape::Blank => NO_SEGMENTS,
        }
    }

    fn arrows(self) -> &'static [(Heading, Anchor)] {
        use Anchor::*;
        match self {
            ConnectorShape::ChildFirst | ConnectorShape::ChildOnly => {
                &[(Heading::Right, RightTip), (Heading::Up, LiftedTip)]
            }
            ConnectorShape::Child | ConnectorShape::ChildLast => &[(Heading::Right, RightTip)],
            ConnectorShape::BaseFirst | ConnectorShape::BaseOnly => {
                &[(Heading::Down, Bottom), (Heading::Left, LeftTip)]
            }
            ConnectorShape::Base | ConnectorShape::BaseLast => &[(Heading::Left, LeftTip)],
            ConnectorShape::Pass | ConnectorShape::Blank => NO_ARROWS,
        }
    }
}

impl fmt::Display for ConnectorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectorShape::Pass => "pass",
            ConnectorShape::ChildFirst => "child-first",
            ConnectorShape::ChildOnly => "child-only",
            ConnectorShape::Child => "child",
            ConnectorShape::ChildLast => "child-last",
            ConnectorShape::BaseFirst => "base-first",
            ConnectorShape::BaseOnly => "base-only",
            ConnectorShape::Base => "base",
            ConnectorShape::BaseLast => "base-last",
            ConnectorShape::Blank => "blank",
        };
        write!(f, "{}", name)
    }
}

/// One decoded character pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorStep {
    pub shape: ConnectorShape,
    pub inheritance: Option<Inheritance>,
}

/// Decode a connector code; a trailing unpaired character is ignored
pub fn decode(code: &str) -> Vec<ConnectorStep> {
    let chars: Vec<char> = code.chars().collect();
    chars
        .chunks_exact(2)
        .map(|pair| ConnectorStep {
            shape: ConnectorShape::from_pair(pair[0], pair[1]),
            inheritance: Inheritance::from_marker(pair[1]),
        })
        .collect()
}

/// A drawing operation produced by a connector code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawInstruction {
    Segment {
        line: Line,
        inheritance: Option<Inheritance>,
    },
    Arrow(ArrowHead),
}

impl DrawInstruction {
    pub fn as_arrow(&self) -> Option<&ArrowHead> {
        match self {
            DrawInstruction::Arrow(arrow) => Some(arrow),
            DrawInstruction::Segment { .. } => None,
        }
    }

    pub fn as_segment(&self) -> Option<&Line> {
        match self {
            DrawInstruction::Segment { line, .. } => Some(line),
            DrawInstruction::Arrow(_) => None,
        }
    }
}

/// Interprets connector codes relative to a row origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorRenderer {
    row_height: i32,
    gap: i32,
    direction: ArrowDirection,
}

impl ConnectorRenderer {
    /// `node_height` sets how far vertical lines reach up into the gap above a
    /// row's node box, so they meet the box of the row before.
    pub fn new(row_height: i32, node_height: i32, direction: ArrowDirection) -> Self {
        Self {
            row_height,
            gap: (row_height - node_height + 1) / 2,
            direction,
        }
    }

    pub fn direction(&self) -> ArrowDirection {
        self.direction
    }

    /// Instructions for one code whose first cell starts at `origin`
    pub fn instructions(&self, origin: Point, code: &str) -> Vec<DrawInstruction> {
        let mut out = Vec::new();
        let mut cell = Cell {
            origin,
            size: self.row_height,
            gap: self.gap,
        };

        for step in decode(code) {
            for &segment in step.shape.segments() {
                out.push(DrawInstruction::Segment {
                    line: cell.line(segment),
                    inheritance: step.inheritance,
                });
            }
            for &(heading, anchor) in step.shape.arrows() {
                if heading.is_visible(self.direction) {
                    out.push(DrawInstruction::Arrow(ArrowHead {
                        heading,
                        tip: cell.point(anchor),
                    }));
                }
            }
            cell.origin = cell.origin.offset(self.row_height, 0);
        }

        out
    }
}
