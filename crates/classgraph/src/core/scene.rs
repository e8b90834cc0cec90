//! Backend-neutral draw list
//!
//! A paint pass records what to draw into a [`Scene`]; output backends (SVG,
//! a host canvas behind WASM) replay it. Keeping the recording separate from
//! the backend makes paint passes directly testable.

use super::types::{Line, Point, Rect};

/// Stroke pattern for line segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Font weight/slant and color of a node label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct LabelStyle {
    pub bold: bool,
    pub italic: bool,
    /// Use the accent color instead of the text color
    pub accent: bool,
}

/// A clickable labelled box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeBox {
    /// Row index of the node in its diagram
    pub index: usize,
    pub label: String,
    pub bounds: Rect,
    pub style: LabelStyle,
    /// Navigation target, if the node is linked
    pub href: Option<String>,
}

/// A single recorded drawing operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Node(NodeBox),
    Line { line: Line, style: StrokeStyle },
}

/// A recorded paint pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub background: String,
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: i32, height: i32, background: impl Into<String>) -> Self {
        Self {
            width,
            height,
            background: background.into(),
            commands: Vec::new(),
        }
    }

    pub fn draw_node(&mut self, node: NodeBox) {
        self.commands.push(DrawCommand::Node(node));
    }

    pub fn draw_line(&mut self, line: Line, style: StrokeStyle) {
        self.commands.push(DrawCommand::Line { line, style });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeBox> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Node(node) => Some(node),
            DrawCommand::Line { .. } => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Line, StrokeStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line { line, style } => Some((line, *style)),
            DrawCommand::Node(_) => None,
        })
    }

    /// Topmost node box under a point; later commands paint over earlier ones
    pub fn node_at(&self, point: Point) -> Option<&NodeBox> {
        self.nodes().filter(|node| node.bounds.contains(point)).last()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(index: usize, bounds: Rect) -> NodeBox {
        NodeBox {
            index,
            label: format!("N{}", index),
            bounds,
            style: LabelStyle::default(),
            href: None,
        }
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new(60, 0, "#ffffff");
        assert!(scene.is_empty());
        assert_eq!(scene.nodes().count(), 0);
        assert!(scene.node_at(Point::new(0, 0)).is_none());
    }

    #[test]
    fn test_commands_keep_order() {
        let mut scene = Scene::new(100, 100, "#ffffff");
        scene.draw_line(Line::new(0, 0, 10, 0), StrokeStyle::Solid);
        scene.draw_node(node(0, Rect::new(0, 0, 10, 10)));
        scene.draw_line(Line::new(0, 5, 0, 15), StrokeStyle::Dotted);

        assert_eq!(scene.commands().len(), 3);
        assert!(matches!(scene.commands()[1], DrawCommand::Node(_)));
        let styles: Vec<_> = scene.lines().map(|(_, style)| style).collect();
        assert_eq!(styles, vec![StrokeStyle::Solid, StrokeStyle::Dotted]);
    }

    #[test]
    fn test_node_at_prefers_topmost() {
        let mut scene = Scene::new(100, 100, "#ffffff");
        scene.draw_node(node(0, Rect::new(0, 0, 50, 50)));
        scene.draw_node(node(1, Rect::new(25, 25, 50, 50)));

        assert_eq!(scene.node_at(Point::new(30, 30)).map(|n| n.index), Some(1));
        assert_eq!(scene.node_at(Point::new(5, 5)).map(|n| n.index), Some(0));
        assert!(scene.node_at(Point::new(90, 5)).is_none());
    }
}
