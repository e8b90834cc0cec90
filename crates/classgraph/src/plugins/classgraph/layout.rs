//! Class graph layout algorithm
//!
//! Nodes sit in one column, one row per node. The column is split in two:
//! nodes without a connector before them (base classes) grow to the left
//! towards a shared right boundary, all others (the focus class and derived
//! classes) grow to the right from a shared left boundary. Widths are counted
//! in row-height units so connector cells and boxes share one grid.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use super::database::{column_weight, ClassGraphDatabase, NodeDescriptor};
use crate::core::{DiagramError, LayoutAlgorithm, Point, Rect, RenderConfig, MAX_ROW_HEIGHT};

/// Screen rectangle assigned to a node by a layout pass
pub type ScreenPosition = Rect;

/// Column extents in row-height units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    pub left_column_width: i32,
    pub right_column_width: i32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            left_column_width: 2,
            right_column_width: 2,
        }
    }
}

impl LayoutState {
    /// Left edge of right-growing nodes, in units
    pub fn right_growth_origin(&self) -> i32 {
        (self.left_column_width - 2).max(0)
    }
}

/// A node with its computed geometry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedNode {
    pub index: usize,
    pub position: ScreenPosition,
    pub column_weight: i32,
    pub span: i32,
    pub grows_left: bool,
}

/// Result of one layout pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassGraphLayout {
    pub nodes: Vec<PositionedNode>,
    pub state: LayoutState,
    pub width: i32,
    pub height: i32,
    pub row_height: i32,
    /// Height of the tallest node box
    pub node_height: i32,
}

impl ClassGraphLayout {
    pub fn position(&self, index: usize) -> Option<ScreenPosition> {
        self.nodes.get(index).map(|n| n.position)
    }

    /// Index of the node whose box contains the point
    pub fn node_at(&self, point: Point) -> Option<usize> {
        self.nodes
            .iter()
            .find(|n| n.position.contains(point))
            .map(|n| n.index)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Class graph layout algorithm
#[derive(Debug, Clone, Default)]
pub struct ClassGraphLayoutAlgorithm {
    config: RenderConfig,
}

impl ClassGraphLayoutAlgorithm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn row_height(&self) -> i32 {
        self.config.row_height.clamp(1, MAX_ROW_HEIGHT)
    }

    /// Preferred box size, widened to at least two cells
    pub fn node_size(&self, node: &NodeDescriptor) -> (i32, i32) {
        let (width, height) = self.config.metrics.measure(&node.label);
        (width.max(2 * self.row_height()), height)
    }

    /// Units a node needs on its side of the split: its own connector cells
    /// plus its box
    fn reserved_units(&self, node: &NodeDescriptor) -> i32 {
        let (width, _) = self.node_size(node);
        node.span() + column_weight(width, self.row_height())
    }

    /// Widest requirement per growth direction, never below two units
    pub fn compute_extents(&self, nodes: &[NodeDescriptor]) -> LayoutState {
        let mut state = LayoutState::default();
        for node in nodes {
            let units = self.reserved_units(node);
            if node.grows_left() {
                state.left_column_width = state.left_column_width.max(units);
            } else {
                state.right_column_width = state.right_column_width.max(units);
            }
        }
        trace!(
            left = state.left_column_width,
            right = state.right_column_width,
            "Computed extents"
        );
        state
    }

    /// Box for every node, in input order
    pub fn compute_positions(&self, nodes: &[NodeDescriptor], state: &LayoutState) -> Vec<ScreenPosition> {
        let row = self.row_height();
        let sizes: Vec<(i32, i32)> = nodes.iter().map(|n| self.node_size(n)).collect();
        let tallest = sizes.iter().map(|&(_, h)| h).max().unwrap_or(0);
        let right_boundary = state.left_column_width;
        let left_boundary = state.right_growth_origin();

        nodes
            .iter()
            .zip(sizes)
            .enumerate()
            .map(|(i, (node, (width, height)))| {
                let x = if node.grows_left() {
                    (right_boundary - node.span()) * row - width
                } else {
                    (node.span() + left_boundary) * row
                };
                let y = i as i32 * row + (row - tallest) / 2;
                Rect::new(x, y, width, height)
            })
            .collect()
    }
}

impl LayoutAlgorithm<ClassGraphDatabase> for ClassGraphLayoutAlgorithm {
    type Output = ClassGraphLayout;

    fn layout(&self, database: &ClassGraphDatabase) -> Result<ClassGraphLayout> {
        let layout_span = span!(Level::DEBUG, "layout_classgraph", nodes = database.as_slice().len());
        let _enter = layout_span.enter();

        if !(1..=MAX_ROW_HEIGHT).contains(&self.config.row_height) {
            return Err(DiagramError::layout_error(format!(
                "row height must be between 1 and {}, got {}",
                MAX_ROW_HEIGHT, self.config.row_height
            ))
            .into());
        }

        let nodes = database.as_slice();
        let row = self.row_height();
        let state = self.compute_extents(nodes);

        let width = state
            .left_column_width
            .checked_add(state.right_column_width)
            .and_then(|units| units.checked_mul(row));
        let rows_height = i32::try_from(nodes.len())
            .ok()
            .and_then(|count| count.checked_mul(row));
        let (width, rows_height) = match (width, rows_height) {
            (Some(width), Some(rows_height)) => (width, rows_height),
            _ => {
                return Err(DiagramError::layout_error(format!(
                    "diagram of {} nodes does not fit in pixel coordinates",
                    nodes.len()
                ))
                .into())
            }
        };

        let positions = self.compute_positions(nodes, &state);

        let positioned: Vec<PositionedNode> = nodes
            .iter()
            .zip(&positions)
            .enumerate()
            .map(|(index, (node, position))| PositionedNode {
                index,
                position: *position,
                column_weight: column_weight(position.width, row),
                span: node.span(),
                grows_left: node.grows_left(),
            })
            .collect();

        let node_height = positions.iter().map(|p| p.height).max().unwrap_or(0);
        let lowest = positions.iter().map(|p| p.bottom()).max().unwrap_or(0);
        let height = rows_height.max(lowest);

        debug!(width, height, left = state.left_column_width, right = state.right_column_width, "Layout completed");

        Ok(ClassGraphLayout {
            nodes: positioned,
            state,
            width,
            height,
            row_height: row,
            node_height,
        })
    }

    fn name(&self) -> &'static str {
        "column"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}
