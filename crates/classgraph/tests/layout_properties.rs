//! Property-based invariant tests for the column layout.
//!
//! 1. grows_left iff the before code has fewer than two characters.
//! 2. Column extents are never below two units.
//! 3. compute_positions is deterministic and idempotent.
//! 4. Rows follow input order at a constant pitch.
//! 5. Left-growing boxes end at or before the split; right-growing ones
//!    start at or after it.
//! 6. The bounding box covers every row.

use classgraph::core::{LayoutAlgorithm, RenderConfig};
use classgraph::plugins::classgraph::{
    ClassGraphDatabase, ClassGraphLayoutAlgorithm, LayoutState, NodeDescriptor,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn connector_code() -> impl Strategy<Value = String> {
    proptest::string::string_regex("([|^RrDdLlS][_.|-]){0,4}x?").unwrap()
}

fn node() -> impl Strategy<Value = NodeDescriptor> {
    (
        "[A-Za-z][A-Za-z0-9_:<>]{0,24}",
        connector_code(),
        connector_code(),
        0u32..4,
        any::<bool>(),
    )
        .prop_map(|(label, before, after, indent, interface)| {
            let node = if interface {
                NodeDescriptor::interface(label)
            } else {
                NodeDescriptor::class(label)
            };
            node.with_codes(before, after).with_indent(indent)
        })
}

fn nodes(max_len: usize) -> impl Strategy<Value = Vec<NodeDescriptor>> {
    proptest::collection::vec(node(), 0..=max_len)
}

fn algorithm(row_height: i32) -> ClassGraphLayoutAlgorithm {
    ClassGraphLayoutAlgorithm::with_config(RenderConfig::default().with_row_height(row_height))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Growth direction
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn grows_left_iff_short_before_code(node in node()) {
        prop_assert_eq!(node.grows_left(), node.before_code().chars().count() < 2);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Extents
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn extents_at_least_two(nodes in nodes(12), row in 10i32..60) {
        let state = algorithm(row).compute_extents(&nodes);
        prop_assert!(state.left_column_width >= 2);
        prop_assert!(state.right_column_width >= 2);
        if nodes.is_empty() {
            prop_assert_eq!(state, LayoutState::default());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn positions_are_idempotent(nodes in nodes(12)) {
        let layout = algorithm(30);
        let state = layout.compute_extents(&nodes);
        let first = layout.compute_positions(&nodes, &state);
        let second = layout.compute_positions(&nodes, &state);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), nodes.len());

        let db = ClassGraphDatabase::from_nodes(nodes);
        prop_assert_eq!(layout.layout(&db).unwrap(), layout.layout(&db).unwrap());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Row order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rows_follow_input_order(nodes in nodes(12), row in 10i32..60) {
        let layout = algorithm(row);
        let state = layout.compute_extents(&nodes);
        let positions = layout.compute_positions(&nodes, &state);
        for pair in positions.windows(2) {
            prop_assert_eq!(pair[1].y - pair[0].y, row);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Left/right split
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn boxes_stay_on_their_side(nodes in nodes(12)) {
        let layout = algorithm(30);
        let state = layout.compute_extents(&nodes);
        let positions = layout.compute_positions(&nodes, &state);
        let split = state.left_column_width * 30;

        for (node, position) in nodes.iter().zip(&positions) {
            prop_assert!(position.x >= 0, "{} starts at {}", node.label, position.x);
            prop_assert!(position.width >= 60);
            if node.grows_left() {
                prop_assert!(position.right() <= split);
            } else {
                prop_assert!(position.x >= state.right_growth_origin() * 30);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Bounding box
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bounding_box_covers_rows(nodes in nodes(12)) {
        let count = nodes.len() as i32;
        let db = ClassGraphDatabase::from_nodes(nodes);
        let result = algorithm(30).layout(&db).unwrap();

        prop_assert_eq!(
            result.width,
            (result.state.left_column_width + result.state.right_column_width) * 30
        );
        prop_assert!(result.height >= count * 30);
        for placed in &result.nodes {
            prop_assert!(placed.position.bottom() <= result.height);
        }
    }
}
