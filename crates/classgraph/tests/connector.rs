//! Integration tests for the connector code interpreter

use classgraph::core::{ArrowDirection, Line, Point};
use classgraph::plugins::classgraph::{
    decode, ConnectorRenderer, ConnectorShape, DrawInstruction, Heading, Inheritance,
};

fn renderer(direction: ArrowDirection) -> ConnectorRenderer {
    // Default geometry: 30px rows, 21px boxes
    ConnectorRenderer::new(30, 21, direction)
}

fn segments(instructions: &[DrawInstruction]) -> Vec<Line> {
    instructions.iter().filter_map(DrawInstruction::as_segment).copied().collect()
}

fn headings(instructions: &[DrawInstruction]) -> Vec<Heading> {
    instructions
        .iter()
        .filter_map(DrawInstruction::as_arrow)
        .map(|a| a.heading)
        .collect()
}

#[test]
fn test_child_first_with_up_arrows_only() {
    let out = renderer(ArrowDirection::Up).instructions(Point::new(0, 0), "|R");

    let lines = segments(&out);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].is_vertical());
    assert!(lines[1].is_horizontal());
    assert_eq!(headings(&out), vec![Heading::Up]);
}

#[test]
fn test_base_only_with_down_arrows_only() {
    let out = renderer(ArrowDirection::Down).instructions(Point::new(0, 0), "d_");
    assert_eq!(
        segments(&out),
        vec![Line::new(0, 15, 15, 15), Line::new(15, 15, 15, 30)]
    );
    assert_eq!(headings(&out), vec![Heading::Down]);
}

#[test]
fn test_both_shows_every_arrow() {
    let out = renderer(ArrowDirection::Both).instructions(Point::new(0, 0), "^_D_");
    assert_eq!(
        headings(&out),
        vec![Heading::Right, Heading::Up, Heading::Down, Heading::Left]
    );
}

#[test]
fn test_cells_advance_one_row_unit() {
    let out = renderer(ArrowDirection::Both).instructions(Point::new(100, 60), "||||r_");
    let lines = segments(&out);

    // Two pass-through verticals, raised into the 5px gap, then the last child
    assert_eq!(lines[0], Line::new(115, 55, 115, 90));
    assert_eq!(lines[1], Line::new(145, 55, 145, 90));
    assert_eq!(lines[2], Line::new(175, 60, 175, 75));
    assert_eq!(lines[3], Line::new(175, 75, 190, 75));
}

#[test]
fn test_blank_and_unknown_pairs_only_advance() {
    let out = renderer(ArrowDirection::Both).instructions(Point::new(0, 0), "SPxxl_");
    let lines = segments(&out);
    assert_eq!(lines[0].from, Point::new(60, 15));
}

#[test]
fn test_trailing_character_ignored() {
    assert_eq!(decode("r_l").len(), 1);
    assert!(renderer(ArrowDirection::Both)
        .instructions(Point::new(0, 0), "r")
        .is_empty());
}

#[test]
fn test_markers_carry_inheritance() {
    let steps = decode("r_R-l.||");
    let kinds: Vec<_> = steps.iter().map(|s| s.inheritance).collect();
    assert_eq!(
        kinds,
        vec![
            Some(Inheritance::Public),
            Some(Inheritance::Protected),
            Some(Inheritance::Private),
            None
        ]
    );
    assert_eq!(steps[3].shape, ConnectorShape::Pass);
}

#[test]
fn test_arrowhead_strokes_meet_at_tip() {
    let out = renderer(ArrowDirection::Both).instructions(Point::new(0, 0), "R_");
    let arrow = out.iter().find_map(DrawInstruction::as_arrow).unwrap();
    assert_eq!(arrow.tip, Point::new(29, 15));
    for stroke in arrow.strokes() {
        assert_eq!(stroke.to, arrow.tip);
    }
}
