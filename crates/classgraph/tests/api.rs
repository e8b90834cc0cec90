//! Integration tests for the public API

use classgraph::prelude::*;
use classgraph::{parse, render, render_markup, render_with_config, Url};

fn shapes() -> DescriptorSet {
    DescriptorSet::new(
        "CShape,Mshape.html,CCircle,Mcircle.html,ISerializable,Mserializable.html",
        "0,1,1",
        "M,M|r_,Mr_",
        "M,M,M",
    )
}

#[test]
fn test_single_class_descriptor() {
    let set = DescriptorSet::new("Cfoo,file.html", "0", "x", "x");
    let db = parse(&set, Some("https://docs.example/api/")).unwrap();

    assert_eq!(db.node_count(), 1);
    let node = db.get_node(0).unwrap();
    assert_eq!(node.label, "foo");
    assert_eq!(node.kind, NodeKind::Class);
    assert_eq!(
        node.document_url,
        Some(Url::parse("https://docs.example/api/file.html").unwrap())
    );
}

#[test]
fn test_parse_keeps_input_order() {
    let db = parse(&shapes(), None).unwrap();
    let labels: Vec<_> = db.nodes().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["Shape", "Circle", "Serializable"]);
    assert!(db.get_node(2).unwrap().is_interface());
}

#[test]
fn test_render_links_every_documented_class() {
    let svg = render(&shapes(), Some("https://docs.example/")).unwrap();
    for page in ["shape.html", "circle.html", "serializable.html"] {
        assert!(svg.contains(&format!(r#"<a href="https://docs.example/{}">"#, page)));
    }
}

#[test]
fn test_render_without_base_leaves_relative_files_unlinked() {
    let svg = render(&shapes(), None).unwrap();
    assert!(!svg.contains("<a href"));
    assert!(svg.contains(r#"font-style="italic""#));
}

#[test]
fn test_row_height_scales_diagram() {
    let small = render_with_config(&shapes(), None, RenderConfig::default()).unwrap();
    let large =
        render_with_config(&shapes(), None, RenderConfig::default().with_row_height(60)).unwrap();
    assert!(small.contains(r#"height="90""#));
    assert!(large.contains(r#"height="180""#));
}

#[test]
fn test_render_markup_page() {
    let page = r#"<HTML><BODY><APPLET CODE="ClassGraph.class" WIDTH=600 HEIGHT=95>
<param name=classes value="CShape,Mshape.html,CCircle,Mcircle.html">
<param name=before value="M,Mr_">
<param name=after value="M,M">
<param name=indent value="0,1">
</APPLET></BODY></HTML>"#;
    let svg = render_markup(page, Some("https://docs.example/")).unwrap();
    assert!(svg.contains(">Circle</text>"));
}

#[test]
fn test_component_pipeline() {
    let parser = ClassGraphParser::with_base_str("https://docs.example/").unwrap();
    let mut database = ClassGraphDatabase::new();
    let report = parser.parse(&shapes(), &mut database).unwrap();
    assert!(report.is_clean());

    let algorithm = ClassGraphLayoutAlgorithm::new();
    let layout = algorithm.layout(&database).unwrap();
    assert_eq!(layout.nodes.len(), 3);

    let scene = ClassGraphRenderer::new().paint(&database, &layout).unwrap();
    assert_eq!(scene.width, layout.width);
    assert_eq!(scene.height, layout.height);
    assert_eq!(scene.nodes().count(), 3);

    // Boxes paint in input order on top of the connectors
    let labels: Vec<_> = scene.nodes().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["Shape", "Circle", "Serializable"]);
}

#[test]
fn test_panel_from_markup() {
    let params = AppletParams::from_markup(
        r#"<param name=classes value="CA,Ma.html"><param name=before value="M">
<param name=after value="M"><param name=indent value="0"><param name=arrowdir value="down">"#,
    )
    .unwrap();
    let mut panel = ClassGraphPanel::from_params(
        &params,
        Some(Url::parse("https://docs.example/").unwrap()),
        RenderConfig::default(),
    )
    .unwrap();

    assert_eq!(panel.config().arrow_direction, ArrowDirection::Down);
    panel.resize(640, 480).unwrap();
    assert!(panel.to_svg().unwrap().contains("https://docs.example/a.html"));
}
