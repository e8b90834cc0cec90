//! Integration tests for reading applet parameters out of generated pages

use classgraph::core::{ArrowDirection, Database};
use classgraph::{AppletParams, DiagramError};

const PAGE: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 3.2 Final//EN">
<HTML>
<HEAD><TITLE>class Circle</TITLE></HEAD>
<BODY>
<H2>Inheritance:</H2>
<APPLET CODE="ClassGraph.class" WIDTH=600 HEIGHT=125>
<param name=classes value="CShape,Mshape.html,CCircle,Mcircle.html,CDisk,Mdisk.html">
<param name=before value="M,Mr_,M^_">
<param name=after value="Md_,M,M">
<param name=indent value="0,1,2">
<param name=arrowdir value="down">
</APPLET>
<P>A round shape.
</BODY>
</HTML>
"#;

#[test]
fn test_generated_page() {
    let params = AppletParams::from_markup(PAGE).unwrap();
    let set = params.descriptor_set();

    assert_eq!(set.classes, "CShape,Mshape.html,CCircle,Mcircle.html,CDisk,Mdisk.html");
    assert_eq!(set.before, "M,Mr_,M^_");
    assert_eq!(set.after, "Md_,M,M");
    assert_eq!(set.indent, "0,1,2");
    assert_eq!(params.arrow_direction(), ArrowDirection::Down);
}

#[test]
fn test_unknown_arrowdir_shows_both() {
    let params =
        AppletParams::from_markup(r#"<param name=classes value="CA,M"><param name=arrowdir value=sideways>"#)
            .unwrap();
    assert_eq!(params.arrow_direction(), ArrowDirection::Both);
}

#[test]
fn test_arrowdir_is_case_sensitive() {
    let params =
        AppletParams::from_markup(r#"<param name=classes value="CA,M"><param name=arrowdir value=UP>"#)
            .unwrap();
    assert_eq!(params.arrow_direction(), ArrowDirection::Both);
}

#[test]
fn test_unquoted_self_closing_params() {
    let params = AppletParams::from_markup(
        "<param name=classes value=CA,M/><param name=indent value=0/><param name=before value=M /><param name=after value=M/>",
    )
    .unwrap();
    assert_eq!(params.get("classes"), Some("CA,M"));
    assert_eq!(params.get("indent"), Some("0"));
    assert_eq!(params.get("before"), Some("M"));
    assert_eq!(params.get("after"), Some("M"));

    let set = params.descriptor_set();
    let db = classgraph::parse(&set, Some("https://docs.example/api/")).unwrap();
    let node = db.get_node(0).unwrap();
    assert_eq!(node.label, "A");
    assert!(!node.is_linked());
}

#[test]
fn test_whitespace_inside_tags() {
    let params = AppletParams::from_markup(
        "<param\n   name = \"classes\"\n   value = \"CA,Ma.html\" >",
    )
    .unwrap();
    assert_eq!(params.get("classes"), Some("CA,Ma.html"));
}

#[test]
fn test_page_without_applet() {
    let err = AppletParams::from_markup("<HTML><BODY>No diagram here</BODY></HTML>").unwrap_err();
    let diagram = err.downcast_ref::<DiagramError>().unwrap();
    assert!(matches!(diagram, DiagramError::MarkupError { .. }));
}
