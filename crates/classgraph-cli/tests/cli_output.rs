//! End-to-end output tests for the classgraph binary

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_classgraph"))
        .args(args)
        .env("CLASSGRAPH_LOG_LEVEL", "off")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn classgraph")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

const SHAPES: [&str; 10] = [
    "--classes",
    "CShape,Mshape.html,CCircle,Mcircle.html",
    "--before",
    "M,Mr_",
    "--after",
    "M,M",
    "--indent",
    "0,1",
    "--base",
    "https://docs.example/",
];

#[test]
fn test_render_to_stdout() {
    let mut args = vec!["render"];
    args.extend(SHAPES);
    let output = run_cli(&args);

    assert!(output.status.success());
    let svg = stdout(&output);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"<a href="https://docs.example/shape.html">"#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_render_from_markup_file() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("circle.html");
    std::fs::write(
        &page,
        r#"<param name=classes value="CShape,Mshape.html,CCircle,Mcircle.html">
<param name=before value="M,Mr_"><param name=after value="M,M">
<param name=indent value="0,1"><param name=arrowdir value="down">"#,
    )
    .unwrap();
    let out = dir.path().join("circle.svg");

    let output = run_cli(&[
        "render",
        "--markup",
        page.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let svg = std::fs::read_to_string(out).unwrap();
    assert!(svg.contains(">Circle</text>"));
}

#[test]
fn test_layout_json() {
    let mut args = vec!["layout", "--json"];
    args.extend(SHAPES);
    let output = run_cli(&args);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), 2);
    assert_eq!(json["nodes"][1]["grows_left"], false);
    assert_eq!(json["nodes"][1]["url"], "https://docs.example/circle.html");
}

#[test]
fn test_validate_reports_malformed_set() {
    let output = run_cli(&["validate", "--classes", "CA,M,CB,M", "--before", "M", "--after", "M,M", "--indent", "0,1"]);

    assert!(!output.status.success());
    assert!(stdout(&output).contains("✗ Invalid class graph"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("'before' has 1 tokens, expected 2"));
}

#[test]
fn test_codes_lists_pairs() {
    let output = run_cli(&["codes", "||r_"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("\"||\""));
    assert!(text.contains("(public)"));
    assert!(text.contains("arrow Right"));
}
