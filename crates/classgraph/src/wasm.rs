//! WebAssembly bindings for Classgraph
//!
//! Browser-friendly wrappers: a page can hand over its descriptor strings (or
//! its own markup) and receive SVG whose links the browser follows natively.

use wasm_bindgen::prelude::*;

use crate::core::{ArrowDirection, Database, LayoutAlgorithm, Parser, RenderConfig, Renderer};
use crate::plugins::classgraph::{
    ClassGraphDatabase, ClassGraphLayoutAlgorithm, ClassGraphParser, DescriptorSet, SvgRenderer,
};

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    // Logs go to the browser console
    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

fn to_js(error: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{}", error))
}

fn parse_set(set: &DescriptorSet, base: &str) -> anyhow::Result<ClassGraphDatabase> {
    let parser = if base.is_empty() {
        ClassGraphParser::new()
    } else {
        ClassGraphParser::with_base_str(base)?
    };
    let mut database = ClassGraphDatabase::new();
    parser.parse(set, &mut database)?;
    Ok(database)
}

/// Render a class graph to SVG
///
/// # Arguments
/// * `classes`, `indent`, `before`, `after` - The four descriptor strings
/// * `arrowdir` - `"up"`, `"down"` or anything else for both
/// * `base` - Base document URL; empty for none
///
/// # Returns
/// * The SVG document
/// * Throws a JavaScript error if the descriptor set is malformed
#[wasm_bindgen]
pub fn render_class_graph(
    classes: &str,
    indent: &str,
    before: &str,
    after: &str,
    arrowdir: &str,
    base: &str,
) -> Result<String, JsValue> {
    let set = DescriptorSet::new(classes, indent, before, after);
    let database = parse_set(&set, base).map_err(to_js)?;
    let config = RenderConfig::new(ArrowDirection::from_param(arrowdir));
    SvgRenderer::with_config(config).render(&database).map_err(to_js)
}

/// Render the class graph embedded in an HTML fragment
#[wasm_bindgen]
pub fn render_markup(markup: &str, base: &str) -> Result<String, JsValue> {
    let base = if base.is_empty() { None } else { Some(base) };
    crate::render_markup(markup, base).map_err(to_js)
}

/// Lay out a class graph and return the geometry as JSON
///
/// # Returns
/// * JSON string with fields: width, height, nodes, error
#[wasm_bindgen]
pub fn layout_json(classes: &str, indent: &str, before: &str, after: &str) -> String {
    let set = DescriptorSet::new(classes, indent, before, after);
    let result = parse_set(&set, "").and_then(|database| {
        let layout = ClassGraphLayoutAlgorithm::new().layout(&database)?;
        Ok((database, layout))
    });

    match result {
        Ok((database, layout)) => {
            let nodes: Vec<_> = database
                .nodes()
                .zip(&layout.nodes)
                .map(|(node, placed)| {
                    serde_json::json!({
                        "label": node.label,
                        "x": placed.position.x,
                        "y": placed.position.y,
                        "width": placed.position.width,
                        "height": placed.position.height,
                        "grows_left": placed.grows_left,
                    })
                })
                .collect();
            serde_json::json!({
                "width": layout.width,
                "height": layout.height,
                "nodes": nodes,
                "error": null
            })
            .to_string()
        }
        Err(e) => serde_json::json!({
            "width": 0,
            "height": 0,
            "nodes": [],
            "error": format!("{}", e)
        })
        .to_string(),
    }
}
