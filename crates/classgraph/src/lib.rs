//! Classgraph - Render DOC++ class-inheritance diagrams
//!
//! A library for reading the compact descriptor strings DOC++ writes for each
//! class page and drawing them as a clickable inheritance diagram.
//!
//! # Quick Start
//!
//! ```rust
//! use classgraph::{render, DescriptorSet};
//!
//! let set = DescriptorSet::new(
//!     "CShape,Mshape.html,CCircle,Mcircle.html",
//!     "0,1",
//!     "M,Mr_",
//!     "M,M",
//! );
//! let svg = render(&set, Some("https://docs.example/api/")).unwrap();
//! assert!(svg.contains(r#"<a href="https://docs.example/api/circle.html">"#));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use classgraph::prelude::*;
//!
//! let set = DescriptorSet::new("CShape,Mshape.html,CCircle,Mcircle.html", "0,1", "M,Mr_", "M,M");
//!
//! // Parse into a database
//! let parser = ClassGraphParser::with_base_str("https://docs.example/").unwrap();
//! let mut database = ClassGraphDatabase::new();
//! let report = parser.parse(&set, &mut database).unwrap();
//! assert!(report.is_clean());
//! assert_eq!(database.node_count(), 2);
//!
//! // Lay out and paint
//! let layout = ClassGraphLayoutAlgorithm::new().layout(&database).unwrap();
//! let scene = ClassGraphRenderer::new().paint(&database, &layout).unwrap();
//! assert_eq!(scene.nodes().count(), 2);
//! ```

pub mod core;
pub mod plugins;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use core::*;
pub use plugins::classgraph::{AppletParams, ClassGraphDatabase, ClassGraphPanel, DescriptorSet};
pub use url::Url;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        ArrowDirection, Database, LayoutAlgorithm, Parser, Point, Rect, RenderConfig, Renderer,
        Scene, TextMetrics,
    };
    pub use crate::plugins::classgraph::{
        Activation, AppletParams, ClassGraphDatabase, ClassGraphLayoutAlgorithm, ClassGraphPanel,
        ClassGraphParser, ClassGraphRenderer, ClickNavigator, DescriptorSet, DescriptorWriter,
        Navigator, NodeDescriptor, NodeKind, SvgRenderer,
    };
}

fn parser_for(base: Option<&str>) -> anyhow::Result<plugins::classgraph::ClassGraphParser> {
    use crate::plugins::classgraph::ClassGraphParser;

    match base {
        Some(base) => ClassGraphParser::with_base_str(base),
        None => Ok(ClassGraphParser::new()),
    }
}

/// Parse a descriptor set into a database without rendering
///
/// File references are resolved against `base`; without one only absolute
/// references become links. Degraded entries are logged and otherwise
/// ignored; use [`ClassGraphParser`](plugins::classgraph::ClassGraphParser)
/// directly to inspect them.
///
/// # Example
/// ```rust
/// use classgraph::{parse, DescriptorSet};
/// use classgraph::prelude::Database;
///
/// let set = DescriptorSet::new("CA,M,CB,M", "0,1", "M,Mr_", "M,M");
/// let db = parse(&set, None).unwrap();
/// assert_eq!(db.node_count(), 2);
/// assert!(!db.get_node(1).unwrap().grows_left());
/// ```
pub fn parse(set: &DescriptorSet, base: Option<&str>) -> anyhow::Result<ClassGraphDatabase> {
    use crate::core::Parser as _;

    let mut database = ClassGraphDatabase::new();
    parser_for(base)?.parse(set, &mut database)?;
    Ok(database)
}

/// Render a descriptor set as SVG with the default configuration
///
/// # Arguments
/// * `set` - The four descriptor strings
/// * `base` - Base document URL file references are resolved against
///
/// # Returns
/// * `Ok(String)` - The SVG document
/// * `Err` - If the descriptor set is malformed or the base URL is invalid
pub fn render(set: &DescriptorSet, base: Option<&str>) -> anyhow::Result<String> {
    render_with_config(set, base, RenderConfig::default())
}

/// Render a descriptor set as SVG with a specific configuration
///
/// # Example
/// ```rust
/// use classgraph::{render_with_config, ArrowDirection, DescriptorSet, RenderConfig};
///
/// let set = DescriptorSet::new("CA,M", "0", "M", "M");
/// let config = RenderConfig::new(ArrowDirection::Up).with_row_height(40);
/// let svg = render_with_config(&set, None, config).unwrap();
/// assert!(svg.contains(">A</text>"));
/// ```
pub fn render_with_config(
    set: &DescriptorSet,
    base: Option<&str>,
    config: RenderConfig,
) -> anyhow::Result<String> {
    use crate::core::Renderer as _;
    use crate::plugins::classgraph::SvgRenderer;

    let database = parse(set, base)?;
    SvgRenderer::with_config(config).render(&database)
}

/// Render the class graph embedded in a generated HTML page
///
/// The page's `arrowdir` parameter selects the arrow direction.
///
/// # Example
/// ```rust
/// use classgraph::render_markup;
///
/// let page = r#"<param name=classes value="CA,Ma.html"><param name=before value="M">
/// <param name=after value="M"><param name=indent value="0">"#;
/// let svg = render_markup(page, Some("https://docs.example/")).unwrap();
/// assert!(svg.contains("https://docs.example/a.html"));
/// ```
pub fn render_markup(markup: &str, base: Option<&str>) -> anyhow::Result<String> {
    let params = AppletParams::from_markup(markup)?;
    let config = RenderConfig::new(params.arrow_direction());
    render_with_config(&params.descriptor_set(), base, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DescriptorSet {
        DescriptorSet::new(
            "CBase,Mbase.html,CShape,Mshape.html,IDrawable,M",
            "0,0,1",
            "M,M,Mr-",
            "Md_,M,M",
        )
    }

    #[test]
    fn test_parse_sample() {
        let db = parse(&sample(), Some("https://docs.example/")).unwrap();
        assert_eq!(db.node_count(), 3);
        assert!(db.get_node(2).unwrap().is_interface());
        assert!(!db.get_node(2).unwrap().is_linked());
    }

    #[test]
    fn test_parse_rejects_bad_base() {
        let err = parse(&sample(), Some("not a url")).unwrap_err();
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_render_sample() {
        let svg = render(&sample(), Some("https://docs.example/")).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">Drawable</text>"));
        assert!(svg.contains("https://docs.example/shape.html"));
    }

    #[test]
    fn test_render_malformed_set() {
        let set = DescriptorSet::new("CA,M,CB,M", "0", "M,M", "M,M");
        let err = render(&set, None).unwrap_err();
        let diagram = err.downcast_ref::<DiagramError>().unwrap();
        assert!(diagram.is_malformed_input());
    }

    #[test]
    fn test_render_markup_requires_classes() {
        assert!(render_markup("<html></html>", None).is_err());
    }
}
