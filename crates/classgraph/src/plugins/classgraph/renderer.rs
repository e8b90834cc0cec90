//! Class graph renderers
//!
//! [`ClassGraphRenderer`] performs a paint pass into a [`Scene`];
//! [`SvgRenderer`] serializes that scene as SVG.

use anyhow::Result;
use tracing::{debug, span, Level};

use super::connector::{ConnectorRenderer, DrawInstruction};
use super::database::{ClassGraphDatabase, Inheritance, NodeDescriptor, NodeKind};
use super::layout::{ClassGraphLayout, ClassGraphLayoutAlgorithm};
use crate::core::{
    scene_to_svg, DiagramError, LabelStyle, LayoutAlgorithm, NodeBox, Point, RenderConfig, Renderer, Scene,
    StrokeStyle,
};

fn stroke_for(inheritance: Option<Inheritance>) -> StrokeStyle {
    match inheritance {
        Some(Inheritance::Protected) => StrokeStyle::Dashed,
        Some(Inheritance::Private) => StrokeStyle::Dotted,
        Some(Inheritance::Public) | None => StrokeStyle::Solid,
    }
}

/// Label style of a node: the focus class is bold and unlinked ones italic.
/// Everything that is not a documented class takes the accent color.
fn label_style(node: &NodeDescriptor) -> LabelStyle {
    let bold = node.is_focus();
    LabelStyle {
        bold,
        italic: !bold && !node.is_linked(),
        accent: node.kind != NodeKind::Class,
    }
}

/// Paints a laid-out class graph into a scene
#[derive(Debug, Clone, Default)]
pub struct ClassGraphRenderer {
    config: RenderConfig,
}

impl ClassGraphRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Paint with an existing layout; the layout must come from the same database
    pub fn paint(&self, database: &ClassGraphDatabase, layout: &ClassGraphLayout) -> Result<Scene> {
        let paint_span = span!(Level::DEBUG, "paint_classgraph", nodes = layout.nodes.len());
        let _enter = paint_span.enter();

        if layout.nodes.len() != database.as_slice().len() {
            return Err(DiagramError::render_error(format!(
                "layout has {} nodes but the database has {}",
                layout.nodes.len(),
                database.as_slice().len()
            ))
            .into());
        }

        let mut scene = Scene::new(layout.width, layout.height, self.config.background.clone());
        let row = layout.row_height;
        let connectors =
            ConnectorRenderer::new(row, layout.node_height, self.config.arrow_direction);
        let before_x = layout.state.right_growth_origin() * row;

        for (node, placed) in database.as_slice().iter().zip(&layout.nodes) {
            let y = placed.index as i32 * row;
            let mut instructions = connectors.instructions(Point::new(before_x, y), node.before_code());
            instructions.extend(
                connectors.instructions(Point::new(placed.position.right(), y), node.after_code()),
            );

            for instruction in instructions {
                match instruction {
                    DrawInstruction::Segment { line, inheritance } => {
                        scene.draw_line(line, stroke_for(inheritance));
                    }
                    DrawInstruction::Arrow(arrow) => {
                        for stroke in arrow.strokes() {
                            scene.draw_line(stroke, StrokeStyle::Solid);
                        }
                    }
                }
            }
        }

        // Boxes are painted over the connector lines
        for (node, placed) in database.as_slice().iter().zip(&layout.nodes) {
            scene.draw_node(NodeBox {
                index: placed.index,
                label: node.label.clone(),
                bounds: placed.position,
                style: label_style(node),
                href: node.document_url.as_ref().map(|url| url.to_string()),
            });
        }

        debug!(commands = scene.commands().len(), "Paint completed");
        Ok(scene)
    }
}

impl Renderer<ClassGraphDatabase> for ClassGraphRenderer {
    type Output = Scene;

    fn render(&self, database: &ClassGraphDatabase) -> Result<Scene> {
        let layout = ClassGraphLayoutAlgorithm::with_config(self.config.clone()).layout(database)?;
        self.paint(database, &layout)
    }

    fn name(&self) -> &'static str {
        "scene"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "draw-list"
    }
}

/// Renders a class graph as a standalone SVG document
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    inner: ClassGraphRenderer,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            inner: ClassGraphRenderer::with_config(config),
        }
    }
}

impl Renderer<ClassGraphDatabase> for SvgRenderer {
    type Output = String;

    fn render(&self, database: &ClassGraphDatabase) -> Result<String> {
        let scene = self.inner.render(database)?;
        Ok(scene_to_svg(&scene, self.inner.config()))
    }

    fn name(&self) -> &'static str {
        "svg"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "svg"
    }
}
