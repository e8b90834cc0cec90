//! Embeddable class graph panel
//!
//! Coordinates the pipeline for one diagram:
//! Parser → Database → Layout (on every resize) → Paint / Click
//!
//! The panel owns the database, the render configuration and the latest
//! layout. Paint and click always read that layout; `resize` replaces it.

use anyhow::Result;
use tracing::{debug, info, span, Level};
use url::Url;

use super::database::ClassGraphDatabase;
use super::layout::{ClassGraphLayout, ClassGraphLayoutAlgorithm};
use super::markup::AppletParams;
use super::navigator::{Activation, ClickNavigator, Navigator};
use super::parser::{ClassGraphParser, DescriptorSet, ParseReport};
use super::renderer::ClassGraphRenderer;
use crate::core::{scene_to_svg, LayoutAlgorithm, Parser, Point, RenderConfig, Scene};

/// One interactive class graph
#[derive(Debug, Clone)]
pub struct ClassGraphPanel {
    database: ClassGraphDatabase,
    config: RenderConfig,
    layout: ClassGraphLayout,
    viewport: (i32, i32),
    report: ParseReport,
}

impl ClassGraphPanel {
    /// Panel over already-parsed nodes
    pub fn new(database: ClassGraphDatabase, config: RenderConfig) -> Result<Self> {
        let layout = ClassGraphLayoutAlgorithm::with_config(config.clone()).layout(&database)?;
        let viewport = (layout.width, layout.height);
        Ok(Self {
            database,
            config,
            layout,
            viewport,
            report: ParseReport::default(),
        })
    }

    /// Parse a descriptor set and lay it out
    pub fn from_descriptors(
        set: &DescriptorSet,
        base: Option<Url>,
        config: RenderConfig,
    ) -> Result<Self> {
        let init_span = span!(Level::INFO, "panel_init", classes_len = set.classes.len());
        let _enter = init_span.enter();

        let parser = match base {
            Some(base) => ClassGraphParser::with_base(base),
            None => ClassGraphParser::new(),
        };
        let mut database = ClassGraphDatabase::new();
        let report = parser.parse(set, &mut database)?;

        let mut panel = Self::new(database, config)?;
        panel.report = report;
        info!(
            width = panel.layout.width,
            height = panel.layout.height,
            "Panel initialized"
        );
        Ok(panel)
    }

    /// Build a panel from applet parameters; `arrowdir` overrides the
    /// configured arrow direction
    pub fn from_params(params: &AppletParams, base: Option<Url>, config: RenderConfig) -> Result<Self> {
        let config = config.with_arrow_direction(params.arrow_direction());
        Self::from_descriptors(&params.descriptor_set(), base, config)
    }

    pub fn database(&self) -> &ClassGraphDatabase {
        &self.database
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn layout(&self) -> &ClassGraphLayout {
        &self.layout
    }

    /// Diagnostics collected while parsing
    pub fn report(&self) -> &ParseReport {
        &self.report
    }

    pub fn viewport(&self) -> (i32, i32) {
        self.viewport
    }

    /// Size of the diagram's bounding box
    pub fn preferred_size(&self) -> (i32, i32) {
        (self.layout.width, self.layout.height)
    }

    /// Record a new viewport and recompute the layout
    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        debug!(width, height, "Panel resized");
        self.viewport = (width, height);
        self.relayout()
    }

    /// Replace the configuration and recompute the layout
    pub fn set_config(&mut self, config: RenderConfig) -> Result<()> {
        self.config = config;
        self.relayout()
    }

    fn relayout(&mut self) -> Result<()> {
        self.layout = ClassGraphLayoutAlgorithm::with_config(self.config.clone()).layout(&self.database)?;
        Ok(())
    }

    /// Paint pass over the latest layout
    pub fn paint(&self) -> Result<Scene> {
        ClassGraphRenderer::with_config(self.config.clone()).paint(&self.database, &self.layout)
    }

    pub fn to_svg(&self) -> Result<String> {
        Ok(scene_to_svg(&self.paint()?, &self.config))
    }

    /// Dispatch a click at a panel coordinate
    pub fn click<N: Navigator + ?Sized>(&self, point: Point, host: &mut N) -> Activation {
        ClickNavigator::new().click(&self.database, &self.layout, point, host)
    }
}
