//! Command-line interface for the classgraph utility
//!
//! Renders DOC++ class-inheritance descriptors as SVG and inspects them.

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

use classgraph::core::logging::init_logging;
use classgraph::core::{LayoutAlgorithm, Parser as _, Point, Renderer as _};
use classgraph::plugins::classgraph::{
    decode, ClassGraphDatabase, ClassGraphLayout, ClassGraphLayoutAlgorithm, ClassGraphParser,
    ConnectorRenderer, DrawInstruction, ParseReport, SvgRenderer,
};
use classgraph::{AppletParams, ArrowDirection, DescriptorSet, RenderConfig};

/// Classgraph - Render DOC++ class-inheritance diagrams
#[derive(Parser)]
#[command(name = "classgraph")]
#[command(about = "Render DOC++ class-inheritance descriptors as clickable SVG diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Where the descriptor strings come from
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs {
    /// HTML page containing the applet `<param>` tags (use - for stdin)
    #[arg(short, long, conflicts_with = "classes")]
    pub markup: Option<PathBuf>,

    /// Class/file token pairs, e.g. "CShape,Mshape.html"
    #[arg(long)]
    pub classes: Option<String>,

    /// Connector codes drawn before each box
    #[arg(long, default_value = "")]
    pub before: String,

    /// Connector codes drawn after each box
    #[arg(long, default_value = "")]
    pub after: String,

    /// Indentation level per class
    #[arg(long, default_value = "")]
    pub indent: String,

    /// Base document URL file references are resolved against
    #[arg(long)]
    pub base: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a class graph as SVG
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file for the SVG document (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Which arrowheads to draw; defaults to the page's `arrowdir`
        #[arg(long, value_enum)]
        arrows: Option<ArrowChoice>,

        /// Row height in pixels
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(i32).range(1..=1000))]
        row_height: i32,
    },

    /// Print node positions and column extents
    Layout {
        #[command(flatten)]
        source: SourceArgs,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Check a descriptor set and report degraded entries
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Explain a connector code pair by pair
    Codes {
        /// Connector code, e.g. "||r_"
        code: String,

        /// Which arrowheads to draw
        #[arg(long, value_enum, default_value_t = ArrowChoice::Both)]
        arrows: ArrowChoice,
    },
}

/// Arrowhead selection
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ArrowChoice {
    /// Only arrows pointing left or up
    Up,
    /// Only arrows pointing right or down
    Down,
    /// All arrows
    Both,
}

impl From<ArrowChoice> for ArrowDirection {
    fn from(value: ArrowChoice) -> Self {
        match value {
            ArrowChoice::Up => ArrowDirection::Up,
            ArrowChoice::Down => ArrowDirection::Down,
            ArrowChoice::Both => ArrowDirection::Both,
        }
    }
}

#[derive(Serialize)]
struct LayoutReport {
    width: i32,
    height: i32,
    left_column_width: i32,
    right_column_width: i32,
    nodes: Vec<NodeReport>,
}

#[derive(Serialize)]
struct NodeReport {
    label: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    span: i32,
    column_weight: i32,
    grows_left: bool,
    url: Option<String>,
}

impl LayoutReport {
    fn new(database: &ClassGraphDatabase, layout: &ClassGraphLayout) -> Self {
        let nodes = database
            .as_slice()
            .iter()
            .zip(&layout.nodes)
            .map(|(node, placed)| NodeReport {
                label: node.label.clone(),
                x: placed.position.x,
                y: placed.position.y,
                width: placed.position.width,
                height: placed.position.height,
                span: placed.span,
                column_weight: placed.column_weight,
                grows_left: placed.grows_left,
                url: node.document_url.as_ref().map(|u| u.to_string()),
            })
            .collect();
        Self {
            width: layout.width,
            height: layout.height,
            left_column_width: layout.state.left_column_width,
            right_column_width: layout.state.right_column_width,
            nodes,
        }
    }
}

/// A loaded descriptor set plus the arrow direction its page asked for
struct Loaded {
    set: DescriptorSet,
    arrow_direction: ArrowDirection,
}

/// Main CLI application
#[derive(Default)]
pub struct ClassgraphApp;

impl ClassgraphApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var("CLASSGRAPH_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("CLASSGRAPH_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Classgraph v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render {
                source,
                output,
                arrows,
                row_height,
            } => self.render_command(&source, output, arrows, row_height, cli.verbose),
            Commands::Layout { source, json } => self.layout_command(&source, json, cli.verbose),
            Commands::Validate { source } => self.validate_command(&source, cli.verbose),
            Commands::Codes { code, arrows } => self.codes_command(&code, arrows),
        }
    }

    /// Handle the render command
    fn render_command(
        &self,
        source: &SourceArgs,
        output: Option<PathBuf>,
        arrows: Option<ArrowChoice>,
        row_height: i32,
        verbose: bool,
    ) -> Result<()> {
        let loaded = self.load(source)?;
        let direction = arrows.map(ArrowDirection::from).unwrap_or(loaded.arrow_direction);
        let config = RenderConfig::new(direction).with_row_height(row_height);

        let (database, report) = self.parse(&loaded.set, source.base.as_deref())?;
        self.print_diagnostics(&report, verbose);

        let svg = SvgRenderer::with_config(config).render(&database)?;
        if verbose {
            eprintln!("Rendered {} classes", database.as_slice().len());
        }
        self.write_output(output, &svg)
    }

    /// Handle the layout command
    fn layout_command(&self, source: &SourceArgs, json: bool, verbose: bool) -> Result<()> {
        let loaded = self.load(source)?;
        let (database, report) = self.parse(&loaded.set, source.base.as_deref())?;
        self.print_diagnostics(&report, verbose);

        let layout = ClassGraphLayoutAlgorithm::new().layout(&database)?;
        let summary = LayoutReport::new(&database, &layout);

        if json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!(
                "Extents: left {} / right {} units, {}x{} px",
                summary.left_column_width, summary.right_column_width, summary.width, summary.height
            );
            for node in &summary.nodes {
                println!(
                    "  {:<24} x={:<5} y={:<5} w={:<5} span={} {}",
                    node.label,
                    node.x,
                    node.y,
                    node.width,
                    node.span,
                    if node.grows_left { "left" } else { "right" }
                );
            }
        }
        Ok(())
    }

    /// Handle the validate command
    fn validate_command(&self, source: &SourceArgs, verbose: bool) -> Result<()> {
        let loaded = self.load(source)?;

        match self.parse(&loaded.set, source.base.as_deref()) {
            Ok((database, report)) => {
                if report.is_clean() {
                    println!("✓ Valid class graph ({} classes)", database.as_slice().len());
                } else {
                    println!(
                        "✓ Valid class graph ({} classes, {} degraded)",
                        database.as_slice().len(),
                        report.diagnostics.len()
                    );
                    self.print_diagnostics(&report, true);
                }
                if verbose {
                    eprintln!("Arrow direction: {}", loaded.arrow_direction);
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid class graph: {}", e);
                Err(e)
            }
        }
    }

    /// Handle the codes command
    fn codes_command(&self, code: &str, arrows: ArrowChoice) -> Result<()> {
        let config = RenderConfig::new(arrows.into());
        let renderer = ConnectorRenderer::new(
            config.row_height,
            config.metrics.node_height,
            config.arrow_direction,
        );

        let chars: Vec<char> = code.chars().collect();
        for (i, step) in decode(code).iter().enumerate() {
            let pair: String = chars[i * 2..i * 2 + 2].iter().collect();
            let origin = Point::new(i as i32 * config.row_height, 0);
            println!(
                "{:>2}: {:?} -> {}{}",
                i,
                pair,
                step.shape,
                step.inheritance
                    .map(|inheritance| format!(" ({:?})", inheritance).to_lowercase())
                    .unwrap_or_default()
            );
            for instruction in renderer.instructions(origin, &pair) {
                match instruction {
                    DrawInstruction::Segment { line, .. } => {
                        println!("      line  {} -> {}", line.from, line.to)
                    }
                    DrawInstruction::Arrow(arrow) => {
                        println!("      arrow {:?} at {}", arrow.heading, arrow.tip)
                    }
                }
            }
        }
        if chars.len() % 2 == 1 {
            println!("    trailing {:?} ignored", chars[chars.len() - 1]);
        }
        Ok(())
    }

    fn load(&self, source: &SourceArgs) -> Result<Loaded> {
        if let Some(path) = &source.markup {
            let content = self.read_input(Some(path.clone()))?;
            let params = AppletParams::from_markup(&content)?;
            debug!(params = params.len(), "Loaded applet markup");
            return Ok(Loaded {
                set: params.descriptor_set(),
                arrow_direction: params.arrow_direction(),
            });
        }

        let classes = source
            .classes
            .as_ref()
            .ok_or_else(|| anyhow!("Either --markup or --classes is required"))?;
        Ok(Loaded {
            set: DescriptorSet::new(
                classes.as_str(),
                source.indent.as_str(),
                source.before.as_str(),
                source.after.as_str(),
            ),
            arrow_direction: ArrowDirection::Both,
        })
    }

    fn parse(&self, set: &DescriptorSet, base: Option<&str>) -> Result<(ClassGraphDatabase, ParseReport)> {
        let parser = match base {
            Some(base) => ClassGraphParser::with_base_str(base)?,
            None => ClassGraphParser::new(),
        };
        let mut database = ClassGraphDatabase::new();
        let report = parser.parse(set, &mut database)?;
        Ok((database, report))
    }

    fn print_diagnostics(&self, report: &ParseReport, verbose: bool) {
        if !verbose {
            return;
        }
        for diagnostic in &report.diagnostics {
            eprintln!("  warning: {}", diagnostic);
        }
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let stdout_content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", stdout_content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}
