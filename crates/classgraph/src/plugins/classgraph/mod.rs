//! Class graph diagram plugin
//!
//! Draws the inheritance diagram DOC++ attaches to each class page: one
//! column of class boxes, base classes above and left of the focus class,
//! derived classes below and right, joined by connector glyphs.

mod connector;
mod database;
mod layout;
mod markup;
mod navigator;
mod panel;
mod parser;
mod renderer;
mod writer;

pub use connector::{
    decode, ArrowHead, ConnectorRenderer, ConnectorShape, ConnectorStep, DrawInstruction, Heading,
};
pub use database::{column_weight, ClassGraphDatabase, Inheritance, NodeDescriptor, NodeKind};
pub use layout::{
    ClassGraphLayout, ClassGraphLayoutAlgorithm, LayoutState, PositionedNode, ScreenPosition,
};
pub use markup::AppletParams;
pub use navigator::{Activation, ClickNavigator, Navigator};
pub use panel::ClassGraphPanel;
pub use parser::{ClassGraphParser, DescriptorSet, Diagnostic, ParseReport};
pub use renderer::{ClassGraphRenderer, SvgRenderer};
pub use writer::DescriptorWriter;
