//! Class graph database
//!
//! Stores the ordered node records of one class-inheritance diagram.

use anyhow::Result;
use url::Url;

use crate::core::{Database, RenderConfig};

/// What a node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A documented class (tag `C`)
    Class,
    /// A documented interface (tag `I`)
    Interface,
    /// A base class without a documentation entry (tag `M`)
    External,
}

impl NodeKind {
    /// Only `C` means class; `M` marks an undocumented entry; everything else
    /// is read as an interface.
    pub fn from_tag(tag: char) -> Self {
        match tag {
            'C' => NodeKind::Class,
            'M' => NodeKind::External,
            _ => NodeKind::Interface,
        }
    }

    pub fn tag(self) -> char {
        match self {
            NodeKind::Class => 'C',
            NodeKind::Interface => 'I',
            NodeKind::External => 'M',
        }
    }
}

/// Inheritance access carried by the marker character of a connector pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inheritance {
    Public,    // _
    Protected, // -
    Private,   // .
}

impl Inheritance {
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            '_' => Some(Inheritance::Public),
            '-' => Some(Inheritance::Protected),
            '.' => Some(Inheritance::Private),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Inheritance::Public => '_',
            Inheritance::Protected => '-',
            Inheritance::Private => '.',
        }
    }
}

/// One class or interface row of the diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescriptor {
    pub label: String,
    pub document_url: Option<Url>,
    pub indent: u32,
    pub kind: NodeKind,
    before_code: String,
    after_code: String,
}

impl NodeDescriptor {
    pub fn new(label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            label: label.into(),
            document_url: None,
            indent: 0,
            kind,
            before_code: String::new(),
            after_code: String::new(),
        }
    }

    pub fn class(label: impl Into<String>) -> Self {
        Self::new(label, NodeKind::Class)
    }

    pub fn interface(label: impl Into<String>) -> Self {
        Self::new(label, NodeKind::Interface)
    }

    pub fn with_url(mut self, url: Url) -> Self {
        self.document_url = Some(url);
        self
    }

    pub fn with_indent(mut self, indent: u32) -> Self {
        self.indent = indent;
        self
    }

    /// Set the connector codes drawn left of the box and right of it
    pub fn with_codes(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before_code = before.into();
        self.after_code = after.into();
        self
    }

    pub fn before_code(&self) -> &str {
        &self.before_code
    }

    pub fn after_code(&self) -> &str {
        &self.after_code
    }

    pub fn is_interface(&self) -> bool {
        self.kind == NodeKind::Interface
    }

    pub fn is_linked(&self) -> bool {
        self.document_url.is_some()
    }

    /// A node with no connector before it hangs off the left column
    pub fn grows_left(&self) -> bool {
        self.before_code.chars().count() < 2
    }

    /// Connector cells reserved by this node's own codes
    pub fn span(&self) -> i32 {
        ((self.before_code.chars().count() + self.after_code.chars().count()) / 2) as i32
    }

    /// The node the diagram is centred on draws no connectors of its own
    pub fn is_focus(&self) -> bool {
        self.span() == 0
    }

    /// Row-height units reserved for the box itself, at least two
    pub fn column_weight(&self, config: &RenderConfig) -> i32 {
        let (width, _) = config.metrics.measure(&self.label);
        column_weight(width, config.row_height)
    }
}

/// `max(2, ceil(width / row_height))`
pub fn column_weight(width: i32, row_height: i32) -> i32 {
    let row_height = row_height.max(1);
    let units = (width.max(0) + row_height - 1) / row_height;
    units.max(2)
}

/// Class graph database
#[derive(Debug, Clone, Default)]
pub struct ClassGraphDatabase {
    nodes: Vec<NodeDescriptor>,
}

impl ClassGraphDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: Vec<NodeDescriptor>) -> Self {
        Self { nodes }
    }

    pub fn as_slice(&self) -> &[NodeDescriptor] {
        &self.nodes
    }

    /// Index of the first node with the given label
    pub fn find(&self, label: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.label == label)
    }
}

impl Database for ClassGraphDatabase {
    type Node = NodeDescriptor;

    fn add_node(&mut self, node: NodeDescriptor) -> Result<()> {
        self.nodes.push(node);
        Ok(())
    }

    fn get_node(&self, index: usize) -> Option<&NodeDescriptor> {
        self.nodes.get(index)
    }

    fn nodes(&self) -> impl Iterator<Item = &NodeDescriptor> {
        self.nodes.iter()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
