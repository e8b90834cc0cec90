//! Core database trait for diagram data storage
//!
//! A database owns the parsed diagram model. Connections between class graph
//! nodes live in each node's connector codes, so the store is node-only.

use anyhow::Result;

/// Core trait for diagram databases
///
/// Nodes keep their insertion order; that order is the vertical order of the
/// diagram rows.
pub trait Database: Send + Sync {
    /// The node data type for this database
    type Node: Clone + Send + Sync;

    /// Append a node to the database
    fn add_node(&mut self, node: Self::Node) -> Result<()>;

    /// Get a node by row index
    fn get_node(&self, index: usize) -> Option<&Self::Node>;

    /// Iterate over all nodes in row order
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// Clear all data from the database
    fn clear(&mut self);

    /// Get the number of nodes
    fn node_count(&self) -> usize;

    /// Returns true if the database holds no nodes
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
