//! Core layout trait for diagram positioning
//!
//! A layout algorithm assigns screen positions to the elements of a database.
//! Layouts are recomputed on every resize, so implementations must be pure
//! functions of the database and their configuration.

use anyhow::Result;

use super::Database;

/// Core trait for layout algorithms
pub trait LayoutAlgorithm<D: Database>: Send + Sync {
    /// The output type of this layout algorithm
    type Output;

    /// Arrange elements in the database using this layout algorithm
    fn layout(&self, database: &D) -> Result<Self::Output>;

    /// Get the name of this layout algorithm
    fn name(&self) -> &'static str;

    /// Get the version of this layout algorithm
    fn version(&self) -> &'static str;
}
