//! Core parser trait for diagram input
//!
//! A parser turns host-supplied input into structured data stored in a
//! database, and reports anything it had to degrade along the way.

use anyhow::Result;

use super::Database;

/// Core trait for diagram parsers
pub trait Parser<D: Database>: Send + Sync {
    /// The input this parser consumes
    type Input: ?Sized;

    /// What the parser reports besides the populated database
    type Report;

    /// Parse input into the provided database
    fn parse(&self, input: &Self::Input, database: &mut D) -> Result<Self::Report>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;
}
