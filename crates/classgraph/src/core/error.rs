//! Core error types for diagram processing
//!
//! This module defines the error types used throughout the class graph pipeline.
//! Recoverable per-entry problems are not errors; they are reported as
//! diagnostics by the parser and degrade the affected node instead.

use thiserror::Error;

/// Core error types for diagram processing
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Malformed descriptor set: {message}")]
    MalformedDescriptorSet { message: String },

    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Markup error: {message} at offset {offset}")]
    MarkupError { message: String, offset: usize },

    #[error("Layout error: {message}")]
    LayoutError { message: String },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("Navigation error: {message}")]
    NavigationError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new malformed descriptor set error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDescriptorSet {
            message: message.into(),
        }
    }

    /// Create a new stream cardinality error
    pub fn stream_mismatch(stream: &str, expected: usize, found: usize) -> Self {
        Self::malformed(format!(
            "'{}' has {} tokens, expected {}",
            stream, found, expected
        ))
    }

    /// Create a new markup error
    pub fn markup_error(message: impl Into<String>, offset: usize) -> Self {
        Self::MarkupError {
            message: message.into(),
            offset,
        }
    }

    /// Create a new layout error
    pub fn layout_error(message: impl Into<String>) -> Self {
        Self::LayoutError {
            message: message.into(),
        }
    }

    /// Create a new render error
    pub fn render_error(message: impl Into<String>) -> Self {
        Self::RenderError {
            message: message.into(),
        }
    }

    /// Create a new navigation error
    pub fn navigation_error(message: impl Into<String>) -> Self {
        Self::NavigationError {
            message: message.into(),
        }
    }

    /// Returns true if the error was caused by the descriptor strings themselves
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            DiagramError::MalformedDescriptorSet { .. } | DiagramError::MarkupError { .. }
        )
    }
}
