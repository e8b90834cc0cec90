//! Descriptor string parser
//!
//! Turns the four parallel comma-separated parameter strings into node records.
//!
//! Wire format (as written by DOC++):
//!
//! ```text
//! classes = "CShape,Mshape.html,CCircle,Mcircle.html"
//! before  = "M,Mr_"
//! after   = "M,M"
//! indent  = "0,1"
//! ```
//!
//! `classes` alternates `<kind tag><name>` and `<file>` tokens. Every `before`
//! and `after` token starts with one placeholder character so that empty codes
//! survive tokenization; it is stripped. File tokens carry the same `M`
//! placeholder, which is stripped when present.

use std::fmt;

use anyhow::Result;
use tracing::{debug, info, span, trace, warn, Level};
use url::Url;

use super::database::{ClassGraphDatabase, NodeDescriptor, NodeKind};
use crate::core::{Database, DiagramError, Parser};

/// The four raw parameter strings describing one diagram
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorSet {
    pub classes: String,
    pub indent: String,
    pub before: String,
    pub after: String,
}

impl DescriptorSet {
    pub fn new(
        classes: impl Into<String>,
        indent: impl Into<String>,
        before: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        Self {
            classes: classes.into(),
            indent: indent.into(),
            before: before.into(),
            after: after.into(),
        }
    }
}

/// A per-entry problem that was degraded instead of failing the parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The indent token was not a non-negative integer; 0 was used
    InvalidIndent { row: usize, token: String },
    /// The file reference could not be resolved; the node is unlinked
    InvalidUrl {
        row: usize,
        reference: String,
        reason: String,
    },
}

impl Diagnostic {
    pub fn row(&self) -> usize {
        match self {
            Diagnostic::InvalidIndent { row, .. } | Diagnostic::InvalidUrl { row, .. } => *row,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidIndent { row, token } => {
                write!(f, "row {}: invalid indent '{}', using 0", row, token)
            }
            Diagnostic::InvalidUrl {
                row,
                reference,
                reason,
            } => write!(
                f,
                "row {}: cannot resolve '{}' ({}), node left unlinked",
                row, reference, reason
            ),
        }
    }
}

/// Everything the parser degraded while reading a descriptor set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Split a parameter on commas, dropping empty tokens
fn tokens(stream: &str) -> Vec<&str> {
    stream.split(',').filter(|t| !t.is_empty()).collect()
}

/// Drop the leading placeholder character of a code token
fn strip_placeholder(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next();
    chars.as_str()
}

/// Descriptor string parser
///
/// File references are resolved against the base URL; without a base only
/// absolute references produce links.
#[derive(Debug, Clone, Default)]
pub struct ClassGraphParser {
    base: Option<Url>,
}

impl ClassGraphParser {
    /// Parser without a base document location
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: Url) -> Self {
        Self { base: Some(base) }
    }

    /// Parser whose base location is given as a string
    pub fn with_base_str(base: &str) -> Result<Self> {
        let url = Url::parse(base).map_err(|source| DiagramError::InvalidBaseUrl {
            url: base.to_string(),
            source,
        })?;
        Ok(Self::with_base(url))
    }

    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    fn resolve(&self, reference: &str) -> Result<Url, url::ParseError> {
        match &self.base {
            Some(base) => base.join(reference),
            None => Url::parse(reference),
        }
    }

    /// Check token counts across the four streams before reading any entry
    fn validate<'a>(
        &self,
        input: &'a DescriptorSet,
    ) -> Result<(Vec<&'a str>, Vec<&'a str>, Vec<&'a str>, Vec<&'a str>)> {
        let classes = tokens(&input.classes);
        let indent = tokens(&input.indent);
        let before = tokens(&input.before);
        let after = tokens(&input.after);

        if classes.len() % 2 != 0 {
            return Err(DiagramError::malformed(format!(
                "'classes' has {} tokens, expected name/file pairs",
                classes.len()
            ))
            .into());
        }

        let rows = classes.len() / 2;
        for (stream, found) in [
            ("indent", indent.len()),
            ("before", before.len()),
            ("after", after.len()),
        ] {
            if found != rows {
                return Err(DiagramError::stream_mismatch(stream, rows, found).into());
            }
        }

        Ok((classes, indent, before, after))
    }
}

impl Parser<ClassGraphDatabase> for ClassGraphParser {
    type Input = DescriptorSet;
    type Report = ParseReport;

    fn parse(&self, input: &DescriptorSet, database: &mut ClassGraphDatabase) -> Result<ParseReport> {
        let parse_span = span!(
            Level::INFO,
            "parse_classgraph",
            classes_len = input.classes.len()
        );
        let _enter = parse_span.enter();

        let (classes, indent, before, after) = self.validate(input)?;
        trace!(rows = classes.len() / 2, "Descriptor streams validated");

        let mut report = ParseReport::default();
        for (row, pair) in classes.chunks_exact(2).enumerate() {
            let entry = pair[0];
            let mut chars = entry.chars();
            let kind = chars.next().map(NodeKind::from_tag).unwrap_or(NodeKind::Interface);
            let label = chars.as_str();
            if label.is_empty() {
                return Err(DiagramError::malformed(format!(
                    "row {}: class entry '{}' has no name",
                    row, entry
                ))
                .into());
            }

            let file = pair[1].strip_prefix('M').unwrap_or(pair[1]);
            let document_url = if file.is_empty() {
                None
            } else {
                match self.resolve(file) {
                    Ok(url) => Some(url),
                    Err(e) => {
                        warn!(row, reference = file, error = %e, "Unresolvable file reference");
                        report.diagnostics.push(Diagnostic::InvalidUrl {
                            row,
                            reference: file.to_string(),
                            reason: e.to_string(),
                        });
                        None
                    }
                }
            };

            let indent_token = indent[row];
            let indent_value = match indent_token.trim().parse::<u32>() {
                Ok(value) => value,
                Err(_) => {
                    warn!(row, token = indent_token, "Invalid indent, using 0");
                    report.diagnostics.push(Diagnostic::InvalidIndent {
                        row,
                        token: indent_token.to_string(),
                    });
                    0
                }
            };

            let mut node = NodeDescriptor::new(label, kind)
                .with_indent(indent_value)
                .with_codes(strip_placeholder(before[row]), strip_placeholder(after[row]));
            node.document_url = document_url;

            debug!(
                row,
                label = %node.label,
                kind = ?node.kind,
                grows_left = node.grows_left(),
                linked = node.is_linked(),
                "Parsed node"
            );
            database.add_node(node)?;
        }

        info!(
            nodes = database.node_count(),
            degraded = report.diagnostics.len(),
            "Parsing completed"
        );
        Ok(report)
    }

    fn name(&self) -> &'static str {
        "classgraph"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}
