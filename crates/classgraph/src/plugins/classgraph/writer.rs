//! Descriptor set writer
//!
//! Serializes node records back into the four parameter strings, in the same
//! placeholder-prefixed form DOC++ emits. Reading the output with
//! [`ClassGraphParser`](super::parser::ClassGraphParser) and the same base
//! yields the original nodes.

use anyhow::Result;
use tracing::debug;
use url::Url;

use super::database::{ClassGraphDatabase, NodeDescriptor};
use super::parser::DescriptorSet;
use crate::core::DiagramError;

const PLACEHOLDER: char = 'M';

/// Writes node records as a [`DescriptorSet`]
#[derive(Debug, Clone, Default)]
pub struct DescriptorWriter {
    base: Option<Url>,
}

impl DescriptorWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write file references relative to `base` where possible
    pub fn with_base(base: Url) -> Self {
        Self { base: Some(base) }
    }

    fn file_reference(&self, url: &Url) -> String {
        self.base
            .as_ref()
            .and_then(|base| base.make_relative(url))
            .filter(|relative| !relative.is_empty())
            .unwrap_or_else(|| url.to_string())
    }

    fn check_token(row: usize, what: &str, value: &str) -> Result<()> {
        if value.contains(',') {
            return Err(DiagramError::malformed(format!(
                "row {}: {} '{}' contains a comma",
                row, what, value
            ))
            .into());
        }
        Ok(())
    }

    pub fn write(&self, nodes: &[NodeDescriptor]) -> Result<DescriptorSet> {
        let mut classes = Vec::with_capacity(nodes.len() * 2);
        let mut indent = Vec::with_capacity(nodes.len());
        let mut before = Vec::with_capacity(nodes.len());
        let mut after = Vec::with_capacity(nodes.len());

        for (row, node) in nodes.iter().enumerate() {
            if node.label.is_empty() {
                return Err(DiagramError::malformed(format!("row {}: empty label", row)).into());
            }
            Self::check_token(row, "label", &node.label)?;
            Self::check_token(row, "before code", node.before_code())?;
            Self::check_token(row, "after code", node.after_code())?;

            let file = node
                .document_url
                .as_ref()
                .map(|url| self.file_reference(url))
                .unwrap_or_default();
            Self::check_token(row, "file reference", &file)?;

            classes.push(format!("{}{}", node.kind.tag(), node.label));
            classes.push(format!("{}{}", PLACEHOLDER, file));
            indent.push(node.indent.to_string());
            before.push(format!("{}{}", PLACEHOLDER, node.before_code()));
            after.push(format!("{}{}", PLACEHOLDER, node.after_code()));
        }

        debug!(rows = nodes.len(), "Wrote descriptor set");
        Ok(DescriptorSet::new(
            classes.join(","),
            indent.join(","),
            before.join(","),
            after.join(","),
        ))
    }

    pub fn write_database(&self, database: &ClassGraphDatabase) -> Result<DescriptorSet> {
        self.write(database.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Parser;
    use crate::plugins::classgraph::parser::ClassGraphParser;

    fn base() -> Url {
        Url::parse("https://docs.example/api/").unwrap()
    }

    #[test]
    fn test_writes_generated_form() {
        let nodes = vec![
            NodeDescriptor::class("Shape").with_url(base().join("shape.html").unwrap()),
            NodeDescriptor::class("Circle")
                .with_indent(1)
                .with_codes("r_", "")
                .with_url(base().join("circle.html").unwrap()),
        ];
        let set = DescriptorWriter::with_base(base()).write(&nodes).unwrap();

        assert_eq!(set.classes, "CShape,Mshape.html,CCircle,Mcircle.html");
        assert_eq!(set.before, "M,Mr_");
        assert_eq!(set.after, "M,M");
        assert_eq!(set.indent, "0,1");
    }

    #[test]
    fn test_unlinked_and_foreign_urls() {
        let nodes = vec![
            NodeDescriptor::new("Ext", crate::plugins::classgraph::NodeKind::External),
            NodeDescriptor::interface("Remote")
                .with_url(Url::parse("https://elsewhere.example/r.html").unwrap()),
        ];
        let set = DescriptorWriter::with_base(base()).write(&nodes).unwrap();
        assert_eq!(set.classes, "MExt,M,IRemote,Mhttps://elsewhere.example/r.html");
    }

    #[test]
    fn test_written_set_reads_back() {
        let nodes = vec![
            NodeDescriptor::class("Base")
                .with_codes("", "d-")
                .with_url(base().join("base.html").unwrap()),
            NodeDescriptor::class("Main").with_url(base().join("Main.html").unwrap()),
            NodeDescriptor::interface("Derived").with_indent(2).with_codes("r.", ""),
        ];
        let set = DescriptorWriter::with_base(base()).write(&nodes).unwrap();

        let mut db = ClassGraphDatabase::new();
        let report = ClassGraphParser::with_base(base()).parse(&set, &mut db).unwrap();
        assert!(report.is_clean());
        assert_eq!(db.as_slice(), nodes.as_slice());
    }

    #[test]
    fn test_comma_in_label_rejected() {
        let err = DescriptorWriter::new()
            .write(&[NodeDescriptor::class("Map<K,V>")])
            .unwrap_err();
        assert!(err.to_string().contains("comma"));
    }

    #[test]
    fn test_empty_label_rejected() {
        assert!(DescriptorWriter::new().write(&[NodeDescriptor::class("")]).is_err());
    }
}
