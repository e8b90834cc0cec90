//! Applet markup reader
//!
//! DOC++ embeds each class graph in its HTML pages as an `<APPLET>` block:
//!
//! ```html
//! <APPLET CODE="ClassGraph.class" WIDTH=600 HEIGHT=95>
//! <param name=classes value="CShape,Mshape.html,CCircle,Mcircle.html">
//! <param name=before value="M,Mr_">
//! <param name=after value="M,M">
//! <param name=indent value="0,1">
//! <param name=arrowdir value="down">
//! </APPLET>
//! ```
//!
//! This module pulls those parameters back out of a page so the diagram can be
//! rendered without the applet.

use anyhow::Result;
use chumsky::prelude::*;
use tracing::{debug, trace};

use super::parser::DescriptorSet;
use crate::core::chumsky_utils::{attribute_value, html_name, optional_whitespace, whitespace_required};
use crate::core::{ArrowDirection, DiagramError};

/// Parameters of one embedded class graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppletParams {
    params: Vec<(String, String)>,
}

impl AppletParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter; names are case-insensitive and the first value wins
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    fn insert(&mut self, name: &str, value: impl Into<String>) {
        let name = name.to_ascii_lowercase();
        if self.get(&name).is_none() {
            self.params.push((name, value.into()));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Read every `<param>` tag of a page
    pub fn from_markup(markup: &str) -> Result<Self> {
        let found = Self::document_parser()
            .parse(markup)
            .into_result()
            .map_err(|errors| DiagramError::markup_error(format!("{:?}", errors), 0))?;

        let mut params = Self::new();
        for (name, value) in found {
            trace!(name = %name, "Found param tag");
            params.insert(&name, value);
        }
        debug!(count = params.len(), "Read applet parameters");

        if params.get("classes").is_none() {
            return Err(DiagramError::markup_error("no 'classes' parameter found", markup.len()).into());
        }
        Ok(params)
    }

    /// The four descriptor streams; missing streams are empty
    pub fn descriptor_set(&self) -> DescriptorSet {
        DescriptorSet::new(
            self.get("classes").unwrap_or_default(),
            self.get("indent").unwrap_or_default(),
            self.get("before").unwrap_or_default(),
            self.get("after").unwrap_or_default(),
        )
    }

    pub fn arrow_direction(&self) -> ArrowDirection {
        self.get("arrowdir")
            .map(ArrowDirection::from_param)
            .unwrap_or_default()
    }

    /// One `<param>` tag; tags without a `name` attribute yield `None`
    fn param_tag<'src>() -> impl Parser<'src, &'src str, Option<(String, String)>> + Clone {
        let attribute = html_name()
            .then_ignore(optional_whitespace())
            .then_ignore(just('='))
            .then_ignore(optional_whitespace())
            .then(attribute_value());

        just('<')
            .ignore_then(html_name().filter(|name: &String| name == "param"))
            .ignore_then(
                whitespace_required()
                    .ignore_then(attribute)
                    .repeated()
                    .collect::<Vec<(String, String)>>(),
            )
            .then_ignore(optional_whitespace())
            .then_ignore(just('/').or_not())
            .then_ignore(just('>'))
            .map(|attributes| {
                let lookup = |key: &str| {
                    attributes
                        .iter()
                        .find(|(k, _)| k == key)
                        .map(|(_, v)| v.clone())
                };
                lookup("name").map(|name| (name, lookup("value").unwrap_or_default()))
            })
    }

    fn document_parser<'src>() -> impl Parser<'src, &'src str, Vec<(String, String)>> {
        Self::param_tag()
            .or(any().to(None))
            .repeated()
            .collect::<Vec<Option<(String, String)>>>()
            .map(|items| items.into_iter().flatten().collect::<Vec<_>>())
            .then_ignore(end())
    }
}
