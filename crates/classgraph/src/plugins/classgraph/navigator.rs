//! Click navigation
//!
//! Activating a linked node asks the host to show its documentation page.
//! Navigation failures are reported as [`Activation::Degraded`] and logged;
//! they never reach the end user.

use anyhow::Result;
use tracing::{info, warn};
use url::Url;

use super::database::{ClassGraphDatabase, NodeDescriptor};
use super::layout::ClassGraphLayout;
use crate::core::{Database, Point};

/// Host environment able to open documents
pub trait Navigator {
    fn show_document(&mut self, url: &Url) -> Result<()>;
}

/// Outcome of activating a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The host accepted the navigation request
    Navigated(Url),
    /// The node is linked but the host could not navigate
    Degraded { url: Url, reason: String },
    /// No linked node was activated; the host input system should carry on
    NotHandled,
}

impl Activation {
    /// Whether the activation consumed the input event
    pub fn is_handled(&self) -> bool {
        !matches!(self, Activation::NotHandled)
    }

    pub fn url(&self) -> Option<&Url> {
        match self {
            Activation::Navigated(url) | Activation::Degraded { url, .. } => Some(url),
            Activation::NotHandled => None,
        }
    }
}

/// Dispatches node activations to a host navigator
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickNavigator;

impl ClickNavigator {
    pub fn new() -> Self {
        Self
    }

    /// Activate one node
    pub fn activate<N: Navigator + ?Sized>(&self, node: &NodeDescriptor, host: &mut N) -> Activation {
        let Some(url) = node.document_url.as_ref() else {
            return Activation::NotHandled;
        };

        match host.show_document(url) {
            Ok(()) => {
                info!(label = %node.label, url = %url, "Navigated");
                Activation::Navigated(url.clone())
            }
            Err(e) => {
                warn!(label = %node.label, url = %url, error = %e, "Navigation failed");
                Activation::Degraded {
                    url: url.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Index of the node whose box contains the point
    pub fn hit_test(&self, layout: &ClassGraphLayout, point: Point) -> Option<usize> {
        layout.node_at(point)
    }

    /// Hit-test a point and activate the node under it
    pub fn click<N: Navigator + ?Sized>(
        &self,
        database: &ClassGraphDatabase,
        layout: &ClassGraphLayout,
        point: Point,
        host: &mut N,
    ) -> Activation {
        self.hit_test(layout, point)
            .and_then(|index| database.get_node(index))
            .map_or(Activation::NotHandled, |node| self.activate(node, host))
    }
}
