// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::ids::NodeId;

/// Whether edges are drawn as arrows (`digraph`) or plain lines (`graph`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    Directed,
    Undirected,
}

/// A labelled graph ready to be serialized for an external renderer.
///
/// Nodes are keyed by id. Declaring a node twice merges attributes the way Graphviz treats
/// repeated node statements: attributes set by the later declaration win, the others keep
/// their earlier values. Edges keep insertion order and duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDescription {
    kind: GraphKind,
    comment: Option<String>,
    nodes: BTreeMap<NodeId, GraphNode>,
    edges: Vec<GraphEdge>,
}

impl GraphDescription {
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            comment: None,
            nodes: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment<T: Into<String>>(&mut self, comment: Option<T>) {
        self.comment = comment.map(Into::into);
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, GraphNode> {
        &self.nodes
    }

    pub fn node(&self, node_id: &str) -> Option<&GraphNode> {
        self.nodes.get(node_id)
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn declare_node(&mut self, node_id: NodeId, node: GraphNode) {
        match self.nodes.get_mut(&node_id) {
            Some(existing) => existing.merge(node),
            None => {
                self.nodes.insert(node_id, node);
            }
        }
    }

    /// Adds an edge, creating default nodes for endpoints that were never declared.
    pub fn add_edge(&mut self, edge: GraphEdge) {
        for endpoint in [edge.from(), edge.to()] {
            if !self.nodes.contains_key(endpoint) {
                self.nodes
                    .insert(endpoint.clone(), GraphNode::new(endpoint.as_str()));
            }
        }
        self.edges.push(edge);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    label: String,
    shape: Option<String>,
    color: Option<String>,
}

impl GraphNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            shape: None,
            color: None,
        }
    }

    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn shape(&self) -> Option<&str> {
        self.shape.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    fn merge(&mut self, later: GraphNode) {
        self.label = later.label;
        if later.shape.is_some() {
            self.shape = later.shape;
        }
        if later.color.is_some() {
            self.color = later.color;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    from: NodeId,
    to: NodeId,
    label: Option<String>,
    color: Option<String>,
    style: Option<String>,
}

impl GraphEdge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self {
            from,
            to,
            label: None,
            color: None,
            style: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn from(&self) -> &NodeId {
        &self.from
    }

    pub fn to(&self) -> &NodeId {
        &self.to
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }
}
