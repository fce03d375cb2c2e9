use std::collections::HashSet;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;

use crate::error::Error;
use crate::style;

/// The uniform result every dialect produces.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, Error> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub style: NodeStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl Node {
    /// A node styled after its shape, with no position.
    pub fn new(id: impl Into<String>, label: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            node_type,
            style: style::shape_style(node_type),
            x: None,
            y: None,
            section: None,
            status: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Rect,
    Diamond,
    Round,
    Stadium,
    Rhombus,
    Circle,
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
}

impl NodeStyle {
    pub const fn new(fill: &'static str, stroke: &'static str) -> Self {
        Self { fill, stroke }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Done,
    Active,
    Crit,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub label: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
    #[serde(skip_serializing_if = "EdgeStyle::is_plain")]
    pub style: EdgeStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, edge_type: EdgeType) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: String::new(),
            edge_type,
            style: EdgeStyle::default(),
            y: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_style(mut self, style: EdgeStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    Solid,
    Dashed,
    Thick,
}

/// Arrowhead hints for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_arrow: Option<ArrowHead>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_arrow: Option<ArrowHead>,
}

impl EdgeStyle {
    pub fn end(head: ArrowHead) -> Self {
        Self {
            start_arrow: None,
            end_arrow: Some(head),
        }
    }

    pub fn start(head: ArrowHead) -> Self {
        Self {
            start_arrow: Some(head),
            end_arrow: None,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.start_arrow.is_none() && self.end_arrow.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ArrowHead {
    Triangle,
    Diamond,
    DiamondOpen,
    Cross,
    Open,
}

/// Per-parse accumulator: first-seen unique nodes and append-ordered edges.
///
/// Each parse owns its builder, so nothing is shared between calls.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: IndexMap<String, Node>,
    declared: HashSet<String>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Inserts `node` unless its id is already present. Returns whether it was new.
    pub fn add_node(&mut self, node: Node) -> bool {
        match self.nodes.entry(node.id.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(node);
                true
            }
        }
    }

    /// Records an explicit shape declaration. A node only referenced bare so
    /// far takes the declared label and shape in place; an already declared
    /// node keeps its first declaration.
    pub fn declare_node(&mut self, node: Node) {
        if !self.declared.insert(node.id.clone()) {
            return;
        }
        match self.nodes.entry(node.id.clone()) {
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                existing.label = node.label;
                existing.node_type = node.node_type;
                existing.style = node.style;
            }
            Entry::Vacant(slot) => {
                slot.insert(node);
            }
        }
    }

    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn finish(self) -> Graph {
        Graph {
            nodes: self.nodes.into_values().collect(),
            edges: self.edges,
        }
    }
}
