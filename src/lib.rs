pub mod class_parser;
pub mod detect;
pub mod error;
pub mod flow_parser;
pub mod gantt_parser;
pub mod graph;
pub mod lines;
pub mod sequence_parser;
pub mod state_parser;
pub mod style;

pub use detect::{Dialect, detect};
pub use error::Error;
pub use graph::{ArrowHead, Edge, EdgeStyle, EdgeType, Graph, Node, NodeStyle, NodeType, TaskStatus};

/// Converts diagram text into a node/edge graph. The dialect is detected from
/// keywords in the text; anything unrecognized is read as a flowchart.
///
/// Never fails: lines that match nothing are skipped.
pub fn parse(input: &str) -> Graph {
    parse_as(input, detect(input))
}

/// Like [`parse`] but with the dialect chosen by the caller.
pub fn parse_as(input: &str, dialect: Dialect) -> Graph {
    let graph = match dialect {
        Dialect::Flow => flow_parser::parse_flow(input),
        Dialect::Sequence => sequence_parser::parse_sequence(input),
        Dialect::Gantt => gantt_parser::parse_gantt(input),
        Dialect::Class => class_parser::parse_class(input),
        Dialect::State => state_parser::parse_state(input),
    };
    tracing::debug!(
        %dialect,
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "parsed diagram"
    );
    graph
}
