use winnow::prelude::*;
use winnow::ascii::{space0, space1};
use winnow::combinator::{alt, delimited, opt, preceded};
use winnow::token::take_while;

use crate::graph::*;
use crate::lines::{content_lines, find_first, identifier, trailing_text};

/// The `[*]` pseudostate.
pub const PSEUDOSTATE: &str = "[*]";
/// Node id of `[*]` used as a transition source.
pub const START_ID: &str = "[*]_start";
/// Node id of `[*]` used as a transition target.
pub const END_ID: &str = "[*]_end";

pub fn parse_state(input: &str) -> Graph {
    let mut builder = GraphBuilder::new();

    for line in content_lines(input) {
        if line.contains("-->") {
            match find_first(line, transition) {
                Some(t) => {
                    let source = add_endpoint(&mut builder, t.source, Side::Source);
                    let target = add_endpoint(&mut builder, t.target, Side::Target);
                    let label = t.label.unwrap_or_default();
                    builder.push_edge(Edge::new(source, target, EdgeType::Solid).with_label(label));
                }
                None => tracing::trace!(line, "skipping unrecognized transition"),
            }
        } else if line.starts_with("state") {
            let mut rest = line;
            if let Ok(decl) = state_decl(&mut rest) {
                let label = decl.description.unwrap_or_else(|| decl.id.clone());
                builder.add_node(Node::new(decl.id, label, NodeType::Circle));
            }
        }
    }

    builder.finish()
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Source,
    Target,
}

/// Creates the endpoint on first reference and returns its node id.
fn add_endpoint(builder: &mut GraphBuilder, state: StateRef, side: Side) -> String {
    let node = match (state, side) {
        (StateRef::Pseudo, Side::Source) => Node::new(START_ID, PSEUDOSTATE, NodeType::Start),
        (StateRef::Pseudo, Side::Target) => Node::new(END_ID, PSEUDOSTATE, NodeType::End),
        (StateRef::Named(name), _) => Node::new(name.clone(), name, NodeType::Circle),
    };
    let id = node.id.clone();
    builder.add_node(node);
    id
}

#[derive(Debug, Clone, PartialEq)]
enum StateRef {
    Pseudo,
    Named(String),
}

#[derive(Debug, PartialEq)]
struct Transition {
    source: StateRef,
    target: StateRef,
    label: Option<String>,
}

#[derive(Debug, PartialEq)]
struct StateDecl {
    id: String,
    description: Option<String>,
}

fn state_ref(input: &mut &str) -> winnow::Result<StateRef> {
    alt((
        PSEUDOSTATE.value(StateRef::Pseudo),
        identifier.map(|id: &str| StateRef::Named(id.to_string())),
    ))
    .parse_next(input)
}

fn transition(input: &mut &str) -> winnow::Result<Transition> {
    let source = state_ref.parse_next(input)?;
    space0.parse_next(input)?;
    "-->".parse_next(input)?;
    space0.parse_next(input)?;
    let target = state_ref.parse_next(input)?;
    let label = opt(preceded((space0, ":"), trailing_text)).parse_next(input)?;

    Ok(Transition {
        source,
        target,
        label,
    })
}

/// `state Id` or `state "Description" as Id`.
fn state_decl(input: &mut &str) -> winnow::Result<StateDecl> {
    "state".parse_next(input)?;
    space1.parse_next(input)?;
    alt((described_state, plain_state)).parse_next(input)
}

fn plain_state(input: &mut &str) -> winnow::Result<StateDecl> {
    let id = identifier.parse_next(input)?;
    Ok(StateDecl {
        id: id.to_string(),
        description: None,
    })
}

fn described_state(input: &mut &str) -> winnow::Result<StateDecl> {
    let description = delimited('"', take_while(0.., |c: char| c != '"'), '"').parse_next(input)?;
    (space1, "as", space1).parse_next(input)?;
    let id = identifier.parse_next(input)?;
    Ok(StateDecl {
        id: id.to_string(),
        description: Some(description.trim().to_string()),
    })
}
