use winnow::prelude::*;
use winnow::ascii::{space0, space1};
use winnow::combinator::{alt, opt};
use winnow::token::{take_until, take_while};

use crate::graph::*;
use crate::lines::{content_lines, find_first, identifier, pipe_label};

/// Substrings that mark a line as a possible connection.
const CONNECTORS: [&str; 6] = ["-->", "->", "---", "--", "==>", "=="];

pub fn parse_flow(input: &str) -> Graph {
    let mut builder = GraphBuilder::new();

    for line in content_lines(input) {
        if !is_connection_line(line) {
            continue;
        }
        match find_first(line, link) {
            Some(link) => collect_link(&mut builder, link, line),
            None => tracing::trace!(line, "skipping unrecognized flow line"),
        }
    }

    builder.finish()
}

fn is_connection_line(line: &str) -> bool {
    CONNECTORS.iter().any(|c| line.contains(c))
}

fn collect_link(builder: &mut GraphBuilder, link: Link, line: &str) {
    let edge_type = edge_type(&link.connector);
    let label = link.label.or_else(|| pipe_label(line)).unwrap_or_default();
    let edge = Edge::new(&link.from.id, &link.to.id, edge_type).with_label(label);

    add_node(builder, link.from);
    add_node(builder, link.to);
    builder.push_edge(edge);
}

fn add_node(builder: &mut GraphBuilder, node: NodeRef) {
    match node.shape {
        Some((node_type, label)) => builder.declare_node(Node::new(node.id, label, node_type)),
        None => {
            builder.add_node(Node::new(node.id.clone(), node.id, NodeType::Circle));
        }
    }
}

fn edge_type(connector: &str) -> EdgeType {
    if connector.contains("==") {
        EdgeType::Thick
    } else if connector.contains("--") {
        EdgeType::Dashed
    } else {
        EdgeType::Solid
    }
}

#[derive(Debug)]
struct Link {
    from: NodeRef,
    to: NodeRef,
    connector: String,
    label: Option<String>,
}

#[derive(Debug, PartialEq)]
struct NodeRef {
    id: String,
    shape: Option<(NodeType, String)>,
}

fn link(input: &mut &str) -> winnow::Result<Link> {
    alt((text_link, plain_link)).parse_next(input)
}

/// `A -- text --> B` and `A -- text --- B`.
fn text_link(input: &mut &str) -> winnow::Result<Link> {
    let from = node_ref.parse_next(input)?;
    space0.parse_next(input)?;
    "--".parse_next(input)?;
    space1.parse_next(input)?;
    let (text, connector) = alt((
        (take_until(1.., " -->"), " -->"),
        (take_until(1.., " ---"), " ---"),
    ))
    .parse_next(input)?;
    space0.parse_next(input)?;
    let to = node_ref.parse_next(input)?;

    Ok(Link {
        from,
        to,
        connector: connector.trim().to_string(),
        label: Some(text.trim().to_string()),
    })
}

fn plain_link(input: &mut &str) -> winnow::Result<Link> {
    let from = node_ref.parse_next(input)?;
    space0.parse_next(input)?;
    let connector = connector.parse_next(input)?;
    let label = opt(edge_label).parse_next(input)?;
    space0.parse_next(input)?;
    let to = node_ref.parse_next(input)?;

    Ok(Link {
        from,
        to,
        connector: connector.to_string(),
        label,
    })
}

fn connector<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    let arrow = alt((
        (take_while(1.., '-'), opt('>')).take(),
        (take_while(2.., '='), opt('>')).take(),
    ))
    .parse_next(input)?;
    if arrow.len() < 2 {
        return Err(winnow::error::ParserError::from_input(input));
    }
    Ok(arrow)
}

fn edge_label(input: &mut &str) -> winnow::Result<String> {
    "|".parse_next(input)?;
    let text = take_while(1.., |c: char| c != '|').parse_next(input)?;
    "|".parse_next(input)?;
    Ok(text.trim().to_string())
}

fn node_ref(input: &mut &str) -> winnow::Result<NodeRef> {
    let id = identifier.parse_next(input)?;
    let shape = opt(shape_label).parse_next(input)?;
    Ok(NodeRef {
        id: id.to_string(),
        shape,
    })
}

// Doubled parentheses are tried before single ones so `((x))` is reachable.
fn shape_label(input: &mut &str) -> winnow::Result<(NodeType, String)> {
    alt((
        stadium_label.map(|l| (NodeType::Stadium, l)),
        round_label.map(|l| (NodeType::Round, l)),
        diamond_label.map(|l| (NodeType::Diamond, l)),
        bracketed_label.map(|l| (NodeType::Rect, l)),
        rhombus_label.map(|l| (NodeType::Rhombus, l)),
    ))
    .parse_next(input)
}

fn quoted_inner(quote: char, closer: char) -> impl FnMut(&mut &str) -> winnow::Result<String> {
    move |input: &mut &str| {
        if input.starts_with(quote) {
            let _q: char = winnow::token::any.parse_next(input)?;
            let text = take_while(1.., move |c: char| c != quote).parse_next(input)?;
            let result = text.to_string();
            let _q2: char = winnow::token::any.parse_next(input)?;
            Ok(result)
        } else {
            let text = take_while(1.., move |c: char| c != closer).parse_next(input)?;
            Ok(text.trim().to_string())
        }
    }
}

fn stadium_label(input: &mut &str) -> winnow::Result<String> {
    "((".parse_next(input)?;
    let text = take_while(1.., |c: char| c != ')').parse_next(input)?;
    "))".parse_next(input)?;
    Ok(text.trim().to_string())
}

fn round_label(input: &mut &str) -> winnow::Result<String> {
    "(".parse_next(input)?;
    let text = quoted_inner('"', ')').parse_next(input)?;
    ")".parse_next(input)?;
    Ok(text)
}

fn diamond_label(input: &mut &str) -> winnow::Result<String> {
    "{".parse_next(input)?;
    let text = quoted_inner('"', '}').parse_next(input)?;
    "}".parse_next(input)?;
    Ok(text)
}

fn bracketed_label(input: &mut &str) -> winnow::Result<String> {
    "[".parse_next(input)?;
    let text = quoted_inner('"', ']').parse_next(input)?;
    "]".parse_next(input)?;
    Ok(text)
}

fn rhombus_label(input: &mut &str) -> winnow::Result<String> {
    "<".parse_next(input)?;
    let text = quoted_inner('"', '>').parse_next(input)?;
    ">".parse_next(input)?;
    Ok(text)
}
