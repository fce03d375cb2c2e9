use winnow::prelude::*;
use winnow::ascii::{space0, space1};
use winnow::combinator::{alt, opt, preceded};

use crate::graph::*;
use crate::lines::{content_lines, find_first, identifier, trailing_text};

const VISIBILITY_MARKERS: [char; 4] = ['+', '-', '#', '~'];

pub fn parse_class(input: &str) -> Graph {
    let mut builder = GraphBuilder::new();

    for line in content_lines(input) {
        let mut rest = line;
        if let Ok(name) = class_decl(&mut rest) {
            builder.add_node(class_node(name));
        } else if line.starts_with(VISIBILITY_MARKERS) {
            // Member lines are recognized but their structure is not kept.
            tracing::trace!(line, "ignoring class member");
        } else {
            match find_first(line, relationship) {
                Some(rel) => {
                    builder.add_node(class_node(&rel.from));
                    builder.add_node(class_node(&rel.to));
                    builder.push_edge(rel.into_edge());
                }
                None => tracing::trace!(line, "skipping unrecognized class line"),
            }
        }
    }

    builder.finish()
}

fn class_node(name: &str) -> Node {
    Node::new(name, name, NodeType::Rect)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Relation {
    Inheritance,
    Realization,
    Composition,
    Aggregation,
    Dependency,
    Association,
    Link,
}

impl Relation {
    fn edge_type(self) -> EdgeType {
        match self {
            Self::Inheritance | Self::Realization | Self::Dependency => EdgeType::Dashed,
            Self::Composition | Self::Aggregation | Self::Association | Self::Link => {
                EdgeType::Solid
            }
        }
    }

    fn edge_style(self) -> EdgeStyle {
        match self {
            Self::Inheritance | Self::Realization => EdgeStyle::end(ArrowHead::Triangle),
            Self::Composition => EdgeStyle::start(ArrowHead::Diamond),
            Self::Aggregation => EdgeStyle::start(ArrowHead::DiamondOpen),
            Self::Dependency | Self::Association | Self::Link => EdgeStyle::default(),
        }
    }
}

#[derive(Debug, PartialEq)]
struct Relationship {
    from: String,
    to: String,
    relation: Relation,
    label: Option<String>,
}

impl Relationship {
    fn into_edge(self) -> Edge {
        Edge::new(self.from, self.to, self.relation.edge_type())
            .with_label(self.label.unwrap_or_default())
            .with_style(self.relation.edge_style())
    }
}

fn class_decl<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    "class".parse_next(input)?;
    space1.parse_next(input)?;
    identifier.parse_next(input)
}

fn relationship(input: &mut &str) -> winnow::Result<Relationship> {
    let from = identifier.parse_next(input)?;
    space0.parse_next(input)?;
    let relation = relation.parse_next(input)?;
    space0.parse_next(input)?;
    let to = identifier.parse_next(input)?;
    let label = opt(preceded((space0, ":"), trailing_text)).parse_next(input)?;

    Ok(Relationship {
        from: from.to_string(),
        to: to.to_string(),
        relation,
        label,
    })
}

fn relation(input: &mut &str) -> winnow::Result<Relation> {
    alt((
        "<|--".value(Relation::Inheritance),
        "..|>".value(Relation::Realization),
        "..>".value(Relation::Dependency),
        "*--".value(Relation::Composition),
        "o--".value(Relation::Aggregation),
        "-->".value(Relation::Association),
        "--".value(Relation::Link),
    ))
    .parse_next(input)
}
