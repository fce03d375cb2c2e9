use winnow::prelude::*;
use winnow::ascii::{space0, space1};
use winnow::combinator::{alt, opt, preceded};

use crate::graph::*;
use crate::lines::{content_lines, find_first, identifier, trailing_text};

const PARTICIPANT_X: f64 = 100.0;
const PARTICIPANT_SPACING: f64 = 150.0;
const PARTICIPANT_Y: f64 = 50.0;
const MESSAGE_Y: f64 = 100.0;
const MESSAGE_SPACING: f64 = 50.0;

/// Substrings that mark a line as a possible message.
const ARROW_MARKERS: [&str; 3] = ["->", "-x", "-)"];

pub fn parse_sequence(input: &str) -> Graph {
    let mut builder = GraphBuilder::new();
    let mut message_count = 0usize;

    for line in content_lines(input) {
        let mut rest = line;
        if let Ok(p) = participant_decl(&mut rest) {
            add_participant(&mut builder, &p.id, p.alias.as_deref());
        } else if ARROW_MARKERS.iter().any(|m| line.contains(m)) {
            match find_first(line, message) {
                Some(msg) => {
                    add_participant(&mut builder, &msg.from, None);
                    add_participant(&mut builder, &msg.to, None);
                    let y = MESSAGE_Y + message_count as f64 * MESSAGE_SPACING;
                    builder.push_edge(msg.into_edge(y));
                    message_count += 1;
                }
                None => tracing::trace!(line, "skipping unrecognized message"),
            }
        }
    }

    builder.finish()
}

/// Places a participant in the next free slot. Participants first seen in a
/// message are created the same way, labeled with their id.
fn add_participant(builder: &mut GraphBuilder, id: &str, alias: Option<&str>) {
    if builder.contains(id) {
        return;
    }
    let slot = builder.node_count() as f64;
    let node = Node::new(id, alias.unwrap_or(id), NodeType::Rect)
        .at(PARTICIPANT_X + slot * PARTICIPANT_SPACING, PARTICIPANT_Y);
    builder.add_node(node);
}

#[derive(Debug, PartialEq)]
struct ParticipantDecl {
    id: String,
    alias: Option<String>,
}

#[derive(Debug, PartialEq)]
struct Message {
    from: String,
    to: String,
    arrow: Arrow,
    text: String,
}

impl Message {
    fn into_edge(self, y: f64) -> Edge {
        let edge_type = match self.arrow.line_style {
            LineStyle::Dotted => EdgeType::Dashed,
            LineStyle::Solid => EdgeType::Solid,
        };
        let style = match self.arrow.head {
            ArrowKind::Cross => EdgeStyle::end(ArrowHead::Cross),
            ArrowKind::Open => EdgeStyle::end(ArrowHead::Open),
            ArrowKind::None | ArrowKind::Arrowhead => EdgeStyle::default(),
        };
        let mut edge = Edge::new(self.from, self.to, edge_type)
            .with_label(self.text)
            .with_style(style);
        edge.y = Some(y);
        edge
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Arrow {
    line_style: LineStyle,
    head: ArrowKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LineStyle {
    Solid,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ArrowKind {
    None,
    Arrowhead,
    Cross,
    Open,
}

fn participant_decl(input: &mut &str) -> winnow::Result<ParticipantDecl> {
    alt(("participant", "actor")).parse_next(input)?;
    space1.parse_next(input)?;
    let id = identifier.parse_next(input)?;

    let alias = opt(preceded((space1, "as", space1), trailing_text)).parse_next(input)?;

    Ok(ParticipantDecl {
        id: id.to_string(),
        alias,
    })
}

fn message(input: &mut &str) -> winnow::Result<Message> {
    let from = identifier.parse_next(input)?;
    space0.parse_next(input)?;
    let arr = arrow.parse_next(input)?;

    // Activation shorthand (`+`/`-`) carries no graph meaning.
    opt(alt(("+", "-"))).parse_next(input)?;
    space0.parse_next(input)?;
    let to = identifier.parse_next(input)?;
    space0.parse_next(input)?;
    ":".parse_next(input)?;
    let text = trailing_text.parse_next(input)?;

    Ok(Message {
        from: from.to_string(),
        to: to.to_string(),
        arrow: arr,
        text,
    })
}

fn arrow(input: &mut &str) -> winnow::Result<Arrow> {
    let line_style = alt((
        "--".value(LineStyle::Dotted),
        "-".value(LineStyle::Solid),
    ))
    .parse_next(input)?;

    let head = alt((
        ">>".value(ArrowKind::Arrowhead),
        ">".value(ArrowKind::None),
        "x".value(ArrowKind::Cross),
        ")".value(ArrowKind::Open),
    ))
    .parse_next(input)?;

    Ok(Arrow { line_style, head })
}
