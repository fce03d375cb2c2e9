use winnow::prelude::*;
use winnow::ascii::{space0, space1};
use winnow::combinator::{alt, eof, opt, preceded, repeat, terminated};
use winnow::token::{rest, take_until};

use crate::graph::*;
use crate::lines::{content_lines, identifier};
use crate::style;

const TASK_X: f64 = 100.0;
const TASK_Y: f64 = 50.0;
const TASK_SPACING: f64 = 60.0;

/// Chart-level keywords whose lines never describe a task.
const DIRECTIVES: [&str; 9] = [
    "gantt",
    "title",
    "dateFormat",
    "axisFormat",
    "excludes",
    "includes",
    "todayMarker",
    "tickInterval",
    "weekday",
];

/// Tasks become nodes stacked in declaration order, chained by dashed edges.
/// `after` dependencies are not read.
pub fn parse_gantt(input: &str) -> Graph {
    let mut builder = GraphBuilder::new();
    let mut section: Option<String> = None;
    let mut task_count = 0usize;
    let mut previous: Option<String> = None;

    for line in content_lines(input) {
        if let Ok(name) = section_header.parse(line) {
            section = Some(name.trim().to_string());
            continue;
        }
        if is_directive(line) || !line.contains(':') {
            continue;
        }

        let mut cursor = line;
        let Ok(task) = task(&mut cursor) else {
            tracing::trace!(line, "skipping unrecognized gantt line");
            continue;
        };
        task_count += 1;

        let id = task.id.unwrap_or_else(|| format!("task{task_count}"));
        let mut node = Node::new(id.clone(), task.name, NodeType::Rect).at(
            TASK_X,
            TASK_Y + builder.node_count() as f64 * TASK_SPACING,
        );
        node.style = style::status_style(task.status);
        node.section = section.clone();
        node.status = Some(task.status);

        if !builder.add_node(node) {
            tracing::debug!(id = %id, "skipping duplicate gantt task id");
            continue;
        }
        if let Some(prev) = previous.replace(id.clone()) {
            builder.push_edge(Edge::new(prev, id, EdgeType::Dashed));
        }
    }

    builder.finish()
}

/// A line led by a chart-level keyword. A spaced ` :` separator makes it a
/// task instead, so `title page : t1` is the task `title page`.
fn is_directive(line: &str) -> bool {
    let first = line.split_whitespace().next().unwrap_or("");
    DIRECTIVES.contains(&first) && !line.contains(" :")
}

/// `section <name>`. The keyword must stand alone, so `sectionless : t1` is a task.
fn section_header<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    "section".parse_next(input)?;
    alt((preceded(space1, rest), eof)).parse_next(input)
}

#[derive(Debug, PartialEq)]
struct Task {
    name: String,
    status: TaskStatus,
    id: Option<String>,
}

/// `<name> : [tag, ...] <id>[, <dates>]`. When the id slot does not hold a
/// bare identifier (e.g. it starts with a date) the task has no id.
fn task(input: &mut &str) -> winnow::Result<Task> {
    let name = take_until(1.., ":").parse_next(input)?.trim();
    ":".parse_next(input)?;
    space0.parse_next(input)?;
    let tags: Vec<Option<TaskStatus>> =
        repeat(0.., terminated(tag, (space0, ",", space0))).parse_next(input)?;
    let id = opt(terminated(identifier, (space0, alt((",", eof))))).parse_next(input)?;
    let dates = rest.parse_next(input)?.trim();

    if name.is_empty() || (id.is_none() && dates.is_empty()) {
        return Err(winnow::error::ParserError::from_input(input));
    }

    Ok(Task {
        name: name.to_string(),
        status: task_status(&tags),
        id: id.map(str::to_string),
    })
}

/// A leading task tag. `milestone` carries no status.
fn tag(input: &mut &str) -> winnow::Result<Option<TaskStatus>> {
    alt((
        "done".value(Some(TaskStatus::Done)),
        "active".value(Some(TaskStatus::Active)),
        "crit".value(Some(TaskStatus::Crit)),
        "milestone".value(None),
    ))
    .parse_next(input)
}

/// Progress (`done`, `active`) outranks `crit`; among equals the first tag wins.
fn task_status(tags: &[Option<TaskStatus>]) -> TaskStatus {
    tags.iter()
        .flatten()
        .copied()
        .min_by_key(|status| match status {
            TaskStatus::Done | TaskStatus::Active => 0,
            TaskStatus::Crit | TaskStatus::Pending => 1,
        })
        .unwrap_or(TaskStatus::Pending)
}
