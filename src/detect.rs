use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the five supported diagram grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Flow,
    Sequence,
    Gantt,
    Class,
    State,
}

impl Dialect {
    pub const ALL: [Dialect; 5] = [
        Dialect::Flow,
        Dialect::Sequence,
        Dialect::Gantt,
        Dialect::Class,
        Dialect::State,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::Sequence => "sequence",
            Self::Gantt => "gantt",
            Self::Class => "class",
            Self::State => "state",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownDialect(s.to_string()))
    }
}

/// Keyword signatures, most specific first. First match wins.
const SIGNATURES: [(&str, Dialect); 6] = [
    ("sequenceDiagram", Dialect::Sequence),
    ("gantt", Dialect::Gantt),
    ("classDiagram", Dialect::Class),
    ("stateDiagram", Dialect::State),
    ("graph", Dialect::Flow),
    ("flowchart", Dialect::Flow),
];

/// Picks the dialect by substring search over the raw text. Unrecognized input
/// is treated as a flowchart.
pub fn detect(input: &str) -> Dialect {
    match SIGNATURES.iter().find(|(keyword, _)| input.contains(keyword)) {
        Some((keyword, dialect)) => {
            tracing::debug!(%dialect, keyword, "detected diagram dialect");
            *dialect
        }
        None => {
            tracing::debug!("no dialect keyword found, falling back to flow");
            Dialect::Flow
        }
    }
}
