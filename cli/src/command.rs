//! Command language of the shell and of scripts
//!
//! One command per line; blank lines and `#` comments are skipped.

use graph_adt::Direction;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try :help)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid direction '{0}', expected 'in' or 'out'")]
    Direction(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Vertex(String),
    Edge {
        from: String,
        to: String,
        weight: Option<String>,
    },
    RemoveVertex(String),
    RemoveEdge {
        from: String,
        to: String,
    },
    Degree(String, Direction),
    Incident(String, Direction),
    Get {
        from: String,
        to: String,
    },
    Vertices,
    Edges,
    Stats,
}

pub const HELP: &[(&str, &str)] = &[
    ("vertex <name>", "Insert a vertex"),
    ("edge <a> <b> [weight]", "Insert an edge from a to b"),
    ("remove-vertex <name>", "Remove a vertex and its edges"),
    ("remove-edge <a> <b>", "Remove the edge from a to b"),
    ("degree <name> [in|out]", "Count incident edges"),
    ("incident <name> [in|out]", "List incident edges"),
    ("get <a> <b>", "Look up the edge from a to b"),
    ("vertices", "List vertices"),
    ("edges", "List edges"),
    ("stats", "Show strategy and counts"),
];

fn direction(arg: Option<&str>) -> Result<Direction, CommandError> {
    match arg {
        None | Some("out") | Some("outgoing") => Ok(Direction::Outgoing),
        Some("in") | Some("incoming") => Ok(Direction::Incoming),
        Some(other) => Err(CommandError::Direction(other.to_string())),
    }
}

impl Command {
    /// Parse one line; `Ok(None)` for blank lines and comments
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let args = &words[1..];
        let command = match (words[0], args) {
            ("vertex", [name]) => Command::Vertex(name.to_string()),
            ("vertex", _) => return Err(CommandError::Usage("vertex <name>")),

            ("edge", [from, to]) => Command::Edge {
                from: from.to_string(),
                to: to.to_string(),
                weight: None,
            },
            ("edge", [from, to, weight]) => Command::Edge {
                from: from.to_string(),
                to: to.to_string(),
                weight: Some(weight.to_string()),
            },
            ("edge", _) => return Err(CommandError::Usage("edge <a> <b> [weight]")),

            ("remove-vertex", [name]) => Command::RemoveVertex(name.to_string()),
            ("remove-vertex", _) => return Err(CommandError::Usage("remove-vertex <name>")),

            ("remove-edge", [from, to]) => Command::RemoveEdge {
                from: from.to_string(),
                to: to.to_string(),
            },
            ("remove-edge", _) => return Err(CommandError::Usage("remove-edge <a> <b>")),

            ("degree", [name]) | ("degree", [name, _]) => {
                Command::Degree(name.to_string(), direction(args.get(1).copied())?)
            }
            ("degree", _) => return Err(CommandError::Usage("degree <name> [in|out]")),

            ("incident", [name]) | ("incident", [name, _]) => {
                Command::Incident(name.to_string(), direction(args.get(1).copied())?)
            }
            ("incident", _) => return Err(CommandError::Usage("incident <name> [in|out]")),

            ("get", [from, to]) => Command::Get {
                from: from.to_string(),
                to: to.to_string(),
            },
            ("get", _) => return Err(CommandError::Usage("get <a> <b>")),

            ("vertices", []) => Command::Vertices,
            ("edges", []) => Command::Edges,
            ("stats", []) => Command::Stats,

            (other, _) => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_blank_and_comments() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   "), Ok(None));
        assert_eq!(Command::parse("# a comment"), Ok(None));
    }

    #[test]
    fn test_parse_edge() {
        assert_eq!(
            Command::parse("edge a b"),
            Ok(Some(Command::Edge {
                from: "a".into(),
                to: "b".into(),
                weight: None,
            }))
        );
        assert_eq!(
            Command::parse("  edge a b 12 "),
            Ok(Some(Command::Edge {
                from: "a".into(),
                to: "b".into(),
                weight: Some("12".into()),
            }))
        );
        assert_eq!(
            Command::parse("edge a"),
            Err(CommandError::Usage("edge <a> <b> [weight]"))
        );
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(
            Command::parse("degree a"),
            Ok(Some(Command::Degree("a".into(), Direction::Outgoing)))
        );
        assert_eq!(
            Command::parse("incident a in"),
            Ok(Some(Command::Incident("a".into(), Direction::Incoming)))
        );
        assert_eq!(
            Command::parse("degree a sideways"),
            Err(CommandError::Direction("sideways".into()))
        );
    }

    #[test]
    fn test_parse_listing_commands() {
        assert_eq!(Command::parse("vertices"), Ok(Some(Command::Vertices)));
        assert_eq!(Command::parse("edges"), Ok(Some(Command::Edges)));
        assert_eq!(Command::parse("stats"), Ok(Some(Command::Stats)));
        assert_eq!(Command::parse("stats now"), Err(CommandError::Unknown("stats".into())));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::parse("traverse a"),
            Err(CommandError::Unknown("traverse".into()))
        );
    }
}
