//! A graph driven by named vertices
//!
//! The shell and scripts refer to vertices by name. A session keeps the
//! name table in insertion order and maps each name to the vertex handle
//! it was created with.

use crate::command::{Command, CommandError};
use graph_adt::{Direction, Edge, Graph, GraphConfig, GraphError, GraphStatistics, Vertex};
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub type NamedGraph = dyn Graph<String, String>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Parse(#[from] CommandError),

    #[error("no vertex named '{0}'")]
    UnknownVertex(String),

    #[error("vertex '{0}' already exists")]
    DuplicateVertex(String),

    #[error("no edge from '{from}' to '{to}'")]
    NoEdge { from: String, to: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {source}")]
pub struct ScriptError {
    pub line: usize,
    pub source: SessionError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexRow {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRow {
    pub id: u64,
    pub from: String,
    pub to: String,
    pub weight: Option<String>,
}

impl From<&Edge<String, String>> for EdgeRow {
    fn from(edge: &Edge<String, String>) -> Self {
        Self {
            id: edge.id().as_u64(),
            from: edge.origin().value().clone(),
            to: edge.destination().value().clone(),
            weight: edge.weight().cloned(),
        }
    }
}

/// Result of one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    Done(String),
    Degree {
        vertex: String,
        direction: Direction,
        degree: usize,
    },
    Vertices(Vec<VertexRow>),
    Edges(Vec<EdgeRow>),
    Stats(GraphStatistics),
}

pub struct Session {
    graph: Box<NamedGraph>,
    names: IndexMap<String, Vertex<String>>,
}

impl Session {
    pub fn new(config: &GraphConfig) -> Self {
        Self {
            graph: config.build(),
            names: IndexMap::new(),
        }
    }

    pub fn statistics(&self) -> GraphStatistics {
        self.graph.statistics()
    }

    fn lookup(&self, name: &str) -> Result<&Vertex<String>, SessionError> {
        self.names
            .get(name)
            .ok_or_else(|| SessionError::UnknownVertex(name.to_string()))
    }

    /// Known handle for `name`, or a fresh one the graph has not seen yet
    fn handle(&self, name: &str) -> Vertex<String> {
        self.names
            .get(name)
            .cloned()
            .unwrap_or_else(|| Vertex::new(name.to_string()))
    }

    /// Parse and execute one line; blank lines and comments yield nothing
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Output>, SessionError> {
        match Command::parse(line)? {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Output, SessionError> {
        debug!("Executing {:?} on {}", command, self.graph.strategy());
        match command {
            Command::Vertex(name) => {
                if self.names.contains_key(&name) {
                    return Err(SessionError::DuplicateVertex(name));
                }
                let vertex = self.graph.add_vertex(name.clone());
                let message = format!("vertex {} ({})", name, vertex.id());
                self.names.insert(name, vertex);
                Ok(Output::Done(message))
            }

            Command::Edge { from, to, weight } => {
                let u = self.handle(&from);
                let v = if from == to { u.clone() } else { self.handle(&to) };
                let edge = self
                    .graph
                    .insert_edge(&u, &v, weight)
                    .map_err(|e| match e {
                        GraphError::MissingOrigin(_) => SessionError::UnknownVertex(from.clone()),
                        GraphError::MissingDestination(_) => SessionError::UnknownVertex(to.clone()),
                        other => SessionError::Graph(other),
                    })?;

                // The edge list creates endpoints on demand
                for (name, vertex) in [(from, u), (to, v)] {
                    if !self.names.contains_key(&name) && self.graph.contains_vertex(&vertex) {
                        self.names.insert(name, vertex);
                    }
                }
                Ok(Output::Done(format!("{} ({})", edge, edge.id())))
            }

            Command::RemoveVertex(name) => {
                let vertex = self.lookup(&name)?.clone();
                let removed = self.graph.remove_vertex(&vertex)?;
                self.names.shift_remove(&name);
                Ok(Output::Done(format!(
                    "removed vertex {} and {} edge(s)",
                    name, removed
                )))
            }

            Command::RemoveEdge { from, to } => {
                let edge = self
                    .graph
                    .get_edge(self.lookup(&from)?, self.lookup(&to)?)?
                    .ok_or(SessionError::NoEdge { from, to })?;
                self.graph.remove_edge(&edge)?;
                Ok(Output::Done(format!("removed {}", edge)))
            }

            Command::Degree(name, direction) => {
                let degree = self.graph.degree(self.lookup(&name)?, direction)?;
                Ok(Output::Degree {
                    vertex: name,
                    direction: direction.effective(self.graph.is_directed()),
                    degree,
                })
            }

            Command::Incident(name, direction) => {
                let rows = self
                    .graph
                    .incident_edges(self.lookup(&name)?, direction)?
                    .map(|edge| EdgeRow::from(&edge))
                    .collect();
                Ok(Output::Edges(rows))
            }

            Command::Get { from, to } => {
                let edge = self.graph.get_edge(self.lookup(&from)?, self.lookup(&to)?)?;
                Ok(Output::Edges(edge.iter().map(EdgeRow::from).collect()))
            }

            Command::Vertices => Ok(Output::Vertices(
                self.names
                    .iter()
                    .map(|(name, vertex)| VertexRow {
                        id: vertex.id().as_u64(),
                        name: name.clone(),
                    })
                    .collect(),
            )),

            Command::Edges => Ok(Output::Edges(
                self.graph.edges().iter().map(EdgeRow::from).collect(),
            )),

            Command::Stats => Ok(Output::Stats(self.graph.statistics())),
        }
    }

    /// Run every line of a script, stopping at the first failure
    pub fn run_script(
        &mut self,
        script: &str,
        mut emit: impl FnMut(Output),
    ) -> Result<usize, ScriptError> {
        let mut executed = 0;
        for (index, line) in script.lines().enumerate() {
            let output = self.execute_line(line).map_err(|source| ScriptError {
                line: index + 1,
                source,
            })?;
            if let Some(output) = output {
                executed += 1;
                emit(output);
            }
        }
        Ok(executed)
    }
}
