//! Error types for graph construction, searching and loading.

use thiserror::Error;

/// Contract violations raised by the graph, the frontier stack and the search.
///
/// None of these are expected on a well-formed graph, they surface programmer errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Vertex index out of range, negative vertex count or similar.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// `pop`/`peek` on an empty stack.
    #[error("Stack is empty")]
    EmptyStack,

    /// `push` on a full stack.
    #[error("Stack capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// Fixed capacity of the stack
        capacity: usize,
    },

    /// A query was made before the search ran.
    #[error("Depth-first search has not been run yet")]
    NotRun,
}

impl SearchError {
    /// Create an InvalidArgument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error for a vertex outside `0..number_of_vertices`.
    pub fn vertex_out_of_range(vertex: usize, number_of_vertices: usize) -> Self {
        Self::invalid_argument(format!(
            "vertex {} is out of range 0..{}",
            vertex, number_of_vertices
        ))
    }
}

/// Result alias used by the graph, stack and search.
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors raised while reading a graph description.
#[derive(Debug, Error)]
pub enum GraphLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The description does not even contain the vertex count.
    #[error("Missing vertex count")]
    MissingVertexCount,

    /// A token could not be parsed as the expected kind of number.
    #[error("Invalid token '{token}' at position {position}, expected {expected}")]
    InvalidToken {
        token: String,
        /// 0-based index of the token in the description
        position: usize,
        expected: &'static str,
    },

    /// The description ends in the middle of an edge triple.
    #[error("Incomplete edge starting at token {position}")]
    IncompleteEdge { position: usize },

    /// The parsed values do not describe a valid graph.
    #[error("Invalid graph: {0}")]
    Graph(#[from] SearchError),
}

impl GraphLoadError {
    pub fn invalid_token(token: &str, position: usize, expected: &'static str) -> Self {
        Self::InvalidToken {
            token: token.to_string(),
            position,
            expected,
        }
    }
}
