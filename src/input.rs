use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use tracing::debug;

use crate::error::GraphLoadError;
use crate::graph::Graph;

/// Reads a graph from a file.
///
/// Directed weighted graph input, whitespace separated:
/// - first the number of vertices `n`,
/// - then any number of triples `start end weight`, vertices numbered from 0 to n-1,
///   weight a floating point number.
///
/// Edges are added in file order, so the search examines the edges of a vertex
/// in reverse file order.
///
/// Example input:
/// ```text
/// 4
/// 0 1 1.0
/// 0 2 1.0
/// 1 2 1.0
/// 2 3 1.0
/// 3 1 1.0
/// ```
pub fn from_file(path: impl AsRef<Path>) -> Result<Graph, GraphLoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    debug!(path = %path.display(), "loading graph");
    from_reader(BufReader::new(file))
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<Graph, GraphLoadError> {
    from_reader(Cursor::new(input))
}

/// Parses a graph description from any buffered reader.
pub fn from_reader<R: BufRead>(reader: R) -> Result<Graph, GraphLoadError> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(str::to_string));
    }

    let (count, rest) = tokens
        .split_first()
        .ok_or(GraphLoadError::MissingVertexCount)?;
    let number_of_vertices: i64 = count
        .parse()
        .map_err(|_| GraphLoadError::invalid_token(count, 0, "a vertex count"))?;
    let mut graph = Graph::try_new(number_of_vertices)?;

    for (i, triple) in rest.chunks(3).enumerate() {
        let position = 1 + 3 * i;
        let [start, end, weight] = triple else {
            return Err(GraphLoadError::IncompleteEdge { position });
        };
        let start = parse_vertex(start, position)?;
        let end = parse_vertex(end, position + 1)?;
        let weight: f64 = weight
            .parse()
            .map_err(|_| GraphLoadError::invalid_token(weight, position + 2, "a weight"))?;
        graph.add_edge(start, end, weight)?;
    }

    debug!(
        vertices = graph.number_of_vertices(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

fn parse_vertex(token: &str, position: usize) -> Result<usize, GraphLoadError> {
    token
        .parse()
        .map_err(|_| GraphLoadError::invalid_token(token, position, "a vertex index"))
}
