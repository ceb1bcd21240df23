use std::iter::FusedIterator;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::edge_list::{EdgeList, EdgeListIter};
use crate::error::{SearchError, SearchResult};
use crate::types::Edge;

/// Directed weighted graph stored as adjacency lists.
///
/// Vertices are `0..number_of_vertices`, fixed at construction.
/// Every edge lives in the list of its start vertex.
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_list: Vec<EdgeList>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `number_of_vertices` vertices and no edges.
    pub fn new(number_of_vertices: usize) -> Self {
        Self {
            vertex_list: vec![EdgeList::new(); number_of_vertices],
            edge_count: 0,
        }
    }

    /// Like [`Graph::new`], but takes a signed count as read from a description
    /// and rejects negative values and counts too large to allocate.
    pub fn try_new(number_of_vertices: i64) -> SearchResult<Self> {
        let n = usize::try_from(number_of_vertices).map_err(|_| {
            SearchError::invalid_argument(format!(
                "number of vertices must be non-negative, got {}",
                number_of_vertices
            ))
        })?;
        let mut vertex_list = Vec::new();
        vertex_list.try_reserve_exact(n).map_err(|e| {
            SearchError::invalid_argument(format!("cannot allocate {} vertices: {}", n, e))
        })?;
        vertex_list.resize_with(n, EdgeList::new);
        Ok(Self {
            vertex_list,
            edge_count: 0,
        })
    }

    pub fn number_of_vertices(&self) -> usize {
        self.vertex_list.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Fails with `InvalidArgument` unless `vertex` is in `0..number_of_vertices`.
    pub fn check_vertex(&self, vertex: usize) -> SearchResult<()> {
        if vertex < self.number_of_vertices() {
            Ok(())
        } else {
            Err(SearchError::vertex_out_of_range(
                vertex,
                self.number_of_vertices(),
            ))
        }
    }

    /// Adds the edge `start -> end` in front of the edge list of `start`.
    pub fn add_edge(&mut self, start: usize, end: usize, weight: f64) -> SearchResult<()> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;
        self.vertex_list[start].add_edge(Edge::new(start, end, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `vertex`, most recently added first.
    pub fn vertex_edges(&self, vertex: usize) -> SearchResult<EdgeListIter<'_>> {
        self.check_vertex(vertex)?;
        Ok(self.vertex_list[vertex].iter())
    }

    /// Every edge of the graph: vertices in increasing order, each vertex's edges in
    /// [`Graph::vertex_edges`] order.
    pub fn all_edges(&self) -> AllEdges<'_> {
        AllEdges {
            lists: &self.vertex_list,
            next_vertex: 0,
            current: None,
        }
    }

    /// Copies the graph into a petgraph `DiGraph`.
    ///
    /// Node weights are the vertex indices, edge weights the edge weights.
    /// Edges are inserted so that petgraph's `neighbors` yields them in the same
    /// order as [`Graph::vertex_edges`].
    pub fn to_petgraph(&self) -> DiGraph<usize, f64> {
        let mut graph = DiGraph::with_capacity(self.number_of_vertices(), self.edge_count);
        for vertex in 0..self.number_of_vertices() {
            graph.add_node(vertex);
        }
        // petgraph walks outgoing edges newest first, so feed them oldest first
        for list in &self.vertex_list {
            for edge in list.iter().rev() {
                graph.add_edge(
                    NodeIndex::new(edge.start()),
                    NodeIndex::new(edge.end()),
                    edge.weight(),
                );
            }
        }
        graph
    }
}

/// Iterator over all edges of a [`Graph`], see [`Graph::all_edges`].
///
/// Vertices with empty lists are skipped, and once the last vertex is exhausted the
/// iterator stays exhausted.
#[derive(Debug, Clone)]
pub struct AllEdges<'a> {
    lists: &'a [EdgeList],
    next_vertex: usize,
    current: Option<EdgeListIter<'a>>,
}

impl<'a> Iterator for AllEdges<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(edge) = self.current.as_mut().and_then(|edges| edges.next()) {
                return Some(edge);
            }
            let list = self.lists.get(self.next_vertex)?;
            self.next_vertex += 1;
            self.current = Some(list.iter());
        }
    }
}

impl FusedIterator for AllEdges<'_> {}
