//! Depth-first search with white/gray/black coloring and edge classification.
//!
//! The search is driven by an explicit [`ArrayStack`] of frames instead of recursion.
//! Each frame keeps the vertex and the iterator over its remaining outgoing edges, so a
//! vertex resumes exactly where it left off once the subtree of a newly discovered child
//! is finished. The observable order (timestamps, classification, tree shape) is the one
//! of the textbook recursive DFS.

use std::fmt::Write;

use tracing::{debug, trace};

use crate::edge_list::{EdgeList, EdgeListIter};
use crate::error::{SearchError, SearchResult};
use crate::graph::Graph;
use crate::stack::ArrayStack;
use crate::types::{Color, Edge, EdgeKind};

/// Per-vertex state of one search run.
#[derive(Debug, Clone)]
pub struct VertexData {
    color: Color,
    parent: Option<usize>,
    distance: Option<usize>,
    start_time: Option<usize>,
    end_time: Option<usize>,
    tree_child_edges: EdgeList,
}

impl VertexData {
    fn new() -> Self {
        Self {
            color: Color::White,
            parent: None,
            distance: None,
            start_time: None,
            end_time: None,
            tree_child_edges: EdgeList::new(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Parent in the DFS tree, `None` for the source and for unreached vertices.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Number of tree edges between the source and this vertex.
    /// `None` stands for an infinite distance, i.e. the vertex was never reached.
    pub fn distance(&self) -> Option<usize> {
        self.distance
    }

    pub fn start_time(&self) -> Option<usize> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<usize> {
        self.end_time
    }

    /// Tree edges to the direct children, most recently discovered child first.
    pub fn tree_child_edges(&self) -> EdgeListIter<'_> {
        self.tree_child_edges.iter()
    }
}

/// Outcome of [`DepthFirstSearch::path_from_source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcePath {
    /// Vertices on the tree path, source first.
    Reachable(Vec<usize>),
    /// The vertex was not reached from the source.
    Unreachable(usize),
}

impl SourcePath {
    pub fn vertices(&self) -> Option<&[usize]> {
        match self {
            SourcePath::Reachable(path) => Some(path),
            SourcePath::Unreachable(_) => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, SourcePath::Reachable(_))
    }
}

impl std::fmt::Display for SourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourcePath::Reachable(path) => {
                write!(f, "(")?;
                for (i, vertex) in path.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", vertex)?;
                }
                write!(f, ")")
            }
            SourcePath::Unreachable(vertex) => {
                write!(f, "No path from source vertex to vertex {}.", vertex)
            }
        }
    }
}

/// Stack frame: a gray vertex and the outgoing edges it has not examined yet.
struct Frame<'a> {
    vertex: usize,
    edges: EdgeListIter<'a>,
}

/// One depth-first search over a [`Graph`] from a fixed source vertex.
///
/// Call [`DepthFirstSearch::do_dfs`] before any query, queries made earlier fail with
/// [`SearchError::NotRun`].
#[derive(Debug)]
pub struct DepthFirstSearch<'a> {
    graph: &'a Graph,
    source: usize,
    vertex_data: Vec<VertexData>,
    time: usize,
    tree_edges: EdgeList,
    back_edges: EdgeList,
    forward_edges: EdgeList,
    cross_edges: EdgeList,
    has_run: bool,
}

impl<'a> DepthFirstSearch<'a> {
    pub fn new(graph: &'a Graph, source: usize) -> Self {
        Self {
            graph,
            source,
            vertex_data: vec![VertexData::new(); graph.number_of_vertices()],
            time: 0,
            tree_edges: EdgeList::new(),
            back_edges: EdgeList::new(),
            forward_edges: EdgeList::new(),
            cross_edges: EdgeList::new(),
            has_run: false,
        }
    }

    /// Search starting at vertex 0.
    pub fn with_default_source(graph: &'a Graph) -> Self {
        Self::new(graph, 0)
    }

    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn has_run(&self) -> bool {
        self.has_run
    }

    fn reset(&mut self) {
        self.vertex_data = vec![VertexData::new(); self.graph.number_of_vertices()];
        self.time = 0;
        self.tree_edges = EdgeList::new();
        self.back_edges = EdgeList::new();
        self.forward_edges = EdgeList::new();
        self.cross_edges = EdgeList::new();
        self.has_run = false;
    }

    fn tick(&mut self) -> usize {
        let time = self.time;
        self.time += 1;
        time
    }

    /// Colors `vertex` gray and stamps its discovery time.
    fn discover(&mut self, vertex: usize, parent: Option<usize>) {
        let distance = match parent {
            Some(p) => self.vertex_data[p].distance.map(|d| d + 1),
            None => Some(0),
        };
        let start = self.tick();
        let data = &mut self.vertex_data[vertex];
        data.color = Color::Gray;
        data.parent = parent;
        data.distance = distance;
        data.start_time = Some(start);
    }

    fn finish(&mut self, vertex: usize) {
        let end = self.tick();
        let data = &mut self.vertex_data[vertex];
        data.color = Color::Black;
        data.end_time = Some(end);
    }

    /// Runs the search.
    ///
    /// Fails with `InvalidArgument` if the source is not a vertex of the graph (in
    /// particular on a graph without vertices). Running again discards the previous
    /// results first.
    pub fn do_dfs(&mut self) -> SearchResult<()> {
        let graph = self.graph;
        graph.check_vertex(self.source)?;
        self.reset();

        debug!(
            source = self.source,
            vertices = graph.number_of_vertices(),
            edges = graph.edge_count(),
            "starting depth-first search"
        );

        // every vertex is pushed at most once, so the gray path never exceeds |V|
        let mut stack: ArrayStack<Frame<'a>> = ArrayStack::new(graph.number_of_vertices());
        self.discover(self.source, None);
        stack.push(Frame {
            vertex: self.source,
            edges: graph.vertex_edges(self.source)?,
        })?;

        while !stack.is_empty() {
            let frame = stack.peek_mut()?;
            let current = frame.vertex;

            let Some(&edge) = frame.edges.next() else {
                stack.pop()?;
                self.finish(current);
                continue;
            };

            let next = edge.end();
            match self.vertex_data[next].color {
                Color::White => {
                    trace!(start = current, end = next, "tree edge");
                    self.tree_edges.add_edge(edge);
                    self.vertex_data[current].tree_child_edges.add_edge(edge);
                    self.discover(next, Some(current));
                    stack.push(Frame {
                        vertex: next,
                        edges: graph.vertex_edges(next)?,
                    })?;
                }
                Color::Gray => {
                    trace!(start = current, end = next, "back edge");
                    self.back_edges.add_edge(edge);
                }
                Color::Black => {
                    let current_start = self.vertex_data[current].start_time;
                    let next_start = self.vertex_data[next].start_time;
                    debug_assert_ne!(current_start, next_start);
                    if current_start < next_start {
                        trace!(start = current, end = next, "forward edge");
                        self.forward_edges.add_edge(edge);
                    } else {
                        trace!(start = current, end = next, "cross edge");
                        self.cross_edges.add_edge(edge);
                    }
                }
            }
        }

        self.has_run = true;
        debug!(
            tree = self.tree_edges.len(),
            back = self.back_edges.len(),
            forward = self.forward_edges.len(),
            cross = self.cross_edges.len(),
            "depth-first search finished"
        );
        Ok(())
    }

    fn ensure_run(&self) -> SearchResult<()> {
        if self.has_run {
            Ok(())
        } else {
            Err(SearchError::NotRun)
        }
    }

    /// Search state of `vertex` after the run.
    pub fn vertex_data(&self, vertex: usize) -> SearchResult<&VertexData> {
        self.ensure_run()?;
        self.graph.check_vertex(vertex)?;
        Ok(&self.vertex_data[vertex])
    }

    pub fn color(&self, vertex: usize) -> SearchResult<Color> {
        Ok(self.vertex_data(vertex)?.color())
    }

    pub fn parent(&self, vertex: usize) -> SearchResult<Option<usize>> {
        Ok(self.vertex_data(vertex)?.parent())
    }

    pub fn distance(&self, vertex: usize) -> SearchResult<Option<usize>> {
        Ok(self.vertex_data(vertex)?.distance())
    }

    pub fn start_time(&self, vertex: usize) -> SearchResult<Option<usize>> {
        Ok(self.vertex_data(vertex)?.start_time())
    }

    pub fn end_time(&self, vertex: usize) -> SearchResult<Option<usize>> {
        Ok(self.vertex_data(vertex)?.end_time())
    }

    /// Tree path from the source to `vertex`, found by walking parent pointers back.
    pub fn path_from_source(&self, vertex: usize) -> SearchResult<SourcePath> {
        let data = self.vertex_data(vertex)?;
        if data.distance.is_none() {
            return Ok(SourcePath::Unreachable(vertex));
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(parent) = self.vertex_data[current].parent {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Ok(SourcePath::Reachable(path))
    }

    /// Nested rendering of the DFS tree rooted at the source.
    ///
    /// Every node prints as `( [vertex,start,end] <children> )`, children in the order
    /// of [`VertexData::tree_child_edges`], e.g. `( [0,0,3] ( [1,1,2] ) )`.
    pub fn tree_rendering(&self) -> SearchResult<String> {
        self.ensure_run()?;

        let mut out = String::new();
        self.open_tree_node(&mut out, self.source);
        let mut pending = vec![self.vertex_data[self.source].tree_child_edges()];
        while let Some(children) = pending.last_mut() {
            match children.next() {
                Some(edge) => {
                    let child = edge.end();
                    out.push(' ');
                    self.open_tree_node(&mut out, child);
                    pending.push(self.vertex_data[child].tree_child_edges());
                }
                None => {
                    out.push_str(" )");
                    pending.pop();
                }
            }
        }
        Ok(out)
    }

    fn open_tree_node(&self, out: &mut String, vertex: usize) {
        let data = &self.vertex_data[vertex];
        // writing into a String cannot fail
        let _ = write!(
            out,
            "( [{},{},{}]",
            vertex,
            format_time(data.start_time),
            format_time(data.end_time)
        );
    }

    pub fn tree_edges(&self) -> SearchResult<EdgeListIter<'_>> {
        self.edges_of(EdgeKind::Tree)
    }

    pub fn back_edges(&self) -> SearchResult<EdgeListIter<'_>> {
        self.edges_of(EdgeKind::Back)
    }

    pub fn forward_edges(&self) -> SearchResult<EdgeListIter<'_>> {
        self.edges_of(EdgeKind::Forward)
    }

    pub fn cross_edges(&self) -> SearchResult<EdgeListIter<'_>> {
        self.edges_of(EdgeKind::Cross)
    }

    /// Edges of one class, most recently classified first.
    pub fn edges_of(&self, kind: EdgeKind) -> SearchResult<EdgeListIter<'_>> {
        self.ensure_run()?;
        let list = match kind {
            EdgeKind::Tree => &self.tree_edges,
            EdgeKind::Back => &self.back_edges,
            EdgeKind::Forward => &self.forward_edges,
            EdgeKind::Cross => &self.cross_edges,
        };
        Ok(list.iter())
    }

    /// Classes of all edges `start -> end` (parallel edges may differ).
    /// Empty if no such edge was examined.
    pub fn classify(&self, start: usize, end: usize) -> SearchResult<Vec<EdgeKind>> {
        self.graph.check_vertex(start)?;
        self.graph.check_vertex(end)?;

        let mut kinds = Vec::new();
        for kind in EdgeKind::ALL {
            let count = self
                .edges_of(kind)?
                .filter(|e| e.endpoints() == (start, end))
                .count();
            kinds.extend(std::iter::repeat_n(kind, count));
        }
        Ok(kinds)
    }

    /// All classified edges together with their class.
    pub fn classified_edges(&self) -> SearchResult<Vec<(Edge, EdgeKind)>> {
        let mut edges = Vec::new();
        for kind in EdgeKind::ALL {
            edges.extend(self.edges_of(kind)?.map(|e| (*e, kind)));
        }
        Ok(edges)
    }
}

fn format_time(time: Option<usize>) -> String {
    time.map_or_else(|| "-".to_string(), |t| t.to_string())
}

/// Builds a search over `graph` from `source` and runs it.
pub fn run_search(graph: &Graph, source: usize) -> SearchResult<DepthFirstSearch<'_>> {
    let mut dfs = DepthFirstSearch::new(graph, source);
    dfs.do_dfs()?;
    Ok(dfs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_digraph;
    use petgraph::graph::NodeIndex;
    use petgraph::visit::{DfsEvent, Time, depth_first_search};

    fn graph_from(n: usize, edges: &[(usize, usize)]) -> Graph {
        let mut graph = Graph::new(n);
        for &(u, v) in edges {
            graph.add_edge(u, v, 1.0).unwrap();
        }
        graph
    }

    fn endpoints(edges: EdgeListIter<'_>) -> Vec<(usize, usize)> {
        edges.map(|e| e.endpoints()).collect()
    }

    #[test]
    fn test_four_vertex_scenario() {
        let graph = graph_from(4, &[(0, 1), (0, 2), (1, 2), (2, 3), (3, 1)]);
        let dfs = run_search(&graph, 0).unwrap();

        // 0 examines (0,2) before (0,1)
        assert_eq!(endpoints(dfs.tree_edges().unwrap()), vec![(3, 1), (2, 3), (0, 2)]);
        assert_eq!(endpoints(dfs.back_edges().unwrap()), vec![(1, 2)]);
        assert_eq!(endpoints(dfs.forward_edges().unwrap()), vec![(0, 1)]);
        assert_eq!(dfs.cross_edges().unwrap().count(), 0);

        assert_eq!(
            dfs.path_from_source(3).unwrap(),
            SourcePath::Reachable(vec![0, 2, 3])
        );
        assert_eq!(dfs.path_from_source(1).unwrap().to_string(), "(0 2 3 1)");
        assert_eq!(
            dfs.tree_rendering().unwrap(),
            "( [0,0,7] ( [2,1,6] ( [3,2,5] ( [1,3,4] ) ) ) )"
        );
    }

    #[test]
    fn test_four_vertex_scenario_reversed_insertion() {
        let graph = graph_from(4, &[(3, 1), (2, 3), (1, 2), (0, 2), (0, 1)]);
        let dfs = run_search(&graph, 0).unwrap();

        assert_eq!(endpoints(dfs.tree_edges().unwrap()), vec![(2, 3), (1, 2), (0, 1)]);
        assert_eq!(endpoints(dfs.back_edges().unwrap()), vec![(3, 1)]);
        assert_eq!(endpoints(dfs.forward_edges().unwrap()), vec![(0, 2)]);

        let path = dfs.path_from_source(3).unwrap();
        assert_eq!(path.vertices(), Some(&[0, 1, 2, 3][..]));
        assert_eq!(dfs.distance(3).unwrap(), Some(3));
    }

    #[test]
    fn test_cross_edge() {
        let graph = graph_from(3, &[(0, 2), (0, 1), (2, 1)]);
        let dfs = run_search(&graph, 0).unwrap();

        assert_eq!(endpoints(dfs.cross_edges().unwrap()), vec![(2, 1)]);
        assert_eq!(dfs.classify(2, 1).unwrap(), vec![EdgeKind::Cross]);
        assert_eq!(dfs.start_time(1).unwrap(), Some(1));
        assert_eq!(dfs.end_time(1).unwrap(), Some(2));
        assert_eq!(dfs.start_time(2).unwrap(), Some(3));
        assert_eq!(
            dfs.tree_rendering().unwrap(),
            "( [0,0,5] ( [2,3,4] ) ( [1,1,2] ) )"
        );
    }

    #[test]
    fn test_self_loop_is_back_edge() {
        let graph = graph_from(1, &[(0, 0)]);
        let dfs = run_search(&graph, 0).unwrap();

        assert_eq!(endpoints(dfs.back_edges().unwrap()), vec![(0, 0)]);
        assert_eq!(dfs.tree_rendering().unwrap(), "( [0,0,1] )");
    }

    #[test]
    fn test_parallel_edges() {
        let graph = graph_from(2, &[(0, 1), (0, 1)]);
        let dfs = run_search(&graph, 0).unwrap();

        assert_eq!(
            dfs.classify(0, 1).unwrap(),
            vec![EdgeKind::Tree, EdgeKind::Forward]
        );
    }

    #[test]
    fn test_unreachable_vertex() {
        let graph = graph_from(4, &[(0, 1), (3, 0)]);
        let dfs = run_search(&graph, 0).unwrap();

        let path = dfs.path_from_source(2).unwrap();
        assert!(!path.is_reachable());
        assert_eq!(path.to_string(), "No path from source vertex to vertex 2.");

        for vertex in [2, 3] {
            let data = dfs.vertex_data(vertex).unwrap();
            assert_eq!(data.color(), Color::White);
            assert_eq!(data.distance(), None);
            assert_eq!(data.parent(), None);
            assert_eq!(data.start_time(), None);
        }
        // the edge out of 3 is never examined
        assert!(dfs.classify(3, 0).unwrap().is_empty());
        assert_eq!(dfs.classified_edges().unwrap().len(), 1);
    }

    #[test]
    fn test_source_other_than_zero() {
        let graph = graph_from(3, &[(0, 1), (2, 0)]);
        let dfs = run_search(&graph, 2).unwrap();

        assert_eq!(dfs.source(), 2);
        assert_eq!(dfs.parent(2).unwrap(), None);
        assert_eq!(dfs.distance(2).unwrap(), Some(0));
        assert_eq!(dfs.path_from_source(1).unwrap().to_string(), "(2 0 1)");
    }

    #[test]
    fn test_empty_graph_has_no_source() {
        let graph = Graph::new(0);
        assert!(matches!(
            run_search(&graph, 0),
            Err(SearchError::InvalidArgument { .. })
        ));

        let graph = Graph::new(2);
        let mut dfs = DepthFirstSearch::new(&graph, 2);
        assert!(matches!(dfs.do_dfs(), Err(SearchError::InvalidArgument { .. })));
        assert!(!dfs.has_run());
    }

    #[test]
    fn test_queries_before_run() {
        let graph = graph_from(2, &[(0, 1)]);
        let dfs = DepthFirstSearch::with_default_source(&graph);

        assert_eq!(dfs.tree_edges().err(), Some(SearchError::NotRun));
        assert_eq!(dfs.path_from_source(1).err(), Some(SearchError::NotRun));
        assert_eq!(dfs.tree_rendering().err(), Some(SearchError::NotRun));
        assert_eq!(dfs.color(0).err(), Some(SearchError::NotRun));
    }

    #[test]
    fn test_out_of_range_queries() {
        let graph = graph_from(2, &[(0, 1)]);
        let dfs = run_search(&graph, 0).unwrap();

        assert!(matches!(
            dfs.path_from_source(2),
            Err(SearchError::InvalidArgument { .. })
        ));
        assert!(matches!(dfs.classify(0, 9), Err(SearchError::InvalidArgument { .. })));
    }

    #[test]
    fn test_rerun_matches_fresh_search() {
        let graph = random_digraph(30, 80, 7);
        let mut dfs = DepthFirstSearch::new(&graph, 0);
        dfs.do_dfs().unwrap();
        let first = dfs.classified_edges().unwrap();
        dfs.do_dfs().unwrap();

        let fresh = run_search(&graph, 0).unwrap();
        assert_eq!(dfs.classified_edges().unwrap(), first);
        assert_eq!(fresh.classified_edges().unwrap(), first);
        for v in 0..graph.number_of_vertices() {
            assert_eq!(dfs.start_time(v).unwrap(), fresh.start_time(v).unwrap());
            assert_eq!(dfs.end_time(v).unwrap(), fresh.end_time(v).unwrap());
        }
    }

    #[test]
    fn test_long_path_does_not_overflow() {
        let n = 200_000;
        let mut graph = Graph::new(n);
        for v in 0..n - 1 {
            graph.add_edge(v, v + 1, 1.0).unwrap();
        }
        graph.add_edge(n - 1, 0, 1.0).unwrap();

        let dfs = run_search(&graph, 0).unwrap();
        assert_eq!(dfs.distance(n - 1).unwrap(), Some(n - 1));
        assert_eq!(endpoints(dfs.back_edges().unwrap()), vec![(n - 1, 0)]);
        assert!(dfs.tree_rendering().unwrap().ends_with(" )"));
    }

    fn is_ancestor(dfs: &DepthFirstSearch<'_>, ancestor: usize, mut vertex: usize) -> bool {
        loop {
            if vertex == ancestor {
                return true;
            }
            match dfs.parent(vertex).unwrap() {
                Some(parent) => vertex = parent,
                None => return false,
            }
        }
    }

    #[test]
    fn test_random_graph_invariants() {
        for seed in 0..40 {
            let n = 2 + seed % 25;
            let graph = random_digraph(n, 3 * n, seed);
            let source = seed % n;
            let dfs = run_search(&graph, source).unwrap();

            // classification partitions exactly the edges leaving reached vertices
            let mut expected: Vec<(usize, usize)> = graph
                .all_edges()
                .filter(|e| dfs.color(e.start()).unwrap() != Color::White)
                .map(|e| e.endpoints())
                .collect();
            let mut classified: Vec<(usize, usize)> = dfs
                .classified_edges()
                .unwrap()
                .iter()
                .map(|(e, _)| e.endpoints())
                .collect();
            expected.sort();
            classified.sort();
            assert_eq!(expected, classified, "seed {}", seed);

            let mut times = Vec::new();
            for v in 0..n {
                let data = dfs.vertex_data(v).unwrap();
                match data.color() {
                    Color::White => {
                        assert_eq!(data.distance(), None);
                        assert_eq!(data.parent(), None);
                        assert!(!dfs.path_from_source(v).unwrap().is_reachable());
                    }
                    Color::Black => {
                        let (s, e) = (data.start_time().unwrap(), data.end_time().unwrap());
                        assert!(s < e);
                        times.push(s);
                        times.push(e);

                        let path = dfs.path_from_source(v).unwrap();
                        let path = path.vertices().unwrap();
                        assert_eq!(path.len(), data.distance().unwrap() + 1);
                        assert_eq!(path[0], source);
                        assert_eq!(path[path.len() - 1], v);
                        assert_eq!(data.parent().is_none(), v == source);
                    }
                    Color::Gray => panic!("vertex {} left gray", v),
                }
            }
            let count = times.len();
            times.sort();
            times.dedup();
            assert_eq!(times.len(), count);
            assert_eq!(times, (0..count).collect::<Vec<_>>());

            // parenthesis theorem
            for u in 0..n {
                for w in 0..n {
                    let (Some(su), Some(eu), Some(sw), Some(ew)) = (
                        dfs.start_time(u).unwrap(),
                        dfs.end_time(u).unwrap(),
                        dfs.start_time(w).unwrap(),
                        dfs.end_time(w).unwrap(),
                    ) else {
                        continue;
                    };
                    if u == w {
                        continue;
                    }
                    let nested = (su < sw && ew < eu) || (sw < su && eu < ew);
                    let disjoint = eu < sw || ew < su;
                    assert!(nested || disjoint, "seed {} vertices {} {}", seed, u, w);
                }
            }

            for (edge, kind) in dfs.classified_edges().unwrap() {
                let (u, w) = edge.endpoints();
                let su = dfs.start_time(u).unwrap().unwrap();
                let eu = dfs.end_time(u).unwrap().unwrap();
                let sw = dfs.start_time(w).unwrap().unwrap();
                let ew = dfs.end_time(w).unwrap().unwrap();
                match kind {
                    EdgeKind::Tree => {
                        assert_eq!(dfs.parent(w).unwrap(), Some(u));
                        assert!(su < sw);
                        assert_eq!(dfs.distance(w).unwrap(), dfs.distance(u).unwrap().map(|d| d + 1));
                    }
                    EdgeKind::Back => {
                        assert!(is_ancestor(&dfs, w, u));
                        assert!(sw <= su && su < eu && eu <= ew);
                    }
                    EdgeKind::Forward => {
                        assert!(is_ancestor(&dfs, u, w));
                        assert!(su < sw && ew < eu);
                    }
                    EdgeKind::Cross => {
                        assert!(!is_ancestor(&dfs, u, w) && !is_ancestor(&dfs, w, u));
                        assert!(ew < su);
                    }
                }
            }
        }
    }

    #[test]
    fn test_matches_petgraph_depth_first_search() {
        for seed in 0..25 {
            let n = 1 + seed % 30;
            let graph = random_digraph(n, 2 * n + seed, seed + 100);
            let source = (seed * 7) % n;
            let dfs = run_search(&graph, source).unwrap();

            let pg = graph.to_petgraph();
            let mut discover = vec![None; n];
            let mut finish = vec![None; n];
            let mut tree = Vec::new();
            let mut back = Vec::new();
            let mut cross_forward = Vec::new();
            depth_first_search(&pg, Some(NodeIndex::new(source)), |event| match event {
                DfsEvent::Discover(u, Time(t)) => discover[u.index()] = Some(t),
                DfsEvent::Finish(u, Time(t)) => finish[u.index()] = Some(t),
                DfsEvent::TreeEdge(u, v) => tree.push((u.index(), v.index())),
                DfsEvent::BackEdge(u, v) => back.push((u.index(), v.index())),
                DfsEvent::CrossForwardEdge(u, v) => cross_forward.push((u.index(), v.index())),
            });

            for v in 0..n {
                assert_eq!(dfs.start_time(v).unwrap(), discover[v], "seed {}", seed);
                assert_eq!(dfs.end_time(v).unwrap(), finish[v], "seed {}", seed);
            }

            let sorted = |mut edges: Vec<(usize, usize)>| {
                edges.sort();
                edges
            };
            let mut ours_cross_forward = endpoints(dfs.forward_edges().unwrap());
            ours_cross_forward.extend(endpoints(dfs.cross_edges().unwrap()));

            assert_eq!(sorted(endpoints(dfs.tree_edges().unwrap())), sorted(tree));
            assert_eq!(sorted(endpoints(dfs.back_edges().unwrap())), sorted(back));
            assert_eq!(sorted(ours_cross_forward), sorted(cross_forward));
        }
    }
}
