use crate::types::Edge;

/// List of edges that share a start vertex.
///
/// Edges are added at the front, so iteration yields the most recently added edge first.
/// Internally the edges are kept in insertion order and walked backwards, which keeps
/// `add_edge` O(1) amortized.
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl EdgeList {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Inserts `edge` in front of all edges added so far.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns a fresh iterator positioned at the front of the list.
    ///
    /// Iterators are independent of each other and leave the list untouched.
    pub fn iter(&self) -> EdgeListIter<'_> {
        EdgeListIter {
            inner: self.edges.iter().rev(),
        }
    }
}

impl<'a> IntoIterator for &'a EdgeList {
    type Item = &'a Edge;
    type IntoIter = EdgeListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over an [`EdgeList`].
#[derive(Debug, Clone)]
pub struct EdgeListIter<'a> {
    inner: std::iter::Rev<std::slice::Iter<'a, Edge>>,
}

impl<'a> Iterator for EdgeListIter<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for EdgeListIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for EdgeListIter<'_> {}
