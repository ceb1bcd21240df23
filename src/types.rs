/// A directed, weighted edge `start -> end`.
///
/// The weight is carried along for callers but does not influence the search.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Edge {
    start: usize,
    end: usize,
    weight: f64,
}

impl Edge {
    pub fn new(start: usize, end: usize, weight: f64) -> Self {
        Self { start, end, weight }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// `(start, end)` pair, handy for comparing edges while ignoring weights.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.start, self.end)
    }
}

/// Class of an edge after a depth-first search examined it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EdgeKind {
    Tree,
    Back,
    Forward,
    Cross,
}

impl EdgeKind {
    pub const ALL: [EdgeKind; 4] = [
        EdgeKind::Tree,
        EdgeKind::Back,
        EdgeKind::Forward,
        EdgeKind::Cross,
    ];
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeKind::Tree => write!(f, "tree"),
            EdgeKind::Back => write!(f, "back"),
            EdgeKind::Forward => write!(f, "forward"),
            EdgeKind::Cross => write!(f, "cross"),
        }
    }
}

/// Search color of a vertex.
///
/// - `White`: not discovered yet,
/// - `Gray`: discovered, still on the active path,
/// - `Black`: finished, every outgoing edge examined.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    White,
    Gray,
    Black,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Gray => write!(f, "Gray"),
            Color::Black => write!(f, "Black"),
        }
    }
}
