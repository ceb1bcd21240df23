use dot::{Edges, GraphWalk, Labeller, Nodes, Style};

use crate::dfs::DepthFirstSearch;
use crate::edge_list::EdgeListIter;
use crate::error::SearchResult;
use crate::types::{Color, EdgeKind};

/// Returns the textual report of a finished search.
///
/// It lists the DFS tree, the tree path to every vertex and the four edge classes,
/// each edge as `(start,end)` or `None` if the class is empty.
pub fn render_report(dfs: &DepthFirstSearch<'_>) -> SearchResult<String> {
    let mut out = format!(
        "\nThe tree for the depth first search from {} is\n\n",
        dfs.source()
    );
    out.push_str(&dfs.tree_rendering()?);
    out.push('\n');

    out.push_str("\nPaths from source vertex along DFS tree edges:\n\n");
    for vertex in 0..dfs.graph().number_of_vertices() {
        out.push_str(&dfs.path_from_source(vertex)?.to_string());
        out.push('\n');
    }

    for kind in EdgeKind::ALL {
        out.push_str(&format!("\nThe {} edges are:\n\n", kind));
        push_edges(&mut out, dfs.edges_of(kind)?);
    }
    Ok(out)
}

fn push_edges(out: &mut String, edges: EdgeListIter<'_>) {
    if edges.len() == 0 {
        out.push_str("None\n");
        return;
    }
    for edge in edges {
        out.push_str(&edge.to_string());
        out.push('\n');
    }
}

type Node = usize;

#[derive(Debug, Clone)]
struct DrawnEdge {
    start: Node,
    end: Node,
    weight: f64,
    /// `None` for edges leaving vertices the search never reached.
    kind: Option<EdgeKind>,
}

struct SearchDrawing<'a> {
    nodes: Vec<Node>,
    edges: Vec<DrawnEdge>,
    dfs: &'a DepthFirstSearch<'a>,
}

impl<'a> Labeller<'a, Node, DrawnEdge> for SearchDrawing<'a> {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("DFS").expect("static id is valid")
    }

    fn node_id(&'a self, n: &Node) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n)).expect("alphanumeric id is valid")
    }

    fn node_label(&'a self, n: &Node) -> dot::LabelText<'a> {
        let label = match self.dfs.vertex_data(*n) {
            Ok(data) => match (data.start_time(), data.end_time()) {
                (Some(start), Some(end)) => format!("{} [{}/{}]", n, start, end),
                _ => format!("{} ({})", n, data.color()),
            },
            Err(_) => n.to_string(),
        };
        dot::LabelText::label(label)
    }

    fn edge_label(&'a self, e: &DrawnEdge) -> dot::LabelText<'a> {
        let label = match e.kind {
            Some(kind) => format!("{} ({})", kind, e.weight),
            None => format!("unexamined ({})", e.weight),
        };
        dot::LabelText::label(label)
    }

    fn node_style(&'a self, _n: &Node) -> Style {
        Style::Filled
    }

    fn node_color(&'a self, n: &Node) -> Option<dot::LabelText<'a>> {
        let color = if *n == self.dfs.source() {
            "green"
        } else if matches!(self.dfs.color(*n), Ok(Color::White)) {
            "grey"
        } else {
            "lightblue"
        };
        Some(dot::LabelText::label(color))
    }

    fn edge_style(&'a self, e: &DrawnEdge) -> Style {
        match e.kind {
            Some(EdgeKind::Tree) => Style::Solid,
            Some(EdgeKind::Back) => Style::Dashed,
            Some(EdgeKind::Forward) => Style::Bold,
            Some(EdgeKind::Cross) | None => Style::Dotted,
        }
    }

    fn edge_color(&'a self, e: &DrawnEdge) -> Option<dot::LabelText<'a>> {
        e.kind.is_none().then(|| dot::LabelText::label("grey"))
    }
}

impl<'a> GraphWalk<'a, Node, DrawnEdge> for SearchDrawing<'a> {
    fn nodes(&'a self) -> Nodes<'a, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&'a self) -> Edges<'a, DrawnEdge> {
        self.edges.as_slice().into()
    }

    fn source(&'a self, e: &DrawnEdge) -> Node {
        e.start
    }

    fn target(&'a self, e: &DrawnEdge) -> Node {
        e.end
    }
}

/// Returns the classified search in DOT format.
///
/// The source is colored green, unreached vertices grey, others lightblue.
/// Tree edges are solid, back edges dashed, forward edges bold and cross edges dotted.
/// Edges out of unreached vertices are grey and dotted.
/// Edge labels carry the class and the weight, e.g. `back (1.5)`.
///
/// Use returned string with `dot`.
pub fn draw_search<'a>(dfs: &'a DepthFirstSearch<'a>) -> SearchResult<String> {
    let graph = dfs.graph();
    let mut edges: Vec<DrawnEdge> = dfs
        .classified_edges()?
        .into_iter()
        .map(|(edge, kind)| DrawnEdge {
            start: edge.start(),
            end: edge.end(),
            weight: edge.weight(),
            kind: Some(kind),
        })
        .collect();
    for edge in graph.all_edges() {
        if dfs.color(edge.start())? == Color::White {
            edges.push(DrawnEdge {
                start: edge.start(),
                end: edge.end(),
                weight: edge.weight(),
                kind: None,
            });
        }
    }

    let drawing = SearchDrawing {
        nodes: (0..graph.number_of_vertices()).collect(),
        edges,
        dfs,
    };

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&drawing, &mut buffer).expect("rendering into memory cannot fail");
    Ok(String::from_utf8_lossy(&buffer.into_inner()).into_owned())
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
    std::fs::write(path, content)
}
