//! # dfs_classify
//!
//! Depth-first search over directed weighted graphs with the classical
//! white/gray/black coloring. Every examined edge is classified as a tree, back,
//! forward or cross edge, every reached vertex gets discovery and finish times,
//! and tree paths from the source can be reconstructed afterwards.
//!
//! The search never recurses: the gray path lives in a fixed-capacity
//! [`stack::ArrayStack`], so arbitrarily deep graphs are fine.
//!
//! ```
//! use dfs_classify::{input, run_search, EdgeKind};
//!
//! let graph = input::from_str("3\n0 1 1.0\n1 2 1.0\n2 0 1.0\n").unwrap();
//! let dfs = run_search(&graph, 0).unwrap();
//!
//! assert_eq!(dfs.classify(2, 0).unwrap(), vec![EdgeKind::Back]);
//! assert_eq!(dfs.path_from_source(2).unwrap().to_string(), "(0 1 2)");
//! ```

pub mod dfs;
pub mod edge_list;
pub mod error;
pub mod graph;
pub mod input;
pub mod output;
pub mod stack;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;

pub use dfs::{DepthFirstSearch, SourcePath, VertexData, run_search};
pub use edge_list::EdgeList;
pub use error::{GraphLoadError, SearchError, SearchResult};
pub use graph::Graph;
pub use types::{Color, Edge, EdgeKind};
