use crate::graph::Graph;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random directed graph with `n` vertices and `m` edges.
///
/// Endpoints are uniform, so self-loops and parallel edges do occur.
pub fn random_digraph(n: usize, m: usize, seed: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = Graph::new(n);

    if n == 0 {
        return graph;
    }
    for _ in 0..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        let weight = rng.random_range(0.0..10.0);
        graph.add_edge(s, t, weight).unwrap();
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_digraph_is_deterministic() {
        let a = random_digraph(10, 25, 3);
        let b = random_digraph(10, 25, 3);
        assert_eq!(a.edge_count(), 25);

        let edges_a: Vec<_> = a.all_edges().copied().collect();
        let edges_b: Vec<_> = b.all_edges().copied().collect();
        assert_eq!(edges_a, edges_b);
    }
}
