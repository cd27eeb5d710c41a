use std::fmt::Display;

use tracing::trace;

use super::*;
use crate::error::GraphError;

/// An undirected multigraph represented by a symmetric adjacency matrix.
///
/// Entry `(u, v)` counts the parallel edges between `u` and `v`, entry `(u, u)` the self-loops
/// at `u`. The number of edges and all degrees are derived from the matrix and kept in sync
/// by every mutation (see [`MultiGraph::update_edges`]).
#[derive(Clone, PartialEq, Eq)]
pub struct MultiGraph {
    edges: EdgeMatrix,
    num_edges: NumEdges,
    degrees: Vec<NumEdges>,
}

impl MultiGraph {
    /// Creates an edgeless graph with `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            edges: EdgeMatrix::new(n),
            num_edges: 0,
            degrees: vec![0; n.idx()],
        }
    }

    /// Mutates the adjacency matrix through `f` and recomputes edge count and degrees afterwards.
    /// `f` must leave the matrix symmetric.
    ///
    /// ** Panics if the new number of edges or some degree exceeds [`NumEdges::MAX`] **
    ///
    /// # Example
    /// ```
    /// use ueuler::prelude::*;
    ///
    /// let mut graph = MultiGraph::new(3);
    /// graph.update_edges(|m| {
    ///     m.set_symmetric(0, 1, 2);
    ///     m.set(2, 2, 1);
    /// });
    ///
    /// assert_eq!(graph.number_of_edges(), 3);
    /// assert_eq!(graph.degree_of(0), 2);
    /// assert_eq!(graph.degree_of(2), 2);
    /// ```
    pub fn update_edges<F>(&mut self, f: F)
    where
        F: FnOnce(&mut EdgeMatrix),
    {
        f(&mut self.edges);
        debug_assert!(self.edges.is_symmetric());
        if let Err(err) = self.try_recount() {
            panic!("{err}");
        }
    }

    /// Consumes the graph and returns its adjacency matrix
    pub fn into_matrix(self) -> EdgeMatrix {
        self.edges
    }

    /// Recomputes the number of edges and the degree of every node.
    /// Leaves the counts untouched if any of them overflows.
    fn try_recount(&mut self) -> Result<(), GraphError> {
        let num_edges = self
            .edges
            .upper_triangle_sum()
            .ok_or(GraphError::TooManyEdges)?;
        // self-loops count twice
        let degrees = (0..self.edges.number_of_nodes())
            .map(|u| self.edges.checked_degree(u))
            .collect::<Option<Vec<_>>>()
            .ok_or(GraphError::TooManyEdges)?;

        self.num_edges = num_edges;
        self.degrees = degrees;

        trace!(
            nodes = self.edges.number_of_nodes(),
            edges = self.num_edges,
            "recounted multigraph"
        );
        Ok(())
    }
}

impl GraphNodeOrder for MultiGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.edges.number_of_nodes()
    }
}

impl GraphEdgeOrder for MultiGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for MultiGraph {
    fn multiplicity_of(&self, u: Node, v: Node) -> Multiplicity {
        let n = self.number_of_nodes();
        if u < n && v < n { self.edges.get(u, v) } else { 0 }
    }

    fn degree_of(&self, u: Node) -> NumEdges {
        self.degrees[u.idx()]
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.edges
            .row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, &m)| (m > 0).then_some(v as Node))
    }
}

impl AdjacencyMatrix for MultiGraph {
    fn edge_matrix(&self) -> &EdgeMatrix {
        &self.edges
    }
}

impl GraphFromMatrix for MultiGraph {
    /// Accepts any symmetric matrix whose edge count and degrees fit into [`NumEdges`]
    ///
    /// # Errors
    /// - [`GraphError::NotSymmetric`] naming the first asymmetric pair,
    /// - [`GraphError::TooManyEdges`] if the edge count or a degree overflows.
    fn try_from_matrix(matrix: EdgeMatrix) -> Result<Self, GraphError> {
        if let Some(Edge(u, v)) = matrix.first_asymmetry() {
            return Err(GraphError::NotSymmetric { u, v });
        }

        let mut graph = Self::new(matrix.number_of_nodes());
        graph.edges = matrix;
        graph.try_recount()?;
        Ok(graph)
    }
}

impl Display for MultiGraph {
    /// Renders the adjacency matrix as `n` lines of `n` space-separated integers
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.edges)
    }
}

impl std::fmt::Debug for MultiGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "MultiGraph(n = {}, m = {})",
            self.number_of_nodes(),
            self.number_of_edges()
        )?;
        write!(f, "{}", self.edges)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn degrees_count_loops_twice() {
        let graph = MultiGraph::try_from_rows([[1, 2, 0], [2, 0, 1], [0, 1, 3]]).unwrap();

        assert_eq!(graph.number_of_nodes(), 3);
        // 1 loop at 0, 2 parallel (0,1), 1 edge (1,2), 3 loops at 2
        assert_eq!(graph.number_of_edges(), 7);
        assert_eq!(graph.degrees().collect_vec(), vec![4, 3, 7]);
        assert_eq!(graph.odd_degree_vertices().collect_vec(), vec![1, 2]);
        assert_eq!(graph.max_degree(), 7);
    }

    #[test]
    fn neighbors_and_multiplicities() {
        let graph = MultiGraph::try_from_rows([[1, 2, 0], [2, 0, 1], [0, 1, 0]]).unwrap();

        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![0, 1]);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![1]);
        assert_eq!(
            graph.distinct_edges().collect_vec(),
            vec![Edge(0, 0), Edge(0, 1), Edge(1, 2)]
        );

        assert_eq!(graph.multiplicity_of(0, 1), 2);
        assert_eq!(graph.multiplicity_of(1, 0), 2);
        assert_eq!(graph.multiplicity_of(0, 3), 0);
        assert_eq!(graph.multiplicity_of(7, 7), 0);
        assert!(graph.has_self_loop(0));
        assert!(!graph.has_edge(0, 2));
    }

    #[test]
    fn rejects_asymmetric_matrix() {
        let err = MultiGraph::try_from_rows([[0, 1, 0], [1, 0, 2], [0, 1, 0]]).unwrap_err();
        assert!(matches!(err, GraphError::NotSymmetric { u: 1, v: 2 }));
    }

    #[test]
    fn rejects_overflowing_counts() {
        let big = NumEdges::MAX / 2 + 1;

        // a single self-loop entry whose degree overflows
        let err = MultiGraph::try_from_rows([[big]]).unwrap_err();
        assert!(matches!(err, GraphError::TooManyEdges));

        // every degree fits, the number of edges does not
        let half = NumEdges::MAX / 2;
        let err = MultiGraph::try_from_rows([[0, half, half], [half, 0, half], [half, half, 0]]);
        assert!(matches!(err, Err(GraphError::TooManyEdges)));

        let graph = MultiGraph::try_from_rows([[big - 1]]).unwrap();
        assert_eq!(graph.number_of_edges(), big - 1);
        assert_eq!(graph.degree_of(0), NumEdges::MAX - 1);
    }

    #[test]
    #[should_panic]
    fn update_edges_panics_on_overflow() {
        let mut graph = MultiGraph::new(2);
        graph.update_edges(|m| m.set_symmetric(0, 1, NumEdges::MAX));
        graph.update_edges(|m| m.set(0, 0, 1));
    }

    #[test]
    fn update_edges_recounts() {
        let mut graph = MultiGraph::new(4);
        assert!(graph.is_singleton());
        assert_eq!(graph.degrees().collect_vec(), vec![0; 4]);

        graph.update_edges(|m| m.fill_symmetric(|u, v| if u == v { 0 } else { 1 }));
        assert_eq!(graph.number_of_edges(), 6);
        assert_eq!(graph.degrees().collect_vec(), vec![3; 4]);

        graph.update_edges(|m| m.set_symmetric(0, 1, 0));
        assert_eq!(graph.number_of_edges(), 5);
        assert_eq!(graph.degree_of(0), 2);
        assert_eq!(graph.degree_of(1), 2);
    }

    #[test]
    fn display_renders_matrix() {
        let graph = MultiGraph::try_from_rows([[0, 2], [2, 0]]).unwrap();
        assert_eq!(graph.to_string(), "0 2\n2 0\n");
    }

    #[test]
    fn empty_graph() {
        let graph = MultiGraph::new(0);
        assert!(graph.is_empty());
        assert!(graph.is_singleton());
        assert_eq!(graph.to_string(), "");
    }
}
