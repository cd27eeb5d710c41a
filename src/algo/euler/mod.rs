/*!
# Euler Circuits

An Euler circuit is a closed walk that traverses every edge of a graph exactly once. An
undirected multigraph admits one iff it is connected and every node has even degree (self-loops
contribute `2` to the degree). [`EulerGraph`] is a [`MultiGraph`] that is guaranteed to satisfy
this precondition; it can only be obtained through validation
([`TryFrom<MultiGraph>`](EulerGraph#impl-TryFrom<MultiGraph>-for-EulerGraph),
[`GraphFromMatrix`], the [`io`](crate::io) readers) or the
[`EulerGenerator`](crate::gens::EulerGenerator).

Two algorithms construct circuits, selected by [`EulerAlgorithm`]:
- [`Backtracking`]: exhaustive trail extension with undo (exponential worst case),
- [`Hierholzer`]: greedy sub-circuits spliced together (linear in the size of the matrix).

[`EulerGraph::confirm_euler`] verifies any given walk independently of how it was built.

# Example
```
use ueuler::{prelude::*, algo::*};

let graph = EulerGraph::try_from_rows([[0, 1, 1], [1, 0, 1], [1, 1, 0]]).unwrap();

for algorithm in EulerAlgorithm::ALL {
    let circuit = graph.euler_circuit(algorithm).unwrap();
    assert_eq!(circuit.to_string(), "0 1 2 0");
    assert!(graph.confirm_euler(&circuit));
}
```
*/

use std::{fmt::Display, str::FromStr};

use tracing::debug;

use super::*;
use crate::testing::test_euler_algorithm;

mod backtracking;
mod hierholzer;

pub use backtracking::*;
pub use hierholzer::*;

/// Selects the algorithm used by [`EulerGraph::euler_circuit`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EulerAlgorithm {
    /// Exhaustive search, see [`Backtracking`]
    Backtracking,
    /// Sub-circuit splicing, see [`Hierholzer`]
    Hierholzer,
}

impl EulerAlgorithm {
    /// All available algorithms
    pub const ALL: [EulerAlgorithm; 2] = [EulerAlgorithm::Backtracking, EulerAlgorithm::Hierholzer];
}

impl Display for EulerAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EulerAlgorithm::Backtracking => write!(f, "backtracking"),
            EulerAlgorithm::Hierholzer => write!(f, "Hierholzer"),
        }
    }
}

impl FromStr for EulerAlgorithm {
    type Err = EulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "backtracking" | "backtrack" => Ok(EulerAlgorithm::Backtracking),
            "hierholzer" => Ok(EulerAlgorithm::Hierholzer),
            _ => Err(EulerError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// An undirected multigraph that is connected, has at least one node and only nodes of
/// even degree.
#[derive(Clone, PartialEq, Eq)]
pub struct EulerGraph {
    graph: MultiGraph,
}

impl EulerGraph {
    /// Wraps a graph that is already known to satisfy the precondition
    pub(crate) fn from_valid(graph: MultiGraph) -> Self {
        debug_assert!(Self::validate(&graph).is_ok());
        Self { graph }
    }

    /// Checks the Euler precondition
    fn validate(graph: &MultiGraph) -> Result<(), GraphError> {
        if graph.is_empty() {
            return Err(GraphError::NonPositiveVertexCount);
        }

        if !graph.is_connected() {
            return Err(GraphError::NotConnected);
        }

        if let Some(vertex) = graph.odd_degree_vertices().next() {
            return Err(GraphError::OddDegree { vertex });
        }

        Ok(())
    }

    /// Returns the underlying multigraph
    pub fn as_multigraph(&self) -> &MultiGraph {
        &self.graph
    }

    /// Consumes `self` and returns the underlying multigraph
    pub fn into_inner(self) -> MultiGraph {
        self.graph
    }

    /// Builds an Euler circuit starting and ending at node `0` with the given algorithm.
    ///
    /// The returned walk holds `number_of_edges() + 1` nodes.
    ///
    /// # Errors
    /// Only if the algorithm violates one of its invariants; on an `EulerGraph` this indicates
    /// a bug rather than a property of the input.
    pub fn euler_circuit(&self, algorithm: EulerAlgorithm) -> Result<Walk, EulerError> {
        let circuit = match algorithm {
            EulerAlgorithm::Backtracking => Backtracking::new(self).compute(),
            EulerAlgorithm::Hierholzer => Hierholzer::new(self).compute(),
        }?;

        debug!(
            %algorithm,
            nodes = self.number_of_nodes(),
            edges = self.number_of_edges(),
            "found Euler circuit"
        );
        Ok(circuit)
    }

    /// Returns *true* if `walk` is an Euler circuit of this graph, i.e. a circuit with
    /// `number_of_edges() + 1` nodes that uses every edge exactly once.
    ///
    /// The walk is replayed on a fresh traversal session. Any step without an unused edge
    /// (a missing edge, an edge used too often, or a node out of range) rejects the walk.
    /// Never fails.
    ///
    /// # Example
    /// ```
    /// use ueuler::{prelude::*, algo::*, walk::Walk};
    ///
    /// let graph = EulerGraph::try_from_rows([[0, 2], [2, 0]]).unwrap();
    ///
    /// assert!(graph.confirm_euler(&Walk::try_from_nodes(3, [0, 1, 0]).unwrap()));
    /// assert!(!graph.confirm_euler(&Walk::try_from_nodes(3, [0, 1, 1]).unwrap()));
    /// ```
    pub fn confirm_euler(&self, walk: &Walk) -> bool {
        if !walk.is_circuit() || walk.len() != self.number_of_edges() as usize + 1 {
            return false;
        }

        let mut session = TraversalSession::new(self);
        walk.edges().all(|Edge(u, v)| session.consume_edge(u, v)) && session.all_edges_consumed()
    }
}

impl TryFrom<MultiGraph> for EulerGraph {
    type Error = GraphError;

    /// # Errors
    /// - [`GraphError::NonPositiveVertexCount`] for the graph without nodes,
    /// - [`GraphError::NotConnected`] if the graph is disconnected,
    /// - [`GraphError::OddDegree`] naming the first node of odd degree.
    fn try_from(graph: MultiGraph) -> Result<Self, Self::Error> {
        Self::validate(&graph)?;
        Ok(Self { graph })
    }
}

impl GraphFromMatrix for EulerGraph {
    fn try_from_matrix(matrix: EdgeMatrix) -> Result<Self, GraphError> {
        MultiGraph::try_from_matrix(matrix)?.try_into()
    }
}

impl GraphNodeOrder for EulerGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }
}

impl GraphEdgeOrder for EulerGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.graph.number_of_edges()
    }
}

impl AdjacencyList for EulerGraph {
    fn multiplicity_of(&self, u: Node, v: Node) -> Multiplicity {
        self.graph.multiplicity_of(u, v)
    }

    fn degree_of(&self, u: Node) -> NumEdges {
        self.graph.degree_of(u)
    }

    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.graph.neighbors_of(u)
    }
}

impl AdjacencyMatrix for EulerGraph {
    fn edge_matrix(&self) -> &EdgeMatrix {
        self.graph.edge_matrix()
    }
}

impl Display for EulerGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.graph)
    }
}

impl std::fmt::Debug for EulerGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Euler{:?}", self.graph)
    }
}

test_euler_algorithm!(test_backtracking, Backtracking, nodes: 5, parallel_edges: 2);
test_euler_algorithm!(test_hierholzer, Hierholzer, nodes: 30, parallel_edges: 4);

#[cfg(test)]
mod test {
    use super::*;

    fn circuits(graph: &EulerGraph) -> Vec<Walk> {
        EulerAlgorithm::ALL
            .into_iter()
            .map(|algorithm| graph.euler_circuit(algorithm).unwrap())
            .collect()
    }

    #[test]
    fn triangle() {
        let graph = EulerGraph::try_from_rows([[0, 1, 1], [1, 0, 1], [1, 1, 0]]).unwrap();
        for circuit in circuits(&graph) {
            assert_eq!(circuit.as_slice(), &[0, 1, 2, 0]);
            assert!(graph.confirm_euler(&circuit));
        }
    }

    #[test]
    fn double_edge() {
        let graph = EulerGraph::try_from_rows([[0, 2], [2, 0]]).unwrap();
        for circuit in circuits(&graph) {
            assert_eq!(circuit.as_slice(), &[0, 1, 0]);
            assert!(graph.confirm_euler(&circuit));
        }
    }

    #[test]
    fn self_loops() {
        // a single self-loop
        let graph = EulerGraph::try_from_rows([[1]]).unwrap();
        assert_eq!(graph.degree_of(0), 2);
        for circuit in circuits(&graph) {
            assert_eq!(circuit.as_slice(), &[0, 0]);
            assert!(graph.confirm_euler(&circuit));
        }

        // entry 2 denotes two self-loops
        let graph = EulerGraph::try_from_rows([[2]]).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        for circuit in circuits(&graph) {
            assert_eq!(circuit.as_slice(), &[0, 0, 0]);
            assert!(graph.confirm_euler(&circuit));
        }
    }

    #[test]
    fn edgeless_single_node() {
        let graph = EulerGraph::try_from_rows([[0]]).unwrap();
        for circuit in circuits(&graph) {
            assert_eq!(circuit.as_slice(), &[0]);
            assert!(graph.confirm_euler(&circuit));
        }
    }

    #[test]
    fn rejects_disconnected_graphs() {
        let err = EulerGraph::try_from_rows([[0, 0], [0, 0]]).unwrap_err();
        assert!(matches!(err, GraphError::NotConnected));
        assert!(err.to_string().contains("not connected"));

        let err = EulerGraph::try_from_rows([
            [0, 1, 1, 0, 0, 0],
            [1, 0, 1, 0, 0, 0],
            [1, 1, 0, 0, 0, 0],
            [0, 0, 0, 0, 1, 1],
            [0, 0, 0, 1, 0, 1],
            [0, 0, 0, 1, 1, 0],
        ])
        .unwrap_err();
        assert!(matches!(err, GraphError::NotConnected));
    }

    #[test]
    fn rejects_odd_degree() {
        // 0 - 1 - 2 with a loop at 1: degrees 1, 4, 1
        let err = EulerGraph::try_from_rows([[0, 1, 0], [1, 1, 1], [0, 1, 0]]).unwrap_err();
        assert!(matches!(err, GraphError::OddDegree { vertex: 0 }));
        assert_eq!(
            err.to_string(),
            "Graph has no Euler circuit because vertex 0 had an odd degree."
        );

        let err = EulerGraph::try_from_rows([[0, 2, 0], [2, 0, 1], [0, 1, 2]]).unwrap_err();
        assert!(matches!(err, GraphError::OddDegree { vertex: 1 }));
    }

    #[test]
    fn rejects_empty_graph() {
        let err = EulerGraph::try_from(MultiGraph::new(0)).unwrap_err();
        assert!(matches!(err, GraphError::NonPositiveVertexCount));
    }

    #[test]
    fn rejects_asymmetric_matrix() {
        let err = EulerGraph::try_from_rows([[0, 1], [2, 0]]).unwrap_err();
        assert!(matches!(err, GraphError::NotSymmetric { u: 0, v: 1 }));
    }

    #[test]
    fn confirm_rejects_invalid_walks() {
        let graph = EulerGraph::try_from_rows([[0, 1, 1], [1, 0, 1], [1, 1, 0]]).unwrap();
        let walk = |nodes: &[Node]| Walk::try_from_nodes(8, nodes.iter().copied()).unwrap();

        assert!(graph.confirm_euler(&walk(&[1, 2, 0, 1])));
        assert!(graph.confirm_euler(&walk(&[0, 2, 1, 0])));

        // not a circuit
        assert!(!graph.confirm_euler(&walk(&[0, 1, 2, 1])));
        assert!(!graph.confirm_euler(&walk(&[])));
        // wrong length
        assert!(!graph.confirm_euler(&walk(&[0, 1, 0])));
        assert!(!graph.confirm_euler(&walk(&[0, 1, 2, 0, 1, 2, 0])));
        // reuses 0-1 and misses 1-2
        assert!(!graph.confirm_euler(&walk(&[0, 1, 0, 2, 0])));
        // uses edges that do not exist
        assert!(!graph.confirm_euler(&walk(&[0, 0, 1, 0])));
        assert!(!graph.confirm_euler(&walk(&[0, 7, 2, 0])));
    }

    #[test]
    fn confirm_rejects_missing_traversal() {
        // 0 = 1 doubled, plus triangle 0 - 2 - 3
        let graph =
            EulerGraph::try_from_rows([[0, 2, 1, 1], [2, 0, 0, 0], [1, 0, 0, 1], [1, 0, 1, 0]])
                .unwrap();
        assert_eq!(graph.number_of_edges(), 5);

        let complete = Walk::try_from_nodes(6, [0, 1, 0, 2, 3, 0]).unwrap();
        assert!(graph.confirm_euler(&complete));

        let reordered = Walk::try_from_nodes(6, [0, 2, 3, 0, 1, 0]).unwrap();
        assert!(graph.confirm_euler(&reordered));

        // right length, but skips both edges 0 - 1 and uses 2 - 3 twice
        let fabricated = Walk::try_from_nodes(6, [0, 2, 3, 2, 3, 0]).unwrap();
        assert!(!graph.confirm_euler(&fabricated));

        // misses the closing edge 3 - 0
        let fabricated = Walk::try_from_nodes(6, [0, 1, 0, 2, 3]).unwrap();
        assert!(!graph.confirm_euler(&fabricated));
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(
            "hierholzer".parse::<EulerAlgorithm>(),
            Ok(EulerAlgorithm::Hierholzer)
        );
        assert_eq!(
            "Backtracking".parse::<EulerAlgorithm>(),
            Ok(EulerAlgorithm::Backtracking)
        );
        assert_eq!(
            "fleury".parse::<EulerAlgorithm>(),
            Err(EulerError::UnknownAlgorithm("fleury".to_string()))
        );
        assert_eq!(EulerAlgorithm::Hierholzer.to_string(), "Hierholzer");
        assert_eq!(EulerAlgorithm::Backtracking.to_string(), "backtracking");
    }

    #[test]
    fn circuits_do_not_disturb_each_other() {
        let graph = EulerGraph::try_from_rows([[2, 1, 1], [1, 0, 1], [1, 1, 2]]).unwrap();
        let first = graph.euler_circuit(EulerAlgorithm::Hierholzer).unwrap();
        let second = graph.euler_circuit(EulerAlgorithm::Hierholzer).unwrap();

        assert_eq!(first, second);
        assert!(graph.confirm_euler(&first));
        assert!(graph.confirm_euler(&first));
    }
}
