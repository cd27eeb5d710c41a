/*!
Visitation bookkeeping for edge-consuming traversals.

A [`TraversalSession`] tracks which nodes have been visited and how many parallel edges
between any two nodes have been consumed so far. It is created at the start of a single
traversal and dropped at its end, so concurrent traversals of the same graph never share
scratch state.
*/

use fixedbitset::FixedBitSet;

use super::*;

/// Scratch state of one traversal over an [`AdjacencyMatrix`].
///
/// Maintains `visited_edges(u, v) + unvisited_edges(u, v) == multiplicity_of(u, v)` for all
/// pairs. Consuming a self-loop touches the diagonal entry once but reduces the unvisited
/// degree of its node by two.
#[derive(Debug, Clone)]
pub struct TraversalSession {
    visited_nodes: FixedBitSet,
    unvisited_degrees: Vec<NumEdges>,
    visited_edges: EdgeMatrix,
    unvisited_edges: EdgeMatrix,
}

impl TraversalSession {
    /// Opens a fresh session: no node visited, every edge unvisited
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyMatrix,
    {
        Self {
            visited_nodes: FixedBitSet::with_capacity(graph.len()),
            unvisited_degrees: graph.degrees().collect(),
            visited_edges: EdgeMatrix::new(graph.number_of_nodes()),
            unvisited_edges: graph.edge_matrix().clone(),
        }
    }

    /// Resets the session to the state of [`TraversalSession::new`]. Idempotent.
    /// ** Panics if `graph` has a different number of nodes than the one the session was opened on **
    pub fn clear<G>(&mut self, graph: &G)
    where
        G: AdjacencyMatrix,
    {
        assert_eq!(self.unvisited_degrees.len(), graph.len());

        self.visited_nodes.clear();
        for (degree, d) in self.unvisited_degrees.iter_mut().zip(graph.degrees()) {
            *degree = d;
        }
        self.visited_edges.fill_symmetric(|_, _| 0);
        self.unvisited_edges.clone_from(graph.edge_matrix());
    }

    /// Returns the number of nodes of the underlying graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.unvisited_edges.number_of_nodes()
    }

    /// Marks `u` as visited and returns *true* if it was not visited before
    pub fn visit_node(&mut self, u: Node) -> bool {
        !self.visited_nodes.put(u.idx())
    }

    /// Returns *true* if `u` was visited
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited_nodes.contains(u.idx())
    }

    /// Returns the number of visited nodes
    pub fn number_of_visited_nodes(&self) -> usize {
        self.visited_nodes.count_ones(..)
    }

    /// Returns the degree of `u` counting unvisited edges only
    pub fn unvisited_degree_of(&self, u: Node) -> NumEdges {
        self.unvisited_degrees[u.idx()]
    }

    /// Returns the number of unvisited parallel edges between `u` and `v`
    pub fn unvisited_edges_between(&self, u: Node, v: Node) -> Multiplicity {
        self.unvisited_edges.get(u, v)
    }

    /// Returns the number of visited parallel edges between `u` and `v`
    pub fn visited_edges_between(&self, u: Node, v: Node) -> Multiplicity {
        self.visited_edges.get(u, v)
    }

    /// Returns the smallest neighbor `v >= from` of `u` that is still joined to `u` by an
    /// unvisited edge
    pub fn next_unvisited_neighbor(&self, u: Node, from: Node) -> Option<Node> {
        let row = self.unvisited_edges.row(u);
        row.get(from.idx()..)?
            .iter()
            .position(|&m| m > 0)
            .map(|offset| from + offset as Node)
    }

    /// Marks one edge between `u` and `v` as visited.
    /// Returns *false* (and changes nothing) if there is no unvisited edge between them or
    /// either endpoint is out of range.
    pub fn consume_edge(&mut self, u: Node, v: Node) -> bool {
        let n = self.number_of_nodes();
        if u >= n || v >= n || !self.unvisited_edges.try_decrement_symmetric(u, v) {
            return false;
        }

        self.visited_edges.increment_symmetric(u, v);
        if u == v {
            self.unvisited_degrees[u.idx()] -= 2;
        } else {
            self.unvisited_degrees[u.idx()] -= 1;
            self.unvisited_degrees[v.idx()] -= 1;
        }
        true
    }

    /// Reverts [`TraversalSession::consume_edge`].
    /// Returns *false* (and changes nothing) if no edge between `u` and `v` was visited.
    pub fn restore_edge(&mut self, u: Node, v: Node) -> bool {
        let n = self.number_of_nodes();
        if u >= n || v >= n || !self.visited_edges.try_decrement_symmetric(u, v) {
            return false;
        }

        self.unvisited_edges.increment_symmetric(u, v);
        if u == v {
            self.unvisited_degrees[u.idx()] += 2;
        } else {
            self.unvisited_degrees[u.idx()] += 1;
            self.unvisited_degrees[v.idx()] += 1;
        }
        true
    }

    /// Returns *true* if every edge has been visited
    pub fn all_edges_consumed(&self) -> bool {
        self.unvisited_edges.is_zero()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> MultiGraph {
        MultiGraph::try_from_rows([[1, 2, 0], [2, 0, 1], [0, 1, 0]]).unwrap()
    }

    fn assert_edge_invariant(graph: &MultiGraph, session: &TraversalSession) {
        for u in graph.vertices() {
            for v in graph.vertices() {
                assert_eq!(
                    session.visited_edges_between(u, v) + session.unvisited_edges_between(u, v),
                    graph.multiplicity_of(u, v)
                );
            }
        }
    }

    #[test]
    fn consume_and_restore() {
        let graph = sample();
        let mut session = TraversalSession::new(&graph);
        assert_eq!(session.unvisited_degree_of(0), 4);

        assert!(session.consume_edge(0, 0));
        assert_eq!(session.unvisited_degree_of(0), 2);
        assert!(!session.consume_edge(0, 0));

        assert!(session.consume_edge(1, 0));
        assert_eq!(session.unvisited_edges_between(0, 1), 1);
        assert_eq!(session.visited_edges_between(1, 0), 1);
        assert_eq!(session.unvisited_degree_of(0), 1);
        assert_eq!(session.unvisited_degree_of(1), 2);
        assert_edge_invariant(&graph, &session);

        assert!(session.restore_edge(0, 1));
        assert!(!session.restore_edge(0, 1));
        assert!(!session.restore_edge(1, 2));
        assert_eq!(session.unvisited_edges_between(0, 1), 2);
        assert_eq!(session.unvisited_degree_of(1), 3);
        assert_edge_invariant(&graph, &session);

        assert!(!session.consume_edge(0, 2));
        assert!(!session.consume_edge(0, 7));
    }

    #[test]
    fn next_unvisited_neighbor() {
        let graph = sample();
        let mut session = TraversalSession::new(&graph);

        assert_eq!(session.next_unvisited_neighbor(0, 0), Some(0));
        assert_eq!(session.next_unvisited_neighbor(0, 1), Some(1));
        assert_eq!(session.next_unvisited_neighbor(0, 2), None);
        assert_eq!(session.next_unvisited_neighbor(0, 3), None);
        assert_eq!(session.next_unvisited_neighbor(0, 9), None);

        session.consume_edge(1, 2);
        assert_eq!(session.next_unvisited_neighbor(2, 0), None);
        assert_eq!(session.next_unvisited_neighbor(1, 1), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let graph = sample();
        let mut session = TraversalSession::new(&graph);

        assert!(session.visit_node(1));
        assert!(!session.visit_node(1));
        assert!(session.did_visit_node(1));
        session.consume_edge(0, 1);
        session.consume_edge(0, 1);
        session.consume_edge(2, 1);
        session.consume_edge(0, 0);
        assert!(session.all_edges_consumed());

        session.clear(&graph);
        session.clear(&graph);

        assert_eq!(session.number_of_visited_nodes(), 0);
        assert!(!session.all_edges_consumed());
        assert_edge_invariant(&graph, &session);
        for u in graph.vertices() {
            assert_eq!(session.unvisited_degree_of(u), graph.degree_of(u));
            assert_eq!(session.visited_edges_between(u, u), 0);
        }
    }
}
