use tracing::{trace, warn};

use super::*;

/// Hierholzer's algorithm.
///
/// Greedily follows unvisited edges (smallest neighbor first) from node `0` until it gets
/// stuck, which on a graph with even degrees can only happen back at the start. The resulting
/// circuit is then repeatedly extended: pick a node on the circuit that still has unvisited
/// edges, build a sub-circuit from it the same way and splice it in with
/// [`Walk::insert_circuit`]. Every round consumes at least one edge.
///
/// Each node keeps a cursor to the smallest neighbor that might still have unvisited edges,
/// so the rows of the adjacency matrix are scanned only once overall.
pub struct Hierholzer<'a, G>
where
    G: AdjacencyMatrix,
{
    graph: &'a G,
    session: TraversalSession,
    cursors: Vec<Node>,
    circuit: Walk,
}

impl<'a, G> Hierholzer<'a, G>
where
    G: AdjacencyMatrix,
{
    /// Prepares a search on `graph` with a fresh traversal session
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            session: TraversalSession::new(graph),
            cursors: vec![0; graph.len()],
            circuit: Walk::new(graph.number_of_edges() as usize + 1),
        }
    }

    /// Runs the algorithm and returns the circuit
    ///
    /// # Errors
    /// - [`EulerError::DeadEnd`] if a sub-circuit gets stuck away from its start,
    /// - [`EulerError::CircuitNotFound`] if edges remain unreachable from node `0`.
    ///
    /// Neither can happen on a connected graph with even degrees.
    pub fn compute(mut self) -> Result<Walk, EulerError> {
        if self.graph.is_empty() {
            return Err(EulerError::CircuitNotFound {
                algorithm: EulerAlgorithm::Hierholzer,
            });
        }

        let mut sub_circuit = Walk::new(self.circuit.max_len());
        let mut start = Some(0);

        while let Some(u) = start {
            sub_circuit.clear();
            self.close_circuit(u, &mut sub_circuit)?;

            trace!(start = u, len = sub_circuit.len(), "splicing sub-circuit");
            self.circuit.insert_circuit(&sub_circuit)?;

            start = self.next_start();
        }

        if !self.session.all_edges_consumed() {
            warn!(
                nodes = self.graph.number_of_nodes(),
                edges = self.graph.number_of_edges(),
                "edges left after Hierholzer terminated"
            );
            return Err(EulerError::CircuitNotFound {
                algorithm: EulerAlgorithm::Hierholzer,
            });
        }

        Ok(self.circuit)
    }

    /// Follows unvisited edges from `start` until stuck and records the nodes in `walk`
    fn close_circuit(&mut self, start: Node, walk: &mut Walk) -> Result<(), EulerError> {
        walk.append(start)?;
        self.session.visit_node(start);

        let mut u = start;
        while let Some(v) = self
            .session
            .next_unvisited_neighbor(u, self.cursors[u.idx()])
        {
            self.cursors[u.idx()] = v;
            self.session.consume_edge(u, v);
            self.session.visit_node(v);
            walk.append(v)?;
            u = v;
        }

        if u != start {
            return Err(EulerError::DeadEnd { start, vertex: u });
        }
        Ok(())
    }

    /// Returns a node on the circuit that still has unvisited edges
    fn next_start(&self) -> Option<Node> {
        self.graph
            .vertices()
            .find(|&u| self.session.did_visit_node(u) && self.session.unvisited_degree_of(u) > 0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splices_sub_circuits() {
        // Triangles 0-1-2 and 1-3-4 share node 1
        let graph = MultiGraph::try_from_rows([
            [0, 1, 1, 0, 0],
            [1, 0, 1, 1, 1],
            [1, 1, 0, 0, 0],
            [0, 1, 0, 0, 1],
            [0, 1, 0, 1, 0],
        ])
        .unwrap();

        let walk = Hierholzer::new(&graph).compute().unwrap();
        assert_eq!(walk.as_slice(), &[0, 1, 3, 4, 1, 2, 0]);
    }

    #[test]
    fn loops_and_parallel_edges() {
        let graph = MultiGraph::try_from_rows([[1, 2], [2, 2]]).unwrap();

        let walk = Hierholzer::new(&graph).compute().unwrap();
        assert_eq!(walk.len(), 6);
        assert_eq!(walk.as_slice(), &[0, 0, 1, 1, 1, 0]);
    }

    #[test]
    fn reports_dead_ends_and_unreachable_edges() {
        let path = MultiGraph::try_from_rows([[0, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap();
        assert_eq!(
            Hierholzer::new(&path).compute(),
            Err(EulerError::DeadEnd {
                start: 0,
                vertex: 2
            })
        );

        let disconnected = MultiGraph::try_from_rows([[0, 0], [0, 1]]).unwrap();
        assert_eq!(
            Hierholzer::new(&disconnected).compute(),
            Err(EulerError::CircuitNotFound {
                algorithm: EulerAlgorithm::Hierholzer
            })
        );
    }
}
