use super::*;

/// Connectivity queries for undirected graphs
pub trait Connectivity: AdjacencyList {
    /// Returns *true* if every node can be reached from node `0`.
    ///
    /// The graph without nodes is considered connected, as is every graph with a single node.
    ///
    /// # Example
    /// ```
    /// use ueuler::{prelude::*, algo::*};
    ///
    /// let graph = MultiGraph::try_from_rows([[0, 1, 0], [1, 0, 0], [0, 0, 2]]).unwrap();
    /// assert!(!graph.is_connected());
    /// assert!(MultiGraph::new(1).is_connected());
    /// ```
    fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        self.dfs(0).count() == self.len()
    }

    /// Returns the nodes that cannot be reached from node `0`, in increasing order
    fn unreachable_from_first(&self) -> Vec<Node> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut search = self.dfs(0);
        search.by_ref().for_each(drop);
        self.vertices()
            .filter(|&u| !search.did_visit_node(u))
            .collect()
    }
}

impl<G> Connectivity for G where G: AdjacencyList {}
