/*!
Graph traversal.

Provides a depth-first search iterator that visits nodes in *preorder*, always descending into
the neighbor with the smallest index first. The order is identical to the one of the recursive
formulation, but the recursion is replaced by an explicit stack so that deep graphs cannot
overflow the call stack.
*/

use fixedbitset::FixedBitSet;

use super::*;

/// Depth-first search iterator starting at a given node.
///
/// Each stack frame stores a node together with the smallest neighbor that has not been
/// considered yet, so every node scans its row of the adjacency matrix exactly once.
pub struct DepthFirstSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: FixedBitSet,
    stack: Vec<(Node, Node)>,
    pending: Option<Node>,
}

impl<'a, G> DepthFirstSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new search starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = FixedBitSet::with_capacity(graph.len());
        visited.insert(start.idx());
        Self {
            graph,
            visited,
            stack: Vec::with_capacity(graph.len()),
            pending: Some(start),
        }
    }

    /// Checks if a given node `u` has already been discovered.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.contains(u.idx())
    }

    /// Returns the number of nodes discovered so far
    pub fn number_of_visited_nodes(&self) -> usize {
        self.visited.count_ones(..)
    }
}

impl<G> Iterator for DepthFirstSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.pending.take() {
            self.stack.push((start, 0));
            return Some(start);
        }

        let n = self.graph.number_of_nodes();
        while let Some((u, next)) = self.stack.last_mut() {
            let u = *u;
            let found =
                (*next..n).find(|&v| !self.visited.contains(v.idx()) && self.graph.has_edge(u, v));

            match found {
                Some(v) => {
                    *next = v + 1;
                    self.visited.insert(v.idx());
                    self.stack.push((v, 0));
                    return Some(v);
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.pending.is_some());
        (
            pending,
            Some(self.graph.len() - self.number_of_visited_nodes() + pending),
        )
    }
}

/// Exposes traversals directly on graphs
pub trait Traversal: AdjacencyList {
    /// Returns an iterator over all nodes reachable from `start` in depth-first preorder
    /// (ties broken by smaller node index).
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> DepthFirstSearch<'_, Self> {
        DepthFirstSearch::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList {}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn dfs_preorder() {
        // 0 - 2 - 1, 0 - 3, 2 - 3, 4 isolated
        let graph = MultiGraph::try_from_rows([
            [0, 0, 1, 1, 0],
            [0, 0, 1, 0, 0],
            [1, 1, 0, 1, 0],
            [1, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ])
        .unwrap();

        assert_eq!(graph.dfs(0).collect_vec(), vec![0, 2, 1, 3]);
        assert_eq!(graph.dfs(3).collect_vec(), vec![3, 0, 2, 1]);
        assert_eq!(graph.dfs(4).collect_vec(), vec![4]);
    }

    #[test]
    fn dfs_ignores_loops_and_multiplicities() {
        let graph = MultiGraph::try_from_rows([[2, 3, 0], [3, 1, 1], [0, 1, 0]]).unwrap();

        let mut search = graph.dfs(1);
        assert_eq!(search.next(), Some(1));
        assert_eq!(search.next(), Some(0));
        assert!(search.did_visit_node(0));
        assert!(!search.did_visit_node(2));
        assert_eq!(search.next(), Some(2));
        assert_eq!(search.next(), None);
        assert_eq!(search.number_of_visited_nodes(), 3);
    }

    #[test]
    fn dfs_long_path() {
        // assert that we can deal with very deep stacks
        let n: Node = 2_000;
        let mut graph = MultiGraph::new(n);
        graph.update_edges(|m| {
            for u in 1..n {
                m.set_symmetric(u - 1, u, 1);
            }
        });

        assert_eq!(graph.dfs(0).collect_vec(), (0..n).collect_vec());
    }
}
