/*!
# Walks

A [`Walk`] is a list of nodes in the order in which they are traversed; the edges between
consecutive nodes are implicit. Walks have a fixed capacity chosen at creation: a complete
Euler circuit over `m` edges visits `m + 1` nodes (the start node is repeated at the end).

`Walk` does not verify that consecutive nodes are adjacent in any graph. This is left to
[`EulerGraph::confirm_euler`](crate::algo::EulerGraph::confirm_euler).

# Splicing circuits
[`Walk::insert_circuit`] is the primitive behind Hierholzer's algorithm: a circuit starting at
`v` is spliced into the host right after the **last** occurrence of `v`.

```
use ueuler::walk::Walk;

let mut host = Walk::try_from_nodes(8, [0, 1, 2, 0]).unwrap();
let detour = Walk::try_from_nodes(3, [1, 3, 1]).unwrap();

host.insert_circuit(&detour).unwrap();
assert_eq!(host.to_string(), "0 1 3 1 2 0");
assert!(host.is_circuit());
```
*/

use std::fmt::Display;

use itertools::Itertools;

use crate::{error::WalkError, *};

/// An ordered sequence of at most `max_len` nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    max_len: usize,
    nodes: Vec<Node>,
}

impl Walk {
    /// Creates an empty walk that can hold at most `max_len` nodes
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len,
            nodes: Vec::with_capacity(max_len),
        }
    }

    /// Creates a walk of capacity `max_len` holding the given nodes
    ///
    /// # Errors
    /// Returns [`WalkError::CapacityExhausted`] if there are more than `max_len` nodes.
    pub fn try_from_nodes<I>(max_len: usize, nodes: I) -> Result<Self, WalkError>
    where
        I: IntoIterator<Item = Node>,
    {
        let mut walk = Self::new(max_len);
        for u in nodes {
            walk.append(u)?;
        }
        Ok(walk)
    }

    /// Removes all nodes; the capacity is kept
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Returns the number of nodes in the walk.
    /// Note that in circuits the starting node is counted twice.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the maximum number of nodes
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns *true* if the walk has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns *true* if the walk consists of exactly one node
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Returns *true* if the walk is non-empty and ends where it starts
    pub fn is_circuit(&self) -> bool {
        match (self.nodes.first(), self.nodes.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Returns the first node of the walk
    pub fn first(&self) -> Option<Node> {
        self.nodes.first().copied()
    }

    /// Returns the last node of the walk
    pub fn last(&self) -> Option<Node> {
        self.nodes.last().copied()
    }

    /// Returns the nodes of the walk as a slice
    pub fn as_slice(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns an iterator over the nodes of the walk
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied()
    }

    /// Returns an iterator over the traversed edges, i.e. all pairs of consecutive nodes
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.iter().tuple_windows().map(|(&u, &v)| Edge(u, v))
    }

    /// Adds a node to the end of the walk
    ///
    /// # Errors
    /// Returns [`WalkError::CapacityExhausted`] if the walk is full.
    pub fn append(&mut self, u: Node) -> Result<(), WalkError> {
        if self.nodes.len() == self.max_len {
            return Err(WalkError::CapacityExhausted {
                max_len: self.max_len,
            });
        }
        self.nodes.push(u);
        Ok(())
    }

    /// Removes and returns the last node of the walk
    ///
    /// # Errors
    /// Returns [`WalkError::Empty`] if there is nothing to remove.
    pub fn remove_last(&mut self) -> Result<Node, WalkError> {
        self.nodes.pop().ok_or(WalkError::Empty)
    }

    /// Returns the node at position `n` (starting at `0`).
    ///
    /// Position `len()` wraps around to the first node, so that the closing node of a circuit
    /// can be queried even if it is not stored explicitly. Any other position past the end
    /// yields `None`.
    pub fn vertex_at(&self, n: usize) -> Option<Node> {
        if n == self.nodes.len() {
            self.first()
        } else {
            self.nodes.get(n).copied()
        }
    }

    /// Splices `circuit` into this walk.
    ///
    /// Let `v` be the first node of `circuit`. The nodes of `circuit` following `v` are inserted
    /// right after the **last** occurrence of `v` in this walk. An empty walk is first seeded
    /// with `v`. All checks happen before the walk is modified, so on error the walk is unchanged.
    ///
    /// # Errors
    /// - [`WalkError::NotACircuit`] if `circuit` is not a circuit,
    /// - [`WalkError::CapacityExhausted`] if the result would exceed `max_len`,
    /// - [`WalkError::StartNotFound`] if `v` does not occur in a non-empty walk.
    pub fn insert_circuit(&mut self, circuit: &Walk) -> Result<(), WalkError> {
        let Some(start) = circuit.first().filter(|_| circuit.is_circuit()) else {
            return Err(WalkError::NotACircuit);
        };

        let seed = usize::from(self.is_empty());
        if self.len() + seed + circuit.len() - 1 > self.max_len {
            return Err(WalkError::CapacityExhausted {
                max_len: self.max_len,
            });
        }

        if seed == 1 {
            self.nodes.push(start);
        }

        let insertion = self
            .nodes
            .iter()
            .rposition(|&u| u == start)
            .ok_or(WalkError::StartNotFound { vertex: start })?;

        self.nodes.splice(
            (insertion + 1)..(insertion + 1),
            circuit.nodes[1..].iter().copied(),
        );
        Ok(())
    }
}

impl Display for Walk {
    /// Nodes separated by single blanks
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nodes.iter().join(" "))
    }
}
