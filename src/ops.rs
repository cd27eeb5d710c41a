use std::ops::Range;

use crate::{error::GraphError, prelude::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    ///
    /// As nodes are never deleted, this is always the range `0..n` and does not borrow `self`.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph (parallel edges and self-loops count once each)
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & degrees of multigraphs
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns the number of parallel edges between `u` and `v`.
    /// Returns `0` if either endpoint is out of range.
    fn multiplicity_of(&self, u: Node, v: Node) -> Multiplicity;

    /// Returns the degree of `u` where self-loops count twice.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumEdges;

    /// Returns *true* if there is at least one edge between `u` and `v`
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.multiplicity_of(u, v) > 0
    }

    /// Returns *true* if `u` has at least one self-loop
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }

    /// Returns an iterator over the distinct neighbors of `u` in increasing order.
    /// A node with a self-loop is its own neighbor.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(move |&v| self.has_edge(u, v))
    }

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumEdges> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumEdges {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over all nodes of odd degree
    fn odd_degree_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) % 2 == 1)
    }

    /// Returns an iterator over the normalized edges `Edge(u, v)` with `u <= v` and
    /// multiplicity `> 0` (each distinct pair once, regardless of its multiplicity)
    fn distinct_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .filter(move |&v| u <= v)
                .map(move |v| Edge(u, v))
        })
    }
}

/// Graphs that are backed by an [`EdgeMatrix`]
pub trait AdjacencyMatrix: AdjacencyList + GraphEdgeOrder {
    /// Returns the underlying (symmetric) adjacency matrix
    fn edge_matrix(&self) -> &EdgeMatrix;
}

/// A super trait for creating a graph from an adjacency matrix.
///
/// Implementors validate the matrix against whatever invariants the graph type carries,
/// so that readers and generators can be generic over the graph they produce.
pub trait GraphFromMatrix: Sized {
    /// Tries to create a graph from the given matrix
    ///
    /// # Errors
    /// Returns an error if the matrix violates an invariant of `Self`.
    fn try_from_matrix(matrix: EdgeMatrix) -> Result<Self, GraphError>;

    /// Tries to create a graph from a list of rows.
    /// ** Panics if the rows do not form a square matrix **
    fn try_from_rows<R, I>(rows: R) -> Result<Self, GraphError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = Multiplicity>,
    {
        Self::try_from_matrix(EdgeMatrix::from_rows(rows))
    }
}
