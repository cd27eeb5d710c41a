/*!
# Errors

Error types of the crate, grouped by the stage in which they occur:
- [`GraphError`] is raised while *constructing* a graph (parsing, validating, generating),
- [`WalkError`] signals a failed local edit of a [`Walk`](crate::walk::Walk),
- [`EulerError`] is raised while *building* an Euler circuit.

Verifying a circuit never fails; see [`EulerGraph::confirm_euler`](crate::algo::EulerGraph::confirm_euler).
*/

use thiserror::Error;

use crate::{algo::EulerAlgorithm, prelude::*};

/// Errors raised while constructing a graph.
///
/// The `Display` output is a human readable reason naming the violated precondition.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A graph read from input must have at least one vertex
    #[error("Number of vertices must be positive")]
    NonPositiveVertexCount,

    /// The first negative entry found in an adjacency matrix
    #[error("Number of edges cannot be negative (entry {u},{v})")]
    NegativeEdgeCount { u: Node, v: Node },

    /// The first pair `u < v` with `edges[u][v] != edges[v][u]`
    #[error("Adjacency matrix is not symmetric (entries {u},{v} and {v},{u} differ)")]
    NotSymmetric { u: Node, v: Node },

    /// The number of edges or some degree does not fit into [`NumEdges`]
    #[error("Number of edges or a degree exceeds {}", NumEdges::MAX)]
    TooManyEdges,

    /// The graph is required to be connected
    #[error("Graph has no Euler circuit because it is not connected.")]
    NotConnected,

    /// The first vertex with odd degree
    #[error("Graph has no Euler circuit because vertex {vertex} had an odd degree.")]
    OddDegree { vertex: Node },

    /// The generator was asked for something that can never be produced
    #[error(
        "Cannot generate a connected Euler graph with {nodes} vertices and at most {max_parallel_edges} parallel edges"
    )]
    Unsatisfiable {
        nodes: NumNodes,
        max_parallel_edges: Multiplicity,
    },

    /// The generator ran out of regeneration attempts
    #[error("Gave up generating an Euler graph after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// Reading the input failed or the input is not a sequence of integers
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failed edit of a [`Walk`](crate::walk::Walk).
///
/// None of these occur when the circuit algorithms run on a valid Euler graph, as walks are
/// sized to hold exactly one complete circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalkError {
    #[error("Walk is full (at most {max_len} vertices)")]
    CapacityExhausted { max_len: usize },

    #[error("Walk is empty")]
    Empty,

    #[error("Walk to be inserted is not a circuit")]
    NotACircuit,

    #[error("Vertex {vertex} does not occur in the walk")]
    StartNotFound { vertex: Node },
}

/// Errors raised while building an Euler circuit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EulerError {
    /// The walk under construction rejected an edit; this is an internal invariant violation
    #[error("Walk invariant violated: {0}")]
    Walk(#[from] WalkError),

    /// A greedy sub-circuit got stuck away from its start vertex
    #[error("Sub-circuit starting at {start} got stuck at vertex {vertex}")]
    DeadEnd { start: Node, vertex: Node },

    /// The algorithm terminated without covering every edge
    #[error("{algorithm} did not find an Euler circuit")]
    CircuitNotFound { algorithm: EulerAlgorithm },

    /// Unknown name for an [`EulerAlgorithm`]
    #[error("Unknown Euler algorithm: {0}")]
    UnknownAlgorithm(String),
}
