/*!
`ueuler` finds and verifies Euler circuits in undirected multigraphs, i.e. closed walks that
traverse every edge of the graph exactly once.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

Graphs are **multigraphs**: any two nodes can be joined by several parallel edges, and a node can
have several self-loops. They are stored as dense, symmetric adjacency matrices of edge
multiplicities, see [`repr::EdgeMatrix`] and [`repr::MultiGraph`]. A self-loop is a single edge
but contributes `2` to the degree of its node.

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs
using the *Builder* pattern before running them on a provided graph.
The most commonly used functionality is also implemented via traits on the graphs themselves.

Algorithms never mutate the graph they run on: scratch state lives in a
[`TraversalSession`](algo::TraversalSession) that is created per run.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and the graph representations,
- [`algo`] includes traversal, connectivity, and the [`EulerGraph`](algo::EulerGraph) with its circuit algorithms,
- [`gens`] includes random generators for multigraphs and Euler graphs,
- [`io`] includes readers and writers for the adjacency matrix format.

In most use-cases, `use ueuler::{prelude::*, algo::*};` suffices for your needs.

```
use ueuler::{prelude::*, algo::*};

let graph = EulerGraph::try_from_rows([[0, 2], [2, 2]]).unwrap();

let circuit = graph.euler_circuit(EulerAlgorithm::Hierholzer).unwrap();
assert_eq!(circuit.to_string(), "0 1 1 1 0");
assert!(graph.confirm_euler(&circuit));
```

# Logging

Generators and algorithms emit events through [`tracing`](https://docs.rs/tracing); the library
never installs a subscriber itself.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod walk;

pub use edge::*;
pub use node::*;

/// `ueuler::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
