/*!
# Representations

Undirected multigraphs are stored as dense adjacency matrices of edge multiplicities:
- [`EdgeMatrix`] is the plain `n x n` matrix (also used as scratch space by traversals),
- [`MultiGraph`] wraps a symmetric `EdgeMatrix` and keeps the number of edges and all
  degrees in sync with it.

Graphs with additional invariants (such as [`EulerGraph`](crate::algo::EulerGraph)) wrap a
`MultiGraph` and only hand out shared references to it.
*/

use crate::{ops::*, *};

mod matrix;
mod multigraph;

pub use matrix::*;
pub use multigraph::*;
