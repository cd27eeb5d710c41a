/*!
# Node Representation

We choose `Node = u32` as the adjacency matrices this crate works with are quadratic in the
number of nodes and will never come close to `2^32` nodes.
Nodes are numbered `0..n` and double as row/column indices into those matrices.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Conversion helpers between [`Node`] and matrix indices
pub trait NodeIndex {
    /// Returns the node as an index into a row or column
    fn idx(self) -> usize;
}

impl NodeIndex for Node {
    #[inline]
    fn idx(self) -> usize {
        self as usize
    }
}
