use tracing::warn;

use super::*;

/// A stack frame of the backtracking search: the trail currently ends in `node` and the
/// neighbors below `next` have already been tried from here.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: Node,
    next: Node,
}

impl Frame {
    fn new(node: Node) -> Self {
        Self { node, next: 0 }
    }
}

/// Exhaustive trail extension with undo.
///
/// Starting at node `0`, the trail is extended along the unvisited edge to the smallest
/// possible neighbor. If all edges are used up, the search succeeds iff the trail is back at
/// node `0`; otherwise (or if the trail gets stuck) the last edge is undone and the next
/// larger neighbor is tried. The worst-case running time is exponential in the number of edges.
///
/// The recursion of the textbook formulation is replaced by an explicit stack of [`Frame`]s,
/// so the search depth is only bounded by memory.
pub struct Backtracking<'a, G>
where
    G: AdjacencyMatrix,
{
    graph: &'a G,
    session: TraversalSession,
    walk: Walk,
}

impl<'a, G> Backtracking<'a, G>
where
    G: AdjacencyMatrix,
{
    /// Prepares a search on `graph` with a fresh traversal session
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            session: TraversalSession::new(graph),
            walk: Walk::new(graph.number_of_edges() as usize + 1),
        }
    }

    /// Runs the search and returns the circuit
    ///
    /// # Errors
    /// Returns [`EulerError::CircuitNotFound`] if no trail from node `0` uses every edge and
    /// returns to node `0`, which cannot happen on a connected graph with even degrees.
    pub fn compute(mut self) -> Result<Walk, EulerError> {
        const START: Node = 0;

        if self.graph.is_empty() {
            return Err(EulerError::CircuitNotFound {
                algorithm: EulerAlgorithm::Backtracking,
            });
        }

        self.walk.append(START)?;
        let mut frames = vec![Frame::new(START)];
        let mut remaining = self.graph.number_of_edges();

        while let Some(frame) = frames.last_mut() {
            let u = frame.node;

            if remaining == 0 {
                if u == START {
                    return Ok(self.walk);
                }
            } else if let Some(v) = self.session.next_unvisited_neighbor(u, frame.next) {
                frame.next = v + 1;
                self.session.consume_edge(u, v);
                self.walk.append(v)?;
                remaining -= 1;
                frames.push(Frame::new(v));
                continue;
            }

            // dead end: undo the edge that led to `u`
            frames.pop();
            if let Some(parent) = frames.last() {
                self.session.restore_edge(parent.node, u);
                self.walk.remove_last()?;
                remaining += 1;
            }
        }

        warn!(
            nodes = self.graph.number_of_nodes(),
            edges = self.graph.number_of_edges(),
            "backtracking exhausted all trails"
        );
        Err(EulerError::CircuitNotFound {
            algorithm: EulerAlgorithm::Backtracking,
        })
    }
}
