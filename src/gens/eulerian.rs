use itertools::Itertools;
use tracing::debug;

use crate::gens::*;

/// Random multigraphs that admit an Euler circuit.
///
/// Starts from a [`RandomMultiGraph`] and repairs it in rounds:
/// 1. while the graph is disconnected, all edges are drawn anew,
/// 2. every node `u < n - 1` loses its self-loops and, if its degree is odd, the multiplicity
///    `m` of its edge to the last node is replaced by `(m + 1) mod 2`, which flips the parity
///    of `u` (the last node then has even degree as well, as the degree sum is even),
/// 3. the self-loops of the last node are removed.
///
/// The replacement in step 2 may remove edges and disconnect the graph again, in which case
/// the next round starts. The number of random matrices drawn is bounded by
/// [`EulerGenerator::max_attempts`].
#[derive(Debug, Copy, Clone)]
pub struct EulerGenerator {
    base: RandomMultiGraph,
    max_attempts: usize,
}

impl Default for EulerGenerator {
    fn default() -> Self {
        Self {
            base: RandomMultiGraph::default(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl EulerGenerator {
    /// Number of random matrices drawn before giving up unless configured otherwise
    pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

    /// Creates a new generator with the default attempt budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the number of random matrices drawn (including the first one).
    /// A budget of `0` is treated as `1`.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Generates a random connected multigraph with even degrees and no self-loops
    ///
    /// # Errors
    /// - [`GraphError::NonPositiveVertexCount`] if no nodes were configured,
    /// - [`GraphError::Unsatisfiable`] if `n >= 2` and no parallel edges are allowed, as the
    ///   graph can never become connected,
    /// - [`GraphError::TooManyEdges`] if the generated graphs could have more edges (or larger
    ///   degrees) than [`NumEdges`] can hold,
    /// - [`GraphError::GenerationExhausted`] if the repair did not succeed within the attempt
    ///   budget (e.g. for `n = 2, k = 1` it never does).
    pub fn try_generate<R>(&self, rng: &mut R) -> Result<EulerGraph, GraphError>
    where
        R: Rng,
    {
        let n = self.base.number_of_nodes();
        let k = self.base.max_multiplicity();

        if n == 0 {
            return Err(GraphError::NonPositiveVertexCount);
        }
        if n >= 2 && k == 0 {
            return Err(GraphError::Unsatisfiable {
                nodes: n,
                max_parallel_edges: k,
            });
        }
        if !self.base.fits_edge_counts() {
            return Err(GraphError::TooManyEdges);
        }

        let mut graph = self.base.generate(rng);
        let mut attempts = 1;

        loop {
            while !graph.is_connected() {
                if attempts == self.max_attempts {
                    debug!(nodes = n, attempts, "giving up on Euler graph generation");
                    return Err(GraphError::GenerationExhausted { attempts });
                }
                attempts += 1;
                graph.update_edges(|matrix| self.base.populate(rng, matrix));
            }

            Self::repair_parity(&mut graph);
            if graph.is_connected() {
                break;
            }
            debug!(
                nodes = n,
                attempts, "parity repair disconnected the graph, starting over"
            );
        }

        debug!(
            nodes = n,
            edges = graph.number_of_edges(),
            attempts,
            "generated Euler graph"
        );
        Ok(EulerGraph::from_valid(graph))
    }

    /// Removes all self-loops and makes every degree even by only touching the edges to the
    /// last node
    fn repair_parity(graph: &mut MultiGraph) {
        let n = graph.number_of_nodes();
        let last = n - 1;
        let odd = graph
            .vertices()
            .map(|u| graph.degree_of(u) % 2 == 1)
            .collect_vec();

        graph.update_edges(|matrix| {
            for u in 0..last {
                matrix.set(u, u, 0);
                if odd[u.idx()] {
                    let m = matrix.get(u, last);
                    matrix.set_symmetric(u, last, (m + 1) % 2);
                }
            }
            matrix.set(last, last, 0);
        });
    }
}

impl NumNodesGen for EulerGenerator {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.base = self.base.nodes(n);
        self
    }
}

impl MaxParallelEdgesGen for EulerGenerator {
    fn max_parallel_edges(mut self, k: Multiplicity) -> Self {
        self.base = self.base.max_parallel_edges(k);
        self
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn assert_euler_precondition(graph: &EulerGraph) {
        assert!(graph.is_connected());
        assert_eq!(graph.odd_degree_vertices().count(), 0);
        for u in graph.vertices() {
            assert!(!graph.has_self_loop(u));
        }
    }

    #[test]
    fn generated_graphs_admit_euler_circuits() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in 1..=12 {
            for k in 1..=4 {
                if n == 2 && k == 1 {
                    continue;
                }

                for _ in 0..5 {
                    let graph = EulerGenerator::new()
                        .nodes(n)
                        .max_parallel_edges(k)
                        .try_generate(rng)
                        .unwrap();

                    assert_eq!(graph.number_of_nodes(), n);
                    assert_euler_precondition(&graph);
                    for u in graph.vertices() {
                        for v in graph.vertices() {
                            assert!(graph.multiplicity_of(u, v) <= k);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn single_node() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        for k in 0..3 {
            let graph = EulerGraph::random_euler_graph(rng, 1, k).unwrap();
            assert_eq!(graph.number_of_nodes(), 1);
            assert!(graph.is_singleton());
        }
    }

    #[test]
    fn unsatisfiable_parameters() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        assert!(matches!(
            EulerGenerator::new().try_generate(rng),
            Err(GraphError::NonPositiveVertexCount)
        ));
        assert!(matches!(
            EulerGraph::random_euler_graph(rng, 5, 0),
            Err(GraphError::Unsatisfiable {
                nodes: 5,
                max_parallel_edges: 0
            })
        ));
        assert!(matches!(
            EulerGraph::random_euler_graph(rng, 3, NumEdges::MAX),
            Err(GraphError::TooManyEdges)
        ));
    }

    #[test]
    fn attempts_are_bounded() {
        // with multiplicities 0 or 1, node 0 of a connected graph on two nodes always has odd
        // degree and the repair always removes the only edge
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let result = EulerGenerator::new()
            .nodes(2)
            .max_parallel_edges(1)
            .max_attempts(50)
            .try_generate(rng);

        assert!(matches!(
            result,
            Err(GraphError::GenerationExhausted { attempts: 50 })
        ));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let generator = EulerGenerator::new().nodes(9).max_parallel_edges(2);

        let first = generator
            .try_generate(&mut Pcg64Mcg::seed_from_u64(42))
            .unwrap();
        let second = generator
            .try_generate(&mut Pcg64Mcg::seed_from_u64(42))
            .unwrap();
        assert_eq!(first, second);
    }
}
