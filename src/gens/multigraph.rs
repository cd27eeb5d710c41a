use crate::gens::*;

/// Random multigraphs with bounded multiplicities.
///
/// Every unordered pair `u <= v` independently receives a multiplicity drawn uniformly from
/// `0..=k`; the diagonal (self-loops) is treated like any other pair. The matrix is mirrored,
/// so the result is always symmetric.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomMultiGraph {
    n: NumNodes,
    k: Multiplicity,
}

impl RandomMultiGraph {
    /// Creates a new generator for the edgeless graph without nodes
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configured number of nodes
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the configured bound on parallel edges
    pub fn max_multiplicity(&self) -> Multiplicity {
        self.k
    }

    /// Returns *true* if the number of edges and every degree of any graph this generator can
    /// produce fit into [`NumEdges`]
    pub fn fits_edge_counts(&self) -> bool {
        let (n, k) = (self.n as u128, self.k as u128);
        let max = NumEdges::MAX as u128;
        n * (n + 1) / 2 * k <= max && (n + 1) * k <= max
    }

    /// Overwrites every entry of `matrix` with fresh random multiplicities.
    /// ** Panics if `matrix` does not have `n` nodes or if `!self.fits_edge_counts()` **
    pub fn populate<R>(&self, rng: &mut R, matrix: &mut EdgeMatrix)
    where
        R: Rng,
    {
        assert_eq!(matrix.number_of_nodes(), self.n);
        assert!(self.fits_edge_counts());
        matrix.fill_symmetric(|_, _| rng.random_range(0..=self.k));
    }

    /// Generates a random multigraph.
    /// ** Panics if `!self.fits_edge_counts()` **
    pub fn generate<R>(&self, rng: &mut R) -> MultiGraph
    where
        R: Rng,
    {
        let mut graph = MultiGraph::new(self.n);
        graph.update_edges(|matrix| self.populate(rng, matrix));
        graph
    }
}

impl NumNodesGen for RandomMultiGraph {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl MaxParallelEdgesGen for RandomMultiGraph {
    fn max_parallel_edges(mut self, k: Multiplicity) -> Self {
        self.k = k;
        self
    }
}
