/*!
# Graph Generators

This module provides builder-style generators for random multigraphs.

Each generator allows parameterized control over the structure of the graph (number of nodes,
maximum number of parallel edges between any two nodes) and draws all randomness from an
explicitly passed [`Rng`], so seeding the generator makes every run reproducible.
The typical usage workflow is:

1. Create a generator instance (e.g., `RandomMultiGraph::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).max_parallel_edges(k)`).
3. Generate a graph via `generate(rng)` (or `try_generate(rng)` for generators that can fail).

Supported models include:
- [`RandomMultiGraph`]: every unordered pair of nodes (self-loops included) independently gets a
  uniform multiplicity in `0..=k`,
- [`EulerGenerator`]: a random multigraph repaired until it is connected and all degrees are even.

The [`RandomGraph`] trait wraps both into constructors on the graph types themselves.

# Example
```
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use ueuler::{prelude::*, algo::*, gens::*};

let rng = &mut Pcg64Mcg::seed_from_u64(7);

let graph = EulerGraph::random_euler_graph(rng, 8, 3).unwrap();
let circuit = graph.euler_circuit(EulerAlgorithm::Hierholzer).unwrap();
assert!(graph.confirm_euler(&circuit));
```
*/

use rand::Rng;

use crate::{algo::*, error::GraphError, prelude::*};

mod eulerian;
mod multigraph;

pub use eulerian::*;
pub use multigraph::*;

/// Trait for generators that allow setting the number of nodes.
///
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow bounding the multiplicity of every node pair.
pub trait MaxParallelEdgesGen {
    /// Sets the maximum number of parallel edges (or self-loops) between any two nodes.
    fn max_parallel_edges(self, k: Multiplicity) -> Self;
}

/// Trait for building full graph instances from the random models of this module.
pub trait RandomGraph: Sized {
    /// Creates a random multigraph with `n` nodes and at most `k` parallel edges per pair.
    fn random_multigraph<R>(rng: &mut R, n: NumNodes, k: Multiplicity) -> Self
    where
        R: Rng;
}

impl RandomGraph for MultiGraph {
    fn random_multigraph<R>(rng: &mut R, n: NumNodes, k: Multiplicity) -> Self
    where
        R: Rng,
    {
        RandomMultiGraph::new()
            .nodes(n)
            .max_parallel_edges(k)
            .generate(rng)
    }
}

/// Trait for building random graphs that admit an Euler circuit.
pub trait RandomEulerGraph: Sized {
    /// Creates a random Euler graph with `n` nodes and at most `k` parallel edges per pair
    /// using the default attempt budget of [`EulerGenerator`].
    ///
    /// # Errors
    /// See [`EulerGenerator::try_generate`].
    fn random_euler_graph<R>(rng: &mut R, n: NumNodes, k: Multiplicity) -> Result<Self, GraphError>
    where
        R: Rng;
}

impl RandomEulerGraph for EulerGraph {
    fn random_euler_graph<R>(rng: &mut R, n: NumNodes, k: Multiplicity) -> Result<Self, GraphError>
    where
        R: Rng,
    {
        EulerGenerator::new()
            .nodes(n)
            .max_parallel_edges(k)
            .try_generate(rng)
    }
}
