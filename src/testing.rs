/// Every Euler algorithm has to produce confirmed circuits on random Euler graphs.
///
/// `nodes` and `parallel_edges` bound the generated graphs; exhaustive algorithms need small ones.
macro_rules! test_euler_algorithm {
    ($env:ident, $algorithm:ident, nodes: $max_n:literal, parallel_edges: $max_k:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::{algo::*, gens::*, prelude::*, walk::Walk};
            use itertools::Itertools;
            use rand::SeedableRng;
            use rand_pcg::Pcg64Mcg;

            const ALGORITHM: EulerAlgorithm = EulerAlgorithm::$algorithm;

            /// Creates a list of random Euler graphs with up to `$max_n` nodes
            fn random_euler_graphs(seed: u64) -> Vec<EulerGraph> {
                let rng = &mut Pcg64Mcg::seed_from_u64(seed);

                let mut graphs = Vec::new();
                for n in 1..=($max_n as NumNodes) {
                    for k in 1..=($max_k as Multiplicity) {
                        // two nodes with single edges can never be repaired
                        if n == 2 && k == 1 {
                            continue;
                        }

                        for _ in 0..3 {
                            graphs.push(EulerGraph::random_euler_graph(rng, n, k).unwrap());
                        }
                    }
                }
                graphs
            }

            #[test]
            fn circuits_are_confirmed() {
                for graph in random_euler_graphs(3) {
                    let circuit = graph.euler_circuit(ALGORITHM).unwrap();

                    assert_eq!(circuit.len(), graph.number_of_edges() as usize + 1);
                    assert_eq!(circuit.first(), Some(0));
                    assert!(circuit.is_circuit());
                    assert!(graph.confirm_euler(&circuit), "{graph:?}\n{circuit}");
                }
            }

            #[test]
            fn circuits_use_every_edge_once() {
                for graph in random_euler_graphs(5) {
                    let circuit = graph.euler_circuit(ALGORITHM).unwrap();

                    let mut used = EdgeMatrix::new(graph.number_of_nodes());
                    for Edge(u, v) in circuit.edges() {
                        assert!(graph.has_edge(u, v));
                        used.increment_symmetric(u, v);
                    }
                    assert_eq!(&used, graph.edge_matrix());
                }
            }

            #[test]
            fn altered_circuits_are_rejected() {
                for graph in random_euler_graphs(7) {
                    let n = graph.number_of_nodes();
                    let circuit = graph.euler_circuit(ALGORITHM).unwrap();
                    if n < 2 || circuit.len() < 3 {
                        continue;
                    }

                    let mut nodes = circuit.iter().collect_vec();
                    nodes[1] = (nodes[1] + 1) % n;
                    let altered = Walk::try_from_nodes(circuit.max_len(), nodes).unwrap();
                    assert!(!graph.confirm_euler(&altered));

                    let mut shortened = circuit.clone();
                    shortened.remove_last().unwrap();
                    shortened.remove_last().unwrap();
                    shortened.append(0).unwrap();
                    assert!(!graph.confirm_euler(&shortened));
                }
            }

            #[test]
            fn circuits_are_deterministic() {
                for graph in random_euler_graphs(11) {
                    assert_eq!(
                        graph.euler_circuit(ALGORITHM).unwrap(),
                        graph.euler_circuit(ALGORITHM).unwrap()
                    );
                }
            }
        }
    };
}

pub(crate) use test_euler_algorithm;
