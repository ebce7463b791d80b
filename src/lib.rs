/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

#[macro_use]
extern crate log;

pub use crate::batch::{
    run_batch, run_batch_with, BatchConfig, BatchReport, DEFAULT_FIRST, DEFAULT_INPUT_PATTERN,
    DEFAULT_LAST, DEFAULT_OUTPUT_PATTERN,
};
pub use crate::constants::*;
pub use crate::dense_graph::DenseGraph;
pub use crate::dense_graph::Edge;
pub use crate::error::{BatchError, PathError};
pub use crate::floyd_warshall::FloydWarshall;
pub use crate::problem_file::{round_half_up, Problem, MAX_NUM_VERTICES};
pub use crate::shortest_path::ShortestPath;

mod batch;
mod constants;
mod dense_graph;
mod error;
mod floyd_warshall;
mod problem_file;
mod shortest_path;

/// Calculates the shortest path weights between all pairs of vertices of the given graph.
pub fn calc_all_pairs(graph: &DenseGraph) -> FloydWarshall {
    FloydWarshall::new(graph)
}

/// Calculates the shortest path from `source` to `target`. Fails if a vertex is invalid or the
/// graph contains a negative cycle. If you need more than one path use `calc_all_pairs` once
/// and query the result instead.
pub fn calc_path(
    graph: &DenseGraph,
    source: NodeId,
    target: NodeId,
) -> Result<Option<ShortestPath>, PathError> {
    calc_all_pairs(graph).calc_path(graph, source, target)
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use rand::rngs::StdRng;

    use super::*;

    const TOLERANCE: Weight = 1e-9;

    #[test]
    fn routing_on_random_graph() {
        const REPEATS: usize = 100;
        for _i in 0..REPEATS {
            run_test_on_random_graph(0.0, 10.0);
        }
    }

    #[test]
    fn routing_on_random_graph_with_negative_weights() {
        const REPEATS: usize = 100;
        let mut num_negative_cycles = 0;
        for _i in 0..REPEATS {
            if run_test_on_random_graph(-2.0, 10.0) {
                num_negative_cycles += 1;
            }
        }
        debug!(
            "{} out of {} random graphs had a negative cycle",
            num_negative_cycles, REPEATS
        );
    }

    /// Compares all distances against Bellman-Ford, returns true if there was a negative cycle
    fn run_test_on_random_graph(min_weight: Weight, max_weight: Weight) -> bool {
        const NUM_VERTICES: usize = 20;
        const MEAN_DEGREE: f32 = 2.0;

        let mut rng = create_rng();
        let graph = DenseGraph::random(
            &mut rng,
            NUM_VERTICES,
            MEAN_DEGREE,
            min_weight,
            max_weight,
        );
        debug!("random graph: \n {:?}", graph);
        let fw = calc_all_pairs(&graph);
        let bellman_ford = BellmanFord::new(&graph);
        assert_eq!(
            bellman_ford.has_negative_cycle,
            fw.has_negative_cycle(),
            "\nNo agreement on negative cycle\n Failing graph:\n{:?}",
            graph
        );
        for source in 1..=NUM_VERTICES {
            for target in 1..=NUM_VERTICES {
                if fw.has_negative_cycle() {
                    assert_eq!(
                        fw.calc_weight(source, target),
                        Err(PathError::NegativeCycle)
                    );
                    continue;
                }
                let weight_fw = fw.calc_weight(source, target).unwrap();
                let weight_bf = bellman_ford.dist[source][target];
                assert!(
                    approx_eq(weight_fw, weight_bf),
                    "\nNo agreement for routing query from: {} to: {}\nFloyd-Warshall: {}\
                     \nBellman-Ford: {}\n Failing graph:\n{:?}",
                    source,
                    target,
                    weight_fw,
                    weight_bf,
                    graph
                );
                assert_eq!(
                    fw.has_path(source, target).unwrap(),
                    weight_fw < WEIGHT_MAX
                );
                if let Some(path) = fw.calc_path(&graph, source, target).unwrap() {
                    assert_eq!(source, path.get_nodes()[0]);
                    assert_eq!(target, *path.get_nodes().last().unwrap());
                    let sum: Weight = path.get_edges().iter().map(|e| e.weight.unwrap()).sum();
                    assert!(
                        approx_eq(sum, weight_fw),
                        "path weights do not add up: {} vs. {}",
                        sum,
                        weight_fw
                    );
                } else {
                    assert_eq!(WEIGHT_MAX, weight_fw);
                }
            }
        }
        fw.has_negative_cycle()
    }

    #[test]
    fn distance_to_self_and_triangle_inequality() {
        const NUM_VERTICES: usize = 15;
        for _ in 0..20 {
            let mut rng = create_rng();
            let graph = DenseGraph::random(&mut rng, NUM_VERTICES, 3.0, 0.0, 20.0);
            let fw = calc_all_pairs(&graph);
            assert!(!fw.has_negative_cycle());
            for v in 1..=NUM_VERTICES {
                assert_eq!(Ok(0.0), fw.calc_weight(v, v));
                for w in 1..=NUM_VERTICES {
                    for x in 1..=NUM_VERTICES {
                        let vw = fw.calc_weight(v, w).unwrap();
                        let vx = fw.calc_weight(v, x).unwrap();
                        let xw = fw.calc_weight(x, w).unwrap();
                        if vx < WEIGHT_MAX && xw < WEIGHT_MAX {
                            assert!(
                                vw <= vx + xw + TOLERANCE,
                                "triangle inequality violated for {} {} {}\
                                 \n Failing graph:\n{:?}",
                                v,
                                w,
                                x,
                                graph
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn deterministic_result() {
        const NUM_VERTICES: usize = 30;
        for _ in 0..10 {
            let mut rng = create_rng();
            let graph = DenseGraph::random(&mut rng, NUM_VERTICES, 2.0, -1.0, 10.0);
            let serialized1 = bincode::serialize(&calc_all_pairs(&graph)).unwrap();
            let serialized2 = bincode::serialize(&calc_all_pairs(&graph)).unwrap();
            if serialized1 != serialized2 {
                panic!("Calculating the same graph twice produced different results");
            }
        }
    }

    #[test]
    fn invalid_edges_do_not_change_anything() {
        let mut rng = create_rng();
        let graph = DenseGraph::random(&mut rng, 10, 2.0, 0.0, 5.0);
        let mut with_invalid = graph.clone();
        assert_eq!(0, with_invalid.add_edge(0, 3, -100.0));
        assert_eq!(0, with_invalid.add_edge(3, 11, -100.0));
        assert_eq!(0, with_invalid.add_edge(11, 11, -100.0));
        assert_eq!(graph.get_num_edges(), with_invalid.get_num_edges());
        assert_eq!(calc_all_pairs(&graph), calc_all_pairs(&with_invalid));
    }

    #[test]
    fn calc_single_path() {
        let mut g = DenseGraph::new(3);
        g.add_edge(1, 2, 1.0);
        g.add_edge(2, 3, 2.0);
        let path = calc_path(&g, 1, 3).unwrap().unwrap();
        assert_eq!(3.0, path.get_weight());
        assert_eq!(&vec![1, 2, 3], path.get_nodes());
        assert_eq!(Ok(None), calc_path(&g, 3, 1));
        g.add_edge(3, 1, -4.0);
        assert_eq!(Err(PathError::NegativeCycle), calc_path(&g, 3, 1));
    }

    /// Straightforward Bellman-Ford from every vertex, used as reference
    struct BellmanFord {
        dist: Vec<Vec<Weight>>,
        has_negative_cycle: bool,
    }

    impl BellmanFord {
        fn new(graph: &DenseGraph) -> Self {
            let n = graph.get_num_nodes();
            let mut edges: Vec<(NodeId, NodeId, Weight)> = Vec::new();
            for v in 1..n {
                for e in graph.get_edges(v) {
                    if let Some(weight) = e.weight {
                        edges.push((e.from, e.to, weight));
                    }
                }
            }
            let mut dist = vec![vec![WEIGHT_MAX; n]; n];
            let mut has_negative_cycle = false;
            for source in 1..n {
                let d = &mut dist[source];
                d[source] = WEIGHT_ZERO;
                for _ in 0..n {
                    for &(from, to, weight) in &edges {
                        if d[from] + weight < d[to] {
                            d[to] = d[from] + weight;
                        }
                    }
                }
                for &(from, to, weight) in &edges {
                    if d[from] + weight < d[to] {
                        has_negative_cycle = true;
                    }
                }
            }
            BellmanFord {
                dist,
                has_negative_cycle,
            }
        }
    }

    fn approx_eq(a: Weight, b: Weight) -> bool {
        if a == b {
            return true;
        }
        (a - b).abs() <= TOLERANCE * (1.0 + a.abs().max(b.abs()))
    }

    fn create_rng() -> StdRng {
        let seed = create_seed();
        create_rng_with_seed(seed)
    }

    fn create_rng_with_seed(seed: u64) -> StdRng {
        debug!("creating random number generator with seed: {}", seed);
        rand::SeedableRng::seed_from_u64(seed)
    }

    fn create_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    }
}
