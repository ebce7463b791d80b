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

use serde::{Deserialize, Serialize};

use crate::constants::{EdgeId, NodeId, Weight, INVALID_EDGE, WEIGHT_MAX, WEIGHT_ZERO};
use crate::dense_graph::DenseGraph;
use crate::error::PathError;
use crate::shortest_path::ShortestPath;

/// Relative tolerance used when verifying the computed distances, summing the same weights in
/// a different order can change the last bits of the result
const CHECK_TOLERANCE: Weight = 1e-9;

/// All-pairs shortest paths of a `DenseGraph`, computed once on construction.
///
/// Distances and predecessors are kept in flat `num_nodes * num_nodes` tables using the same
/// indexing as the graph's edge table, so a predecessor is simply the `EdgeId` of the last edge
/// on the shortest path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FloydWarshall {
    num_nodes: usize,
    dist: Vec<Weight>,
    edge_to: Vec<EdgeId>,
    has_negative_cycle: bool,
}

impl FloydWarshall {
    pub fn new(graph: &DenseGraph) -> Self {
        let num_nodes = graph.get_num_nodes();
        let mut fw = FloydWarshall {
            num_nodes,
            dist: vec![WEIGHT_MAX; num_nodes * num_nodes],
            edge_to: vec![INVALID_EDGE; num_nodes * num_nodes],
            has_negative_cycle: false,
        };
        fw.prepare(graph);
        #[cfg(debug_assertions)]
        {
            if let Err(e) = fw.check(graph) {
                panic!("{}\nFailing graph:\n{:?}", e, graph);
            }
        }
        fw
    }

    fn prepare(&mut self, graph: &DenseGraph) {
        let n = self.num_nodes;
        for v in 1..n {
            for e in graph.get_edges(v) {
                if let Some(weight) = e.weight {
                    let idx = e.from * n + e.to;
                    self.dist[idx] = weight;
                    self.edge_to[idx] = graph.edge_id(e.from, e.to);
                }
            }
            // the empty path from v to itself, unless there is a negative loop edge already
            let idx = v * n + v;
            if self.dist[idx] >= WEIGHT_ZERO {
                self.dist[idx] = WEIGHT_ZERO;
                self.edge_to[idx] = INVALID_EDGE;
            }
        }

        for i in 1..n {
            for v in 1..n {
                // i cannot be reached from v (yet), so it cannot improve any path starting at v
                if self.edge_to[v * n + i] == INVALID_EDGE {
                    continue;
                }
                for w in 1..n {
                    let weight = self.dist[v * n + i] + self.dist[i * n + w];
                    let idx = v * n + w;
                    if weight < self.dist[idx] {
                        self.dist[idx] = weight;
                        self.edge_to[idx] = self.edge_to[i * n + w];
                    }
                }
                if self.dist[v * n + v] < WEIGHT_ZERO {
                    debug!(
                        "Found negative cycle through vertex {} while relaxing via {}",
                        v, i
                    );
                    self.has_negative_cycle = true;
                    return;
                }
            }
        }
    }

    /// Verifies that no edge of the given graph can shorten any of the computed distances. There
    /// is nothing to verify if a negative cycle was found.
    pub fn check(&self, graph: &DenseGraph) -> Result<(), PathError> {
        if self.has_negative_cycle {
            return Ok(());
        }
        if graph.get_num_nodes() != self.num_nodes {
            return Err(PathError::Inconsistent(format!(
                "graph has {} nodes, but distances were computed for {}",
                graph.get_num_nodes(),
                self.num_nodes
            )));
        }
        let n = self.num_nodes;
        for v in 1..n {
            for e in graph.get_edges(v) {
                let weight = match e.weight {
                    Some(weight) => weight,
                    None => continue,
                };
                let w = e.to;
                for i in 1..n {
                    let bound = self.dist[i * n + v] + weight;
                    if self.dist[i * n + w] - bound > CHECK_TOLERANCE * (1.0 + bound.abs()) {
                        return Err(PathError::Inconsistent(format!(
                            "edge {} -> {} with weight {} still shortens the distance from {}: {} > {}",
                            v,
                            w,
                            weight,
                            i,
                            self.dist[i * n + w],
                            bound
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn get_num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    /// Returns true if there is a path from `source` to `target`. Still answers if the graph
    /// contains a negative cycle.
    pub fn has_path(&self, source: NodeId, target: NodeId) -> Result<bool, PathError> {
        self.validate_vertex(source)?;
        self.validate_vertex(target)?;
        Ok(self.dist[source * self.num_nodes + target] < WEIGHT_MAX)
    }

    /// Returns the shortest path weight from `source` to `target`, or `WEIGHT_MAX` if there is
    /// no path.
    pub fn calc_weight(&self, source: NodeId, target: NodeId) -> Result<Weight, PathError> {
        self.validate_vertex(source)?;
        self.validate_vertex(target)?;
        if self.has_negative_cycle {
            return Err(PathError::NegativeCycle);
        }
        Ok(self.dist[source * self.num_nodes + target])
    }

    /// Reconstructs the shortest path from `source` to `target` by following the recorded
    /// predecessor edges backwards. `graph` must be the graph this instance was built from.
    pub fn calc_path(
        &self,
        graph: &DenseGraph,
        source: NodeId,
        target: NodeId,
    ) -> Result<Option<ShortestPath>, PathError> {
        let weight = self.calc_weight(source, target)?;
        if graph.get_num_nodes() != self.num_nodes {
            return Err(PathError::Inconsistent(format!(
                "graph has {} nodes, but paths were computed for {}",
                graph.get_num_nodes(),
                self.num_nodes
            )));
        }
        if weight == WEIGHT_MAX {
            return Ok(None);
        }
        if source == target {
            return Ok(Some(ShortestPath::singular(source)));
        }
        let n = self.num_nodes;
        let mut edges = Vec::new();
        let mut node = target;
        while node != source {
            let edge_id = self.edge_to[source * n + node];
            if edge_id == INVALID_EDGE || edges.len() >= n {
                return Err(PathError::Inconsistent(format!(
                    "predecessors of path {} -> {} do not lead back to the source, stuck at {}",
                    source, target, node
                )));
            }
            let edge = *graph.get_edge_by_id(edge_id);
            node = edge.from;
            edges.push(edge);
        }
        edges.reverse();
        Ok(Some(ShortestPath::new(source, target, weight, edges)))
    }

    fn validate_vertex(&self, vertex: NodeId) -> Result<(), PathError> {
        if vertex == 0 || vertex >= self.num_nodes {
            return Err(PathError::InvalidVertex {
                vertex,
                num_nodes: self.num_nodes,
            });
        }
        Ok(())
    }
}
