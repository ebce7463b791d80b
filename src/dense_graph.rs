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

use std::fmt;

#[cfg(test)]
use rand::rngs::StdRng;
#[cfg(test)]
use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::constants::{EdgeId, NodeId, Weight};

/// A directed graph that stores one edge record for every ordered pair of vertices.
///
/// Vertices are numbered from 1 to N, row and column 0 of the table exist but are never used.
/// Pairs without a recorded edge hold an `Edge` whose weight is `None`, which is not the same as
/// an edge with weight zero.
#[derive(Serialize, Deserialize, Clone)]
pub struct DenseGraph {
    edges: Vec<Edge>,
    num_nodes: usize,
    num_edges: usize,
}

impl DenseGraph {
    /// Creates a graph with vertices 1..=num_vertices and no edges
    pub fn new(num_vertices: usize) -> Self {
        let num_nodes = num_vertices + 1;
        let mut edges = Vec::with_capacity(num_nodes * num_nodes);
        for from in 0..num_nodes {
            for to in 0..num_nodes {
                edges.push(Edge::absent(from, to));
            }
        }
        DenseGraph {
            edges,
            num_nodes,
            num_edges: 0,
        }
    }

    /// Builds a random graph, mostly used for testing purposes
    #[cfg(test)]
    pub fn random(
        rng: &mut StdRng,
        num_vertices: usize,
        mean_degree: f32,
        min_weight: Weight,
        max_weight: Weight,
    ) -> Self {
        let num_edges = (mean_degree * num_vertices as f32) as usize;
        let mut result = DenseGraph::new(num_vertices);
        if num_vertices == 0 {
            return result;
        }
        for _ in 0..num_edges {
            let from = rng.gen_range(1, num_vertices + 1);
            let to = rng.gen_range(1, num_vertices + 1);
            // multiples of 0.25 are exact binary fractions, so summing them never rounds
            let weight = (rng.gen_range(min_weight, max_weight) * 4.0).round() / 4.0;
            result.add_edge(from, to, weight);
        }
        result
    }

    /// Records a directed edge, replacing any edge recorded before for the same pair.
    /// Edges with an invalid endpoint are skipped. Returns the number of added edges.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> usize {
        if !self.is_valid_vertex(from) || !self.is_valid_vertex(to) {
            warn!(
                "Invalid vertex. Skipped edge! from: {}, to: {}, weight: {}",
                from, to, weight
            );
            return 0;
        }
        let id = self.edge_id(from, to);
        self.edges[id] = Edge::new(from, to, weight);
        self.num_edges += 1;
        1
    }

    pub fn is_valid_vertex(&self, vertex: NodeId) -> bool {
        vertex != 0 && vertex < self.num_nodes
    }

    /// The size of one row of the edge table, i.e. the number of vertices plus the unused
    /// vertex 0
    pub fn get_num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn get_num_vertices(&self) -> usize {
        self.num_nodes - 1
    }

    /// The number of accepted `add_edge` calls
    pub fn get_num_edges(&self) -> usize {
        self.num_edges
    }

    /// All edge records leaving `from`, including the ones without weight
    pub fn get_edges(&self, from: NodeId) -> &[Edge] {
        let start = from * self.num_nodes;
        &self.edges[start..start + self.num_nodes]
    }

    pub fn get_edge(&self, from: NodeId, to: NodeId) -> &Edge {
        &self.edges[self.edge_id(from, to)]
    }

    pub fn get_edge_by_id(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    pub fn edge_id(&self, from: NodeId, to: NodeId) -> EdgeId {
        from * self.num_nodes + to
    }

    /// Renders the adjacency matrix of vertices 1..=N, one row per line. Cells without an edge
    /// show `inf`, or `0` on the diagonal.
    pub fn matrix_string(&self) -> String {
        let mut result = String::new();
        for from in 1..self.num_nodes {
            let row = (1..self.num_nodes)
                .map(|to| match self.get_edge(from, to).weight {
                    Some(weight) => format!("{:.2}", weight),
                    None if from == to => String::from("0"),
                    None => String::from("inf"),
                })
                .collect::<Vec<String>>()
                .join(" ");
            result.push_str(&row);
            result.push('\n');
        }
        result
    }

    pub fn unit_test_output_string(&self) -> String {
        let mut result = format!("let mut g = DenseGraph::new({});\n", self.get_num_vertices());
        for e in self.edges.iter().filter(|e| e.weight.is_some()) {
            result.push_str(&e.unit_test_output_string());
            result.push('\n');
        }
        result
    }
}

impl fmt::Debug for DenseGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.unit_test_output_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Option<Weight>,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: Weight) -> Edge {
        Edge {
            from,
            to,
            weight: Some(weight),
        }
    }

    pub fn absent(from: NodeId, to: NodeId) -> Edge {
        Edge {
            from,
            to,
            weight: None,
        }
    }

    pub fn unit_test_output_string(&self) -> String {
        match self.weight {
            Some(weight) => format!("g.add_edge({}, {}, {:?});", self.from, self.to, weight),
            None => format!("// no edge {} -> {}", self.from, self.to),
        }
    }
}
