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

use crate::constants::NodeId;

/// Errors returned by queries against a `FloydWarshall` result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// The vertex is not in `[1, num_nodes - 1]`
    #[error("vertex {vertex} is not between 1 and {}", .num_nodes - 1)]
    InvalidVertex { vertex: NodeId, num_nodes: usize },

    /// Distances and paths are undefined once a negative cycle was found
    #[error("the graph contains a negative cycle")]
    NegativeCycle,

    /// The computed distances or predecessors violate an invariant of the algorithm
    #[error("internal consistency violation: {0}")]
    Inconsistent(String),
}

/// Errors raised while processing a single problem file of a batch.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error in line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("path error: {0}")]
    Path(#[from] PathError),
}
