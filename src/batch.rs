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

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BatchError;
use crate::floyd_warshall::FloydWarshall;
use crate::problem_file::Problem;

/// Replaced by the file index in input and output patterns
pub const INDEX_PLACEHOLDER: &str = "{}";

pub const DEFAULT_INPUT_PATTERN: &str = "Original/pmed{}.txt";
pub const DEFAULT_OUTPUT_PATTERN: &str = "pmed Processado/pmed-p{}.txt";
pub const DEFAULT_FIRST: usize = 1;
pub const DEFAULT_LAST: usize = 40;

/// Describes a numbered sequence of problem files and where to write their results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BatchConfig {
    pub input_pattern: String,
    pub output_pattern: String,
    pub first: usize,
    /// inclusive
    pub last: usize,
}

impl BatchConfig {
    pub fn new(input_pattern: &str, output_pattern: &str, first: usize, last: usize) -> Self {
        BatchConfig {
            input_pattern: input_pattern.to_string(),
            output_pattern: output_pattern.to_string(),
            first,
            last,
        }
    }

    pub fn input_file(&self, index: usize) -> PathBuf {
        PathBuf::from(self.input_pattern.replace(INDEX_PLACEHOLDER, &index.to_string()))
    }

    pub fn output_file(&self, index: usize) -> PathBuf {
        PathBuf::from(self.output_pattern.replace(INDEX_PLACEHOLDER, &index.to_string()))
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig::new(
            DEFAULT_INPUT_PATTERN,
            DEFAULT_OUTPUT_PATTERN,
            DEFAULT_FIRST,
            DEFAULT_LAST,
        )
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    /// indices whose output file was written
    pub processed: Vec<usize>,
    pub failures: Vec<(usize, BatchError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Processes all files of the batch, see `run_batch_with`.
pub fn run_batch(config: &BatchConfig) -> BatchReport {
    run_batch_with(config, &mut |_, _, _| {})
}

/// Processes the files `config.first..=config.last` in order. A failure for one index is
/// recorded in the report and processing continues with the next index. `inspect` is called for
/// every problem that could be read and solved, before its output is written.
pub fn run_batch_with<F>(config: &BatchConfig, inspect: &mut F) -> BatchReport
where
    F: FnMut(usize, &Problem, &FloydWarshall),
{
    let mut report = BatchReport::default();
    for index in config.first..=config.last {
        let input = config.input_file(index);
        let output = config.output_file(index);
        match process_file(index, &input, &output, inspect) {
            Ok(()) => {
                info!("Processed {} -> {}", input.display(), output.display());
                report.processed.push(index);
            }
            Err(e) => {
                warn!("Skipped file {} ({}): {}", index, input.display(), e);
                report.failures.push((index, e));
            }
        }
    }
    report
}

fn process_file<F>(
    index: usize,
    input: &Path,
    output: &Path,
    inspect: &mut F,
) -> Result<(), BatchError>
where
    F: FnMut(usize, &Problem, &FloydWarshall),
{
    let problem = Problem::from_file(input)?;
    let fw = FloydWarshall::new(problem.get_graph());
    debug!(
        "Solved {}: {} vertices, {} edges, negative cycle: {}",
        input.display(),
        problem.get_num_vertices(),
        problem.get_graph().get_num_edges(),
        fw.has_negative_cycle()
    );
    inspect(index, &problem, &fw);
    problem.write_distances_to_file(&fw, output)
}
