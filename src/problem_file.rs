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

use std::convert::TryFrom;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::constants::{NodeId, Weight};
use crate::dense_graph::DenseGraph;
use crate::error::{BatchError, PathError};
use crate::floyd_warshall::FloydWarshall;

/// Largest number of vertices accepted from a problem file, the edge, distance and predecessor
/// tables all grow with the square of it
pub const MAX_NUM_VERTICES: usize = 10_000;

/// A graph read from a problem file together with the header values it was declared with.
#[derive(Debug, Clone)]
pub struct Problem {
    num_vertices: usize,
    num_edges: usize,
    param: i64,
    graph: DenseGraph,
}

impl Problem {
    /// Reads a problem file using the following format:
    /// <num_vertices> <num_edges> <param>
    /// <from> <to> <weight>
    /// ...
    /// with one <from> <to> <weight> triple per declared edge. Tokens may be separated by any
    /// whitespace. Vertices are 1-based, edges with a vertex outside of [1, num_vertices] are
    /// skipped. <param> is not used for the calculation, but written back to the output.
    pub fn from_file(path: &Path) -> Result<Self, BatchError> {
        let content = fs::read_to_string(path)?;
        Problem::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, BatchError> {
        let mut scanner = Scanner::new(content);
        let num_vertices: usize = scanner.next("number of vertices")?;
        let num_edges: usize = scanner.next("number of edges")?;
        let param: i64 = scanner.next("problem parameter")?;
        if num_vertices > MAX_NUM_VERTICES {
            return Err(scanner.error(format!(
                "too many vertices: {}, at most {} are supported",
                num_vertices, MAX_NUM_VERTICES
            )));
        }
        let mut graph = DenseGraph::new(num_vertices);
        for _ in 0..num_edges {
            let from: i64 = scanner.next("edge source")?;
            let to: i64 = scanner.next("edge target")?;
            let weight: Weight = scanner.next("edge weight")?;
            if !weight.is_finite() {
                return Err(scanner.error(format!("edge weight must be finite, got: {}", weight)));
            }
            match (to_vertex(from), to_vertex(to)) {
                (Some(from), Some(to)) => {
                    graph.add_edge(from, to, weight);
                }
                _ => warn!(
                    "Invalid vertex in line {}. Skipped edge! from: {}, to: {}, weight: {}",
                    scanner.line, from, to, weight
                ),
            }
        }
        Ok(Problem {
            num_vertices,
            num_edges,
            param,
            graph,
        })
    }

    pub fn get_num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// The number of edges declared in the header, including the skipped ones
    pub fn get_num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn get_param(&self) -> i64 {
        self.param
    }

    pub fn get_graph(&self) -> &DenseGraph {
        &self.graph
    }

    /// Writes the distances between all pairs of vertices to a text file, see
    /// `Problem::write_distances` for the format. Missing parent directories are created. If
    /// writing fails the incomplete file is removed again.
    pub fn write_distances_to_file(
        &self,
        fw: &FloydWarshall,
        path: &Path,
    ) -> Result<(), BatchError> {
        if fw.has_negative_cycle() {
            return Err(PathError::NegativeCycle.into());
        }
        create_file_with(path, |f| self.write_distances(fw, f))
    }

    /// Writes the header line of the problem followed by one line per ordered pair of vertices:
    /// <num_vertices> <num_edges> <param>
    /// <from> <to> <distance>
    /// where <distance> is rounded to the nearest integer or `inf` if there is no path. Pairs
    /// are written in row-major order, including the pairs of a vertex with itself.
    pub fn write_distances<W: Write>(
        &self,
        fw: &FloydWarshall,
        writer: &mut W,
    ) -> Result<(), BatchError> {
        if fw.has_negative_cycle() {
            return Err(PathError::NegativeCycle.into());
        }
        writeln!(
            writer,
            "{} {} {}",
            self.num_vertices, self.num_edges, self.param
        )?;
        for from in 1..=self.num_vertices {
            for to in 1..=self.num_vertices {
                if fw.has_path(from, to)? {
                    let distance = round_half_up(fw.calc_weight(from, to)?);
                    writeln!(writer, "{} {} {}", from, to, distance)?;
                } else {
                    writeln!(writer, "{} {} inf", from, to)?;
                }
            }
        }
        Ok(())
    }
}

/// Rounds to the nearest integer, ties are rounded up towards positive infinity. So 2.5
/// becomes 3 but -2.5 becomes -2.
pub fn round_half_up(weight: Weight) -> i64 {
    let floor = weight.floor();
    if weight - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Creates the file at `path` and fills it using `write`. On failure the file is deleted, so
/// there are no incomplete files left behind.
fn create_file_with<F>(path: &Path, write: F) -> Result<(), BatchError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), BatchError>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut f = BufWriter::new(File::create(path)?);
    let result = write(&mut f).and_then(|_| f.flush().map_err(BatchError::from));
    drop(f);
    if result.is_err() {
        if let Err(e) = fs::remove_file(path) {
            warn!("Could not remove incomplete file {}: {}", path.display(), e);
        }
    }
    result
}

fn to_vertex(value: i64) -> Option<NodeId> {
    NodeId::try_from(value).ok()
}

/// Splits the input into whitespace separated tokens, remembering the line of the last token
struct Scanner<'a> {
    tokens: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(content: &'a str) -> Self {
        let tokens = content
            .lines()
            .enumerate()
            .flat_map(|(index, line)| line.split_whitespace().map(move |t| (index + 1, t)));
        Scanner {
            tokens: Box::new(tokens),
            line: 0,
        }
    }

    fn next<T: FromStr>(&mut self, name: &str) -> Result<T, BatchError> {
        match self.tokens.next() {
            Some((line, token)) => {
                self.line = line;
                token
                    .parse::<T>()
                    .map_err(|_| self.error(format!("invalid {}: {}", name, token)))
            }
            None => Err(self.error(format!("unexpected end of file, expected {}", name))),
        }
    }

    fn error(&self, message: String) -> BatchError {
        BatchError::Parse {
            line: self.line,
            message,
        }
    }
}
