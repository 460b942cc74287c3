//! Benchmark runner behind the `rbkit-perf` binary.
//!
//! Every bench writes a gnuplot data block: a quoted title line, then one
//! `index elapsed_micros` line per timed chunk, then two blank lines.

use std::cmp::Ordering;
use std::io::Write;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use rbkit_rbtree::{Insert, InvariantViolation, RbLink, RbNode, RbTree, Replace, TreeError};

use crate::config::{Bench, PerfConfig};

/// Errors that abort a benchmark run.
#[derive(Debug, thiserror::Error)]
pub enum PerfError {
    #[error("tree operation failed: {0}")]
    Tree(#[from] TreeError<usize>),

    #[error("tree is inconsistent: {0}")]
    Invariant(#[from] InvariantViolation<usize>),

    #[error("key of node {node} already present at node {existing}")]
    Duplicate { node: usize, existing: usize },

    #[error("replace of node {0} was rejected")]
    Rejected(usize),

    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),
}

/// Benchmark record: a key and its tree link.
#[derive(Debug)]
struct Record {
    key: u64,
    link: RbLink<usize>,
}

impl RbNode<usize> for Record {
    fn link(&self) -> &RbLink<usize> {
        &self.link
    }

    fn link_mut(&mut self) -> &mut RbLink<usize> {
        &mut self.link
    }
}

type Tree = RbTree<usize, fn(&Record, &Record) -> Ordering>;

fn by_key(a: &Record, b: &Record) -> Ordering {
    a.key.cmp(&b.key)
}

fn new_tree() -> Tree {
    RbTree::new(by_key as fn(&Record, &Record) -> Ordering)
}

/// Timing summary of one bench.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub bench: Bench,
    pub operations: usize,
    pub elapsed: Duration,
}

/// Runs the configured benches and writes their data blocks to `out`.
pub struct Runner<W> {
    config: PerfConfig,
    rng: StdRng,
    out: W,
}

impl<W: Write> Runner<W> {
    pub fn new(config: PerfConfig, out: W) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng, out }
    }

    /// Run every configured bench in order.
    pub fn run(&mut self) -> Result<Vec<Report>, PerfError> {
        let benches = self.config.benches.clone();
        let mut reports = Vec::with_capacity(benches.len());
        for bench in benches {
            info!(bench = bench.title(), "bench started");
            let report = match bench {
                Bench::Insert => self.insert()?,
                Bench::Delete => self.delete()?,
                Bench::Replace => self.replace()?,
            };
            info!(
                bench = bench.title(),
                operations = report.operations,
                elapsed_ms = report.elapsed.as_millis() as u64,
                "bench finished"
            );
            reports.push(report);
        }
        self.out.flush()?;
        Ok(reports)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// `count` records with distinct keys in random order.
    fn records(&mut self, count: usize) -> Vec<Record> {
        let mut keys: Vec<u64> = (0..count as u64).collect();
        keys.shuffle(&mut self.rng);
        keys.into_iter()
            .map(|key| Record {
                key,
                link: RbLink::new(),
            })
            .collect()
    }

    fn verify(&self, tree: &Tree, records: &[Record]) -> Result<(), PerfError> {
        if self.config.verify {
            let report = tree.check(records)?;
            debug!(
                black_height = report.black_height,
                nodes = report.nodes,
                "tree verified"
            );
        }
        Ok(())
    }

    fn insert(&mut self) -> Result<Report, PerfError> {
        let mut records = self.records(self.config.nodes);
        let mut tree = new_tree();
        let elapsed = timed(
            &mut self.out,
            Bench::Insert.title(),
            records.len(),
            self.config.report_every,
            |slot| insert(&mut tree, &mut records, slot),
        )?;
        self.verify(&tree, &records)?;
        Ok(Report {
            bench: Bench::Insert,
            operations: records.len(),
            elapsed,
        })
    }

    fn delete(&mut self) -> Result<Report, PerfError> {
        let mut records = self.records(self.config.nodes);
        let mut tree = new_tree();
        for slot in 0..records.len() {
            insert(&mut tree, &mut records, slot)?;
        }
        self.verify(&tree, &records)?;

        let elapsed = timed(
            &mut self.out,
            Bench::Delete.title(),
            records.len(),
            self.config.report_every,
            |slot| Ok(tree.delete_node(&mut records, slot)?),
        )?;
        self.verify(&tree, &records)?;
        Ok(Report {
            bench: Bench::Delete,
            operations: records.len(),
            elapsed,
        })
    }

    /// Grow the tree one node at a time; at each size, time round trips of
    /// replacing a random member with the spare record and back.
    fn replace(&mut self) -> Result<Report, PerfError> {
        let size = self.config.replace_nodes;
        let rounds = self.config.replace_rounds;
        let mut records = self.records(size + 1);
        let spare = size;
        let mut tree = new_tree();
        let mut total = Duration::ZERO;

        writeln!(self.out, "\"{}\"", Bench::Replace.title())?;
        for slot in 0..size {
            insert(&mut tree, &mut records, slot)?;
            let member = self.rng.random_range(0..=slot);
            records[spare].key = records[member].key;

            let start = Instant::now();
            for _ in 0..rounds {
                replace(&mut tree, &mut records, member, spare)?;
                replace(&mut tree, &mut records, spare, member)?;
            }
            let elapsed = start.elapsed();
            total += elapsed;
            writeln!(self.out, "{} {}", slot + 1, elapsed.as_micros())?;
        }
        writeln!(self.out, "\n")?;
        self.verify(&tree, &records)?;

        Ok(Report {
            bench: Bench::Replace,
            operations: size * rounds * 2,
            elapsed: total,
        })
    }
}

fn insert(tree: &mut Tree, records: &mut [Record], slot: usize) -> Result<(), PerfError> {
    match tree.insert(records, slot)? {
        Insert::Inserted => Ok(()),
        Insert::Duplicate(existing) => Err(PerfError::Duplicate {
            node: slot,
            existing,
        }),
    }
}

fn replace(tree: &mut Tree, records: &mut [Record], old: usize, new: usize) -> Result<(), PerfError> {
    match tree.replace_node(records, old, new)? {
        Replace::Replaced => Ok(()),
        Replace::Rejected => Err(PerfError::Rejected(old)),
    }
}

/// Run `op` for indices `0..count`, writing a timing line every
/// `report_every` operations.
fn timed<W, F>(
    out: &mut W,
    title: &str,
    count: usize,
    report_every: usize,
    mut op: F,
) -> Result<Duration, PerfError>
where
    W: Write,
    F: FnMut(usize) -> Result<(), PerfError>,
{
    writeln!(out, "\"{title}\"")?;
    let start = Instant::now();
    let mut chunk = Instant::now();
    for index in 0..count {
        op(index)?;
        if (index + 1) % report_every == 0 {
            writeln!(out, "{} {}", index, chunk.elapsed().as_micros())?;
            chunk = Instant::now();
        }
    }
    writeln!(out, "\n")?;
    Ok(start.elapsed())
}
