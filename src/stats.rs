/*! Filtering statistics.

Counts input lines, rejections per filter and accepted lines for a single run.
Counters are kept in filter evaluation order so that reports follow the pipeline.
!*/
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::filtering::{FilterChain, PROPER_NOUN_FILTER};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    filter: &'static str,
    count: u64,
}

impl Rejection {
    pub fn filter(&self) -> &'static str {
        self.filter
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Stats {
    total_input: u64,
    rejections: Vec<Rejection>,
    total_accepted: u64,
    malformed: u64,
    chunks_written: u64,
    dst: Option<PathBuf>,
}

impl Stats {
    /// Zeroed counters for the provided filter names, in order.
    pub fn new<I: IntoIterator<Item = &'static str>>(filters: I) -> Self {
        Self {
            rejections: filters
                .into_iter()
                .map(|filter| Rejection { filter, count: 0 })
                .collect(),
            ..Default::default()
        }
    }

    /// Counters for every filter of `chain`, followed by the proper noun filter.
    pub fn for_chain(chain: &FilterChain) -> Self {
        Self::new(
            chain
                .names()
                .into_iter()
                .chain(std::iter::once(PROPER_NOUN_FILTER)),
        )
    }

    pub fn add_input(&mut self) {
        self.total_input += 1;
    }

    /// Count a rejection by `filter`.
    /// Unknown filters get a new counter, placed last.
    pub fn add_rejection(&mut self, filter: &'static str) {
        match self.rejections.iter_mut().find(|r| r.filter == filter) {
            Some(r) => r.count += 1,
            None => self.rejections.push(Rejection { filter, count: 1 }),
        }
    }

    pub fn add_accepted(&mut self) {
        self.total_accepted += 1;
    }

    pub fn add_malformed(&mut self) {
        self.malformed += 1;
    }

    /// Record where and in how many files the output went.
    pub fn set_output(&mut self, chunks_written: u64, dst: &Path) {
        self.chunks_written = chunks_written;
        self.dst = Some(dst.to_path_buf());
    }

    pub fn total_input(&self) -> u64 {
        self.total_input
    }

    pub fn total_accepted(&self) -> u64 {
        self.total_accepted
    }

    pub fn malformed(&self) -> u64 {
        self.malformed
    }

    pub fn chunks_written(&self) -> u64 {
        self.chunks_written
    }

    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Rejections for a given filter. 0 for unknown filters.
    pub fn rejected_by(&self, filter: &str) -> u64 {
        self.rejections
            .iter()
            .find(|r| r.filter == filter)
            .map_or(0, |r| r.count)
    }

    pub fn total_rejected(&self) -> u64 {
        self.rejections.iter().map(|r| r.count).sum()
    }

    /// Accepted/input ratio, in percent. 0 if there was no input.
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_input == 0 {
            0.0
        } else {
            self.total_accepted as f64 * 100.0 / self.total_input as f64
        }
    }

    /// Every input line is either accepted or rejected by exactly one filter.
    pub fn is_consistent(&self) -> bool {
        self.total_input == self.total_accepted + self.total_rejected()
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Filtering Statistics =====")?;
        writeln!(f, "Total lines processed: {}", self.total_input)?;
        for r in &self.rejections {
            writeln!(f, "Filtered out by {}: {}", r.filter, r.count)?;
        }
        writeln!(f, "Final lines passed: {}", self.total_accepted)?;
        writeln!(f, "Acceptance rate: {:.2}%", self.acceptance_rate())?;
        writeln!(f, "Malformed lines skipped: {}", self.malformed)?;
        if let Some(dst) = &self.dst {
            writeln!(
                f,
                "Output split into {} file(s) under '{}'.",
                self.chunks_written,
                dst.display()
            )?;
        }
        Ok(())
    }
}
