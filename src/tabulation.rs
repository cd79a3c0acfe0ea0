//! First stage of the Quine-McCluskey method: merge terms until no merge is possible.

use crate::*;

use itertools::Itertools;
use log::debug;
use std::collections::HashSet;

/// A group of terms with the same weight
pub type Bucket = Vec<Term>;

/// A single level of the tabulation.
///
/// The terms of a level are grouped by weight, the terms of the first level are the initial minterms.
/// The terms of the next level are obtained by merging terms of adjacent buckets.
#[derive(Clone, Debug, Default)]
pub struct Level {
    buckets: Vec<Bucket>,
    checked: HashSet<Pattern>,
}

impl Level {
    /// Terms of this level grouped by weight
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Iterate over all terms of this level
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.buckets.iter().flatten()
    }

    /// Test if a term of this level was used to build a term of the next level
    pub fn is_checked(&self, term: &Term) -> bool {
        self.checked.contains(&term.pattern())
    }
}

/// Result of the tabulation: all levels and the pool of candidate terms for the coverage stage.
///
/// The candidates are the terms of the last level, followed by all terms which
/// were never merged in previous levels. All candidates are prime implicants.
///
/// ```
/// use qmkit::{Tabulation, Term};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
/// let terms = [0, 1, 2, 5, 6, 7]
///     .iter()
///     .map(|m| Term::leaf(*m, 3))
///     .collect::<Result<Vec<_>, _>>()?;
/// let tabulation = Tabulation::from_terms(terms);
///
/// assert_eq!(tabulation.levels().len(), 2);
/// assert_eq!(tabulation.candidates().len(), 6);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Tabulation {
    levels: Vec<Level>,
    candidates: Vec<Term>,
}

impl Tabulation {
    /// Run the tabulation on a list of terms of the same length.
    ///
    /// Terms are sorted by weight, preserving their relative order inside each bucket.
    pub fn from_terms(mut terms: Vec<Term>) -> Self {
        if terms.is_empty() {
            return Self::default();
        }
        terms.sort_by_key(Term::weight);

        let mut levels = vec![];
        let mut unchecked = vec![];
        let mut buckets = group(terms);
        loop {
            let (next, checked) = merge_buckets(&buckets);
            let merged = !checked.is_empty();
            if merged {
                unchecked.extend(
                    buckets
                        .iter()
                        .flatten()
                        .filter(|t| !checked.contains(&t.pattern()))
                        .cloned(),
                );
            }
            debug!(
                "tabulation level {}: {} terms, {} merged",
                levels.len(),
                buckets.iter().map(Vec::len).sum::<usize>(),
                checked.len()
            );
            levels.push(Level { buckets, checked });
            if !merged {
                break;
            }

            buckets = next;
            if buckets.len() < 2 {
                levels.push(Level {
                    buckets,
                    checked: HashSet::new(),
                });
                break;
            }
        }

        let mut candidates: Vec<Term> = levels
            .last()
            .map(|l| l.terms().cloned().collect())
            .unwrap_or_default();
        candidates.extend(unchecked);
        debug!("tabulation done: {} candidates", candidates.len());

        Self { levels, candidates }
    }

    /// All levels, starting with the initial minterms
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Candidate prime implicants, in a fixed order
    pub fn candidates(&self) -> &[Term] {
        &self.candidates
    }

    /// Take the candidates
    pub fn into_candidates(self) -> Vec<Term> {
        self.candidates
    }
}

/// Group terms sorted by weight into buckets indexed by weight
fn group(terms: Vec<Term>) -> Vec<Bucket> {
    let size = terms.last().map(|t| t.weight() as usize + 1).unwrap_or(0);
    let mut buckets = vec![Bucket::new(); size];
    for t in terms {
        buckets[t.weight() as usize].push(t);
    }
    buckets
}

/// Merge the terms of all pairs of adjacent buckets.
///
/// Each pair of buckets gives a bucket of the next level, where a pattern found twice is kept once.
/// Also returns the patterns of all terms used in at least one merge.
fn merge_buckets(buckets: &[Bucket]) -> (Vec<Bucket>, HashSet<Pattern>) {
    let mut checked = HashSet::new();
    let next = buckets
        .iter()
        .tuple_windows()
        .map(|(low, high)| {
            let mut seen = HashSet::new();
            let mut merged = Bucket::new();
            for (a, b) in low.iter().cartesian_product(high) {
                if let Some(t) = a.merge(b) {
                    checked.insert(a.pattern());
                    checked.insert(b.pattern());
                    if seen.insert(t.pattern()) {
                        merged.push(t);
                    }
                }
            }
            merged
        })
        .collect();
    (next, checked)
}
