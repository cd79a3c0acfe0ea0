//! Petrick's method: select the smallest covers among the remaining candidates.

use crate::*;

use itertools::Itertools;
use log::trace;
use std::collections::BTreeSet;

/// A product of candidates, given as their sorted indices in the candidate pool
pub type Product = Vec<usize>;

/// Coverage problem left after the reduction stage.
///
/// Each remaining candidate is labeled by its position in the pool (a, b, c, ...).
/// Each active minterm gives a sum of the labels of the candidates covering it, and
/// the product of all these sums, expanded into a sum of products, lists all valid covers.
///
/// ```
/// use qmkit::{Petrick, Tabulation, Term, SolverContext};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
/// let minterms = vec![0, 1, 2, 5, 6, 7];
/// let terms = minterms.iter().map(|m| Term::leaf(*m, 3)).collect::<Result<_, _>>()?;
/// let candidates = Tabulation::from_terms(terms).into_candidates();
/// let context = SolverContext::new(minterms, candidates).reduce();
///
/// let petrick = Petrick::new(&context);
/// assert_eq!(petrick.solve(), vec![vec![0, 3, 4], vec![1, 2, 5]]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Petrick {
    candidates: Vec<Term>,
    sums: Vec<Vec<usize>>,
}

impl Petrick {
    /// Build the product of sums for the remaining minterms of a context
    pub fn new(context: &SolverContext) -> Self {
        Self {
            candidates: context.candidates().to_vec(),
            sums: context.coverage_table(),
        }
    }

    /// The candidate associated to a label
    pub fn candidate(&self, label: usize) -> Option<&Term> {
        self.candidates.get(label)
    }

    /// The sum of labels for each remaining minterm
    pub fn sums(&self) -> &[Vec<usize>] {
        &self.sums
    }

    /// List the labels used in at least one sum, with the associated candidate.
    ///
    /// ```text
    /// a: 00-
    /// b: 0-0
    /// ```
    pub fn labels(&self) -> impl Iterator<Item = (String, &Term)> + '_ {
        self.sums
            .iter()
            .flatten()
            .copied()
            .sorted()
            .dedup()
            .map(move |l| (tools::letter_label(l), &self.candidates[l]))
    }

    /// Expand the product of sums and keep all products with the smallest number of candidates.
    ///
    /// The selected products are sorted in ascending order of their labels.
    pub fn solve(&self) -> Vec<Product> {
        let products = self
            .sums
            .iter()
            .map(|sum| sum.iter().map(|l| vec![*l]).collect::<BTreeSet<Product>>())
            .reduce(|acc, sum| multiply(&acc, &sum))
            .unwrap_or_else(|| BTreeSet::from([Product::new()]));

        let min = products.iter().map(Vec::len).min().unwrap_or(0);
        let selected: Vec<Product> = products.into_iter().filter(|p| p.len() == min).collect();
        trace!("petrick: {} covers of {} candidates", selected.len(), min);
        selected
    }
}

/// Multiply two sums of products.
///
/// Repeated labels in a product collapse, and products containing another product are absorbed:
/// they can not be a smallest cover.
fn multiply(lhs: &BTreeSet<Product>, rhs: &BTreeSet<Product>) -> BTreeSet<Product> {
    let expanded: BTreeSet<Product> = lhs
        .iter()
        .cartesian_product(rhs)
        .map(|(a, b)| a.iter().merge(b).dedup().copied().collect())
        .collect();
    let result: BTreeSet<Product> = expanded
        .iter()
        .filter(|p| !expanded.iter().any(|q| q.len() < p.len() && is_subset(q, p)))
        .cloned()
        .collect();
    trace!("petrick: {} products, {} after absorption", expanded.len(), result.len());
    result
}

/// Test if all labels of a sorted product are in another sorted product
fn is_subset(small: &[usize], large: &[usize]) -> bool {
    small.iter().all(|l| large.binary_search(l).is_ok())
}
