//! Second stage of the Quine-McCluskey method: shrink the coverage table.

use crate::*;

use itertools::Itertools;
use log::debug;
use std::fmt;

/// Reduction rules, in priority order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reduction {
    /// Promote the only candidate covering a minterm
    Essential,
    /// Discard a candidate covering a strict subset of the minterms of another candidate
    RowDominance,
    /// Drop a minterm whose covering candidates are a strict superset of those of another minterm
    ColumnDominance,
}

/// The rules tried at each iteration of the reduction loop, the first applicable one is applied.
pub static REDUCTION_RULES: [Reduction; 3] = [
    Reduction::Essential,
    Reduction::RowDominance,
    Reduction::ColumnDominance,
];

/// A single application of a [Reduction] rule
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The prime was the only candidate covering the minterm
    Essential { minterm: u32, prime: Pattern },
    /// The discarded candidate covers a strict subset of the minterms of the kept one
    RowDominance { kept: Pattern, discarded: Pattern },
    /// Covering the kept minterm implies covering the discarded one
    ColumnDominance { kept: u32, discarded: u32 },
}

/// State of the coverage stage.
///
/// The context owns the active minterms (not covered yet), the pool of candidate terms and the
/// accumulated prime implicants. Reduction rules consume the context and return it updated,
/// the active minterms and the pool only shrink.
///
/// ```
/// use qmkit::{SolverContext, Tabulation, Term};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
/// let minterms = vec![1, 3, 6, 7];
/// let terms = minterms.iter().map(|m| Term::leaf(*m, 3)).collect::<Result<_, _>>()?;
/// let candidates = Tabulation::from_terms(terms).into_candidates();
///
/// let context = SolverContext::new(minterms, candidates).reduce();
/// assert!(context.is_covered());
/// assert_eq!(context.primes().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct SolverContext {
    minterms: Vec<u32>,
    candidates: Vec<Term>,
    primes: Vec<Term>,
    steps: Vec<Step>,
}

impl SolverContext {
    /// Start the coverage stage with all minterms active
    pub fn new(mut minterms: Vec<u32>, candidates: Vec<Term>) -> Self {
        minterms.sort_unstable();
        Self {
            minterms,
            candidates,
            ..Self::default()
        }
    }

    /// Minterms which are not covered yet, in ascending order
    pub fn minterms(&self) -> &[u32] {
        &self.minterms
    }

    /// Remaining candidate terms
    pub fn candidates(&self) -> &[Term] {
        &self.candidates
    }

    /// Prime implicants selected so far, in selection order
    pub fn primes(&self) -> &[Term] {
        &self.primes
    }

    /// All rules applied so far
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Return whether all minterms are covered by the selected primes
    pub fn is_covered(&self) -> bool {
        self.minterms.is_empty()
    }

    /// Build the coverage table.
    ///
    /// For each active minterm (in ascending order), list the indices of the candidates covering it.
    pub fn coverage_table(&self) -> Vec<Vec<usize>> {
        self.minterms
            .iter()
            .map(|m| {
                self.candidates
                    .iter()
                    .positions(|t| t.covers(*m))
                    .collect()
            })
            .collect()
    }

    /// Apply reduction rules until all minterms are covered or no rule applies.
    ///
    /// If some minterms remain active, the remaining candidates must be selected using [Petrick].
    pub fn reduce(mut self) -> Self {
        while !self.is_covered() {
            match REDUCTION_RULES.iter().find_map(|rule| self.apply(*rule)) {
                Some(step) => {
                    debug!("{}", &step);
                    self.steps.push(step);
                }
                None => {
                    debug!(
                        "reduction stalled: {} minterms, {} candidates",
                        self.minterms.len(),
                        self.candidates.len()
                    );
                    break;
                }
            }
        }
        self
    }

    /// Try to apply a single rule, return the applied step if it succeeds
    pub fn apply(&mut self, rule: Reduction) -> Option<Step> {
        match rule {
            Reduction::Essential => self.extract_essential(),
            Reduction::RowDominance => self.discard_dominated_row(),
            Reduction::ColumnDominance => self.discard_dominating_column(),
        }
    }

    fn extract_essential(&mut self) -> Option<Step> {
        let table = self.coverage_table();
        let (minterm, idx) = self
            .minterms
            .iter()
            .zip(&table)
            .find_map(|(m, col)| match col.as_slice() {
                [idx] => Some((*m, *idx)),
                _ => None,
            })?;

        let prime = self.candidates.remove(idx);
        self.minterms.retain(|m| !prime.covers(*m));
        let step = Step::Essential {
            minterm,
            prime: prime.pattern(),
        };
        self.primes.push(prime);
        Some(step)
    }

    fn discard_dominated_row(&mut self) -> Option<Step> {
        let (kept, discarded) = (0..self.candidates.len())
            .tuple_combinations()
            .find_map(|(i, j)| {
                let (a, b) = (&self.candidates[i], &self.candidates[j]);
                if a.dominates(b) {
                    Some((i, j))
                } else if b.dominates(a) {
                    Some((j, i))
                } else {
                    None
                }
            })?;

        let kept = self.candidates[kept].pattern();
        let discarded = self.candidates.remove(discarded).pattern();
        Some(Step::RowDominance { kept, discarded })
    }

    fn discard_dominating_column(&mut self) -> Option<Step> {
        let table = self.coverage_table();
        let (kept, discarded) = (0..table.len())
            .tuple_combinations()
            .find_map(|(i, j)| {
                if strict_superset(&table[j], &table[i]) {
                    Some((i, j))
                } else if strict_superset(&table[i], &table[j]) {
                    Some((j, i))
                } else {
                    None
                }
            })?;

        let kept = self.minterms[kept];
        let discarded = self.minterms.remove(discarded);
        Some(Step::ColumnDominance { kept, discarded })
    }
}

/// Test if a sorted list of indices strictly contains another one
fn strict_superset(a: &[usize], b: &[usize]) -> bool {
    a.len() > b.len() && b.iter().all(|x| a.binary_search(x).is_ok())
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Step::Essential { minterm, prime } => {
                write!(f, "essential: {} (only cover of {})", prime, minterm)
            }
            Step::RowDominance { kept, discarded } => {
                write!(f, "row dominance: {} discarded by {}", discarded, kept)
            }
            Step::ColumnDominance { kept, discarded } => {
                write!(f, "column dominance: {} dropped, implied by {}", discarded, kept)
            }
        }
    }
}
