//! Assemble the minimal covers of a function.

use crate::*;

use bit_set::BitSet;
use delegate::delegate;
use itertools::Itertools;
use log::debug;
use std::fmt;
use std::slice::Iter;

/// One minimal sum-of-products cover of a function.
///
/// A solution is an ordered list of prime implicants. An empty solution represents the
/// constant ```0``` (the function without minterms).
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Solution {
    terms: Vec<Term>,
}

impl Solution {
    /// Build a solution from its products, in the given order.
    ///
    /// ```
    /// use qmkit::{Pattern, Solution, Term};
    /// # use qmkit::QmError;
    /// # fn main() -> Result<(), QmError> {
    /// let terms = vec![Term::from("1-".parse::<Pattern>()?), Term::leaf(1, 2)?];
    /// let solution = Solution::new(terms);
    /// assert_eq!(solution.to_string(), "A + A'B");
    /// assert_eq!(Solution::new(vec![]).to_string(), "0");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    delegate! {
        to self.terms {
            /// Number of products in this solution
            pub fn len(&self) -> usize;
            /// Return whether this solution is the constant ```0```
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> Iter<'_, Term>;
        }
    }

    /// Iterate over the patterns of the products
    pub fn patterns(&self) -> impl Iterator<Item = Pattern> + '_ {
        self.terms.iter().map(Term::pattern)
    }

    /// All minterms covered by at least one product
    pub fn covered(&self) -> BitSet {
        let mut covered = BitSet::new();
        for t in &self.terms {
            covered.union_with(t.covered());
        }
        covered
    }

    /// Total number of literals in the expression
    pub fn literal_count(&self) -> u32 {
        self.terms.iter().map(|t| t.pattern().literal_count()).sum()
    }

    /// Write this solution with the canonical letters (```A``` to ```J```).
    ///
    /// Products are separated by ```" + "```, the empty solution gives ```"0"```.
    pub fn to_standard_form(&self) -> String {
        if self.is_empty() {
            return "0".into();
        }
        self.terms
            .iter()
            .map(|t| t.pattern().to_standard_form())
            .join(" + ")
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Term;
    type IntoIter = Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl IntoIterator for Solution {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_standard_form())
    }
}

/// Full record of the minimization of a function.
///
/// Besides the solutions, it keeps the intermediate results of each stage: the tabulation,
/// the reduction steps, and the Petrick problem if the reduction did not cover all minterms.
///
/// ```
/// use qmkit::Minimization;
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
/// let m = Minimization::solve(&[0, 1, 2, 5, 6, 7])?;
///
/// assert_eq!(m.variables(), 3);
/// assert!(m.petrick().is_some());
/// let solutions: Vec<String> = m.solutions().iter().map(|s| s.to_string()).collect();
/// assert_eq!(solutions, vec!["A'B' + BC' + AC", "A'C' + B'C + AB"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Minimization {
    variables: usize,
    tabulation: Tabulation,
    context: SolverContext,
    petrick: Option<Petrick>,
    solutions: Vec<Solution>,
}

impl Minimization {
    /// Minimize the function defined by a set of minterms.
    ///
    /// The number of variables is the number of binary digits of the largest minterm.
    /// Fails if the minterms contain duplicates or need more than [MAX_VARIABLES] variables.
    pub fn solve(minterms: &[u32]) -> Result<Self, QmError> {
        check_minterms(minterms)?;

        let mut minterms = minterms.to_vec();
        minterms.sort_unstable();
        let variables = match minterms.last() {
            None => {
                debug!("no minterm: constant false");
                return Ok(Self {
                    solutions: vec![Solution::default()],
                    ..Self::default()
                });
            }
            Some(max) => tools::bit_length(*max),
        };

        let leaves = minterms
            .iter()
            .map(|m| Term::leaf(*m, variables))
            .collect::<Result<Vec<_>, _>>()?;
        let tabulation = Tabulation::from_terms(leaves);
        let context = SolverContext::new(minterms, tabulation.candidates().to_vec()).reduce();

        let (petrick, solutions) = match context.is_covered() {
            true => (None, vec![Solution::new(context.primes().to_vec())]),
            false => {
                let petrick = Petrick::new(&context);
                let solutions = petrick
                    .solve()
                    .iter()
                    .map(|product| {
                        product
                            .iter()
                            .filter_map(|l| petrick.candidate(*l))
                            .chain(context.primes())
                            .cloned()
                            .collect()
                    })
                    .map(Solution::new)
                    .collect();
                (Some(petrick), solutions)
            }
        };
        debug!("{} minimal solution(s)", solutions.len());

        Ok(Self {
            variables,
            tabulation,
            context,
            petrick,
            solutions,
        })
    }

    /// Number of variables used by the function
    pub fn variables(&self) -> usize {
        self.variables
    }

    /// The first stage, listing all candidate prime implicants
    pub fn tabulation(&self) -> &Tabulation {
        &self.tabulation
    }

    /// State of the coverage stage at the end of the reduction loop
    pub fn context(&self) -> &SolverContext {
        &self.context
    }

    /// The prime implicants shared by all solutions
    pub fn primes(&self) -> &[Term] {
        self.context.primes()
    }

    /// The remaining coverage problem, if the reduction rules did not cover all minterms
    pub fn petrick(&self) -> Option<&Petrick> {
        self.petrick.as_ref()
    }

    /// All minimal solutions
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Take the solutions
    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }
}

/// Compute all minimal sum-of-products covers of the function defined by a set of minterms.
///
/// ```
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
/// let solutions = qmkit::minimize(&[5])?;
/// assert_eq!(solutions.len(), 1);
/// assert_eq!(solutions[0].to_string(), "AB'C");
/// # Ok(())
/// # }
/// ```
pub fn minimize(minterms: &[u32]) -> Result<Vec<Solution>, QmError> {
    Minimization::solve(minterms).map(Minimization::into_solutions)
}

#[cfg(test)]
mod tests {
    use crate::*;
    use test_log::test;

    fn forms(solutions: &[Solution]) -> Vec<String> {
        solutions.iter().map(Solution::to_standard_form).collect()
    }

    #[test]
    fn constants() -> Result<(), QmError> {
        assert_eq!(forms(&minimize(&[])?), vec!["0"]);
        assert_eq!(forms(&minimize(&[0, 1, 2, 3])?), vec!["1"]);
        assert_eq!(forms(&minimize(&[0, 1])?), vec!["1"]);
        assert_eq!(forms(&minimize(&[0])?), vec!["A'"]);
        Ok(())
    }

    #[test]
    fn essentials_only() -> Result<(), QmError> {
        let m = Minimization::solve(&[1, 3, 6, 7])?;
        assert!(m.petrick().is_none());
        assert_eq!(forms(m.solutions()), vec!["A'C + AB"]);
        assert_eq!(m.primes().len(), 2);

        assert_eq!(forms(&minimize(&[2, 1])?), vec!["A'B + AB'"]);
        Ok(())
    }

    #[test]
    fn petrick_and_primes() -> Result<(), QmError> {
        // 8 is only covered by -000, which leaves a cyclic core on the 3 lower variables
        let m = Minimization::solve(&[0, 1, 2, 5, 6, 7, 8])?;
        assert_eq!(m.primes().len(), 1);
        assert!(m.petrick().is_some());

        let solutions = m.solutions();
        assert!(solutions.len() > 1);
        for s in solutions {
            assert_eq!(s.len(), 4);
            assert_eq!(s.patterns().last(), Some("-000".parse::<Pattern>()?));
            let expected: Vec<usize> = vec![0, 1, 2, 5, 6, 7, 8];
            assert_eq!(s.covered().iter().collect::<Vec<_>>(), expected);
        }
        Ok(())
    }

    #[test]
    fn errors() {
        assert_eq!(minimize(&[1, 1, 2]), Err(QmError::DuplicateMinterm(1)));
        assert_eq!(
            minimize(&[3, 1024]),
            Err(QmError::VariableCountExceeded {
                required: 11,
                max: MAX_VARIABLES
            })
        );
        assert!(minimize(&[1023]).is_ok());
    }

    #[test]
    fn literal_count() -> Result<(), QmError> {
        let solutions = minimize(&[0, 1, 2, 5, 6, 7])?;
        assert_eq!(solutions.len(), 2);
        assert!(solutions.iter().all(|s| s.literal_count() == 6));
        Ok(())
    }
}
