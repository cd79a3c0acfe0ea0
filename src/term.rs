//! Implicants tracking the minterms they were built from.

use crate::*;

use bit_set::BitSet;
use std::fmt;

/// An implicant: a [Pattern] and the set of original minterms folded into it.
///
/// Terms are created from single minterms, or by merging two terms whose patterns
/// differ in a single fixed position. The set of covered minterms of a term built this
/// way always contains 2^k minterms, where k is the number of free positions.
///
/// ```
/// use qmkit::Term;
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
/// let t1 = Term::leaf(0b010, 3)?;
/// let t2 = Term::leaf(0b110, 3)?;
///
/// assert!(t1.can_merge(&t2));
/// let t = t1.merge(&t2).unwrap();
/// assert_eq!(t.to_string(), "-10");
/// assert_eq!(t.minterms().collect::<Vec<_>>(), vec![2, 6]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Term {
    pattern: Pattern,
    covered: BitSet,
}

impl Term {
    /// Create the term of a single minterm, zero-padded to ```len``` positions.
    pub fn leaf(value: u32, len: usize) -> Result<Self, QmError> {
        let pattern = Pattern::from_minterm(value, len)?;
        let mut covered = BitSet::new();
        covered.insert(value as usize);
        Ok(Self { pattern, covered })
    }

    /// The pattern of this term
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// The set of minterms folded into this term
    pub fn covered(&self) -> &BitSet {
        &self.covered
    }

    /// Iterate over covered minterms in ascending order
    pub fn minterms(&self) -> impl Iterator<Item = u32> + '_ {
        self.covered.iter().map(|m| m as u32)
    }

    /// Test if a minterm is folded into this term
    pub fn covers(&self, minterm: u32) -> bool {
        self.covered.contains(minterm as usize)
    }

    /// Number of positions fixed at ```1```, used to group terms before merging
    pub fn weight(&self) -> u32 {
        self.pattern.weight()
    }

    /// Test if two terms can be merged.
    ///
    /// This is true iff they have the same length, the same free positions,
    /// and differ in exactly one fixed position.
    pub fn can_merge(&self, other: &Self) -> bool {
        self.pattern.emerging_pattern(&other.pattern).is_some()
    }

    /// Merge two terms if possible.
    ///
    /// The differing position becomes free and the covered minterms are combined.
    pub fn merge(&self, other: &Self) -> Option<Self> {
        let pattern = self.pattern.emerging_pattern(&other.pattern)?;
        let mut covered = self.covered.clone();
        covered.union_with(&other.covered);
        Some(Self { pattern, covered })
    }

    /// Test if this term covers strictly more minterms than another, including all of them.
    pub fn dominates(&self, other: &Self) -> bool {
        self.covered.len() > other.covered.len() && self.covered.is_superset(&other.covered)
    }
}

impl From<Pattern> for Term {
    /// Build a term covering all minterms of a pattern
    fn from(pattern: Pattern) -> Self {
        let covered = pattern.minterms().map(|m| m as usize).collect();
        Self { pattern, covered }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use test_log::test;

    #[test]
    fn leaves() -> Result<(), QmError> {
        let t = Term::leaf(5, 3)?;
        assert_eq!(t.to_string(), "101");
        assert_eq!(t.weight(), 2);
        assert!(t.covers(5));
        assert!(!t.covers(4));

        let t = Term::leaf(0, 1)?;
        assert_eq!(t.to_string(), "0");

        assert!(Term::leaf(1024, 10).is_err());
        Ok(())
    }

    #[test]
    fn merging() -> Result<(), QmError> {
        let t0 = Term::leaf(0, 3)?;
        let t1 = Term::leaf(1, 3)?;
        let t3 = Term::leaf(3, 3)?;
        let t5 = Term::leaf(5, 3)?;

        // a single differing position
        let t01 = t0.merge(&t1).unwrap();
        assert_eq!(t01.to_string(), "00-");
        assert_eq!(t01.minterms().collect::<Vec<_>>(), vec![0, 1]);

        // two differing positions
        assert!(!t0.can_merge(&t3));
        assert!(t0.merge(&t3).is_none());

        // free positions must be the same
        assert!(!t01.can_merge(&t5));

        let t15 = t1.merge(&t5).unwrap();
        assert_eq!(t15.to_string(), "-01");
        let t4 = Term::leaf(4, 3)?;
        let t04 = t0.merge(&t4).unwrap();
        let t0145 = t04.merge(&t15).unwrap();
        assert_eq!(t0145.to_string(), "-0-");
        assert_eq!(t0145.minterms().collect::<Vec<_>>(), vec![0, 1, 4, 5]);
        assert_eq!(t0145, t01.merge(&t4.merge(&t5).unwrap()).unwrap());
        Ok(())
    }

    #[test]
    fn domination() -> Result<(), QmError> {
        let big = Term::from("0--".parse::<Pattern>()?);
        let small = Term::from("00-".parse::<Pattern>()?);
        let other = Term::from("-00".parse::<Pattern>()?);

        assert!(big.dominates(&small));
        assert!(!small.dominates(&big));
        assert!(!big.dominates(&big));
        assert!(!big.dominates(&other));
        Ok(())
    }
}
