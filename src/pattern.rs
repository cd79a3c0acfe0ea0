use crate::*;

use std::fmt;
use std::str::FromStr;

/// Largest number of variables (positions in a pattern) supported by the canonical letter scheme.
pub const MAX_VARIABLES: usize = 10;

/// Letters used by the canonical form, one per position.
pub(crate) static LETTERS: [char; MAX_VARIABLES] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// A tri-state pattern over a fixed number of positions.
///
/// Each position is either fixed to ```1```, fixed to ```0``` or free (```-```).
/// Position 0 is the most significant bit of the covered minterms and is associated to
/// the first variable (```A``` in canonical form).
///
/// The fixed positions are stored in two packed bit masks, so that equality and hashing
/// are purely structural: patterns can be used directly as keys to detect duplicates.
///
/// A Pattern can be parsed from strings where the position in the string defines the
/// variable and the character defines its state: - for free, 0 for inactive, 1 for active.
/// To make the strings easier to read, spaces and single quotes are ignored.
///
/// ```
/// use qmkit::Pattern;
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
/// let p: Pattern = "1-01".parse()?;
/// assert_eq!(p.len(), 4);
/// assert_eq!(p.weight(), 2);
/// assert!(p.covers(0b1001));
/// assert!(p.covers(0b1101));
/// assert!(!p.covers(0b0101));
/// assert_eq!(p.to_standard_form(), "AC'D");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Pattern {
    len: u8,
    pub(crate) positive: u16,
    pub(crate) negative: u16,
}

impl Pattern {
    /// Create a pattern where all positions are free
    pub fn free(len: usize) -> Result<Self, QmError> {
        check_length(len)?;
        Ok(Self {
            len: len as u8,
            positive: 0,
            negative: 0,
        })
    }

    /// Create the pattern matching a single minterm written on ```len``` binary digits.
    ///
    /// Fails if ```len``` exceeds [MAX_VARIABLES] or if the value does not fit.
    pub fn from_minterm(value: u32, len: usize) -> Result<Self, QmError> {
        check_length(len)?;
        let required = tools::bit_length(value);
        if value != 0 && required > len {
            return Err(QmError::VariableCountExceeded { required, max: len });
        }
        let positive = spread(value, len);
        Ok(Self {
            len: len as u8,
            positive,
            negative: mask(len) & !positive,
        })
    }

    /// Number of positions in this pattern
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return whether this pattern has no position at all
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the state of a position: ```Some(value)``` if it is fixed, ```None``` if it is free
    pub fn get(&self, position: usize) -> Option<bool> {
        if position >= self.len() {
            return None;
        }
        let bit = 1 << position;
        if self.positive & bit != 0 {
            Some(true)
        } else if self.negative & bit != 0 {
            Some(false)
        } else {
            None
        }
    }

    /// Iterate over the state of all positions
    pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }

    /// Iterate over fixed positions and their value
    pub fn iter_fixed_values(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i, v)))
    }

    /// Number of positions fixed at ```1```
    pub fn weight(&self) -> u32 {
        self.positive.count_ones()
    }

    /// Number of fixed positions, i.e. of literals in the corresponding product
    pub fn literal_count(&self) -> u32 {
        (self.positive | self.negative).count_ones()
    }

    /// Number of free positions
    pub fn free_count(&self) -> u32 {
        self.len() as u32 - self.literal_count()
    }

    /// Test if all positions are free (the pattern covers all minterms)
    pub fn is_free_pattern(&self) -> bool {
        self.positive | self.negative == 0
    }

    /// Extract the pattern emerging from a pair of patterns if it exists.
    ///
    /// A new pattern emerges from two patterns of the same length with the same free positions
    /// and a single conflicting position. The conflicting position becomes free in the result.
    /// This relation is symmetric.
    pub fn emerging_pattern(&self, other: &Self) -> Option<Self> {
        if self.len != other.len || self.positive | self.negative != other.positive | other.negative
        {
            return None;
        }
        let conflicts = (self.positive & other.negative) | (self.negative & other.positive);
        if conflicts.count_ones() != 1 {
            return None;
        }
        Some(Self {
            len: self.len,
            positive: self.positive & !conflicts,
            negative: self.negative & !conflicts,
        })
    }

    /// Check if a minterm is contained in this pattern
    pub fn covers(&self, minterm: u32) -> bool {
        if minterm >> self.len() != 0 {
            return false;
        }
        let bits = spread(minterm, self.len());
        bits & self.negative == 0 && self.positive & !bits == 0
    }

    /// Test if this pattern contains the given pattern.
    pub fn contains(&self, p: &Pattern) -> bool {
        self.len == p.len
            && p.positive & self.positive == self.positive
            && p.negative & self.negative == self.negative
    }

    /// List all minterms contained in this pattern, in ascending order
    pub fn minterms(&self) -> impl Iterator<Item = u32> + '_ {
        (0..1u32 << self.len()).filter(move |m| self.covers(*m))
    }

    /// Write this pattern as a product of canonical letters.
    ///
    /// A position fixed at ```1``` gives the letter of the position, a position fixed at ```0```
    /// gives the primed letter and free positions are skipped. If all positions are free,
    /// the pattern is written as the constant ```1```.
    pub fn to_standard_form(&self) -> String {
        if self.is_free_pattern() {
            return "1".into();
        }
        let mut result = String::new();
        for (i, value) in self.iter_fixed_values() {
            result.push(LETTERS[i]);
            if !value {
                result.push('\'');
            }
        }
        result
    }
}

/// Bit mask covering all positions of a pattern
fn mask(len: usize) -> u16 {
    ((1u32 << len) - 1) as u16
}

/// Move the binary digits of a value to their position: the most significant digit goes first
fn spread(value: u32, len: usize) -> u16 {
    (0..len)
        .filter(|i| (value >> (len - 1 - i)) & 1 == 1)
        .fold(0, |bits, i| bits | (1 << i))
}

fn check_length(len: usize) -> Result<(), QmError> {
    if len > MAX_VARIABLES {
        return Err(QmError::VariableCountExceeded {
            required: len,
            max: MAX_VARIABLES,
        });
    }
    Ok(())
}

impl FromStr for Pattern {
    type Err = QmError;

    fn from_str(descr: &str) -> Result<Pattern, QmError> {
        let mut p = Pattern::default();
        let mut idx = 0;
        for c in descr.chars() {
            match c {
                ' ' | '\t' | '\'' => continue, // skip spacing and ` for formatting
                '-' => (),
                '0' | '1' if idx >= MAX_VARIABLES => (),
                '0' => p.negative |= 1 << idx,
                '1' => p.positive |= 1 << idx,
                _ => return Err(QmError::InvalidPattern(descr.into())),
            };
            idx += 1;
        }
        check_length(idx)?;
        p.len = idx as u8;
        Ok(p)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self
            .iter()
            .map(|v| match v {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            })
            .collect();
        write!(f, "{}", &s)
    }
}
