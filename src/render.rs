//! Display solutions with custom variable names

use crate::*;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static RE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z01-9_]*$").unwrap());

/// Symbols used to write a sum of products
pub struct RenderConfig<'a> {
    s_or: &'a str,
    s_and: &'a str,
    s_not: &'a str,
    postfix_not: bool,
    s_false: &'a str,
    s_true: &'a str,
}

/// Textbook notation: ```AB' + C```
pub static DEFAULT_RENDER_CFG: RenderConfig = RenderConfig {
    s_or: " + ",
    s_and: "",
    s_not: "'",
    postfix_not: true,
    s_false: "0",
    s_true: "1",
};

/// Programming notation: ```A & !B | C```
pub static PROGRAMMING_RENDER_CFG: RenderConfig = RenderConfig {
    s_or: " | ",
    s_and: " & ",
    s_not: "!",
    postfix_not: false,
    s_false: "0",
    s_true: "1",
};

/// Association between the positions of patterns and variable names.
///
/// Position 0 corresponds to the most significant bit of the minterms. Names must be valid
/// identifiers, unique, and at most [MAX_VARIABLES] names can be given.
///
/// ```
/// use qmkit::{minimize, render, VarNames};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
/// let names: VarNames = "x y z".parse()?;
/// let solutions = minimize(&[5])?;
/// assert_eq!(render(&solutions[0], &names)?, "xy'z");
///
/// // Missing names are reported
/// let names: VarNames = "x y".parse()?;
/// assert!(render(&solutions[0], &names).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct VarNames {
    names: Vec<String>,
}

impl VarNames {
    /// Create a table of names, rejecting invalid or duplicated names
    pub fn new<I>(names: I) -> Result<Self, QmError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut result = Self::default();
        for name in names {
            result.push(name.into())?;
        }
        Ok(result)
    }

    /// The canonical letters for the first ```count``` positions
    pub fn letters(count: usize) -> Result<Self, QmError> {
        if count > MAX_VARIABLES {
            return Err(QmError::VariableCountExceeded {
                required: count,
                max: MAX_VARIABLES,
            });
        }
        Self::new(crate::pattern::LETTERS[..count].iter().map(|c| c.to_string()))
    }

    fn push(&mut self, name: String) -> Result<(), QmError> {
        if !RE_NAME.is_match(&name) {
            return Err(QmError::InvalidName(name));
        }
        if self.names.contains(&name) {
            return Err(QmError::ConflictingName(name));
        }
        if self.names.len() >= MAX_VARIABLES {
            return Err(QmError::VariableCountExceeded {
                required: self.names.len() + 1,
                max: MAX_VARIABLES,
            });
        }
        self.names.push(name);
        Ok(())
    }

    /// Number of named positions
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Return whether no position is named
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Get the name of a position if it exists
    pub fn get(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(String::as_str)
    }

    /// Get the name of a position or fail
    pub fn name(&self, position: usize) -> Result<&str, QmError> {
        self.get(position)
            .ok_or(QmError::MissingVariableName(position))
    }

    /// Check that all positions of a pattern are named.
    ///
    /// Free positions count as well: a pattern of length 3 needs 3 names even if it only fixes
    /// its first position.
    pub fn check(&self, pattern: &Pattern) -> Result<(), QmError> {
        if pattern.len() > self.len() {
            return Err(QmError::MissingVariableName(self.len()));
        }
        Ok(())
    }
}

impl FromStr for VarNames {
    type Err = QmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_names(s)
    }
}

impl fmt::Display for VarNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}

impl RenderConfig<'_> {
    /// Write a single product
    pub fn render_pattern(&self, pattern: &Pattern, names: &VarNames) -> Result<String, QmError> {
        names.check(pattern)?;
        if pattern.is_free_pattern() {
            return Ok(self.s_true.into());
        }
        let literals = pattern
            .iter_fixed_values()
            .map(|(i, value)| -> Result<String, QmError> {
                let name = names.name(i)?;
                Ok(match (value, self.postfix_not) {
                    (true, _) => name.to_string(),
                    (false, true) => format!("{}{}", name, self.s_not),
                    (false, false) => format!("{}{}", self.s_not, name),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(literals.join(self.s_and))
    }

    /// Write a full solution as a sum of products.
    ///
    /// Every position of every product must have a name, including free positions, so the
    /// constant ```1``` over 2 variables needs 2 names. The empty solution needs no name.
    pub fn render(&self, solution: &Solution, names: &VarNames) -> Result<String, QmError> {
        if solution.is_empty() {
            return Ok(self.s_false.into());
        }
        let products = solution
            .patterns()
            .map(|p| self.render_pattern(&p, names))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(products.join(self.s_or))
    }
}

/// Write a solution with the given variable names, using the textbook notation.
///
/// Names are required for all positions of the products, free positions included
/// (see [RenderConfig::render]).
pub fn render(solution: &Solution, names: &VarNames) -> Result<String, QmError> {
    DEFAULT_RENDER_CFG.render(solution, names)
}

/// Write all alternative solutions, each under a heading.
///
/// A single solution is introduced by ```Solution:```, several solutions are numbered
/// (```Solution #1:```, ```Solution #2:```, ...).
pub fn report(solutions: &[Solution], names: &VarNames) -> Result<String, QmError> {
    let single = solutions.len() == 1;
    let blocks = solutions
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let heading = match single {
                true => "Solution:".to_string(),
                false => format!("Solution #{}:", i + 1),
            };
            render(s, names).map(|expr| format!("{}\n{}\n", heading, expr))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(blocks.iter().join("\n"))
}
