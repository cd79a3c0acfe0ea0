//! Minimize Boolean functions given by their minterms with the Quine-McCluskey method.
//!
//! A function of up to [10 variables](MAX_VARIABLES) is defined by its *minterms*: the integers whose
//! binary digits give the variable assignments for which the function is true.
//! The most significant digit corresponds to the first variable (```A``` in canonical form).
//! The number of variables is the number of binary digits of the largest minterm.
//!
//! The minimization computes all minimal sum-of-products expressions of the function (with
//! the smallest number of products). Several minimal expressions may exist, they are all returned
//! in a deterministic order.
//!
//! ```
//! use qmkit::minimize;
//! # use qmkit::QmError;
//! # fn main() -> Result<(), QmError> {
//!
//! let solutions = minimize(&[1, 3, 6, 7])?;
//! assert_eq!(solutions.len(), 1);
//! assert_eq!(solutions[0].to_string(), "A'C + AB");
//!
//! // Constant functions
//! assert_eq!(minimize(&[0, 1, 2, 3])?[0].to_string(), "1");
//! assert_eq!(minimize(&[])?[0].to_string(), "0");
//! # Ok(())
//! # }
//! ```
//!
//! # Patterns and terms
//!
//! A [Pattern] fixes some positions to ```0``` or ```1``` and leaves the others free (```-```).
//! A [Term] associates a pattern with the set of minterms it covers. Two terms can be merged if they
//! have the same free positions and differ in a single fixed position.
//!
//! # Stages of the minimization
//!
//! 1. The [tabulation](Tabulation) merges terms of adjacent groups (by number of ```1```) level by
//!    level, until no merge is possible. It gives a pool of candidate prime implicants.
//! 2. The [reduction](SolverContext::reduce) selects essential prime implicants and eliminates
//!    dominated rows and columns of the coverage table, until all minterms are covered or no rule applies.
//! 3. The remaining coverage problem is solved exhaustively with [Petrick's method](Petrick).
//!
//! The [Minimization] record keeps the intermediate results of all stages.
//!
//! ```
//! use qmkit::Minimization;
//! # use qmkit::QmError;
//! # fn main() -> Result<(), QmError> {
//!
//! let m = Minimization::solve(&[0, 1, 2, 5, 6, 7])?;
//! for (label, term) in m.petrick().unwrap().labels() {
//!     println!("{}: {}", label, term);
//! }
//! assert_eq!(m.solutions().len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Input and output
//!
//! Minterm lists can be [parsed](parse_minterms) from text, which rejects invalid tokens and duplicates.
//! Solutions can be [rendered](render) with custom [variable names](VarNames).
//!
//! ```
//! use qmkit::{parse_minterms, minimize, report, VarNames};
//! # use qmkit::QmError;
//! # fn main() -> Result<(), QmError> {
//!
//! let minterms = parse_minterms("0, 1, 2, 5, 6, 7")?;
//! let names: VarNames = "x y z".parse()?;
//!
//! let text = report(&minimize(&minterms)?, &names)?;
//! assert!(text.starts_with("Solution #1:\nx'y' + yz' + xz\n"));
//! # Ok(())
//! # }
//! ```

mod error;
mod parse;
mod pattern;
mod petrick;
mod reduce;
mod render;
mod solution;
mod tabulation;
mod term;
pub mod tools;

// Export public structures and API
pub use error::QmError;
pub use parse::{check_minterms, parse_minterms, parse_names};
pub use pattern::{Pattern, MAX_VARIABLES};
pub use petrick::{Petrick, Product};
pub use reduce::{Reduction, SolverContext, Step, REDUCTION_RULES};
pub use render::{
    render, report, RenderConfig, VarNames, DEFAULT_RENDER_CFG, PROGRAMMING_RENDER_CFG,
};
pub use solution::{minimize, Minimization, Solution};
pub use tabulation::{Bucket, Level, Tabulation};
pub use term::Term;
