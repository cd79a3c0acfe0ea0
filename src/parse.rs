//! Validation of minterm lists and variable names given as text.

use crate::*;

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static RE_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,;\s]+").unwrap());

static RE_MINTERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Parse a list of minterms separated by commas, semicolons or spaces.
///
/// An empty list is valid (it defines the constant false function).
/// Tokens which are not non-negative integers and duplicated minterms are rejected,
/// as well as minterms requiring more than [MAX_VARIABLES] variables.
///
/// ```
/// use qmkit::{parse_minterms, QmError};
///
/// assert_eq!(parse_minterms("0, 1 2,5"), Ok(vec![0, 1, 2, 5]));
/// assert_eq!(parse_minterms("  "), Ok(vec![]));
/// assert_eq!(parse_minterms("1,1,2"), Err(QmError::DuplicateMinterm(1)));
/// assert_eq!(parse_minterms("1,b"), Err(QmError::NonNumericToken("b".into())));
/// ```
pub fn parse_minterms(s: &str) -> Result<Vec<u32>, QmError> {
    let minterms = split_tokens(s)
        .map(parse_minterm)
        .collect::<Result<Vec<_>, _>>()?;
    check_minterms(&minterms)?;
    Ok(minterms)
}

/// Check that a list of minterms can be minimized.
///
/// Each minterm must appear once and all minterms must be written with at most [MAX_VARIABLES]
/// binary digits.
pub fn check_minterms(minterms: &[u32]) -> Result<(), QmError> {
    let mut seen = HashSet::new();
    if let Some(m) = minterms.iter().find(|m| !seen.insert(**m)) {
        return Err(QmError::DuplicateMinterm(*m));
    }

    let required = minterms.iter().map(|m| tools::bit_length(*m)).max().unwrap_or(0);
    if required > MAX_VARIABLES {
        return Err(QmError::VariableCountExceeded {
            required,
            max: MAX_VARIABLES,
        });
    }
    Ok(())
}

/// Parse a list of variable names separated by commas, semicolons or spaces
pub fn parse_names(s: &str) -> Result<VarNames, QmError> {
    VarNames::new(split_tokens(s))
}

fn split_tokens(s: &str) -> impl Iterator<Item = &str> {
    RE_SEPARATORS.split(s).filter(|t| !t.is_empty())
}

fn parse_minterm(token: &str) -> Result<u32, QmError> {
    if !RE_MINTERM.is_match(token) {
        return Err(QmError::NonNumericToken(token.into()));
    }
    token
        .parse()
        .map_err(|_| QmError::NonNumericToken(token.into()))
}

#[cfg(test)]
mod tests {
    use crate::*;
    use test_log::test;

    #[test]
    fn minterm_lists() -> Result<(), QmError> {
        assert_eq!(parse_minterms("3")?, vec![3]);
        assert_eq!(parse_minterms(" 7,\t2 ;  9 ")?, vec![7, 2, 9]);
        assert_eq!(parse_minterms("")?, Vec::<u32>::new());
        assert_eq!(parse_minterms("0 1023")?, vec![0, 1023]);
        Ok(())
    }

    #[test]
    fn invalid_tokens() {
        assert_eq!(
            parse_minterms("1 -2"),
            Err(QmError::NonNumericToken("-2".into()))
        );
        assert_eq!(
            parse_minterms("+2"),
            Err(QmError::NonNumericToken("+2".into()))
        );
        assert_eq!(
            parse_minterms("1.5"),
            Err(QmError::NonNumericToken("1.5".into()))
        );
        assert_eq!(
            parse_minterms("99999999999"),
            Err(QmError::NonNumericToken("99999999999".into()))
        );
    }

    #[test]
    fn invalid_lists() {
        assert_eq!(parse_minterms("1 1 2"), Err(QmError::DuplicateMinterm(1)));
        assert_eq!(parse_minterms("4, 2, 4"), Err(QmError::DuplicateMinterm(4)));
        assert_eq!(
            parse_minterms("1, 1024"),
            Err(QmError::VariableCountExceeded {
                required: 11,
                max: 10
            })
        );
    }

    #[test]
    fn names() -> Result<(), QmError> {
        let names = parse_names("x, y z")?;
        assert_eq!(names.len(), 3);
        assert_eq!(names.get(2), Some("z"));
        assert!(parse_names("x 2y").is_err());
        Ok(())
    }
}
