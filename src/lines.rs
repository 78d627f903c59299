//! Parsing of comma/range line specifications.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// An ordered set of 1-based line numbers selected by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSet {
    /// Selected line numbers, 1-based.
    lines: BTreeSet<usize>,
}

impl LineSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a specification like `"2,4"` or `"10-14,20"`.
    ///
    /// Ranges are inclusive on both ends. Line numbers are 1-based.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut lines = BTreeSet::new();
        for part in spec.split(',') {
            let part = part.trim();
            if part.is_empty() {
                return Err(Self::spec_error(spec, "empty element"));
            }
            match part.split_once('-') {
                Some((start, end)) => {
                    let start = Self::parse_number(spec, start)?;
                    let end = Self::parse_number(spec, end)?;
                    if start > end {
                        return Err(Self::spec_error(
                            spec,
                            format!("range {start}-{end} is reversed"),
                        ));
                    }
                    lines.extend(start..=end);
                }
                None => {
                    lines.insert(Self::parse_number(spec, part)?);
                }
            }
        }
        Ok(Self { lines })
    }

    /// Whether the set selects the given 1-based line number.
    pub fn contains(&self, line: usize) -> bool {
        self.lines.contains(&line)
    }

    /// Whether the set selects no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a single line number to the set.
    pub fn insert(&mut self, line: usize) {
        self.lines.insert(line);
    }

    /// Parse one numeric element of a specification.
    fn parse_number(spec: &str, text: &str) -> Result<usize> {
        let text = text.trim();
        let number: usize = text
            .parse()
            .map_err(|_| Self::spec_error(spec, format!("'{text}' is not a line number")))?;
        if number == 0 {
            return Err(Self::spec_error(spec, "line numbers are 1-based"));
        }
        Ok(number)
    }

    /// Build a line-spec error for this specification.
    fn spec_error(spec: &str, message: impl Into<String>) -> Error {
        Error::LineSpec {
            spec: spec.to_string(),
            message: message.into(),
        }
    }
}

impl FromIterator<usize> for LineSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LineSet;
    use crate::error::Error;

    fn parse_error(spec: &str) -> Error {
        LineSet::parse(spec).expect_err("spec should fail")
    }

    #[test]
    fn parses_single_lines() {
        let set = LineSet::parse("2,4").expect("spec should parse");
        assert!(set.contains(2));
        assert!(set.contains(4));
        assert!(!set.contains(3));
    }

    #[test]
    fn parses_inclusive_ranges() {
        let set = LineSet::parse("10-12,20").expect("spec should parse");
        assert!(set.contains(10));
        assert!(set.contains(11));
        assert!(set.contains(12));
        assert!(set.contains(20));
        assert!(!set.contains(13));
    }

    #[test]
    fn tolerates_whitespace() {
        let set = LineSet::parse(" 1 , 3 - 4 ").expect("spec should parse");
        assert!(set.contains(1));
        assert!(set.contains(3));
        assert!(set.contains(4));
    }

    #[test]
    fn rejects_reversed_ranges() {
        let error = parse_error("5-3");
        assert!(matches!(error, Error::LineSpec { .. }));
    }

    #[test]
    fn rejects_zero() {
        let error = parse_error("0");
        assert!(matches!(error, Error::LineSpec { .. }));
    }

    #[test]
    fn rejects_non_numeric_elements() {
        let error = parse_error("1,x");
        assert!(matches!(error, Error::LineSpec { .. }));
    }

    #[test]
    fn rejects_empty_elements() {
        let error = parse_error("1,,2");
        assert!(matches!(error, Error::LineSpec { .. }));
    }
}
