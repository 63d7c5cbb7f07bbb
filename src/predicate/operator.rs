//! Operator definitions for filter conditions.

use std::cmp::Ordering;
use std::fmt;

/// Operators accepted in a filter condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    // Comparison
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,

    // Text
    Contains,
    StartsWith,
    EndsWith,
}

impl OperatorKind {
    /// Probe order used by the condition parser.
    ///
    /// Two-character symbols come before their one-character prefixes so
    /// `a>=1` never splits on `>`.
    pub const PRIORITY: [OperatorKind; 9] = [
        OperatorKind::Ge,
        OperatorKind::Le,
        OperatorKind::Eq,
        OperatorKind::Ne,
        OperatorKind::Gt,
        OperatorKind::Lt,
        OperatorKind::Contains,
        OperatorKind::StartsWith,
        OperatorKind::EndsWith,
    ];

    /// The operator as it is spelled in a condition
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorKind::Eq => "==",
            OperatorKind::Ne => "!=",
            OperatorKind::Gt => ">",
            OperatorKind::Lt => "<",
            OperatorKind::Ge => ">=",
            OperatorKind::Le => "<=",
            OperatorKind::Contains => "contains",
            OperatorKind::StartsWith => "startswith",
            OperatorKind::EndsWith => "endswith",
        }
    }

    /// Whether this operator tests substrings rather than comparing values
    pub fn is_text_operator(&self) -> bool {
        matches!(
            self,
            OperatorKind::Contains | OperatorKind::StartsWith | OperatorKind::EndsWith
        )
    }

    /// Decide a comparison operator from the ordering of `cell` against `literal`.
    /// Text operators never match here.
    pub fn matches_ordering(&self, ordering: Ordering) -> bool {
        match self {
            OperatorKind::Eq => ordering == Ordering::Equal,
            OperatorKind::Ne => ordering != Ordering::Equal,
            OperatorKind::Gt => ordering == Ordering::Greater,
            OperatorKind::Lt => ordering == Ordering::Less,
            OperatorKind::Ge => ordering != Ordering::Less,
            OperatorKind::Le => ordering != Ordering::Greater,
            OperatorKind::Contains | OperatorKind::StartsWith | OperatorKind::EndsWith => false,
        }
    }

    /// Apply a text operator to `haystack`. Comparison operators never match here.
    pub fn matches_text(&self, haystack: &str, needle: &str) -> bool {
        match self {
            OperatorKind::Contains => haystack.contains(needle),
            OperatorKind::StartsWith => haystack.starts_with(needle),
            OperatorKind::EndsWith => haystack.ends_with(needle),
            OperatorKind::Eq
            | OperatorKind::Ne
            | OperatorKind::Gt
            | OperatorKind::Lt
            | OperatorKind::Ge
            | OperatorKind::Le => false,
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_probes_long_symbols_first() {
        let pos = |op: OperatorKind| {
            OperatorKind::PRIORITY
                .iter()
                .position(|candidate| *candidate == op)
                .unwrap()
        };
        assert!(pos(OperatorKind::Ge) < pos(OperatorKind::Gt));
        assert!(pos(OperatorKind::Le) < pos(OperatorKind::Lt));
        assert!(pos(OperatorKind::Lt) < pos(OperatorKind::Contains));
        assert_eq!(
            OperatorKind::PRIORITY
                .iter()
                .map(|op| op.as_str())
                .collect::<Vec<_>>(),
            vec![">=", "<=", "==", "!=", ">", "<", "contains", "startswith", "endswith"]
        );
    }

    #[test]
    fn test_matches_ordering() {
        assert!(OperatorKind::Ge.matches_ordering(Ordering::Equal));
        assert!(OperatorKind::Ge.matches_ordering(Ordering::Greater));
        assert!(!OperatorKind::Gt.matches_ordering(Ordering::Equal));
        assert!(OperatorKind::Le.matches_ordering(Ordering::Less));
        assert!(OperatorKind::Ne.matches_ordering(Ordering::Less));
        assert!(!OperatorKind::Eq.matches_ordering(Ordering::Less));
        assert!(!OperatorKind::Contains.matches_ordering(Ordering::Equal));
    }

    #[test]
    fn test_matches_text() {
        assert!(OperatorKind::Contains.matches_text("Santiago", "tia"));
        assert!(OperatorKind::StartsWith.matches_text("Santiago", "Sa"));
        assert!(!OperatorKind::StartsWith.matches_text("Santiago", "sa"));
        assert!(OperatorKind::EndsWith.matches_text("Santiago", "go"));
        assert!(!OperatorKind::Eq.matches_text("a", "a"));
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(OperatorKind::Eq.to_string(), "==");
        assert_eq!(OperatorKind::StartsWith.to_string(), "startswith");
        assert!(OperatorKind::EndsWith.is_text_operator());
        assert!(!OperatorKind::Le.is_text_operator());
    }
}
