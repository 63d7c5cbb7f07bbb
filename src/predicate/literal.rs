//! Type inference for condition literals.

use crate::access::format_float;
use std::fmt;

/// A literal with the type inferred from its spelling
#[derive(Debug, Clone, PartialEq)]
pub enum TypedLiteral {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl TypedLiteral {
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypedLiteral::Bool(_) => "bool",
            TypedLiteral::Int(_) => "int",
            TypedLiteral::Float(_) => "float",
            TypedLiteral::String(_) => "string",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, TypedLiteral::Int(_) | TypedLiteral::Float(_))
    }

    /// Canonical text used by the substring operators.
    ///
    /// Booleans are capitalised (`True`, `False`); other kinds match `Display`.
    pub fn to_text(&self) -> String {
        match self {
            TypedLiteral::Bool(true) => "True".to_string(),
            TypedLiteral::Bool(false) => "False".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for TypedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedLiteral::Bool(b) => write!(f, "{}", b),
            TypedLiteral::Int(i) => write!(f, "{}", i),
            TypedLiteral::Float(v) => f.write_str(&format_float(*v)),
            TypedLiteral::String(s) => f.write_str(s),
        }
    }
}

/// Strip one layer of matching `'` or `"` quotes
fn strip_quotes(raw: &str) -> &str {
    for quote in ['\'', '"'] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

/// Infer a typed value from a raw literal, ignoring the target column's type.
///
/// Never fails: anything that is not a boolean or a number stays a string.
pub fn coerce_literal(raw: &str) -> TypedLiteral {
    let text = strip_quotes(raw);

    if text.eq_ignore_ascii_case("true") {
        return TypedLiteral::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return TypedLiteral::Bool(false);
    }

    let numeric = text.trim();
    if numeric.contains('.') {
        if let Ok(v) = numeric.parse::<f64>() {
            return TypedLiteral::Float(v);
        }
    } else if let Ok(i) = numeric.parse::<i64>() {
        return TypedLiteral::Int(i);
    }

    TypedLiteral::String(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_stripping() {
        assert_eq!(coerce_literal("'5'"), TypedLiteral::Int(5));
        assert_eq!(coerce_literal("\"5\""), TypedLiteral::Int(5));
        assert_eq!(coerce_literal("5"), TypedLiteral::Int(5));
        assert_eq!(
            coerce_literal("'John'"),
            TypedLiteral::String("John".to_string())
        );
    }

    #[test]
    fn test_only_one_matching_layer_is_stripped() {
        assert_eq!(
            coerce_literal("''a''"),
            TypedLiteral::String("'a'".to_string())
        );
        assert_eq!(
            coerce_literal("'a\""),
            TypedLiteral::String("'a\"".to_string())
        );
        assert_eq!(coerce_literal("'"), TypedLiteral::String("'".to_string()));
        assert_eq!(coerce_literal("''"), TypedLiteral::String(String::new()));
    }

    #[test]
    fn test_boolean_case_insensitive() {
        assert_eq!(coerce_literal("TRUE"), TypedLiteral::Bool(true));
        assert_eq!(coerce_literal("True"), TypedLiteral::Bool(true));
        assert_eq!(coerce_literal("true"), TypedLiteral::Bool(true));
        assert_eq!(coerce_literal("'false'"), TypedLiteral::Bool(false));
        assert_eq!(
            coerce_literal("truthy"),
            TypedLiteral::String("truthy".to_string())
        );
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_numeric_and_string_fallback() {
        assert_eq!(coerce_literal("3.14"), TypedLiteral::Float(3.14));
        assert_eq!(coerce_literal("3"), TypedLiteral::Int(3));
        assert_eq!(coerce_literal("-42"), TypedLiteral::Int(-42));
        assert_eq!(coerce_literal(".5"), TypedLiteral::Float(0.5));
        assert_eq!(coerce_literal("abc"), TypedLiteral::String("abc".to_string()));
        assert_eq!(
            coerce_literal("3.14.15"),
            TypedLiteral::String("3.14.15".to_string())
        );
        // No '.' means only an integer parse is attempted
        assert_eq!(coerce_literal("1e5"), TypedLiteral::String("1e5".to_string()));
        assert_eq!(
            coerce_literal("99999999999999999999"),
            TypedLiteral::String("99999999999999999999".to_string())
        );
        assert_eq!(coerce_literal(""), TypedLiteral::String(String::new()));
    }

    #[test]
    fn test_numbers_are_trimmed_inside_quotes() {
        assert_eq!(coerce_literal("' 7 '"), TypedLiteral::Int(7));
        assert_eq!(
            coerce_literal("' x '"),
            TypedLiteral::String(" x ".to_string())
        );
    }

    #[test]
    fn test_canonical_text() {
        assert_eq!(TypedLiteral::Int(7).to_text(), "7");
        assert_eq!(coerce_literal("007").to_text(), "7");
        assert_eq!(TypedLiteral::Float(3.0).to_text(), "3.0");
        assert_eq!(TypedLiteral::Float(2.5).to_text(), "2.5");
        assert_eq!(coerce_literal("true").to_text(), "True");
        assert_eq!(TypedLiteral::Bool(false).to_text(), "False");
        assert_eq!(TypedLiteral::Bool(false).to_string(), "false");
        assert_eq!(TypedLiteral::String("Sa".to_string()).to_text(), "Sa");
    }
}
