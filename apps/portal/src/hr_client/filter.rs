//! OData `$filter` expressions.
//!
//! Field names are `&'static str` so only compile-time constants can name a
//! property. Values are user content and are always emitted as escaped OData
//! string literals.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Clause {
    field: &'static str,
    literal: String,
}

/// A conjunction of `field eq 'value'` clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ODataFilter {
    clauses: Vec<Clause>,
}

impl ODataFilter {
    pub fn eq(field: &'static str, value: &str) -> Self {
        Self {
            clauses: vec![Clause {
                field,
                literal: quote_literal(value),
            }],
        }
    }

    pub fn and_eq(mut self, field: &'static str, value: &str) -> Self {
        self.clauses.push(Clause {
            field,
            literal: quote_literal(value),
        });
        self
    }
}

impl fmt::Display for ODataFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{} eq {}", clause.field, clause.literal)?;
        }
        Ok(())
    }
}

/// Wraps `value` in single quotes, doubling any embedded quote.
fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}
