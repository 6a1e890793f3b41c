//! Identifier quoting for columns embedded in raw SQL fragments.
//!
//! Only plain identifiers are quoted: one or more `[0-9a-zA-Z]` segments joined
//! by single periods (`col`, `table.col`, `schema.table.col`). Each segment is
//! wrapped in Postgres identifier quotes:
//!
//! ```
//! use pgscope::quote_ident_segments;
//!
//! assert_eq!(quote_ident_segments("users.tags"), r#""users"."tags""#);
//! // Anything else is embedded unchanged.
//! assert_eq!(quote_ident_segments("lower(tags)"), "lower(tags)");
//! ```
//!
//! Identifiers that do not match are passed through as-is. Callers must not
//! route untrusted text into a column position.
//!
//! Quoting also makes a name case-sensitive. `userTags` becomes `"userTags"`
//! here, while the pattern, empty-or-null and null-fallback helpers embed the
//! column unquoted, where Postgres folds it to `usertags`. A mixed-case name
//! therefore refers to different columns depending on the helper. Keep column
//! names lowercase, or pass an already quoted name to every helper.

use regex::Regex;
use std::sync::OnceLock;

fn plain_ident_re() -> &'static Regex {
    static PLAIN_IDENT_RE: OnceLock<Regex> = OnceLock::new();
    PLAIN_IDENT_RE.get_or_init(|| {
        Regex::new(r"^[0-9a-zA-Z]+(?:\.[0-9a-zA-Z]+)*$").expect("invalid built-in identifier regex")
    })
}

/// Returns `true` if `column` is a plain (optionally dotted) alphanumeric identifier.
pub fn is_plain_ident(column: &str) -> bool {
    plain_ident_re().is_match(column)
}

/// Quote each segment of a plain identifier, or return the input unchanged.
pub fn quote_ident_segments(column: &str) -> String {
    if !is_plain_ident(column) {
        #[cfg(feature = "tracing")]
        tracing::debug!(column, "identifier is not plain; embedding unquoted");
        return column.to_string();
    }

    let mut out = String::with_capacity(column.len() + 4);
    for (i, segment) in column.split('.').enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push('"');
        out.push_str(segment);
        out.push('"');
    }
    out
}
