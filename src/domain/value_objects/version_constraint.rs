//! Version constraint value object
//!
//! Validates npm-style range expressions (`^3.9.5`, `~1.2`, `>=1.0.0 <2`,
//! `1.x || 2.x`, `1.2.3 - 2.0.0`), dist tags (`latest`) and protocol
//! specifiers (`file:../pkg`, `npm:other@^1`). Validation happens once, when a
//! dependency is declared; the original text is kept verbatim for rendering.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Specifier prefixes accepted without range validation.
const PROTOCOL_PREFIXES: &[&str] = &[
    "file:",
    "link:",
    "npm:",
    "git+",
    "git:",
    "github:",
    "http://",
    "https://",
    "workspace:",
];

/// A validated dependency version constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionConstraint(String);

/// Why a constraint was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintError {
    pub reason: String,
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for ConstraintError {}

fn fail<T>(reason: impl Into<String>) -> Result<T, ConstraintError> {
    Err(ConstraintError {
        reason: reason.into(),
    })
}

impl VersionConstraint {
    /// Parse and validate a constraint.
    pub fn parse(input: &str) -> Result<Self, ConstraintError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return fail("constraint is empty");
        }

        if PROTOCOL_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
            return Ok(Self(trimmed.to_string()));
        }

        if is_dist_tag(trimmed) {
            return Ok(Self(trimmed.to_string()));
        }

        for range in trimmed.split("||") {
            validate_range(range.trim())?;
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for VersionConstraint {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for VersionConstraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

fn is_dist_tag(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        // `x` alone is a wildcard, `v1` is a version
        Some(c) if c.is_ascii_alphabetic() && !matches!(c, 'x' | 'X' | 'v') => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

fn validate_range(range: &str) -> Result<(), ConstraintError> {
    if range.is_empty() {
        return fail("empty range between '||'");
    }

    let tokens: Vec<&str> = range.split_whitespace().collect();

    // Hyphen range: `1.2.3 - 2.3.4`
    if tokens.len() == 3 && tokens[1] == "-" {
        validate_partial(tokens[0])?;
        return validate_partial(tokens[2]);
    }

    let mut iter = tokens.iter().peekable();
    while let Some(token) = iter.next() {
        // Allow `>= 1.2.3` with a space after the operator
        if is_bare_operator(token) {
            match iter.next() {
                Some(next) => validate_partial(next)?,
                None => return fail(format!("operator '{}' has no version", token)),
            }
            continue;
        }
        validate_comparator(token)?;
    }
    Ok(())
}

fn is_bare_operator(token: &str) -> bool {
    matches!(token, "<" | ">" | "<=" | ">=" | "=" | "^" | "~")
}

fn validate_comparator(token: &str) -> Result<(), ConstraintError> {
    let rest = if let Some(r) = token.strip_prefix(">=") {
        r
    } else if let Some(r) = token.strip_prefix("<=") {
        r
    } else if let Some(r) = token.strip_prefix("~>") {
        r
    } else if let Some(r) = token.strip_prefix(['>', '<', '=', '^', '~']) {
        r
    } else {
        token
    };

    if rest.is_empty() {
        return fail(format!("operator '{}' has no version", token));
    }
    validate_partial(rest)
}

fn validate_partial(partial: &str) -> Result<(), ConstraintError> {
    let partial = partial
        .strip_prefix('v')
        .or_else(|| partial.strip_prefix('='))
        .unwrap_or(partial);

    // Split off build metadata and prerelease
    let (core, build) = match partial.split_once('+') {
        Some((core, build)) => (core, Some(build)),
        None => (partial, None),
    };
    let (core, pre) = match core.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (core, None),
    };

    let parts: Vec<&str> = core.split('.').collect();
    if parts.is_empty() || parts.len() > 3 {
        return fail(format!("'{}' is not a version", partial));
    }

    let mut saw_wildcard = false;
    for part in &parts {
        match *part {
            "x" | "X" | "*" => saw_wildcard = true,
            "" => return fail(format!("'{}' has an empty version component", partial)),
            number => {
                if saw_wildcard {
                    return fail(format!("'{}' has a number after a wildcard", partial));
                }
                if !number.chars().all(|c| c.is_ascii_digit()) {
                    return fail(format!("unexpected '{}' in '{}'", number, partial));
                }
                if number.len() > 1 && number.starts_with('0') {
                    return fail(format!("leading zero in '{}'", partial));
                }
            }
        }
    }

    if (pre.is_some() || build.is_some()) && parts.len() != 3 {
        return fail(format!("'{}' has a prerelease on a partial version", partial));
    }
    for ident in [pre, build].into_iter().flatten() {
        if ident.is_empty()
            || ident
                .split('.')
                .any(|seg| seg.is_empty() || !seg.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'))
        {
            return fail(format!("invalid identifier '{}' in '{}'", ident, partial));
        }
    }

    Ok(())
}
