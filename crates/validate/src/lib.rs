//! Format predicates and batch validation for paperkit
//!
//! Quick string checks (`is_date`, `is_hyperlink`, ...) plus a
//! [`Rule`] type for validating whole slices of values at once.
//!
//! # Examples
//!
//! ```
//! use paperkit_validate::{invalid_indices, is_date, Rule};
//!
//! assert!(is_date("2024-02-29"));
//! assert!(!is_date("2024-13-01"));
//!
//! let emails = ["a@example.com", "not-an-email", "b@example.org"];
//! let invalid = invalid_indices(&emails, &Rule::Email).unwrap();
//! assert_eq!(invalid, vec![1]);
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;
use validator::ValidateEmail;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[1-2][0-9]|3[0-1])$")
        .expect("Invalid date regex")
});

static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid integer regex"));

static DECIMAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("Invalid decimal regex"));

static HYPERLINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^(https*://)?([^\s&;"':<>]+\.)+[a-z0-9]+(/\S*)*$"#)
        .expect("Invalid hyperlink regex")
});

/// Errors that can occur during validation
#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("Invalid validation pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ValidateError>;

/// Check whether a string is empty or whitespace only
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check whether a string is a `yyyy-mm-dd` calendar-shaped date.
///
/// Validates the shape only; `2024-02-31` passes.
#[must_use]
pub fn is_date(value: &str) -> bool {
    DATE_PATTERN.is_match(value)
}

/// Check whether a string is an unsigned integer
#[must_use]
pub fn is_integer(value: &str) -> bool {
    INTEGER_PATTERN.is_match(value)
}

/// Check whether a string is an unsigned decimal number
#[must_use]
pub fn is_decimal(value: &str) -> bool {
    DECIMAL_PATTERN.is_match(value)
}

/// Check whether a string looks like a hyperlink. The scheme is optional.
#[must_use]
pub fn is_hyperlink(value: &str) -> bool {
    HYPERLINK_PATTERN.is_match(value)
}

/// Check whether a string is a valid email address
#[must_use]
pub fn is_email(value: &str) -> bool {
    value.validate_email()
}

/// Rules supported by [`invalid_indices`] and [`Rule::matches`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum Rule {
    Email,
    Date,
    Integer,
    Decimal,
    Hyperlink,
    Range { min: f64, max: f64 },
    Pattern { pattern: String },
}

impl Rule {
    /// Check one value against this rule. Blank values never match.
    pub fn matches(&self, value: &str) -> Result<bool> {
        let custom = self.compile_pattern()?;
        Ok(matches_rule(value, self, custom.as_ref()))
    }

    fn compile_pattern(&self) -> Result<Option<Regex>> {
        match self {
            Rule::Pattern { pattern } => Ok(Some(Regex::new(pattern)?)),
            _ => Ok(None),
        }
    }
}

/// Indices of values that fail a rule.
///
/// The custom pattern of [`Rule::Pattern`] is compiled once for the
/// whole batch.
pub fn invalid_indices<S: AsRef<str>>(values: &[S], rule: &Rule) -> Result<Vec<usize>> {
    let custom = rule.compile_pattern()?;
    let mut invalid = Vec::new();
    for (index, value) in values.iter().enumerate() {
        if !matches_rule(value.as_ref(), rule, custom.as_ref()) {
            invalid.push(index);
        }
    }
    Ok(invalid)
}

fn matches_rule(value: &str, rule: &Rule, custom: Option<&Regex>) -> bool {
    if is_blank(value) {
        return false;
    }
    match rule {
        Rule::Email => is_email(value),
        Rule::Date => is_date(value),
        Rule::Integer => is_integer(value),
        Rule::Decimal => is_decimal(value),
        Rule::Hyperlink => is_hyperlink(value),
        Rule::Range { min, max } => value
            .trim()
            .parse::<f64>()
            .map(|number| number >= *min && number <= *max)
            .unwrap_or(false),
        Rule::Pattern { .. } => custom.map(|regex| regex.is_match(value)).unwrap_or(false),
    }
}
