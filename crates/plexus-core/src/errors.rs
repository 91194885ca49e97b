//! Structured error types shared across plexus crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`PlexusError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (identifiers, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for plexus.
///
/// Every variant is an input-validation failure raised before any output
/// structure is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum PlexusError {
    /// A probability outside `[0, 1]` was supplied.
    #[error("probability error: {0}")]
    Probability(ErrorInfo),
    /// A face order incompatible with its parent simplex was requested.
    #[error("order error: {0}")]
    Order(ErrorInfo),
    /// An unknown encapsulation relation mode was requested.
    #[error("relation error: {0}")]
    Relation(ErrorInfo),
    /// Container lookups and structural errors.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl PlexusError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            PlexusError::Probability(info)
            | PlexusError::Order(info)
            | PlexusError::Relation(info)
            | PlexusError::Graph(info) => info,
        }
    }

    /// Probability value outside the closed unit interval.
    pub fn invalid_probability(value: f64) -> Self {
        PlexusError::Probability(
            ErrorInfo::new(
                "invalid-probability",
                "probabilities must lie between 0 and 1 included",
            )
            .with_context("value", value),
        )
    }

    /// Requested subface order does not fit inside the parent edge.
    pub fn invalid_order(order: usize, edge_size: usize) -> Self {
        PlexusError::Order(
            ErrorInfo::new(
                "invalid-order",
                "subface order must not exceed the order of the parent edge",
            )
            .with_context("order", order)
            .with_context("edge_size", edge_size),
        )
    }

    /// Unrecognized encapsulation relation mode.
    pub fn invalid_relation_mode(raw: &str) -> Self {
        PlexusError::Relation(
            ErrorInfo::new(
                "invalid-relation-mode",
                format!("{raw} is not a valid relations option"),
            )
            .with_context("relations", raw)
            .with_hint("choices are 'inclusion' (or 'all'), 'immediate' and 'empirical'"),
        )
    }
}

/// Checks that `p` lies in `[0, 1]`. `NaN` is rejected.
pub fn validate_probability(p: f64) -> Result<(), PlexusError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(PlexusError::invalid_probability(p))
    }
}

/// Checks every entry of `ps`, reporting the first offending index.
pub fn validate_probabilities(ps: &[f64]) -> Result<(), PlexusError> {
    for (index, p) in ps.iter().enumerate() {
        validate_probability(*p).map_err(|err| match err {
            PlexusError::Probability(info) => {
                PlexusError::Probability(info.with_context("index", index))
            }
            other => other,
        })?;
    }
    Ok(())
}
