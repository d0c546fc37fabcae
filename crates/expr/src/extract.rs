//! Converts an accepted binding lambda into its canonical dotted path.
use crate::chain;
use crate::error::ExtractError;
use crate::expr::BindingLambda;
use crate::node::{ExpressionNode, Shape};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the host represents a value captured from the enclosing scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureRepresentation {
    /// Captured locals are fields of a closure object, so every reference to
    /// one is an extra member access over a constant: `value(c).viewModel`.
    #[default]
    Wrapped,
    /// Captured locals are leaves of their own.
    Bare,
}

impl CaptureRepresentation {
    /// Member layers the host inserts above the true root.
    pub fn wrapper_layers(self) -> usize {
        match self {
            CaptureRepresentation::Wrapped => 1,
            CaptureRepresentation::Bare => 0,
        }
    }
}

/// The data-binding key of an accepted binding expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalPath {
    /// The whole captured value, no property selected (`.`).
    Whole,
    /// Member names in root-to-leaf order. Never empty.
    Members(Vec<String>),
}

impl CanonicalPath {
    pub const WHOLE: &'static str = ".";

    pub fn is_whole(&self) -> bool {
        matches!(self, CanonicalPath::Whole)
    }

    pub fn segments(&self) -> &[String] {
        match self {
            CanonicalPath::Whole => &[],
            CanonicalPath::Members(names) => names,
        }
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalPath::Whole => f.write_str(Self::WHOLE),
            CanonicalPath::Members(names) => f.write_str(&names.iter().join(".")),
        }
    }
}

/// Extracts the path of a lambda built by a host that wraps captured values.
pub fn extract_binding_path(lambda: &BindingLambda) -> Result<CanonicalPath, ExtractError> {
    extract_with(lambda, CaptureRepresentation::default())
}

/// Extracts the path of `lambda`, looking past the capture layers of `capture`.
pub fn extract_with(
    lambda: &BindingLambda,
    capture: CaptureRepresentation,
) -> Result<CanonicalPath, ExtractError> {
    let unsupported = || ExtractError::UnsupportedExpressionKind {
        expression: lambda.to_string(),
    };

    let chain = chain::walk(lambda.body());
    if chain.terminal_shape() != Shape::Root {
        log::debug!(
            "rejecting '{}': chain ends at a {}",
            lambda,
            chain.terminal_shape()
        );
        return Err(unsupported());
    }

    let layers = capture.wrapper_layers();
    let path = match chain.len() {
        // A bare host has no wrapper to prove the root was captured.
        0 if layers == 0 && chain.terminal().is_captured_value() => CanonicalPath::Whole,
        0 => return Err(unsupported()),
        n if n == layers => CanonicalPath::Whole,
        _ => CanonicalPath::Members(
            chain
                .names_root_to_leaf()
                .skip(layers)
                .map(str::to_owned)
                .collect(),
        ),
    };

    log::trace!("'{}' binds to '{}'", lambda, path);
    Ok(path)
}

impl BindingLambda {
    /// Shorthand for [`extract_binding_path`].
    pub fn binding_path(&self) -> Result<CanonicalPath, ExtractError> {
        extract_binding_path(self)
    }
}
