//! Binding expressions for data-bound views.
//!
//! A view binds to its data through a lambda such as
//! `ListView(() => viewModel.Items)`. This crate ties together the pieces
//! that give such lambdas meaning:
//!
//! - the runtime path extractor ([`extract_binding_path`]), which turns an
//!   accepted lambda into the dotted key `Items`;
//! - the static checker ([`Project::analyze`]), which reports every argument
//!   bound to a `[BindingExpression]` parameter whose body is not a member
//!   access.

pub mod config;
pub mod error;
pub mod project;

// --- Public API ---
pub use bindpath_analyzer::{
    Analyzer, DeclarationIndex, Diagnostic, DiagnosticSink, MarkerLookup, Severity, ShapeVerdict,
};
pub use bindpath_executor::ExecutorImpl;
pub use bindpath_expr::{
    BindingLambda, CanonicalPath, CaptureRepresentation, Expr, ExtractError, extract_binding_path,
    extract_with,
};
pub use bindpath_syntax::{Scope, parse_expression, parse_source};
pub use config::Config;
pub use error::BindpathError;
pub use project::{Document, Project};

/// Parses a lambda, treats its free identifiers as captured locals and
/// extracts its binding path.
pub fn binding_path(source: &str) -> Result<CanonicalPath, BindpathError> {
    binding_path_with(source, CaptureRepresentation::default())
}

pub fn binding_path_with(
    source: &str,
    capture: CaptureRepresentation,
) -> Result<CanonicalPath, BindpathError> {
    let expr = parse_expression(source)?;
    let lambda =
        bindpath_syntax::lower_binding(&expr, &Scope::capture_free_identifiers(), capture)?;
    Ok(extract_with(&lambda, capture)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_path() {
        assert_eq!(binding_path("() => viewModel.Items").unwrap().to_string(), "Items");
        assert_eq!(binding_path("() => viewModel").unwrap().to_string(), ".");
    }

    #[test]
    fn test_binding_path_errors() {
        assert!(matches!(
            binding_path("() => viewModel.ToString()"),
            Err(BindpathError::Extract(_))
        ));
        assert!(matches!(binding_path("x => x.Name"), Err(BindpathError::Lower(_))));
        assert!(matches!(binding_path("() =>"), Err(BindpathError::Syntax(_))));
    }

    #[test]
    fn test_representations_agree() {
        for source in ["() => vm.Items", "() => vm.Date.Day", "() => vm"] {
            assert_eq!(
                binding_path_with(source, CaptureRepresentation::Wrapped).unwrap(),
                binding_path_with(source, CaptureRepresentation::Bare).unwrap(),
            );
        }
    }
}
