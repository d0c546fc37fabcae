mod common;

use bindpath::{
    BindingLambda, BindpathError, CanonicalPath, CaptureRepresentation, Expr, ExtractError,
    binding_path, binding_path_with, extract_binding_path,
};
use common::TestResult;

/// How a host that boxes captured locals presents `viewModel`.
fn view_model() -> Expr {
    Expr::closure("<>c__DisplayClass0_0").member("viewModel")
}

#[test]
fn test_works_for_property() -> TestResult {
    let lambda = BindingLambda::new(view_model().member("Items"));
    assert_eq!(extract_binding_path(&lambda)?.to_string(), "Items");
    Ok(())
}

#[test]
fn test_works_for_deep_property() -> TestResult {
    let lambda = BindingLambda::new(view_model().member("Date").member("Day"));
    let path = extract_binding_path(&lambda)?;
    assert_eq!(path.to_string(), "Date.Day");
    assert_eq!(path.segments(), &["Date".to_string(), "Day".to_string()]);
    Ok(())
}

#[test]
fn test_works_for_captured_value() -> TestResult {
    let lambda = BindingLambda::new(view_model());
    assert_eq!(extract_binding_path(&lambda)?, CanonicalPath::Whole);
    Ok(())
}

#[test]
fn test_doesnt_work_for_methods() {
    let lambda = BindingLambda::new(view_model().call("ToString", vec![]));
    let err = extract_binding_path(&lambda).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expressions like '() => value(<>c__DisplayClass0_0).viewModel.ToString()' are not supported."
    );
}

#[test]
fn test_doesnt_work_for_literals() {
    let lambda = BindingLambda::new(Expr::constant(true));
    assert!(matches!(
        extract_binding_path(&lambda),
        Err(ExtractError::UnsupportedExpressionKind { .. })
    ));
}

#[test]
fn test_from_source() -> TestResult {
    assert_eq!(binding_path("() => viewModel.Items")?.to_string(), "Items");
    assert_eq!(binding_path("() => viewModel.Date.Day")?.to_string(), "Date.Day");
    assert_eq!(binding_path("() => viewModel")?.to_string(), ".");
    assert_eq!(binding_path("() => (viewModel.Items)")?.to_string(), "Items");
    Ok(())
}

#[test]
fn test_from_source_rejections() {
    for source in [
        "() => true",
        "() => viewModel.ToString()",
        "() => viewModel.Items.ToString()",
        "() => viewModel.ToString().Length",
        "() => viewModel.Items[0]",
        "() => new ViewModel().Items",
        "() => (object)viewModel.Items",
    ] {
        assert!(
            matches!(binding_path(source), Err(BindpathError::Extract(_))),
            "'{}' should be rejected",
            source
        );
    }
}

#[test]
fn test_bare_representation() -> TestResult {
    let path = binding_path_with("() => viewModel.Date.Day", CaptureRepresentation::Bare)?;
    assert_eq!(path.to_string(), "Date.Day");
    assert!(binding_path_with("() => \"text\"", CaptureRepresentation::Bare).is_err());
    Ok(())
}

#[test]
fn test_forms_without_a_runtime_tree_fail_to_lower() {
    for source in [
        "x => x.Name",
        "() => viewModel?.Items",
        "() => { return viewModel.Items; }",
    ] {
        assert!(
            matches!(binding_path(source), Err(BindpathError::Lower(_))),
            "'{}' should not lower",
            source
        );
    }
}
