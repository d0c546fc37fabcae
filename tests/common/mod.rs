use bindpath::{BindpathError, Config, Diagnostic, Project};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub const PROGRAM: &str = "Program.cs";
pub const PLACEHOLDER: &str = "// line to replace";

/// The program every analyzer test starts from: one captured view model and a
/// handful of views with marked parameters.
pub const PROGRAM_SOURCE: &str = r#"
fn ListView([BindingExpression] binding);
fn Grid([BindingExpression] rows, title, [BindingExpressionAttribute] selected);
fn Label(text);

fn Main(args) {
    var viewModel = new ViewModel();
    // line to replace
}
"#;

pub fn test_project() -> Project {
    let mut project = Project::new();
    project
        .add_document(PROGRAM, PROGRAM_SOURCE)
        .expect("fresh project accepts the program document");
    project
}

/// Analyzes the test project with `line` in place of the placeholder.
pub fn analyze_line(line: &str) -> Result<Vec<Diagnostic>, BindpathError> {
    analyze_line_with(line, &Config::default())
}

pub fn analyze_line_with(line: &str, config: &Config) -> Result<Vec<Diagnostic>, BindpathError> {
    let mut project = test_project();
    project.replace_part_of_document(PROGRAM, PLACEHOLDER, line)?;
    project.analyze(config)
}

pub fn binding_diagnostics(diagnostics: &[Diagnostic]) -> Vec<&Diagnostic> {
    diagnostics
        .iter()
        .filter(|d| d.id == bindpath_analyzer::BINDING_EXPRESSION_ID)
        .collect()
}

/// The source text a diagnostic points at.
pub fn flagged_text(diagnostic: &Diagnostic, line: &str) -> String {
    let source = PROGRAM_SOURCE.replacen(PLACEHOLDER, line, 1);
    source[diagnostic.span.offset..diagnostic.span.end()].to_string()
}
