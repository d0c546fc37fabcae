//! Diagnostics reported by the binding-expression checker.
use bindpath_syntax::Span;
use serde::Serialize;
use std::fmt;

pub const BINDING_EXPRESSION_ID: &str = "BEX0001";
pub const BINDING_EXPRESSION_MESSAGE: &str = "Binding expression doesn't allow such expressions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub id: &'static str,
    pub severity: Severity,
    pub message: &'static str,
    pub file: String,
    pub span: Span,
    /// Source text of the rejected argument. Not part of the rendered output.
    #[serde(skip)]
    pub expression: String,
}

impl Diagnostic {
    /// The error for a marked argument whose shape is not a member access.
    pub fn binding_expression(
        file: impl Into<String>,
        span: Span,
        expression: impl Into<String>,
    ) -> Self {
        Self {
            id: BINDING_EXPRESSION_ID,
            severity: Severity::Error,
            message: BINDING_EXPRESSION_MESSAGE,
            file: file.into(),
            span,
            expression: expression.into(),
        }
    }

    /// The header and location followed by the offending source line with the
    /// span underlined.
    pub fn render(&self, source: &str) -> String {
        let mut out = self.to_string();
        let line_index = (self.span.line as usize).saturating_sub(1);
        let Some(line) = source.lines().nth(line_index) else {
            return out;
        };
        let line = line.trim_end_matches('\r');
        let leading = self.span.column.saturating_sub(1);
        let available = line.chars().count().saturating_sub(leading);
        let underlined = source
            .get(self.span.offset..self.span.end())
            .map(|text| text.lines().next().unwrap_or("").chars().count())
            .unwrap_or(0)
            .clamp(1, available.max(1));
        out.push_str(&format!(
            "\n   |\n{:>4} | {}\n{:>4} | {}{}",
            self.span.line,
            line,
            "",
            " ".repeat(leading),
            "^".repeat(underlined)
        ));
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {}\n  --> {}:{}:{}",
            self.severity, self.id, self.message, self.file, self.span.line, self.span.column
        )
    }
}

/// Receives diagnostics as they are found.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
