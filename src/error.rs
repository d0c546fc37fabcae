use bindpath_expr::ExtractError;
use bindpath_syntax::{LowerError, SyntaxError};
use thiserror::Error;

/// Errors surfaced by the `bindpath` library and CLI.
#[derive(Error, Debug)]
pub enum BindpathError {
    #[error("Parsing failed: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Parsing '{name}' failed: {source}")]
    Document {
        name: String,
        #[source]
        source: SyntaxError,
    },

    #[error("Lowering failed: {0}")]
    Lower(#[from] LowerError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Project error: {0}")]
    Project(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
