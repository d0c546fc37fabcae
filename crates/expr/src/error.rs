use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Expressions like '{expression}' are not supported.")]
    UnsupportedExpressionKind { expression: String },
}
