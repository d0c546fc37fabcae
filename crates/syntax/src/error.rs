use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Parse error at {line}:{column}: {message}")]
    Parse {
        line: u32,
        column: usize,
        message: String,
    },

    #[error("Unexpected end of input")]
    Incomplete,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LowerError {
    #[error("The name '{name}' does not exist in the current context ({line}:{column})")]
    UnresolvedName {
        name: String,
        line: u32,
        column: usize,
    },

    #[error("Binding lambdas take no parameters, found {arity}")]
    NotNullary { arity: usize },

    #[error("Expected a lambda expression")]
    NotALambda,

    #[error("A {construct} cannot be converted to an expression tree ({line}:{column})")]
    Unsupported {
        construct: &'static str,
        line: u32,
        column: usize,
    },
}
