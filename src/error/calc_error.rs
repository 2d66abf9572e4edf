use thiserror::Error;

/// Result type returned by every tokenizer and evaluator operation.
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents every way a statement can fail.
///
/// All errors are terminal for the statement being processed. The driver
/// reports them and continues with the next statement.
pub enum CalcError {
    /// Parenthesis or bracket nesting did not return to zero.
    #[error("unbalanced parentheses.")]
    UnbalancedParentheses,
    /// A character or token could not be matched to any grammar alternative.
    #[error("unknown token: {token}.")]
    UnknownToken {
        /// The offending text or token.
        token: String,
    },
    /// A numeric literal could not be parsed as a floating-point value.
    #[error("not a valid number: {literal}.")]
    BadLiteral {
        /// The literal as written in the source.
        literal: String,
    },
    /// Division or modulus by zero, or a function called with the wrong
    /// argument count or outside its domain.
    #[error("operation not supported by operand: {details}.")]
    UnsupportedOperand {
        /// Why the operand was rejected.
        details: String,
    },
    /// The token sequence does not have the shape the grammar requires.
    #[error("syntax error: {details}.")]
    SyntaxError {
        /// What was expected.
        details: String,
    },
    /// `let` used with a name that is already bound.
    #[error("variable already exists: {name}.")]
    RedeclarationOfVariable {
        /// The name of the variable.
        name: String,
    },
    /// Lookup of an unbound variable, or a call to an unknown function.
    #[error("no such variable: {name}.")]
    VariableNotDefined {
        /// The name that could not be resolved.
        name: String,
    },
}

impl CalcError {
    /// Short name of the error kind, independent of its details.
    ///
    /// # Example
    /// ```
    /// use calc_cli::error::CalcError;
    ///
    /// let err = CalcError::VariableNotDefined { name: "y".to_string() };
    /// assert_eq!(err.kind(), "variable-not-defined");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnbalancedParentheses => "unbalanced-parentheses",
            Self::UnknownToken { .. } => "unknown-token",
            Self::BadLiteral { .. } => "bad-literal",
            Self::UnsupportedOperand { .. } => "unsupported-operand",
            Self::SyntaxError { .. } => "syntax-error",
            Self::RedeclarationOfVariable { .. } => "redeclaration-of-variable",
            Self::VariableNotDefined { .. } => "variable-not-defined",
        }
    }

    pub(crate) fn unsupported(details: impl Into<String>) -> Self {
        Self::UnsupportedOperand { details: details.into() }
    }

    pub(crate) fn syntax(details: impl Into<String>) -> Self {
        Self::SyntaxError { details: details.into() }
    }
}
