use tracing::debug;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::{
        constants::ConstantTable,
        environment::Environment,
        evaluator::function::core::FunctionTable,
        lexer::Token,
    },
};

/// Evaluates statements against a constant table and a function table.
///
/// Parsing and evaluation happen in one pass: each grammar level receives an
/// immutable slice of the statement's tokens and either splits it at a
/// top-level operator or hands the whole slice to the next level. No parse
/// position is shared between levels and no syntax tree is built.
///
/// The grammar, from lowest to highest precedence:
///
/// ```text
/// statement   := declaration | expression
/// declaration := "let" IDENT "=" expression
/// expression  := expression ("+" | "-") term | term
/// term        := term ("*" | "/" | "%") unary | unary
/// unary       := ("+" | "-")* power
/// power       := primary "^" power | primary
/// primary     := "(" expression ")" | call | IDENT | "_" | NUMBER | primary "!"
/// call        := IDENT "[" arglist? "]"
/// arglist     := expression ("," expression)*
/// ```
///
/// The tables are fixed at construction. All mutable state lives in the
/// [`Environment`] passed to [`Calculator::statement`].
///
/// ## Usage
///
/// ```
/// use calc_cli::interpreter::{
///     environment::Environment, evaluator::core::Calculator, lexer::tokenize,
/// };
///
/// let calculator = Calculator::new();
/// let mut env = Environment::new();
///
/// let tokens = tokenize("let x = 1 + 2 * 3").unwrap();
/// assert_eq!(calculator.statement(&tokens, &mut env).unwrap(), 7.0);
///
/// let tokens = tokenize("x ^ 2 - _").unwrap();
/// assert_eq!(calculator.statement(&tokens, &mut env).unwrap(), 42.0);
/// ```
#[derive(Debug, Default)]
pub struct Calculator {
    pub(crate) constants: ConstantTable,
    pub(crate) functions: FunctionTable,
}

impl Calculator {
    /// Creates a calculator with the default constants and builtins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with caller-supplied tables.
    #[must_use]
    pub const fn with_tables(constants: ConstantTable, functions: FunctionTable) -> Self {
        Self { constants,
               functions }
    }

    /// Evaluates one top-level statement.
    ///
    /// A statement starting with `let` is a declaration; anything else is an
    /// expression. On success the result is stored as the environment's
    /// previous value, so the next statement can refer to it as `_`. This is
    /// the only place the previous value is written.
    ///
    /// # Errors
    /// Any [`CalcError`] raised while evaluating. A failed statement leaves
    /// the environment exactly as it was.
    pub fn statement(&self, tokens: &[Token], env: &mut Environment) -> CalcResult<f64> {
        let Some(first) = tokens.first() else {
            return Err(CalcError::syntax("empty statement"));
        };

        debug!(tokens = tokens.len(), "evaluating statement");

        let value = if *first == Token::Let {
            self.declaration(tokens, env)?
        } else {
            self.expression(tokens, env)?
        };

        env.set_previous(value);
        debug!(value, "statement evaluated");
        Ok(value)
    }

    /// Evaluates `let IDENT = expression` and binds the result.
    ///
    /// Constants count as bound names, so `let pi = 3` is a redeclaration.
    /// The right-hand side is evaluated before binding; if it fails, nothing
    /// is bound.
    fn declaration(&self, tokens: &[Token], env: &mut Environment) -> CalcResult<f64> {
        let [Token::Let, Token::Identifier(name), Token::Equals, value @ ..] = tokens else {
            return Err(CalcError::syntax("expected `let <name> = <expression>`"));
        };
        if value.is_empty() {
            return Err(CalcError::syntax(format!("missing value for `{name}`")));
        }
        if self.constants.contains(name) {
            return Err(CalcError::RedeclarationOfVariable { name: name.clone() });
        }

        let value = self.expression(value, env)?;
        env.define(name, value)?;

        Ok(value)
    }

    /// Resolves a bare identifier: constants first, then variables.
    pub(crate) fn lookup(&self, name: &str, env: &Environment) -> CalcResult<f64> {
        self.constants
            .get(name)
            .or_else(|| env.get(name))
            .ok_or_else(|| CalcError::VariableNotDefined { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn eval(calculator: &Calculator, env: &mut Environment, source: &str) -> CalcResult<f64> {
        calculator.statement(&tokenize(source)?, env)
    }

    fn value_of(source: &str) -> f64 {
        eval(&Calculator::new(), &mut Environment::new(), source).unwrap()
    }

    fn error_of(source: &str) -> CalcError {
        eval(&Calculator::new(), &mut Environment::new(), source).unwrap_err()
    }

    #[test]
    fn precedence_and_grouping() {
        assert_eq!(value_of("1 + 2 * 3"), 7.0);
        assert_eq!(value_of("(1 + 2) * 3"), 9.0);
        assert_eq!(value_of("2 * 3 ^ 2"), 18.0);
        assert_eq!(value_of("10 - 4 / 2"), 8.0);
    }

    #[test]
    fn left_associative_arithmetic() {
        assert_eq!(value_of("8 - 3 - 2"), 3.0);
        assert_eq!(value_of("64 / 4 / 2"), 8.0);
        assert_eq!(value_of("17 % 5 % 2"), 0.0);
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(value_of("2 ^ 3 ^ 2"), 512.0);
        assert_eq!(value_of("(2 ^ 3) ^ 2"), 64.0);
    }

    #[test]
    fn unary_signs() {
        assert_eq!(value_of("3 - -2"), 5.0);
        assert_eq!(value_of("-2 ^ 2"), -4.0);
        assert_eq!(value_of("--3"), 3.0);
        assert_eq!(value_of("+-+4"), -4.0);
        assert_eq!(value_of("2 * -3"), -6.0);
        assert_eq!(value_of("2 ^ 2 - -1"), 5.0);
    }

    #[test]
    fn factorial_binds_tightest() {
        assert_eq!(value_of("5!"), 120.0);
        assert_eq!(value_of("3! + 1"), 7.0);
        assert_eq!(value_of("-3!"), -6.0);
        assert_eq!(value_of("2 ^ 3!"), 64.0);
        assert_eq!(value_of("(1 + 2)!"), 6.0);
        assert_eq!(value_of("3!!"), 720.0);
    }

    #[test]
    fn lone_factorial_is_a_syntax_error() {
        assert!(matches!(error_of("!"), CalcError::SyntaxError { .. }));
    }

    #[test]
    fn division_and_modulus_by_zero() {
        assert!(matches!(error_of("5 / 0"), CalcError::UnsupportedOperand { .. }));
        assert!(matches!(error_of("5 % 0"), CalcError::UnsupportedOperand { .. }));
        assert!(matches!(error_of("5 / (2 - 2)"), CalcError::UnsupportedOperand { .. }));
    }

    #[test]
    fn modulus_keeps_the_sign_of_the_dividend() {
        assert_eq!(value_of("7.5 % 2"), 1.5);
        assert_eq!(value_of("-7 % 3"), -1.0);
    }

    #[test]
    fn declarations_and_lookups() {
        let calculator = Calculator::new();
        let mut env = Environment::new();

        assert_eq!(eval(&calculator, &mut env, "let x = 5").unwrap(), 5.0);
        assert_eq!(eval(&calculator, &mut env, "x + 1").unwrap(), 6.0);
        assert_eq!(eval(&calculator, &mut env, "let x = 5"),
                   Err(CalcError::RedeclarationOfVariable { name: "x".to_string() }));
        assert_eq!(eval(&calculator, &mut env, "y"),
                   Err(CalcError::VariableNotDefined { name: "y".to_string() }));
    }

    #[test]
    fn constants_resolve_and_cannot_be_redeclared() {
        assert_eq!(value_of("pi"), std::f64::consts::PI);
        assert!(matches!(error_of("let e = 3"), CalcError::RedeclarationOfVariable { .. }));
    }

    #[test]
    fn malformed_declarations() {
        for source in ["let", "let x", "let x =", "let 5 = 3", "let x 5"] {
            assert!(matches!(error_of(source), CalcError::SyntaxError { .. }),
                    "{source} should be a syntax error");
        }
    }

    #[test]
    fn failed_declaration_leaves_environment_untouched() {
        let calculator = Calculator::new();
        let mut env = Environment::new();
        eval(&calculator, &mut env, "2").unwrap();

        assert!(eval(&calculator, &mut env, "let z = 1 / 0").is_err());
        assert!(!env.contains("z"));
        assert_eq!(env.previous(), 2.0);
    }

    #[test]
    fn previous_value_round_trips() {
        let calculator = Calculator::new();
        let mut env = Environment::new();

        assert_eq!(eval(&calculator, &mut env, "_").unwrap(), 0.0);
        eval(&calculator, &mut env, "6 * 7").unwrap();
        assert_eq!(eval(&calculator, &mut env, "_").unwrap(), 42.0);
        assert_eq!(eval(&calculator, &mut env, "_ / 2 + _").unwrap(), 63.0);
        eval(&calculator, &mut env, "let w = 3").unwrap();
        assert_eq!(eval(&calculator, &mut env, "_").unwrap(), 3.0);
    }

    #[test]
    fn function_calls() {
        assert_eq!(value_of("sin[0]"), 0.0);
        assert_eq!(value_of("sum[1, 2, 3 * 2]"), 9.0);
        assert_eq!(value_of("sum[]"), 0.0);
        assert_eq!(value_of("sqrt[sum[9, 7]] + 1"), 5.0);
        assert_eq!(value_of("combination[5, 2]"), 10.0);
        assert_eq!(value_of("abs[-(2 + 1)]!"), 6.0);
    }

    #[test]
    fn function_call_failures() {
        assert!(matches!(error_of("sin[1, 2]"), CalcError::UnsupportedOperand { .. }));
        assert!(matches!(error_of("average[]"), CalcError::UnsupportedOperand { .. }));
        assert_eq!(error_of("foo[1]"), CalcError::VariableNotDefined { name: "foo".to_string() });
        assert!(matches!(error_of("sum[1,]"), CalcError::SyntaxError { .. }));
        assert!(matches!(error_of("sum[, 1]"), CalcError::SyntaxError { .. }));
        assert_eq!(error_of("sin[0] 2"), CalcError::UnbalancedParentheses);
    }

    #[test]
    fn stray_tokens() {
        assert!(matches!(error_of("1 2"), CalcError::SyntaxError { .. }));
        assert!(matches!(error_of("(1)(2)"), CalcError::SyntaxError { .. }));
        assert!(matches!(error_of("1 +"), CalcError::SyntaxError { .. }));
        assert!(matches!(error_of("1 + let"), CalcError::UnknownToken { .. }));
        assert!(matches!(error_of(") + ("), CalcError::UnknownToken { .. }));
    }

    #[test]
    fn empty_statement_is_rejected() {
        assert!(matches!(Calculator::new().statement(&[], &mut Environment::new()),
                         Err(CalcError::SyntaxError { .. })));
    }

    #[test]
    fn custom_tables() {
        use crate::interpreter::evaluator::function::core::Arity;

        let mut functions = FunctionTable::empty();
        functions.register("twice", Arity::Exact(1), |args| Ok(2.0 * args[0]));
        let calculator =
            Calculator::with_tables(ConstantTable::from_pairs([("answer", 21.0)]), functions);
        let mut env = Environment::new();

        assert_eq!(eval(&calculator, &mut env, "twice[answer]").unwrap(), 42.0);
        assert!(matches!(eval(&calculator, &mut env, "pi"),
                         Err(CalcError::VariableNotDefined { .. })));
        assert!(matches!(eval(&calculator, &mut env, "sin[0]"),
                         Err(CalcError::VariableNotDefined { .. })));
    }
}
