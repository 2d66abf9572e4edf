use crate::{
    error::{CalcError, CalcResult},
    interpreter::{
        environment::Environment,
        evaluator::{
            core::Calculator,
            scan::{Search, find_top_level},
        },
        lexer::Token,
    },
    util::gamma,
};

impl Calculator {
    /// Evaluates a primary.
    ///
    /// A trailing `!` is handled first: the rest of the range is evaluated as
    /// a primary and its factorial returned, so `!` binds tighter than any
    /// operator. Otherwise the range must be one of:
    /// - `( expression )`
    /// - `name [ arguments ]`, a function call
    /// - `name`, a constant or variable
    /// - `_`, the previous result
    /// - a number
    ///
    /// # Errors
    /// - [`CalcError::SyntaxError`] for an empty range (a lone `!`) or an
    ///   operand followed by stray tokens.
    /// - [`CalcError::UnbalancedParentheses`] when a group or argument list is
    ///   not closed at the end of the range.
    /// - [`CalcError::UnknownToken`] when the range starts with a token that
    ///   cannot begin an operand.
    pub(crate) fn primary(&self, tokens: &[Token], env: &Environment) -> CalcResult<f64> {
        let Some((last, rest)) = tokens.split_last() else {
            return Err(CalcError::syntax("expected an operand"));
        };

        if *last == Token::Bang {
            return gamma::factorial(self.primary(rest, env)?);
        }

        match tokens {
            [Token::LParen, inner @ .., Token::RParen] => self.expression(inner, env),
            [Token::LParen, ..] => Err(CalcError::UnbalancedParentheses),
            [Token::Identifier(name), bracketed @ ..]
                if bracketed.first() == Some(&Token::LBracket) =>
            {
                self.call(name, bracketed, env)
            },
            [Token::Identifier(name)] => self.lookup(name, env),
            [Token::Previous] => Ok(env.previous()),
            [Token::Number(n)] => Ok(*n),
            [Token::Identifier(_) | Token::Previous | Token::Number(_), extra, ..] => {
                Err(CalcError::syntax(format!("unexpected `{extra}` after operand")))
            },
            [other, ..] => Err(CalcError::UnknownToken { token: other.to_string() }),
            [] => Err(CalcError::syntax("expected an operand")),
        }
    }

    /// Evaluates a call to `name` whose argument list, brackets included, is
    /// `bracketed`.
    ///
    /// `name[]` calls the function with no arguments; whether that is allowed
    /// is up to the function's arity.
    fn call(&self, name: &str, bracketed: &[Token], env: &Environment) -> CalcResult<f64> {
        let [Token::LBracket, inner @ .., Token::RBracket] = bracketed else {
            return Err(CalcError::UnbalancedParentheses);
        };

        let args = if inner.is_empty() {
            Vec::new()
        } else {
            self.arguments(inner, env)?
        };

        self.functions.call(name, &args)
    }

    /// Evaluates `arglist := expression ("," expression)*`.
    ///
    /// Splits at the last top-level comma and recurses on the left part, the
    /// same way `expression` handles `+` and `-`. Commas inside nested calls or
    /// parentheses are ignored.
    pub(crate) fn arguments(&self, tokens: &[Token], env: &Environment) -> CalcResult<Vec<f64>> {
        let Some(split) = find_top_level(tokens, &[Token::Comma], Search::Last)? else {
            return Ok(vec![self.expression(tokens, env)?]);
        };

        let mut args = self.arguments(&tokens[..split], env)?;
        args.push(self.expression(&tokens[split + 1..], env)?);

        Ok(args)
    }
}
