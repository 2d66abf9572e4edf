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
};

impl Calculator {
    /// Evaluates `expression := expression ("+" | "-") term | term`.
    ///
    /// Splits at the last top-level binary `+` or `-`, so `8 - 3 - 2` is
    /// `(8 - 3) - 2`. Signs such as the second `-` in `3 - -2` are left for
    /// the unary level.
    pub(crate) fn expression(&self, tokens: &[Token], env: &Environment) -> CalcResult<f64> {
        let Some(split) = find_top_level(tokens, &[Token::Plus, Token::Minus], Search::Last)?
        else {
            return self.term(tokens, env);
        };

        let left = self.expression(&tokens[..split], env)?;
        let right = self.term(&tokens[split + 1..], env)?;

        Ok(if tokens[split] == Token::Plus {
            left + right
        } else {
            left - right
        })
    }

    /// Evaluates `term := term ("*" | "/" | "%") unary | unary`.
    ///
    /// For `/` and `%` the right operand is evaluated first and an exact zero
    /// is rejected before the left side is touched. `%` is the floating-point
    /// remainder and takes the sign of the dividend.
    pub(crate) fn term(&self, tokens: &[Token], env: &Environment) -> CalcResult<f64> {
        let Some(split) =
            find_top_level(tokens, &[Token::Star, Token::Slash, Token::Percent], Search::Last)?
        else {
            return self.unary(tokens, env);
        };

        let (left, op, right) = (&tokens[..split], &tokens[split], &tokens[split + 1..]);

        match op {
            Token::Star => Ok(self.term(left, env)? * self.unary(right, env)?),
            Token::Slash => {
                let divisor = self.unary(right, env)?;
                if divisor == 0.0 {
                    return Err(CalcError::unsupported("division by zero"));
                }
                Ok(self.term(left, env)? / divisor)
            },
            _ => {
                let divisor = self.unary(right, env)?;
                if divisor == 0.0 {
                    return Err(CalcError::unsupported("modulus by zero"));
                }
                Ok(self.term(left, env)? % divisor)
            },
        }
    }

    /// Evaluates `power := primary "^" power | primary`.
    ///
    /// Splits at the first top-level `^`, which makes exponentiation
    /// right-associative: `2 ^ 3 ^ 2` is `2 ^ 9`. Signs are not part of this
    /// level, so `-2 ^ 2` is `-(2 ^ 2)`.
    pub(crate) fn power(&self, tokens: &[Token], env: &Environment) -> CalcResult<f64> {
        let Some(split) = find_top_level(tokens, &[Token::Caret], Search::First)? else {
            return self.primary(tokens, env);
        };

        let base = self.primary(&tokens[..split], env)?;
        let exponent = self.power(&tokens[split + 1..], env)?;

        Ok(base.powf(exponent))
    }
}
