use crate::{
    error::CalcResult,
    interpreter::{environment::Environment, evaluator::core::Calculator, lexer::Token},
};

impl Calculator {
    /// Evaluates `unary := ("+" | "-")* power`.
    ///
    /// The leading run of signs is consumed here. `+` does nothing and each
    /// `-` flips the sign, so `--3` is `3` and `+-+4` is `-4`. Because the
    /// rest is handed to `power`, signs bind looser than `^`.
    pub(crate) fn unary(&self, tokens: &[Token], env: &Environment) -> CalcResult<f64> {
        let signs = tokens.iter()
                          .take_while(|t| matches!(t, Token::Plus | Token::Minus))
                          .count();
        let negative = tokens[..signs].iter()
                                      .filter(|t| **t == Token::Minus)
                                      .count()
                       % 2
                       == 1;

        let magnitude = self.power(&tokens[signs..], env)?;

        Ok(if negative { -magnitude } else { magnitude })
    }
}
