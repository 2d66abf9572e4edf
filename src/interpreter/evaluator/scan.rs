use tracing::trace;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::lexer::{Nesting, Token},
};

/// Which top-level occurrence [`find_top_level`] reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Search {
    /// The rightmost occurrence. Splitting there makes the operator
    /// left-associative.
    Last,
    /// The leftmost occurrence. Splitting there makes the operator
    /// right-associative.
    First,
}

/// Finds a top-level operator in a token range.
///
/// The range is scanned backward from its end while tracking parenthesis and
/// bracket depth. A token qualifies when it is one of `candidates`, sits at
/// depth zero, and is not a sign (see [`is_sign`]).
///
/// # Parameters
/// - `tokens`: The range to search.
/// - `candidates`: Operator kinds accepted at this grammar level.
/// - `search`: Whether the rightmost or leftmost match is wanted.
///
/// # Returns
/// `Some(index)` of the match, or `None` when the range has no qualifying
/// operator.
///
/// # Errors
/// [`CalcError::UnbalancedParentheses`] if a complete scan ends with a
/// nonzero depth.
///
/// # Example
/// ```
/// use calc_cli::interpreter::{
///     evaluator::scan::{Search, find_top_level},
///     lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("(1 - 2) - -3").unwrap();
/// let split = find_top_level(&tokens, &[Token::Plus, Token::Minus], Search::Last).unwrap();
/// assert_eq!(split, Some(5));
/// ```
pub fn find_top_level(tokens: &[Token],
                      candidates: &[Token],
                      search: Search)
                      -> CalcResult<Option<usize>> {
    let mut nesting = Nesting::default();
    let mut found = None;

    for (index, token) in tokens.iter().enumerate().rev() {
        nesting.track(token);

        if nesting.is_balanced() && candidates.contains(token) && !is_sign(tokens, index) {
            trace!(index, %token, ?search, "top-level operator");
            match search {
                Search::Last => return Ok(Some(index)),
                Search::First => found = Some(index),
            }
        }
    }

    if !nesting.is_balanced() {
        return Err(CalcError::UnbalancedParentheses);
    }

    Ok(found)
}

/// Returns `true` if the `+` or `-` at `index` is a prefix sign.
///
/// That is the case when it opens the range or directly follows another
/// arithmetic operator, as in `3 - -2` or `2 * -1`.
#[must_use]
pub fn is_sign(tokens: &[Token], index: usize) -> bool {
    matches!(tokens[index], Token::Plus | Token::Minus)
    && (index == 0 || tokens[index - 1].is_operator())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    const ADDITIVE: &[Token] = &[Token::Plus, Token::Minus];

    #[test]
    fn last_and_first_occurrence() {
        let tokens = tokenize("2 ^ 3 ^ 2").unwrap();
        assert_eq!(find_top_level(&tokens, &[Token::Caret], Search::Last), Ok(Some(3)));
        assert_eq!(find_top_level(&tokens, &[Token::Caret], Search::First), Ok(Some(1)));
    }

    #[test]
    fn nested_operators_are_skipped() {
        let tokens = tokenize("(1 + 2) * f[3 - 4]").unwrap();
        assert_eq!(find_top_level(&tokens, ADDITIVE, Search::Last), Ok(None));
        assert_eq!(find_top_level(&tokens, &[Token::Star], Search::Last), Ok(Some(5)));
    }

    #[test]
    fn signs_are_not_split_points() {
        let tokens = tokenize("-1 * -2").unwrap();
        assert_eq!(find_top_level(&tokens, ADDITIVE, Search::Last), Ok(None));
        assert!(is_sign(&tokens, 0));
        assert!(is_sign(&tokens, 3));
    }

    #[test]
    fn commas_inside_nested_calls_are_ignored() {
        let tokens = tokenize("f[1, 2], 3").unwrap();
        assert_eq!(find_top_level(&tokens, &[Token::Comma], Search::Last), Ok(Some(6)));
        assert_eq!(find_top_level(&tokens[..6], &[Token::Comma], Search::Last), Ok(None));
    }

    #[test]
    fn unbalanced_sub_range_is_reported() {
        let tokens = tokenize("(1 + 2)").unwrap();
        assert_eq!(find_top_level(&tokens[..4], ADDITIVE, Search::First),
                   Err(CalcError::UnbalancedParentheses));
        assert_eq!(find_top_level(&tokens[1..], &[Token::Star], Search::Last),
                   Err(CalcError::UnbalancedParentheses));
    }

    #[test]
    fn empty_range_has_no_operator() {
        assert_eq!(find_top_level(&[], ADDITIVE, Search::First), Ok(None));
    }
}
