use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::{CalcError, CalcResult};

/// Represents a lexical token in a statement.
///
/// Tokens are immutable once produced. The evaluator works on sub-slices of
/// the token sequence and never copies or mutates it.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3.25`, `.5`, `2` or `2.1e-10`.
    ///
    /// The literal never carries a sign; `-` is always a separate token.
    #[regex(r"[0-9.]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// A run of letters; a variable name or the head of a function call.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `let`
    #[token("let")]
    Let,
    /// `_`, the value of the previous statement.
    #[token("_")]
    Previous,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`, opens a function argument list.
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
}

impl Token {
    /// Returns `true` for the binary arithmetic operators.
    ///
    /// A `+` or `-` that directly follows one of these is a sign, not a binary
    /// operator.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self,
                 Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Percent | Self::Caret)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Let => f.write_str("let"),
            Self::Previous => f.write_str("_"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Percent => f.write_str("%"),
            Self::Caret => f.write_str("^"),
            Self::Bang => f.write_str("!"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::LBracket => f.write_str("["),
            Self::RBracket => f.write_str("]"),
            Self::Comma => f.write_str(","),
            Self::Equals => f.write_str("="),
        }
    }
}

/// Errors produced by the logos lexer before they are mapped to
/// [`CalcError`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexError {
    /// No token rule matched the input.
    #[default]
    UnknownToken,
    /// A literal matched the number rule but is not a valid `f64`.
    BadLiteral(String),
}

/// Parses a floating-point literal from the current token slice.
///
/// The number rule is greedy over digits and dots, so `1.2.3` or a lone `.`
/// arrive here whole and fail as a single bad literal.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    lex.slice()
       .parse()
       .map_err(|_| LexError::BadLiteral(lex.slice().to_string()))
}

/// Tracks round-parenthesis and square-bracket depth over a token sequence.
///
/// Openers count up and closers count down regardless of scan direction, so
/// a backward scan sees negative depths inside a group. Only zero matters:
/// a position is top-level, and a completed scan balanced, when both counters
/// are zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Nesting {
    parens:   isize,
    brackets: isize,
}

impl Nesting {
    /// Updates the counters for a single token. Non-delimiters are ignored.
    pub const fn track(&mut self, token: &Token) {
        match token {
            Token::LParen => self.parens += 1,
            Token::RParen => self.parens -= 1,
            Token::LBracket => self.brackets += 1,
            Token::RBracket => self.brackets -= 1,
            _ => {},
        }
    }

    /// Returns `true` when neither parentheses nor brackets are open.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.parens == 0 && self.brackets == 0
    }
}

/// Converts a statement into its token sequence.
///
/// Whitespace is skipped. Parentheses and brackets are counted while
/// scanning; if either count is nonzero at the end of input the statement
/// fails with [`CalcError::UnbalancedParentheses`] before any parsing
/// happens.
///
/// # Errors
/// - [`CalcError::UnknownToken`] for a character no rule accepts.
/// - [`CalcError::BadLiteral`] for a malformed number such as `1.2.3`.
/// - [`CalcError::UnbalancedParentheses`] for mismatched `()` or `[]`.
///
/// # Example
/// ```
/// use calc_cli::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let x = 2.5").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Let,
///                 Token::Identifier("x".to_string()),
///                 Token::Equals,
///                 Token::Number(2.5)]);
/// ```
pub fn tokenize(source: &str) -> CalcResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut nesting = Nesting::default();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => {
                nesting.track(&token);
                tokens.push(token);
            },
            Err(LexError::BadLiteral(literal)) => return Err(CalcError::BadLiteral { literal }),
            Err(LexError::UnknownToken) => {
                return Err(CalcError::UnknownToken { token: lexer.slice().to_string() });
            },
        }
    }

    if !nesting.is_balanced() {
        return Err(CalcError::UnbalancedParentheses);
    }

    trace!(count = tokens.len(), "tokenized statement");
    Ok(tokens)
}
