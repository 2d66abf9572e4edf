/// Named constants resolved before variables.
///
/// Holds the read-only table seeded with `pi`, `e` and `phi`. A name found
/// here can never be declared with `let`.
pub mod constants;
/// Mutable state carried between statements.
///
/// The environment owns the variable bindings and the previous result read
/// by `_`. It is passed explicitly into every statement, so resetting state
/// between sessions is just creating a new one.
pub mod environment;
/// The evaluator parses and computes a statement in one pass.
///
/// Each grammar level receives an immutable slice of tokens, finds its split
/// point with a shared backward scan, and recurses into both halves. There is
/// no syntax tree and no shared cursor.
///
/// # Responsibilities
/// - Dispatches statements to declarations or expressions.
/// - Evaluates operators with the correct precedence and associativity.
/// - Resolves constants, variables, `_` and function calls.
pub mod evaluator;
/// The lexer module tokenizes a statement for evaluation.
///
/// The lexer reads the raw statement text and produces a flat list of
/// tokens: numbers, names, the `let` keyword, `_`, operators and delimiters.
/// It also verifies that parentheses and brackets are balanced.
///
/// # Responsibilities
/// - Converts the input characters into tokens.
/// - Parses numeric literals to `f64`.
/// - Reports unknown characters, malformed numbers and unbalanced nesting.
pub mod lexer;
