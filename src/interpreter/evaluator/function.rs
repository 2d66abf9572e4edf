/// Sum and average over any number of arguments.
pub mod aggregate;
/// Trigonometric, hyperbolic, root, rounding and angle conversion builtins.
///
/// Each is a thin wrapper over the matching `f64` method, plus the
/// reciprocal forms (`csc`, `sech`, ...) and their inverses.
pub mod builtin;
/// Gamma-based combinatorics: `factorial`, `permutation`, `combination`.
pub mod choose;
/// The function table, arity rules and the list of builtins.
pub mod core;
/// Logarithm builtins: `ln`, `log` (base 10) and `logb` (base 2).
pub mod log;
