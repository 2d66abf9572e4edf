/// Gamma function and the generalized factorial.
///
/// Postfix `!` and the combinatorial builtins (`factorial`, `permutation`,
/// `combination`) all work on reals, so they are defined through
/// `Γ(x + 1)` rather than an integer product. Integer arguments still take an
/// exact path so that small factorials have no rounding error.
pub mod gamma;
