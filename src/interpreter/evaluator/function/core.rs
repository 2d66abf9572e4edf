use std::{collections::HashMap, fmt};

use tracing::debug;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::evaluator::function::{aggregate, builtin, choose, log},
};

/// Signature shared by every builtin.
///
/// A builtin receives the evaluated arguments in call order and returns a
/// single number.
type BuiltinFn = fn(&[f64]) -> CalcResult<f64>;

/// Body of a registered function, builtin or host-supplied.
type FunctionBody = Box<dyn Fn(&[f64]) -> CalcResult<f64> + Send + Sync>;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `AtLeast(n)` means `n` or more.
/// - `Any` accepts every count, including zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
            Self::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(1) => f.write_str("exactly 1 argument"),
            Self::Exact(n) => write!(f, "exactly {n} arguments"),
            Self::AtLeast(1) => f.write_str("at least 1 argument"),
            Self::AtLeast(n) => write!(f, "at least {n} arguments"),
            Self::Any => f.write_str("any number of arguments"),
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table the default [`FunctionTable`] is built
///   from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"         => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"         => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"         => { arity: Arity::Exact(1), func: builtin::tan },
    "csc"         => { arity: Arity::Exact(1), func: builtin::csc },
    "sec"         => { arity: Arity::Exact(1), func: builtin::sec },
    "cot"         => { arity: Arity::Exact(1), func: builtin::cot },
    "asin"        => { arity: Arity::Exact(1), func: builtin::asin },
    "acos"        => { arity: Arity::Exact(1), func: builtin::acos },
    "atan"        => { arity: Arity::Exact(1), func: builtin::atan },
    "acsc"        => { arity: Arity::Exact(1), func: builtin::acsc },
    "asec"        => { arity: Arity::Exact(1), func: builtin::asec },
    "acot"        => { arity: Arity::Exact(1), func: builtin::acot },
    "sinh"        => { arity: Arity::Exact(1), func: builtin::sinh },
    "cosh"        => { arity: Arity::Exact(1), func: builtin::cosh },
    "tanh"        => { arity: Arity::Exact(1), func: builtin::tanh },
    "csch"        => { arity: Arity::Exact(1), func: builtin::csch },
    "sech"        => { arity: Arity::Exact(1), func: builtin::sech },
    "coth"        => { arity: Arity::Exact(1), func: builtin::coth },
    "asinh"       => { arity: Arity::Exact(1), func: builtin::asinh },
    "acosh"       => { arity: Arity::Exact(1), func: builtin::acosh },
    "atanh"       => { arity: Arity::Exact(1), func: builtin::atanh },
    "acsch"       => { arity: Arity::Exact(1), func: builtin::acsch },
    "asech"       => { arity: Arity::Exact(1), func: builtin::asech },
    "acoth"       => { arity: Arity::Exact(1), func: builtin::acoth },
    "d"           => { arity: Arity::Exact(1), func: builtin::degrees },
    "r"           => { arity: Arity::Exact(1), func: builtin::radians },
    "sqrt"        => { arity: Arity::Exact(1), func: builtin::sqrt },
    "cbrt"        => { arity: Arity::Exact(1), func: builtin::cbrt },
    "abs"         => { arity: Arity::Exact(1), func: builtin::abs },
    "round"       => { arity: Arity::Exact(1), func: builtin::round },
    "ln"          => { arity: Arity::Exact(1), func: log::ln },
    "log"         => { arity: Arity::Exact(1), func: log::log10 },
    "logb"        => { arity: Arity::Exact(1), func: log::log2 },
    "sum"         => { arity: Arity::Any, func: aggregate::sum },
    "average"     => { arity: Arity::AtLeast(1), func: aggregate::average },
    "factorial"   => { arity: Arity::Exact(1), func: choose::factorial },
    "permutation" => { arity: Arity::Exact(2), func: choose::permutation },
    "combination" => { arity: Arity::Exact(2), func: choose::combination },
}

/// A named callable together with its arity constraint.
pub struct Function {
    arity: Arity,
    body:  FunctionBody,
}

impl Function {
    /// Checks the argument count, then runs the function body.
    ///
    /// # Errors
    /// [`CalcError::UnsupportedOperand`] if the argument count does not
    /// satisfy the arity, plus anything the body itself reports.
    pub fn call(&self, name: &str, args: &[f64]) -> CalcResult<f64> {
        if !self.arity.check(args.len()) {
            return Err(CalcError::unsupported(format!("{name} expects {}, but got {}",
                                                      self.arity,
                                                      args.len())));
        }
        (self.body)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("arity", &self.arity).finish_non_exhaustive()
    }
}

/// Immutable name to function mapping consulted by function calls.
///
/// Built once, before the first statement, and only read afterwards.
///
/// # Example
/// ```
/// use calc_cli::interpreter::evaluator::function::core::{Arity, FunctionTable};
///
/// let mut table = FunctionTable::default();
/// table.register("double", Arity::Exact(1), |args| Ok(args[0] * 2.0));
///
/// assert_eq!(table.call("double", &[21.0]).unwrap(), 42.0);
/// assert_eq!(table.call("sum", &[1.0, 2.0, 3.0]).unwrap(), 6.0);
/// assert!(table.call("double", &[1.0, 2.0]).is_err());
/// ```
#[derive(Debug)]
pub struct FunctionTable {
    functions: HashMap<String, Function>,
}

impl FunctionTable {
    /// Creates a table without any functions.
    #[must_use]
    pub fn empty() -> Self {
        Self { functions: HashMap::new() }
    }

    /// Adds or replaces a function.
    ///
    /// The arity is checked before `body` runs, so `body` may index into its
    /// arguments up to the guaranteed count.
    pub fn register<F>(&mut self, name: &str, arity: Arity, body: F)
        where F: Fn(&[f64]) -> CalcResult<f64> + Send + Sync + 'static
    {
        self.functions.insert(name.to_string(),
                              Function { arity,
                                         body: Box::new(body) });
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Invokes `name` with `args`.
    ///
    /// # Errors
    /// - [`CalcError::VariableNotDefined`] if no function has that name.
    /// - [`CalcError::UnsupportedOperand`] on an arity mismatch.
    pub fn call(&self, name: &str, args: &[f64]) -> CalcResult<f64> {
        let Some(function) = self.get(name) else {
            return Err(CalcError::VariableNotDefined { name: name.to_string() });
        };

        debug!(name, ?args, "calling function");
        function.call(name, args)
    }

    /// Iterates over the registered names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl Default for FunctionTable {
    /// Every builtin listed in [`BUILTIN_FUNCTIONS`].
    fn default() -> Self {
        let mut table = Self::empty();
        for def in BUILTIN_TABLE {
            table.register(def.name, def.arity, def.func);
        }
        table
    }
}

/// Ensures that a builtin received exactly `expected` arguments.
///
/// Builtins are normally reached through [`FunctionTable::call`], which checks
/// arity first; this keeps them safe when called directly.
///
/// # Example
/// ```
/// use calc_cli::interpreter::evaluator::function::core::check_arity;
///
/// assert!(check_arity(&[2.0, 1.0], 2).is_ok());
/// assert!(check_arity(&[2.0], 2).is_err());
/// ```
pub fn check_arity(args: &[f64], expected: usize) -> CalcResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CalcError::unsupported(format!("expected {}, but got {}",
                                           Arity::Exact(expected),
                                           args.len())))
    }
}
