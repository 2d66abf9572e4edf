use std::collections::HashMap;

use tracing::debug;

use crate::error::{CalcError, CalcResult};

/// Interpreter state carried from one statement to the next.
///
/// Holds every variable declared with `let` and the value of the most recent
/// successful statement, reachable as `_`. An `Environment` is created once
/// per session and handed to
/// [`Calculator::statement`](crate::interpreter::evaluator::core::Calculator::statement)
/// by mutable reference. Sessions that need isolation, such as tests, simply
/// create a fresh one.
///
/// Variables are write-once: a name cannot be declared twice.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
    previous:  f64,
}

impl Environment {
    /// Creates an environment with no variables and a previous value of `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`.
    ///
    /// # Errors
    /// [`CalcError::RedeclarationOfVariable`] if `name` is already bound. The
    /// existing binding is left untouched.
    ///
    /// # Example
    /// ```
    /// use calc_cli::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.define("x", 5.0).unwrap();
    /// assert_eq!(env.get("x"), Some(5.0));
    /// assert!(env.define("x", 6.0).is_err());
    /// assert_eq!(env.get("x"), Some(5.0));
    /// ```
    pub fn define(&mut self, name: &str, value: f64) -> CalcResult<()> {
        if self.variables.contains_key(name) {
            return Err(CalcError::RedeclarationOfVariable { name: name.to_string() });
        }

        debug!(name, value, "variable declared");
        self.variables.insert(name.to_string(), value);
        Ok(())
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// The result of the last successful statement.
    #[must_use]
    pub const fn previous(&self) -> f64 {
        self.previous
    }

    pub(crate) const fn set_previous(&mut self, value: f64) {
        self.previous = value;
    }

    /// Iterates over the declared variables in no particular order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
