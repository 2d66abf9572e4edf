use std::collections::HashMap;

/// The golden ratio, `(1 + sqrt(5)) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Names seeded into every default [`ConstantTable`].
pub const BUILTIN_CONSTANTS: &[(&str, f64)] =
    &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E), ("phi", PHI)];

/// Read-only name to value lookup for predefined constants.
///
/// Constants are resolved before user variables and cannot be redeclared
/// with `let`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantTable {
    constants: HashMap<String, f64>,
}

impl ConstantTable {
    /// Creates a table without any constants.
    #[must_use]
    pub fn empty() -> Self {
        Self { constants: HashMap::new() }
    }

    /// Creates a table from arbitrary name/value pairs.
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self { constants: pairs.into_iter()
                               .map(|(name, value)| (name.to_string(), value))
                               .collect(), }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }
}

impl Default for ConstantTable {
    /// `pi`, `e` and `phi`.
    fn default() -> Self {
        Self::from_pairs(BUILTIN_CONSTANTS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_the_three_constants() {
        let table = ConstantTable::default();
        assert_eq!(table.get("pi"), Some(std::f64::consts::PI));
        assert_eq!(table.get("e"), Some(std::f64::consts::E));
        assert!((table.get("phi").unwrap() - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-15);
        assert!(!table.contains("tau"));
    }

    #[test]
    fn empty_table_resolves_nothing() {
        assert_eq!(ConstantTable::empty().get("pi"), None);
    }
}
