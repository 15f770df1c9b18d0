use log::debug;
use num_bigint::BigInt;
use std::collections::HashMap;

/// Variable table of a calculator session.
///
/// Names are case-sensitive.  Entries only appear through [`assign`]; reading
/// an absent name never creates it.
///
/// [`assign`]: Environment::assign
#[derive(Debug, Clone, Default)]
pub struct Environment {
    values: HashMap<String, BigInt>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
        }
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn assign(&mut self, name: &str, value: BigInt) {
        debug!("Assigning {} = {}", name, value);

        self.values.insert(name.to_string(), value);
    }

    /// Owned copy of the current value of `name`.
    pub fn get(&self, name: &str) -> Option<BigInt> {
        self.values.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
