use std::collections::HashMap;

/// Variable bindings for one source file. A single flat namespace: an
/// assignment either creates a binding or overwrites the existing one.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    values: HashMap<String, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
        }
    }

    pub fn define(&mut self, name: impl Into<String>, value: i64) {
        self.values.insert(name.into(), value);
    }

    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
