//! Symbol table of one session

use super::value::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    names: HashMap<String, Value>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.names.get(name)
    }

    /// Bind `name`, replacing any previous value regardless of its type
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.names.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Bindings sorted by name
    pub fn sorted(&self) -> Vec<(&str, &Value)> {
        let mut entries: Vec<(&str, &Value)> =
            self.names.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
