use std::collections::HashMap;
use crate::interpreter::ast::StaticType;
use crate::interpreter::value::Value;

/// Declared type of every variable, filled in by the semantic checker.
///
/// Entries are only ever added; a name can be declared once per run.
#[derive(Debug, Default)]
pub struct TypeEnvironment {
    types: HashMap<String, StaticType>,
}

impl TypeEnvironment {
    pub fn new() -> TypeEnvironment {
        TypeEnvironment::default()
    }

    /// Records `name` with its type. Returns `false` without touching the
    /// existing entry if the name was already declared.
    pub fn declare(&mut self, name: &str, static_type: StaticType) -> bool {
        if self.types.contains_key(name) {
            false
        } else {
            self.types.insert(name.to_owned(), static_type);
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<StaticType> {
        self.types.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Current value of every variable, written by declarations and
/// assignments during evaluation.
#[derive(Debug, Default)]
pub struct ValueEnvironment {
    values: HashMap<String, Value>,
}

impl ValueEnvironment {
    pub fn new() -> ValueEnvironment {
        ValueEnvironment::default()
    }

    pub fn bind(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_owned(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

/// Both name tables of a single run. Nothing is ever removed from either,
/// so one environment must not be reused for a second program.
#[derive(Debug, Default)]
pub struct Environment {
    pub types: TypeEnvironment,
    pub values: ValueEnvironment,
}

impl Environment {
    pub fn new() -> Environment {
        Environment::default()
    }
}
