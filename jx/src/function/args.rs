//! Typed argument binding
//!
//! Builtins describe the arguments they expect as a list of `ArgKind`s and
//! bind them against an argument array in one pass. Binding stops at the
//! first element that is missing or of the wrong kind; the prefix bound so
//! far is kept, which is how builtins implement optional trailing arguments.

use crate::value::{Kind, Value};

/// Expected kind of one argument slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Accept any value
    Any,
    Integer,
    Boolean,
    Double,
    String,
    Symbol,
    Object,
    Array,
    FunctionCall,
}

impl ArgKind {
    fn accepts(self, value: &Value) -> bool {
        let kind = match self {
            ArgKind::Any => return true,
            ArgKind::Integer => Kind::Integer,
            ArgKind::Boolean => Kind::Boolean,
            ArgKind::Double => Kind::Double,
            ArgKind::String => Kind::String,
            ArgKind::Symbol => Kind::Symbol,
            ArgKind::Object => Kind::Object,
            ArgKind::Array => Kind::Array,
            ArgKind::FunctionCall => Kind::FunctionCall,
        };
        value.is_kind(kind)
    }
}

/// One bound argument, owned by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Integer(i64),
    Boolean(bool),
    Double(f64),
    /// Copy of string or symbol text
    Text(String),
    /// Deep copy of the element (`Any`, objects, arrays, calls)
    Value(Value),
}

impl Arg {
    fn bind(kind: ArgKind, value: &Value) -> Option<Arg> {
        if !kind.accepts(value) {
            return None;
        }
        let arg = match (kind, value) {
            (ArgKind::Any, v) => Arg::Value(v.clone()),
            (_, Value::Integer(n)) => Arg::Integer(*n),
            (_, Value::Boolean(b)) => Arg::Boolean(*b),
            (_, Value::Double(x)) => Arg::Double(*x),
            (_, Value::String(s)) | (_, Value::Symbol(s)) => Arg::Text(s.clone()),
            (_, v) => Arg::Value(v.clone()),
        };
        Some(arg)
    }
}

/// Result of binding an argument array against a list of kinds
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    args: Vec<Arg>,
    expected: usize,
}

impl Binding {
    /// Number of slots bound, from the front
    pub fn matched(&self) -> usize {
        self.args.len()
    }

    /// Whether every requested slot was bound
    pub fn is_complete(&self) -> bool {
        self.args.len() == self.expected
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }
}

/// Bind the leading elements of `container` against `kinds`.
///
/// A non-array container binds nothing. Otherwise elements are matched in
/// order until one is missing or has the wrong kind, or every kind is bound.
pub fn bind_args(container: &Value, kinds: &[ArgKind]) -> Binding {
    let items = container.as_array().unwrap_or_default();
    let args = kinds
        .iter()
        .zip(items)
        .map_while(|(&kind, item)| Arg::bind(kind, item))
        .collect();
    Binding {
        args,
        expected: kinds.len(),
    }
}
