//! JX values
//!
//! A `Value` is an owned tree. Cloning deep-copies it and dropping it frees
//! every node, so a value always has exactly one owner.

mod json;
mod print;

pub use print::print_args;

use indexmap::IndexMap;

/// Ordered name -> value mapping used for objects and contexts
pub type Object = IndexMap<String, Value>;

/// JX value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    /// Quoted text
    String(String),
    /// Bare identifier, resolved against the context on evaluation
    Symbol(String),
    Array(Vec<Value>),
    Object(Object),
    FunctionCall(FunctionCall),
}

/// Value kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Boolean,
    Integer,
    Double,
    String,
    Symbol,
    Array,
    Object,
    FunctionCall,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::Symbol => "symbol",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::FunctionCall => "function",
        }
    }
}

/// Unevaluated call node: `name(arguments...)`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    /// Argument list. Anything other than an `Array` means the list is absent,
    /// which is not the same as an empty call.
    pub arguments: Box<Value>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, arguments: Vec<Value>) -> Self {
        FunctionCall {
            name: name.into(),
            arguments: Box::new(Value::Array(arguments)),
        }
    }

    /// Call node whose argument list is missing
    pub fn without_arguments(name: impl Into<String>) -> Self {
        FunctionCall {
            name: name.into(),
            arguments: Box::new(Value::Null),
        }
    }
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn empty_object() -> Self {
        Value::Object(Object::new())
    }

    pub fn call(name: impl Into<String>, arguments: Vec<Value>) -> Self {
        Value::FunctionCall(FunctionCall::new(name, arguments))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::Symbol(_) => Kind::Symbol,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::FunctionCall(_) => Kind::FunctionCall,
        }
    }

    pub fn is_kind(&self, kind: Kind) -> bool {
        self.kind() == kind
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Number of array elements, or `None` when this is not an array
    pub fn array_len(&self) -> Option<usize> {
        self.as_array().map(<[Value]>::len)
    }

    /// Append to an array. Returns false (dropping `item`) for non-arrays.
    pub fn push(&mut self, item: Value) -> bool {
        match self {
            Value::Array(items) => {
                items.push(item);
                true
            }
            _ => false,
        }
    }

    /// Bind `key` in an object, replacing any earlier binding of the same name.
    /// Returns false (dropping `value`) when `self` is not an object.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> bool {
        match self {
            Value::Object(pairs) => {
                pairs.insert(key.into(), value);
                true
            }
            _ => false,
        }
    }

    /// Look up a binding in an object
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|pairs| pairs.get(name))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Double(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(pairs: Object) -> Self {
        Value::Object(pairs)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}
