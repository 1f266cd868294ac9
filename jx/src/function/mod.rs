//! Builtin functions
//!
//! Maps function names to builtins and dispatches calls. Every builtin gets
//! the raw, unevaluated argument list of its call node and decides for itself
//! what to evaluate and when.

mod args;
mod builtins;

pub use args::{Arg, ArgKind, Binding, bind_args};

use crate::eval::Evaluate;
use crate::value::Value;
use std::fmt;
use tracing::trace;

/// Builtin function identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `str(args...)`: print evaluated arguments to a string
    Str,
    /// `range([start,] stop[, step])`
    Range,
    /// `foreach(symbol, array, body)`
    Foreach,
    /// Name that matches no builtin
    Invalid,
}

impl Builtin {
    /// Every callable builtin
    pub const ALL: [Builtin; 3] = [Builtin::Str, Builtin::Range, Builtin::Foreach];

    /// Look up a builtin by name. Unknown names map to `Invalid`.
    pub fn from_name(name: &str) -> Builtin {
        match name {
            "str" => Builtin::Str,
            "range" => Builtin::Range,
            "foreach" => Builtin::Foreach,
            _ => Builtin::Invalid,
        }
    }

    /// Name of the builtin; `Invalid` prints as `???`
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Str => "str",
            Builtin::Range => "range",
            Builtin::Foreach => "foreach",
            Builtin::Invalid => "???",
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluate one call of `function` with its raw argument list
pub fn evaluate_builtin<E: Evaluate + ?Sized>(
    ev: &mut E,
    function: Builtin,
    arguments: &Value,
    context: Option<&Value>,
) -> Value {
    trace!(%function, arity = ?arguments.array_len(), "calling builtin");
    match function {
        Builtin::Str => builtins::eval_str(ev, arguments, context),
        Builtin::Range => builtins::eval_range(ev, arguments, context),
        Builtin::Foreach => builtins::eval_foreach(ev, arguments, context),
        Builtin::Invalid => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Evaluator;

    #[test]
    fn test_name_round_trip() {
        for f in Builtin::ALL {
            assert_eq!(Builtin::from_name(f.name()), f);
        }
    }

    #[test]
    fn test_unknown_name_is_invalid() {
        assert_eq!(Builtin::from_name("print"), Builtin::Invalid);
        assert_eq!(Builtin::from_name(""), Builtin::Invalid);
        assert_eq!(Builtin::from_name("STR"), Builtin::Invalid);
    }

    #[test]
    fn test_invalid_name_placeholder() {
        assert_eq!(Builtin::Invalid.name(), "???");
        assert_eq!(Builtin::Invalid.to_string(), "???");
        assert_eq!(Builtin::Foreach.to_string(), "foreach");
    }

    #[test]
    fn test_invalid_builtin_evaluates_to_null() {
        let args = Value::Array(vec![Value::Integer(1)]);
        let result = evaluate_builtin(&mut Evaluator::new(), Builtin::Invalid, &args, None);
        assert_eq!(result, Value::Null);
    }
}
