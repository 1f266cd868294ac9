//! `str`, `range` and `foreach`

use super::args::{Arg, ArgKind, bind_args};
use crate::eval::Evaluate;
use crate::value::{Value, print_args};
use tracing::debug;

/// `str(args...)`
///
/// An absent argument list gives null and an empty one gives `""`. Otherwise
/// the arguments are evaluated and printed comma separated.
pub(super) fn eval_str<E: Evaluate + ?Sized>(
    ev: &mut E,
    arguments: &Value,
    context: Option<&Value>,
) -> Value {
    match arguments.array_len() {
        None => return Value::Null,
        Some(0) => return Value::string(""),
        Some(_) => {}
    }
    let args = ev.evaluate(arguments, context);
    if args.array_len().is_none() {
        return Value::Null;
    }
    Value::String(print_args(&args))
}

/// `range(stop)`, `range(start, stop)`, `range(start, stop, step)`
///
/// Counts upward from `start` while `i < stop`. A positive step stops once
/// `i + step` would overflow. The comparison is the same for every step, so
/// a zero step over a non-empty interval never ends and a negative one only
/// ends when `i` wraps past `i64::MIN`.
pub(super) fn eval_range<E: Evaluate + ?Sized>(
    ev: &mut E,
    arguments: &Value,
    context: Option<&Value>,
) -> Value {
    let args = ev.evaluate(arguments, context);
    let binding = bind_args(&args, &[ArgKind::Integer; 3]);
    let (start, stop, step) = match *binding.args() {
        [Arg::Integer(stop)] => (0, stop, 1),
        [Arg::Integer(start), Arg::Integer(stop)] => (start, stop, 1),
        [Arg::Integer(start), Arg::Integer(stop), Arg::Integer(step)] => (start, stop, step),
        _ => {
            debug!(args = %args, "range expects 1 to 3 integers");
            return Value::Null;
        }
    };

    let mut items = Vec::new();
    let mut i = start;
    while i < stop {
        items.push(Value::Integer(i));
        i = if step > 0 {
            match i.checked_add(step) {
                Some(next) => next,
                None => break,
            }
        } else {
            i.wrapping_add(step)
        };
    }
    Value::Array(items)
}

/// `foreach(symbol, array, body)`
///
/// Evaluates `array`, then `body` once per element with `symbol` bound to the
/// element in a copy of the context. The result has one entry per element,
/// null entries included.
pub(super) fn eval_foreach<E: Evaluate + ?Sized>(
    ev: &mut E,
    arguments: &Value,
    context: Option<&Value>,
) -> Value {
    let binding = bind_args(arguments, &[ArgKind::Symbol, ArgKind::Any, ArgKind::Any]);
    if !binding.is_complete() {
        debug!(matched = binding.matched(), "foreach expects (symbol, array, body)");
        return Value::Null;
    }
    let [Arg::Text(symbol), Arg::Value(source), Arg::Value(body)] = binding.args() else {
        return Value::Null;
    };
    if symbol.is_empty() {
        return Value::Null;
    }

    let items = match ev.evaluate(source, context) {
        Value::Array(items) => items,
        other => {
            debug!(%symbol, kind = other.kind().name(), "foreach source is not an array");
            return Value::Null;
        }
    };

    items
        .iter()
        .map(|item| {
            let mut local = context.cloned().unwrap_or_else(Value::empty_object);
            local.insert(symbol.as_str(), item.clone());
            ev.evaluate(body, Some(&local))
        })
        .collect()
}
