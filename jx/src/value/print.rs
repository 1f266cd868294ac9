//! Canonical text form of values

use super::{FunctionCall, Value};
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Double(x) => write!(f, "{x}"),
            Value::String(s) => write_quoted(f, s),
            Value::Symbol(name) => write!(f, "{name}"),
            Value::Array(items) => {
                write!(f, "[")?;
                write_items(f, items)?;
                write!(f, "]")
            }
            Value::Object(pairs) => {
                write!(f, "{{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write_quoted(f, k)?;
                    write!(f, ":{v}")?;
                }
                write!(f, "}}")
            }
            Value::FunctionCall(call) => write!(f, "{call}"),
        }
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        if let Some(args) = self.arguments.as_array() {
            write_items(f, args)?;
        }
        write!(f, ")")
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, v) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{v}")?;
    }
    Ok(())
}

// serde_json owns the escaping rules; serializing a &str cannot fail
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    match serde_json::to_string(s) {
        Ok(quoted) => f.write_str(&quoted),
        Err(_) => Err(fmt::Error),
    }
}

/// Print the elements of an evaluated argument array, comma separated.
/// Anything other than an array prints as the empty string.
pub fn print_args(args: &Value) -> String {
    match args.as_array() {
        Some(items) => items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;
    use insta::assert_snapshot;

    #[test]
    fn test_scalar_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(Value::Integer(-42).to_string(), "-42");
        assert_eq!(Value::Double(3.25).to_string(), "3.25");
    }

    #[test]
    fn test_string_is_quoted_and_escaped() {
        assert_snapshot!(Value::string("say \"hi\"\n").to_string(), @r#""say \"hi\"\n""#);
    }

    #[test]
    fn test_symbol_is_bare() {
        assert_eq!(Value::symbol("x").to_string(), "x");
    }

    #[test]
    fn test_nested_display() {
        let mut pairs = Object::new();
        pairs.insert("b".to_string(), Value::Array(vec![Value::Integer(1), Value::Null]));
        pairs.insert("a".to_string(), Value::string("s"));
        assert_snapshot!(Value::Object(pairs).to_string(), @r#"{"b":[1,null],"a":"s"}"#);
    }

    #[test]
    fn test_function_call_display() {
        let call = Value::call("range", vec![Value::Integer(1), Value::symbol("n")]);
        assert_snapshot!(call.to_string(), @"range(1,n)");
        let absent = Value::FunctionCall(FunctionCall::without_arguments("str"));
        assert_eq!(absent.to_string(), "str()");
    }

    #[test]
    fn test_print_args() {
        let args = Value::Array(vec![Value::Integer(1), Value::Integer(2)]);
        assert_eq!(print_args(&args), "1,2");
        assert_eq!(print_args(&Value::Array(vec![])), "");
        assert_eq!(print_args(&Value::Integer(7)), "");
    }
}
