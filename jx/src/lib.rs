//! JX builtin function evaluation
//!
//! Evaluates JSON-like template trees (symbols, function calls, nested
//! arrays and objects) into concrete values. The builtins `str`, `range` and
//! `foreach` are dispatched through [`function::evaluate_builtin`].

pub mod config;
pub mod error;
pub mod eval;
pub mod function;
pub mod value;

pub use config::EvalConfig;
pub use error::{JxError, Result};
pub use eval::{Evaluate, Evaluator, evaluate};
pub use function::{Builtin, evaluate_builtin};
pub use value::{FunctionCall, Kind, Object, Value};
