//! Expression evaluator
//!
//! Evaluation turns a template tree into a concrete value. Symbols are looked
//! up in the context object, arrays and objects are evaluated element-wise,
//! and function calls are dispatched to the builtins. Nothing here fails: any
//! node that cannot be evaluated becomes `Value::Null`.

use crate::config::EvalConfig;
use crate::function::{Builtin, evaluate_builtin};
use crate::value::Value;
use tracing::{debug, warn};

/// Evaluation seam used by the builtins
pub trait Evaluate {
    /// Evaluate `node` against `context` (an object of variable bindings)
    fn evaluate(&mut self, node: &Value, context: Option<&Value>) -> Value;
}

/// Reference evaluator
#[derive(Debug, Default)]
pub struct Evaluator {
    config: EvalConfig,
    /// Current nesting depth
    depth: usize,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Evaluator { config, depth: 0 }
    }

    fn eval_inner(&mut self, node: &Value, context: Option<&Value>) -> Value {
        match node {
            Value::Null
            | Value::Boolean(_)
            | Value::Integer(_)
            | Value::Double(_)
            | Value::String(_) => node.clone(),
            Value::Symbol(name) => match context.and_then(|ctx| ctx.lookup(name)) {
                Some(value) => value.clone(),
                None => {
                    debug!(symbol = %name, "unbound symbol evaluates to null");
                    Value::Null
                }
            },
            Value::Array(items) => items
                .iter()
                .map(|item| self.evaluate(item, context))
                .collect(),
            Value::Object(pairs) => Value::Object(
                pairs
                    .iter()
                    .map(|(k, v)| (k.clone(), self.evaluate(v, context)))
                    .collect(),
            ),
            Value::FunctionCall(call) => {
                let function = Builtin::from_name(&call.name);
                if function == Builtin::Invalid {
                    debug!(name = %call.name, "unknown function evaluates to null");
                    return Value::Null;
                }
                evaluate_builtin(self, function, &call.arguments, context)
            }
        }
    }
}

impl Evaluate for Evaluator {
    fn evaluate(&mut self, node: &Value, context: Option<&Value>) -> Value {
        if self.depth >= self.config.max_depth {
            warn!(max_depth = self.config.max_depth, "evaluation too deep, yielding null");
            return Value::Null;
        }
        self.depth += 1;
        let result = self.eval_inner(node, context);
        self.depth -= 1;
        result
    }
}

/// Evaluate `node` once with a default evaluator
pub fn evaluate(node: &Value, context: Option<&Value>) -> Value {
    Evaluator::new().evaluate(node, context)
}
