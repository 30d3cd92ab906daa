use tracing::{debug, warn};
use crate::interpreter::ast::{Binary, Node};
use crate::interpreter::console::Console;
use crate::interpreter::environment::ValueEnvironment;
use crate::interpreter::value::Value;

#[cfg(test)]
mod tests;

/// Tree-walking evaluator for programs that passed the semantic check.
pub struct Evaluator<'env, 'console, 'out> {
    environment: &'env mut ValueEnvironment,
    console: &'console mut Console<'out>,
}

impl<'env, 'console, 'out> Evaluator<'env, 'console, 'out> {
    pub fn new(environment: &'env mut ValueEnvironment, console: &'console mut Console<'out>) -> Evaluator<'env, 'console, 'out> {
        Evaluator { environment, console }
    }

    /// Evaluates `node`, left to right.
    ///
    /// Statements produce [`Value::Empty`] when they ran and [`Value::Error`]
    /// when a value they depend on failed; a statement list stops at the
    /// first statement that did not produce `Empty`.
    pub fn evaluate(&mut self, node: &Node) -> Value {
        match node {
            Node::StatementList(statements) => {
                for (index, statement) in statements.iter().enumerate() {
                    if !self.evaluate(statement).is_empty() {
                        debug!(line = statement.line(), skipped = statements.len() - index - 1, "execution stopped");
                        return Value::Error(None);
                    }
                }

                Value::Empty
            },

            Node::Addition(binary) => {
                let (left, right) = self.evaluate_operands(binary);
                left + right
            },
            Node::Subtraction(binary) => {
                let (left, right) = self.evaluate_operands(binary);
                left - right
            },
            Node::Multiplication(binary) => {
                let (left, right) = self.evaluate_operands(binary);
                left * right
            },
            Node::Division(binary) => {
                let (left, right) = self.evaluate_operands(binary);
                let value = left / right;

                if let Value::Error(Some(message)) = &value {
                    if !message.is_empty() {
                        self.console.error_at(binary.line, message);
                    }
                }

                value
            },

            Node::IntegerConstant { value, .. } => Value::Integer(*value),
            Node::StringConstant { value, .. } => Value::String(value.clone()),
            Node::Identifier(identifier) => match self.environment.get(&identifier.name) {
                Some(value) => value.clone(),
                None => {
                    warn!(name = %identifier.name, line = identifier.line, "read of unbound variable");
                    Value::Empty
                },
            },

            Node::VariableDeclaration { declared_type, identifier, .. } => {
                self.environment.bind(&identifier.name, declared_type.default_value());
                Value::Empty
            },
            Node::VariableAssignment { identifier, expr, .. } => {
                let value = self.evaluate(expr);

                if value.is_error() {
                    return Value::Error(None);
                }

                self.environment.bind(&identifier.name, value);
                Value::Empty
            },
            Node::PrintCommand { newline, expr, .. } => {
                let value = self.evaluate(expr);

                if value.is_error() {
                    return Value::Error(None);
                }

                self.console.print(&value, *newline);
                Value::Empty
            },
        }
    }

    // Both sides are always evaluated
    fn evaluate_operands(&mut self, binary: &Binary) -> (Value, Value) {
        let left = self.evaluate(&binary.left);
        let right = self.evaluate(&binary.right);

        (left, right)
    }
}
