use tracing::debug;
use crate::interpreter::ast::{Binary, Identifier, Node, StaticType};
use crate::interpreter::console::{Console, Diagnostic};
use crate::interpreter::environment::TypeEnvironment;


/// Single pass over the tree enforcing declare-before-use and type
/// consistency.
///
/// Every problem is reported as soon as it is found and the pass keeps
/// going, so one run shows all semantic errors of a program. Declarations
/// are recorded in the shared [`TypeEnvironment`].
pub struct SemanticChecker<'env, 'console, 'out> {
    types: &'env mut TypeEnvironment,
    console: &'console mut Console<'out>,

    errors: Vec<Diagnostic>,
}

impl<'env, 'console, 'out> SemanticChecker<'env, 'console, 'out> {
    pub fn new(types: &'env mut TypeEnvironment, console: &'console mut Console<'out>) -> SemanticChecker<'env, 'console, 'out> {
        SemanticChecker { types, console, errors: Vec::new() }
    }

    pub fn is_error_free(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Checks `node` and its children, returning the node's static type.
    ///
    /// Operand types come back from the recursive calls, so every node is
    /// typed exactly once.
    pub fn check(&mut self, node: &Node) -> StaticType {
        match node {
            Node::StatementList(statements) => {
                for statement in statements {
                    self.check(statement);
                }

                debug!(errors = self.errors.len(), declared = self.types.len(), "checked program");
                StaticType::Empty
            },
            Node::VariableDeclaration { line, declared_type, identifier } => {
                // The identifier is being declared here, not used
                if !self.types.declare(&identifier.name, *declared_type) {
                    self.error_at(*line, format!("variable {} was already declared", identifier.name));
                }

                *declared_type
            },
            Node::VariableAssignment { identifier, expr, .. } => {
                let target_type = self.check_identifier(identifier);
                let expr_type = self.check(expr);

                if self.types.contains(&identifier.name) && expr_type != target_type {
                    self.error_at(expr.line(), String::from("type error"));
                }

                StaticType::Empty
            },
            Node::PrintCommand { expr, .. } => {
                self.check(expr);
                StaticType::Empty
            },
            Node::Identifier(identifier) => self.check_identifier(identifier),
            Node::Addition(binary) | Node::Subtraction(binary)
            | Node::Multiplication(binary) | Node::Division(binary) => self.check_operation(node, binary),
            Node::IntegerConstant { .. } => StaticType::Int,
            Node::StringConstant { .. } => StaticType::String,
        }
    }

    fn check_identifier(&mut self, identifier: &Identifier) -> StaticType {
        match self.types.get(&identifier.name) {
            Some(static_type) => static_type,
            None => {
                self.error_at(identifier.line, format!("variable {} is used before being declared", identifier.name));
                StaticType::Error
            },
        }
    }

    fn check_operation(&mut self, node: &Node, binary: &Binary) -> StaticType {
        let left = self.check(&binary.left);
        let right = self.check(&binary.right);

        let static_type = node.operation_type(left, right);

        if static_type == StaticType::Error {
            self.error_at(binary.line, String::from("type error"));
        }

        static_type
    }

    // Error handling

    fn error_at(&mut self, line: i32, message: String) {
        let diagnostic = Diagnostic::new(line, message);

        self.console.report(&diagnostic);
        self.errors.push(diagnostic);
    }
}
