use std::fmt::{Debug, Display, Formatter};
use crate::interpreter::environment::TypeEnvironment;
use crate::interpreter::value::Value;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticType {
    Int, String,
    // Ill-typed
    Error,
    Empty,
}

impl StaticType {
    /// Value a freshly declared variable of this type starts with.
    pub fn default_value(&self) -> Value {
        match self {
            StaticType::Int => Value::Integer(0),
            StaticType::String => Value::String(String::new()),
            StaticType::Error | StaticType::Empty => Value::Empty,
        }
    }
}

impl Debug for StaticType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StaticType::Int => write!(f, "int"),
            StaticType::String => write!(f, "string"),
            StaticType::Error => write!(f, "error"),
            StaticType::Empty => write!(f, "empty"),
        }
    }
}

impl Display for StaticType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub line: i32,
}

/// Operands of an arithmetic node. `line` is the operator's line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binary {
    pub line: i32,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

impl Binary {
    pub fn new(line: i32, left: Node, right: Node) -> Binary {
        Binary { line, left: Box::new(left), right: Box::new(right) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    StatementList(Vec<Node>),

    Addition(Binary),
    Subtraction(Binary),
    Multiplication(Binary),
    Division(Binary),

    IntegerConstant {
        line: i32,
        value: i32,
    },
    StringConstant {
        line: i32,
        value: String,
    },
    Identifier(Identifier),

    VariableDeclaration {
        line: i32,
        declared_type: StaticType,
        identifier: Identifier,
    },
    VariableAssignment {
        line: i32,
        identifier: Identifier,
        expr: Box<Node>,
    },
    PrintCommand {
        line: i32,
        newline: bool,
        expr: Box<Node>,
    },
}

impl Node {
    /// Line this node is reported at. A statement list reports its first
    /// statement's line; an empty list has none and reports line 1, where
    /// the empty program starts.
    pub fn line(&self) -> i32 {
        match self {
            Node::StatementList(statements) => statements.first().map_or(1, Node::line),
            Node::Addition(binary) | Node::Subtraction(binary)
            | Node::Multiplication(binary) | Node::Division(binary) => binary.line,
            Node::IntegerConstant { line, .. } | Node::StringConstant { line, .. } => *line,
            Node::Identifier(identifier) => identifier.line,
            Node::VariableDeclaration { line, .. }
            | Node::VariableAssignment { line, .. }
            | Node::PrintCommand { line, .. } => *line,
        }
    }

    /// Type of this node as far as the semantic checker can tell.
    ///
    /// Computed structurally from the children; identifiers look themselves
    /// up in `types` and are ill-typed when undeclared.
    pub fn get_type(&self, types: &TypeEnvironment) -> StaticType {
        match self {
            Node::Addition(binary) | Node::Subtraction(binary)
            | Node::Multiplication(binary) | Node::Division(binary) => {
                self.operation_type(binary.left.get_type(types), binary.right.get_type(types))
            },
            Node::IntegerConstant { .. } => StaticType::Int,
            Node::StringConstant { .. } => StaticType::String,
            Node::Identifier(identifier) => types.get(&identifier.name).unwrap_or(StaticType::Error),
            Node::VariableDeclaration { declared_type, .. } => *declared_type,
            Node::StatementList(_) | Node::VariableAssignment { .. } | Node::PrintCommand { .. } => StaticType::Empty,
        }
    }

    /// Result type of an arithmetic node given its operand types. Anything
    /// that is not an arithmetic node is ill-typed here.
    pub fn operation_type(&self, left: StaticType, right: StaticType) -> StaticType {
        match self {
            Node::Addition(_) | Node::Division(_) => if left == right { left } else { StaticType::Error },
            Node::Subtraction(_) => match (left, right) {
                (StaticType::Int, StaticType::Int) => StaticType::Int,
                _ => StaticType::Error,
            },
            // `int * x` takes the type of `x`, so `int * string` is a string
            Node::Multiplication(_) => match (left, right) {
                (StaticType::Int, right) => right,
                (StaticType::String, StaticType::Int) => StaticType::String,
                _ => StaticType::Error,
            },
            _ => StaticType::Error,
        }
    }
}
