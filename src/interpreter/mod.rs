pub mod ast;
pub mod value;
pub mod lexer;
pub mod parser;
pub mod environment;
pub mod checker;
pub mod evaluator;
pub mod console;
