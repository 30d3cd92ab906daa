use tracing::debug;
use crate::interpreter::ast::{Binary, Identifier, Node, StaticType};
use crate::interpreter::console::Console;
use crate::interpreter::lexer::{Lexer, Token, TokenType};


/// Recursive descent parser with one token of lookahead (`current`).
///
/// Parsing stops at the first syntax error: it is reported right away, every
/// parse function returns `None` from then on and `had_error` stays set.
pub struct Parser<'source, 'console, 'out> {
    lexer: Lexer<'source>,
    previous: Token, current: Token,

    console: &'console mut Console<'out>,

    had_error: bool,
}

impl<'source, 'console, 'out> Parser<'source, 'console, 'out> {
    pub fn new(lexer: Lexer<'source>, console: &'console mut Console<'out>) -> Parser<'source, 'console, 'out> {
        Parser {
            lexer,
            previous: Token::new(TokenType::Done, String::new(), 1),
            current: Token::new(TokenType::Done, String::new(), 1),
            console,
            had_error: false,
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    // Statement parsing

    pub fn parse(&mut self) -> Option<Node> {
        self.consume();

        let statements = self.parse_statement_list()?;
        debug!(statements = statements.len(), "parsed program");

        Some(Node::StatementList(statements))
    }

    fn parse_statement_list(&mut self) -> Option<Vec<Node>> {
        let mut statements = Vec::new();

        while !self.is_eof() {
            let statement = self.parse_statement()?;
            self.expect(TokenType::Semicolon, "semicolon required")?;

            statements.push(statement);
        }

        Some(statements)
    }

    fn parse_statement(&mut self) -> Option<Node> {
        match self.current.token_type() {
            TokenType::Int | TokenType::String => self.parse_declaration(),
            TokenType::Set => self.parse_assignment(),
            TokenType::Print | TokenType::Println => self.parse_print(),
            _ => {
                self.error_at_current("statement expected");
                None
            },
        }
    }

    fn parse_declaration(&mut self) -> Option<Node> {
        self.consume();
        let keyword = self.previous.clone();

        let declared_type = if keyword.token_type() == TokenType::Int { StaticType::Int } else { StaticType::String };
        let identifier = self.expect_identifier()?;

        Some(Node::VariableDeclaration { line: keyword.line(), declared_type, identifier })
    }

    fn parse_assignment(&mut self) -> Option<Node> {
        self.consume();
        let keyword = self.previous.clone();

        let identifier = self.expect_identifier()?;
        let expr = self.parse_expression()?;

        Some(Node::VariableAssignment { line: keyword.line(), identifier, expr: Box::new(expr) })
    }

    fn parse_print(&mut self) -> Option<Node> {
        self.consume();
        let keyword = self.previous.clone();

        let expr = self.parse_expression()?;

        Some(Node::PrintCommand {
            line: keyword.line(),
            newline: keyword.token_type() == TokenType::Println,
            expr: Box::new(expr),
        })
    }

    fn expect_identifier(&mut self) -> Option<Identifier> {
        self.expect(TokenType::Identifier, "identifier expected")?;

        Some(Identifier { name: self.previous.lexeme().to_owned(), line: self.previous.line() })
    }

    // Expression parsing

    fn parse_expression(&mut self) -> Option<Node> {
        let mut expr = self.parse_term()?;

        while self.matches_any(&[TokenType::Plus, TokenType::Minus]) {
            let operator = self.previous.clone();
            let right = self.parse_term()?;

            let binary = Binary::new(operator.line(), expr, right);
            expr = if operator.token_type() == TokenType::Plus { Node::Addition(binary) } else { Node::Subtraction(binary) };
        }

        Some(expr)
    }

    fn parse_term(&mut self) -> Option<Node> {
        let mut expr = self.parse_primary()?;

        while self.matches_any(&[TokenType::Multiply, TokenType::Divide]) {
            let operator = self.previous.clone();
            let right = self.parse_primary()?;

            let binary = Binary::new(operator.line(), expr, right);
            expr = if operator.token_type() == TokenType::Multiply { Node::Multiplication(binary) } else { Node::Division(binary) };
        }

        Some(expr)
    }

    fn parse_primary(&mut self) -> Option<Node> {
        if self.matches(TokenType::IntConstant) {
            let number = self.previous.clone();

            return match number.lexeme().parse::<i32>() {
                Ok(value) => Some(Node::IntegerConstant { line: number.line(), value }),
                Err(_) => {
                    self.error_at(&number, &format!("integer constant out of range {}", number.lexeme()));
                    None
                },
            };
        } else if self.matches(TokenType::StringConstant) {
            let string = self.previous.clone();
            let lexeme = string.lexeme();

            // Strip the surrounding quotes
            return Some(Node::StringConstant { line: string.line(), value: lexeme[1..lexeme.len() - 1].to_owned() });
        } else if self.matches(TokenType::Identifier) {
            return Some(Node::Identifier(Identifier { name: self.previous.lexeme().to_owned(), line: self.previous.line() }));
        } else if self.matches(TokenType::ParenthesisLeft) {
            let expr = self.parse_expression()?;
            self.expect(TokenType::ParenthesisRight, "right paren expected")?;

            return Some(expr);
        }

        self.error_at_current("primary expected");
        None
    }

    fn consume(&mut self) {
        self.previous = std::mem::replace(&mut self.current, self.lexer.scan_token());
    }

    fn expect(&mut self, token_type: TokenType, message: &str) -> Option<()> {
        if self.matches(token_type) {
            return Some(());
        }

        self.error_at_current(message);
        None
    }

    fn matches(&mut self, token_type: TokenType) -> bool { // Should be called "match", but that's a keyword
        if !self.check(token_type) {
            return false;
        }

        self.consume();
        true
    }

    fn matches_any(&mut self, token_types: &[TokenType]) -> bool {
        for token_type in token_types {
            if self.check(*token_type) {
                self.consume();
                return true;
            }
        }

        false
    }

    #[inline]
    fn check(&self, token_type: TokenType) -> bool {
        self.current.token_type() == token_type
    }

    fn is_eof(&self) -> bool {
        self.current.token_type() == TokenType::Done
    }

    // Error handling

    fn error_at_current(&mut self, message: &str) {
        let token = self.current.clone();
        self.error_at(&token, message);
    }

    fn error_at(&mut self, token: &Token, message: &str) {
        if self.had_error {
            return;
        }

        // A malformed token is reported as itself rather than as whatever was expected in its place
        let message = if token.token_type() == TokenType::Error {
            format!("Syntax error invalid token {}", token.lexeme().trim_end_matches('\n'))
        } else {
            format!("Syntax error {}", message)
        };

        self.console.error_at(token.line(), &message);
        self.had_error = true;
    }
}
