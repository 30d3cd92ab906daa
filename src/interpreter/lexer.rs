use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::Chars;
use lazy_static::lazy_static;
use crate::util;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Keywords
    Int, String,
    Set,
    Print, Println,

    Identifier,
    IntConstant, StringConstant,

    Plus, Minus, Multiply, Divide,
    ParenthesisLeft, ParenthesisRight,
    Semicolon,

    // Any ill-formed token
    Error,
    // End of input
    Done,
}

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenType> = HashMap::from([
        ("int", TokenType::Int),
        ("string", TokenType::String),
        ("set", TokenType::Set),
        ("print", TokenType::Print),
        ("println", TokenType::Println),
    ]);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    token_type: TokenType,
    lexeme: String,
    line: i32,
}

impl Token {
    pub fn new(token_type: TokenType, lexeme: String, line: i32) -> Token {
        Token { token_type, lexeme, line }
    }

    pub fn token_type(&self) -> TokenType { self.token_type }
    pub fn lexeme(&self) -> &str { &self.lexeme }
    pub fn line(&self) -> i32 { self.line }
}

impl TokenType {
    /// Name used in token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Int => "T_INT",
            TokenType::String => "T_STRING",
            TokenType::Set => "T_SET",
            TokenType::Print => "T_PRINT",
            TokenType::Println => "T_PRINTLN",
            TokenType::Identifier => "T_ID",
            TokenType::IntConstant => "T_ICONST",
            TokenType::StringConstant => "T_SCONST",
            TokenType::Plus => "T_PLUS",
            TokenType::Minus => "T_MINUS",
            TokenType::Multiply => "T_STAR",
            TokenType::Divide => "T_SLASH",
            TokenType::ParenthesisLeft => "T_LPAREN",
            TokenType::ParenthesisRight => "T_RPAREN",
            TokenType::Semicolon => "T_SC",
            TokenType::Error => "T_ERROR",
            TokenType::Done => "T_DONE",
        }
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.token_type {
            TokenType::Identifier | TokenType::IntConstant
            | TokenType::StringConstant | TokenType::Error => write!(f, "{}({})", self.token_type, self.lexeme),
            _ => write!(f, "{}", self.token_type),
        }
    }
}

/// Hand-written scanner with a single character of lookahead.
///
/// Every call to [`Lexer::scan_token`] consumes exactly one token plus the
/// whitespace and `//` comments in front of it. Newlines are counted
/// wherever they are consumed, including inside comments and broken strings.
pub struct Lexer<'source> {
    chars: Chars<'source>,
    peeked: Option<char>,

    line: i32,
    finished: bool,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Lexer<'source> {
        Lexer {
            chars: source.chars(),
            peeked: None,

            line: 1,
            finished: false,
        }
    }

    pub fn scan_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            let line = self.line;

            let c = match self.consume() {
                Some(c) => c,
                None => return Token::new(TokenType::Done, String::new(), line),
            };

            return match c {
                '+' => Self::single(TokenType::Plus, c, line),
                '-' => Self::single(TokenType::Minus, c, line),
                '*' => Self::single(TokenType::Multiply, c, line),
                '(' => Self::single(TokenType::ParenthesisLeft, c, line),
                ')' => Self::single(TokenType::ParenthesisRight, c, line),
                ';' => Self::single(TokenType::Semicolon, c, line),

                '/' => if self.expect('/') {
                    self.skip_line();
                    continue;
                } else {
                    Self::single(TokenType::Divide, c, line)
                },

                '"' => self.scan_string(line),
                c if util::is_numeric(c) => self.scan_number(c, line),
                c if util::is_alphabetic(c) => self.scan_identifier(c, line),

                _ => Self::single(TokenType::Error, c, line),
            };
        }
    }

    fn scan_string(&mut self, line: i32) -> Token {
        let mut lexeme = String::from('"');

        loop {
            match self.consume() {
                None => return Token::new(TokenType::Error, lexeme, line),
                // Unterminated string, the newline ends the error lexeme
                Some('\n') => {
                    lexeme.push('\n');
                    return Token::new(TokenType::Error, lexeme, line);
                },
                Some(c) => {
                    lexeme.push(c);

                    if c == '"' {
                        return Token::new(TokenType::StringConstant, lexeme, line);
                    }
                },
            }
        }
    }

    fn scan_number(&mut self, first: char, line: i32) -> Token {
        let mut lexeme = String::from(first);

        while let Some(c) = self.peek() {
            if !util::is_numeric(c) {
                break;
            }

            lexeme.push(c);
            self.consume();
        }

        match self.peek() {
            // A letter right after the digits ends the token as an error;
            // `3ab` is `3a` followed by `b`
            Some(c) if util::is_alphabetic(c) => {
                lexeme.push(c);
                self.consume();

                Token::new(TokenType::Error, lexeme, line)
            },
            _ => Token::new(TokenType::IntConstant, lexeme, line),
        }
    }

    fn scan_identifier(&mut self, first: char, line: i32) -> Token {
        let mut lexeme = String::from(first);

        while let Some(c) = self.peek() {
            if !util::is_alphanumeric(c) {
                break;
            }

            lexeme.push(c);
            self.consume();
        }

        let token_type = KEYWORDS.get(lexeme.as_str()).copied().unwrap_or(TokenType::Identifier);
        Token::new(token_type, lexeme, line)
    }

    fn single(token_type: TokenType, c: char, line: i32) -> Token {
        Token::new(token_type, String::from(c), line)
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.peeked.take().or_else(|| self.chars.next())?;

        if c == '\n' {
            self.line += 1;
        }

        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        if self.peeked.is_none() {
            self.peeked = self.chars.next();
        }

        self.peeked
    }

    fn expect(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.consume();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !util::is_whitespace(c) {
                return;
            }

            self.consume();
        }
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.consume() {
            if c == '\n' {
                return;
            }
        }
    }
}

/// Yields every token up to and including the end marker.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.scan_token();

        if token.token_type() == TokenType::Done {
            self.finished = true;
        }

        Some(token)
    }
}
