/**
 * Expression Lexer
 *
 * Tokenizes template expressions into tokens for parsing. The lexer is
 * total: malformed input produces Error tokens carrying a short message,
 * which the parser surfaces as a positioned diagnostic when it reaches them.
 */
use serde::{Deserialize, Serialize};

use crate::chars;

/// Token types in template expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TokenType {
    Character = 0,
    Identifier = 1,
    Keyword = 2,
    String = 3,
    Operator = 4,
    Number = 5,
    Error = 6,
}

/// Token representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub index: usize,
    pub end: usize,
    pub token_type: TokenType,
    pub num_value: f64,
    pub str_value: String,
}

impl Token {
    pub fn new(
        index: usize,
        end: usize,
        token_type: TokenType,
        num_value: f64,
        str_value: String,
    ) -> Self {
        Token {
            index,
            end,
            token_type,
            num_value,
            str_value,
        }
    }

    pub fn is_character(&self, code: char) -> bool {
        self.token_type == TokenType::Character && self.str_value.chars().next() == Some(code)
    }

    pub fn is_number(&self) -> bool {
        self.token_type == TokenType::Number
    }

    pub fn is_string(&self) -> bool {
        self.token_type == TokenType::String
    }

    pub fn is_identifier(&self) -> bool {
        self.token_type == TokenType::Identifier
    }

    pub fn is_keyword(&self) -> bool {
        self.token_type == TokenType::Keyword
    }

    pub fn is_operator(&self, operator: &str) -> bool {
        self.token_type == TokenType::Operator && self.str_value == operator
    }

    pub fn is_keyword_var(&self) -> bool {
        self.token_type == TokenType::Keyword && self.str_value == "var"
    }

    pub fn is_keyword_null(&self) -> bool {
        self.token_type == TokenType::Keyword && self.str_value == "null"
    }

    pub fn is_keyword_undefined(&self) -> bool {
        self.token_type == TokenType::Keyword && self.str_value == "undefined"
    }

    pub fn is_keyword_true(&self) -> bool {
        self.token_type == TokenType::Keyword && self.str_value == "true"
    }

    pub fn is_keyword_false(&self) -> bool {
        self.token_type == TokenType::Keyword && self.str_value == "false"
    }

    pub fn is_keyword_if(&self) -> bool {
        self.token_type == TokenType::Keyword && self.str_value == "if"
    }

    pub fn is_keyword_else(&self) -> bool {
        self.token_type == TokenType::Keyword && self.str_value == "else"
    }

    pub fn is_error(&self) -> bool {
        self.token_type == TokenType::Error
    }

    pub fn to_number(&self) -> f64 {
        if self.token_type == TokenType::Number {
            self.num_value
        } else {
            -1.0
        }
    }

    pub fn to_string(&self) -> Option<String> {
        match self.token_type {
            TokenType::Character
            | TokenType::Identifier
            | TokenType::Keyword
            | TokenType::Operator
            | TokenType::String
            | TokenType::Error => Some(self.str_value.clone()),
            TokenType::Number => Some(self.num_value.to_string()),
        }
    }
}

/// EOF token constant
pub static EOF: Token = Token {
    index: usize::MAX,
    end: usize::MAX,
    token_type: TokenType::Character,
    num_value: 0.0,
    str_value: String::new(),
};

pub fn new_character_token(index: usize, end: usize, code: char) -> Token {
    Token::new(
        index,
        end,
        TokenType::Character,
        code as u32 as f64,
        code.to_string(),
    )
}

pub fn new_identifier_token(index: usize, end: usize, text: String) -> Token {
    Token::new(index, end, TokenType::Identifier, 0.0, text)
}

pub fn new_keyword_token(index: usize, end: usize, text: String) -> Token {
    Token::new(index, end, TokenType::Keyword, 0.0, text)
}

pub fn new_operator_token(index: usize, end: usize, text: String) -> Token {
    Token::new(index, end, TokenType::Operator, 0.0, text)
}

pub fn new_string_token(index: usize, end: usize, text: String) -> Token {
    Token::new(index, end, TokenType::String, 0.0, text)
}

pub fn new_number_token(index: usize, end: usize, n: f64) -> Token {
    Token::new(index, end, TokenType::Number, n, String::new())
}

pub fn new_error_token(index: usize, end: usize, message: String) -> Token {
    Token::new(index, end, TokenType::Error, 0.0, message)
}

/// Template expression lexer
pub struct Lexer;

impl Lexer {
    pub fn new() -> Self {
        Lexer
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        Scanner::new(text).scan()
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

/// Scanner for tokenizing input
struct Scanner {
    input: String,
    length: usize,
    index: usize,
    peek: char,
}

// Reserved words of the expression language
const KEYWORDS: &[&str] = &["var", "null", "undefined", "true", "false", "if", "else"];

impl Scanner {
    fn new(input: &str) -> Self {
        let peek = input.chars().next().unwrap_or(chars::EOF);
        Scanner {
            input: input.to_string(),
            length: input.len(),
            index: 0,
            peek,
        }
    }

    fn scan(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.scan_token() {
            tokens.push(token);
        }
        tokens
    }

    fn advance(&mut self) {
        self.index += self.peek.len_utf8();
        self.peek = if self.index < self.length {
            self.input[self.index..].chars().next().unwrap_or(chars::EOF)
        } else {
            chars::EOF
        };
    }

    fn error(&self, message: String, index: usize) -> Token {
        new_error_token(index, index, message)
    }

    fn scan_token(&mut self) -> Option<Token> {
        while self.index < self.length && chars::is_whitespace(self.peek) {
            self.advance();
        }

        if self.index >= self.length {
            return None;
        }

        let start = self.index;
        let ch = self.peek;

        if chars::is_identifier_start(ch) {
            return Some(self.scan_identifier());
        }

        if chars::is_digit(ch) {
            return Some(self.scan_number(start));
        }

        match ch {
            chars::PERIOD => {
                self.advance();
                if chars::is_digit(self.peek) {
                    return Some(self.scan_number(start));
                }
                Some(new_character_token(start, self.index, chars::PERIOD))
            }
            chars::LPAREN
            | chars::RPAREN
            | chars::LBRACE
            | chars::RBRACE
            | chars::LBRACKET
            | chars::RBRACKET
            | chars::COMMA
            | chars::COLON
            | chars::SEMICOLON => Some(self.scan_character(start, ch)),
            chars::SQ | chars::DQ => Some(self.scan_string(ch)),
            chars::HASH
            | chars::PLUS
            | chars::MINUS
            | chars::STAR
            | chars::SLASH
            | chars::PERCENT
            | chars::CARET => Some(self.scan_operator(start, ch)),
            chars::QUESTION => {
                self.advance();
                if self.peek == chars::PERIOD {
                    self.advance();
                    return Some(new_operator_token(start, self.index, "?.".to_string()));
                }
                Some(new_operator_token(start, self.index, "?".to_string()))
            }
            chars::LT => Some(self.scan_complex_operator(start, "<", chars::EQ, "=")),
            chars::GT => Some(self.scan_complex_operator(start, ">", chars::EQ, "=")),
            chars::BANG => Some(self.scan_comparison_operator(start, "!")),
            chars::EQ => Some(self.scan_comparison_operator(start, "=")),
            chars::AMPERSAND => Some(self.scan_complex_operator(start, "&", chars::AMPERSAND, "&")),
            chars::BAR => Some(self.scan_complex_operator(start, "|", chars::BAR, "|")),
            _ => {
                self.advance();
                Some(self.error(format!("Unexpected character [{}]", ch), start))
            }
        }
    }

    fn scan_character(&mut self, start: usize, ch: char) -> Token {
        self.advance();
        new_character_token(start, self.index, ch)
    }

    fn scan_operator(&mut self, start: usize, ch: char) -> Token {
        self.advance();
        new_operator_token(start, self.index, ch.to_string())
    }

    /// Scans `op1`, extended to `op1 + suffix` when the next character is
    /// `two` (e.g. `<` and `<=`, `&` and `&&`).
    fn scan_complex_operator(&mut self, start: usize, op1: &str, two: char, suffix: &str) -> Token {
        self.advance();
        if self.peek == two {
            self.advance();
            return new_operator_token(start, self.index, format!("{}{}", op1, suffix));
        }
        new_operator_token(start, self.index, op1.to_string())
    }

    /// Scans `!`/`=` families: `=`, `==`, `===`, `!`, `!=`, `!==`.
    fn scan_comparison_operator(&mut self, start: usize, op: &str) -> Token {
        self.advance();
        if self.peek == chars::EQ {
            self.advance();
            if self.peek == chars::EQ {
                self.advance();
                return new_operator_token(start, self.index, format!("{}==", op));
            }
            return new_operator_token(start, self.index, format!("{}=", op));
        }
        new_operator_token(start, self.index, op.to_string())
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.index;
        self.advance();

        while self.index < self.length && chars::is_identifier_part(self.peek) {
            self.advance();
        }

        let str_value = self.input[start..self.index].to_string();
        if KEYWORDS.contains(&str_value.as_str()) {
            new_keyword_token(start, self.index, str_value)
        } else {
            new_identifier_token(start, self.index, str_value)
        }
    }

    fn scan_number(&mut self, start: usize) -> Token {
        self.advance();

        loop {
            if chars::is_digit(self.peek) || self.peek == chars::PERIOD {
                // consumed below
            } else if chars::is_exponent_start(self.peek) {
                self.advance();
                if chars::is_exponent_sign(self.peek) {
                    self.advance();
                }
                if !chars::is_digit(self.peek) {
                    return self.error("Invalid exponent".to_string(), self.index - 1);
                }
            } else {
                break;
            }
            self.advance();
        }

        let str_value = &self.input[start..self.index];
        let num_value = str_value.parse::<f64>().unwrap_or(f64::NAN);
        new_number_token(start, self.index, num_value)
    }

    fn scan_string(&mut self, quote: char) -> Token {
        let start = self.index;
        self.advance(); // Skip opening quote

        let mut buffer = String::new();

        loop {
            if self.index >= self.length {
                return self.error("Unterminated quote".to_string(), self.index);
            }
            let ch = self.peek;

            if ch == quote {
                self.advance(); // Skip closing quote
                return new_string_token(start, self.index, buffer);
            }

            if ch == chars::BACKSLASH {
                self.advance();
                if self.index >= self.length {
                    return self.error("Unterminated quote".to_string(), self.index);
                }
                match self.peek {
                    'u' => {
                        self.advance();
                        let mut hex = String::new();
                        while hex.len() < 4 && self.index < self.length {
                            hex.push(self.peek);
                            self.advance();
                        }
                        let code = if hex.len() == 4 {
                            u32::from_str_radix(&hex, 16).ok()
                        } else {
                            None
                        };
                        match code.and_then(std::char::from_u32) {
                            Some(c) => buffer.push(c),
                            None => {
                                return self.error(
                                    format!("Invalid unicode escape [\\u{}]", hex),
                                    start,
                                );
                            }
                        }
                    }
                    escaped => {
                        buffer.push(match escaped {
                            'n' => chars::LF,
                            'f' => chars::FF,
                            'r' => chars::CR,
                            't' => chars::TAB,
                            'v' => chars::VTAB,
                            'b' => '\x08',
                            _ => escaped,
                        });
                        self.advance();
                    }
                }
            } else {
                buffer.push(ch);
                self.advance();
            }
        }
    }
}
