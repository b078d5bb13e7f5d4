//! Scanner implementation for the Lox language
//!
//! This module implements lexical analysis, converting source code into tokens
//! in a single left-to-right pass with at most one character of lookahead.

use crate::error::ErrorReporter;
use super::token::{Literal, Token, TokenType};

/// Scanner for Lox source code
///
/// Lexical errors are non-fatal: they go to the injected [`ErrorReporter`]
/// and the scan continues at the next unconsumed character.
pub struct Scanner<'r> {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    reporter: &'r mut dyn ErrorReporter,
}

impl<'r> Scanner<'r> {
    /// Create a new scanner
    pub fn new(source: &str, reporter: &'r mut dyn ErrorReporter) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            reporter,
        }
    }

    /// Tokenize the source code
    ///
    /// Always consumes the whole input and always returns a sequence ending
    /// with a single EOF token.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens
            .push(Token::new(TokenType::Eof, String::new(), None, self.line));

        self.tokens
    }

    /// Scan a single lexeme
    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            // Whitespace (skip)
            ' ' | '\r' | '\t' => {}

            // Newline
            '\n' => self.line += 1,

            // Single-character tokens
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),

            // One or two character tokens
            '!' => {
                if self.match_char('=') {
                    self.add_token(TokenType::BangEqual)
                } else {
                    self.add_token(TokenType::Bang)
                }
            }

            '=' => {
                if self.match_char('=') {
                    self.add_token(TokenType::EqualEqual)
                } else {
                    self.add_token(TokenType::Equal)
                }
            }

            '<' => {
                if self.match_char('=') {
                    self.add_token(TokenType::LessEqual)
                } else {
                    self.add_token(TokenType::Less)
                }
            }

            '>' => {
                if self.match_char('=') {
                    self.add_token(TokenType::GreaterEqual)
                } else {
                    self.add_token(TokenType::Greater)
                }
            }

            // Comments
            '/' => {
                if self.match_char('/') {
                    // Single-line comment: skip until end of line
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenType::Slash)
                }
            }

            // String literals
            '"' => self.scan_string(),

            // Number literals
            c if c.is_ascii_digit() => self.scan_number(),

            // Identifiers and keywords
            c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier(),

            // Unexpected character
            _ => {
                self.reporter
                    .report(self.line, &format!("Unexpected character '{}'", c));
            }
        }
    }

    /// Scan a string literal
    ///
    /// Strings may span lines; the emitted token carries the line of the
    /// opening quote. Backslash has no special meaning.
    fn scan_string(&mut self) {
        let opening_line = self.line;

        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.reporter.report(opening_line, "Unterminated string");
            return;
        }

        // Consume closing quote
        self.advance();

        // The literal is the body between the quotes; the lexeme keeps them.
        let value: String = self.source[self.start + 1..self.current - 1]
            .iter()
            .collect();
        self.push_token(TokenType::String, Some(Literal::String(value)), opening_line);
    }

    /// Scan a number literal
    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A fractional part needs a digit after the dot, so "1." stays
        // NUMBER followed by DOT.
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let lexeme: String = self.source[self.start..self.current].iter().collect();
        match lexeme.parse::<f64>() {
            Ok(value) => self.add_token_literal(TokenType::Number, Some(Literal::Number(value))),
            Err(_) => {
                self.reporter
                    .report(self.line, &format!("Invalid number literal '{}'", lexeme));
            }
        }
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self) {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.add_token(TokenType::for_identifier(&lexeme));
    }

    /// Add a token with no literal value
    fn add_token(&mut self, token_type: TokenType) {
        self.add_token_literal(token_type, None);
    }

    /// Add a token at the current line
    fn add_token_literal(&mut self, token_type: TokenType, literal: Option<Literal>) {
        self.push_token(token_type, literal, self.line);
    }

    /// Add a token spanning `start..current` at an explicit line
    fn push_token(&mut self, token_type: TokenType, literal: Option<Literal>, line: usize) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(token_type, lexeme, literal, line));
    }

    /// Advance to the next character
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    /// Check if the next character matches and consume it if so
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.current += 1;
            true
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    /// Peek at the next character without consuming it
    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    /// Check if we've reached the end of the source
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}
