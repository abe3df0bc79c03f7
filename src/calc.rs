//! A small arithmetic engine for running the shell standalone.
//!
//! This is the one bundled [`Engine`] implementation: enough of an evaluator
//! that the binary does something useful without a full language behind it.
//! A line holds one or more `;`-separated statements; each statement is an
//! integer expression over `+ - * /`, unary sign, and parentheses; the
//! outcome lists every statement's value in order.

use crate::engine::{Engine, Evaluation};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid Syntax: {0}")]
    Syntax(String),
    #[error("Runtime Error: division by zero")]
    DivisionByZero,
}

#[derive(Debug, Default)]
pub struct CalcEngine;

impl CalcEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for CalcEngine {
    type Value = i64;
    type Error = CalcError;

    fn evaluate(&mut self, _source: &str, text: &str) -> Evaluation<i64, CalcError> {
        let mut values = Vec::new();
        for statement in text.split(';') {
            if statement.trim().is_empty() {
                continue;
            }
            match eval_statement(statement) {
                Ok(value) => values.push(value),
                Err(error) => return Evaluation::failure(error),
            }
        }
        Evaluation::success(values.into())
    }
}

fn eval_statement(text: &str) -> Result<i64, CalcError> {
    let mut parser = Parser::new(text);
    let value = parser.expression()?;
    parser.skip_whitespace();
    match parser.peek() {
        Some(c) => Err(CalcError::Syntax(format!("unexpected character '{}'", c))),
        None => Ok(value),
    }
}

/// Recursive-descent evaluator over the statement's characters.
struct Parser {
    position: usize,
    chars: Vec<char>,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            position: 0,
            chars: input.chars().collect(),
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Advance to the next character and return the current one
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.position += 1;
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.position += 1;
        }
    }

    /// expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<i64, CalcError> {
        let mut value = self.term()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('+') => {
                    self.advance();
                    value += self.term()?;
                }
                Some('-') => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    /// term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<i64, CalcError> {
        let mut value = self.factor()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('*') => {
                    self.advance();
                    value *= self.factor()?;
                }
                Some('/') => {
                    self.advance();
                    let divisor = self.factor()?;
                    if divisor == 0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    /// factor := NUMBER | '(' expression ')' | ('+' | '-') factor
    fn factor(&mut self) -> Result<i64, CalcError> {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => {
                self.advance();
                let value = self.expression()?;
                self.skip_whitespace();
                match self.advance() {
                    Some(')') => Ok(value),
                    _ => Err(CalcError::Syntax("expected ')'".to_string())),
                }
            }
            Some('-') => {
                self.advance();
                Ok(-self.factor()?)
            }
            Some('+') => {
                self.advance();
                self.factor()
            }
            Some(c) if c.is_ascii_digit() => self.number(),
            Some(c) => Err(CalcError::Syntax(format!("unexpected character '{}'", c))),
            None => Err(CalcError::Syntax("unexpected end of input".to_string())),
        }
    }

    fn number(&mut self) -> Result<i64, CalcError> {
        let mut digits = String::new();
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            digits.push(self.advance().unwrap());
        }
        digits
            .parse()
            .map_err(|_| CalcError::Syntax(format!("number out of range: {}", digits)))
    }
}
