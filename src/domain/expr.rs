//! Numeric expression evaluation for scale columns.
//!
//! Scale factors are often written as the ratio that produced them (`1/3`, `2.5e-3*4`)
//! rather than a rounded decimal. The evaluator accepts:
//!
//! - decimal literals with optional fraction and exponent (`12`, `.5`, `1.2e-3`)
//! - binary `+`, `-` (lowest precedence) and `*`, `/`, all left associative
//! - unary `+` and `-`
//! - parentheses
//!
//! Parsing uses precedence climbing; evaluation happens while parsing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected '{found}' at offset {offset} in expression '{input}'")]
    Unexpected { input: String, offset: usize, found: char },

    #[error("unexpected end of expression '{0}'")]
    UnexpectedEnd(String),

    #[error("invalid number '{literal}' in expression '{input}'")]
    InvalidLiteral { input: String, literal: String },

    #[error("division by zero in expression '{0}'")]
    DivisionByZero(String),

    #[error("expression '{0}' does not evaluate to a finite number")]
    NotFinite(String),
}

/// Evaluate an arithmetic expression to a float.
pub fn evaluate(input: &str) -> Result<f64, ExprError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ExprError::Empty);
    }

    let mut parser = Parser { input: trimmed, pos: 0 };
    let value = parser.parse_binary(0)?;
    parser.skip_whitespace();
    if let Some(c) = parser.peek() {
        return Err(parser.unexpected(c));
    }
    if !value.is_finite() {
        return Err(ExprError::NotFinite(trimmed.to_string()));
    }

    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn unexpected(&self, found: char) -> ExprError {
        ExprError::Unexpected { input: self.input.to_string(), offset: self.pos, found }
    }

    /// Binding power of a binary operator, if `c` is one.
    fn binding_power(c: char) -> Option<u8> {
        match c {
            '+' | '-' => Some(1),
            '*' | '/' => Some(2),
            _ => None,
        }
    }

    fn parse_binary(&mut self, min_power: u8) -> Result<f64, ExprError> {
        let mut lhs = self.parse_unary()?;

        loop {
            self.skip_whitespace();
            let Some(op) = self.peek() else { break };
            let Some(power) = Self::binding_power(op) else { break };
            if power <= min_power {
                break;
            }
            self.pos += op.len_utf8();

            let rhs = self.parse_binary(power)?;
            lhs = match op {
                '+' => lhs + rhs,
                '-' => lhs - rhs,
                '*' => lhs * rhs,
                _ => {
                    if rhs == 0.0 {
                        return Err(ExprError::DivisionByZero(self.input.to_string()));
                    }
                    lhs / rhs
                }
            };
        }

        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<f64, ExprError> {
        self.skip_whitespace();
        match self.peek() {
            Some('-') => {
                self.pos += 1;
                Ok(-self.parse_unary()?)
            }
            Some('+') => {
                self.pos += 1;
                self.parse_unary()
            }
            _ => self.parse_atom(),
        }
    }

    fn parse_atom(&mut self) -> Result<f64, ExprError> {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => {
                self.pos += 1;
                let value = self.parse_binary(0)?;
                self.skip_whitespace();
                match self.peek() {
                    Some(')') => {
                        self.pos += 1;
                        Ok(value)
                    }
                    Some(c) => Err(self.unexpected(c)),
                    None => Err(ExprError::UnexpectedEnd(self.input.to_string())),
                }
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.parse_literal(),
            Some(c) => Err(self.unexpected(c)),
            None => Err(ExprError::UnexpectedEnd(self.input.to_string())),
        }
    }

    fn parse_literal(&mut self) -> Result<f64, ExprError> {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        let mut end = start;

        while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
            end += 1;
        }
        if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
            let mut exp = end + 1;
            if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
                exp += 1;
            }
            if exp < bytes.len() && bytes[exp].is_ascii_digit() {
                while exp < bytes.len() && bytes[exp].is_ascii_digit() {
                    exp += 1;
                }
                end = exp;
            }
        }

        let literal = &self.input[start..end];
        self.pos = end;
        literal.parse::<f64>().map_err(|_| ExprError::InvalidLiteral {
            input: self.input.to_string(),
            literal: literal.to_string(),
        })
    }
}
