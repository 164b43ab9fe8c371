//! Token stream model
//!
//! An [`Expression`] is an append-only sequence of [`Token`]s that normally
//! alternates operand, operator, operand, ... starting with an operand. The
//! type does not enforce the alternation; the evaluator tolerates streams
//! that break it.

use crate::core::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the token stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    /// Numeric operand
    Number(#[serde(with = "crate::core::number_serde")] f64),
    /// Binary operator
    Operator(Operation),
}

impl Token {
    /// Returns the operand value, if this token is one
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Operator(_) => None,
        }
    }

    /// Returns the operation, if this token is an operator
    #[must_use]
    pub const fn as_operator(&self) -> Option<Operation> {
        match self {
            Self::Operator(op) => Some(*op),
            Self::Number(_) => None,
        }
    }

    /// Returns true if this token is a number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns true if this token is an operator
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Operation> for Token {
    fn from(op: Operation) -> Self {
        Self::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Ordered, append-only token sequence for one calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Expression {
    /// Creates an empty expression
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Creates an expression from an existing token list
    #[must_use]
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Appends a token
    pub fn push(&mut self, token: impl Into<Token>) {
        self.tokens.push(token.into());
    }

    /// Appends an operand
    pub fn push_number(&mut self, value: f64) {
        self.tokens.push(Token::Number(value));
    }

    /// Appends an operator
    pub fn push_operator(&mut self, op: Operation) {
        self.tokens.push(Token::Operator(op));
    }

    /// Builder-style append
    #[must_use]
    pub fn with(mut self, token: impl Into<Token>) -> Self {
        self.push(token);
        self
    }

    /// Returns the tokens in entry order
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns an iterator over the tokens
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Returns the number of tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens have been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns true if the stream has odd length and strictly alternates
    /// operand/operator starting with an operand
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.tokens.len() % 2 == 1
            && self
                .tokens
                .iter()
                .enumerate()
                .all(|(i, t)| t.is_number() == (i % 2 == 0))
    }

    /// Drops every token
    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

impl From<Vec<Token>> for Expression {
    fn from(tokens: Vec<Token>) -> Self {
        Self::from_tokens(tokens)
    }
}

impl FromIterator<Token> for Expression {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Expression {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
