//! Recursive-descent parser for the formula grammar.
//!
//! Lowest to highest precedence, associativity as noted:
//!
//! ```text
//! formula  → iff
//! iff      → implies ( IFF implies )*        left-associative
//! implies  → or ( IMPLIES or )*              right-associative
//! or       → and ( OR and )*                 left-associative
//! and      → unary ( AND unary )*            left-associative
//! unary    → NOT unary | primary
//! primary  → VAR | BOTTOM | LPAREN formula RPAREN
//! ```
//!
//! LL(1): every alternative is decided by the current token, never by
//! backtracking.

use crate::ast::Formula;
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::lexer::tokenize;
use crate::token::{Token, TokenKind};

/// Parse a formula from its surface syntax, ASCII or UTF-8 or a mix.
pub fn parse(input: &str) -> ParseResult<Formula> {
    Parser::new(tokenize(input)).parse_formula()
}

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
}

impl Parser {
    /// The token vector must end with EOF, as produced by [`tokenize`].
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(matches!(
            tokens.last().map(|t| t.kind),
            Some(TokenKind::Eof)
        ));
        Parser {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parse one complete formula; trailing input is an error.
    pub fn parse_formula(&mut self) -> ParseResult<Formula> {
        if self.check(TokenKind::Eof) {
            return Err(self.error_here(ParseErrorKind::EmptyInput));
        }
        let formula = self.iff()?;
        if !self.check(TokenKind::Eof) {
            return Err(self.error_here(ParseErrorKind::UnexpectedToken {
                found: self.peek().describe(),
            }));
        }
        Ok(formula)
    }

    fn iff(&mut self) -> ParseResult<Formula> {
        let mut left = self.implies()?;
        while self.check(TokenKind::Iff) {
            self.advance();
            let right = self.implies()?;
            left = Formula::iff(left, right);
        }
        Ok(left)
    }

    fn implies(&mut self) -> ParseResult<Formula> {
        let left = self.or()?;
        if self.check(TokenKind::Implies) {
            self.advance();
            self.enter()?;
            let right = self.implies()?;
            self.exit();
            return Ok(Formula::implies(left, right));
        }
        Ok(left)
    }

    fn or(&mut self) -> ParseResult<Formula> {
        let mut left = self.and()?;
        while self.check(TokenKind::Or) {
            self.advance();
            let right = self.and()?;
            left = Formula::or(left, right);
        }
        Ok(left)
    }

    fn and(&mut self) -> ParseResult<Formula> {
        let mut left = self.unary()?;
        while self.check(TokenKind::And) {
            self.advance();
            let right = self.unary()?;
            left = Formula::and(left, right);
        }
        Ok(left)
    }

    fn unary(&mut self) -> ParseResult<Formula> {
        if self.check(TokenKind::Not) {
            self.advance();
            self.enter()?;
            let operand = self.unary()?;
            self.exit();
            return Ok(Formula::not(operand));
        }
        self.primary()
    }

    fn primary(&mut self) -> ParseResult<Formula> {
        match self.peek().kind {
            TokenKind::Var => {
                let token = self.peek();
                // The lexer passes unrecognized characters through as Var
                // tokens; only real identifiers are formulas.
                if !token.text.starts_with(|c: char| c.is_ascii_alphabetic()) {
                    return Err(self.error_here(ParseErrorKind::ExpectedFormula {
                        found: token.describe(),
                    }));
                }
                let name = token.text.clone();
                self.advance();
                Ok(Formula::Var(name))
            }
            TokenKind::Bottom => {
                self.advance();
                Ok(Formula::Bottom)
            }
            TokenKind::LParen => {
                self.advance();
                self.enter()?;
                let inner = self.iff()?;
                if !self.check(TokenKind::RParen) {
                    return Err(self.error_here(ParseErrorKind::ExpectedClosingParen {
                        found: self.peek().describe(),
                    }));
                }
                self.advance();
                self.exit();
                Ok(inner)
            }
            _ => Err(self.error_here(ParseErrorKind::ExpectedFormula {
                found: self.peek().describe(),
            })),
        }
    }

    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > crate::MAX_PARSE_DEPTH {
            return Err(self.error_here(ParseErrorKind::TooDeep));
        }
        Ok(())
    }

    fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        if !self.check(TokenKind::Eof) {
            self.current += 1;
        }
        self.previous()
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.peek().span)
    }
}
