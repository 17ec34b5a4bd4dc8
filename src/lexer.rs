//! Scanner for the formula surface syntax.
//!
//! ASCII digraphs and UTF-8 symbols are interchangeable within one input:
//! `P /\ Q -> ¬R` lexes the same as `P ∧ Q → ~R`. The lexer itself never
//! fails; anything it does not recognize becomes a one-character `Var`
//! token and the parser reports it.

use crate::token::{Span, Token, TokenKind};

/// Multi-character lexemes, tried before any single-character match.
/// `<->` must precede `->` so the longer operator wins.
const DIGRAPHS: &[(&str, TokenKind)] = &[
    ("<->", TokenKind::Iff),
    ("->", TokenKind::Implies),
    ("/\\", TokenKind::And),
    ("\\/", TokenKind::Or),
    ("_|_", TokenKind::Bottom),
];

pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            pos: 0,
            finished: false,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.rest().chars().next() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Scan the next token. After the end of input this keeps returning EOF.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;
        if self.pos >= self.source.len() {
            return Token::new(TokenKind::Eof, "", Span::new(start, start));
        }

        for (lexeme, kind) in DIGRAPHS {
            if self.rest().starts_with(lexeme) {
                self.pos += lexeme.len();
                return Token::new(*kind, *lexeme, Span::new(start, self.pos));
            }
        }

        let c = self.rest().chars().next().unwrap();
        let single = match c {
            '¬' | '~' => Some(TokenKind::Not),
            '∧' | '&' => Some(TokenKind::And),
            '∨' | '|' => Some(TokenKind::Or),
            '→' => Some(TokenKind::Implies),
            '↔' => Some(TokenKind::Iff),
            '⊥' => Some(TokenKind::Bottom),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            _ => None,
        };
        if let Some(kind) = single {
            self.pos += c.len_utf8();
            return Token::new(kind, &self.source[start..self.pos], Span::new(start, self.pos));
        }

        if c.is_ascii_alphabetic() {
            self.pos += 1;
            while self
                .rest()
                .chars()
                .next()
                .map_or(false, |c| c.is_ascii_alphanumeric())
            {
                self.pos += 1;
            }
            return Token::new(
                TokenKind::Var,
                &self.source[start..self.pos],
                Span::new(start, self.pos),
            );
        }

        // Unrecognized character: emit it as a variable token and let the
        // parser complain with a position.
        self.pos += c.len_utf8();
        Token::new(
            TokenKind::Var,
            &self.source[start..self.pos],
            Span::new(start, self.pos),
        )
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

/// Scan the whole input, EOF token included.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}
