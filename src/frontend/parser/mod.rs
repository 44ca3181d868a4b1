mod expr;
mod stmt;

use super::lexer::{Token, EOF, ILLEGAL};
use crate::ast::{BinaryOp, Program, UnaryOp};
use crate::error::SyntaxError;
use logos::Logos;
use tracing::debug;

pub struct Parser<'a> {
    lexer: logos::Lexer<'a, Token>,
    current: Option<Result<Token, ()>>,
    current_slice: String,
    current_offset: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Token::lexer(source);
        let current = lexer.next();
        let (current_slice, current_offset) = Self::position(&lexer, current.is_some());

        Parser {
            lexer,
            current,
            current_slice,
            current_offset,
        }
    }

    fn position(lexer: &logos::Lexer<'a, Token>, has_token: bool) -> (String, usize) {
        if has_token {
            (lexer.slice().to_string(), lexer.span().start)
        } else {
            (String::new(), lexer.source().len())
        }
    }

    /// Current token, or `None` at end of input or on input the lexer
    /// could not match.
    pub fn peek(&self) -> Option<Token> {
        self.current.and_then(|r| r.ok())
    }

    pub fn slice(&self) -> &str {
        &self.current_slice
    }

    pub fn advance(&mut self) -> Option<Token> {
        let token = self.current.take().and_then(|r| r.ok());
        self.current = self.lexer.next();
        let (slice, offset) = Self::position(&self.lexer, self.current.is_some());
        self.current_slice = slice;
        self.current_offset = offset;
        token
    }

    pub fn check(&self, expected: Token) -> bool {
        self.peek() == Some(expected)
    }

    pub fn expect(&mut self, expected: Token) -> Result<Token, SyntaxError> {
        if self.check(expected) {
            self.advance();
            Ok(expected)
        } else {
            Err(self.unexpected())
        }
    }

    pub fn at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Syntax error pointing at the current token.
    pub fn unexpected(&self) -> SyntaxError {
        let token = match self.current {
            None => EOF,
            Some(Err(())) => ILLEGAL,
            Some(Ok(token)) => token.name(),
        };
        SyntaxError {
            token,
            offset: self.current_offset,
            slice: self.current_slice.clone(),
        }
    }

    pub fn parse_program(&mut self) -> Result<Program, SyntaxError> {
        debug!("parsing program");
        let mut stmts = Vec::new();
        while !self.at_end() {
            stmts.push(self.parse_statement()?);
        }
        debug!(statements = stmts.len(), "parsed program");
        Ok(Program { statements: stmts })
    }

    /// Binary operators from loosest to tightest. All are left-associative,
    /// so the right binding power is one above the left.
    pub fn infix_binding_power(op: Token) -> Option<(u8, u8)> {
        match op {
            Token::Bar => Some((1, 2)),
            Token::Caret => Some((3, 4)),
            Token::Amp => Some((5, 6)),
            Token::LtLt | Token::GtGt => Some((7, 8)),
            Token::Plus | Token::Minus => Some((9, 10)),
            Token::Star | Token::Slash | Token::Percent => Some((11, 12)),
            _ => None,
        }
    }

    /// Unary minus sits above every binary operator; `~` sits above
    /// unary minus.
    pub fn prefix_binding_power(op: Token) -> Option<u8> {
        match op {
            Token::Minus => Some(13),
            Token::Tilde => Some(15),
            _ => None,
        }
    }

    fn token_to_binary_op(token: Token) -> Option<BinaryOp> {
        match token {
            Token::Bar => Some(BinaryOp::BitwiseOr),
            Token::Caret => Some(BinaryOp::Xor),
            Token::Amp => Some(BinaryOp::BitwiseAnd),
            Token::LtLt => Some(BinaryOp::Sll),
            Token::GtGt => Some(BinaryOp::Sra),
            Token::Plus => Some(BinaryOp::Plus),
            Token::Minus => Some(BinaryOp::Minus),
            Token::Star => Some(BinaryOp::Multiply),
            Token::Slash => Some(BinaryOp::Divide),
            Token::Percent => Some(BinaryOp::Modulo),
            _ => None,
        }
    }

    fn token_to_unary_op(token: Token) -> Option<UnaryOp> {
        match token {
            Token::Minus => Some(UnaryOp::Minus),
            Token::Tilde => Some(UnaryOp::Complement),
            _ => None,
        }
    }
}
