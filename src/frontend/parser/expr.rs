use super::Parser;
use crate::ast::Expr;
use crate::error::SyntaxError;
use crate::frontend::lexer::Token;
use crate::stack::ensure_sufficient_stack;

/// Decimal digits reduced modulo 2^64 and read back as two's complement, so
/// an out-of-range literal wraps the same way an operation result does.
fn parse_number(digits: &str) -> i64 {
    let value = digits
        .bytes()
        .fold(0u64, |acc, d| acc.wrapping_mul(10).wrapping_add(u64::from(d - b'0')));
    value as i64
}

impl<'a> Parser<'a> {
    pub fn parse_expression(&mut self, min_bp: u8) -> Result<Expr, SyntaxError> {
        ensure_sufficient_stack(|| self.parse_expression_inner(min_bp))
    }

    fn parse_expression_inner(&mut self, min_bp: u8) -> Result<Expr, SyntaxError> {
        let mut left = match self.peek() {
            Some(Token::Number) => {
                let value = parse_number(self.slice());
                self.advance();
                Expr::Num(value)
            }
            Some(Token::Ident) => {
                let name = self.slice().to_string();
                self.advance();
                Expr::Var(name)
            }
            Some(Token::LParen) => {
                self.advance();
                let expr = self.parse_expression(0)?;
                self.expect(Token::RParen)?;
                expr
            }
            Some(token) => match (
                Self::token_to_unary_op(token),
                Self::prefix_binding_power(token),
            ) {
                (Some(op), Some(rbp)) => {
                    self.advance();
                    let operand = self.parse_expression(rbp)?;
                    Expr::unary(op, operand)
                }
                _ => return Err(self.unexpected()),
            },
            None => return Err(self.unexpected()),
        };

        while let Some(op) = self.peek() {
            let (l_bp, r_bp) = match Self::infix_binding_power(op) {
                Some(bp) => bp,
                None => break,
            };
            if l_bp < min_bp {
                break;
            }
            let infix = match Self::token_to_binary_op(op) {
                Some(infix) => infix,
                None => break,
            };

            self.advance();
            let right = self.parse_expression(r_bp)?;
            left = Expr::binary(left, infix, right);
        }

        Ok(left)
    }
}
