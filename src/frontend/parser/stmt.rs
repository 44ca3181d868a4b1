use super::Parser;
use crate::ast::Statement;
use crate::error::SyntaxError;
use crate::frontend::lexer::Token;

impl<'a> Parser<'a> {
    fn parse_assign_statement(&mut self) -> Result<Statement, SyntaxError> {
        if !self.check(Token::Ident) {
            return Err(self.unexpected());
        }
        let name = self.slice().to_string();
        self.advance();

        self.expect(Token::Eq)?;
        let value = self.parse_expression(0)?;
        self.expect(Token::Semicolon)?;

        Ok(Statement::Assign { name, value })
    }

    fn parse_print_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(Token::Print)?;
        self.expect(Token::LParen)?;
        let expr = self.parse_expression(0)?;
        self.expect(Token::RParen)?;
        self.expect(Token::Semicolon)?;
        Ok(Statement::Print(expr))
    }

    pub fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        match self.peek() {
            Some(Token::Ident) => self.parse_assign_statement(),
            Some(Token::Print) => self.parse_print_statement(),
            _ => Err(self.unexpected()),
        }
    }
}
