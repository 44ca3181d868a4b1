use std::fmt;

use super::ast::{BinaryOp, Expr, Program, Statement, UnaryOp};
use crate::stack::ensure_sufficient_stack;

// S-expression rendering, used by `--dump-ast`.

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Var(name) => write!(f, "(var {})", name),
            Expr::Num(value) => write!(f, "(num {})", value),
            Expr::Binary { left, op, right } => write!(f, "(binop {} {} {})", op, left, right),
            Expr::Unary { op, expr } => write!(f, "(unop {} {})", op, expr),
        })
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign { name, value } => write!(f, "(assign {} {})", name, value),
            Statement::Print(expr) => write!(f, "(print {})", expr),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
