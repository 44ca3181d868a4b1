use std::io::Write;

use tracing::{debug, trace};

use super::environment::Environment;
use super::ops;
use crate::ast::{Expr, Program, Statement};
use crate::error::RuntimeError;
use crate::stack::ensure_sufficient_stack;

/// Executes programs against one environment, writing `print` output to `out`.
pub struct Interpreter<W: Write> {
    env: Environment,
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Interpreter {
            env: Environment::new(),
            out,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Left operand is evaluated fully before the right one, so the first
    /// fault in source order is the one reported.
    pub fn evaluate(&self, expr: &Expr) -> Result<i64, RuntimeError> {
        ensure_sufficient_stack(|| self.evaluate_inner(expr))
    }

    fn evaluate_inner(&self, expr: &Expr) -> Result<i64, RuntimeError> {
        match expr {
            Expr::Var(name) => self
                .env
                .lookup(name)
                .ok_or_else(|| RuntimeError::UndefinedVariable(name.clone())),
            Expr::Num(value) => Ok(*value),
            Expr::Binary { left, op, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                ops::apply_binary(*op, left, right)
            }
            Expr::Unary { op, expr } => {
                let value = self.evaluate(expr)?;
                Ok(ops::apply_unary(*op, value))
            }
        }
    }

    pub fn execute(&mut self, stmt: &Statement) -> Result<(), RuntimeError> {
        match stmt {
            Statement::Assign { name, value } => {
                let value = self.evaluate(value)?;
                trace!(%name, value, "bind");
                self.env.define(name.as_str(), value);
            }
            Statement::Print(expr) => {
                let value = self.evaluate(expr)?;
                writeln!(self.out, "{}", value)?;
            }
        }
        Ok(())
    }

    /// Runs statements in order, stopping at the first fault. Statements
    /// after the faulting one are not executed.
    pub fn run(&mut self, program: &Program) -> Result<(), RuntimeError> {
        debug!(statements = program.statements.len(), "running program");
        for (index, stmt) in program.statements.iter().enumerate() {
            trace!(index, %stmt, "execute");
            self.execute(stmt)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
