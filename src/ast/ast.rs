use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    BitwiseOr,
    Xor,
    BitwiseAnd,
    Sll,
    Sra,
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::BitwiseOr => "|",
            BinaryOp::Xor => "^",
            BinaryOp::BitwiseAnd => "&",
            BinaryOp::Sll => "<<",
            BinaryOp::Sra => ">>",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
        }
    }

    /// Inverse of [`BinaryOp::symbol`]; `None` for anything outside the
    /// operator set.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "|" => BinaryOp::BitwiseOr,
            "^" => BinaryOp::Xor,
            "&" => BinaryOp::BitwiseAnd,
            "<<" => BinaryOp::Sll,
            ">>" => BinaryOp::Sra,
            "+" => BinaryOp::Plus,
            "-" => BinaryOp::Minus,
            "*" => BinaryOp::Multiply,
            "/" => BinaryOp::Divide,
            "%" => BinaryOp::Modulo,
            _ => return None,
        };
        Some(op)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Minus,
    Complement,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Minus => "-",
            UnaryOp::Complement => "~",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "-" => Some(UnaryOp::Minus),
            "~" => Some(UnaryOp::Complement),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Var(String),
    Num(i64),
    Binary { left: Box<Expr>, op: BinaryOp, right: Box<Expr> },
    Unary { op: UnaryOp, expr: Box<Expr> },
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary { left: Box::new(left), op, right: Box::new(right) }
    }

    pub fn unary(op: UnaryOp, expr: Expr) -> Self {
        Expr::Unary { op, expr: Box::new(expr) }
    }
}

// Operand chains can be far deeper than the thread stack allows for a
// recursive drop, so subtrees are detached onto a heap worklist instead.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_operands(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_operands(&mut pending);
        }
    }
}

impl Expr {
    fn detach_operands(&mut self, pending: &mut Vec<Expr>) {
        match self {
            Expr::Binary { left, right, .. } => {
                pending.push(mem::replace(&mut **left, Expr::Num(0)));
                pending.push(mem::replace(&mut **right, Expr::Num(0)));
            }
            Expr::Unary { expr, .. } => pending.push(mem::replace(&mut **expr, Expr::Num(0))),
            Expr::Var(_) | Expr::Num(_) => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assign { name: String, value: Expr },
    Print(Expr),
}

/// Statements of one source file, in program order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}
