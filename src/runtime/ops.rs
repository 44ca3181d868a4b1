//! Operator semantics over 64-bit two's-complement integers.
//!
//! Every result equals the exact mathematical result reduced modulo 2^64
//! and reinterpreted as signed. The wrapping primitives of `i64` give that
//! directly for `+ - * & | ^`; division, modulo and shifts need the extra
//! handling below.

use crate::ast::{BinaryOp, UnaryOp};
use crate::error::RuntimeError;

/// Reduces an exact result to `[-2^63, 2^63)`.
pub fn truncate(value: i128) -> i64 {
    value as u64 as i64
}

pub fn apply_binary(op: BinaryOp, left: i64, right: i64) -> Result<i64, RuntimeError> {
    let result = match op {
        BinaryOp::Plus => left.wrapping_add(right),
        BinaryOp::Minus => left.wrapping_sub(right),
        BinaryOp::Multiply => left.wrapping_mul(right),
        BinaryOp::Divide => floor_div(left, right).ok_or(RuntimeError::DivisionByZero)?,
        BinaryOp::Modulo => floor_mod(left, right).ok_or(RuntimeError::ModuloByZero)?,
        BinaryOp::BitwiseAnd => left & right,
        BinaryOp::BitwiseOr => left | right,
        BinaryOp::Xor => left ^ right,
        BinaryOp::Sll => shift_left(left, right)?,
        BinaryOp::Sra => shift_right(left, right)?,
    };
    Ok(result)
}

pub fn apply_unary(op: UnaryOp, value: i64) -> i64 {
    match op {
        UnaryOp::Minus => value.wrapping_neg(),
        UnaryOp::Complement => !value,
    }
}

/// Quotient rounded toward negative infinity. `i64::MIN / -1` is 2^63,
/// which wraps back to `i64::MIN`.
pub fn floor_div(left: i64, right: i64) -> Option<i64> {
    if right == 0 {
        return None;
    }
    let quotient = left.wrapping_div(right);
    if left.wrapping_rem(right) != 0 && ((left < 0) != (right < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

/// Remainder taking the sign of the divisor, so that
/// `left == floor_div(left, right) * right + floor_mod(left, right)`.
pub fn floor_mod(left: i64, right: i64) -> Option<i64> {
    if right == 0 {
        return None;
    }
    let rem = left.wrapping_rem(right);
    if rem != 0 && ((rem < 0) != (right < 0)) {
        Some(rem + right)
    } else {
        Some(rem)
    }
}

fn shift_left(value: i64, count: i64) -> Result<i64, RuntimeError> {
    match count {
        c if c < 0 => Err(RuntimeError::NegativeShift(c)),
        c if c >= 64 => Ok(0),
        c => Ok(truncate(i128::from(value) << c)),
    }
}

fn shift_right(value: i64, count: i64) -> Result<i64, RuntimeError> {
    match count {
        c if c < 0 => Err(RuntimeError::NegativeShift(c)),
        c if c >= 64 => Ok(if value < 0 { -1 } else { 0 }),
        c => Ok(value >> c),
    }
}
