//! Binary operators and their per-variant semantics.
//!
//! Each variant declares the exact operators it supports for each right-hand
//! side kind. Everything outside those tables is an invalid operator.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::array::Array;
use crate::error::{Error, Result};
use crate::object::Object;

/// Binary operator tokens understood by the object protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Quo,
    /// `%`
    Rem,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `&^` (bit clear)
    AndNot,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEq,
    /// `>=`
    GreaterEq,
}

impl BinaryOperator {
    /// All operators, in token order.
    pub const ALL: [Self; 15] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Quo,
        Self::Rem,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::AndNot,
        Self::Shl,
        Self::Shr,
        Self::Less,
        Self::Greater,
        Self::LessEq,
        Self::GreaterEq,
    ];

    /// Returns the source token for this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Quo => "/",
            Self::Rem => "%",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::AndNot => "&^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEq => "<=",
            Self::GreaterEq => ">=",
        }
    }

    /// Parses an operator from its source token.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Returns true for the ordering comparisons.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Less | Self::Greater | Self::LessEq | Self::GreaterEq
        )
    }

    /// Applies a comparison operator to an ordering.
    ///
    /// Returns `None` for non-comparison operators.
    fn test(self, ord: Ordering) -> Option<bool> {
        match self {
            Self::Less => Some(ord == Ordering::Less),
            Self::Greater => Some(ord == Ordering::Greater),
            Self::LessEq => Some(ord != Ordering::Greater),
            Self::GreaterEq => Some(ord != Ordering::Less),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Applies `op` to `lhs` and `rhs`.
pub(crate) fn apply(lhs: &Object, op: BinaryOperator, rhs: &Object) -> Result<Object> {
    let result = match (lhs, rhs) {
        (Object::Int(x), Object::Int(y)) => int_int(*x, op, *y)?,
        #[allow(clippy::cast_precision_loss)]
        (Object::Int(x), Object::Float(y)) => float_float(*x as f64, op, *y),
        (Object::Float(x), Object::Float(y)) => float_float(*x, op, *y),
        #[allow(clippy::cast_precision_loss)]
        (Object::Float(x), Object::Int(y)) => float_float(*x, op, *y as f64),
        (Object::String(x), Object::String(y)) => string_string(x, op, y),
        (Object::String(x), other) if op == BinaryOperator::Add => {
            Some(Object::from(format!("{x}{other}")))
        }
        (Object::Bytes(x), Object::Bytes(y)) if op == BinaryOperator::Add => {
            Some(Object::Bytes([&x[..], &y[..]].concat().into()))
        }
        (Object::Array(x), Object::Array(y)) if op == BinaryOperator::Add => {
            let mut items = x.to_vec();
            items.extend(y.to_vec());
            Some(Object::Array(Array::new(items)))
        }
        _ => None,
    };

    result.ok_or_else(|| Error::invalid_operator(op, lhs.kind(), rhs.kind()))
}

/// Integer arithmetic. Overflow wraps.
///
/// Shift counts of 64 or more saturate: `<<` gives 0 and `>>` gives 0 or -1
/// by the sign of the left operand. A negative shift count is rejected with
/// `InvalidShift` rather than reinterpreted as a huge unsigned count.
fn int_int(x: i64, op: BinaryOperator, y: i64) -> Result<Option<Object>> {
    use BinaryOperator as Op;

    let value = match op {
        Op::Add => x.wrapping_add(y),
        Op::Sub => x.wrapping_sub(y),
        Op::Mul => x.wrapping_mul(y),
        Op::Quo | Op::Rem if y == 0 => return Err(Error::division_by_zero()),
        Op::Quo => x.wrapping_div(y),
        Op::Rem => x.wrapping_rem(y),
        Op::And => x & y,
        Op::Or => x | y,
        Op::Xor => x ^ y,
        Op::AndNot => x & !y,
        Op::Shl | Op::Shr if y < 0 => return Err(Error::invalid_shift(y)),
        Op::Shl => {
            if y >= 64 {
                0
            } else {
                x << y
            }
        }
        Op::Shr => {
            if y >= 64 {
                if x < 0 { -1 } else { 0 }
            } else {
                x >> y
            }
        }
        Op::Less | Op::Greater | Op::LessEq | Op::GreaterEq => {
            return Ok(op.test(x.cmp(&y)).map(Object::Bool));
        }
    };
    Ok(Some(Object::Int(value)))
}

/// Float arithmetic and comparison. Any comparison involving NaN is false.
fn float_float(x: f64, op: BinaryOperator, y: f64) -> Option<Object> {
    use BinaryOperator as Op;

    match op {
        Op::Add => Some(Object::Float(x + y)),
        Op::Sub => Some(Object::Float(x - y)),
        Op::Mul => Some(Object::Float(x * y)),
        Op::Quo => Some(Object::Float(x / y)),
        Op::Less | Op::Greater | Op::LessEq | Op::GreaterEq => {
            let result = x.partial_cmp(&y).and_then(|ord| op.test(ord));
            Some(Object::Bool(result.unwrap_or(false)))
        }
        _ => None,
    }
}

fn string_string(x: &str, op: BinaryOperator, y: &str) -> Option<Object> {
    match op {
        BinaryOperator::Add => Some(Object::from(format!("{x}{y}"))),
        _ => op.test(x.cmp(y)).map(Object::Bool),
    }
}
