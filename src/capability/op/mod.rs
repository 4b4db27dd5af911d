//! Operator marker types.
//!
//! One zero-sized type per operator. Markers carry no data; they select an
//! implementation of [`UnaryOperator`](super::UnaryOperator) or
//! [`BinaryOperator`](super::BinaryOperator).

mod binary;
mod unary;

pub use binary::{
    Add, And, BitAnd, BitOr, BitXor, Cmp, Div, Eq, Fmod, Ge, Gt, Le, Lt, Mul, Ne, Or, Rem, Shl,
    Shr, Sub,
};
pub use unary::{AddrOf, BitNot, Deref, Neg, Not, Pos, PostDec, PostInc, PreDec, PreInc};
