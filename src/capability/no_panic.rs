//! Operator/operand pairs that cannot panic.
//!
//! Integer arithmetic is left out on purpose: it overflows (and panics in
//! debug builds) or divides by zero. `Wrapping` arithmetic wraps instead, and
//! float arithmetic produces infinities or NaN.

use core::num::Wrapping;

use super::op;
use super::{BinaryNoPanic, UnaryNoPanic};

macro_rules! total_binary {
    ($lhs:ty, $rhs:ty: $($op:ident),+) => {
        $(impl BinaryNoPanic<$lhs, $rhs> for op::$op {})+
    };
}

macro_rules! total_unary {
    ($ty:ty: $($op:ident),+) => {
        $(impl UnaryNoPanic<$ty> for op::$op {})+
    };
}

macro_rules! total_places {
    ($ty:ty) => {
        impl<'a> UnaryNoPanic<&'a mut $ty> for op::PreInc {}
        impl<'a> UnaryNoPanic<&'a mut $ty> for op::PostInc {}
        impl<'a> UnaryNoPanic<&'a mut $ty> for op::PreDec {}
        impl<'a> UnaryNoPanic<&'a mut $ty> for op::PostDec {}
    };
}

macro_rules! floats {
    ($($ty:ty),+) => {$(
        total_binary!($ty, $ty: Add, Sub, Mul, Div, Rem, Fmod, Cmp, Lt, Gt, Le, Ge, Eq, Ne);
        total_unary!($ty: Pos, Neg);
        total_places!($ty);
    )+};
}

macro_rules! integers {
    ($($ty:ty),+) => {$(
        total_binary!($ty, $ty: BitAnd, BitOr, BitXor, Cmp, Lt, Gt, Le, Ge, Eq, Ne);
        total_unary!($ty: Pos, BitNot);

        total_binary!(Wrapping<$ty>, Wrapping<$ty>: Add, Sub, Mul, BitAnd, BitOr, BitXor, Cmp, Lt, Gt, Le, Ge, Eq, Ne);
        total_binary!(Wrapping<$ty>, usize: Shl, Shr);
        total_unary!(Wrapping<$ty>: Neg, BitNot);
        total_places!(Wrapping<$ty>);
    )+};
}

floats!(f32, f64);
integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

total_binary!(bool, bool: And, Or, BitAnd, BitOr, BitXor, Cmp, Lt, Gt, Le, Ge, Eq, Ne);
total_unary!(bool: Not, BitNot);
total_binary!(char, char: Cmp, Lt, Gt, Le, Ge, Eq, Ne);

impl<'a, T: ?Sized> UnaryNoPanic<&'a T> for op::AddrOf {}
