//! Binary operators: arithmetic, shifts, comparisons, bitwise and logical.

use core::cmp::Ordering;

use num_traits::Float;

use crate::capability::BinaryOperator;

macro_rules! forwarding {
    ($($(#[$meta:meta])* $name:ident => $tr:ident :: $method:ident;)+) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<L: core::ops::$tr<R>, R> BinaryOperator<L, R> for $name {
            type Output = <L as core::ops::$tr<R>>::Output;

            #[inline(always)]
            fn apply(lhs: L, rhs: R) -> Self::Output {
                core::ops::$tr::$method(lhs, rhs)
            }
        }
    )+};
}

macro_rules! comparing {
    ($($(#[$meta:meta])* $name:ident => $tr:ident :: $method:ident;)+) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<L: $tr<R>, R> BinaryOperator<L, R> for $name {
            type Output = bool;

            #[inline(always)]
            fn apply(lhs: L, rhs: R) -> bool {
                $tr::$method(&lhs, &rhs)
            }
        }
    )+};
}

forwarding! {
    /// Multiplication, `a * b`.
    Mul => Mul::mul;
    /// Division, `a / b`.
    Div => Div::div;
    /// Remainder, `a % b`.
    Rem => Rem::rem;
    /// Addition, `a + b`.
    Add => Add::add;
    /// Subtraction, `a - b`.
    Sub => Sub::sub;
    /// Left shift, `a << b`.
    Shl => Shl::shl;
    /// Right shift, `a >> b`.
    Shr => Shr::shr;
    /// Bitwise and, `a & b`.
    BitAnd => BitAnd::bitand;
    /// Bitwise exclusive or, `a ^ b`.
    BitXor => BitXor::bitxor;
    /// Bitwise or, `a | b`.
    BitOr => BitOr::bitor;
}

comparing! {
    /// Less than, `a < b`.
    Lt => PartialOrd::lt;
    /// Greater than, `a > b`.
    Gt => PartialOrd::gt;
    /// Less than or equal, `a <= b`.
    Le => PartialOrd::le;
    /// Greater than or equal, `a >= b`.
    Ge => PartialOrd::ge;
    /// Equality, `a == b`.
    Eq => PartialEq::eq;
    /// Inequality, `a != b`.
    Ne => PartialEq::ne;
}

/// Three-way comparison. Yields `None` for unordered operands such as NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cmp;

impl<L: PartialOrd<R>, R> BinaryOperator<L, R> for Cmp {
    type Output = Option<Ordering>;

    #[inline(always)]
    fn apply(lhs: L, rhs: R) -> Self::Output {
        lhs.partial_cmp(&rhs)
    }
}

/// Logical and of two boolean-convertible values.
///
/// Both operands are already evaluated, so there is nothing to short-circuit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct And;

impl<L: Into<bool>, R: Into<bool>> BinaryOperator<L, R> for And {
    type Output = bool;

    #[inline(always)]
    fn apply(lhs: L, rhs: R) -> bool {
        lhs.into() && rhs.into()
    }
}

/// Logical or of two boolean-convertible values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Or;

impl<L: Into<bool>, R: Into<bool>> BinaryOperator<L, R> for Or {
    type Output = bool;

    #[inline(always)]
    fn apply(lhs: L, rhs: R) -> bool {
        lhs.into() || rhs.into()
    }
}

/// Floating-point remainder with the sign of the dividend, as C's `fmod`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fmod;

impl<T: Float> BinaryOperator<T, T> for Fmod {
    type Output = T;

    #[inline(always)]
    fn apply(lhs: T, rhs: T) -> T {
        lhs % rhs
    }
}
