//! Unary operators: increments, sign, negation, address-of and dereference.
//!
//! Increments and decrements act on a place, so their operand is `&mut T`.
//! The prefix forms yield the updated place, the postfix forms the old value.

use core::ops::{AddAssign, SubAssign};

use num_traits::{Num, One};

use crate::capability::UnaryOperator;

/// Prefix increment, `++x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PreInc;

/// Postfix increment, `x++`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PostInc;

/// Prefix decrement, `--x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PreDec;

/// Postfix decrement, `x--`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PostDec;

/// Unary plus: the identity on numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pos;

/// Arithmetic negation, `-x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Neg;

/// Logical negation of a boolean-convertible value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Not;

/// Bitwise complement, `!x` on integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BitNot;

/// Address-of: a raw pointer to a borrowed place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AddrOf;

/// Dereference of a smart pointer or reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Deref;

impl<'a, T: AddAssign + One> UnaryOperator<&'a mut T> for PreInc {
    type Output = &'a mut T;

    #[inline(always)]
    fn apply(place: &'a mut T) -> Self::Output {
        *place += T::one();
        place
    }
}

impl<'a, T: AddAssign + One + Clone> UnaryOperator<&'a mut T> for PostInc {
    type Output = T;

    #[inline(always)]
    fn apply(place: &'a mut T) -> Self::Output {
        let old = place.clone();
        *place += T::one();
        old
    }
}

impl<'a, T: SubAssign + One> UnaryOperator<&'a mut T> for PreDec {
    type Output = &'a mut T;

    #[inline(always)]
    fn apply(place: &'a mut T) -> Self::Output {
        *place -= T::one();
        place
    }
}

impl<'a, T: SubAssign + One + Clone> UnaryOperator<&'a mut T> for PostDec {
    type Output = T;

    #[inline(always)]
    fn apply(place: &'a mut T) -> Self::Output {
        let old = place.clone();
        *place -= T::one();
        old
    }
}

impl<T: Num> UnaryOperator<T> for Pos {
    type Output = T;

    #[inline(always)]
    fn apply(operand: T) -> Self::Output {
        operand
    }
}

impl<T: core::ops::Neg> UnaryOperator<T> for Neg {
    type Output = T::Output;

    #[inline(always)]
    fn apply(operand: T) -> Self::Output {
        -operand
    }
}

impl<T: Into<bool>> UnaryOperator<T> for Not {
    type Output = bool;

    #[inline(always)]
    fn apply(operand: T) -> Self::Output {
        !operand.into()
    }
}

impl<T: core::ops::Not> UnaryOperator<T> for BitNot {
    type Output = T::Output;

    #[inline(always)]
    fn apply(operand: T) -> Self::Output {
        !operand
    }
}

impl<'a, T: ?Sized> UnaryOperator<&'a T> for AddrOf {
    type Output = *const T;

    #[inline(always)]
    fn apply(operand: &'a T) -> Self::Output {
        core::ptr::from_ref(operand)
    }
}

impl<'a, P: core::ops::Deref + ?Sized> UnaryOperator<&'a P> for Deref {
    type Output = &'a P::Target;

    #[inline(always)]
    fn apply(operand: &'a P) -> Self::Output {
        operand
    }
}
