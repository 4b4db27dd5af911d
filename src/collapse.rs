//! Per-axis collapsing rules.
//!
//! A binary operator applied to one axis of two operands has four cases:
//!
//! | left    | right   | [`PassThrough`]   | [`Annihilate`]    |
//! |---------|---------|-------------------|-------------------|
//! | present | present | `Op(left, right)` | `Op(left, right)` |
//! | present | absent  | `left`            | `Absent`          |
//! | absent  | present | `right`           | `Absent`          |
//! | absent  | absent  | `Absent`          | `Absent`          |
//!
//! Each row is a separate impl of [`Combine`]. The rows cannot overlap because
//! `Absent` is not an [`Element`], so the selection happens entirely at compile
//! time and the result type records which axes survive.

use crate::capability::{BinaryOperator, UnaryOperator};
use crate::{Absent, Element};

mod sealed {
    pub trait Sealed {}
}

/// A collapsing policy for binary operators.
pub trait Policy: sealed::Sealed {}

/// A present operand passes through when its partner is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PassThrough;

/// The result is absent whenever either operand is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Annihilate;

impl sealed::Sealed for PassThrough {}
impl sealed::Sealed for Annihilate {}
impl Policy for PassThrough {}
impl Policy for Annihilate {}

/// Applies binary operator `Op` to one axis of two operands under policy `P`.
pub trait Combine<Op, Rhs, P: Policy = PassThrough> {
    /// The resulting axis type, possibly [`Absent`].
    type Output;

    /// Combines the two axis values.
    fn combine(self, rhs: Rhs) -> Self::Output;
}

/// Output of [`Combine`] for `L op R` under policy `P`.
pub type Combined<Op, L, R, P = PassThrough> = <L as Combine<Op, R, P>>::Output;

impl<Op, P: Policy> Combine<Op, Absent, P> for Absent {
    type Output = Absent;

    #[inline(always)]
    fn combine(self, _: Absent) -> Absent {
        Absent
    }
}

impl<Op, R: Element> Combine<Op, R, PassThrough> for Absent {
    type Output = R;

    #[inline(always)]
    fn combine(self, rhs: R) -> R {
        rhs
    }
}

impl<Op, L: Element> Combine<Op, Absent, PassThrough> for L {
    type Output = L;

    #[inline(always)]
    fn combine(self, _: Absent) -> L {
        self
    }
}

impl<Op, R: Element> Combine<Op, R, Annihilate> for Absent {
    type Output = Absent;

    #[inline(always)]
    fn combine(self, _: R) -> Absent {
        Absent
    }
}

impl<Op, L: Element> Combine<Op, Absent, Annihilate> for L {
    type Output = Absent;

    #[inline(always)]
    fn combine(self, _: Absent) -> Absent {
        Absent
    }
}

impl<Op, P, L, R> Combine<Op, R, P> for L
where
    Op: BinaryOperator<L, R>,
    P: Policy,
    L: Element,
    R: Element,
{
    type Output = Op::Output;

    #[inline(always)]
    fn combine(self, rhs: R) -> Self::Output {
        Op::apply(self, rhs)
    }
}

/// Applies unary operator `Op` to one axis: absent stays absent.
pub trait CombineUnary<Op> {
    /// The resulting axis type.
    type Output;

    /// Applies the operator to a present axis.
    fn combine_unary(self) -> Self::Output;
}

/// Output of [`CombineUnary`] for `Op` applied to `T`.
pub type CombinedUnary<Op, T> = <T as CombineUnary<Op>>::Output;

impl<Op> CombineUnary<Op> for Absent {
    type Output = Absent;

    #[inline(always)]
    fn combine_unary(self) -> Absent {
        Absent
    }
}

impl<Op: UnaryOperator<T>, T: Element> CombineUnary<Op> for T {
    type Output = Op::Output;

    #[inline(always)]
    fn combine_unary(self) -> Self::Output {
        Op::apply(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::op;

    #[test]
    fn test_pass_through_cases() {
        let both: i64 = Combine::<op::Add, i64>::combine(2i64, 3i64);
        assert_eq!(both, 5);

        let left: u8 = Combine::<op::Add, Absent>::combine(7u8, Absent);
        assert_eq!(left, 7);

        let right: f32 = Combine::<op::Sub, f32>::combine(Absent, 1.5f32);
        assert!((right - 1.5).abs() < f32::EPSILON);

        let none: Absent = Combine::<op::Mul, Absent>::combine(Absent, Absent);
        assert_eq!(none, Absent);
    }

    #[test]
    fn test_annihilate_cases() {
        let both: i32 = Combine::<op::Mul, i32, Annihilate>::combine(4i32, 5i32);
        assert_eq!(both, 20);

        let left: Absent = Combine::<op::Mul, Absent, Annihilate>::combine(4i32, Absent);
        assert_eq!(left, Absent);

        let right: Absent = Combine::<op::Mul, i32, Annihilate>::combine(Absent, 5i32);
        assert_eq!(right, Absent);
    }

    #[test]
    fn test_unary_cases() {
        let neg: i32 = CombineUnary::<op::Neg>::combine_unary(3i32);
        assert_eq!(neg, -3);
        let absent: Absent = CombineUnary::<op::Neg>::combine_unary(Absent);
        assert_eq!(absent, Absent);
    }
}
