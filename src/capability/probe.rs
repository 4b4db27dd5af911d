//! Method-resolution probe behind [`can_apply!`](crate::can_apply).
//!
//! `(&Probe).available()` finds [`Available::available`] without autoref when
//! the operator bound holds. Otherwise resolution falls through to the autoref
//! candidate, [`Unavailable::available`] on `&Probe`. Either way the choice is
//! made by the type checker and the call inlines to a constant.

use core::marker::PhantomData;

use super::{BinaryNoPanic, BinaryOperator, UnaryNoPanic, UnaryOperator};

/// Accept any well-formed application.
pub struct Permissive;

/// Accept only applications that cannot panic.
pub struct Strict;

/// Operator `Op` applied to the operand tuple `Args`, checked under `Mode`.
pub struct Probe<Op, Args, Mode>(PhantomData<fn() -> (Op, Args, Mode)>);

impl<Op, Args, Mode> Probe<Op, Args, Mode> {
    /// Creates the probe.
    #[inline(always)]
    pub const fn new() -> Self {
        Probe(PhantomData)
    }
}

/// Selected when the operator applies.
pub trait Available {
    /// Returns `true`.
    #[inline(always)]
    fn available(&self) -> bool {
        true
    }
}

/// Selected otherwise.
pub trait Unavailable {
    /// Returns `false`.
    #[inline(always)]
    fn available(&self) -> bool {
        false
    }
}

impl<Op: UnaryOperator<T>, T> Available for Probe<Op, (T,), Permissive> {}
impl<Op: UnaryNoPanic<T>, T> Available for Probe<Op, (T,), Strict> {}
impl<Op: BinaryOperator<L, R>, L, R> Available for Probe<Op, (L, R), Permissive> {}
impl<Op: BinaryNoPanic<L, R>, L, R> Available for Probe<Op, (L, R), Strict> {}

impl<Op, Args, Mode> Unavailable for &Probe<Op, Args, Mode> {}
