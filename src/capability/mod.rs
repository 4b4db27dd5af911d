//! Operator capability predicates.
//!
//! Every expressible operator is a zero-sized marker type in [`op`]. Whether an
//! operator exists for some operand types is the trait bound
//! `Op: UnaryOperator<T>` or `Op: BinaryOperator<L, R>`; whether it is also
//! guaranteed not to panic is `Op: UnaryNoPanic<T>` / `Op: BinaryNoPanic<L, R>`.
//!
//! Generic code states the bound. Code holding concrete types can ask the same
//! question as a `bool` with [`can_apply!`](crate::can_apply):
//!
//! ```rust
//! use axial::can_apply;
//!
//! assert!(can_apply!(Add; i32, i32));
//! assert!(!can_apply!(Add; bool, bool));
//!
//! // Integer addition can overflow, float addition cannot.
//! assert!(!can_apply!(nothrow Add; i32, i32));
//! assert!(can_apply!(nothrow Add; f64, f64));
//! ```
//!
//! The answer is decided while type checking; the emitted code is a constant.

mod no_panic;
pub mod op;
#[doc(hidden)]
pub mod probe;

/// A unary operator applicable to an operand of type `T`.
pub trait UnaryOperator<T> {
    /// Result type of the operator.
    type Output;

    /// Applies the operator.
    fn apply(operand: T) -> Self::Output;
}

/// A binary operator applicable to operands of types `L` and `R`.
pub trait BinaryOperator<L, R> {
    /// Result type of the operator.
    type Output;

    /// Applies the operator.
    fn apply(lhs: L, rhs: R) -> Self::Output;
}

/// A unary operator that cannot panic for operands of type `T`.
pub trait UnaryNoPanic<T>: UnaryOperator<T> {}

/// A binary operator that cannot panic for operands of types `L` and `R`.
pub trait BinaryNoPanic<L, R>: BinaryOperator<L, R> {}

/// Answers whether an operator from [`op`](crate::capability::op) applies to
/// the given operand types.
///
/// `can_apply!(Op; T)` queries a unary operator, `can_apply!(Op; L, R)` a
/// binary one. Prefix the operator with `nothrow` to also require that the
/// operation cannot panic. Operand types must be concrete; inside generic
/// code, bound on [`UnaryOperator`] or [`BinaryOperator`] instead.
///
/// ```rust
/// use axial::{can_apply, Absent, Vector};
///
/// type Px = Vector<f32, Absent, Absent>;
/// type Flag = Vector<char, Absent, Absent>;
///
/// assert!(can_apply!(Add; Px, Px));
/// assert!(!can_apply!(Add; Flag, Flag));
/// assert!(can_apply!(Neg; f32));
/// assert!(!can_apply!(Neg; u8));
/// ```
#[macro_export]
macro_rules! can_apply {
    (@probe $mode:ident $op:ident; $($operand:ty),+) => {{
        #[allow(unused_imports)]
        use $crate::capability::probe::{Available as _, Unavailable as _};
        (&$crate::capability::probe::Probe::<
            $crate::capability::op::$op,
            ($($operand,)+),
            $crate::capability::probe::$mode,
        >::new())
            .available()
    }};
    (nothrow $op:ident; $($operand:ty),+ $(,)?) => {
        $crate::can_apply!(@probe Strict $op; $($operand),+)
    };
    ($op:ident; $($operand:ty),+ $(,)?) => {
        $crate::can_apply!(@probe Permissive $op; $($operand),+)
    };
}

#[cfg(test)]
mod tests {
    use core::num::Wrapping;

    #[test]
    fn test_permissive_arithmetic() {
        assert!(can_apply!(Add; i32, i32));
        assert!(can_apply!(Sub; f64, f64));
        assert!(can_apply!(Mul; u8, u8));
        assert!(can_apply!(Div; i64, i64));
        assert!(can_apply!(Rem; u32, u32));
        assert!(can_apply!(Add; &'static f32, f32));
        assert!(!can_apply!(Add; i32, f32));
        assert!(!can_apply!(Mul; bool, bool));
        assert!(!can_apply!(Sub; char, char));
    }

    #[test]
    fn test_strict_requires_no_panic() {
        // Permissive: valid even though it may overflow.
        assert!(can_apply!(Add; i32, i32));
        assert!(!can_apply!(nothrow Add; i32, i32));
        assert!(!can_apply!(nothrow Div; u8, u8));

        assert!(can_apply!(nothrow Add; f32, f32));
        assert!(can_apply!(nothrow Div; f64, f64));
        assert!(can_apply!(nothrow Add; Wrapping<i32>, Wrapping<i32>));
        assert!(can_apply!(nothrow BitXor; u64, u64));
        assert!(can_apply!(nothrow Lt; i8, i8));
    }

    #[test]
    fn test_unary_operators() {
        assert!(can_apply!(Neg; i32));
        assert!(!can_apply!(Neg; u32));
        assert!(can_apply!(BitNot; u32));
        assert!(!can_apply!(BitNot; f32));
        assert!(can_apply!(Not; bool));
        assert!(!can_apply!(Not; f32));
        assert!(can_apply!(Pos; f64));
        assert!(!can_apply!(Pos; char));
        assert!(can_apply!(AddrOf; &'static str));
        assert!(can_apply!(Deref; &'static Box<u8>));
        assert!(!can_apply!(nothrow Neg; i32));
        assert!(can_apply!(nothrow Neg; f32));
    }

    #[test]
    fn test_increments_need_places() {
        assert!(can_apply!(PreInc; &'static mut i32));
        assert!(can_apply!(PostDec; &'static mut f64));
        assert!(!can_apply!(PreInc; i32));
        assert!(!can_apply!(PostInc; &'static mut bool));
        assert!(can_apply!(nothrow PostInc; &'static mut f32));
        assert!(!can_apply!(nothrow PreInc; &'static mut u8));
    }

    #[test]
    fn test_comparisons_and_logic() {
        assert!(can_apply!(Cmp; f32, f32));
        assert!(can_apply!(Eq; char, char));
        assert!(can_apply!(Ne; &'static str, &'static str));
        assert!(can_apply!(Ge; u16, u16));
        assert!(can_apply!(And; bool, bool));
        assert!(can_apply!(Or; bool, bool));
        assert!(!can_apply!(And; u8, u8));
        assert!(can_apply!(Shl; u32, u8));
        assert!(!can_apply!(Shr; f32, f32));
        assert!(can_apply!(nothrow Or; bool, bool));
    }
}
