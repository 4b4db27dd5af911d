//! Floating-point remainder across scalars and vectors.
//!
//! `fmod` follows the same collapsing rules as the `%` operator:
//!
//! * scalar, scalar: the plain remainder;
//! * vector, vector: per axis under [`PassThrough`];
//! * vector, scalar and scalar, vector: per axis under [`Annihilate`].

use num_traits::Float;

use crate::capability::{op, BinaryOperator};
use crate::collapse::{Annihilate, Combine, Combined, PassThrough};
use crate::{Element, Vector};

/// Operands supporting [`fmod`].
pub trait FloatRem<Rhs = Self> {
    /// The remainder type.
    type Output;

    /// Remainder of `self / rhs`, with the sign of `self`.
    fn fmod(self, rhs: Rhs) -> Self::Output;
}

/// Floating-point remainder of `lhs / rhs`, with the sign of `lhs`.
///
/// ```rust
/// use axial::{fmod, Absent, Vector};
///
/// assert_eq!(fmod(7.0f64, 3.0f64), 1.0);
///
/// let v = Vector::new(7.5f32, Absent, -7.5f32);
/// assert_eq!(fmod(v, 2.0f32), Vector::new(1.5, Absent, -1.5));
/// ```
#[inline(always)]
pub fn fmod<L, R>(lhs: L, rhs: R) -> L::Output
where
    L: FloatRem<R>,
{
    lhs.fmod(rhs)
}

impl<T: Element + Float> FloatRem<T> for T {
    type Output = T;

    #[inline(always)]
    fn fmod(self, rhs: T) -> T {
        <op::Fmod as BinaryOperator<T, T>>::apply(self, rhs)
    }
}

impl<X, Y, Z, X2, Y2, Z2> FloatRem<Vector<X2, Y2, Z2>> for Vector<X, Y, Z>
where
    X: Combine<op::Fmod, X2>,
    Y: Combine<op::Fmod, Y2>,
    Z: Combine<op::Fmod, Z2>,
{
    type Output = Vector<
        Combined<op::Fmod, X, X2>,
        Combined<op::Fmod, Y, Y2>,
        Combined<op::Fmod, Z, Z2>,
    >;

    #[inline(always)]
    fn fmod(self, rhs: Vector<X2, Y2, Z2>) -> Self::Output {
        let (x, y, z) = self.into_parts();
        let (rx, ry, rz) = rhs.into_parts();
        Vector::new(
            <X as Combine<op::Fmod, X2, PassThrough>>::combine(x, rx),
            <Y as Combine<op::Fmod, Y2, PassThrough>>::combine(y, ry),
            <Z as Combine<op::Fmod, Z2, PassThrough>>::combine(z, rz),
        )
    }
}

impl<X, Y, Z, K> FloatRem<K> for Vector<X, Y, Z>
where
    K: Element + Float,
    X: Combine<op::Fmod, K, Annihilate>,
    Y: Combine<op::Fmod, K, Annihilate>,
    Z: Combine<op::Fmod, K, Annihilate>,
{
    type Output = Vector<
        Combined<op::Fmod, X, K, Annihilate>,
        Combined<op::Fmod, Y, K, Annihilate>,
        Combined<op::Fmod, Z, K, Annihilate>,
    >;

    #[inline(always)]
    fn fmod(self, k: K) -> Self::Output {
        let (x, y, z) = self.into_parts();
        Vector::new(
            <X as Combine<op::Fmod, K, Annihilate>>::combine(x, k),
            <Y as Combine<op::Fmod, K, Annihilate>>::combine(y, k),
            <Z as Combine<op::Fmod, K, Annihilate>>::combine(z, k),
        )
    }
}

macro_rules! float_lhs {
    ($($s:ty),+) => {$(
        impl<X, Y, Z> FloatRem<Vector<X, Y, Z>> for $s
        where
            $s: Combine<op::Fmod, X, Annihilate>
                + Combine<op::Fmod, Y, Annihilate>
                + Combine<op::Fmod, Z, Annihilate>,
        {
            type Output = Vector<
                Combined<op::Fmod, $s, X, Annihilate>,
                Combined<op::Fmod, $s, Y, Annihilate>,
                Combined<op::Fmod, $s, Z, Annihilate>,
            >;

            #[inline(always)]
            fn fmod(self, rhs: Vector<X, Y, Z>) -> Self::Output {
                let (x, y, z) = rhs.into_parts();
                Vector::new(
                    <$s as Combine<op::Fmod, X, Annihilate>>::combine(self, x),
                    <$s as Combine<op::Fmod, Y, Annihilate>>::combine(self, y),
                    <$s as Combine<op::Fmod, Z, Annihilate>>::combine(self, z),
                )
            }
        }
    )+};
}

float_lhs!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Absent;

    #[test]
    fn test_scalar_fmod() {
        assert_eq!(fmod(-7.0f64, 3.0f64), -1.0);
        assert!(fmod(1.0f32, 0.0f32).is_nan());
    }

    #[test]
    fn test_vector_fmod_passes_through() {
        let a = Vector::new(5.0f64, 9.0f64, Absent);
        let b = Vector::new(Absent, 4.0f64, 3.0f64);
        assert_eq!(fmod(a, b).into_parts(), (5.0, 1.0, 3.0));
    }

    #[test]
    fn test_scalar_sides_keep_absent_axes() {
        let v = Vector::new(Absent, 10.0f64, 4.5f64);
        assert_eq!(fmod(v, 4.0f64).into_parts(), (Absent, 2.0, 0.5));
        assert_eq!(fmod(10.0f64, v).into_parts(), (Absent, 0.0, 1.0));
    }
}
