//! Dot product and squared magnitude.
//!
//! Each axis is multiplied under [`Annihilate`], so an axis missing from either
//! operand contributes nothing. The products are then summed left to right
//! under [`PassThrough`]: adding an absent product leaves the running sum as
//! it is, and a sum of nothing but absent products is itself [`Absent`](crate::Absent).

use crate::capability::op;
use crate::collapse::{Annihilate, Combine, Combined, PassThrough};
use crate::Vector;

type Product<L, R> = Combined<op::Mul, L, R, Annihilate>;

type PartialSum<X, Y, X2, Y2> = Combined<op::Add, Product<X, X2>, Product<Y, Y2>>;

/// Vectors that have a dot product with `Rhs`.
pub trait Dot<Rhs = Self> {
    /// The scalar result, or `Absent` when no axis overlaps.
    type Output;

    /// Computes the dot product.
    fn dot(self, rhs: Rhs) -> Self::Output;
}

impl<X, Y, Z, X2, Y2, Z2> Dot<Vector<X2, Y2, Z2>> for Vector<X, Y, Z>
where
    X: Combine<op::Mul, X2, Annihilate>,
    Y: Combine<op::Mul, Y2, Annihilate>,
    Z: Combine<op::Mul, Z2, Annihilate>,
    Product<X, X2>: Combine<op::Add, Product<Y, Y2>>,
    PartialSum<X, Y, X2, Y2>: Combine<op::Add, Product<Z, Z2>>,
{
    type Output = Combined<op::Add, PartialSum<X, Y, X2, Y2>, Product<Z, Z2>>;

    #[inline(always)]
    fn dot(self, rhs: Vector<X2, Y2, Z2>) -> Self::Output {
        let (x, y, z) = self.into_parts();
        let (rx, ry, rz) = rhs.into_parts();

        let px = <X as Combine<op::Mul, X2, Annihilate>>::combine(x, rx);
        let py = <Y as Combine<op::Mul, Y2, Annihilate>>::combine(y, ry);
        let pz = <Z as Combine<op::Mul, Z2, Annihilate>>::combine(z, rz);

        let xy = <Product<X, X2> as Combine<op::Add, Product<Y, Y2>, PassThrough>>::combine(px, py);
        <PartialSum<X, Y, X2, Y2> as Combine<op::Add, Product<Z, Z2>, PassThrough>>::combine(xy, pz)
    }
}

/// Dot product of `a` and `b`.
///
/// ```rust
/// use axial::{dot, Absent, Vector};
///
/// let a = Vector::new(1.0f32, 2.0f32, 3.0f32);
/// let b = Vector::new(4.0f32, Absent, 0.5f32);
/// assert_eq!(dot(a, b), 5.5);
///
/// // No overlapping axes: the result is absent.
/// let c = Vector::new(Absent, Absent, 1.0f32);
/// let d = Vector::new(1.0f32, Absent, Absent);
/// assert_eq!(dot(c, d), Absent);
/// ```
#[inline(always)]
pub fn dot<A, B>(a: A, b: B) -> A::Output
where
    A: Dot<B>,
{
    a.dot(b)
}

/// Squared magnitude: the dot product of `v` with itself.
#[inline(always)]
pub fn mag2<V>(v: V) -> V::Output
where
    V: Dot<V> + Clone,
{
    v.clone().dot(v)
}
