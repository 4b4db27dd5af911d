//! Positional accessor protocol.
//!
//! [`AxisAccess`] adapts tuple-like types to X/Y/Z access. Positions a type
//! does not have read as the shared [`ABSENT`] placeholder, so a pair is a
//! planar X/Y value and a 1-tuple is an X-only value.

use crate::absent::ABSENT;
use crate::{Absent, AxisBase, Vector};

/// Named access to up to three axes.
pub trait AxisAccess {
    /// Type of the X axis.
    type X;
    /// Type of the Y axis.
    type Y;
    /// Type of the Z axis.
    type Z;

    /// Borrows the X axis.
    fn x_of(&self) -> &Self::X;
    /// Borrows the Y axis.
    fn y_of(&self) -> &Self::Y;
    /// Borrows the Z axis.
    fn z_of(&self) -> &Self::Z;
}

/// Borrows the X axis of `source`.
#[inline(always)]
pub fn x_of<A: AxisAccess + ?Sized>(source: &A) -> &A::X {
    source.x_of()
}

/// Borrows the Y axis of `source`.
#[inline(always)]
pub fn y_of<A: AxisAccess + ?Sized>(source: &A) -> &A::Y {
    source.y_of()
}

/// Borrows the Z axis of `source`.
#[inline(always)]
pub fn z_of<A: AxisAccess + ?Sized>(source: &A) -> &A::Z {
    source.z_of()
}

impl<X, Y, Z> AxisAccess for AxisBase<X, Y, Z> {
    type X = X;
    type Y = Y;
    type Z = Z;

    #[inline(always)]
    fn x_of(&self) -> &X {
        &self.x
    }

    #[inline(always)]
    fn y_of(&self) -> &Y {
        &self.y
    }

    #[inline(always)]
    fn z_of(&self) -> &Z {
        &self.z
    }
}

impl<X, Y, Z> AxisAccess for Vector<X, Y, Z> {
    type X = X;
    type Y = Y;
    type Z = Z;

    #[inline(always)]
    fn x_of(&self) -> &X {
        &self.x
    }

    #[inline(always)]
    fn y_of(&self) -> &Y {
        &self.y
    }

    #[inline(always)]
    fn z_of(&self) -> &Z {
        &self.z
    }
}

impl<A> AxisAccess for (A,) {
    type X = A;
    type Y = Absent;
    type Z = Absent;

    #[inline(always)]
    fn x_of(&self) -> &A {
        &self.0
    }

    #[inline(always)]
    fn y_of(&self) -> &Absent {
        &ABSENT
    }

    #[inline(always)]
    fn z_of(&self) -> &Absent {
        &ABSENT
    }
}

impl<A, B> AxisAccess for (A, B) {
    type X = A;
    type Y = B;
    type Z = Absent;

    #[inline(always)]
    fn x_of(&self) -> &A {
        &self.0
    }

    #[inline(always)]
    fn y_of(&self) -> &B {
        &self.1
    }

    #[inline(always)]
    fn z_of(&self) -> &Absent {
        &ABSENT
    }
}

impl<A, B, C> AxisAccess for (A, B, C) {
    type X = A;
    type Y = B;
    type Z = C;

    #[inline(always)]
    fn x_of(&self) -> &A {
        &self.0
    }

    #[inline(always)]
    fn y_of(&self) -> &B {
        &self.1
    }

    #[inline(always)]
    fn z_of(&self) -> &C {
        &self.2
    }
}

impl<T> AxisAccess for [T; 1] {
    type X = T;
    type Y = Absent;
    type Z = Absent;

    #[inline(always)]
    fn x_of(&self) -> &T {
        &self[0]
    }

    #[inline(always)]
    fn y_of(&self) -> &Absent {
        &ABSENT
    }

    #[inline(always)]
    fn z_of(&self) -> &Absent {
        &ABSENT
    }
}

impl<T> AxisAccess for [T; 2] {
    type X = T;
    type Y = T;
    type Z = Absent;

    #[inline(always)]
    fn x_of(&self) -> &T {
        &self[0]
    }

    #[inline(always)]
    fn y_of(&self) -> &T {
        &self[1]
    }

    #[inline(always)]
    fn z_of(&self) -> &Absent {
        &ABSENT
    }
}

impl<T> AxisAccess for [T; 3] {
    type X = T;
    type Y = T;
    type Z = T;

    #[inline(always)]
    fn x_of(&self) -> &T {
        &self[0]
    }

    #[inline(always)]
    fn y_of(&self) -> &T {
        &self[1]
    }

    #[inline(always)]
    fn z_of(&self) -> &T {
        &self[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuples_fill_missing_with_placeholder() {
        let single = (3u8,);
        assert_eq!(*x_of(&single), 3);
        assert!(core::ptr::eq(y_of(&single), Absent::placeholder()));

        let pair = (1.0f32, 'q');
        assert_eq!(*y_of(&pair), 'q');
        assert_eq!(*z_of(&pair), Absent);

        let triple = (1i8, 2i16, 3i32);
        assert_eq!(*z_of(&triple), 3);
    }

    #[test]
    fn test_arrays() {
        let xy = [4u16, 5];
        assert_eq!((*x_of(&xy), *y_of(&xy), *z_of(&xy)), (4, 5, Absent));

        let xyz = [7i64, 8, 9];
        assert_eq!(Vector::from_axes(&xyz), Vector::new(7, 8, 9));
        assert_eq!(Vector::from_axes(&[1u8]), Vector::new(1u8, Absent, Absent));
    }

    #[test]
    fn test_vectors_expose_their_axes() {
        let v = Vector::new(Absent, 2.5f64, Absent);
        assert_eq!(*y_of(&v), 2.5);
        assert_eq!(*x_of(&v), Absent);
        assert_eq!(Vector::from_axes(&v), v);
        assert_eq!(*z_of(&v.into_base()), Absent);
    }
}
