//! `Vector`: the public axis-sparse vector type.
//!
//! `Vector<X, Y, Z>` is a transparent wrapper over [`AxisBase`]; the axes are
//! read by name (`v.x`, `v.y`, `v.z`) through `Deref`. Any of the three type
//! parameters may be [`Absent`], in which case that axis stores nothing and
//! arithmetic collapses around it:
//!
//! ```rust
//! use axial::{Absent, Vector};
//!
//! let planar = Vector::new(1.0f32, 2.0f32, Absent);
//! let lift = Vector::new(Absent, 0.5f32, 3.0f32);
//!
//! // Y is added, X and Z pass through from whichever side has them.
//! let sum = planar + lift;
//! assert_eq!(sum, Vector::new(1.0, 2.5, 3.0));
//! ```

use core::fmt;
use core::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::access::AxisAccess;
use crate::axis::Axis;
use crate::{Absent, AxisBase};

#[cfg(feature = "proptest")]
mod arbitrary;
mod construct;
mod dot;
mod fill;
mod fmod;
mod ops;

pub use dot::{dot, mag2, Dot};
pub use fill::FromComponent;
pub use fmod::{fmod, FloatRem};

/// A vector whose X, Y and Z axes are each either an element type or [`Absent`].
///
/// The defaults make `Vector<T>` a one-axis vector and `Vector<T, T>` a planar one.
#[repr(transparent)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Vector<X = Absent, Y = Absent, Z = Absent>(AxisBase<X, Y, Z>);

impl<X, Y, Z> Vector<X, Y, Z> {
    /// Creates a vector from its three axes in logical order.
    ///
    /// Pass [`Absent`] for axes that should not exist; the type is inferred
    /// from the arguments.
    #[inline(always)]
    pub const fn new(x: X, y: Y, z: Z) -> Self {
        Vector(AxisBase::from_parts(x, y, z))
    }

    /// Wraps existing storage.
    #[inline(always)]
    pub const fn from_base(base: AxisBase<X, Y, Z>) -> Self {
        Vector(base)
    }

    /// Unwraps the storage.
    #[inline(always)]
    pub fn into_base(self) -> AxisBase<X, Y, Z> {
        self.0
    }

    /// Splits the vector into its three axes.
    #[inline(always)]
    pub fn into_parts(self) -> (X, Y, Z) {
        self.0.into_parts()
    }

    /// Builds a vector from anything implementing the accessor protocol.
    ///
    /// ```rust
    /// use axial::{Absent, Vector};
    ///
    /// let v = Vector::from_axes(&(4u8, 5u8));
    /// assert_eq!(v, Vector::new(4, 5, Absent));
    /// ```
    #[inline]
    pub fn from_axes<A>(source: &A) -> Self
    where
        A: AxisAccess<X = X, Y = Y, Z = Z> + ?Sized,
        X: Clone,
        Y: Clone,
        Z: Clone,
    {
        Self::new(
            source.x_of().clone(),
            source.y_of().clone(),
            source.z_of().clone(),
        )
    }
}

impl<X: Axis, Y: Axis, Z: Axis> Vector<X, Y, Z> {
    /// Whether X, Y and Z are present.
    pub const PRESENT: [bool; 3] = AxisBase::<X, Y, Z>::PRESENT;

    /// Number of present axes.
    pub const PRESENT_COUNT: usize = AxisBase::<X, Y, Z>::PRESENT_COUNT;
}

impl<X, Y, Z> Deref for Vector<X, Y, Z> {
    type Target = AxisBase<X, Y, Z>;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<X, Y, Z> DerefMut for Vector<X, Y, Z> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<X, Y, Z> From<AxisBase<X, Y, Z>> for Vector<X, Y, Z> {
    #[inline(always)]
    fn from(base: AxisBase<X, Y, Z>) -> Self {
        Vector(base)
    }
}

impl<X: fmt::Display, Y: fmt::Display, Z: fmt::Display> fmt::Display for Vector<X, Y, Z> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

/// Builds a [`Vector`] naming only its present axes.
///
/// Axes must appear in `x`, `y`, `z` order; omitted axes are [`Absent`].
///
/// ```rust
/// use axial::{vector, Absent, Vector};
///
/// let v = vector![x: 1i32, z: 3i32];
/// assert_eq!(v, Vector::new(1, Absent, 3));
///
/// let empty = vector![];
/// assert_eq!(empty, Vector::new(Absent, Absent, Absent));
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new($crate::Absent, $crate::Absent, $crate::Absent)
    };
    (x: $x:expr $(,)?) => {
        $crate::Vector::new($x, $crate::Absent, $crate::Absent)
    };
    (y: $y:expr $(,)?) => {
        $crate::Vector::new($crate::Absent, $y, $crate::Absent)
    };
    (z: $z:expr $(,)?) => {
        $crate::Vector::new($crate::Absent, $crate::Absent, $z)
    };
    (x: $x:expr, y: $y:expr $(,)?) => {
        $crate::Vector::new($x, $y, $crate::Absent)
    };
    (x: $x:expr, z: $z:expr $(,)?) => {
        $crate::Vector::new($x, $crate::Absent, $z)
    };
    (y: $y:expr, z: $z:expr $(,)?) => {
        $crate::Vector::new($crate::Absent, $y, $z)
    };
    (x: $x:expr, y: $y:expr, z: $z:expr $(,)?) => {
        $crate::Vector::new($x, $y, $z)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_infers_absent_axes() {
        let v = Vector::new(1.0f64, Absent, 2u8);
        let _: &Vector<f64, Absent, u8> = &v;
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, Absent);
        assert_eq!(v.z, 2);
    }

    #[test]
    fn test_transparent_over_storage() {
        use core::mem::size_of;
        assert_eq!(size_of::<Vector>(), 0);
        assert_eq!(size_of::<Vector<f32>>(), 4);
        assert_eq!(size_of::<Vector<f32, f32>>(), 8);
        assert_eq!(size_of::<Vector<u8, u32, u64>>(), size_of::<AxisBase<u8, u32, u64>>());
    }

    #[test]
    fn test_presence_constants() {
        assert_eq!(Vector::<Absent, i32, i32>::PRESENT, [false, true, true]);
        assert_eq!(Vector::<Absent, i32, i32>::PRESENT_COUNT, 2);
        assert_eq!(Vector::<Absent, Absent, Absent>::PRESENT_COUNT, 0);
    }

    #[test]
    fn test_field_access_and_update() {
        let mut v = Vector::new(1i32, 2i32, 3i32);
        v.y = 20;
        assert_eq!(v.into_parts(), (1, 20, 3));
    }

    #[test]
    fn test_base_round_trip() {
        let base = AxisBase::from_parts(Absent, 5u16, Absent);
        let v: Vector<Absent, u16, Absent> = base.into();
        assert_eq!(v.into_base(), base);
        assert_eq!(Vector::from_base(base).y, 5);
    }

    #[test]
    fn test_display_marks_absent_axes() {
        assert_eq!(Vector::new(1, Absent, 3).to_string(), "(1, _, 3)");
        assert_eq!(vector![].to_string(), "(_, _, _)");
    }

    #[test]
    fn test_vector_macro_subsets() {
        assert_eq!(vector![x: 1u8], Vector::new(1u8, Absent, Absent));
        assert_eq!(vector![y: 2u8], Vector::new(Absent, 2u8, Absent));
        assert_eq!(vector![z: 3u8], Vector::new(Absent, Absent, 3u8));
        assert_eq!(vector![x: 1u8, y: 2u8], Vector::new(1u8, 2u8, Absent));
        assert_eq!(vector![y: 2u8, z: 3u8,], Vector::new(Absent, 2u8, 3u8));
        assert_eq!(vector![x: 1u8, y: 2u8, z: 3u8], Vector::new(1u8, 2u8, 3u8));
    }

    #[test]
    fn test_serde_round_trip() {
        let v = Vector::new(1.5f64, Absent, -2i32);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":null,"z":-2}"#);

        let back: Vector<f64, Absent, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
