//! Filling the present axes of a vector from homogeneous components.

use crate::axis::Axis;
use crate::error::AxisError;
use crate::{Absent, AxisBase, Element, Vector};

/// An axis slot that can be filled from a component of type `T`.
///
/// Absent slots consume nothing; present slots consume one component.
pub trait FromComponent<T>: Axis {
    /// Builds the slot from `parts[*cursor]`, advancing the cursor if consumed.
    ///
    /// Callers guarantee that `parts` holds a component for every present slot.
    fn pick(parts: &[T], cursor: &mut usize) -> Self;

    /// Builds the slot from a copy of `value`.
    fn splat(value: &T) -> Self;
}

impl<T> FromComponent<T> for Absent {
    #[inline(always)]
    fn pick(_: &[T], _: &mut usize) -> Self {
        Absent
    }

    #[inline(always)]
    fn splat(_: &T) -> Self {
        Absent
    }
}

impl<T: Element + Clone> FromComponent<T> for T {
    #[inline(always)]
    fn pick(parts: &[T], cursor: &mut usize) -> Self {
        let value = parts[*cursor].clone();
        *cursor += 1;
        value
    }

    #[inline(always)]
    fn splat(value: &T) -> Self {
        value.clone()
    }
}

impl<X: Axis, Y: Axis, Z: Axis> Vector<X, Y, Z> {
    /// Sets every present axis to `value`.
    ///
    /// ```rust
    /// use axial::{Absent, Vector};
    ///
    /// let v = Vector::<f32, Absent, f32>::splat(0.5);
    /// assert_eq!(v, Vector::new(0.5, Absent, 0.5));
    /// ```
    #[inline]
    pub fn splat<T>(value: T) -> Self
    where
        X: FromComponent<T>,
        Y: FromComponent<T>,
        Z: FromComponent<T>,
    {
        Vector::from_base(AxisBase::from_parts(
            X::splat(&value),
            Y::splat(&value),
            Z::splat(&value),
        ))
    }

    /// Fills the present axes, in X, Y, Z order, from `parts`.
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::LengthMismatch`] unless `parts` holds exactly one
    /// component per present axis.
    ///
    /// ```rust
    /// use axial::{Absent, AxisError, Vector};
    ///
    /// let v = Vector::<Absent, i32, i32>::try_from_slice(&[4, 5]).unwrap();
    /// assert_eq!(v, Vector::new(Absent, 4, 5));
    ///
    /// let err = Vector::<i32, i32, i32>::try_from_slice(&[1]).unwrap_err();
    /// assert_eq!(err, AxisError::LengthMismatch { expected: 3, found: 1 });
    /// ```
    pub fn try_from_slice<T>(parts: &[T]) -> Result<Self, AxisError>
    where
        X: FromComponent<T>,
        Y: FromComponent<T>,
        Z: FromComponent<T>,
    {
        let expected = Self::PRESENT_COUNT;
        if parts.len() != expected {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                expected,
                found = parts.len(),
                "component count does not match present axes"
            );
            return Err(AxisError::LengthMismatch {
                expected,
                found: parts.len(),
            });
        }

        let mut cursor = 0;
        let x = X::pick(parts, &mut cursor);
        let y = Y::pick(parts, &mut cursor);
        let z = Z::pick(parts, &mut cursor);
        debug_assert_eq!(cursor, expected);
        Ok(Vector::new(x, y, z))
    }
}

impl<'a, T, X, Y, Z> TryFrom<&'a [T]> for Vector<X, Y, Z>
where
    X: FromComponent<T>,
    Y: FromComponent<T>,
    Z: FromComponent<T>,
{
    type Error = AxisError;

    #[inline]
    fn try_from(parts: &'a [T]) -> Result<Self, Self::Error> {
        Self::try_from_slice(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splat_fills_present_only() {
        let v = Vector::<u8, u8, Absent>::splat(7u8);
        assert_eq!(v.into_parts(), (7, 7, Absent));

        let none = Vector::<Absent, Absent, Absent>::splat(7u8);
        assert_eq!(none, Vector::new(Absent, Absent, Absent));
    }

    #[test]
    fn test_try_from_slice_in_axis_order() {
        let v: Vector<i16, Absent, i16> = Vector::try_from_slice(&[1i16, 2]).unwrap();
        assert_eq!(v.x, 1);
        assert_eq!(v.z, 2);
    }

    #[test]
    fn test_try_from_slice_rejects_wrong_length() {
        let err = Vector::<f32, f32, Absent>::try_from_slice(&[1.0f32, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            AxisError::LengthMismatch {
                expected: 2,
                found: 3
            }
        );

        let empty: &[f32] = &[];
        assert!(Vector::<f32, Absent, Absent>::try_from(empty).is_err());
        assert!(Vector::<Absent, Absent, Absent>::try_from(empty).is_ok());
    }
}
