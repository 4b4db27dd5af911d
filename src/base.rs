//! `AxisBase`: storage for three independently optional axes.
//!
//! The three slots are plain fields, so an [`Absent`](crate::Absent) slot costs
//! nothing and every axis is reachable by name whatever its physical position.
//!
//! ## Layout
//!
//! The struct uses the default representation, which lets the compiler place
//! the widest fields first. For the primitive element types this is exactly the
//! [`AxisOrder`] slot assignment: largest first, absent slots taking no room.
//! The assignment is also exposed as [`AxisBase::SLOTS`] for code that needs to
//! reason about it explicitly.

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, AxisName, AxisOrder};

/// Storage for the X, Y and Z slots.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct AxisBase<X, Y, Z> {
    /// The X slot.
    pub x: X,
    /// The Y slot.
    pub y: Y,
    /// The Z slot.
    pub z: Z,
}

impl<X, Y, Z> AxisBase<X, Y, Z> {
    /// Creates storage from exact slot values, in logical X, Y, Z order.
    #[inline(always)]
    pub const fn from_parts(x: X, y: Y, z: Z) -> Self {
        Self { x, y, z }
    }

    /// Creates storage from anything convertible into each slot.
    ///
    /// Absent slots take an [`Absent`](crate::Absent) (or `()`) and discard it.
    ///
    /// ```rust
    /// use axial::{Absent, AxisBase};
    ///
    /// let base: AxisBase<f64, Absent, i64> = AxisBase::new(1.5f32, (), 7i32);
    /// assert_eq!(base.x, 1.5);
    /// assert_eq!(base.z, 7);
    /// ```
    #[inline(always)]
    pub fn new(x: impl Into<X>, y: impl Into<Y>, z: impl Into<Z>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    /// Splits the storage into its three slots.
    #[inline(always)]
    pub fn into_parts(self) -> (X, Y, Z) {
        (self.x, self.y, self.z)
    }
}

impl<X: Axis, Y: Axis, Z: Axis> AxisBase<X, Y, Z> {
    /// Physical slot of X, Y and Z.
    pub const SLOTS: [usize; 3] = AxisOrder::<X, Y, Z>::SLOTS;

    /// Whether X, Y and Z are present.
    pub const PRESENT: [bool; 3] = [X::PRESENT, Y::PRESENT, Z::PRESENT];

    /// Number of present axes.
    pub const PRESENT_COUNT: usize = X::PRESENT as usize + Y::PRESENT as usize + Z::PRESENT as usize;

    /// Physical slot of `axis`.
    #[inline(always)]
    pub const fn slot(axis: AxisName) -> usize {
        Self::SLOTS[axis.index()]
    }

    /// Whether `axis` is present.
    #[inline(always)]
    pub const fn has(axis: AxisName) -> bool {
        Self::PRESENT[axis.index()]
    }
}
