//! Axis presence algebra.
//!
//! An axis slot holds either an [`Element`] (a concrete, storable value type)
//! or [`Absent`]. The [`Axis`] trait is implemented for both, and the two
//! implementations are disjoint because `Absent` never implements `Element`.
//! Every dispatch trait in the crate relies on that disjointness to pick the
//! absent or the present behaviour at compile time.
//!
//! ## Core invariant (disjointness)
//!
//! `Absent: Element` must never hold. `Absent` and `Element` are both local to
//! this crate, so the orphan rules keep downstream crates from adding it.

use core::fmt;
use core::num::{Saturating, Wrapping};

use crate::Absent;

/// Physical slot ordering by element size.
pub mod order;

pub use order::{axis_at_slot, slot_of, slots, AxisOrder};

/// A concrete value type that may occupy an axis slot.
///
/// Implemented for the primitive scalars, `bool`, `char`, `Wrapping<T>`,
/// `Saturating<T>` and shared references to elements. Register your own types
/// with [`element!`](crate::element) or an explicit empty `impl`.
pub trait Element {}

/// Registers one or more types as [`Element`]s.
///
/// # Example
///
/// ```rust
/// use axial::{element, Absent, Vector};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Meters(f64);
///
/// element!(Meters);
///
/// let v = Vector::new(Meters(1.5), Absent, Absent);
/// assert_eq!(v.x, Meters(1.5));
/// ```
#[macro_export]
macro_rules! element {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::Element for $ty {})+
    };
}

element!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char);

impl<T: Element> Element for Wrapping<T> {}
impl<T: Element> Element for Saturating<T> {}
impl<'a, T: Element> Element for &'a T {}

/// An axis slot type: either [`Absent`] or an [`Element`].
pub trait Axis: Sized {
    /// Whether the slot stores a value.
    const PRESENT: bool;

    /// Size used for slot ordering. `Absent` counts as 1.
    const SIZE: usize;

    /// Returns [`Self::PRESENT`] for a value of this slot type.
    #[inline(always)]
    fn is_present(&self) -> bool {
        Self::PRESENT
    }
}

impl Axis for Absent {
    const PRESENT: bool = false;
    const SIZE: usize = 1;
}

impl<T: Element> Axis for T {
    const PRESENT: bool = true;
    const SIZE: usize = core::mem::size_of::<T>();
}

/// Returns the ordering size of an axis type: 1 for [`Absent`], `size_of::<T>()` otherwise.
#[inline(always)]
pub const fn size_of_axis<T: Axis>() -> usize {
    T::SIZE
}

/// Logical axis names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AxisName {
    /// The first logical axis.
    X,
    /// The second logical axis.
    Y,
    /// The third logical axis.
    Z,
}

impl AxisName {
    /// All axes in priority order.
    pub const ALL: [AxisName; 3] = [AxisName::X, AxisName::Y, AxisName::Z];

    /// Position of the axis in logical order (X = 0).
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            AxisName::X => 0,
            AxisName::Y => 1,
            AxisName::Z => 2,
        }
    }

    /// Inverse of [`AxisName::index`].
    #[inline]
    pub const fn from_index(index: usize) -> Option<AxisName> {
        match index {
            0 => Some(AxisName::X),
            1 => Some(AxisName::Y),
            2 => Some(AxisName::Z),
            _ => None,
        }
    }
}

impl fmt::Display for AxisName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AxisName::X => "x",
            AxisName::Y => "y",
            AxisName::Z => "z",
        })
    }
}
