//! Slot ordering: which physical position each logical axis occupies.
//!
//! Slots are ranked by descending [`Axis::SIZE`]; equal sizes keep the fixed
//! priority X, then Y, then Z. The rank of an axis is the number of other axes
//! that precede it, computed from three pairwise three-way comparisons.
//!
//! The mapping from axes to slots is a bijection, so [`axis_at_slot`] is its
//! exact inverse.

use core::cmp::Ordering;
use core::marker::PhantomData;

use super::{Axis, AxisName};

#[inline(always)]
const fn three_way(a: usize, b: usize) -> Ordering {
    if a > b {
        Ordering::Greater
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Returns the physical slot of `axis` given the ordering sizes of X, Y and Z.
#[inline]
pub const fn slot_of(sizes: [usize; 3], axis: AxisName) -> usize {
    let xy = three_way(sizes[0], sizes[1]);
    let xz = three_way(sizes[0], sizes[2]);
    let yz = three_way(sizes[1], sizes[2]);

    // An earlier axis wins ties, so it only yields its place when strictly smaller.
    match axis {
        AxisName::X => xy.is_lt() as usize + xz.is_lt() as usize,
        AxisName::Y => xy.is_ge() as usize + yz.is_lt() as usize,
        AxisName::Z => xz.is_ge() as usize + yz.is_ge() as usize,
    }
}

/// Returns the slots of X, Y and Z, in that order.
#[inline]
pub const fn slots(sizes: [usize; 3]) -> [usize; 3] {
    [
        slot_of(sizes, AxisName::X),
        slot_of(sizes, AxisName::Y),
        slot_of(sizes, AxisName::Z),
    ]
}

/// Returns the logical axis stored at physical `slot`, or `None` if `slot > 2`.
#[inline]
pub const fn axis_at_slot(sizes: [usize; 3], slot: usize) -> Option<AxisName> {
    let assigned = slots(sizes);
    let mut i = 0;
    while i < 3 {
        if assigned[i] == slot {
            return AxisName::from_index(i);
        }
        i += 1;
    }
    None
}

/// Slot assignment for a concrete triple of axis types.
///
/// ```rust
/// use axial::{Absent, AxisName, AxisOrder};
///
/// type Order = AxisOrder<u8, Absent, u64>;
/// assert_eq!(Order::SLOTS, [1, 2, 0]);
/// assert_eq!(Order::AT_SLOT, [AxisName::Z, AxisName::X, AxisName::Y]);
/// ```
pub struct AxisOrder<X, Y, Z>(PhantomData<fn() -> (X, Y, Z)>);

impl<X: Axis, Y: Axis, Z: Axis> AxisOrder<X, Y, Z> {
    /// Ordering sizes of X, Y and Z.
    pub const SIZES: [usize; 3] = [X::SIZE, Y::SIZE, Z::SIZE];

    /// Physical slot of X, Y and Z.
    pub const SLOTS: [usize; 3] = slots(Self::SIZES);

    /// Logical axis held by slot 0, 1 and 2.
    pub const AT_SLOT: [AxisName; 3] = {
        let sizes = Self::SIZES;
        let mut out = [AxisName::X; 3];
        let mut i = 0;
        while i < 3 {
            if let Some(axis) = AxisName::from_index(i) {
                out[slot_of(sizes, axis)] = axis;
            }
            i += 1;
        }
        out
    };

    /// Physical slot of `axis`.
    #[inline(always)]
    pub const fn slot(axis: AxisName) -> usize {
        Self::SLOTS[axis.index()]
    }

    /// Logical axis at `slot`, or `None` if `slot > 2`.
    #[inline(always)]
    pub const fn axis(slot: usize) -> Option<AxisName> {
        axis_at_slot(Self::SIZES, slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Absent;

    #[test]
    fn test_largest_first() {
        assert_eq!(slots([1, 4, 8]), [2, 1, 0]);
        assert_eq!(slots([8, 1, 4]), [0, 2, 1]);
        assert_eq!(slots([4, 8, 1]), [1, 0, 2]);
    }

    #[test]
    fn test_ties_prefer_x_then_y() {
        assert_eq!(slots([4, 4, 4]), [0, 1, 2]);
        assert_eq!(slots([1, 8, 8]), [2, 0, 1]);
        assert_eq!(slots([2, 1, 2]), [0, 2, 1]);
    }

    #[test]
    fn test_slot_axis_round_trip_is_identity() {
        let candidates = [1usize, 2, 4, 8];
        for &sx in &candidates {
            for &sy in &candidates {
                for &sz in &candidates {
                    let sizes = [sx, sy, sz];
                    let assigned = slots(sizes);

                    let mut seen = [false; 3];
                    for slot in assigned {
                        assert!(slot < 3);
                        assert!(!seen[slot], "slot {slot} assigned twice for {sizes:?}");
                        seen[slot] = true;
                    }

                    for axis in AxisName::ALL {
                        assert_eq!(axis_at_slot(sizes, slot_of(sizes, axis)), Some(axis));
                    }
                }
            }
        }
    }

    #[test]
    fn test_axis_at_slot_out_of_range() {
        assert_eq!(axis_at_slot([1, 2, 4], 3), None);
        assert_eq!(AxisOrder::<u8, u8, u8>::axis(7), None);
    }

    #[test]
    fn test_axis_order_for_types() {
        type Order = AxisOrder<u8, u32, u64>;
        assert_eq!(Order::SIZES, [1, 4, 8]);
        assert_eq!(Order::SLOTS, [2, 1, 0]);
        assert_eq!(Order::AT_SLOT, [AxisName::Z, AxisName::Y, AxisName::X]);
        assert_eq!(Order::slot(AxisName::Z), 0);
        assert_eq!(Order::axis(2), Some(AxisName::X));
    }

    #[test]
    fn test_absent_axes_sort_with_bytes() {
        // Absent ties with a one-byte element and keeps logical priority.
        type Order = AxisOrder<Absent, u8, Absent>;
        assert_eq!(Order::SLOTS, [0, 1, 2]);
        type Sparse = AxisOrder<Absent, f64, Absent>;
        assert_eq!(Sparse::SLOTS, [1, 0, 2]);
    }
}
