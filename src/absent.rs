//! `Absent`: the zero-sized "no axis" marker.
//!
//! Any axis slot whose element type is `Absent` holds no data. All absent
//! slots share the same stateless value, [`ABSENT`], which accessors hand out
//! when a position does not exist.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Marker for an axis that does not exist.
///
/// `Absent` is a unit struct: it occupies zero bytes and every instance is
/// equal to every other. It never implements [`Element`](crate::Element); the
/// absent and present impls of every dispatch trait rely on that.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Absent;

/// The shared placeholder returned for axes that do not exist.
pub static ABSENT: Absent = Absent;

impl Absent {
    /// Returns the shared placeholder with a `'static` lifetime.
    #[inline(always)]
    pub fn placeholder() -> &'static Absent {
        &ABSENT
    }
}

impl From<()> for Absent {
    #[inline(always)]
    fn from((): ()) -> Self {
        Absent
    }
}

impl fmt::Display for Absent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_zero_sized() {
        assert_eq!(core::mem::size_of::<Absent>(), 0);
        assert_eq!(core::mem::align_of::<Absent>(), 1);
    }

    #[test]
    fn test_absent_placeholder_is_shared() {
        let a = Absent::placeholder();
        let b = Absent::placeholder();
        assert!(core::ptr::eq(a, b));
        assert_eq!(*a, Absent);
    }

    #[test]
    fn test_absent_from_unit() {
        let a: Absent = ().into();
        assert_eq!(a, Absent::default());
        assert_eq!(a.to_string(), "_");
    }
}
