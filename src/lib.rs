//! # `axial` - Axis-Sparse Generic Vectors
//!
//! A vector type whose X, Y and Z axes are each independently optional.
//! An axis whose type is [`Absent`] stores nothing, and every operator decides
//! at compile time how to collapse around it. One generic type covers every
//! dimension from zero to three, with no runtime tags and no branching.
//!
//! ## Guarantees
//!
//! ### Zero-cost absence
//! - **No storage**: `Absent` is a zero-sized type; a `Vector<f32, Absent, Absent>`
//!   is exactly as large as an `f32`.
//! - **No runtime checks**: which axes exist is part of the type. The per-axis
//!   behaviour of every operator is selected by trait impls, not by `if`.
//!
//! ### Static rejection
//! - **Type-checked operators**: combining two vectors whose overlapping axes
//!   lack an operator does not compile. The same question can be asked as a
//!   boolean with [`can_apply!`].
//! - **No runtime arithmetic errors**: only conversions from dynamically sized
//!   input ([`Vector::try_from_slice`]) return a `Result`.
//!
//! ## Architecture
//!
//! Four layers, each consumed by the one above:
//!
//! 1. **Capability predicates** ([`capability`]): one marker type per operator
//!    and the traits stating that an operator applies (optionally without panicking).
//! 2. **Axis algebra** ([`axis`]): presence of each axis and the size-ordered
//!    slot assignment, ties broken X, then Y, then Z.
//! 3. **Axis base composition** ([`AxisBase`]): the storage struct, named fields
//!    `x`, `y`, `z`, absent slots costing nothing.
//! 4. **Vector facade** ([`Vector`]): constructors for every arity and the
//!    operators, built on the collapsing rules in [`collapse`].
//!
//! ### Collapsing rules
//!
//! For vector ∘ vector operators an axis present on one side only passes
//! through unchanged, and an axis absent on both sides stays absent. Scaling by
//! a scalar and the multiply step of [`dot`] instead drop any axis that is
//! absent on either side.
//!
//! ## Example
//!
//! ```rust
//! use axial::{dot, mag2, vector, Absent, Vector};
//!
//! let ground = vector![x: 3.0f64, y: 4.0f64];
//! let height = vector![z: 12.0f64];
//!
//! let p = ground + height;
//! assert_eq!(p, Vector::new(3.0, 4.0, 12.0));
//! assert_eq!(mag2(p), 169.0);
//!
//! // Scaling leaves absent axes absent.
//! let scaled: Vector<f64, f64, Absent> = ground * 2.0f64;
//! assert_eq!(dot(scaled, ground), 50.0);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod absent;
pub mod access;
pub mod axis;
pub mod base;
pub mod capability;
pub mod collapse;
pub mod error;
pub mod vector;

pub use absent::{Absent, ABSENT};
pub use access::{x_of, y_of, z_of, AxisAccess};
pub use axis::{Axis, AxisName, AxisOrder, Element};
pub use base::AxisBase;
pub use capability::{BinaryNoPanic, BinaryOperator, UnaryNoPanic, UnaryOperator};
pub use collapse::{Annihilate, Combine, CombineUnary, PassThrough};
pub use error::AxisError;
pub use vector::{dot, fmod, mag2, Dot, FloatRem, FromComponent, Vector};

// Compile-time assertions for the zero-cost claims.
const _: () = {
    use core::mem;

    // The marker is a ZST.
    assert!(mem::size_of::<Absent>() == 0);

    // Absent axes add nothing, present axes add exactly their element.
    assert!(mem::size_of::<Vector>() == 0);
    assert!(mem::size_of::<Vector<f32>>() == mem::size_of::<f32>());
    assert!(mem::size_of::<Vector<Absent, u16, Absent>>() == mem::size_of::<u16>());
    assert!(mem::size_of::<Vector<f64, Absent, f64>>() == 2 * mem::size_of::<f64>());

    // `Vector` is a transparent wrapper over its storage.
    assert!(mem::size_of::<Vector<u8, u32, u64>>() == mem::size_of::<AxisBase<u8, u32, u64>>());
    assert!(mem::align_of::<Vector<u8, u32, u64>>() == mem::align_of::<AxisBase<u8, u32, u64>>());

    // Largest element first, ties in X, Y, Z order.
    assert!(AxisOrder::<u8, u32, u64>::SLOTS[2] == 0);
    assert!(AxisOrder::<u8, u32, u64>::SLOTS[0] == 2);
    assert!(AxisOrder::<f32, f32, f32>::SLOTS[0] == 0);
};
