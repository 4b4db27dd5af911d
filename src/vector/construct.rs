//! Reduced-arity construction.
//!
//! A vector converts from a tuple of the values of its present axes, in X, Y,
//! Z order. Shorter tuples are accepted too: trailing present axes that are
//! left out take their `Default`. The full three-tuple, with `Absent` in the
//! absent positions, is always accepted.
//!
//! | present axes | accepted tuples                      |
//! |--------------|--------------------------------------|
//! | X Y Z        | `(x, y, z)`, `(x, y)`, `(x,)`        |
//! | X Y          | `(x, y)`, `(x,)`                     |
//! | X Z          | `(x, z)`, `(x,)`                     |
//! | Y Z          | `(y, z)`, `(y,)`                     |
//! | X / Y / Z    | `(x,)` / `(y,)` / `(z,)`             |
//! | none         | `Default` only                       |
//!
//! The impls are told apart by `Element` bounds: `Absent` never satisfies them,
//! so each presence pattern gets exactly one impl per arity.

use crate::{Absent, Element, Vector};

impl<X, Y, Z> From<(X, Y, Z)> for Vector<X, Y, Z> {
    #[inline(always)]
    fn from((x, y, z): (X, Y, Z)) -> Self {
        Vector::new(x, y, z)
    }
}

// X Y Z

impl<X, Y, Z> From<(X, Y)> for Vector<X, Y, Z>
where
    X: Element,
    Y: Element,
    Z: Element + Default,
{
    #[inline(always)]
    fn from((x, y): (X, Y)) -> Self {
        Vector::new(x, y, Z::default())
    }
}

impl<X, Y, Z> From<(X,)> for Vector<X, Y, Z>
where
    X: Element,
    Y: Element + Default,
    Z: Element + Default,
{
    #[inline(always)]
    fn from((x,): (X,)) -> Self {
        Vector::new(x, Y::default(), Z::default())
    }
}

// X Y

impl<X: Element, Y: Element> From<(X, Y)> for Vector<X, Y, Absent> {
    #[inline(always)]
    fn from((x, y): (X, Y)) -> Self {
        Vector::new(x, y, Absent)
    }
}

impl<X, Y> From<(X,)> for Vector<X, Y, Absent>
where
    X: Element,
    Y: Element + Default,
{
    #[inline(always)]
    fn from((x,): (X,)) -> Self {
        Vector::new(x, Y::default(), Absent)
    }
}

// X Z

impl<X: Element, Z: Element> From<(X, Z)> for Vector<X, Absent, Z> {
    #[inline(always)]
    fn from((x, z): (X, Z)) -> Self {
        Vector::new(x, Absent, z)
    }
}

impl<X, Z> From<(X,)> for Vector<X, Absent, Z>
where
    X: Element,
    Z: Element + Default,
{
    #[inline(always)]
    fn from((x,): (X,)) -> Self {
        Vector::new(x, Absent, Z::default())
    }
}

// Y Z

impl<Y: Element, Z: Element> From<(Y, Z)> for Vector<Absent, Y, Z> {
    #[inline(always)]
    fn from((y, z): (Y, Z)) -> Self {
        Vector::new(Absent, y, z)
    }
}

impl<Y, Z> From<(Y,)> for Vector<Absent, Y, Z>
where
    Y: Element,
    Z: Element + Default,
{
    #[inline(always)]
    fn from((y,): (Y,)) -> Self {
        Vector::new(Absent, y, Z::default())
    }
}

// Single axis

impl<X: Element> From<(X,)> for Vector<X, Absent, Absent> {
    #[inline(always)]
    fn from((x,): (X,)) -> Self {
        Vector::new(x, Absent, Absent)
    }
}

impl<Y: Element> From<(Y,)> for Vector<Absent, Y, Absent> {
    #[inline(always)]
    fn from((y,): (Y,)) -> Self {
        Vector::new(Absent, y, Absent)
    }
}

impl<Z: Element> From<(Z,)> for Vector<Absent, Absent, Z> {
    #[inline(always)]
    fn from((z,): (Z,)) -> Self {
        Vector::new(Absent, Absent, z)
    }
}
