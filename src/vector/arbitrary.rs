//! `proptest` strategies for vectors, enabled by the `proptest` feature.

use proptest::arbitrary::Arbitrary;
use proptest::strategy::{BoxedStrategy, Just, Strategy};

use crate::{Absent, Vector};

impl Arbitrary for Absent {
    type Parameters = ();
    type Strategy = Just<Absent>;

    fn arbitrary_with((): ()) -> Self::Strategy {
        Just(Absent)
    }
}

impl<X, Y, Z> Arbitrary for Vector<X, Y, Z>
where
    X: Arbitrary + 'static,
    Y: Arbitrary + 'static,
    Z: Arbitrary + 'static,
{
    type Parameters = (X::Parameters, Y::Parameters, Z::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((px, py, pz): Self::Parameters) -> Self::Strategy {
        (
            X::arbitrary_with(px),
            Y::arbitrary_with(py),
            Z::arbitrary_with(pz),
        )
            .prop_map(|(x, y, z)| Vector::new(x, y, z))
            .boxed()
    }
}
