//! Operator overloads.
//!
//! * vector ∘ vector (`+ - * / %`): per axis under [`PassThrough`].
//! * vector ∘ scalar and scalar ∘ vector (`* / %`): per axis under
//!   [`Annihilate`], so an absent axis stays absent whatever the scalar is.
//! * `-v` and `!v`: per axis, absent stays absent.
//!
//! A scalar is any [`Element`]; on the left-hand side only the primitive
//! numeric types are supported, since a foreign type cannot be the receiver of
//! a blanket impl.

use crate::capability::op;
use crate::collapse::{Annihilate, Combine, CombineUnary, Combined, CombinedUnary, PassThrough};
use crate::{Element, Vector};

macro_rules! elementwise {
    ($($tr:ident :: $method:ident => $op:ident;)+) => {$(
        impl<X, Y, Z, X2, Y2, Z2> core::ops::$tr<Vector<X2, Y2, Z2>> for Vector<X, Y, Z>
        where
            X: Combine<op::$op, X2>,
            Y: Combine<op::$op, Y2>,
            Z: Combine<op::$op, Z2>,
        {
            type Output = Vector<
                Combined<op::$op, X, X2>,
                Combined<op::$op, Y, Y2>,
                Combined<op::$op, Z, Z2>,
            >;

            #[inline(always)]
            fn $method(self, rhs: Vector<X2, Y2, Z2>) -> Self::Output {
                let (x, y, z) = self.into_parts();
                let (rx, ry, rz) = rhs.into_parts();
                Vector::new(
                    <X as Combine<op::$op, X2, PassThrough>>::combine(x, rx),
                    <Y as Combine<op::$op, Y2, PassThrough>>::combine(y, ry),
                    <Z as Combine<op::$op, Z2, PassThrough>>::combine(z, rz),
                )
            }
        }
    )+};
}

macro_rules! scaled {
    ($($tr:ident :: $method:ident => $op:ident;)+) => {$(
        impl<X, Y, Z, K> core::ops::$tr<K> for Vector<X, Y, Z>
        where
            K: Element + Clone,
            X: Combine<op::$op, K, Annihilate>,
            Y: Combine<op::$op, K, Annihilate>,
            Z: Combine<op::$op, K, Annihilate>,
        {
            type Output = Vector<
                Combined<op::$op, X, K, Annihilate>,
                Combined<op::$op, Y, K, Annihilate>,
                Combined<op::$op, Z, K, Annihilate>,
            >;

            #[inline(always)]
            fn $method(self, k: K) -> Self::Output {
                let (x, y, z) = self.into_parts();
                Vector::new(
                    <X as Combine<op::$op, K, Annihilate>>::combine(x, k.clone()),
                    <Y as Combine<op::$op, K, Annihilate>>::combine(y, k.clone()),
                    <Z as Combine<op::$op, K, Annihilate>>::combine(z, k),
                )
            }
        }
    )+};
}

macro_rules! scaling {
    ($tr:ident :: $method:ident => $op:ident for $($s:ty),+) => {$(
        impl<X, Y, Z> core::ops::$tr<Vector<X, Y, Z>> for $s
        where
            $s: Combine<op::$op, X, Annihilate>
                + Combine<op::$op, Y, Annihilate>
                + Combine<op::$op, Z, Annihilate>,
        {
            type Output = Vector<
                Combined<op::$op, $s, X, Annihilate>,
                Combined<op::$op, $s, Y, Annihilate>,
                Combined<op::$op, $s, Z, Annihilate>,
            >;

            #[inline(always)]
            fn $method(self, rhs: Vector<X, Y, Z>) -> Self::Output {
                let (x, y, z) = rhs.into_parts();
                Vector::new(
                    <$s as Combine<op::$op, X, Annihilate>>::combine(self, x),
                    <$s as Combine<op::$op, Y, Annihilate>>::combine(self, y),
                    <$s as Combine<op::$op, Z, Annihilate>>::combine(self, z),
                )
            }
        }
    )+};
}

macro_rules! unary {
    ($($tr:ident :: $method:ident => $op:ident;)+) => {$(
        impl<X, Y, Z> core::ops::$tr for Vector<X, Y, Z>
        where
            X: CombineUnary<op::$op>,
            Y: CombineUnary<op::$op>,
            Z: CombineUnary<op::$op>,
        {
            type Output = Vector<
                CombinedUnary<op::$op, X>,
                CombinedUnary<op::$op, Y>,
                CombinedUnary<op::$op, Z>,
            >;

            #[inline(always)]
            fn $method(self) -> Self::Output {
                let (x, y, z) = self.into_parts();
                Vector::new(
                    <X as CombineUnary<op::$op>>::combine_unary(x),
                    <Y as CombineUnary<op::$op>>::combine_unary(y),
                    <Z as CombineUnary<op::$op>>::combine_unary(z),
                )
            }
        }
    )+};
}

elementwise! {
    Add::add => Add;
    Sub::sub => Sub;
    Mul::mul => Mul;
    Div::div => Div;
    Rem::rem => Rem;
}

scaled! {
    Mul::mul => Mul;
    Div::div => Div;
    Rem::rem => Rem;
}

scaling!(Mul::mul => Mul for f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
scaling!(Div::div => Div for f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
scaling!(Rem::rem => Rem for f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

unary! {
    Neg::neg => Neg;
    Not::not => BitNot;
}
