use axial::{dot, fmod, mag2, Absent, Vector};
use proptest::prelude::*;

fn full() -> impl Strategy<Value = Vector<i64, i64, i64>> {
    (-10_000i64..10_000, -10_000i64..10_000, -10_000i64..10_000)
        .prop_map(|(x, y, z)| Vector::new(x, y, z))
}

fn without_y() -> impl Strategy<Value = Vector<i64, Absent, i64>> {
    (-10_000i64..10_000, -10_000i64..10_000).prop_map(|(x, z)| Vector::new(x, Absent, z))
}

proptest! {
    #[test]
    fn test_dot_with_self_is_mag2(v in full()) {
        prop_assert_eq!(dot(v, v), mag2(v));
        prop_assert!(mag2(v) >= 0);
    }

    #[test]
    fn test_dot_is_symmetric(a in full(), b in without_y()) {
        prop_assert_eq!(dot(a, b), dot(b, a));
        prop_assert_eq!(dot(a, b), a.x * b.x + a.z * b.z);
    }

    #[test]
    fn test_absent_y_passes_through(v in without_y(), w in full()) {
        let sum = v + w;
        prop_assert_eq!(sum.y, w.y);
        prop_assert_eq!(sum.x, v.x + w.x);

        let diff = v - w;
        prop_assert_eq!(diff.y, w.y);
        prop_assert_eq!(diff.z, v.z - w.z);
    }

    #[test]
    fn test_scaling_keeps_absent_axes(v in without_y(), k in -100i64..100) {
        let scaled: Vector<i64, Absent, i64> = v * k;
        prop_assert_eq!(scaled.into_parts(), (v.x * k, Absent, v.z * k));

        let left: Vector<i64, Absent, i64> = k * v;
        prop_assert_eq!(left, scaled);
    }

    #[test]
    fn test_splat_then_slice_agree(value in any::<i32>()) {
        let splat = Vector::<i32, Absent, i32>::splat(value);
        let sliced = Vector::<i32, Absent, i32>::try_from_slice(&[value, value]).unwrap();
        prop_assert_eq!(splat, sliced);
    }

    #[test]
    fn test_fmod_stays_below_divisor(x in -1.0e6f64..1.0e6, d in 0.5f64..100.0) {
        let r = fmod(Vector::new(x, Absent, Absent), d);
        prop_assert!(r.x.abs() < d);
        if r.x != 0.0 {
            prop_assert_eq!(r.x < 0.0, x < 0.0);
        }
    }
}
