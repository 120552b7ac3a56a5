#[cfg(test)]
mod tests {
    use crate::{
        Coordinate2d, Coordinate2f, Coordinate2i, Coordinate2l, Coordinate3d, Coordinate3f,
        Coordinate3i, Coordinate3l,
        coordinate::tests::{FINITE_F32, FINITE_F64},
    };
    use proptest::prelude::{ProptestConfig, any};
    use proptest::proptest;

    #[test]
    fn test_new_2d() {
        let d = Coordinate2d::new(1.5, -2.25);
        assert_eq!((d.x(), d.y()), (1.5, -2.25));

        let f = Coordinate2f::new(0.1, 7.0);
        assert_eq!((f.x(), f.y()), (0.1, 7.0));

        let i = Coordinate2i::new(-3, 4);
        assert_eq!((i.x(), i.y()), (-3, 4));

        let l = Coordinate2l::new(5_000_000_000, -1);
        assert_eq!((l.x(), l.y()), (5_000_000_000, -1));
    }

    #[test]
    fn test_new_3d() {
        let d = Coordinate3d::new(1.0, 2.0, 3.0);
        assert_eq!((d.x(), d.y(), d.z()), (1.0, 2.0, 3.0));

        let f = Coordinate3f::new(-0.5, 0.0, 0.25);
        assert_eq!((f.x(), f.y(), f.z()), (-0.5, 0.0, 0.25));

        let i = Coordinate3i::new(7, 8, 9);
        assert_eq!((i.x(), i.y(), i.z()), (7, 8, 9));

        let l = Coordinate3l::new(i64::MIN, 0, i64::MAX);
        assert_eq!((l.x(), l.y(), l.z()), (i64::MIN, 0, i64::MAX));
    }

    #[test]
    fn test_new_accepts_extreme_values() {
        let i = Coordinate2i::new(i32::MIN, i32::MAX);
        assert_eq!(i.x(), i32::MIN);
        assert_eq!(i.y(), i32::MAX);

        let d = Coordinate3d::new(f64::INFINITY, f64::NEG_INFINITY, f64::NAN);
        assert_eq!(d.x(), f64::INFINITY);
        assert_eq!(d.y(), f64::NEG_INFINITY);
        assert!(d.z().is_nan());

        // -0.0 の符号ビットも保持される
        let f = Coordinate2f::new(-0.0, f32::MIN_POSITIVE);
        assert!(f.x().is_sign_negative());
        assert_eq!(f.y(), f32::MIN_POSITIVE);
    }

    #[test]
    fn test_const_construction() {
        const ORIGIN: Coordinate3i = Coordinate3i::new(0, 0, 0);
        assert_eq!(ORIGIN.to_array(), [0, 0, 0]);
    }

    #[test]
    fn test_from_array_and_tuple() {
        assert_eq!(Coordinate2i::from([1, 2]), Coordinate2i::new(1, 2));
        assert_eq!(Coordinate2l::from((1, 2)), Coordinate2l::new(1, 2));
        assert_eq!(Coordinate3f::from([1.0, 2.0, 3.0]), Coordinate3f::new(1.0, 2.0, 3.0));
        assert_eq!(Coordinate3d::from((1.0, 2.0, 3.0)), Coordinate3d::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_into_array() {
        let coord = Coordinate3l::new(4, 5, 6);
        let array: [i64; 3] = coord.into();
        assert_eq!(array, [4, 5, 6]);
        assert_eq!(Coordinate2d::new(0.5, 1.5).to_array(), [0.5, 1.5]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn random_test_round_trip_i32(x in any::<i32>(), y in any::<i32>(), z in any::<i32>()) {
            let coord = Coordinate3i::new(x, y, z);
            assert_eq!((coord.x(), coord.y(), coord.z()), (x, y, z));
        }

        #[test]
        fn random_test_round_trip_i64(x in any::<i64>(), y in any::<i64>()) {
            let coord = Coordinate2l::new(x, y);
            assert_eq!((coord.x(), coord.y()), (x, y));
        }

        #[test]
        fn random_test_round_trip_f64(x in FINITE_F64, y in FINITE_F64, z in FINITE_F64) {
            let coord = Coordinate3d::new(x, y, z);
            assert_eq!(coord.x().to_bits(), x.to_bits());
            assert_eq!(coord.y().to_bits(), y.to_bits());
            assert_eq!(coord.z().to_bits(), z.to_bits());
        }

        #[test]
        fn random_test_round_trip_f32(x in FINITE_F32, y in FINITE_F32) {
            let coord = Coordinate2f::new(x, y);
            assert_eq!(coord.x().to_bits(), x.to_bits());
            assert_eq!(coord.y().to_bits(), y.to_bits());
        }
    }
}
