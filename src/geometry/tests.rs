// src/geometry/tests.rs

#[cfg(test)]
mod tuple_tests {
    use crate::error::CanvasError;
    use crate::geometry::tuple::TUPLE_LEN;
    use crate::geometry::{Point, Tuple, Vector};
    use test_log::test;

    const EPSILON: f64 = 0.00001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn components(t: Tuple) -> [f64; 4] {
        [t.x(), t.y(), t.z(), t.w()]
    }

    #[test]
    fn tuple_with_w_one_is_a_point_not_a_vector() {
        let t = Tuple::new(4.3, -4.2, 3.1, 1.0);
        assert!(Point::is_point(&t));
        assert!(!Vector::is_vector(&t));
    }

    #[test]
    fn tuple_with_w_zero_is_a_vector_not_a_point() {
        let t = Tuple::new(4.3, -4.2, 3.1, 0.0);
        assert!(Vector::is_vector(&t));
        assert!(!Point::is_point(&t));
    }

    #[test]
    fn constructors_pin_w() {
        assert_eq!(Point::new(4.0, -4.0, 3.0).w(), 1.0);
        assert_eq!(Vector::new(4.0, -4.0, 3.0).w(), 0.0);
        assert_eq!(Tuple::from(Point::new(4.0, -4.0, 3.0)).w(), 1.0);
        assert_eq!(Tuple::from(Vector::new(4.0, -4.0, 3.0)).w(), 0.0);
    }

    #[test]
    fn narrowing_checks_w() {
        let p = Point::try_from(Tuple::new(1.0, 2.0, 3.0, 1.0)).unwrap();
        assert_eq!(p, Point::new(1.0, 2.0, 3.0));

        let err = Point::try_from(Tuple::new(1.0, 2.0, 3.0, 2.0)).unwrap_err();
        assert!(matches!(err, CanvasError::InvalidComponent { kind: "Point", .. }));

        let err = Vector::try_from(Tuple::new(1.0, 2.0, 3.0, 1.0)).unwrap_err();
        assert!(matches!(err, CanvasError::InvalidComponent { kind: "Vector", .. }));
    }

    #[test]
    fn adding_and_subtracting_tuples() {
        let sum = Tuple::new(3.0, -2.0, 5.0, 1.0) + Tuple::new(-2.0, 3.0, 1.0, 0.0);
        assert_eq!(components(sum), [1.0, 1.0, 6.0, 1.0]);

        let diff = Tuple::new(3.0, 6.0, 7.0, 2.0) - Tuple::new(5.0, 2.0, 7.0, -4.0);
        assert_eq!(components(diff), [-2.0, 4.0, 0.0, 6.0]);
    }

    #[test]
    fn mixed_point_vector_arithmetic_keeps_types() {
        let v = Vector::new(-2.0, 3.0, 1.0);
        let p = Point::new(3.0, -2.0, 5.0);
        let from_vector: Point = v + p;
        let from_point: Point = p + v;
        assert_eq!(from_vector, Point::new(1.0, 1.0, 6.0));
        assert_eq!(from_point, Point::new(1.0, 1.0, 6.0));

        let displacement: Vector = Point::new(3.0, 2.0, 1.0) - Point::new(5.0, 6.0, 7.0);
        assert_eq!(displacement, Vector::new(-2.0, -4.0, -6.0));

        let moved: Point = Point::new(3.0, 2.0, 1.0) - Vector::new(5.0, 6.0, 7.0);
        assert_eq!(moved, Point::new(-2.0, -4.0, -6.0));

        let sum: Vector = Vector::new(3.0, 2.0, 1.0) + Vector::new(5.0, 6.0, 7.0);
        assert_eq!(sum, Vector::new(8.0, 8.0, 8.0));

        let diff: Vector = Vector::new(3.0, 2.0, 1.0) - Vector::new(5.0, 6.0, 7.0);
        assert_eq!(diff, Vector::new(-2.0, -4.0, -6.0));
    }

    #[test]
    fn negation() {
        assert_eq!(
            Vector::zero() - Vector::new(1.0, -2.0, 3.0),
            Vector::new(-1.0, 2.0, -3.0)
        );
        assert_eq!(
            components(-Tuple::new(1.0, -2.0, 3.0, -4.0)),
            [-1.0, 2.0, -3.0, 4.0]
        );
        assert_eq!(-Vector::new(1.0, -2.0, 3.0), Vector::new(-1.0, 2.0, -3.0));

        let negated = -Point::new(1.0, -2.0, 3.0);
        assert_eq!(negated, Point::new(-1.0, 2.0, -3.0));
        assert_eq!(Tuple::from(negated).w(), 1.0);
    }

    #[test]
    fn scaling() {
        let t = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(components(t * 3.5), [3.5, -7.0, 10.5, -14.0]);
        assert_eq!(components(t * 0.5), [0.5, -1.0, 1.5, -2.0]);
        assert_eq!(components(t / 2.0), [0.5, -1.0, 1.5, -2.0]);

        assert_eq!(Vector::new(1.0, -2.0, 3.0) * 2.0, Vector::new(2.0, -4.0, 6.0));
        assert_eq!(Vector::new(1.0, -2.0, 3.0) / 2.0, Vector::new(0.5, -1.0, 1.5));

        let scaled = Point::new(1.0, -2.0, 3.0) * 2.0;
        assert_eq!(scaled, Point::new(2.0, -4.0, 6.0));
        assert_eq!(scaled.w(), 1.0);
        assert_eq!(Point::new(1.0, -2.0, 3.0) / 2.0, Point::new(0.5, -1.0, 1.5));
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let t = Tuple::new(1.0, -1.0, 0.0, 0.0) / 0.0;
        assert_eq!(t.x(), f64::INFINITY);
        assert_eq!(t.y(), f64::NEG_INFINITY);
        assert!(t.z().is_nan());
    }

    #[test]
    fn magnitude() {
        assert_eq!(Vector::new(1.0, 0.0, 0.0).magnitude(), 1.0);
        assert_eq!(Vector::new(0.0, 0.0, 1.0).magnitude(), 1.0);
        assert!(approx_eq(Vector::new(1.0, 2.0, 3.0).magnitude(), 14f64.sqrt()));
        assert!(approx_eq(Vector::new(-1.0, -2.0, -3.0).magnitude(), 14f64.sqrt()));
        assert!(approx_eq(Tuple::new(1.0, 2.0, 2.0, 4.0).magnitude(), 5.0));
    }

    #[test]
    fn normalize() {
        assert_eq!(Vector::new(4.0, 0.0, 0.0).normalize(), Vector::new(1.0, 0.0, 0.0));

        let n = Vector::new(1.0, 2.0, 3.0).normalize();
        let root = 14f64.sqrt();
        assert!(approx_eq(n.x, 1.0 / root));
        assert!(approx_eq(n.y, 2.0 / root));
        assert!(approx_eq(n.z, 3.0 / root));

        for v in [
            Vector::new(1.0, 2.0, 3.0),
            Vector::new(-0.3, 12.0, 7.5),
            Vector::new(1e-3, 0.0, -4e3),
        ] {
            assert!(approx_eq(v.normalize().magnitude(), 1.0), "{v}");
        }

        let t = Tuple::new(0.0, 3.0, 0.0, 4.0).normalize();
        assert!(approx_eq(t.y(), 0.6));
        assert!(approx_eq(t.w(), 0.8));
    }

    #[test]
    fn normalizing_zero_yields_nan() {
        let n = Vector::zero().normalize();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn dot_and_cross_products() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(2.0, 3.0, 4.0);
        assert_eq!(a.dot(b), 20.0);
        assert_eq!(a.cross(b), Vector::new(-1.0, 2.0, -1.0));
        assert_eq!(b.cross(a), Vector::new(1.0, -2.0, 1.0));
        assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn equality_is_exact() {
        let a = Tuple::new(0.1 + 0.2, 0.0, 0.0, 0.0);
        let b = Tuple::new(0.3, 0.0, 0.0, 0.0);
        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    #[test]
    fn indexed_access_is_bounded() {
        let t = Tuple::new(1.0, 2.0, 3.0, 4.0);
        for i in 0..4 {
            assert_eq!(t.get(i).unwrap(), (i + 1) as f64);
        }
        assert_eq!(t.get(4), Err(CanvasError::IndexOutOfRange(4)));
        assert_eq!(
            t.get(7).unwrap_err().to_string(),
            format!("Tuple index 7 out of range 0..{}", TUPLE_LEN)
        );
    }

    #[test]
    fn setters_write_individual_slots() {
        let mut t = Tuple::zero();
        t.set_x(1.0);
        t.set_y(2.0);
        t.set_z(3.0);
        t.set_w(1.0);
        assert_eq!(Point::try_from(t).unwrap(), Point::new(1.0, 2.0, 3.0));
    }
}
