//! Planar vector object.

use becaps_runtime::{object_table, TypeEntry, OBJECT_TYPES};
use linkme::distributed_slice;

/// Two `f64` coordinates, both 0.0 by default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

object_table! {
    /// Shared operation table of [`Vector2`].
    pub struct Vector2Funcs for Vector2 {
        /// Set both coordinates.
        fn init(Vector2Init { x: f64, y: f64 }) -> () = Vector2::init;
        fn set_x(Vector2SetX { x: f64 }) -> () = Vector2::set_x;
        fn set_y(Vector2SetY { y: f64 }) -> () = Vector2::set_y;
        fn get_x(Vector2GetX {}) -> f64 = Vector2::get_x;
        fn get_y(Vector2GetY {}) -> f64 = Vector2::get_y;
        /// Euclidean norm.
        fn magnitude(Vector2Magnitude {}) -> f64 = Vector2::magnitude;
    }
}

#[distributed_slice(OBJECT_TYPES)]
static VECTOR2_TYPE: TypeEntry = TypeEntry::of::<Vector2>();

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn init(&mut self, params: Vector2Init) {
        self.x = params.x;
        self.y = params.y;
    }

    fn set_x(&mut self, params: Vector2SetX) {
        self.x = params.x;
    }

    fn set_y(&mut self, params: Vector2SetY) {
        self.y = params.y;
    }

    fn get_x(&mut self, _: Vector2GetX) -> f64 {
        self.x
    }

    fn get_y(&mut self, _: Vector2GetY) -> f64 {
        self.y
    }

    fn magnitude(&mut self, _: Vector2Magnitude) -> f64 {
        self.x.hypot(self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use becaps_runtime::{invoke, DynObject, Object, ObjectError, Value};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_init_then_get() {
        for &(x, y) in &[(0.0, 0.0), (3.0, 4.0), (-1.5, 2.25), (1e300, -1e-300)] {
            let mut v = Object::<Vector2>::new();
            invoke!(v.init(x, y));
            assert_eq!(invoke!(v.get_x()), x);
            assert_eq!(invoke!(v.get_y()), y);
        }
    }

    #[test]
    fn test_magnitude_after_setters() {
        let mut v = Object::<Vector2>::new();
        invoke!(v.init(3.0, 4.0));
        assert!(approx_eq(invoke!(v.magnitude()), 5.0));

        invoke!(v.set_x(6.0));
        invoke!(v.set_y(8.0));
        assert!(approx_eq(invoke!(v.magnitude()), 10.0));
    }

    #[test]
    fn test_magnitude_at_origin() {
        let mut v = Object::<Vector2>::new();
        invoke!(v.init(0.0, 0.0));
        assert_eq!(invoke!(v.magnitude()), 0.0);
    }

    #[test]
    fn test_magnitude_matches_norm() {
        let samples = [(1.0, 1.0), (-7.5, 2.0), (0.1, 0.2), (12345.678, -0.001), (-3.0, -4.0)];
        for (x, y) in samples {
            let mut v = Object::with_state(Vector2::new(x, y));
            let expected = (x * x + y * y).sqrt();
            assert!(approx_eq(invoke!(v.magnitude()), expected), "({}, {})", x, y);
        }
    }

    #[test]
    fn test_named_args_default_to_zero() {
        let mut v = Object::with_state(Vector2::new(9.0, 9.0));
        invoke!(v.init { y: 2.0 });
        assert_eq!(*v.state(), Vector2::new(0.0, 2.0));
    }

    #[test]
    fn test_instances_are_isolated() {
        let mut a = Object::<Vector2>::new();
        let mut b = Object::<Vector2>::new();
        invoke!(a.init(1.0, 2.0));
        invoke!(b.init(1.0, 2.0));

        invoke!(a.set_x(100.0));
        assert_eq!(invoke!(b.get_x()), 1.0);
        assert_eq!(invoke!(a.get_x()), 100.0);
        assert!(a.shares_table_with(&b));
    }

    #[test]
    fn test_dynamic_dispatch() {
        let mut v = Object::<Vector2>::new();
        v.invoke("init", &[Value::Float(3.0), Value::Float(4.0)]).unwrap();
        let len = v.invoke("magnitude", &[]).unwrap();
        assert!(matches!(len, Value::Float(m) if approx_eq(m, 5.0)));

        let err = v.invoke("set_x", &[]).unwrap_err();
        assert!(matches!(err, ObjectError::Arity { op: "set_x", expected: 1, found: 0, .. }));
    }
}
