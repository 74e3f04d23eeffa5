//! Vector algebra for game-engine mathematics: 2D/3D/4D vector values and
//! the dot, cross and scalar triple products built on them.

pub mod error;
pub mod random;
pub mod vector;

pub use error::VectorError;
pub use random::RandomSource;
pub use vector::{Vector, Vector2D, Vector3D, Vector4D};

pub mod library {
    use crate::error::VectorError;
    use crate::vector::{Vector, Vector3D};
    use approx::relative_eq;
    use tracing::trace;

    /// Tolerance for comparing computed scalars.
    pub const EPSILON: f32 = 1e-5;

    pub fn dot<V: Vector>(a: V, b: V) -> f32 {
        a.dot(b)
    }

    pub fn cross(a: Vector3D, b: Vector3D) -> Vector3D {
        Vector3D::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    /// May overflow to infinity or underflow to zero for extreme components;
    /// [`magnitude`] and [`normalize`] do not.
    pub fn magnitude_squared<V: Vector>(v: V) -> f32 {
        dot(v, v)
    }

    /// Splits `v` into its largest absolute component `m` and `v / m`. The
    /// rescaled vector has length in `[1, 2]`, so squaring it stays in range
    /// whatever the scale of `v`. `None` for the zero vector.
    fn rescale<V: Vector>(v: V) -> Option<(f32, V)> {
        let m = v.max_abs_component();
        if m == 0.0 {
            return None;
        }
        Some((m, v / m))
    }

    pub fn magnitude<V: Vector>(v: V) -> f32 {
        match rescale(v) {
            Some((m, u)) => m * dot(u, u).sqrt(),
            None => 0.0,
        }
    }

    /// Unit vector in the direction of `v`. The zero vector maps to itself.
    pub fn normalize<V: Vector>(v: V) -> V {
        match rescale(v) {
            Some((_, u)) => u / dot(u, u).sqrt(),
            None => {
                trace!("normalize of zero vector, returning zero");
                V::default()
            }
        }
    }

    /// Like [`normalize`], but a zero vector is an error.
    pub fn try_normalize<V: Vector>(v: V) -> Result<V, VectorError> {
        let (_, u) = rescale(v).ok_or(VectorError::ZeroLength { operation: "normalize" })?;
        Ok(u / dot(u, u).sqrt())
    }

    /// Component of `a` parallel to `b`. Projecting onto the zero vector gives zero.
    pub fn project<V: Vector>(a: V, b: V) -> V {
        match rescale(b) {
            Some((_, u)) => u * (dot(a, u) / dot(u, u)),
            None => {
                trace!("projection onto zero vector, returning zero");
                V::default()
            }
        }
    }

    pub fn try_project<V: Vector>(a: V, b: V) -> Result<V, VectorError> {
        let (_, u) = rescale(b).ok_or(VectorError::ZeroLength { operation: "project" })?;
        Ok(u * (dot(a, u) / dot(u, u)))
    }

    /// Component of `a` perpendicular to `b`; `a - project(a, b)`.
    /// Rejecting from the zero vector leaves `a` unchanged.
    pub fn reject<V: Vector>(a: V, b: V) -> V {
        a - project(a, b)
    }

    pub fn try_reject<V: Vector>(a: V, b: V) -> Result<V, VectorError> {
        match try_project(a, b) {
            Ok(p) => Ok(a - p),
            Err(_) => Err(VectorError::ZeroLength { operation: "reject" }),
        }
    }

    /// `[a, b, c] = dot(cross(a, b), c)`: the signed volume of the
    /// parallelepiped spanned by `a`, `b` and `c`.
    ///
    /// Even permutations of the arguments give the same value, odd
    /// permutations negate it, and adding any combination of `a` and `b`
    /// to `c` leaves it unchanged.
    pub fn scalar_triple(a: Vector3D, b: Vector3D, c: Vector3D) -> f32 {
        dot(cross(a, b), c)
    }

    /// Scalar comparison within [`EPSILON`], absolute near zero and relative
    /// for larger magnitudes.
    pub fn approx_eq(a: f32, b: f32) -> bool {
        relative_eq!(a, b, epsilon = EPSILON, max_relative = EPSILON)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::vector::{Vector2D, Vector4D};
        use approx::{assert_abs_diff_eq, assert_relative_eq};

        #[test]
        fn cross_of_basis_vectors() {
            let x = Vector3D::new(1.0, 0.0, 0.0);
            let y = Vector3D::new(0.0, 1.0, 0.0);
            let z = Vector3D::new(0.0, 0.0, 1.0);
            assert_eq!(cross(x, y), z);
            assert_eq!(cross(y, z), x);
            assert_eq!(cross(z, x), y);
            assert_eq!(cross(y, x), -z);
        }

        #[test]
        fn cross_known_values() {
            let a = Vector3D::new(1.0, 2.0, 3.0);
            let b = Vector3D::new(4.0, 5.0, 6.0);
            assert_eq!(cross(a, b), Vector3D::new(-3.0, 6.0, -3.0));
            assert_eq!(cross(a, a * 2.0), Vector3D::ZERO);
        }

        #[test]
        fn magnitude_of_each_dimension() {
            assert_eq!(magnitude(Vector2D::new(3.0, 4.0)), 5.0);
            assert_relative_eq!(magnitude(Vector3D::new(2.0, 3.0, 6.0)), 7.0, epsilon = 1e-6);
            assert_eq!(magnitude(Vector4D::new(1.0, 1.0, 1.0, 1.0)), 2.0);
            assert_eq!(magnitude_squared(Vector2D::new(3.0, 4.0)), 25.0);
            assert_eq!(magnitude(Vector3D::ZERO), 0.0);
        }

        #[test]
        fn normalize_gives_unit_length() {
            let n = normalize(Vector3D::new(3.0, -4.0, 12.0));
            assert_relative_eq!(magnitude(n), 1.0, epsilon = EPSILON);
            assert_relative_eq!(n, Vector3D::new(3.0, -4.0, 12.0) / 13.0, epsilon = 1e-6);
            let n = normalize(Vector4D::new(0.0, 0.0, 0.0, -2.0));
            assert_eq!(n, Vector4D::new(0.0, 0.0, 0.0, -1.0));
        }

        #[test]
        fn normalize_zero_vector() {
            assert_eq!(normalize(Vector2D::ZERO), Vector2D::ZERO);
            assert_eq!(
                try_normalize(Vector3D::ZERO),
                Err(VectorError::ZeroLength { operation: "normalize" })
            );
            assert_eq!(
                try_normalize(Vector2D::new(0.0, 2.0)),
                Ok(Vector2D::new(0.0, 1.0))
            );
        }

        #[test]
        fn projection_and_rejection_decompose() {
            let a = Vector3D::new(2.0, 3.0, -1.0);
            let b = Vector3D::new(1.0, 1.0, 0.0);
            let p = project(a, b);
            let r = reject(a, b);
            assert_relative_eq!(p, Vector3D::new(2.5, 2.5, 0.0), epsilon = 1e-6);
            assert_relative_eq!(p + r, a, epsilon = 1e-6);
            assert_abs_diff_eq!(dot(r, b), 0.0, epsilon = EPSILON);
            assert_eq!(try_project(a, b), Ok(p));
            assert_eq!(try_reject(a, b), Ok(r));
        }

        #[test]
        fn projection_onto_zero_vector() {
            let a = Vector2D::new(1.0, -2.0);
            assert_eq!(project(a, Vector2D::ZERO), Vector2D::ZERO);
            assert_eq!(reject(a, Vector2D::ZERO), a);
            assert_eq!(
                try_project(a, Vector2D::ZERO),
                Err(VectorError::ZeroLength { operation: "project" })
            );
            assert_eq!(
                try_reject(a, Vector2D::ZERO),
                Err(VectorError::ZeroLength { operation: "reject" })
            );
        }

        #[test]
        fn unit_cube_has_volume_one() {
            let a = Vector3D::new(1.0, 0.0, 0.0);
            let b = Vector3D::new(0.0, 1.0, 0.0);
            assert_eq!(scalar_triple(a, b, Vector3D::new(0.0, 0.0, 1.0)), 1.0);
            assert_relative_eq!(
                scalar_triple(a, b, Vector3D::new(5.0, -3.0, 1.0)),
                1.0,
                epsilon = 1e-6
            );
        }

        #[test]
        fn approx_eq_is_symmetric_and_tolerant() {
            assert!(approx_eq(1.0, 1.0 + 1e-6));
            assert!(approx_eq(1.0 + 1e-6, 1.0));
            assert!(approx_eq(0.0, -1e-6));
            assert!(approx_eq(1000.0, 1000.001));
            assert!(!approx_eq(1.0, 1.001));
            assert!(!approx_eq(0.0, 5.0));
            assert!(!approx_eq(5.0, 0.0));
        }

        #[test]
        fn lengths_at_extreme_scales() {
            assert_eq!(magnitude(Vector3D::new(1e20, 0.0, 0.0)), 1e20);
            assert_eq!(magnitude(Vector3D::new(0.0, -1e-25, 0.0)), 1e-25);
            assert_relative_eq!(
                magnitude(Vector2D::new(3e30, 4e30)),
                5e30,
                max_relative = 1e-6
            );
            assert_relative_eq!(
                magnitude(Vector2D::new(3e-30, 4e-30)),
                5e-30,
                epsilon = 0.0,
                max_relative = 1e-6
            );
        }

        #[test]
        fn normalize_at_extreme_scales() {
            let x = Vector3D::new(1.0, 0.0, 0.0);
            assert_eq!(normalize(Vector3D::new(1e20, 0.0, 0.0)), x);
            assert_eq!(normalize(Vector3D::new(1e-25, 0.0, 0.0)), x);
            assert_eq!(normalize(Vector3D::new(1e-40, 0.0, 0.0)), x);
            assert_eq!(try_normalize(Vector3D::new(1e20, 0.0, 0.0)), Ok(x));
            assert_eq!(try_normalize(Vector3D::new(1e-25, 0.0, 0.0)), Ok(x));

            for v in [
                Vector4D::new(1e20, -1e20, 3e19, 0.0),
                Vector4D::new(-2e-25, 1e-25, 0.0, 5e-26),
            ] {
                let n = try_normalize(v).unwrap();
                assert_relative_eq!(dot(n, n), 1.0, epsilon = EPSILON);
                assert_relative_eq!(n, normalize(v));
            }
        }

        #[test]
        fn project_at_extreme_scales() {
            let a = Vector3D::new(3.0, 4.0, 0.0);
            let tiny = Vector3D::new(1e-25, 0.0, 0.0);
            assert_eq!(project(a, tiny), Vector3D::new(3.0, 0.0, 0.0));
            assert_eq!(try_project(a, tiny), Ok(Vector3D::new(3.0, 0.0, 0.0)));
            assert_eq!(try_reject(a, tiny), Ok(Vector3D::new(0.0, 4.0, 0.0)));

            let huge = Vector3D::new(1e20, 1e20, 0.0);
            let a = Vector3D::new(2.0, 0.0, 5.0);
            assert_eq!(project(a, huge), Vector3D::new(1.0, 1.0, 0.0));
            assert_eq!(reject(a, huge), Vector3D::new(1.0, -1.0, 5.0));
        }
    }
}
