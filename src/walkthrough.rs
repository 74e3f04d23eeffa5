use tracing::{debug, warn};
use vecalg::library::{approx_eq, cross, scalar_triple};
use vecalg::{RandomSource, Vector3D, VectorError};

/// Bound on the free x and y components in the height-only demonstration
pub const HEIGHT_RANGE: f32 = 10.0;
/// Bound on every component and shear factor in the shear demonstration
pub const SHEAR_RANGE: f32 = 1.0;

const X_AXIS: Vector3D = Vector3D::new(1.0, 0.0, 0.0);
const Y_AXIS: Vector3D = Vector3D::new(0.0, 1.0, 0.0);
const Z_AXIS: Vector3D = Vector3D::new(0.0, 0.0, 1.0);

/// One evaluated third vector and the volume it produced.
pub struct Trial {
    pub vector: Vector3D,
    pub volume: f32,
    /// Whether the volume matched the expected one within tolerance.
    pub holds: bool,
}

impl Trial {
    fn check(vector: Vector3D, volume: f32, expected: f32) -> Trial {
        let holds = approx_eq(volume, expected);
        if holds {
            debug!(%vector, volume, "volume preserved");
        } else {
            warn!(%vector, volume, expected, "volume changed");
        }
        Trial { vector, volume, holds }
    }
}

/// Random base vectors and the trials sheared against them.
pub struct Shear {
    pub a: Vector3D,
    pub b: Vector3D,
    pub c: Vector3D,
    pub a_cross_b: Vector3D,
    pub volume: f32,
    pub trials: Vec<Trial>,
}

/// Volume spanned by the three basis vectors.
pub fn unit_cube() -> Trial {
    Trial::check(Z_AXIS, scalar_triple(X_AXIS, Y_AXIS, Z_AXIS), 1.0)
}

/// Over the unit square in the xy-plane, only the height of `c` matters:
/// any `c` with z = 1 spans volume 1.
///
/// # Arguments
///
/// * `rng` - Source of the x and y components
/// * `trials` - Number of third vectors to try
pub fn height_only(rng: &mut RandomSource, trials: usize) -> Result<Vec<Trial>, VectorError> {
    (0..trials)
        .map(|_| {
            let c = Vector3D::new(
                rng.rand_float(-HEIGHT_RANGE, HEIGHT_RANGE)?,
                rng.rand_float(-HEIGHT_RANGE, HEIGHT_RANGE)?,
                1.0,
            );
            Ok(Trial::check(c, scalar_triple(X_AXIS, Y_AXIS, c), 1.0))
        })
        .collect()
}

/// `a` and `b` span a plane; moving `c` along that plane by `s·a + t·b`
/// keeps the volume.
///
/// # Arguments
///
/// * `rng` - Source of the base vectors and shear factors
/// * `trials` - Number of sheared third vectors to try
pub fn shear(rng: &mut RandomSource, trials: usize) -> Result<Shear, VectorError> {
    let a = rng.rand_vector3(-SHEAR_RANGE, SHEAR_RANGE)?;
    let b = rng.rand_vector3(-SHEAR_RANGE, SHEAR_RANGE)?;
    let c = rng.rand_vector3(-SHEAR_RANGE, SHEAR_RANGE)?;
    let a_cross_b = cross(a, b);
    let volume = scalar_triple(a, b, c);

    let trials = (0..trials)
        .map(|_| {
            let s = rng.rand_float(-SHEAR_RANGE, SHEAR_RANGE)?;
            let t = rng.rand_float(-SHEAR_RANGE, SHEAR_RANGE)?;
            let c_prime = c + s * a + t * b;
            Ok(Trial::check(c_prime, scalar_triple(a, b, c_prime), volume))
        })
        .collect::<Result<Vec<_>, VectorError>>()?;

    Ok(Shear { a, b, c, a_cross_b, volume, trials })
}
