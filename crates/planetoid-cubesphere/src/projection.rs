//! Cube-to-sphere projection methods.
//!
//! Provides two projection approaches:
//! - **Normalized**: push the cube point out along its own direction. Cheap,
//!   and cells bunch up towards face corners.
//! - **Everitt**: Analytic mapping with better area uniformity.

use glam::DVec3;

use crate::FaceCoord;

/// Selects which cube-to-sphere projection method to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ProjectionMethod {
    /// Normalize the cube-face point.
    #[default]
    Normalized,
    /// Everitt/Mathworld analytic projection: better area uniformity.
    Everitt,
}

/// Convert a [`FaceCoord`] to a point on the surface of the `[-1, 1]` cube.
///
/// `normal + (2u - 1) * axis_a + (2v - 1) * axis_b`; the face center maps to
/// the face normal.
#[inline]
#[must_use]
pub fn face_coord_to_cube_point(fc: &FaceCoord) -> DVec3 {
    let s = 2.0 * fc.u - 1.0;
    let t = 2.0 * fc.v - 1.0;

    fc.face.normal() + s * fc.face.axis_a() + t * fc.face.axis_b()
}

/// Project a [`FaceCoord`] onto the unit sphere by normalizing its cube point.
#[inline]
#[must_use]
pub fn face_coord_to_sphere(fc: &FaceCoord) -> DVec3 {
    face_coord_to_cube_point(fc).normalize()
}

/// Analytic cube-to-sphere using the Everitt/Mathworld mapping.
///
/// Given a point on the cube surface (one coordinate is `±1`), compute the
/// corresponding unit sphere point with minimal area distortion:
///
/// ```text
/// sx = x * sqrt(1 - y²/2 - z²/2 + y²z²/3)
/// sy = y * sqrt(1 - x²/2 - z²/2 + x²z²/3)
/// sz = z * sqrt(1 - x²/2 - y²/2 + x²y²/3)
/// ```
#[inline]
#[must_use]
pub fn cube_to_sphere_everitt(cube_point: DVec3) -> DVec3 {
    let x2 = cube_point.x * cube_point.x;
    let y2 = cube_point.y * cube_point.y;
    let z2 = cube_point.z * cube_point.z;

    DVec3::new(
        cube_point.x * (1.0 - y2 / 2.0 - z2 / 2.0 + y2 * z2 / 3.0).sqrt(),
        cube_point.y * (1.0 - x2 / 2.0 - z2 / 2.0 + x2 * z2 / 3.0).sqrt(),
        cube_point.z * (1.0 - x2 / 2.0 - y2 / 2.0 + x2 * y2 / 3.0).sqrt(),
    )
}

/// Project a [`FaceCoord`] onto the unit sphere using the specified method.
#[inline]
#[must_use]
pub fn project(fc: &FaceCoord, method: ProjectionMethod) -> DVec3 {
    match method {
        ProjectionMethod::Normalized => face_coord_to_sphere(fc),
        ProjectionMethod::Everitt => cube_to_sphere_everitt(face_coord_to_cube_point(fc)),
    }
}
