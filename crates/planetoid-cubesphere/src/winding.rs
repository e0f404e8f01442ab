//! Winding order checks for cubesphere meshes.
//!
//! Triangles are expected to be counter-clockwise when viewed from outside
//! the planet, so that backface culling keeps the outer surface.

use glam::{DVec3, Vec3};

use crate::cube_face::CubeFace;

/// Check if a triangle has correct outward-facing winding order.
///
/// Returns `true` if the triangle's computed normal (via cross product)
/// points away from the planet center (i.e., has a positive dot product
/// with the centroid direction from the planet center).
///
/// `v0`, `v1`, `v2` are planet-relative positions.
pub fn triangle_winds_outward(v0: DVec3, v1: DVec3, v2: DVec3) -> bool {
    let face_normal = (v1 - v0).cross(v2 - v0);
    let centroid = (v0 + v1 + v2) / 3.0;

    face_normal.dot(centroid) > 0.0
}

/// Average of the unit normals of all triangles in `indices`.
///
/// Degenerate triangles contribute nothing. Returns `Vec3::ZERO` for an
/// empty index buffer.
pub fn mean_triangle_normal(positions: &[Vec3], indices: &[u32]) -> Vec3 {
    let mut sum = Vec3::ZERO;
    let mut count = 0usize;

    for tri in indices.chunks_exact(3) {
        let v0 = positions[tri[0] as usize];
        let v1 = positions[tri[1] as usize];
        let v2 = positions[tri[2] as usize];
        sum += (v1 - v0).cross(v2 - v0).normalize_or_zero();
        count += 1;
    }

    if count == 0 {
        Vec3::ZERO
    } else {
        sum / count as f32
    }
}

/// Whether `face`'s `(axis_a, axis_b, normal)` triple is pairwise orthogonal.
pub fn basis_is_orthogonal(face: CubeFace) -> bool {
    let n = face.normal();
    let a = face.axis_a();
    let b = face.axis_b();
    a.dot(b) == 0.0 && a.dot(n) == 0.0 && b.dot(n) == 0.0
}

/// Whether a quad's first triangle, built from the face basis the way
/// [`crate::grid_indices`] builds it, faces away from the origin.
pub fn face_winds_outward(face: CubeFace) -> bool {
    let n = face.normal();
    let a = face.axis_a();
    let b = face.axis_b();
    // i, i + res + 1, i + res around the face center
    triangle_winds_outward(n, n + a * 0.01 + b * 0.01, n + b * 0.01)
}
