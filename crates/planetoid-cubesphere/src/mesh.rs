//! Render-ready vertex and index buffers.

use glam::{Affine3A, Vec3};

use crate::error::MeshError;

/// Positions, normals and triangle indices of a mesh.
///
/// Normals are always derived from the current triangle geometry; every
/// method that changes positions recomputes them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex normals, parallel to `positions`.
    pub normals: Vec<Vec3>,
    /// Index buffer (triangles, 3 indices per triangle).
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Build buffers from positions and indices, computing normals.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let mut buffers = Self {
            positions,
            normals: Vec::new(),
            indices,
        };
        buffers.recalculate_normals();
        buffers
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Replace the vertex positions and recompute normals.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::VertexCountMismatch`] and leaves the mesh
    /// untouched if `positions` has a different length than the current
    /// vertex buffer.
    pub fn set_positions(&mut self, positions: Vec<Vec3>) -> Result<(), MeshError> {
        if positions.len() != self.positions.len() {
            return Err(MeshError::VertexCountMismatch {
                expected: self.positions.len(),
                actual: positions.len(),
            });
        }
        self.positions = positions;
        self.recalculate_normals();
        Ok(())
    }

    /// Apply an affine transform to every position and recompute normals.
    pub fn transform(&mut self, transform: &Affine3A) {
        for p in &mut self.positions {
            *p = transform.transform_point3(*p);
        }
        self.recalculate_normals();
    }

    /// Recompute per-vertex normals from the triangles.
    ///
    /// Each triangle adds its unnormalized cross product (area-weighted normal)
    /// to its three corners. Vertices touched by no triangle, or only by
    /// degenerate ones, get a zero normal.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];

        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let v0 = self.positions[a];
            let v1 = self.positions[b];
            let v2 = self.positions[c];
            let n = (v1 - v0).cross(v2 - v0);
            normals[a] += n;
            normals[b] += n;
            normals[c] += n;
        }

        for n in &mut normals {
            *n = n.normalize_or_zero();
        }
        self.normals = normals;
    }

    /// Positions as raw bytes for GPU upload.
    pub fn positions_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normals as raw bytes for GPU upload.
    pub fn normals_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Indices as raw bytes for GPU upload.
    pub fn indices_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> MeshBuffers {
        // Two CCW triangles in the XY plane, facing +Z.
        MeshBuffers::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = MeshBuffers::default();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_flat_quad_normals_point_up() {
        let mesh = unit_quad();
        assert_eq!(mesh.normals.len(), 4);
        for n in &mesh.normals {
            assert!((*n - Vec3::Z).length() < 1e-6, "unexpected normal {n:?}");
        }
    }

    #[test]
    fn test_set_positions_recomputes_normals() {
        let mut mesh = unit_quad();
        let flipped = mesh
            .positions
            .iter()
            .map(|p| Vec3::new(p.x, -p.y, p.z))
            .collect();
        mesh.set_positions(flipped).unwrap();
        for n in &mesh.normals {
            assert!((*n - Vec3::NEG_Z).length() < 1e-6, "normal not flipped: {n:?}");
        }
    }

    #[test]
    fn test_set_positions_rejects_resize() {
        let mut mesh = unit_quad();
        let before = mesh.clone();
        let err = mesh.set_positions(vec![Vec3::ZERO]).unwrap_err();
        assert_eq!(
            err,
            MeshError::VertexCountMismatch {
                expected: 4,
                actual: 1
            }
        );
        assert_eq!(mesh, before, "rejected update must not modify the mesh");
    }

    #[test]
    fn test_transform_rotates_normals() {
        let mut mesh = unit_quad();
        mesh.transform(&Affine3A::from_rotation_x(std::f32::consts::FRAC_PI_2));
        for n in &mesh.normals {
            assert!((*n - Vec3::NEG_Y).length() < 1e-5, "rotated normal {n:?}");
        }
    }

    #[test]
    fn test_unreferenced_vertex_has_zero_normal() {
        let mut mesh = unit_quad();
        mesh.positions.push(Vec3::splat(5.0));
        mesh.recalculate_normals();
        assert_eq!(mesh.normals[4], Vec3::ZERO);
    }

    #[test]
    fn test_byte_views_have_expected_sizes() {
        let mesh = unit_quad();
        assert_eq!(mesh.positions_as_bytes().len(), 4 * 12);
        assert_eq!(mesh.normals_as_bytes().len(), 4 * 12);
        assert_eq!(mesh.indices_as_bytes().len(), 6 * 4);
    }
}
