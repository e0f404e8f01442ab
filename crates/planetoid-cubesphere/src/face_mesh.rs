//! Mesh generation for a single cube face.

use glam::Affine3A;
use tracing::debug;

use crate::cube_face::CubeFace;
use crate::face_coord::FaceCoord;
use crate::mesh::MeshBuffers;
use crate::projection::{ProjectionMethod, project};
use crate::resolution::Resolution;
use crate::shape::SurfaceShape;

/// Generate the index buffer for a `resolution × resolution` vertex grid.
///
/// Two triangles per quad, anchored at the quad's lower-left vertex
/// `i = y * resolution + x`:
///
/// ```text
/// A = (i, i + res + 1, i + res)
/// B = (i, i + 1,       i + res + 1)
/// ```
///
/// Combined with the face basis (`axis_a × axis_b == normal`) this winds every
/// triangle counter-clockwise when seen from outside the sphere.
pub fn grid_indices(resolution: Resolution) -> Vec<u32> {
    let res = resolution.get();
    let mut indices = Vec::with_capacity(resolution.face_index_count());

    for y in 0..(res - 1) {
        for x in 0..(res - 1) {
            let i = y * res + x;
            indices.extend_from_slice(&[i, i + res + 1, i + res]);
            indices.extend_from_slice(&[i, i + 1, i + res + 1]);
        }
    }

    indices
}

/// One generated face of a cubesphere.
///
/// Owns its buffers until [`crate::CubeSphere::merge`] copies them into the
/// combined mesh.
#[derive(Clone, Debug)]
pub struct FaceMesh {
    face: CubeFace,
    resolution: Resolution,
    local_to_world: Affine3A,
    buffers: MeshBuffers,
}

impl FaceMesh {
    /// Generate the vertex grid for `face`, push every point through `shape`
    /// and triangulate it.
    ///
    /// Vertices are visited row by row (`y` outer, `x` inner), which fixes the
    /// order in which `shape` is evaluated.
    pub fn generate<S: SurfaceShape + ?Sized>(
        face: CubeFace,
        resolution: Resolution,
        projection: ProjectionMethod,
        shape: &mut S,
    ) -> Self {
        let res = resolution.get();
        let mut positions = Vec::with_capacity(resolution.face_vertex_count());

        for y in 0..res {
            for x in 0..res {
                let fc = FaceCoord::from_grid(face, x, y, res);
                let on_sphere = project(&fc, projection);
                positions.push(shape.point_on_shape(on_sphere).as_vec3());
            }
        }

        let buffers = MeshBuffers::new(positions, grid_indices(resolution));
        debug!(
            ?face,
            vertices = buffers.vertex_count(),
            triangles = buffers.triangle_count(),
            "generated cubesphere face"
        );

        Self {
            face,
            resolution,
            local_to_world: Affine3A::IDENTITY,
            buffers,
        }
    }

    /// Set the transform applied to this face's vertices when merging.
    #[must_use]
    pub fn with_transform(mut self, local_to_world: Affine3A) -> Self {
        self.local_to_world = local_to_world;
        self
    }

    /// The cube face this mesh covers.
    pub fn face(&self) -> CubeFace {
        self.face
    }

    /// Grid resolution used for this face.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Transform from face-local space to the merged mesh's space.
    pub fn local_to_world(&self) -> &Affine3A {
        &self.local_to_world
    }

    /// The face's buffers, in face-local space.
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }
}
