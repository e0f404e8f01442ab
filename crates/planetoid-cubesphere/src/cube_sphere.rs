//! Six-face cubesphere generation and face merging.

use tracing::info;

use crate::cube_face::CubeFace;
use crate::face_mesh::FaceMesh;
use crate::mesh::MeshBuffers;
use crate::projection::ProjectionMethod;
use crate::resolution::Resolution;
use crate::shape::SurfaceShape;

/// Where one face's data lives inside a merged [`CubeSphereMesh`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceRange {
    /// Which cube face.
    pub face: CubeFace,
    /// Index of the face's first vertex in the merged vertex buffer.
    pub first_vertex: usize,
    /// Number of vertices belonging to the face.
    pub vertex_count: usize,
    /// Offset of the face's first index in the merged index buffer.
    pub first_index: usize,
    /// Number of indices belonging to the face.
    pub index_count: usize,
}

impl FaceRange {
    /// The slice of the merged index buffer holding this face's triangles.
    pub fn indices<'a>(&self, mesh: &'a MeshBuffers) -> &'a [u32] {
        &mesh.indices[self.first_index..self.first_index + self.index_count]
    }
}

/// The merged result of a cubesphere generation pass.
#[derive(Clone, Debug, Default)]
pub struct CubeSphereMesh {
    /// Combined vertex and index buffers, ready for upload.
    pub buffers: MeshBuffers,
    /// One entry per merged face, in merge order.
    pub faces: Vec<FaceRange>,
}

impl CubeSphereMesh {
    /// Range of the given face, if it was part of the merge.
    pub fn face_range(&self, face: CubeFace) -> Option<&FaceRange> {
        self.faces.iter().find(|r| r.face == face)
    }
}

/// Generates the six faces of a cubesphere and merges them into one mesh.
#[derive(Clone, Copy, Debug, Default)]
pub struct CubeSphere {
    resolution: Resolution,
    projection: ProjectionMethod,
}

impl CubeSphere {
    /// A cubesphere with `resolution` vertices along each face edge.
    ///
    /// The request is sanitized by [`Resolution::new`].
    pub fn new(resolution: impl Into<Resolution>) -> Self {
        Self {
            resolution: resolution.into(),
            projection: ProjectionMethod::default(),
        }
    }

    /// Use a different cube-to-sphere projection.
    #[must_use]
    pub fn with_projection(mut self, projection: ProjectionMethod) -> Self {
        self.projection = projection;
        self
    }

    /// The sanitized face resolution.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// The projection in use.
    pub fn projection(&self) -> ProjectionMethod {
        self.projection
    }

    /// Generate every face in [`CubeFace::GENERATION_ORDER`] without merging.
    ///
    /// All faces share one origin, so each keeps the identity transform.
    pub fn generate_faces<S: SurfaceShape + ?Sized>(&self, shape: &mut S) -> Vec<FaceMesh> {
        CubeFace::GENERATION_ORDER
            .iter()
            .map(|&face| FaceMesh::generate(face, self.resolution, self.projection, &mut *shape))
            .collect()
    }

    /// Generate all six faces through `shape` and merge them.
    pub fn generate<S: SurfaceShape + ?Sized>(&self, shape: &mut S) -> CubeSphereMesh {
        let faces = self.generate_faces(shape);
        let mesh = Self::merge(&faces);
        info!(
            resolution = %self.resolution,
            vertices = mesh.buffers.vertex_count(),
            triangles = mesh.buffers.triangle_count(),
            "cubesphere generated"
        );
        mesh
    }

    /// Merge face meshes into one buffer.
    ///
    /// Each face's vertices are moved into world space by its
    /// `local_to_world` transform, its indices are offset by the number of
    /// vertices merged before it, and normals are recomputed on the result.
    pub fn merge(faces: &[FaceMesh]) -> CubeSphereMesh {
        let total_vertices: usize = faces.iter().map(|f| f.buffers().vertex_count()).sum();
        let total_indices: usize = faces.iter().map(|f| f.buffers().indices.len()).sum();

        let mut positions = Vec::with_capacity(total_vertices);
        let mut indices = Vec::with_capacity(total_indices);
        let mut ranges = Vec::with_capacity(faces.len());

        for face in faces {
            let buffers = face.buffers();
            let base = positions.len();
            let first_index = indices.len();
            let transform = face.local_to_world();

            positions.extend(buffers.positions.iter().map(|&p| transform.transform_point3(p)));
            indices.extend(buffers.indices.iter().map(|&i| i + base as u32));

            ranges.push(FaceRange {
                face: face.face(),
                first_vertex: base,
                vertex_count: buffers.vertex_count(),
                first_index,
                index_count: buffers.indices.len(),
            });
        }

        CubeSphereMesh {
            buffers: MeshBuffers::new(positions, indices),
            faces: ranges,
        }
    }
}
