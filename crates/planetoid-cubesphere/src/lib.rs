//! Cubesphere mesh construction: cube faces and their basis, cube-to-sphere
//! projection, per-face triangulation and merging into one render buffer.

mod cube_face;
mod cube_sphere;
mod error;
mod face_coord;
mod face_mesh;
mod mesh;
mod projection;
mod resolution;
mod shape;
mod winding;

pub use cube_face::CubeFace;
pub use cube_sphere::{CubeSphere, CubeSphereMesh, FaceRange};
pub use error::MeshError;
pub use face_coord::FaceCoord;
pub use face_mesh::{FaceMesh, grid_indices};
pub use mesh::MeshBuffers;
pub use projection::{
    ProjectionMethod, cube_to_sphere_everitt, face_coord_to_cube_point, face_coord_to_sphere,
    project,
};
pub use resolution::Resolution;
pub use shape::{SphereShape, SurfaceShape};
pub use winding::{
    basis_is_orthogonal, face_winds_outward, mean_triangle_normal, triangle_winds_outward,
};
