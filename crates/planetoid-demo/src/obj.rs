//! Wavefront OBJ export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use planetoid_cubesphere::MeshBuffers;

/// Write `mesh` as one OBJ object named `name`.
///
/// Emits `v` and `vn` records in vertex order and one `f v//vn` record per
/// triangle with 1-based indices.
pub(crate) fn write_obj<W: Write>(mesh: &MeshBuffers, name: &str, mut out: W) -> io::Result<()> {
    writeln!(out, "o {name}")?;
    for p in &mesh.positions {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for n in &mesh.normals {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for tri in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    out.flush()
}

/// Write `mesh` to `path`, creating parent directories as needed.
pub(crate) fn export_obj(mesh: &MeshBuffers, name: &str, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    write_obj(mesh, name, BufWriter::new(File::create(path)?))
}
