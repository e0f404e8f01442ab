//! 2D local coordinates on a cube face.

use crate::CubeFace;

/// A 2D coordinate on a cube face. `u` and `v` are in the range \[0, 1\].
///
/// `u` runs along [`CubeFace::axis_a`] and `v` along [`CubeFace::axis_b`];
/// `(0.5, 0.5)` is the face center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceCoord {
    /// Which cube face this coordinate lies on.
    pub face: CubeFace,
    /// Parameter along `axis_a` in \[0, 1\].
    pub u: f64,
    /// Parameter along `axis_b` in \[0, 1\].
    pub v: f64,
}

impl FaceCoord {
    /// Construct a `FaceCoord`, clamping `u` and `v` to \[0, 1\].
    #[must_use]
    pub fn new(face: CubeFace, u: f64, v: f64) -> Self {
        Self {
            face,
            u: u.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// Coordinate of grid vertex `(x, y)` on a `resolution × resolution` grid.
    ///
    /// `resolution` must be at least 2; [`crate::Resolution`] guarantees this.
    #[must_use]
    pub fn from_grid(face: CubeFace, x: u32, y: u32, resolution: u32) -> Self {
        debug_assert!(resolution >= 2, "grid resolution below 2: {resolution}");
        let last = f64::from(resolution - 1);
        Self::new(face, f64::from(x) / last, f64::from(y) / last)
    }
}
