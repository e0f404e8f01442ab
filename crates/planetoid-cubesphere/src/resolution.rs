//! Per-face grid resolution with the clamping policy applied up front.

use std::fmt;

use tracing::warn;

/// Number of vertices along each edge of a cube face grid.
///
/// Always within [`Resolution::MIN`]`..=`[`Resolution::MAX`], so geometry code
/// never divides by `resolution - 1 == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Resolution(u32);

impl Resolution {
    /// Substituted when a resolution of `0` is requested.
    pub const DEFAULT: u32 = 10;
    /// Smallest grid that still contains a quad.
    pub const MIN: u32 = 2;
    /// Largest supported grid; keeps a single face under 65 536 vertices.
    pub const MAX: u32 = 255;

    /// Sanitize a requested resolution.
    ///
    /// `0` becomes [`Self::DEFAULT`], `1` is raised to [`Self::MIN`] and
    /// anything above [`Self::MAX`] is clamped down.
    pub fn new(requested: u32) -> Self {
        let resolution = match requested {
            0 => Self::DEFAULT,
            r if r < Self::MIN => Self::MIN,
            r if r > Self::MAX => Self::MAX,
            r => r,
        };
        if resolution != requested {
            warn!(requested, resolution, "face resolution adjusted");
        }
        Self(resolution)
    }

    /// The sanitized resolution.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Vertices on one face: `resolution²`.
    #[inline]
    pub fn face_vertex_count(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }

    /// Indices on one face: `(resolution - 1)² * 6`.
    #[inline]
    pub fn face_index_count(self) -> usize {
        let quads = (self.0 - 1) as usize;
        quads * quads * 6
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<u32> for Resolution {
    fn from(requested: u32) -> Self {
        Self::new(requested)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}
