//! Mapping from unit-sphere directions to final surface positions.

use glam::DVec3;

/// Places a vertex given its direction on the unit sphere.
///
/// Takes `&mut self` because noise-backed shapes advance internal state on
/// every evaluation; the order of calls is therefore part of the output.
pub trait SurfaceShape {
    /// Map a unit-length direction to its position on the shape's surface.
    fn point_on_shape(&mut self, unit_sphere_point: DVec3) -> DVec3;
}

/// An undisplaced sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereShape {
    /// Sphere radius.
    pub radius: f64,
}

impl SphereShape {
    /// Sphere with the given radius.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl SurfaceShape for SphereShape {
    #[inline]
    fn point_on_shape(&mut self, unit_sphere_point: DVec3) -> DVec3 {
        unit_sphere_point * self.radius
    }
}

impl<S: SurfaceShape + ?Sized> SurfaceShape for &mut S {
    #[inline]
    fn point_on_shape(&mut self, unit_sphere_point: DVec3) -> DVec3 {
        (**self).point_on_shape(unit_sphere_point)
    }
}
