use super::{Point3, Vec3};

/// Half-line `origin + t * direction`. The direction is kept as given,
/// it is never normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    /// Valid for any real t, negative values land behind the origin.
    pub fn at(self: &Self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}
