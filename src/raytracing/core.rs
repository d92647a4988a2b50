use super::math::{Color, Point3, Ray, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f64,
}

impl Sphere {
    /// The only object of the scene.
    pub const DEFAULT: Sphere = Sphere {
        center: Vec3 {
            x: 0.0,
            y: 0.0,
            z: -1.0,
        },
        radius: 0.5,
    };

    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn hit(&self, ray: &Ray) -> Option<f64> {
        hit_sphere(self.center, self.radius, ray)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere::DEFAULT
    }
}

/// Solve `|origin + t * direction - center|^2 = radius^2` for t.
///
/// Returns `None` when the line misses the sphere, otherwise the smaller
/// root, whatever its sign: a sphere behind the origin still yields a
/// (negative) t. The far root is never computed.
pub fn hit_sphere(center: Point3, radius: f64, ray: &Ray) -> Option<f64> {
    let oc = ray.origin - center;
    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    Some((-b - discriminant.sqrt()) / (2.0 * a))
}

const WHITE: Color = Vec3 {
    x: 1.0,
    y: 1.0,
    z: 1.0,
};

const SKY_BLUE: Color = Vec3 {
    x: 0.5,
    y: 0.7,
    z: 1.0,
};

/// Vertical white to blue gradient, independent of the x direction.
pub fn sky(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    Vec3::lerp(WHITE, SKY_BLUE, t)
}

/// Map a unit normal from [-1, 1] to an RGB color in [0, 1].
pub fn normal_color(normal: Vec3) -> Color {
    (normal + Vec3::one()) * 0.5
}

/// Color seen along `ray`: the surface normal of `sphere` where the ray
/// strikes it in front of the origin, the sky gradient everywhere else.
pub fn ray_color(ray: &Ray, sphere: &Sphere) -> Color {
    match sphere.hit(ray) {
        Some(t) if t > 0.0 => {
            let normal = (ray.at(t) - sphere.center).normalize();
            normal_color(normal)
        }
        _ => sky(ray),
    }
}

/// Shade a ray against the default scene.
pub fn shade_ray(ray: &Ray) -> Color {
    ray_color(ray, &Sphere::DEFAULT)
}
