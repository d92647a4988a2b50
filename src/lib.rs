//! Casts one ray per pixel through a pinhole camera at a single sphere and
//! colors each pixel with the sphere normal or a sky gradient.

pub mod raytracing;

pub use raytracing::camera::{Camera, CameraConfig};
pub use raytracing::core::{hit_sphere, ray_color, shade_ray, Sphere};
pub use raytracing::error::{DegenerateInputKind, RenderError, RenderResult};
pub use raytracing::math::{Color, Point3, Ray, Vec3};
pub use raytracing::render::{render, Frame, SceneKind};
