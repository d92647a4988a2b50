use super::error::{RenderError, RenderResult};
use super::math::{Point3, Ray, Vec3};

/// Parameters the camera basis is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub aspect_ratio: f64,
    pub viewport_height: f64,
    pub focal_length: f64,
    pub image_width: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            viewport_height: 2.0,
            focal_length: 1.0,
            image_width: 400,
        }
    }
}

impl CameraConfig {
    pub fn viewport_width(&self) -> f64 {
        self.aspect_ratio * self.viewport_height
    }

    pub fn image_height(&self) -> u32 {
        (self.image_width as f64 / self.aspect_ratio) as u32
    }

    /// Rejects configurations that would produce a degenerate basis, and
    /// images with less than two rows or columns: the pixel to uv mapping
    /// divides by `width - 1` and `height - 1`.
    pub fn validate(&self) -> RenderResult<()> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(RenderError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )))
            }
        };
        positive("aspect ratio", self.aspect_ratio)?;
        positive("viewport height", self.viewport_height)?;
        positive("focal length", self.focal_length)?;

        let (width, height) = (self.image_width, self.image_height());
        if width < 2 || height < 2 {
            return Err(RenderError::InvalidConfig(format!(
                "image must be at least 2x2 pixels, got {width}x{height}"
            )));
        }
        Ok(())
    }
}

/// Pinhole camera at the origin looking down -z.
/// The basis is computed once and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    lower_left_corner: Point3,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        let origin = Vec3::zero();
        let horizontal = Vec3::new(config.viewport_width(), 0.0, 0.0);
        let vertical = Vec3::new(0.0, config.viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, config.focal_length);
        Self {
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }

    pub fn vertical(&self) -> Vec3 {
        self.vertical
    }

    pub fn lower_left_corner(&self) -> Point3 {
        self.lower_left_corner
    }

    /// Create a ray from the camera position through the viewport point at
    /// (u, v), both in [0, 1] with (0, 0) at the lower left corner.
    pub fn shoot_to(&self, u: f64, v: f64) -> Ray {
        let direction =
            self.lower_left_corner + self.horizontal * u + self.vertical * v - self.origin;
        Ray::new(self.origin, direction)
    }

    /// Ray through pixel (column, row), row 0 being the bottom of the image.
    pub fn ray_for_pixel(&self, column: u32, row: u32, width: u32, height: u32) -> Ray {
        let u = column as f64 / (width - 1) as f64;
        let v = row as f64 / (height - 1) as f64;
        self.shoot_to(u, v)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}
