use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use clap::ValueEnum;
use log::{debug, info, warn};
use rayon::prelude::*;

use super::camera::Camera;
use super::core::shade_ray;
use super::error::DegenerateInputKind;
use super::math::{Color, Vec3};

/// What gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SceneKind {
    /// Normal-colored sphere over a sky gradient.
    #[default]
    Sphere,
    /// Calibration pattern: red grows to the right, green grows upwards.
    Gradient,
}

/// Rendered pixels in output order: top row first, left to right.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Frame {
    /// Counts the pixels whose color could not be computed.
    pub fn degenerate_pixels(&self) -> HashMap<DegenerateInputKind, usize> {
        let mut counts = HashMap::new();
        for kind in self.pixels.iter().filter_map(|p| classify(*p)) {
            *counts.entry(kind).or_insert(0) += 1;
        }
        counts
    }
}

pub fn classify(color: Color) -> Option<DegenerateInputKind> {
    let channels = [color.x, color.y, color.z];
    if channels.iter().any(|c| c.is_nan()) {
        Some(DegenerateInputKind::NanColor)
    } else if channels.iter().any(|c| c.is_infinite()) {
        Some(DegenerateInputKind::InfiniteColor)
    } else {
        None
    }
}

fn gradient_color(column: u32, row: u32, width: u32, height: u32) -> Color {
    Vec3::new(
        column as f64 / (width - 1) as f64,
        row as f64 / (height - 1) as f64,
        0.25,
    )
}

pub fn pixel_color(
    camera: &Camera,
    scene: SceneKind,
    column: u32,
    row: u32,
    width: u32,
    height: u32,
) -> Color {
    match scene {
        SceneKind::Sphere => shade_ray(&camera.ray_for_pixel(column, row, width, height)),
        SceneKind::Gradient => gradient_color(column, row, width, height),
    }
}

/// Render every pixel. Scanlines are independent and computed in parallel,
/// the frame still comes out in top to bottom order.
/// `width` and `height` must both be at least 2.
pub fn render(camera: &Camera, scene: SceneKind, width: u32, height: u32) -> Frame {
    info!("Rendering {:?} scene at {}x{}", scene, width, height);
    let start = Instant::now();

    let mut pixels = vec![Vec3::zero(); width as usize * height as usize];
    let remaining = AtomicU32::new(height);
    pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(line, scanline)| {
            let row = height - 1 - line as u32;
            for (column, pixel) in scanline.iter_mut().enumerate() {
                *pixel = pixel_color(camera, scene, column as u32, row, width, height);
            }
            let left = remaining.fetch_sub(1, Ordering::Relaxed) - 1;
            debug!("Scanlines remaining: {}", left);
        });

    let frame = Frame {
        width,
        height,
        pixels,
    };
    for (kind, count) in frame.degenerate_pixels() {
        warn!("{} pixels with {}", count, kind);
    }
    info!("Done in {:?}", start.elapsed());
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracing::camera::CameraConfig;

    #[test]
    fn test_frame_size_and_order() {
        let camera = Camera::default();
        let frame = render(&camera, SceneKind::Gradient, 4, 3);
        assert_eq!(frame.pixels.len(), 12);
        // first pixel written is the top left corner
        assert_eq!(frame.pixels[0], Vec3::new(0.0, 1.0, 0.25));
        // last pixel written is the bottom right corner
        assert_eq!(frame.pixels[11], Vec3::new(1.0, 0.0, 0.25));
        assert_eq!(frame.pixels[4], Vec3::new(0.0, 0.5, 0.25));
    }

    #[test]
    fn test_sphere_scene_matches_shader() {
        let config = CameraConfig {
            image_width: 16,
            ..CameraConfig::default()
        };
        let (width, height) = (config.image_width, config.image_height());
        let camera = Camera::new(&config);
        let frame = render(&camera, SceneKind::Sphere, width, height);
        for (i, pixel) in frame.pixels.iter().enumerate() {
            let column = i as u32 % width;
            let row = height - 1 - i as u32 / width;
            let expected = shade_ray(&camera.ray_for_pixel(column, row, width, height));
            assert_eq!(*pixel, expected);
        }
        assert!(frame.degenerate_pixels().is_empty());
    }

    #[test]
    fn test_sphere_visible_in_center() {
        let camera = Camera::default();
        let color = pixel_color(&camera, SceneKind::Sphere, 200, 112, 400, 225);
        // facing the camera the normal is close to +z
        assert!(color.z > 0.95);
        assert!((color.x - 0.5).abs() < 0.05);
        assert!((color.y - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(Vec3::new(0.1, 0.2, 0.3)), None);
        assert_eq!(
            classify(Vec3::new(f64::NAN, 0.0, 0.0)),
            Some(DegenerateInputKind::NanColor)
        );
        assert_eq!(
            classify(Vec3::new(0.0, f64::INFINITY, 0.0)),
            Some(DegenerateInputKind::InfiniteColor)
        );
    }

    #[test]
    fn test_degenerate_pixels_are_counted() {
        let frame = Frame {
            width: 2,
            height: 2,
            pixels: vec![
                Vec3::zero(),
                Vec3::new(f64::NAN, 0.0, 0.0),
                Vec3::new(f64::NAN, f64::NAN, 0.0),
                Vec3::new(0.0, 0.0, f64::NEG_INFINITY),
            ],
        };
        let counts = frame.degenerate_pixels();
        assert_eq!(counts.get(&DegenerateInputKind::NanColor), Some(&2));
        assert_eq!(counts.get(&DegenerateInputKind::InfiniteColor), Some(&1));
    }
}
