use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageBuffer, Rgb};
use log::info;

use super::error::{RenderError, RenderResult};
use super::math::{Color, Vec3};
use super::render::Frame;

/// Convert a [0, 1] channel to a byte. Out of range values are clamped,
/// NaN becomes 0.
pub fn channel_to_byte(value: f64) -> u8 {
    (255.999 * value.clamp(0.0, 1.0)) as u8
}

impl From<Vec3> for image::Rgb<u8> {
    fn from(value: Vec3) -> Self {
        image::Rgb([
            channel_to_byte(value.x),
            channel_to_byte(value.y),
            channel_to_byte(value.z),
        ])
    }
}

fn check_pixel_count(width: u32, height: u32, pixels: &[Color]) -> RenderResult<()> {
    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(RenderError::PixelCount {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Write a plain text (P3) PPM: a three line header followed by one
/// `r g b` line per pixel, pixels taken in the given order.
pub fn write_ppm<W: Write>(
    writer: &mut W,
    width: u32,
    height: u32,
    pixels: &[Color],
) -> RenderResult<()> {
    check_pixel_count(width, height, pixels)?;
    write!(writer, "P3\n{} {}\n255\n", width, height)?;
    for pixel in pixels {
        let Rgb([r, g, b]) = Rgb::<u8>::from(*pixel);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }
    Ok(())
}

fn is_ppm(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("ppm"))
}

/// Save the frame, as PPM text when the extension is `.ppm`, otherwise in
/// whatever format the `image` crate picks from the extension.
pub fn save_frame(path: &Path, frame: &Frame) -> RenderResult<()> {
    check_pixel_count(frame.width, frame.height, &frame.pixels)?;
    if is_ppm(path) {
        let mut writer = BufWriter::new(File::create(path)?);
        write_ppm(&mut writer, frame.width, frame.height, &frame.pixels)?;
        writer.flush()?;
    } else {
        let buffer: ImageBuffer<Rgb<u8>, Vec<_>> =
            ImageBuffer::from_fn(frame.width, frame.height, |x, y| {
                frame.pixels[(x + frame.width * y) as usize].into()
            });
        buffer.save(path)?;
    }
    info!("Saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_to_byte() {
        assert_eq!(channel_to_byte(0.0), 0);
        assert_eq!(channel_to_byte(0.25), 63);
        assert_eq!(channel_to_byte(0.5), 127);
        assert_eq!(channel_to_byte(1.0), 255);
        assert_eq!(channel_to_byte(1.5), 255);
        assert_eq!(channel_to_byte(-0.5), 0);
        assert_eq!(channel_to_byte(f64::NAN), 0);
    }

    #[test]
    fn test_write_ppm() {
        let pixels = vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.5, 0.7, 1.0),
        ];
        let mut out = Vec::new();
        write_ppm(&mut out, 2, 2, &pixels).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "P3\n2 2\n255\n255 0 0\n0 255 0\n0 0 255\n127 179 255\n"
        );
    }

    #[test]
    fn test_write_ppm_rejects_wrong_pixel_count() {
        let mut out = Vec::new();
        let result = write_ppm(&mut out, 2, 2, &[Vec3::zero()]);
        assert!(matches!(
            result,
            Err(RenderError::PixelCount {
                expected: 4,
                actual: 1
            })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_is_ppm() {
        assert!(is_ppm(Path::new("out.ppm")));
        assert!(is_ppm(Path::new("dir/OUT.PPM")));
        assert!(!is_ppm(Path::new("out.png")));
        assert!(!is_ppm(Path::new("ppm")));
    }

    #[test]
    fn test_save_frame_as_ppm_and_png() {
        let frame = Frame {
            width: 2,
            height: 2,
            pixels: vec![Vec3::one(), Vec3::zero(), Vec3::zero(), Vec3::one()],
        };
        let dir = std::env::temp_dir().join(format!("sphere-caster-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let ppm = dir.join("frame.ppm");
        save_frame(&ppm, &frame).unwrap();
        let text = std::fs::read_to_string(&ppm).unwrap();
        assert!(text.starts_with("P3\n2 2\n255\n255 255 255\n0 0 0\n"));

        let png = dir.join("frame.png");
        save_frame(&png, &frame).unwrap();
        let image = image::open(&png).unwrap().to_rgb8();
        assert_eq!(image.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(image.get_pixel(1, 0), &Rgb([0, 0, 0]));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
