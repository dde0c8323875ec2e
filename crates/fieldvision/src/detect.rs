//! `imageproc`-backed color pipeline and end-to-end helpers.

use fieldvision_core::{rgb_to_hsv, ColorRange, Contour};
use fieldvision_region::{ColorDetectionProcessor, ProcessorParams, RegionDetection, VisionBackend};
use image::{GrayImage, Luma, RgbImage};
use imageproc::distance_transform::Norm;
use nalgebra::Point2;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::Error;

const MASK_ON: u8 = 255;

/// Vision backend built on `image` + `imageproc`.
///
/// The range mask is kept between frames and reallocated only when the
/// frame size changes.
#[derive(Debug, Default)]
pub struct ImageprocBackend {
    mask: GrayImage,
}

impl ImageprocBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mask of the last processed frame, before erode/dilate.
    pub fn last_mask(&self) -> &GrayImage {
        &self.mask
    }

    fn fill_mask(&mut self, hsv_source: &RgbImage, ranges: &[ColorRange]) {
        if self.mask.dimensions() != hsv_source.dimensions() {
            let (w, h) = hsv_source.dimensions();
            self.mask = GrayImage::new(w, h);
        }
        for (src, dst) in hsv_source.pixels().zip(self.mask.pixels_mut()) {
            let hsv = rgb_to_hsv(src.0);
            let on = ranges.iter().any(|r| r.contains(hsv));
            *dst = Luma([if on { MASK_ON } else { 0 }]);
        }
    }
}

/// Erode then dilate with a square element; `None` when disabled.
///
/// `n` passes of a `k`-radius square equal one pass of radius `n * k`.
fn open_mask(mask: &GrayImage, params: &ProcessorParams) -> Option<GrayImage> {
    let radius = (params.structuring_element / 2) * params.erode_dilate_iterations;
    if radius == 0 {
        return None;
    }
    let radius = u8::try_from(radius).unwrap_or(u8::MAX);
    let eroded = imageproc::morphology::erode(mask, Norm::LInf, radius);
    Some(imageproc::morphology::dilate(&eroded, Norm::LInf, radius))
}

impl VisionBackend for ImageprocBackend {
    type Frame = RgbImage;

    fn frame_size(&self, frame: &RgbImage) -> (u32, u32) {
        frame.dimensions()
    }

    fn candidate_contours(&mut self, frame: &RgbImage, params: &ProcessorParams) -> Vec<Contour> {
        match params.blur_sigma() {
            Some(sigma) => {
                let blurred = imageproc::filter::gaussian_blur_f32(frame, sigma);
                self.fill_mask(&blurred, &params.color_ranges);
            }
            None => self.fill_mask(frame, &params.color_ranges),
        }

        let opened = open_mask(&self.mask, params);
        let mask = opened.as_ref().unwrap_or(&self.mask);

        imageproc::contours::find_contours::<i32>(mask)
            .into_iter()
            .map(|c| Contour::new(c.points.iter().map(|p| Point2::new(p.x, p.y)).collect()))
            .collect()
    }
}

/// Run a one-shot detection on a single image.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, params), fields(width = img.width(), height = img.height()))
)]
pub fn detect_region(img: &RgbImage, params: ProcessorParams) -> Result<RegionDetection, Error> {
    let mut processor = ColorDetectionProcessor::new(ImageprocBackend::new(), params);
    processor.init(img.width(), img.height())?;
    Ok(processor.process_frame(img)?)
}

/// Load an image from disk and run [`detect_region`] on it.
pub fn detect_region_in_file(
    path: &std::path::Path,
    params: ProcessorParams,
) -> Result<RegionDetection, Error> {
    let img = image::open(path)?.to_rgb8();
    detect_region(&img, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use fieldvision_core::Scale;
    use image::Rgb;

    fn frame_with_square(color: [u8; 3]) -> RgbImage {
        let mut img = RgbImage::from_pixel(160, 120, Rgb([0, 0, 0]));
        for y in 40..80 {
            for x in 60..100 {
                img.put_pixel(x, y, Rgb(color));
            }
        }
        img
    }

    #[test]
    fn blue_square_is_found_at_its_center() {
        let img = frame_with_square([20, 60, 200]);
        let det = detect_region(&img, ProcessorParams::for_colors(ColorRange::blue())).unwrap();
        assert!(det.is_valid());

        let c = det.center(Scale::Pixels).unwrap();
        assert_abs_diff_eq!(c.x, 79.5, epsilon = 1.5);
        assert_abs_diff_eq!(c.y, 59.5, epsilon = 1.5);

        let area = det.area(Scale::Pixels).unwrap();
        assert!(area > 30.0 * 30.0 && area < 45.0 * 45.0, "area {area}");
    }

    #[test]
    fn red_processor_ignores_blue_square() {
        let img = frame_with_square([20, 60, 200]);
        let det = detect_region(&img, ProcessorParams::for_colors(ColorRange::red())).unwrap();
        assert!(!det.is_valid());
    }

    #[test]
    fn specks_are_removed_by_opening() {
        let mut img = RgbImage::from_pixel(64, 64, Rgb([0, 0, 0]));
        img.put_pixel(10, 10, Rgb([20, 60, 200]));
        img.put_pixel(11, 10, Rgb([20, 60, 200]));
        let mut backend = ImageprocBackend::new();
        let contours =
            backend.candidate_contours(&img, &ProcessorParams::for_colors(ColorRange::blue()));
        assert!(contours.is_empty());
    }

    #[test]
    fn mask_buffer_follows_frame_size() {
        let mut backend = ImageprocBackend::new();
        let params = ProcessorParams::for_colors(ColorRange::blue());
        backend.candidate_contours(&RgbImage::new(8, 6), &params);
        assert_eq!(backend.last_mask().dimensions(), (8, 6));
        backend.candidate_contours(&RgbImage::new(4, 4), &params);
        assert_eq!(backend.last_mask().dimensions(), (4, 4));
    }
}
