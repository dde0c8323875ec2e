use fieldvision_core::{ColorRange, Scale};
use serde::{Deserialize, Serialize};

/// An area bound as written in a config file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaSetting {
    pub value: f64,
    #[serde(default)]
    pub scale: Scale,
}

/// Configuration for the color detection pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorParams {
    /// Ranges to select, in 8-bit HSV. A pixel matching any range is kept.
    pub color_ranges: Vec<ColorRange>,
    /// Gaussian kernel side in px (odd). `0` or `1` disables the blur.
    pub blur_kernel: u32,
    /// Side of the square structuring element used to erode and dilate.
    pub structuring_element: u32,
    /// Erode passes followed by the same number of dilate passes.
    pub erode_dilate_iterations: u32,
    pub min_area: Option<AreaSetting>,
    pub max_area: Option<AreaSetting>,
}

impl Default for ProcessorParams {
    fn default() -> Self {
        Self {
            color_ranges: Vec::new(),
            blur_kernel: 7,
            structuring_element: 5,
            erode_dilate_iterations: 2,
            min_area: None,
            max_area: None,
        }
    }
}

impl ProcessorParams {
    pub fn for_colors(color_ranges: Vec<ColorRange>) -> Self {
        Self {
            color_ranges,
            ..Self::default()
        }
    }

    /// Gaussian sigma matching a kernel of `blur_kernel` px, the way OpenCV
    /// derives it when sigma is left at zero.
    pub fn blur_sigma(&self) -> Option<f32> {
        if self.blur_kernel <= 1 {
            return None;
        }
        let k = self.blur_kernel as f32;
        Some(0.3 * ((k - 1.0) * 0.5 - 1.0) + 0.8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn partial_config_fills_defaults() {
        let params: ProcessorParams = serde_json::from_str(
            r#"{ "erode_dilate_iterations": 1,
                 "min_area": { "value": 0.5, "scale": "percent" } }"#,
        )
        .expect("parse");
        assert_eq!(params.blur_kernel, 7);
        assert_eq!(params.erode_dilate_iterations, 1);
        assert_eq!(
            params.min_area,
            Some(AreaSetting {
                value: 0.5,
                scale: Scale::Percent
            })
        );
        assert!(params.max_area.is_none());
    }

    #[test]
    fn blur_sigma_follows_kernel_size() {
        let params = ProcessorParams::default();
        assert_abs_diff_eq!(params.blur_sigma().unwrap(), 1.4, epsilon = 1e-6);
        let no_blur = ProcessorParams {
            blur_kernel: 1,
            ..ProcessorParams::default()
        };
        assert!(no_blur.blur_sigma().is_none());
    }
}
