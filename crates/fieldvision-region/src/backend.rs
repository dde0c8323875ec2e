use fieldvision_core::Contour;

use crate::params::ProcessorParams;

/// Image-processing primitives the color pipeline consumes.
///
/// An implementation blurs the frame, converts it to 8-bit HSV, masks it with
/// `params.color_ranges`, erodes then dilates the mask with a square
/// structuring element, and traces the mask's contours. Any scratch buffers
/// belong to the backend value and may be reused across frames.
pub trait VisionBackend {
    type Frame: ?Sized;

    /// `(width, height)` of `frame` in px.
    fn frame_size(&self, frame: &Self::Frame) -> (u32, u32);

    /// Candidate contours in enumeration order; may be empty.
    fn candidate_contours(&mut self, frame: &Self::Frame, params: &ProcessorParams)
        -> Vec<Contour>;
}
