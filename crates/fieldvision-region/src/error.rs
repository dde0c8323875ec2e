use fieldvision_core::FrameError;

/// Errors returned by the region detector and the color processor.
///
/// "Nothing detected" is not an error; see
/// [`RegionDetection::NotDetected`](crate::RegionDetection::NotDetected).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RegionError {
    #[error("area threshold must be finite and non-negative (got {value})")]
    InvalidThreshold { value: f64 },
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error("processor used before init() established the frame size")]
    NotInitialized,
}
