/// Errors returned by the pose estimator.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PoseEstimateError {
    /// The observation cannot produce a pose; the caller must not feed it in.
    #[error("invalid pose-estimation input: {reason}")]
    InvalidInput { reason: &'static str },
}

impl PoseEstimateError {
    pub(crate) const fn invalid(reason: &'static str) -> Self {
        Self::InvalidInput { reason }
    }
}
