use std::sync::Arc;

use parking_lot::RwLock;

use crate::detection::RegionDetection;

/// Cross-thread handle to the latest published detection.
///
/// The frame loop publishes whole [`RegionDetection`] values; readers (a
/// telemetry or drive thread) take an `Arc` snapshot and never observe a
/// partially updated result.
#[derive(Clone, Debug, Default)]
pub struct SharedDetection {
    latest: Arc<RwLock<Option<Arc<RegionDetection>>>>,
}

impl SharedDetection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, detection: RegionDetection) {
        *self.latest.write() = Some(Arc::new(detection));
    }

    /// Latest published detection, or `None` before the first frame.
    pub fn snapshot(&self) -> Option<Arc<RegionDetection>> {
        self.latest.read().clone()
    }

    pub fn clear(&self) {
        *self.latest.write() = None;
    }
}
