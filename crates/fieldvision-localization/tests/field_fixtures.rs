use std::f64::consts::PI;

use fieldvision_localization::{
    AngleUnit, CameraOffset, CameraRelativePose, FieldLayout, MarkerDetection, MarkerMetadata,
    Pose2d, PoseEstimateError, PoseEstimator, Quaternion,
};

const TOLERANCE: f64 = 0.1;

fn wall_tag() -> MarkerMetadata {
    MarkerMetadata {
        id: 2,
        name: "testTag".into(),
        position: [60.25, 35.41, 4.0],
        orientation: Quaternion::new(0.3536, -0.6124, 0.6124, -0.3536),
    }
}

fn detection(yaw_deg: f64, bearing_deg: f64, range: f64) -> MarkerDetection {
    MarkerDetection {
        id: 2,
        metadata: Some(wall_tag()),
        camera_pose: Some(CameraRelativePose {
            yaw: yaw_deg,
            bearing: bearing_deg,
            range,
            unit: AngleUnit::Degrees,
        }),
    }
}

fn assert_is_close(actual: Pose2d, expected: Pose2d) {
    assert!(
        actual.approx_eq(&expected, TOLERANCE, TOLERANCE),
        "expected ({:.1}, {:.1}, {:.2}) to be close to ({:.1}, {:.1}, {:.2})",
        actual.x,
        actual.y,
        actual.heading,
        expected.x,
        expected.y,
        expected.heading
    );
}

#[test]
fn absent_detection_raises_invalid_input() {
    let estimator = PoseEstimator::default();
    assert!(matches!(
        estimator.estimate_detection(None),
        Err(PoseEstimateError::InvalidInput { .. })
    ));
}

#[test]
fn detection_without_metadata_raises_invalid_input() {
    let mut det = detection(0.0, 0.0, 24.0);
    det.metadata = None;
    assert!(matches!(
        PoseEstimator::default().estimate_detection(Some(&det)),
        Err(PoseEstimateError::InvalidInput { .. })
    ));
}

#[test]
fn zero_quaternion_raises_invalid_input() {
    let mut det = detection(0.0, 0.0, 24.0);
    if let Some(meta) = det.metadata.as_mut() {
        meta.orientation = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    }
    assert!(matches!(
        PoseEstimator::default().estimate_detection(Some(&det)),
        Err(PoseEstimateError::InvalidInput { .. })
    ));
}

#[test]
fn surveyed_poses_are_reproduced() {
    let cases = [
        (
            (0.0, 0.0, 24.0),
            CameraOffset::new(-7.77, 0.505, 0.0),
            Pose2d::new(28.5, 35.9, 0.0),
        ),
        (
            (0.0, -45.0, 24.0),
            CameraOffset::new(-7.77, 0.505, 0.0),
            Pose2d::new(35.5, 52.9, 0.0),
        ),
        (
            (-45.0, -45.0, 24.0),
            CameraOffset::new(-7.77, 0.505, 0.0),
            Pose2d::new(55.1, 65.3, PI / 4.0),
        ),
        (
            (0.0, 0.0, 24.0),
            CameraOffset::new(8.9, -1.5, PI),
            Pose2d::new(27.4, 36.9, PI),
        ),
        (
            (0.0, 0.0, 24.0),
            CameraOffset::new(8.9, -1.5, PI * 3.0 / 4.0),
            Pose2d::new(28.9, 30.2, PI * 3.0 / 4.0),
        ),
    ];

    for ((yaw, bearing, range), offset, expected) in cases {
        let estimator = PoseEstimator::new(offset);
        let pose = estimator
            .estimate_detection(Some(&detection(yaw, bearing, range)))
            .expect("valid detection");
        assert_is_close(pose, expected);
    }
}

#[test]
fn catalog_lookup_matches_direct_detection() {
    let layout = FieldLayout::new(vec![wall_tag()]);
    let estimator = PoseEstimator::new(CameraOffset::new(-7.77, 0.505, 0.0));
    let det = detection(0.0, 0.0, 24.0);
    let direct = estimator.estimate_detection(Some(&det)).unwrap();
    let via_catalog = estimator
        .estimate_with_catalog(&layout, 2, det.camera_pose.as_ref().unwrap())
        .unwrap();
    assert_eq!(direct, via_catalog);

    assert!(matches!(
        estimator.estimate_with_catalog(&layout, 9, det.camera_pose.as_ref().unwrap()),
        Err(PoseEstimateError::InvalidInput { .. })
    ));
}
