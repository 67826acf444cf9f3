//! Fundamental types for the arco system.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a practice session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Timestamp wrapper with nanosecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp_nanos_opt().unwrap_or(0))
    }

    pub fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub fn from_secs_f64(secs: f64) -> Self {
        Self((secs * 1e9) as i64)
    }

    pub fn as_nanos(&self) -> i64 {
        self.0
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / 1e9
    }

    /// Seconds elapsed since an earlier timestamp (negative if `earlier` is newer)
    pub fn secs_since(&self, earlier: Timestamp) -> f64 {
        (self.0 - earlier.0) as f64 / 1e9
    }
}

/// Image-space point in pixels; origin top-left, y grows downward,
/// so a smaller y means "higher" on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Normalized landmark as produced by the pose detector:
/// `x`/`y` in [0, 1] relative to the frame, `z` relative depth,
/// `visibility` the detector's confidence that the joint is in frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub visibility: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }

    /// Convert to pixel coordinates, truncating toward zero.
    pub fn to_pixel(&self, width: u32, height: u32) -> PixelPoint {
        PixelPoint::new(
            (self.x * width as f32) as i32,
            (self.y * height as f32) as i32,
        )
    }
}

/// 33-landmark skeletal keypoint definition (BlazePose topology)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PoseLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl PoseLandmark {
    pub const COUNT: usize = 33;

    pub fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::Nose),
            1 => Some(Self::LeftEyeInner),
            2 => Some(Self::LeftEye),
            3 => Some(Self::LeftEyeOuter),
            4 => Some(Self::RightEyeInner),
            5 => Some(Self::RightEye),
            6 => Some(Self::RightEyeOuter),
            7 => Some(Self::LeftEar),
            8 => Some(Self::RightEar),
            9 => Some(Self::MouthLeft),
            10 => Some(Self::MouthRight),
            11 => Some(Self::LeftShoulder),
            12 => Some(Self::RightShoulder),
            13 => Some(Self::LeftElbow),
            14 => Some(Self::RightElbow),
            15 => Some(Self::LeftWrist),
            16 => Some(Self::RightWrist),
            17 => Some(Self::LeftPinky),
            18 => Some(Self::RightPinky),
            19 => Some(Self::LeftIndex),
            20 => Some(Self::RightIndex),
            21 => Some(Self::LeftThumb),
            22 => Some(Self::RightThumb),
            23 => Some(Self::LeftHip),
            24 => Some(Self::RightHip),
            25 => Some(Self::LeftKnee),
            26 => Some(Self::RightKnee),
            27 => Some(Self::LeftAnkle),
            28 => Some(Self::RightAnkle),
            29 => Some(Self::LeftHeel),
            30 => Some(Self::RightHeel),
            31 => Some(Self::LeftFootIndex),
            32 => Some(Self::RightFootIndex),
            _ => None,
        }
    }
}

/// One detector result: the full normalized skeleton plus the frame
/// dimensions needed to project landmarks into pixel space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseFrame {
    pub frame_id: u64,
    pub width: u32,
    pub height: u32,
    pub landmarks: Vec<Landmark>,
}

impl PoseFrame {
    pub fn new(frame_id: u64, width: u32, height: u32, landmarks: Vec<Landmark>) -> Self {
        Self {
            frame_id,
            width,
            height,
            landmarks,
        }
    }

    pub fn landmark(&self, which: PoseLandmark) -> Option<&Landmark> {
        self.landmarks.get(which as usize)
    }

    pub fn pixel(&self, which: PoseLandmark) -> Option<PixelPoint> {
        self.landmark(which)
            .map(|lm| lm.to_pixel(self.width, self.height))
    }

    /// Extract the bowing-arm joints (right shoulder, elbow, wrist) in
    /// pixel space. `None` when the skeleton does not cover the arm.
    pub fn joint_sample(&self) -> Option<JointSample> {
        Some(JointSample {
            shoulder: self.pixel(PoseLandmark::RightShoulder)?,
            elbow: self.pixel(PoseLandmark::RightElbow)?,
            wrist: self.pixel(PoseLandmark::RightWrist)?,
        })
    }
}

/// Bowing-arm joint positions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointSample {
    pub shoulder: PixelPoint,
    pub elbow: PixelPoint,
    pub wrist: PixelPoint,
}

impl JointSample {
    pub fn new(shoulder: PixelPoint, elbow: PixelPoint, wrist: PixelPoint) -> Self {
        Self {
            shoulder,
            elbow,
            wrist,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_skeleton(x: f32, y: f32) -> Vec<Landmark> {
        vec![Landmark::new(x, y, 0.0, 0.9); PoseLandmark::COUNT]
    }

    #[test]
    fn test_landmark_to_pixel_truncates() {
        let lm = Landmark::new(0.5, 0.25, 0.0, 1.0);
        assert_eq!(lm.to_pixel(640, 480), PixelPoint::new(320, 120));

        let lm = Landmark::new(0.333, 0.999, 0.0, 1.0);
        let px = lm.to_pixel(640, 480);
        assert_eq!(px.x, 213);
        assert_eq!(px.y, 479);
    }

    #[test]
    fn test_pose_landmark_roundtrip() {
        for i in 0..PoseLandmark::COUNT as u8 {
            let lm = PoseLandmark::from_index(i).expect("index in range");
            assert_eq!(lm as u8, i);
        }
        assert!(PoseLandmark::from_index(33).is_none());
    }

    #[test]
    fn test_joint_sample_extraction() {
        let frame = PoseFrame::new(1, 640, 480, uniform_skeleton(0.5, 0.5));
        let sample = frame.joint_sample().expect("full skeleton");
        assert_eq!(sample.shoulder, PixelPoint::new(320, 240));
        assert_eq!(sample.elbow, sample.wrist);
    }

    #[test]
    fn test_joint_sample_missing_arm() {
        // Skeleton truncated before the right wrist (index 16)
        let frame = PoseFrame::new(1, 640, 480, uniform_skeleton(0.5, 0.5)[..16].to_vec());
        assert!(frame.joint_sample().is_none());
    }

    #[test]
    fn test_timestamp_secs_since() {
        let t0 = Timestamp::from_secs_f64(1.0);
        let t1 = Timestamp::from_secs_f64(3.5);
        assert!((t1.secs_since(t0) - 2.5).abs() < 1e-9);
        assert!(t0.secs_since(t1) < 0.0);
    }
}
