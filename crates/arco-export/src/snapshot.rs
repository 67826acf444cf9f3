//! One-shot JSON export of the full detected skeleton.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use arco_core::{Error, PoseFrame, PoseLandmark, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One exported keypoint, in the detector's normalized coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeypointRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub visibility: f32,
}

/// Snapshot document: every tracked joint of the underlying skeleton,
/// not just the three the engine judges on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseSnapshot {
    pub frame_id: u64,
    pub keypoints: Vec<KeypointRecord>,
}

impl PoseSnapshot {
    pub fn from_frame(frame: &PoseFrame) -> Result<Self> {
        if frame.landmarks.len() < PoseLandmark::COUNT {
            return Err(Error::IncompletePose {
                required: PoseLandmark::COUNT,
                available: frame.landmarks.len(),
            });
        }
        Ok(Self {
            frame_id: frame.frame_id,
            keypoints: frame
                .landmarks
                .iter()
                .map(|lm| KeypointRecord {
                    x: lm.x,
                    y: lm.y,
                    z: lm.z,
                    visibility: lm.visibility,
                })
                .collect(),
        })
    }
}

/// Write a snapshot of `frame` into `output_dir`, creating the
/// directory if needed. Returns the path of the written file.
pub fn export_pose_snapshot(frame: &PoseFrame, output_dir: &Path) -> Result<PathBuf> {
    let snapshot = PoseSnapshot::from_frame(frame)?;

    std::fs::create_dir_all(output_dir)?;
    let name = format!(
        "pose_frame_{}_{}.json",
        frame.frame_id,
        Utc::now().format("%Y%m%d_%H%M%S")
    );
    let path = output_dir.join(name);

    let writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(writer, &snapshot)?;
    tracing::info!(path = %path.display(), "pose snapshot exported");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arco_core::Landmark;

    fn full_frame(frame_id: u64) -> PoseFrame {
        let landmarks = (0..PoseLandmark::COUNT)
            .map(|i| Landmark::new(0.1, 0.2, 0.3, 0.9 - i as f32 * 0.001))
            .collect();
        PoseFrame::new(frame_id, 640, 480, landmarks)
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = export_pose_snapshot(&full_frame(123), dir.path()).expect("export");

        let files: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read dir")
            .collect();
        assert_eq!(files.len(), 1);

        let content = std::fs::read_to_string(&path).expect("read snapshot");
        let snapshot: PoseSnapshot = serde_json::from_str(&content).expect("parse");
        assert_eq!(snapshot.frame_id, 123);
        assert_eq!(snapshot.keypoints.len(), PoseLandmark::COUNT);
    }

    #[test]
    fn test_incomplete_skeleton_is_rejected() {
        let mut frame = full_frame(1);
        frame.landmarks.truncate(17);

        let dir = tempfile::tempdir().expect("tempdir");
        let err = export_pose_snapshot(&frame, dir.path()).expect_err("must reject");
        assert!(matches!(
            err,
            Error::IncompletePose {
                required: 33,
                available: 17
            }
        ));
    }
}
