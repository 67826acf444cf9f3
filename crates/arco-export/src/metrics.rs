//! Per-frame CSV metrics logging.
//!
//! One row per processed frame, tagged with the experiment phase so the
//! offline plotter can compare accuracy across approaches.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use arco_core::{Result, Timestamp};
use arco_engine::{FeedbackHint, OutputRecord};
use serde::{Deserialize, Serialize};

const CSV_HEADER: &str =
    "frame,elbow_y,shoulder_y,angle,reference_angle,deviation,smoothed_status,fps,hint,phase";

/// Experiment phase a metrics file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Baseline,
    Angle,
    Smoothing,
    Shoulder,
    Final,
    Session,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Baseline => "baseline",
            SessionPhase::Angle => "angle",
            SessionPhase::Smoothing => "smoothing",
            SessionPhase::Shoulder => "shoulder",
            SessionPhase::Final => "final",
            SessionPhase::Session => "session",
        }
    }
}

/// Frame-rate estimate from consecutive caller timestamps
#[derive(Debug, Clone, Default)]
pub struct FpsMeter {
    prev: Option<Timestamp>,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the instantaneous rate; 0.0 on the first tick.
    pub fn tick(&mut self, now: Timestamp) -> f64 {
        let fps = match self.prev {
            Some(prev) => 1.0 / (now.secs_since(prev) + 1e-6),
            None => 0.0,
        };
        self.prev = Some(now);
        fps
    }
}

/// Buffered CSV writer appending one row per output record
pub struct MetricsLogger {
    writer: BufWriter<File>,
    phase: SessionPhase,
    rows: u64,
}

impl MetricsLogger {
    /// Create the log file and write the header row.
    pub fn create(path: &Path, phase: SessionPhase) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "{CSV_HEADER}")?;
        Ok(Self {
            writer,
            phase,
            rows: 0,
        })
    }

    pub fn append(&mut self, record: &OutputRecord, fps: f64) -> Result<()> {
        let hint = record
            .hint
            .as_ref()
            .map(FeedbackHint::as_label)
            .unwrap_or("calibrating");
        writeln!(
            self.writer,
            "{},{},{},{:.2},{:.2},{:.2},{},{:.1},{},{}",
            record.frame,
            record.joints.elbow.y,
            record.joints.shoulder.y,
            record.angle,
            record.reference_angle,
            record.deviation,
            record.smoothed_status,
            fps,
            hint,
            self.phase.as_str(),
        )?;
        self.rows += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn rows_written(&self) -> u64 {
        self.rows
    }
}
