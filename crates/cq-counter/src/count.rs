//! Summing detections into an army count.

use serde::{Deserialize, Serialize};

use crate::detection::Detection;

/// The result of counting pieces in one image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceCount {
    /// Sum of the values of every counted piece.
    pub armies: u32,
    /// Number of detections that contributed to `armies`.
    pub pieces: usize,
    /// Detections at or above the confidence floor whose label is not a number.
    pub unrecognized: Vec<String>,
    /// Detections dropped for low confidence.
    pub rejected: usize,
}

/// Sum the numeric labels of detections at or above `min_confidence`.
pub fn count_pieces(detections: &[Detection], min_confidence: f32) -> PieceCount {
    let mut count = PieceCount::default();

    for detection in detections {
        if detection.confidence < min_confidence {
            count.rejected += 1;
            continue;
        }
        match detection.value() {
            Some(value) => {
                count.armies = count.armies.saturating_add(value);
                count.pieces += 1;
            }
            None => count.unrecognized.push(detection.label.clone()),
        }
    }

    count
}
