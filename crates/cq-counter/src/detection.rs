//! Detection records and the detector capability.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CounterError, CounterResult};

/// Region of an image, in coordinates normalized to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

/// One object recognized in an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Class label. Army pieces carry their value, e.g. `"1"`, `"5"`, `"10"`.
    pub label: String,
    /// Model confidence in `0.0..=1.0`.
    pub confidence: f32,
    /// Where the object is.
    #[serde(default)]
    pub bounds: BoundingBox,
}

impl Detection {
    /// Create a detection with empty bounds.
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
            bounds: BoundingBox::default(),
        }
    }

    /// Set the bounding box.
    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = bounds;
        self
    }

    /// The piece value carried by the label, if it is numeric.
    pub fn value(&self) -> Option<u32> {
        self.label.trim().parse().ok()
    }
}

/// Anything that can find game pieces in an image.
pub trait Detector {
    /// Return every object recognized in the image at `image`.
    fn detect(&self, image: &Path) -> CounterResult<Vec<Detection>>;
}

/// A detector that reads detections a model already wrote to JSON.
///
/// By default the file sits next to the image with `.json` appended to its
/// name (`board.jpg` → `board.jpg.json`). The file holds a JSON array of
/// detections.
#[derive(Debug, Clone, Default)]
pub struct JsonDetections {
    path: Option<PathBuf>,
}

impl JsonDetections {
    /// Read detections from the sidecar file of each image.
    pub fn sidecar() -> Self {
        Self::default()
    }

    /// Read detections from a fixed file, whatever image is given.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The file detections are read from for `image`.
    pub fn detections_path(&self, image: &Path) -> PathBuf {
        match &self.path {
            Some(path) => path.clone(),
            None => {
                let mut name = image.as_os_str().to_owned();
                name.push(".json");
                PathBuf::from(name)
            }
        }
    }
}

impl Detector for JsonDetections {
    fn detect(&self, image: &Path) -> CounterResult<Vec<Detection>> {
        let path = self.detections_path(image);
        if !path.exists() {
            return Err(CounterError::MissingDetections(image.to_path_buf()));
        }

        let content = std::fs::read_to_string(&path).map_err(|source| CounterError::Io {
            path: path.clone(),
            source,
        })?;
        let detections: Vec<Detection> =
            serde_json::from_str(&content).map_err(|source| CounterError::Parse {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(
            path = %path.display(),
            count = detections.len(),
            "loaded detections"
        );
        Ok(detections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn numeric_labels_have_values() {
        assert_eq!(Detection::new("5", 0.9).value(), Some(5));
        assert_eq!(Detection::new(" 10 ", 0.9).value(), Some(10));
        assert_eq!(Detection::new("cannon", 0.9).value(), None);
    }

    #[test]
    fn sidecar_path_appends_json() {
        let detector = JsonDetections::sidecar();
        assert_eq!(
            detector.detections_path(Path::new("photos/board.jpg")),
            PathBuf::from("photos/board.jpg.json")
        );
    }

    #[test]
    fn fixed_path_ignores_image() {
        let detector = JsonDetections::from_file("out.json");
        assert_eq!(
            detector.detections_path(Path::new("board.png")),
            PathBuf::from("out.json")
        );
    }

    #[test]
    fn reads_sidecar_file() {
        let dir = TempDir::new().unwrap();
        let image = dir.path().join("board.jpg");
        std::fs::write(
            dir.path().join("board.jpg.json"),
            r#"[
                {"label": "1", "confidence": 0.92, "bounds": {"x": 0.1, "y": 0.2, "width": 0.05, "height": 0.05}},
                {"label": "5", "confidence": 0.81}
            ]"#,
        )
        .unwrap();

        let detections = JsonDetections::sidecar().detect(&image).unwrap();
        assert_eq!(detections.len(), 2);
        assert!((detections[0].bounds.x - 0.1).abs() < f32::EPSILON);
        assert_eq!(detections[1].bounds, BoundingBox::default());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let image = dir.path().join("none.jpg");
        let err = JsonDetections::sidecar().detect(&image).unwrap_err();
        assert!(matches!(err, CounterError::MissingDetections(_)));
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bad.json");
        std::fs::write(&file, "{ not json").unwrap();
        let err = JsonDetections::from_file(&file)
            .detect(Path::new("board.jpg"))
            .unwrap_err();
        assert!(matches!(err, CounterError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }
}
