//! Game piece counting for Conquest.
//!
//! Object detection runs outside this crate. A [`Detector`] turns an image
//! into labelled [`Detection`]s, and [`count_pieces`] sums the numeric
//! labels into an army count. [`JsonDetections`] reads detections that a
//! recognition model already wrote next to the image.

pub mod count;
pub mod detection;
pub mod error;

pub use count::{PieceCount, count_pieces};
pub use detection::{BoundingBox, Detection, Detector, JsonDetections};
pub use error::{CounterError, CounterResult};
