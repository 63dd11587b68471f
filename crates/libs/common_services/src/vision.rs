pub mod client;
pub mod error;
pub mod interfaces;

pub use client::{FaceVision, RekognitionVision};
pub use error::{SearchFailure, VisionError};
pub use interfaces::{FaceMatch, IndexOutcome, IndexedFace};
