//! Converts raw WiFi RSSI capture logs into a fixed-width train/test
//! dataset, emitted as a statically-initialized C++ header for an
//! indoor-localization classifier.
//!
//! Each capture file holds the scan bursts recorded in one physical room
//! and maps to one class label. The pipeline parses and deduplicates the
//! bursts, fixes a global feature space (the sorted union of every
//! observed source id), vectorizes each burst against it, shuffles and
//! splits the dataset with a seeded permutation, and renders the arrays
//! as compilable declarations.
//!
//! # Examples
//!
//! ```
//! use rssi_dataset::Pipeline;
//!
//! let mut pipeline = Pipeline::new();
//! pipeline.append("kitchen_data.dat", "1: HomeNet (-50)\n2: CafeAP (-60)\n")?;
//! pipeline.append("bedroom_data.dat", "1: CafeAP (-70)\n")?;
//! pipeline.set_train_percentage(100.0)?;
//!
//! let header = pipeline.render()?;
//! assert!(header.contains("vector<vector<float>> vec_X_train"));
//! # Ok::<(), rssi_dataset::Error>(())
//! ```

mod emitter;
mod error;
mod feature_space;
mod labels;
mod parser;
mod pipeline;
mod reading;
mod splitter;
mod vectorizer;

// Re-export main types
pub use self::emitter::{ArtifactWriter, DEFAULT_ARTIFACT_NAME};
pub use self::error::{Error, Result};
pub use self::feature_space::FeatureSpace;
pub use self::labels::LabelTable;
pub use self::parser::{CaptureFile, CAPTURE_FILE_SUFFIX};
pub use self::pipeline::Pipeline;
pub use self::reading::{RawReading, Sample};
pub use self::splitter::{
    shuffle_and_split, Split, DEFAULT_SHUFFLE_SEED, DEFAULT_TRAIN_PERCENTAGE,
};
pub use self::vectorizer::{vectorize, Case, ABSENT_SOURCE_VALUE};
