use std::fs;
use std::path::Path;

use log::info;

use crate::emitter::{ArtifactWriter, DEFAULT_ARTIFACT_NAME};
use crate::error::{Error, Result};
use crate::feature_space::FeatureSpace;
use crate::labels::LabelTable;
use crate::parser::CaptureFile;
use crate::splitter::{shuffle_and_split, Split, DEFAULT_SHUFFLE_SEED, DEFAULT_TRAIN_PERCENTAGE};
use crate::vectorizer::{vectorize, ABSENT_SOURCE_VALUE};

/// Batch pipeline from raw capture logs to the emitted dataset header.
///
/// Capture files are appended one at a time, registering their class
/// labels in discovery order. Rendering then runs every stage to
/// completion in sequence: feature space construction over the complete
/// input, vectorization, seeded shuffle and split, artifact rendering.
#[derive(Debug)]
pub struct Pipeline {
    files: Vec<CaptureFile>,
    labels: LabelTable,
    train_percentage: f64,
    shuffle_seed: u64,
    sentinel: u32,
}

impl Pipeline {
    /// Create a pipeline with the default train percentage, shuffle seed
    /// and absent-source sentinel.
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            labels: LabelTable::new(),
            train_percentage: DEFAULT_TRAIN_PERCENTAGE,
            shuffle_seed: DEFAULT_SHUFFLE_SEED,
            sentinel: ABSENT_SOURCE_VALUE,
        }
    }

    /// Share of cases assigned to the training partition.
    pub fn train_percentage(&self) -> f64 {
        self.train_percentage
    }

    /// Set the share of cases assigned to training, in `(0, 100]`.
    pub fn set_train_percentage(&mut self, percentage: f64) -> Result<()> {
        if !(percentage > 0.0 && percentage <= 100.0) {
            return Err(Error::Config(format!(
                "train percentage must be in (0, 100], got {}",
                percentage
            )));
        }
        self.train_percentage = percentage;
        Ok(())
    }

    /// Seed of the shuffle permutation.
    pub fn shuffle_seed(&self) -> u64 {
        self.shuffle_seed
    }

    /// Set the shuffle seed. The same seed over the same input keeps
    /// train/test membership identical across regenerations.
    pub fn set_shuffle_seed(&mut self, seed: u64) {
        self.shuffle_seed = seed;
    }

    /// Value recorded for a source absent from a sample.
    pub fn sentinel(&self) -> u32 {
        self.sentinel
    }

    /// Set the absent-source sentinel.
    pub fn set_sentinel(&mut self, sentinel: u32) {
        self.sentinel = sentinel;
    }

    /// Parse one capture file's text and register its label.
    ///
    /// A file with zero valid bursts still claims a label table entry;
    /// it just contributes no cases to the dataset.
    pub fn append(&mut self, file_name: &str, text: &str) -> Result<()> {
        let file = CaptureFile::parse(file_name, text)?;
        self.labels.register(&file.label);
        self.files.push(file);
        Ok(())
    }

    /// Read, parse and register one capture file from disk. The file is
    /// fully read and closed before parsing begins; no handle survives
    /// into later stages.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::Config(format!("capture path {:?} has no UTF-8 file name", path))
            })?
            .to_string();
        let text = fs::read_to_string(path)?;
        self.append(&file_name, &text)
    }

    /// Capture files appended so far, in discovery order.
    pub fn files(&self) -> &[CaptureFile] {
        &self.files
    }

    /// Label table built up by `append`, in discovery order.
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Run every stage and render the artifact under its default name.
    pub fn render(&self) -> Result<String> {
        self.render_as(DEFAULT_ARTIFACT_NAME)
    }

    /// Run every stage and render the artifact, deriving the include
    /// guard from `artifact_name`.
    pub fn render_as(&self, artifact_name: &str) -> Result<String> {
        if self.files.is_empty() {
            return Err(Error::EmptyInput);
        }

        let space = FeatureSpace::from_files(&self.files);
        let cases = vectorize(&self.files, &space, &self.labels, self.sentinel)?;
        if cases.is_empty() {
            return Err(Error::EmptyInput);
        }
        info!(
            "feature space: {} sources, dataset: {} cases, {} labels",
            space.len(),
            cases.len(),
            self.labels.len()
        );

        let split = shuffle_and_split(cases, self.train_percentage, self.shuffle_seed);
        info!(
            "train: {} cases, test: {} cases",
            split.x_train.len(),
            split.x_test.len()
        );

        Ok(ArtifactWriter::new(artifact_name, &self.labels, &space, &split).render())
    }

    /// Render the artifact and write it to `path` in one shot. Rendering
    /// happens entirely in memory first, so a failing stage never leaves
    /// a partial artifact on disk.
    pub fn write_artifact<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let artifact_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::Config(format!("artifact path {:?} has no UTF-8 file name", path))
            })?;
        let rendered = self.render_as(artifact_name)?;
        fs::write(path, rendered)?;
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
