use log::debug;

use crate::error::{Error, Result};
use crate::feature_space::FeatureSpace;
use crate::labels::LabelTable;
use crate::parser::CaptureFile;
use crate::reading::RawReading;

/// Value recorded for a source absent from a sample's readings. Must agree
/// with the consumer of the generated header.
pub const ABSENT_SOURCE_VALUE: u32 = 0;

/// One vectorized sample: its class label and a feature row aligned to
/// the feature space's column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    /// Class label name
    pub label: String,
    /// Integer class index from the label table
    pub label_index: u32,
    /// Absolute signal magnitudes, one per feature column
    pub features: Vec<u32>,
}

/// Vectorize every sample of every capture file against the finished
/// feature space.
///
/// Cases come out in discovery order: file order, then sample order within
/// each file. Columns a sample never observed hold `sentinel`. Every label
/// must already be registered; a miss is a configuration error rather than
/// a silent skip.
pub fn vectorize(
    files: &[CaptureFile],
    space: &FeatureSpace,
    labels: &LabelTable,
    sentinel: u32,
) -> Result<Vec<Case>> {
    let mut cases = Vec::new();
    for file in files {
        let label_index = labels.index_of(&file.label).ok_or_else(|| {
            Error::Config(format!(
                "label {:?} was never registered in the label table",
                file.label
            ))
        })?;
        for sample in &file.samples {
            let features = space
                .iter()
                .map(|source_id| {
                    sample
                        .find(source_id)
                        .map(RawReading::magnitude)
                        .unwrap_or(sentinel)
                })
                .collect();
            cases.push(Case {
                label: file.label.clone(),
                label_index,
                features,
            });
        }
    }
    debug!(
        "vectorized {} cases over {} feature columns",
        cases.len(),
        space.len()
    );
    Ok(cases)
}
