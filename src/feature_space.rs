use std::collections::BTreeSet;

use crate::parser::CaptureFile;

/// The fixed, sorted set of every distinct source id observed across all
/// capture files.
///
/// Lexicographic order over the raw case-sensitive strings assigns every
/// feature vector column, so the space must be built from the complete
/// input before any vector is produced: vectors built against a partial
/// space would disagree on column assignment.
#[derive(Debug, Clone)]
pub struct FeatureSpace {
    /// Source ids sorted ascending, no duplicates
    names: Vec<String>,
}

impl FeatureSpace {
    /// Collect every distinct source id in every sample of every file.
    pub fn from_files(files: &[CaptureFile]) -> Self {
        let set: BTreeSet<&str> = files
            .iter()
            .flat_map(|file| &file.samples)
            .flat_map(|sample| &sample.readings)
            .map(|reading| reading.source_id.as_str())
            .collect();
        Self {
            names: set.into_iter().map(str::to_string).collect(),
        }
    }

    /// Number of feature columns
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no source was ever observed
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column index of a source id, if it was observed
    pub fn index_of(&self, source_id: &str) -> Option<usize> {
        self.names
            .binary_search_by(|name| name.as_str().cmp(source_id))
            .ok()
    }

    /// Source ids in column order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over source ids in column order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_space_is_sorted_and_deduplicated() {
        let a = CaptureFile::parse("a_data.dat", "1: Zeta (-50)\n2: Alpha (-60)\n").unwrap();
        let b = CaptureFile::parse("b_data.dat", "1: Alpha (-70)\n2: Mid (-40)\n").unwrap();
        let space = FeatureSpace::from_files(&[a, b]);

        assert_eq!(space.names(), &["Alpha", "Mid", "Zeta"]);
        assert_eq!(space.index_of("Mid"), Some(1));
        assert_eq!(space.index_of("alpha"), None);
    }

    #[test]
    fn test_feature_space_of_no_files_is_empty() {
        let space = FeatureSpace::from_files(&[]);
        assert!(space.is_empty());
        assert_eq!(space.len(), 0);
    }
}
