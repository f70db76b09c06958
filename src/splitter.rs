use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::vectorizer::Case;

/// Default share of cases assigned to the training partition.
pub const DEFAULT_TRAIN_PERCENTAGE: f64 = 80.0;

/// Default shuffle seed. Fixed so that regenerating the artifact from the
/// same captures keeps the same train/test membership, which downstream
/// accuracy comparisons rely on.
pub const DEFAULT_SHUFFLE_SEED: u64 = 42;

/// The four parallel arrays consumed by the artifact emitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Split {
    /// Training feature rows
    pub x_train: Vec<Vec<u32>>,
    /// Training class indices, parallel to `x_train`
    pub y_train: Vec<u32>,
    /// Test feature rows
    pub x_test: Vec<Vec<u32>>,
    /// Test class indices, parallel to `x_test`
    pub y_test: Vec<u32>,
}

impl Split {
    /// Total number of cases across both partitions.
    pub fn len(&self) -> usize {
        self.x_train.len() + self.x_test.len()
    }

    /// Returns `true` if both partitions are empty.
    pub fn is_empty(&self) -> bool {
        self.x_train.is_empty() && self.x_test.is_empty()
    }
}

/// Shuffle the dataset with a seeded permutation, then split it at
/// `floor(len * train_percentage / 100)`: permuted cases before the split
/// point go to train, the rest to test.
///
/// `train_percentage` must lie in `(0, 100]`; [`crate::Pipeline`] validates
/// it before calling. No stratification by label is performed, so class
/// balance across the partitions is not guaranteed.
pub fn shuffle_and_split(mut cases: Vec<Case>, train_percentage: f64, seed: u64) -> Split {
    let mut rng = StdRng::seed_from_u64(seed);
    cases.shuffle(&mut rng);

    let division = (cases.len() as f64 * train_percentage / 100.0) as usize;
    let mut split = Split::default();
    for (index, case) in cases.into_iter().enumerate() {
        if index < division {
            split.x_train.push(case.features);
            split.y_train.push(case.label_index);
        } else {
            split.x_test.push(case.features);
            split.y_test.push(case.label_index);
        }
    }
    split
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cases(n: usize) -> Vec<Case> {
        (0..n)
            .map(|i| Case {
                label: format!("room{}", i),
                label_index: i as u32,
                features: vec![i as u32, 100 - i as u32],
            })
            .collect()
    }

    #[test]
    fn test_split_preserves_every_case() {
        let split = shuffle_and_split(cases(10), 80.0, DEFAULT_SHUFFLE_SEED);
        assert_eq!(split.x_train.len(), 8);
        assert_eq!(split.x_test.len(), 2);
        assert_eq!(split.y_train.len(), split.x_train.len());
        assert_eq!(split.y_test.len(), split.x_test.len());
        assert_eq!(split.len(), 10);

        // X rows stay aligned with their Y labels through the shuffle.
        for (row, &label) in split
            .x_train
            .iter()
            .chain(&split.x_test)
            .zip(split.y_train.iter().chain(&split.y_test))
        {
            assert_eq!(row[0], label);
        }
    }

    #[test]
    fn test_split_point_is_floored() {
        // 3 * 50 / 100 = 1.5, so one training case.
        let split = shuffle_and_split(cases(3), 50.0, DEFAULT_SHUFFLE_SEED);
        assert_eq!(split.x_train.len(), 1);
        assert_eq!(split.x_test.len(), 2);
    }

    #[test]
    fn test_full_train_split() {
        let split = shuffle_and_split(cases(4), 100.0, DEFAULT_SHUFFLE_SEED);
        assert_eq!(split.x_train.len(), 4);
        assert!(split.x_test.is_empty());
        assert!(split.y_test.is_empty());
    }

    #[test]
    fn test_same_seed_same_permutation() {
        let first = shuffle_and_split(cases(20), 70.0, 42);
        let second = shuffle_and_split(cases(20), 70.0, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_dataset_splits_empty() {
        let split = shuffle_and_split(Vec::new(), 80.0, DEFAULT_SHUFFLE_SEED);
        assert!(split.is_empty());
    }
}
