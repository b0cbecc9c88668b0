//! Seeded train/validation splitting

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::frame::DataFrame;

/// Split a frame into (train, validation) by row
///
/// Rows are shuffled with a seeded generator, so the same `random_state`
/// reproduces the same split. `test_size` is the validation fraction and
/// must lie strictly between 0 and 1; the validation side gets
/// `ceil(rows * test_size)` rows.
pub fn train_test_split(
    df: &DataFrame,
    test_size: f64,
    random_state: u64,
) -> Result<(DataFrame, DataFrame)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(Error::InvalidValue(format!(
            "train_test_split requires 0 < test_size < 1, got {}",
            test_size
        )));
    }

    let n = df.row_count();
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(random_state);
    indices.shuffle(&mut rng);

    let test_len = ((n as f64) * test_size).ceil() as usize;
    let (test_idx, train_idx) = indices.split_at(test_len.min(n));

    Ok((df.take(train_idx)?, df.take(test_idx)?))
}
