/// Nearest-rank percentile with truncation, no interpolation.
///
/// Sorts a copy of `values` ascending and picks index `floor(len * p / 100)`,
/// clamped to the last element. An empty slice yields `0`.
pub fn percentile(values: &[u64], p: f64) -> u64 {
    if values.is_empty() {
        return 0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let index = (sorted.len() as f64 * p / 100.0).floor() as usize;
    sorted[index.min(sorted.len() - 1)]
}
