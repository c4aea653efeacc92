/// Weight applied to sentences in the last tenth and to anything the table does not cover.
pub const DEFAULT_WEIGHT: f64 = 0.15;

/// (lower bound of normalized position, weight), ascending. Each bucket runs up to
/// the next lower bound. Early sentences weigh most, the tail more than the middle.
/// Values from Seki, NTCIR-3 TSC.
pub const POSITION_WEIGHTS: [(f64, f64); 10] = [
    (0.0, 0.17),
    (0.1, 0.23),
    (0.2, 0.14),
    (0.3, 0.08),
    (0.4, 0.05),
    (0.5, 0.04),
    (0.6, 0.06),
    (0.7, 0.04),
    (0.8, 0.04),
    (0.9, DEFAULT_WEIGHT),
];

/// Weight for a normalized position `index / total`.
pub fn weight_for(distribution: f64) -> f64 {
    POSITION_WEIGHTS
        .iter()
        .zip(POSITION_WEIGHTS.iter().skip(1).map(|&(lo, _)| lo).chain(std::iter::once(f64::INFINITY)))
        .find(|&(&(lo, _), hi)| lo <= distribution && distribution < hi)
        .map(|(&(_, weight), _)| weight)
        .unwrap_or(DEFAULT_WEIGHT)
}

/// Weight for the sentence at `index` of `total` sentences.
pub fn position_weight(index: usize, total: usize) -> f64 {
    if total == 0 { return DEFAULT_WEIGHT; }
    weight_for(index as f64 / total as f64)
}
