use crate::interval::IntervalSet;

/// Builds the full-line source order: the first interval keeps its order, every
/// following interval is stably sorted by ascending key.
pub fn line_permutation(keys: &[f64], intervals: &IntervalSet) -> Vec<usize> {
    let mut order = Vec::with_capacity(keys.len());
    for (idx, range) in intervals.iter().enumerate() {
        let start = order.len();
        order.extend(range);
        if idx > 0 {
            order[start..].sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));
        }
    }
    order
}

/// Reorders the color channels of a packed RGBA line so that pixel `p` takes its
/// color from `order[p]`. Alpha stays where it was.
pub fn apply_rgb(line: &mut [u8], order: &[usize], scratch: &mut Vec<u8>) {
    debug_assert_eq!(line.len(), order.len() * 4);
    scratch.clear();
    scratch.extend_from_slice(line);
    for (dst, &src) in line.chunks_exact_mut(4).zip(order) {
        dst[..3].copy_from_slice(&scratch[src * 4..src * 4 + 3]);
    }
}
