use std::ops::Range;

/// Open value band centered on `0.5` whose width grows with the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    low: f64,
    high: f64,
}

impl Band {
    pub fn from_threshold(threshold: u8) -> Self {
        let fraction = f64::from(threshold) / 255.0;
        Band {
            low: (1.0 - fraction) / 2.0,
            high: (1.0 + fraction) / 2.0,
        }
    }

    /// Bounds are exclusive, so a zero threshold contains nothing.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.low < value && value < self.high
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.low, self.high)
    }
}

pub fn eligibility(keys: &[f64], band: Band) -> Vec<bool> {
    keys.iter().map(|&key| band.contains(key)).collect()
}

/// Indices at which the mask flips relative to its predecessor.
pub fn transitions(mask: &[bool]) -> Vec<usize> {
    mask.windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] != pair[1])
        .map(|(idx, _)| idx + 1)
        .collect()
}

/// Ordered partition of a line into contiguous, non-empty ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSet(Vec<Range<usize>>);

impl IntervalSet {
    /// Cuts the line at every transition of `mask` in a single pass.
    pub fn from_mask(mask: &[bool]) -> Self {
        if mask.is_empty() {
            return IntervalSet(Vec::new());
        }
        let mut ranges = Vec::new();
        let mut start = 0;
        for cut in transitions(mask) {
            ranges.push(start..cut);
            start = cut;
        }
        ranges.push(start..mask.len());
        IntervalSet(ranges)
    }

    pub fn end(&self) -> usize {
        self.0.last().map(|r| r.end).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.0.iter().cloned()
    }
}
