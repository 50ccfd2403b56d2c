use image::{Pixel, Rgba, RgbaImage};
use tracing::debug;

pub mod config;
pub mod error;
pub mod interval;
pub mod io;
pub mod orientation;
pub mod permutation;
pub mod sorting;

use self::interval::{Band, IntervalSet};
pub use self::config::SortConfig;
pub use self::error::{ConfigError, Error};
pub use self::orientation::Direction;
pub use self::sorting::ValueMethod;

/// Sorts `image` along the lines picked by `direction` and returns the result.
///
/// Every line is cut where its pixels cross in or out of the band `threshold`
/// defines, and each run after the first is stably sorted by the `method` key.
/// Only color moves, alpha stays at its original position. A zero threshold
/// returns an identical image.
pub fn transform(
    image: &RgbaImage,
    threshold: u8,
    method: ValueMethod,
    direction: Direction,
) -> RgbaImage {
    debug!(
        width = image.width(),
        height = image.height(),
        threshold,
        method = method.name(),
        direction = direction.name(),
        "sorting image"
    );
    let mut lines = orientation::orient(image, direction);
    sort_rows(&mut lines, Band::from_threshold(threshold), method);
    orientation::restore(lines, direction)
}

pub fn transform_with(image: &RgbaImage, config: &SortConfig) -> RgbaImage {
    transform(image, config.threshold, config.method, config.direction)
}

/// Sorts every row of `image` in place. Rows are independent of each other,
/// so with the `rayon` feature they are spread over the thread pool.
pub fn sort_rows(image: &mut RgbaImage, band: Band, method: ValueMethod) {
    #[cfg(feature = "rayon")]
    sort_rows_parallel(image, band, method);
    #[cfg(not(feature = "rayon"))]
    sort_rows_sequential(image, band, method);
}

/// Sorts every row on the calling thread. Same output as [`sort_rows`].
pub fn sort_rows_sequential(image: &mut RgbaImage, band: Band, method: ValueMethod) {
    let stride = image.width() as usize * 4;
    if stride == 0 {
        return;
    }
    let rows: &mut [u8] = image;
    // allocate buffer outside to prevent frequent reallocations
    let mut scratch = Vec::new();
    for line in rows.chunks_exact_mut(stride) {
        sort_line(line, band, method, &mut scratch);
    }
}

#[cfg(feature = "rayon")]
fn sort_rows_parallel(image: &mut RgbaImage, band: Band, method: ValueMethod) {
    use rayon::prelude::*;

    let stride = image.width() as usize * 4;
    if stride == 0 {
        return;
    }
    let rows: &mut [u8] = image;
    rows.par_chunks_exact_mut(stride)
        .for_each_init(Vec::new, |scratch, line| {
            sort_line(line, band, method, scratch)
        });
}

/// Sorts one packed RGBA line. `scratch` only serves as a copy buffer.
pub fn sort_line(line: &mut [u8], band: Band, method: ValueMethod, scratch: &mut Vec<u8>) {
    let value = method.function::<Rgba<u8>>();
    let keys: Vec<f64> = line
        .chunks_exact(4)
        .map(|channels| value(Rgba::from_slice(channels)))
        .collect();
    let intervals = IntervalSet::from_mask(&interval::eligibility(&keys, band));
    let order = permutation::line_permutation(&keys, &intervals);
    permutation::apply_rgb(line, &order, scratch);
}
