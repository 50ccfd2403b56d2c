use crate::error::ConfigError;
use crate::orientation::Direction;
use crate::sorting::ValueMethod;

pub const DEFAULT_THRESHOLD: u8 = 100;

/// The parameters of a single sorting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub threshold: u8,
    pub method: ValueMethod,
    pub direction: Direction,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            threshold: DEFAULT_THRESHOLD,
            method: ValueMethod::default(),
            direction: Direction::default(),
        }
    }
}

pub fn parse_threshold(s: &str) -> Result<u8, ConfigError> {
    s.trim()
        .parse::<u8>()
        .map_err(|_| ConfigError::InvalidThreshold(String::from(s)))
}

/// Maps a percentage onto the threshold scale, truncating like the preset
/// buttons did (`100%` lands on 254).
pub fn threshold_from_percent(s: &str) -> Result<u8, ConfigError> {
    let pct = s
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidPercent(String::from(s)))?;
    if !(0.0..=100.0).contains(&pct) {
        return Err(ConfigError::InvalidPercent(String::from(s)));
    }
    Ok((pct * 2.55).trunc() as u8)
}
