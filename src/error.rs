use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to open image {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("input image data is empty")]
    EmptyInput,

    #[error("failed to save image {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rejected parameters. Nothing is clamped into range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("threshold must be an integer in 0..=255, got `{0}`")]
    InvalidThreshold(String),

    #[error("percentage must be a number in 0..=100, got `{0}`")]
    InvalidPercent(String),

    #[error("unknown sorting method `{0}`, expected luminosity, hue or saturation")]
    UnknownMethod(String),

    #[error("unknown direction `{0}`, expected rows or columns")]
    UnknownDirection(String),
}
