use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a slider.
///
/// Every variant is an invalid configuration detected at construction time.
/// Geometry and pointer problems never surface as errors: they are deferred
/// or clamped by the widget.
#[derive(Debug, Error)]
pub enum SliderError {
    /// The allowed range has no values to snap to.
    #[error("allowed range must contain at least one value")]
    EmptyRange,
    /// The allowed range is not strictly ascending.
    #[error(
        "allowed range must be strictly ascending, found {value} after {previous} at index {index}"
    )]
    UnorderedRange {
        /// Index of the offending value.
        index: usize,
        /// The value preceding it.
        previous: i32,
        /// The offending value.
        value: i32,
    },
    /// The thumb dimension resolves to a non-positive pixel size.
    #[error("thumb size must be positive, got {0} dp")]
    InvalidThumbSize(f64),
    /// The configuration file could not be read.
    #[error("failed to read slider configuration `{path}`")]
    ReadConfig {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration could not be parsed.
    #[error("failed to parse slider configuration")]
    ParseConfig(#[from] toml::de::Error),
}
