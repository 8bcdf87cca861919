//! Construction-time slider configuration.
//!
//! A configuration can be built in code or loaded from TOML:
//!
//! ```toml
//! range = [0, 10, 25, 50, 100]
//! thumb_size = 24.0
//! bar_height = 4.0
//! color = "#0099CC"
//! settle_duration_ms = 10
//! ```
//!
//! Every key is optional. A missing `range` selects `0, 5, …, 100`.

use std::{fs, path::Path, time::Duration};

use serde::Deserialize;

use crate::{color::Color, dp::Dp, error::SliderError, snapper::RangeSnapper};

/// Default thumb edge length.
pub const DEFAULT_THUMB_SIZE: Dp = Dp(24.0);
/// Default stroke width of the connecting bar.
pub const DEFAULT_BAR_HEIGHT: Dp = Dp(4.0);
/// Default duration of the release animation.
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(10);

/// Slider configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    /// Allowed snap values, strictly ascending. `None` selects the default
    /// range.
    pub range: Option<Vec<i32>>,
    /// Edge length of a thumb.
    pub thumb_size: Dp,
    /// Stroke width of the line joining both thumbs.
    pub bar_height: Dp,
    /// Color of the connecting line.
    pub color: Color,
    /// Duration of the release animation in milliseconds.
    pub settle_duration_ms: u64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            range: None,
            thumb_size: DEFAULT_THUMB_SIZE,
            bar_height: DEFAULT_BAR_HEIGHT,
            color: Color::default(),
            settle_duration_ms: DEFAULT_SETTLE_DURATION.as_millis() as u64,
        }
    }
}

impl SliderConfig {
    /// Parses a configuration from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, SliderError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SliderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| SliderError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Sets the allowed snap values.
    pub fn with_range(mut self, range: impl IntoIterator<Item = i32>) -> Self {
        self.range = Some(range.into_iter().collect());
        self
    }

    /// Sets the thumb edge length.
    pub fn with_thumb_size(mut self, thumb_size: Dp) -> Self {
        self.thumb_size = thumb_size;
        self
    }

    /// Sets the release animation duration.
    pub fn with_settle_duration(mut self, duration: Duration) -> Self {
        self.settle_duration_ms = duration.as_millis() as u64;
        self
    }

    /// The release animation duration.
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }

    /// Builds the snapper for the configured range.
    pub fn snapper(&self) -> Result<RangeSnapper, SliderError> {
        match &self.range {
            Some(values) => RangeSnapper::new(values.iter().copied()),
            None => Ok(RangeSnapper::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = SliderConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, SliderConfig::default());
        assert_eq!(
            config.snapper().expect("default range"),
            RangeSnapper::default()
        );
        assert_eq!(config.settle_duration(), Duration::from_millis(10));
    }

    #[test]
    fn parses_every_key() {
        let config = SliderConfig::from_toml_str(
            r##"
                range = [0, 10, 25, 50, 100]
                thumb_size = 32.0
                bar_height = 2.5
                color = "#FF0000"
                settle_duration_ms = 40
            "##,
        )
        .expect("valid config");

        assert_eq!(config.range, Some(vec![0, 10, 25, 50, 100]));
        assert_eq!(config.thumb_size, Dp(32.0));
        assert_eq!(config.bar_height, Dp(2.5));
        assert_eq!(config.color, Color::from_rgb_u8(255, 0, 0));
        assert_eq!(config.settle_duration(), Duration::from_millis(40));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_colors() {
        assert!(matches!(
            SliderConfig::from_toml_str("steps = 3"),
            Err(SliderError::ParseConfig(_))
        ));
        assert!(matches!(
            SliderConfig::from_toml_str("color = \"blue\""),
            Err(SliderError::ParseConfig(_))
        ));
    }

    #[test]
    fn empty_range_fails_when_building_the_snapper() {
        let config = SliderConfig::from_toml_str("range = []").expect("syntactically valid");
        assert!(matches!(config.snapper(), Err(SliderError::EmptyRange)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SliderConfig::load("/definitely/not/here/slider.toml")
            .expect_err("file does not exist");
        match err {
            SliderError::ReadConfig { path, .. } => {
                assert_eq!(path, Path::new("/definitely/not/here/slider.toml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
