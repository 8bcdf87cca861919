//! # Density-Independent Pixels (Dp)
//!
//! Slider dimensions (thumb size, bar stroke) are configured in dp so that a
//! thumb keeps the same physical size across screen densities. The conversion
//! to physical pixels goes through a process-wide scale factor stored in
//! [`SCALE_FACTOR`], which the host sets once from the device density.
//!
//! ## Usage
//!
//! ```
//! use slider_bar::{Dp, Px};
//!
//! let thumb = Dp(24.0);
//! // Without an explicit scale factor 1 dp maps to 1 px.
//! assert_eq!(thumb.to_px(), Px(24.0));
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;
use serde::Deserialize;

use crate::px::Px;

/// Global scale factor for converting between dp and physical pixels.
///
/// The scale factor represents how many physical pixels correspond to one dp
/// unit. It defaults to `1.0` until [`set_scale_factor`] is called.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global scale factor.
///
/// Non-finite or non-positive factors are ignored.
pub fn set_scale_factor(factor: f64) {
    if !factor.is_finite() || factor <= 0.0 {
        tracing::warn!(factor, "ignoring invalid scale factor");
        return;
    }
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = factor;
}

/// Returns the current global scale factor.
pub fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Dp(pub f64);

impl Dp {
    /// Converts this value to physical pixels as an `f64`.
    pub fn to_pixels_f64(&self) -> f64 {
        self.0 * scale_factor()
    }

    /// Creates a `Dp` value from physical pixels.
    pub fn from_pixels_f64(value: f64) -> Self {
        Dp(value / scale_factor())
    }

    /// Converts this value to [`Px`].
    pub fn to_px(&self) -> Px {
        Px::from_dp(*self)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}

impl From<Px> for Dp {
    fn from(px: Px) -> Self {
        Dp::from_pixels_f64(px.to_f32() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scale_factor_is_identity() {
        // Tests never call `set_scale_factor`, so the factor stays at 1.0.
        assert_eq!(scale_factor(), 1.0);
        assert_eq!(Dp(10.0).to_px(), Px(10.0));
        assert_eq!(Dp::from(Px(12.0)), Dp(12.0));
    }

    #[test]
    fn deserializes_as_plain_number() {
        #[derive(Deserialize)]
        struct Wrapper {
            size: Dp,
        }

        let wrapper: Wrapper = toml::from_str("size = 18.5").expect("valid dp");
        assert_eq!(wrapper.size, Dp(18.5));
    }
}
