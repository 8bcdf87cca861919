//! A dual-thumb range slider.
//!
//! A horizontal bar with a min and a max thumb. Thumbs are dragged freely;
//! on release each one settles onto the closest value of a configurable,
//! discrete range, and the snapped `(min, max)` pair is reported to a
//! listener.
//!
//! The slider is toolkit-agnostic: rendering, pointer dispatch and the
//! animation clock belong to the host, reached through [`SliderHost`] and
//! [`Canvas`]. See [`slider`] for a complete wiring example.
#![deny(missing_docs, clippy::unwrap_used)]

mod animation;
mod callback;
mod error;

pub mod color;
pub mod config;
pub mod dp;
pub mod host;
pub mod px;
pub mod slider;
pub mod snapper;

pub use animation::Tween;
pub use callback::CallbackWith;
pub use color::Color;
pub use config::SliderConfig;
pub use dp::Dp;
pub use error::SliderError;
pub use host::{SliderHost, ThumbId};
pub use px::{Px, PxPosition, PxSize};
pub use slider::{
    Canvas, ConnectingLine, LayoutInput, PointerEvent, PointerPhase, SliderWidget, TrackGeometry,
};
pub use snapper::{RangeSnapper, SnappedRange};
