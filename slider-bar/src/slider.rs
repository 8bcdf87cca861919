//! A dual-thumb range slider that snaps to a discrete set of values.
//!
//! ## Usage
//!
//! The host feeds the slider layout passes, pointer events and animation
//! frames; the slider moves the thumb visuals through [`SliderHost`] and
//! reports the snapped `(min, max)` pair to its listener.
//!
//! ```
//! use std::time::Instant;
//!
//! use slider_bar::{
//!     Dp, LayoutInput, PointerEvent, PointerPhase, Px, PxPosition, PxSize, SliderConfig,
//!     SliderHost, SliderWidget, ThumbId, Tween,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     offsets: [Px; 2],
//! }
//!
//! impl SliderHost for Host {
//!     fn position_of(&self, thumb: ThumbId) -> Px {
//!         match thumb {
//!             ThumbId::Min => self.offsets[0],
//!             ThumbId::Max => self.offsets[1],
//!         }
//!     }
//!     fn set_position(&mut self, thumb: ThumbId, offset: Px) {
//!         match thumb {
//!             ThumbId::Min => self.offsets[0] = offset,
//!             ThumbId::Max => self.offsets[1] = offset,
//!         }
//!     }
//!     fn bring_to_front(&mut self, _thumb: ThumbId) {}
//!     fn request_redraw(&mut self) {}
//!     fn schedule_tween(&mut self, _thumb: ThumbId, _tween: &Tween) {}
//!     fn cancel_tween(&mut self, _thumb: ThumbId) {}
//! }
//!
//! let mut host = Host { offsets: [Px(0.0), Px(200.0)] };
//! let mut slider = SliderWidget::new(SliderConfig::default().with_thumb_size(Dp(10.0)))
//!     .expect("default range is valid");
//! slider.set_on_changed(|range| println!("{} - {}", range.min, range.max));
//!
//! let size = PxSize::new(Px(210.0), Px(40.0));
//! slider.on_layout(&mut host, LayoutInput::new(size, PxPosition::ZERO));
//! let now = Instant::now();
//! let at = |x: f32| PxPosition::new(Px(x), Px(20.0));
//! slider.handle_pointer(&mut host, PointerEvent::new(PointerPhase::Pressed, at(205.0), now));
//! slider.handle_pointer(&mut host, PointerEvent::new(PointerPhase::Moved, at(111.0), now));
//! assert_eq!(slider.thumb_offset(ThumbId::Max), Px(106.0));
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::{
    animation::Tween,
    callback::CallbackWith,
    color::Color,
    config::SliderConfig,
    error::SliderError,
    host::{SliderHost, ThumbId},
    px::{Px, PxPosition},
    snapper::{RangeSnapper, SnappedRange},
};

use interaction::Phase;

pub use interaction::{PointerEvent, PointerPhase};
pub use layout::{LayoutInput, TrackGeometry};
pub use render::{Canvas, ConnectingLine};

mod interaction;
mod layout;
mod render;

/// Offsets of both thumbs. `min <= max` holds between events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct ThumbOffsets {
    min: Px,
    max: Px,
}

impl ThumbOffsets {
    fn get(&self, thumb: ThumbId) -> Px {
        match thumb {
            ThumbId::Min => self.min,
            ThumbId::Max => self.max,
        }
    }

    fn set(&mut self, thumb: ThumbId, offset: Px) {
        match thumb {
            ThumbId::Min => self.min = offset,
            ThumbId::Max => self.max = offset,
        }
    }

    /// Clamps both offsets onto the track, keeping min below max.
    fn clamped(self, geometry: &TrackGeometry) -> Self {
        let min = geometry.clamp(self.min);
        let max = self.max.clamp(min, geometry.track_max());
        Self { min, max }
    }
}

/// A horizontal bar with a min and a max thumb.
///
/// See the [module documentation](self) for the event flow.
pub struct SliderWidget {
    snapper: RangeSnapper,
    thumb_size: Px,
    bar_height: Px,
    color: Color,
    settle_duration: Duration,
    geometry: Option<TrackGeometry>,
    origin: PxPosition,
    attached: bool,
    thumbs: ThumbOffsets,
    front: ThumbId,
    phase: Phase,
    tweens: [Option<Tween>; 2],
    on_changed: Option<CallbackWith<SnappedRange>>,
}

impl SliderWidget {
    /// Creates a slider from `config`.
    ///
    /// Fails when the allowed range is empty or unordered, or when the thumb
    /// size is not positive.
    pub fn new(config: SliderConfig) -> Result<Self, SliderError> {
        let snapper = config.snapper()?;
        let thumb_size = config.thumb_size.to_px();
        if !thumb_size.is_positive() {
            return Err(SliderError::InvalidThumbSize(config.thumb_size.0));
        }
        Ok(Self {
            snapper,
            thumb_size,
            bar_height: config.bar_height.to_px(),
            color: config.color,
            settle_duration: config.settle_duration(),
            geometry: None,
            origin: PxPosition::ZERO,
            attached: false,
            thumbs: ThumbOffsets::default(),
            front: ThumbId::Max,
            phase: Phase::Idle,
            tweens: [None, None],
            on_changed: None,
        })
    }

    /// Registers the change listener, replacing any previous one.
    pub fn set_on_changed<F>(&mut self, on_changed: F)
    where
        F: Fn(SnappedRange) + Send + Sync + 'static,
    {
        self.on_changed = Some(CallbackWith::new(on_changed));
    }

    /// Registers a shared change listener, replacing any previous one.
    pub fn set_on_changed_shared(&mut self, on_changed: impl Into<CallbackWith<SnappedRange>>) {
        self.on_changed = Some(on_changed.into());
    }

    /// Removes the change listener.
    pub fn clear_on_changed(&mut self) {
        self.on_changed = None;
    }

    /// Applies a layout pass.
    ///
    /// The first usable layout attaches the slider: thumb offsets are adopted
    /// from the host's views. Later passes keep the offsets and clamp them
    /// onto the new track. A layout too narrow for a track detaches the
    /// slider until the next usable pass.
    pub fn on_layout<H: SliderHost + ?Sized>(&mut self, host: &mut H, input: LayoutInput) {
        self.origin = input.origin;
        let Some(geometry) = TrackGeometry::new(input.size, self.thumb_size) else {
            if self.geometry.take().is_some() {
                debug!(
                    width = input.size.width.to_f32(),
                    "slider collapsed, deferring until next layout"
                );
                self.phase = Phase::Idle;
                for thumb in ThumbId::ALL {
                    self.cancel_tween(host, thumb);
                }
            }
            return;
        };

        let offsets = if self.attached {
            self.thumbs
        } else {
            self.attached = true;
            debug!(track_max = geometry.track_max().to_f32(), "slider attached");
            ThumbOffsets {
                min: host.position_of(ThumbId::Min),
                max: host.position_of(ThumbId::Max),
            }
        };
        self.geometry = Some(geometry);
        self.thumbs = offsets.clamped(&geometry);
        for thumb in ThumbId::ALL {
            host.set_position(thumb, self.thumbs.get(thumb));
        }
        host.request_redraw();
    }

    /// Advances the release animations to `now`.
    ///
    /// Returns `true` while at least one thumb is still settling.
    pub fn on_animation_frame<H: SliderHost + ?Sized>(
        &mut self,
        host: &mut H,
        now: Instant,
    ) -> bool {
        let Some(geometry) = self.geometry else {
            return false;
        };

        let mut moved = false;
        for thumb in ThumbId::ALL {
            let Some(tween) = self.tweens[thumb.index()] else {
                continue;
            };
            let offset = self.clamp_offset(&geometry, thumb, tween.sample(now));
            self.move_thumb(host, thumb, offset);
            moved = true;
            if tween.is_finished(now) {
                self.tweens[thumb.index()] = None;
            }
        }
        if moved {
            host.request_redraw();
        }
        self.tweens.iter().any(Option::is_some)
    }

    /// Snapped values for the current thumb offsets, or `None` before the
    /// first usable layout.
    pub fn snapped_range(&self) -> Option<SnappedRange> {
        self.geometry.map(|geometry| self.snap(&geometry))
    }

    /// Current offset of a thumb.
    pub fn thumb_offset(&self, thumb: ThumbId) -> Px {
        self.thumbs.get(thumb)
    }

    /// Track geometry of the last usable layout.
    pub fn geometry(&self) -> Option<TrackGeometry> {
        self.geometry
    }

    /// The snapper built from the configured range.
    pub fn snapper(&self) -> &RangeSnapper {
        &self.snapper
    }

    /// The thumb drawn on top.
    pub fn front_thumb(&self) -> ThumbId {
        self.front
    }

    /// Returns `true` while a gesture drags a thumb.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// The thumb being dragged, if any.
    pub fn dragged_thumb(&self) -> Option<ThumbId> {
        match self.phase {
            Phase::Dragging(session) => Some(session.thumb),
            Phase::Idle => None,
        }
    }

    /// Returns `true` while a thumb's release animation runs.
    pub fn is_settling(&self, thumb: ThumbId) -> bool {
        self.tweens[thumb.index()].is_some()
    }

    fn snap(&self, geometry: &TrackGeometry) -> SnappedRange {
        self.snapper.snap_pair(
            geometry.percent_of(self.thumbs.min),
            geometry.percent_of(self.thumbs.max),
        )
    }

    fn move_thumb<H: SliderHost + ?Sized>(&mut self, host: &mut H, thumb: ThumbId, offset: Px) {
        self.thumbs.set(thumb, offset);
        host.set_position(thumb, offset);
    }

    fn start_tween<H: SliderHost + ?Sized>(
        &mut self,
        host: &mut H,
        thumb: ThumbId,
        from: Px,
        to: Px,
        now: Instant,
    ) {
        self.cancel_tween(host, thumb);
        let tween = Tween::new(from, to, self.settle_duration, now);
        host.schedule_tween(thumb, &tween);
        self.tweens[thumb.index()] = Some(tween);
    }

    fn cancel_tween<H: SliderHost + ?Sized>(&mut self, host: &mut H, thumb: ThumbId) {
        if self.tweens[thumb.index()].take().is_some() {
            debug!(
                %thumb,
                offset = self.thumbs.get(thumb).to_f32(),
                "release animation cancelled"
            );
            host.cancel_tween(thumb);
        }
    }

    fn notify(&self, range: SnappedRange) {
        if let Some(on_changed) = &self.on_changed {
            on_changed.call(range);
        }
    }
}

impl std::fmt::Debug for SliderWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderWidget")
            .field("values", &self.snapper.values())
            .field("geometry", &self.geometry)
            .field("thumbs", &self.thumbs)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
