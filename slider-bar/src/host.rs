//! Seams to the host toolkit.
//!
//! The slider does not own a view hierarchy, a renderer or an animation clock.
//! The host positions the thumb visuals, repaints on request and delivers
//! animation frames; [`SliderHost`] is everything the widget asks of it.

use crate::{animation::Tween, px::Px};

/// Identifies one of the two thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbId {
    /// The lower-bound thumb.
    Min,
    /// The upper-bound thumb.
    Max,
}

impl ThumbId {
    /// Both thumbs, min first.
    pub const ALL: [ThumbId; 2] = [ThumbId::Min, ThumbId::Max];

    /// The opposite thumb.
    pub fn other(self) -> ThumbId {
        match self {
            ThumbId::Min => ThumbId::Max,
            ThumbId::Max => ThumbId::Min,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ThumbId::Min => 0,
            ThumbId::Max => 1,
        }
    }
}

impl std::fmt::Display for ThumbId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThumbId::Min => f.write_str("min"),
            ThumbId::Max => f.write_str("max"),
        }
    }
}

/// Capabilities the host toolkit provides to a slider.
///
/// All calls happen on the UI thread, from inside the slider's event,
/// layout and frame handlers.
pub trait SliderHost {
    /// Current horizontal offset of a thumb visual, relative to the slider.
    ///
    /// Read once when the slider attaches, to adopt the inflated layout.
    fn position_of(&self, thumb: ThumbId) -> Px;

    /// Moves a thumb visual.
    fn set_position(&mut self, thumb: ThumbId, offset: Px);

    /// Raises a thumb visual above its sibling.
    fn bring_to_front(&mut self, thumb: ThumbId);

    /// Requests a repaint of the connecting line.
    fn request_redraw(&mut self);

    /// Starts delivering animation frames for `tween`.
    ///
    /// The host calls [`SliderWidget::on_animation_frame`] on every frame
    /// until it reports that no tween is running.
    ///
    /// [`SliderWidget::on_animation_frame`]: crate::SliderWidget::on_animation_frame
    fn schedule_tween(&mut self, thumb: ThumbId, tween: &Tween);

    /// Stops the frames scheduled for `thumb`.
    fn cancel_tween(&mut self, thumb: ThumbId);
}
