use crate::px::{Px, PxPosition, PxSize};

/// Layout pass input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutInput {
    /// Size assigned to the slider.
    pub size: PxSize,
    /// Absolute position of the slider's top-left corner, in the coordinate
    /// space of pointer events.
    pub origin: PxPosition,
}

impl LayoutInput {
    /// Creates a layout input.
    pub fn new(size: PxSize, origin: PxPosition) -> Self {
        Self { size, origin }
    }
}

/// Track geometry derived from a completed layout.
///
/// Thumb offsets are the left edges of the thumb visuals and range over
/// `[0, track_max]`, where `track_max = width - thumb_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    size: PxSize,
    thumb_size: Px,
}

impl TrackGeometry {
    /// Returns `None` while the slider is too narrow to hold a track, which
    /// is the case before the first layout pass.
    pub fn new(size: PxSize, thumb_size: Px) -> Option<Self> {
        if !(size.width - thumb_size).is_positive() {
            return None;
        }
        Some(Self { size, thumb_size })
    }

    /// Size of the slider.
    pub fn size(&self) -> PxSize {
        self.size
    }

    /// Edge length of a thumb.
    pub fn thumb_size(&self) -> Px {
        self.thumb_size
    }

    /// Largest thumb offset.
    pub fn track_max(&self) -> Px {
        self.size.width - self.thumb_size
    }

    /// Clamps an offset onto the track.
    pub fn clamp(&self, offset: Px) -> Px {
        offset.clamp(Px::ZERO, self.track_max())
    }

    /// Converts a thumb offset to a percentage of the track.
    pub fn percent_of(&self, offset: Px) -> f32 {
        offset.to_f32() * 100.0 / self.track_max().to_f32()
    }

    /// Offset at which a thumb shows `value` percent, clamped onto the track.
    pub fn offset_for_value(&self, value: i32) -> Px {
        self.clamp(Px(value as f32 * self.track_max().to_f32() / 100.0))
    }

    /// Vertical centre of the slider.
    pub fn center_y(&self) -> Px {
        self.size.height / 2.0
    }

    /// Centre of a thumb placed at `offset`.
    pub fn thumb_center(&self, offset: Px) -> PxPosition {
        PxPosition::new(offset + self.thumb_size / 2.0, self.center_y())
    }

    /// Returns `true` when the widget-local `point` lies on a thumb placed at
    /// `offset`.
    pub fn thumb_contains(&self, offset: Px, point: PxPosition) -> bool {
        point.x >= offset
            && point.x <= offset + self.thumb_size
            && point.y >= Px::ZERO
            && point.y <= self.size.height
    }
}
