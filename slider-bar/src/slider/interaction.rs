use std::time::Instant;

use tracing::{debug, trace};

use crate::{
    host::{SliderHost, ThumbId},
    px::{Px, PxPosition},
    snapper::SnappedRange,
};

use super::{SliderWidget, TrackGeometry};

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer went down.
    Pressed,
    /// The pointer moved while down.
    Moved,
    /// The pointer went up.
    Released,
}

/// A pointer event in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Event phase.
    pub phase: PointerPhase,
    /// Absolute pointer position.
    pub position: PxPosition,
    /// When the event happened.
    pub timestamp: Instant,
}

impl PointerEvent {
    /// Creates a pointer event.
    pub fn new(phase: PointerPhase, position: PxPosition, timestamp: Instant) -> Self {
        Self {
            phase,
            position,
            timestamp,
        }
    }
}

/// State of the gesture currently dragging a thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct DragSession {
    pub thumb: ThumbId,
    /// Thumb offset minus pointer x at press time.
    pub pointer_offset: Px,
    /// Thumb offset when the gesture started.
    pub last_settled_x: Px,
    /// Snapped value of the dragged thumb when the gesture started.
    pub last_value: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(super) enum Phase {
    #[default]
    Idle,
    Dragging(DragSession),
}

fn value_of(range: SnappedRange, thumb: ThumbId) -> i32 {
    match thumb {
        ThumbId::Min => range.min,
        ThumbId::Max => range.max,
    }
}

impl SliderWidget {
    /// Handles a pointer event and returns whether the slider claimed it.
    ///
    /// Only gestures that start on a thumb are claimed. While the slider has
    /// no layout every event is ignored.
    pub fn handle_pointer<H: SliderHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: PointerEvent,
    ) -> bool {
        let Some(geometry) = self.geometry else {
            trace!(phase = ?event.phase, "ignoring pointer event before layout");
            return false;
        };
        let local = event.position - self.origin;
        match event.phase {
            PointerPhase::Pressed => self.on_pressed(host, &geometry, local),
            PointerPhase::Moved => self.on_moved(host, &geometry, local),
            PointerPhase::Released => self.on_released(host, &geometry, event.timestamp),
        }
    }

    fn on_pressed<H: SliderHost + ?Sized>(
        &mut self,
        host: &mut H,
        geometry: &TrackGeometry,
        local: PxPosition,
    ) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(thumb) = self.hit_test(geometry, local) else {
            return false;
        };

        self.cancel_tween(host, thumb);

        let current = self.thumbs.get(thumb);
        let session = DragSession {
            thumb,
            pointer_offset: current - local.x,
            last_settled_x: current,
            last_value: value_of(self.snap(geometry), thumb),
        };

        host.bring_to_front(thumb);
        self.front = thumb;
        self.phase = Phase::Dragging(session);
        debug!(%thumb, offset = current.to_f32(), value = session.last_value, "drag started");
        true
    }

    fn on_moved<H: SliderHost + ?Sized>(
        &mut self,
        host: &mut H,
        geometry: &TrackGeometry,
        local: PxPosition,
    ) -> bool {
        let Phase::Dragging(session) = self.phase else {
            return false;
        };
        if !local.x.to_f32().is_finite() {
            trace!(thumb = %session.thumb, "ignoring non-finite pointer position");
            return true;
        }

        let candidate = local.x + session.pointer_offset;
        let offset = self.clamp_offset(geometry, session.thumb, candidate);
        self.move_thumb(host, session.thumb, offset);
        host.request_redraw();

        let range = self.snap(geometry);
        trace!(
            thumb = %session.thumb,
            offset = offset.to_f32(),
            min = range.min,
            max = range.max,
            "drag moved"
        );
        self.notify(range);
        true
    }

    fn on_released<H: SliderHost + ?Sized>(
        &mut self,
        host: &mut H,
        geometry: &TrackGeometry,
        now: Instant,
    ) -> bool {
        let Phase::Dragging(session) = std::mem::take(&mut self.phase) else {
            return false;
        };

        let thumb = session.thumb;
        let range = self.snap(geometry);
        let current = self.thumbs.get(thumb);

        if range.is_collapsed() {
            self.start_tween(host, thumb, current, session.last_settled_x, now);
            let reverted = match thumb {
                ThumbId::Min => SnappedRange::new(session.last_value, range.max),
                ThumbId::Max => SnappedRange::new(range.min, session.last_value),
            };
            debug!(
                %thumb,
                min = reverted.min,
                max = reverted.max,
                "thumbs collapsed, reverting drag"
            );
            self.notify(reverted);
        } else {
            let target = geometry.offset_for_value(value_of(range, thumb));
            debug!(
                %thumb,
                min = range.min,
                max = range.max,
                target = target.to_f32(),
                "drag released"
            );
            self.start_tween(host, thumb, current, target, now);
        }
        true
    }

    /// Finds the thumb under `local`.
    ///
    /// The front-most thumb wins. When both thumbs sit on the same offset the
    /// one that can move towards the pointer side is picked: at either end
    /// of the track only one of them can move at all.
    fn hit_test(&self, geometry: &TrackGeometry, local: PxPosition) -> Option<ThumbId> {
        let front = self.front;
        let back = front.other();
        let on_front = geometry.thumb_contains(self.thumbs.get(front), local);
        let on_back = geometry.thumb_contains(self.thumbs.get(back), local);
        if !on_front && !on_back {
            return None;
        }

        if self.thumbs.min == self.thumbs.max {
            let offset = self.thumbs.min;
            let thumb = if offset <= Px::ZERO {
                ThumbId::Max
            } else if offset >= geometry.track_max() {
                ThumbId::Min
            } else if local.x < geometry.thumb_center(offset).x {
                ThumbId::Min
            } else {
                ThumbId::Max
            };
            return Some(thumb);
        }

        Some(if on_front { front } else { back })
    }

    /// Clamps a candidate offset onto the track and against the other thumb.
    pub(super) fn clamp_offset(
        &self,
        geometry: &TrackGeometry,
        thumb: ThumbId,
        candidate: Px,
    ) -> Px {
        let offset = geometry.clamp(candidate);
        match thumb {
            ThumbId::Min => offset.min(self.thumbs.max),
            ThumbId::Max => offset.max(self.thumbs.min),
        }
    }
}
