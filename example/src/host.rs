use slider_bar::{Canvas, ConnectingLine, Px, SliderHost, ThumbId, Tween};
use tracing::trace;

/// Stand-in for a view hierarchy: remembers where each thumb visual sits,
/// which one is on top and which thumbs have frames scheduled.
#[derive(Debug)]
pub struct HeadlessHost {
    offsets: [Px; 2],
    /// Drawing order, back to front.
    z_order: [ThumbId; 2],
    animating: [bool; 2],
    redraws: usize,
    last_line: Option<ConnectingLine>,
}

fn slot(thumb: ThumbId) -> usize {
    match thumb {
        ThumbId::Min => 0,
        ThumbId::Max => 1,
    }
}

impl HeadlessHost {
    /// Inflates the thumb visuals: min at the start of the track, max at its
    /// end.
    pub fn inflate(width: Px, thumb_size: Px) -> Self {
        Self {
            offsets: [Px::ZERO, (width - thumb_size).max(Px::ZERO)],
            z_order: [ThumbId::Min, ThumbId::Max],
            animating: [false; 2],
            redraws: 0,
            last_line: None,
        }
    }

    pub fn offset(&self, thumb: ThumbId) -> Px {
        self.offsets[slot(thumb)]
    }

    pub fn front(&self) -> ThumbId {
        self.z_order[1]
    }

    pub fn is_animating(&self) -> bool {
        self.animating.iter().any(|&running| running)
    }

    /// Marks every tween as done once the widget reports it has settled.
    pub fn animations_finished(&mut self) {
        self.animating = [false; 2];
    }

    pub fn redraws(&self) -> usize {
        self.redraws
    }

    pub fn last_line(&self) -> Option<ConnectingLine> {
        self.last_line
    }
}

impl SliderHost for HeadlessHost {
    fn position_of(&self, thumb: ThumbId) -> Px {
        self.offset(thumb)
    }

    fn set_position(&mut self, thumb: ThumbId, offset: Px) {
        self.offsets[slot(thumb)] = offset;
    }

    fn bring_to_front(&mut self, thumb: ThumbId) {
        if self.front() != thumb {
            self.z_order.swap(0, 1);
        }
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn schedule_tween(&mut self, thumb: ThumbId, tween: &Tween) {
        trace!(%thumb, from = tween.from().to_f32(), to = tween.to().to_f32(), "tween scheduled");
        self.animating[slot(thumb)] = true;
    }

    fn cancel_tween(&mut self, thumb: ThumbId) {
        self.animating[slot(thumb)] = false;
    }
}

impl Canvas for HeadlessHost {
    fn draw_line(&mut self, line: &ConnectingLine) {
        self.last_line = Some(*line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inflates_thumbs_at_both_ends() {
        let host = HeadlessHost::inflate(Px(210.0), Px(10.0));
        assert_eq!(host.position_of(ThumbId::Min), Px(0.0));
        assert_eq!(host.position_of(ThumbId::Max), Px(200.0));
        assert_eq!(host.front(), ThumbId::Max);
    }

    #[test]
    fn bring_to_front_reorders_once() {
        let mut host = HeadlessHost::inflate(Px(210.0), Px(10.0));
        host.bring_to_front(ThumbId::Min);
        assert_eq!(host.front(), ThumbId::Min);
        host.bring_to_front(ThumbId::Min);
        assert_eq!(host.front(), ThumbId::Min);
        host.bring_to_front(ThumbId::Max);
        assert_eq!(host.front(), ThumbId::Max);
    }
}
