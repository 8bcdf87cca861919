use crate::{
    color::Color,
    px::{Px, PxPosition},
};

use super::SliderWidget;

/// The line joining the centres of both thumbs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectingLine {
    /// Centre of the min thumb.
    pub start: PxPosition,
    /// Centre of the max thumb.
    pub end: PxPosition,
    /// Stroke width.
    pub stroke_width: Px,
    /// Stroke color.
    pub color: Color,
}

/// Drawing surface provided by the host during a repaint.
pub trait Canvas {
    /// Strokes a straight line.
    fn draw_line(&mut self, line: &ConnectingLine);
}

impl SliderWidget {
    /// The connecting line for the current thumb offsets, or `None` while the
    /// slider has no layout.
    pub fn connecting_line(&self) -> Option<ConnectingLine> {
        let geometry = self.geometry?;
        Some(ConnectingLine {
            start: geometry.thumb_center(self.thumbs.min),
            end: geometry.thumb_center(self.thumbs.max),
            stroke_width: self.bar_height,
            color: self.color,
        })
    }

    /// Paints the slider. Thumb visuals are positioned by the host, so this
    /// only strokes the connecting line.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        if let Some(line) = self.connecting_line() {
            canvas.draw_line(&line);
        }
    }
}
