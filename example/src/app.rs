use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::{Context, Result, bail};
use parking_lot::Mutex;
use slider_bar::{
    LayoutInput, PointerEvent, PointerPhase, Px, PxPosition, PxSize, SliderConfig, SliderWidget,
    SnappedRange, ThumbId,
};
use tracing::info;

use crate::{host::HeadlessHost, script::TimedEvent};

/// Interval between animation frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const MAX_SETTLE_FRAMES: usize = 1_000;

/// What the screen shows next to the slider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readout {
    pub text_min: String,
    pub text_max: String,
    pub changes: Vec<SnappedRange>,
}

pub struct App {
    slider: SliderWidget,
    host: HeadlessHost,
    readout: Arc<Mutex<Readout>>,
    size: PxSize,
    epoch: Instant,
    clock: Duration,
}

impl App {
    pub fn new(config: SliderConfig, size: PxSize) -> Result<Self> {
        let thumb_size = config.thumb_size.to_px();
        let mut slider = SliderWidget::new(config).context("invalid slider configuration")?;

        let readout = Arc::new(Mutex::new(Readout::default()));
        {
            let readout = Arc::clone(&readout);
            slider.set_on_changed(move |range| {
                let mut readout = readout.lock();
                readout.text_min = range.min.to_string();
                readout.text_max = range.max.to_string();
                readout.changes.push(range);
            });
        }

        let mut host = HeadlessHost::inflate(size.width, thumb_size);
        slider.on_layout(&mut host, LayoutInput::new(size, PxPosition::ZERO));
        if slider.geometry().is_none() {
            bail!(
                "a {}px wide slider leaves no room for {}px thumbs",
                size.width.to_f32(),
                thumb_size.to_f32()
            );
        }
        slider.draw(&mut host);

        Ok(Self {
            slider,
            host,
            readout,
            size,
            epoch: Instant::now(),
            clock: Duration::ZERO,
        })
    }

    pub fn slider(&self) -> &SliderWidget {
        &self.slider
    }

    pub fn host(&self) -> &HeadlessHost {
        &self.host
    }

    pub fn readout(&self) -> Readout {
        self.readout.lock().clone()
    }

    /// Delivers one pointer event at `at` on the app clock.
    pub fn dispatch(&mut self, phase: PointerPhase, x: f32, y: Option<f32>, at: Duration) -> bool {
        self.clock = self.clock.max(at);
        let y = y.map(Px).unwrap_or(self.size.height / 2.0);
        let event = PointerEvent::new(phase, PxPosition::new(Px(x), y), self.epoch + self.clock);
        let claimed = self.slider.handle_pointer(&mut self.host, event);
        if claimed {
            self.slider.draw(&mut self.host);
        }
        claimed
    }

    /// Runs animation frames until every thumb has settled. Returns the
    /// number of frames rendered.
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.host.is_animating() && frames < MAX_SETTLE_FRAMES {
            self.clock += FRAME_INTERVAL;
            frames += 1;
            if !self.slider.on_animation_frame(&mut self.host, self.epoch + self.clock) {
                self.host.animations_finished();
            }
            self.slider.draw(&mut self.host);
        }
        frames
    }

    /// Presses on `thumb`, drags it so that its offset becomes `to`, releases
    /// it and lets it settle.
    pub fn drag(&mut self, thumb: ThumbId, to: Px) -> Result<()> {
        let geometry = self
            .slider
            .geometry()
            .context("slider has not been laid out")?;
        // Press off-centre, towards the side the thumb can move to, so a
        // stacked pair resolves to the requested thumb.
        let grip = match thumb {
            ThumbId::Min => geometry.thumb_size() * 0.25,
            ThumbId::Max => geometry.thumb_size() * 0.75,
        };
        let press_x = (self.slider.thumb_offset(thumb) + grip).to_f32();
        let release_x = (to + grip).to_f32();

        let start = self.clock + FRAME_INTERVAL;
        if !self.dispatch(PointerPhase::Pressed, press_x, None, start) {
            bail!("press at {press_x}px did not land on a thumb");
        }
        if self.slider.dragged_thumb() != Some(thumb) {
            self.dispatch(PointerPhase::Released, press_x, None, start);
            self.settle();
            bail!("the {thumb} thumb is stacked under the other one and cannot be picked up");
        }
        self.dispatch(PointerPhase::Moved, release_x, None, start + FRAME_INTERVAL);
        self.dispatch(PointerPhase::Released, release_x, None, start + FRAME_INTERVAL * 2);
        let frames = self.settle();
        info!(%thumb, frames, "drag finished");
        Ok(())
    }

    /// Replays a resolved script, then settles. Returns how many events the
    /// slider claimed.
    pub fn replay(&mut self, timeline: &[TimedEvent]) -> usize {
        let base = self.clock + FRAME_INTERVAL;
        let claimed = timeline
            .iter()
            .filter(|event| self.dispatch(event.phase, event.x, event.y, base + event.at))
            .count();
        self.settle();
        claimed
    }
}

#[cfg(test)]
mod tests {
    use slider_bar::Dp;

    use super::*;

    fn app() -> App {
        App::new(
            SliderConfig::default().with_thumb_size(Dp(10.0)),
            PxSize::new(Px(210.0), Px(48.0)),
        )
        .expect("valid app")
    }

    #[test]
    fn drag_max_reports_and_settles() {
        let mut app = app();
        app.drag(ThumbId::Max, Px(106.0)).expect("drag");

        let readout = app.readout();
        assert_eq!(readout.changes, vec![SnappedRange::new(0, 55)]);
        assert_eq!(readout.text_min, "0");
        assert_eq!(readout.text_max, "55");
        assert_eq!(app.host().offset(ThumbId::Max), Px(110.0));
        assert!(!app.host().is_animating());
        assert_eq!(app.host().front(), ThumbId::Max);

        let line = app.host().last_line().expect("line drawn");
        assert_eq!(line.end, PxPosition::new(Px(115.0), Px(24.0)));
    }

    #[test]
    fn drag_min_past_max_reverts() {
        let mut app = app();
        app.drag(ThumbId::Min, Px(260.0)).expect("drag");

        assert_eq!(
            app.readout().changes,
            vec![SnappedRange::new(100, 100), SnappedRange::new(0, 100)]
        );
        assert_eq!(app.host().offset(ThumbId::Min), Px(0.0));
    }

    #[test]
    fn replay_counts_claimed_events() {
        let mut app = app();
        let timeline = [
            TimedEvent {
                phase: PointerPhase::Pressed,
                x: 100.0,
                y: None,
                at: Duration::ZERO,
            },
            TimedEvent {
                phase: PointerPhase::Pressed,
                x: 205.0,
                y: None,
                at: FRAME_INTERVAL,
            },
            TimedEvent {
                phase: PointerPhase::Moved,
                x: 165.0,
                y: None,
                at: FRAME_INTERVAL * 2,
            },
            TimedEvent {
                phase: PointerPhase::Released,
                x: 165.0,
                y: None,
                at: FRAME_INTERVAL * 3,
            },
        ];
        assert_eq!(app.replay(&timeline), 3);
        assert_eq!(app.readout().changes, vec![SnappedRange::new(0, 80)]);
        assert_eq!(app.slider().thumb_offset(ThumbId::Max), Px(160.0));
    }

    #[test]
    fn rejects_layouts_without_a_track() {
        let result = App::new(
            SliderConfig::default().with_thumb_size(Dp(10.0)),
            PxSize::new(Px(10.0), Px(48.0)),
        );
        assert!(result.is_err());
    }
}
