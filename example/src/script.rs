//! Pointer scripts for `replay`.
//!
//! ```toml
//! [[event]]
//! phase = "pressed"
//! x = 205.0
//!
//! [[event]]
//! phase = "moved"
//! x = 111.0
//! at_ms = 40
//!
//! [[event]]
//! phase = "released"
//! x = 111.0
//! ```
//!
//! `x`/`y` are absolute pointer coordinates; `y` defaults to the vertical
//! centre of the slider. `at_ms` is relative to the start of the script and
//! defaults to one frame after the previous event.

use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use slider_bar::PointerPhase;

use crate::app::FRAME_INTERVAL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptPhase {
    Pressed,
    Moved,
    Released,
}

impl From<ScriptPhase> for PointerPhase {
    fn from(phase: ScriptPhase) -> Self {
        match phase {
            ScriptPhase::Pressed => PointerPhase::Pressed,
            ScriptPhase::Moved => PointerPhase::Moved,
            ScriptPhase::Released => PointerPhase::Released,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptEvent {
    pub phase: ScriptPhase,
    pub x: f32,
    #[serde(default)]
    pub y: Option<f32>,
    #[serde(default)]
    pub at_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(rename = "event", default)]
    pub events: Vec<ScriptEvent>,
}

/// A script event with its resolved time offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: Option<f32>,
    pub at: Duration,
}

impl Script {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("failed to parse pointer script")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read pointer script `{}`", path.display()))?;
        Self::from_toml_str(&source)
    }

    /// Resolves event times. Explicit times must never go backwards.
    pub fn timeline(&self) -> Result<Vec<TimedEvent>> {
        let mut previous: Option<Duration> = None;
        let mut timeline = Vec::with_capacity(self.events.len());
        for (index, event) in self.events.iter().enumerate() {
            let at = match (event.at_ms, previous) {
                (Some(ms), _) => Duration::from_millis(ms),
                (None, Some(previous)) => previous + FRAME_INTERVAL,
                (None, None) => Duration::ZERO,
            };
            if let Some(previous) = previous {
                ensure!(
                    at >= previous,
                    "event {index} at {}ms happens before the previous event",
                    at.as_millis()
                );
            }
            previous = Some(at);
            timeline.push(TimedEvent {
                phase: event.phase.into(),
                x: event.x,
                y: event.y,
                at,
            });
        }
        Ok(timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_in_missing_times() {
        let script = Script::from_toml_str(
            r#"
                [[event]]
                phase = "pressed"
                x = 205.0

                [[event]]
                phase = "moved"
                x = 111.0
                at_ms = 40

                [[event]]
                phase = "released"
                x = 111.0
                y = 3.0
            "#,
        )
        .expect("valid script");

        let timeline = script.timeline().expect("ordered script");
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline[0].at, Duration::ZERO);
        assert_eq!(timeline[1].at, Duration::from_millis(40));
        assert_eq!(timeline[2].at, Duration::from_millis(40) + FRAME_INTERVAL);
        assert_eq!(timeline[2].phase, PointerPhase::Released);
        assert_eq!(timeline[2].y, Some(3.0));
    }

    #[test]
    fn rejects_time_travel_and_unknown_phases() {
        let script = Script::from_toml_str(
            r#"
                [[event]]
                phase = "pressed"
                x = 0.0
                at_ms = 50

                [[event]]
                phase = "moved"
                x = 1.0
                at_ms = 10
            "#,
        )
        .expect("valid script");
        assert!(script.timeline().is_err());

        assert!(Script::from_toml_str("[[event]]\nphase = \"hover\"\nx = 1.0").is_err());
    }

    #[test]
    fn empty_script_has_no_events() {
        let script = Script::from_toml_str("").expect("empty script");
        assert!(script.timeline().expect("nothing to order").is_empty());
    }
}
