use crate::foundation::{
    core::{Fps, FrameIndex, FrameRange},
    error::{ReelError, ReelResult},
};

/// Scene lengths in seconds, before conversion to frames.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingSecs {
    /// Title scene length.
    #[serde(default = "default_title_secs")]
    pub title_secs: f64,
    /// Length of every item scene.
    #[serde(default = "default_item_secs")]
    pub item_secs: f64,
    /// Fade-in window at the head of each item scene.
    #[serde(default = "default_transition_secs")]
    pub transition_secs: f64,
}

fn default_title_secs() -> f64 {
    2.5
}

fn default_item_secs() -> f64 {
    3.0
}

fn default_transition_secs() -> f64 {
    0.5
}

impl Default for TimingSecs {
    fn default() -> Self {
        Self {
            title_secs: default_title_secs(),
            item_secs: default_item_secs(),
            transition_secs: default_transition_secs(),
        }
    }
}

impl TimingSecs {
    /// Reject non-finite or non-positive durations.
    pub fn validate(&self) -> ReelResult<()> {
        for (name, v) in [
            ("title_secs", self.title_secs),
            ("item_secs", self.item_secs),
            ("transition_secs", self.transition_secs),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ReelError::validation(format!(
                    "timing {name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// Frame-quantized scene lengths for one frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneTiming {
    /// Title scene length in frames.
    pub title_frames: u64,
    /// Item scene length in frames; also the step between item starts.
    pub item_frames: u64,
    /// Item fade-in length in frames.
    ///
    /// Only drives the fade window. Item start offsets step by `item_frames` alone.
    pub transition_frames: u64,
}

impl SceneTiming {
    /// Quantize `secs` at `fps` with `floor(seconds * fps)`.
    pub fn from_secs(fps: Fps, secs: &TimingSecs) -> Self {
        Self {
            title_frames: fps.secs_to_frames_floor(secs.title_secs),
            item_frames: fps.secs_to_frames_floor(secs.item_secs),
            transition_frames: fps.secs_to_frames_floor(secs.transition_secs),
        }
    }

    /// Require every scene and window to span at least one frame.
    pub fn validate(&self) -> ReelResult<()> {
        for (name, v) in [
            ("title", self.title_frames),
            ("item", self.item_frames),
            ("transition", self.transition_frames),
        ] {
            if v == 0 {
                return Err(ReelError::validation(format!(
                    "{name} duration rounds down to 0 frames at this fps"
                )));
            }
        }
        Ok(())
    }

    /// `[0, title_frames)`.
    pub fn title_range(&self) -> FrameRange {
        FrameRange::with_len(FrameIndex(0), self.title_frames)
    }

    /// Start frame of item `index`.
    pub fn item_start(&self, index: usize) -> FrameIndex {
        let offset = (index as u64).saturating_mul(self.item_frames);
        FrameIndex(self.title_frames.saturating_add(offset))
    }

    /// `[item_start(index), item_start(index) + item_frames)`.
    pub fn item_range(&self, index: usize) -> FrameRange {
        FrameRange::with_len(self.item_start(index), self.item_frames)
    }

    /// Total composition length for `items` item scenes.
    pub fn total_frames(&self, items: usize) -> FrameIndex {
        self.item_start(items)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/timing.rs"]
mod tests;
