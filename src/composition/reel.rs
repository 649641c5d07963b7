use crate::{
    assets::fonts::{FontLoader, PreparedFonts},
    config::model::{MovieItem, ReelConfig},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    timeline::timing::SceneTiming,
};

/// A validated reel, ready for per-frame evaluation.
///
/// Holds the injected configuration, the frame-quantized timing derived from it, and the
/// registered font families. Immutable once built, so it can be shared across threads.
#[derive(Clone, Debug)]
pub struct Reel {
    config: ReelConfig,
    timing: SceneTiming,
    fonts: PreparedFonts,
}

impl Reel {
    /// Validate `config` and derive its timing.
    ///
    /// `fonts` must come from preparing `config.fonts`.
    pub fn new(config: ReelConfig, fonts: PreparedFonts) -> ReelResult<Self> {
        config.validate()?;
        if fonts.heading() != config.fonts.heading || fonts.caption() != config.fonts.caption {
            return Err(ReelError::validation(
                "prepared fonts do not match the config font set",
            ));
        }

        let timing = SceneTiming::from_secs(config.fps, &config.timing);
        timing.validate()?;

        tracing::debug!(
            items = config.movies.len(),
            title_frames = timing.title_frames,
            item_frames = timing.item_frames,
            transition_frames = timing.transition_frames,
            "reel timing derived"
        );
        Ok(Self {
            config,
            timing,
            fonts,
        })
    }

    /// Register `config.fonts` with `loader`, then build the reel.
    pub fn prepare(config: ReelConfig, loader: &mut dyn FontLoader) -> ReelResult<Self> {
        let fonts = config.fonts.prepare(loader)?;
        Self::new(config, fonts)
    }

    /// Source configuration.
    pub fn config(&self) -> &ReelConfig {
        &self.config
    }

    /// Frame-quantized scene lengths.
    pub fn timing(&self) -> SceneTiming {
        self.timing
    }

    /// Registered font families.
    pub fn fonts(&self) -> &PreparedFonts {
        &self.fonts
    }

    /// Ordered movie records.
    pub fn movies(&self) -> &[MovieItem] {
        &self.config.movies
    }

    /// Total length in frames.
    pub fn duration(&self) -> FrameIndex {
        self.timing.total_frames(self.config.movies.len())
    }

    /// `[0, duration)`.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange::with_len(FrameIndex(0), self.duration().0)
    }
}
