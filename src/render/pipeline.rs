use rayon::prelude::*;

use crate::{
    composition::model::SceneTree,
    composition::reel::Reel,
    eval::evaluator::Evaluator,
    eval::fingerprint::{FrameFingerprint, fingerprint_tree},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
};

#[derive(Clone, Debug, Default)]
/// How a frame range is scheduled.
pub struct RenderThreading {
    /// Evaluate frames on a dedicated rayon pool.
    pub parallel: bool,
    /// Worker count for the pool; `None` uses rayon defaults. Must be >= 1 when set.
    pub threads: Option<usize>,
}

/// Evaluate every frame in `range`, returned in frame order.
pub fn render_frames(
    reel: &Reel,
    range: FrameRange,
    threading: &RenderThreading,
) -> ReelResult<Vec<SceneTree>> {
    map_frames(reel, range, threading, |reel, f| Evaluator::eval_frame(reel, f))
}

/// Fingerprint every frame in `range`, returned in frame order.
pub fn render_fingerprints(
    reel: &Reel,
    range: FrameRange,
    threading: &RenderThreading,
) -> ReelResult<Vec<FrameFingerprint>> {
    map_frames(reel, range, threading, |reel, f| {
        fingerprint_tree(&Evaluator::eval_frame(reel, f)?)
    })
}

fn map_frames<T, F>(
    reel: &Reel,
    range: FrameRange,
    threading: &RenderThreading,
    op: F,
) -> ReelResult<Vec<T>>
where
    T: Send,
    F: Fn(&Reel, FrameIndex) -> ReelResult<T> + Sync,
{
    let duration = reel.duration();
    if range.end.0 > duration.0 {
        return Err(ReelError::validation(format!(
            "render range end {} exceeds duration {}",
            range.end.0, duration.0
        )));
    }

    tracing::info!(
        start = range.start.0,
        end = range.end.0,
        parallel = threading.parallel,
        "rendering frame range"
    );

    if !threading.parallel {
        return (range.start.0..range.end.0)
            .map(|f| op(reel, FrameIndex(f)))
            .collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| op(reel, FrameIndex(f)))
            .collect()
    })
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
