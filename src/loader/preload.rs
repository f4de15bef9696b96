use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::{
    foundation::error::{ReelError, ReelResult},
    loader::lottie::LottieHeader,
    timeline::segments::SegmentTable,
};

/// One segment after its source has been fetched and decoded.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LoadedSegment {
    /// Source the segment was loaded from.
    pub source: String,
    /// Animation name, if the document declares one.
    pub name: Option<String>,
    /// Playable frame count.
    pub total_frames: u64,
    /// Native frame rate.
    pub fps: f64,
}

/// Fetches and decodes segment animations.
pub trait SegmentSource: Sync {
    /// Load the segment named by `source`.
    fn load(&self, source: &str) -> ReelResult<LoadedSegment>;
}

/// Loads Lottie JSON files relative to a root directory.
#[derive(Clone, Debug)]
pub struct FsSegmentSource {
    root: PathBuf,
}

impl FsSegmentSource {
    /// Source rooted at `root` (usually the manifest directory).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory used to resolve relative sources.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SegmentSource for FsSegmentSource {
    fn load(&self, source: &str) -> ReelResult<LoadedSegment> {
        if source.contains("://") {
            return Err(ReelError::load(format!(
                "'{source}' is a remote URL; fetch it and reference the local copy"
            )));
        }
        let path = self.root.join(source);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read segment '{}'", path.display()))?;
        let header = LottieHeader::from_slice(&bytes)
            .map_err(|e| ReelError::load(format!("decode segment '{source}': {e}")))?;
        Ok(LoadedSegment {
            source: source.to_string(),
            name: header.nm.clone(),
            total_frames: header.total_frames(),
            fps: header.fr,
        })
    }
}

/// Loading progress reported after each segment resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LoadProgress {
    /// Segments loaded so far.
    pub loaded: usize,
    /// Segments requested.
    pub total: usize,
}

impl LoadProgress {
    /// Percentage in `[0, 100]`.
    pub fn percent(self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.loaded as f64 / self.total as f64 * 100.0
    }
}

/// Every segment loaded, in manifest order, plus the frame table built from them.
#[derive(Clone, Debug)]
pub struct Preloaded {
    /// Loaded segments.
    pub segments: Vec<LoadedSegment>,
    /// Frame layout of the concatenated timeline.
    pub table: SegmentTable,
}

/// Load every segment in parallel and join once all have resolved.
///
/// `on_progress` runs on worker threads as each load completes. The first failure aborts the
/// join; no table exists unless every segment loaded.
#[tracing::instrument(skip(sources, source, on_progress), fields(segments = sources.len()))]
pub fn preload(
    sources: &[String],
    source: &dyn SegmentSource,
    threads: Option<usize>,
    on_progress: &(dyn Fn(LoadProgress) + Sync),
) -> ReelResult<Preloaded> {
    let pool = build_thread_pool(threads)?;
    let loaded = AtomicUsize::new(0);
    let total = sources.len();

    let segments = pool.install(|| {
        sources
            .par_iter()
            .map(|s| {
                let seg = source.load(s)?;
                let n = loaded.fetch_add(1, Ordering::SeqCst) + 1;
                tracing::debug!(source = %s, frames = seg.total_frames, "segment loaded");
                on_progress(LoadProgress { loaded: n, total });
                Ok(seg)
            })
            .collect::<ReelResult<Vec<_>>>()
    })?;

    let table = SegmentTable::from_frame_counts(segments.iter().map(|s| s.total_frames).collect())?;
    tracing::info!(total_frames = table.total_frames(), "all segments loaded");
    Ok(Preloaded { segments, table })
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "loader 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::load(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/loader/preload.rs"]
mod tests;
