//! The playlist-to-library sync pipeline.
//!
//! One run is: acquire the playlist (cache or download), parse it, write a
//! `.strm` file per playable entry, prune files whose entries are gone and
//! report what changed. A download failure aborts the run before anything
//! touches the library.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{info, warn};

use crate::config::PlaylistConfig;
use crate::library::{classify, LibraryWriter, MediaKind};
use crate::playlist::{self, fetch::PlaylistSource};

/// Inputs for one sync run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub movies_directory: PathBuf,
    pub tv_shows_directory: PathBuf,
    /// Decoded playlist URL.
    pub m3u_url: String,
}

/// What one sync run did.
#[derive(Debug, Default, Clone)]
pub struct SyncReport {
    pub movies: usize,
    pub episodes: usize,
    pub new_movies: usize,
    pub new_episodes: usize,
    pub skipped: usize,
    pub pruned: usize,
    pub elapsed: Duration,
}

/// Run one full playlist-to-library sync.
pub async fn run(options: &SyncOptions, playlist_config: &PlaylistConfig) -> Result<SyncReport> {
    let started = Instant::now();
    info!("Starting playlist sync from {}", options.m3u_url);

    let source = PlaylistSource::new(playlist_config);
    let text = source.acquire(&options.m3u_url).await?;

    let playlist = playlist::parse(&text);

    let mut writer = LibraryWriter::new(&options.movies_directory, &options.tv_shows_directory)?;
    let mut report = SyncReport {
        skipped: playlist.skipped,
        ..SyncReport::default()
    };

    for entry in &playlist.entries {
        let kind = classify(&entry.name);
        let created = match writer.write(&kind, &entry.url) {
            Ok(created) => created,
            Err(e) => {
                warn!("Failed to write entry '{}': {:#}", entry.name, e);
                false
            }
        };
        match kind {
            MediaKind::Episode { .. } => {
                report.episodes += 1;
                if created {
                    report.new_episodes += 1;
                }
            }
            MediaKind::Movie { .. } => {
                report.movies += 1;
                if created {
                    report.new_movies += 1;
                }
            }
        }
    }

    report.pruned = writer.prune();
    report.elapsed = started.elapsed();

    info!(
        "Sync complete: {} movies ({} new), {} episodes ({} new), {} skipped, {} pruned in {:.1?}",
        report.movies,
        report.new_movies,
        report.episodes,
        report.new_episodes,
        report.skipped,
        report.pruned,
        report.elapsed
    );
    Ok(report)
}
