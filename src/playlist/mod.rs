//! M3U playlist parsing.
//!
//! XTREAM-style playlists interleave `#EXTINF` metadata lines with stream
//! URLs. Only entries carrying a `tvg-name` attribute and followed by a
//! playable URL make it into the parse result; everything else is counted
//! as skipped.

pub mod fetch;

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Extensions accepted as playable stream targets.
pub const VALID_MEDIA_EXTENSIONS: &[&str] =
    &[".mp4", ".mkv", ".avi", ".mov", ".wmv", ".flv", ".m4v"];

static TVG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"tvg-name="([^"]+)""#).expect("valid tvg-name pattern"));

/// One playable playlist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The `tvg-name` attribute value.
    pub name: String,
    /// The stream URL from the line following the `#EXTINF` line.
    pub url: String,
}

/// Result of parsing one playlist document.
#[derive(Debug, Default)]
pub struct Playlist {
    pub entries: Vec<Entry>,
    /// `#EXTINF` lines that had no usable name or stream URL.
    pub skipped: usize,
}

/// Parse an M3U document into playable entries.
pub fn parse(text: &str) -> Playlist {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut playlist = Playlist::default();

    for (i, line) in lines.iter().enumerate() {
        if !line.starts_with("#EXTINF") {
            continue;
        }

        let name = match TVG_NAME.captures(line).and_then(|c| c.get(1)) {
            Some(m) => m.as_str().to_string(),
            None => {
                warn!("No tvg-name attribute on line {}: {}", i + 1, line);
                playlist.skipped += 1;
                continue;
            }
        };

        let url = match lines.get(i + 1).copied().filter(|l| is_stream_url(l)) {
            Some(url) => url.to_string(),
            None => {
                warn!("No playable stream URL after line {}", i + 1);
                playlist.skipped += 1;
                continue;
            }
        };

        playlist.entries.push(Entry { name, url });
    }

    playlist
}

fn is_stream_url(line: &str) -> bool {
    line.contains("://")
        && VALID_MEDIA_EXTENSIONS
            .iter()
            .any(|ext| line.ends_with(ext))
}
