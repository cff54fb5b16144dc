//! Classification of playlist entries and `.strm` naming rules.
//!
//! Entry names follow the common IPTV convention of `Title (Year)` for
//! movies and `Title (Year) Sxx Eyy` for episodes. The year is optional
//! and may be a range for long-running shows.

mod writer;

pub use writer::LibraryWriter;

use std::sync::LazyLock;

use regex::Regex;

static EPISODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.*?)(?: \((\d{4}(?:-\d{4})?)\))? S(\d+) E(\d+)").expect("valid episode pattern")
});

static MOVIE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*?)(?: \((\d{4})\))?$").expect("valid movie pattern"));

/// Classified identity of one playlist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Movie {
        title: String,
        year: Option<String>,
    },
    Episode {
        title: String,
        year: Option<String>,
        /// Season number as written in the entry name, padding preserved.
        season: String,
        /// Episode number as written in the entry name, padding preserved.
        episode: String,
    },
}

/// Classify an entry name as an episode or a movie.
///
/// The episode pattern is tried first; anything else is a movie, with the
/// whole name as the title when no year suffix is present.
pub fn classify(name: &str) -> MediaKind {
    if let Some(caps) = EPISODE.captures(name) {
        MediaKind::Episode {
            title: caps[1].trim().to_string(),
            year: caps.get(2).map(|m| m.as_str().to_string()),
            season: caps[3].to_string(),
            episode: caps[4].to_string(),
        }
    } else if let Some(caps) = MOVIE.captures(name) {
        MediaKind::Movie {
            title: caps[1].trim().to_string(),
            year: caps.get(2).map(|m| m.as_str().to_string()),
        }
    } else {
        // The movie pattern matches any string, so this arm is unreachable.
        MediaKind::Movie {
            title: name.trim().to_string(),
            year: None,
        }
    }
}

impl MediaKind {
    pub fn is_episode(&self) -> bool {
        matches!(self, MediaKind::Episode { .. })
    }

    /// File name of this entry's `.strm` file.
    ///
    /// A missing year renders as `Unknown` so that re-releases with a year
    /// later produce a distinct file instead of replacing this one.
    pub fn strm_file_name(&self) -> String {
        let stem = match self {
            MediaKind::Movie { title, year } => {
                format!("{} {}", title, year.as_deref().unwrap_or("Unknown"))
            }
            MediaKind::Episode {
                title,
                year,
                season,
                episode,
            } => format!(
                "{} {} S{}E{}",
                title,
                year.as_deref().unwrap_or("Unknown"),
                season,
                episode
            ),
        };
        format!("{}.strm", sanitize_filename(&stem))
    }
}

/// Remove characters that are not valid in library file names.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !r#"\/*?:"<>|"#.contains(*c))
        .collect()
}
